use super::{acquire_keys, Context};
use crate::config::AIRDROP_SETTLE_DELAY;
use crate::error::Result;
use crate::units::{format_sol, parse_sol};

pub async fn execute(ctx: &mut Context<'_>) -> Result<()> {
    let keys = acquire_keys(ctx)?;
    let address = keys.address();

    let initial_balance = ctx.ledger.get_balance(&address).await?;
    writeln!(ctx.out, "Initial balance: {} SOL", format_sol(initial_balance))?;

    let answer = ctx.prompt.ask("How many SOL do you want: ").await?;
    let lamports = parse_sol(&answer)?;

    let signature = ctx.ledger.request_airdrop(&address, lamports).await?;
    ctx.ledger.confirm_transaction(&signature).await?;

    tokio::time::sleep(AIRDROP_SETTLE_DELAY).await;

    let new_balance = ctx.ledger.get_balance(&address).await?;
    writeln!(ctx.out, "New balance: {} SOL", format_sol(new_balance))?;
    writeln!(ctx.out, "Airdrop successful. Transaction signature: {}", signature)?;

    Ok(())
}
