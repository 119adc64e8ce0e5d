use super::{acquire_keys, Context};
use crate::error::Result;
use crate::units::format_sol;

pub async fn execute(ctx: &mut Context<'_>) -> Result<()> {
    let keys = acquire_keys(ctx)?;
    let lamports = ctx.ledger.get_balance(&keys.address()).await?;

    writeln!(ctx.out, "Balance: {} SOL", format_sol(lamports))?;

    Ok(())
}
