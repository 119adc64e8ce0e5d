use super::{acquire_keys, Context};
use crate::error::{Result, WalletError};
use crate::units::{format_sol, parse_sol};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::instruction as system_instruction;
use std::str::FromStr;

/// Operator-supplied transfer, validated before anything is signed.
#[derive(Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub recipient: Pubkey,
    pub lamports: u64,
}

impl TransferRequest {
    pub fn parse(recipient: &str, amount: &str) -> Result<Self> {
        let lamports = parse_sol(amount)?;
        let recipient = Pubkey::from_str(recipient.trim()).map_err(|_| {
            WalletError::Validation(format!("'{}' is not a valid address", recipient.trim()))
        })?;
        Ok(Self {
            recipient,
            lamports,
        })
    }

    pub fn into_transaction(self, payer: &Keypair, recent_blockhash: Hash) -> Transaction {
        let transfer_ix =
            system_instruction::transfer(&payer.pubkey(), &self.recipient, self.lamports);
        Transaction::new_signed_with_payer(
            &[transfer_ix],
            Some(&payer.pubkey()),
            &[payer],
            recent_blockhash,
        )
    }
}

pub async fn execute(ctx: &mut Context<'_>) -> Result<()> {
    let keys = acquire_keys(ctx)?;

    // Shown for reference only; the ledger rejects transfers it cannot fund.
    let balance = ctx.ledger.get_balance(&keys.address()).await?;
    writeln!(ctx.out, "Balance: {} SOL", format_sol(balance))?;

    let recipient = ctx.prompt.ask("Enter the receiver address: ").await?;
    let amount = ctx.prompt.ask("Enter the amount of SOL to send: ").await?;
    let request = TransferRequest::parse(&recipient, &amount)?;

    log::info!(
        "Transferring {} lamports from {} to {}",
        request.lamports,
        keys.address(),
        request.recipient
    );

    let recent_blockhash = ctx.ledger.latest_blockhash().await?;
    let transaction = request.into_transaction(&keys.keypair, recent_blockhash);
    let signature = ctx.ledger.submit_transaction(&transaction).await?;

    writeln!(ctx.out, "Transfer successful!")?;
    writeln!(ctx.out, "Transaction hash: {}", signature)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{known_keypair, known_keystore, output};
    use super::*;
    use crate::ledger::mock::MockLedger;
    use crate::prompt::scripted::ScriptedPrompt;

    const RECIPIENT: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";

    async fn send_with(
        ledger: &MockLedger,
        answers: &[&str],
    ) -> (Result<()>, String, ScriptedPrompt) {
        let (_dir, keystore) = known_keystore();
        let mut prompt = ScriptedPrompt::new(answers);
        let mut out = Vec::new();
        let result = {
            let mut ctx = Context {
                keystore: &keystore,
                ledger,
                prompt: &mut prompt,
                out: &mut out,
            };
            execute(&mut ctx).await
        };
        (result, output(&out), prompt)
    }

    #[tokio::test]
    async fn submits_one_signed_transfer() {
        let ledger = MockLedger::with_balance(3_000_000_000);

        let (result, out, prompt) = send_with(&ledger, &[RECIPIENT, "1.5"]).await;
        result.unwrap();

        assert_eq!(
            prompt.questions,
            vec!["Enter the receiver address: ", "Enter the amount of SOL to send: "]
        );
        assert!(out.contains("Balance: 3 SOL\n"));

        let submitted = ledger.submitted();
        assert_eq!(submitted.len(), 1);
        let tx = &submitted[0];
        tx.verify().unwrap();
        assert_eq!(tx.message.account_keys[0], known_keypair().pubkey());
        assert_eq!(tx.message.account_keys[1], Pubkey::from_str(RECIPIENT).unwrap());
        assert!(out.contains(&format!("Transaction hash: {}\n", tx.signatures[0])));
    }

    #[tokio::test]
    async fn non_numeric_amount_submits_nothing() {
        let ledger = MockLedger::with_balance(3_000_000_000);

        let (result, out, _) = send_with(&ledger, &[RECIPIENT, "abc"]).await;

        assert!(matches!(result, Err(WalletError::Validation(_))));
        assert!(ledger.submitted().is_empty());
        assert!(!out.contains("Transfer successful"));
    }

    #[tokio::test]
    async fn invalid_amounts_never_reach_the_ledger() {
        for amount in ["", "-2", "NaN", "inf", "1,5", "ten"] {
            let ledger = MockLedger::with_balance(3_000_000_000);
            let (result, _, _) = send_with(&ledger, &[RECIPIENT, amount]).await;
            assert!(matches!(result, Err(WalletError::Validation(_))), "{:?}", amount);
            assert!(ledger.submitted().is_empty(), "{:?}", amount);
        }
    }

    #[tokio::test]
    async fn invalid_recipient_is_rejected() {
        let ledger = MockLedger::with_balance(3_000_000_000);

        let (result, _, _) = send_with(&ledger, &["not-an-address", "1"]).await;

        assert!(matches!(result, Err(WalletError::Validation(_))));
        assert!(ledger.submitted().is_empty());
    }

    #[tokio::test]
    async fn balance_is_not_a_client_side_gate() {
        let ledger = MockLedger::with_balance(0);

        let (result, _, _) = send_with(&ledger, &[RECIPIENT, "5"]).await;

        result.unwrap();
        assert_eq!(ledger.submitted().len(), 1);
    }

    #[tokio::test]
    async fn submission_failure_is_reported_once() {
        let ledger = MockLedger::failing_submit(3_000_000_000);

        let (result, out, _) = send_with(&ledger, &[RECIPIENT, "1"]).await;

        assert!(matches!(result, Err(WalletError::Network(_))));
        assert!(!out.contains("Transfer successful"));
    }

    #[test]
    fn request_parses_trimmed_address_and_amount() {
        let request = TransferRequest::parse(&format!(" {} ", RECIPIENT), "0.25").unwrap();
        assert_eq!(
            request,
            TransferRequest {
                recipient: Pubkey::from_str(RECIPIENT).unwrap(),
                lamports: 250_000_000,
            }
        );
    }
}
