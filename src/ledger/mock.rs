//! In-memory ledger that records every call for test verification.

use super::Ledger;
use crate::error::{Result, WalletError};
use async_trait::async_trait;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::sync::Mutex;

#[derive(Default)]
struct MockState {
    balance: u64,
    balance_queries: usize,
    airdrops: Vec<(Pubkey, u64)>,
    confirmations: Vec<Signature>,
    submitted: Vec<Transaction>,
}

/// A single-account ledger. Airdrops credit the balance immediately and
/// confirmations resolve at once.
#[derive(Default)]
pub struct MockLedger {
    state: Mutex<MockState>,
    fail_balance: bool,
    fail_submit: bool,
}

impl MockLedger {
    pub fn with_balance(lamports: u64) -> Self {
        let ledger = Self::default();
        ledger.state.lock().unwrap().balance = lamports;
        ledger
    }

    pub fn failing_balance() -> Self {
        Self {
            fail_balance: true,
            ..Self::default()
        }
    }

    pub fn failing_submit(lamports: u64) -> Self {
        let ledger = Self {
            fail_submit: true,
            ..Self::default()
        };
        ledger.state.lock().unwrap().balance = lamports;
        ledger
    }

    pub fn balance_queries(&self) -> usize {
        self.state.lock().unwrap().balance_queries
    }

    pub fn airdrops(&self) -> Vec<(Pubkey, u64)> {
        self.state.lock().unwrap().airdrops.clone()
    }

    pub fn confirmations(&self) -> Vec<Signature> {
        self.state.lock().unwrap().confirmations.clone()
    }

    pub fn submitted(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().submitted.clone()
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn get_balance(&self, _address: &Pubkey) -> Result<u64> {
        if self.fail_balance {
            return Err(WalletError::Network("connection refused".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        state.balance_queries += 1;
        Ok(state.balance)
    }

    async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> Result<Signature> {
        let mut state = self.state.lock().unwrap();
        state.airdrops.push((*address, lamports));
        state.balance += lamports;
        Ok(Signature::from([state.airdrops.len() as u8; 64]))
    }

    async fn confirm_transaction(&self, signature: &Signature) -> Result<()> {
        self.state.lock().unwrap().confirmations.push(*signature);
        Ok(())
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        Ok(Hash::new_from_array([3u8; 32]))
    }

    async fn submit_transaction(&self, transaction: &Transaction) -> Result<Signature> {
        if self.fail_submit {
            return Err(WalletError::Network("insufficient funds for fee".to_string()));
        }
        self.state.lock().unwrap().submitted.push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}
