//! Access to the remote ledger.
//!
//! Actions only talk to the network through [`Ledger`], so they can be
//! exercised against an in-memory ledger in tests.

#[cfg(test)]
pub mod mock;

use crate::config::create_rpc_client;
use crate::error::Result;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};

#[async_trait]
pub trait Ledger: Send + Sync {
    /// Balance of `address` in lamports.
    async fn get_balance(&self, address: &Pubkey) -> Result<u64>;

    /// Asks the test faucet to credit `lamports` to `address`.
    async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> Result<Signature>;

    /// Waits until `signature` reaches the client's commitment level.
    async fn confirm_transaction(&self, signature: &Signature) -> Result<()>;

    async fn latest_blockhash(&self) -> Result<Hash>;

    /// Submits a signed transaction without waiting for confirmation.
    async fn submit_transaction(&self, transaction: &Transaction) -> Result<Signature>;
}

pub struct RpcLedger {
    rpc: RpcClient,
}

impl RpcLedger {
    pub fn connect(url: &str) -> Self {
        log::debug!("Using RPC endpoint {}", url);
        Self {
            rpc: create_rpc_client(url),
        }
    }
}

#[async_trait]
impl Ledger for RpcLedger {
    async fn get_balance(&self, address: &Pubkey) -> Result<u64> {
        let lamports = self.rpc.get_balance(address).await?;
        log::debug!("Balance of {}: {} lamports", address, lamports);
        Ok(lamports)
    }

    async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> Result<Signature> {
        log::info!("Requesting airdrop of {} lamports to {}", lamports, address);
        Ok(self.rpc.request_airdrop(address, lamports).await?)
    }

    async fn confirm_transaction(&self, signature: &Signature) -> Result<()> {
        log::debug!("Waiting for confirmation of {}", signature);
        self.rpc.poll_for_signature(signature).await?;
        Ok(())
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        Ok(self.rpc.get_latest_blockhash().await?)
    }

    async fn submit_transaction(&self, transaction: &Transaction) -> Result<Signature> {
        let signature = self.rpc.send_transaction(transaction).await?;
        log::info!("Submitted transaction {}", signature);
        Ok(signature)
    }
}
