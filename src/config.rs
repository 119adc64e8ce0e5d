use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_KEY_FILE: &str = "private-key.txt";
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Pause between airdrop confirmation and the balance re-query, so the
/// credited lamports are visible to the RPC node.
pub const AIRDROP_SETTLE_DELAY: Duration = Duration::from_millis(100);

pub fn create_rpc_client(url: &str) -> RpcClient {
    RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed())
}

fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

pub fn expand_path(path: &Path) -> PathBuf {
    expand_tilde(path)
}
