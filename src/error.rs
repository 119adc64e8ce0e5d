use solana_client::client_error::ClientError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Failed to access key file {path}: {source}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key material: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("RPC error: {0}")]
    Network(String),
}

impl From<ClientError> for WalletError {
    fn from(err: ClientError) -> Self {
        WalletError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WalletError>;
