//! Single-file key custody.
//!
//! The key file holds the 64-byte Solana secret key (seed followed by the
//! public key) as base-58 text. It is created on first use and only ever read
//! afterwards.

use crate::error::{Result, WalletError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    Generated,
    Loaded,
}

pub struct LoadedKeys {
    pub keypair: Keypair,
    pub origin: KeyOrigin,
}

impl LoadedKeys {
    pub fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored keypair, generating and persisting a new one when
    /// the key file does not exist yet. An existing file is never rewritten.
    pub fn load_or_create(&self) -> Result<LoadedKeys> {
        if self.path.exists() {
            let keypair = self.load()?;
            Ok(LoadedKeys {
                keypair,
                origin: KeyOrigin::Loaded,
            })
        } else {
            let keypair = self.generate()?;
            Ok(LoadedKeys {
                keypair,
                origin: KeyOrigin::Generated,
            })
        }
    }

    fn load(&self) -> Result<Keypair> {
        let data = fs::read_to_string(&self.path).map_err(|source| WalletError::KeyFile {
            path: self.path.clone(),
            source,
        })?;
        let keypair = decode_secret(&data)?;
        log::info!("Loaded key {} from {}", keypair.pubkey(), self.path.display());
        Ok(keypair)
    }

    fn generate(&self) -> Result<Keypair> {
        let keypair = Keypair::new();
        self.persist(&encode_secret(&keypair))
            .map_err(|source| WalletError::KeyFile {
                path: self.path.clone(),
                source,
            })?;
        log::info!("Stored new key {} in {}", keypair.pubkey(), self.path.display());
        Ok(keypair)
    }

    /// Writes the whole encoding to a sibling temp file and moves it into
    /// place, so the key file is either complete or absent. An existing key
    /// file is never replaced.
    fn persist(&self, encoded: &str) -> std::io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(encoded.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist_noclobber(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

pub fn encode_secret(keypair: &Keypair) -> String {
    bs58::encode(keypair.to_bytes()).into_string()
}

/// Decodes base-58 key file content. Surrounding whitespace is ignored.
pub fn decode_secret(encoded: &str) -> Result<Keypair> {
    let bytes = bs58::decode(encoded.trim())
        .into_vec()
        .map_err(|e| WalletError::Decode(format!("key file is not valid base-58: {}", e)))?;

    if bytes.len() != 64 {
        return Err(WalletError::Decode(format!(
            "secret key must be 64 bytes, got {}",
            bytes.len()
        )));
    }

    Keypair::try_from(bytes.as_slice())
        .map_err(|_| WalletError::Decode("secret key does not match its public key".to_string()))
}
