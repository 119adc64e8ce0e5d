pub mod airdrop;
pub mod balance;
pub mod generate_key;
pub mod send;

use crate::error::{Result, WalletError};
use crate::keystore::{KeyOrigin, KeyStore, LoadedKeys};
use crate::ledger::Ledger;
use crate::prompt::Prompt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GenerateKey,
    Airdrop,
    Send,
    Balance,
}

impl Action {
    fn failure_prefix(self) -> &'static str {
        match self {
            Action::Airdrop => "Airdrop failed",
            Action::GenerateKey | Action::Send | Action::Balance => "An error occurred",
        }
    }
}

/// Everything an action needs for one invocation. The prompt session is
/// owned by the invocation and released by [`invoke`].
pub struct Context<'a> {
    pub keystore: &'a KeyStore,
    pub ledger: &'a dyn Ledger,
    pub prompt: &'a mut dyn Prompt,
    pub out: &'a mut dyn Write,
}

/// Runs `action` to completion and closes the prompt session exactly once,
/// whether the action succeeded or not.
pub async fn invoke(action: Action, ctx: &mut Context<'_>) -> Result<()> {
    log::debug!("Running {:?}", action);
    let result = match action {
        Action::GenerateKey => generate_key::execute(ctx).await,
        Action::Airdrop => airdrop::execute(ctx).await,
        Action::Send => send::execute(ctx).await,
        Action::Balance => balance::execute(ctx).await,
    };
    ctx.prompt.close();
    result
}

/// Single reporting point for a failed action.
pub fn report(action: Action, err: &WalletError, out: &mut dyn Write) {
    log::error!("{:?} failed: {:?}", action, err);
    if writeln!(out, "{}: {}", action.failure_prefix(), err).is_err() {
        log::warn!("Could not write error report");
    }
}

/// Loads the key file, creating it on first use, and prints the address.
pub(crate) fn acquire_keys(ctx: &mut Context<'_>) -> Result<LoadedKeys> {
    let keys = ctx.keystore.load_or_create()?;
    match keys.origin {
        KeyOrigin::Generated => writeln!(ctx.out, "Generating keys...\n")?,
        KeyOrigin::Loaded => writeln!(ctx.out, "Loading keys...\n")?,
    }
    writeln!(ctx.out, "public-key: {}", keys.address())?;
    Ok(keys)
}
