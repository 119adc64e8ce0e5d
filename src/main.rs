mod cli;
mod commands;
mod config;
mod error;
mod keystore;
mod ledger;
mod prompt;
mod units;

use anyhow::{Context as _, Result};
use cli::{parse_invocation, Invocation, USAGE};
use commands::Context;
use config::expand_path;
use keystore::KeyStore;
use ledger::RpcLedger;
use prompt::ConsolePrompt;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Usage,
    Completed,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Usage | Outcome::Completed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // RUST_LOG=info or RUST_LOG=debug for diagnostics on stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let outcome = run(std::env::args_os(), &mut std::io::stdout()).await?;
    Ok(outcome.into())
}

/// Parses `args` and either prints the usage summary or runs one action.
/// Nothing is touched on disk or over the network on the usage path.
async fn run<I, T, W>(args: I, out: &mut W) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let (action, keypair, url) = match parse_invocation(args) {
        Ok(Invocation::Run {
            action,
            keypair,
            url,
        }) => (action, keypair, url),
        Ok(Invocation::Usage) => {
            writeln!(out, "{}", USAGE).context("Failed to print usage")?;
            return Ok(Outcome::Usage);
        }
        Err(err) => err.exit(),
    };

    let keystore = KeyStore::new(expand_path(&keypair));
    let ledger = RpcLedger::connect(&url);
    let mut prompt = ConsolePrompt::stdio();

    let mut ctx = Context {
        keystore: &keystore,
        ledger: &ledger,
        prompt: &mut prompt,
        out,
    };

    match commands::invoke(action, &mut ctx).await {
        Ok(()) => Ok(Outcome::Completed),
        Err(err) => {
            commands::report(action, &err, &mut std::io::stderr());
            Ok(Outcome::Failed)
        }
    }
}
