use crate::commands::Action;
use crate::config::{DEFAULT_KEY_FILE, DEFAULT_RPC_URL};
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage:
\tgenerate-key: generate public and private key.
\tairdrop: process to the airdrop of registered address.
\tsend: send sol to an address.
\tbalance: display account balance.";

#[derive(Parser)]
#[command(name = "devnet-wallet")]
#[command(about = "Minimal Solana devnet wallet backed by a single key file")]
#[command(version)]
#[command(allow_external_subcommands = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Key file holding the base58-encoded secret key
    #[arg(long, global = true, env = "WALLET_KEYPAIR", default_value = DEFAULT_KEY_FILE)]
    pub keypair: PathBuf,

    /// RPC endpoint
    #[arg(long, global = true, env = "SOLANA_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub url: String,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Generate public and private key
    GenerateKey(Ignored),
    /// Request a devnet airdrop to the stored address
    Airdrop(Ignored),
    /// Send SOL to an address
    Send(Ignored),
    /// Display account balance
    Balance(Ignored),
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Words after the command token carry no meaning and are dropped.
#[derive(Args, Debug, PartialEq, Eq)]
pub struct Ignored {
    #[allow(dead_code)]
    #[arg(hide = true)]
    rest: Vec<String>,
}

impl Commands {
    pub fn action(&self) -> Option<Action> {
        match self {
            Commands::GenerateKey(_) => Some(Action::GenerateKey),
            Commands::Airdrop(_) => Some(Action::Airdrop),
            Commands::Send(_) => Some(Action::Send),
            Commands::Balance(_) => Some(Action::Balance),
            Commands::Unknown(_) => None,
        }
    }
}

/// What one process invocation should do.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run {
        action: Action,
        keypair: PathBuf,
        url: String,
    },
    Usage,
}

/// Maps the arguments to an action. Anything that is not a known command,
/// including malformed options, falls back to the usage summary; only
/// `--help` and `--version` are returned as errors for clap to print.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Err(err)
        }
        Err(err) => {
            log::debug!("Falling back to usage: {:?}", err.kind());
            return Ok(Invocation::Usage);
        }
    };

    match cli.command.as_ref().and_then(Commands::action) {
        Some(action) => Ok(Invocation::Run {
            action,
            keypair: cli.keypair,
            url: cli.url,
        }),
        None => {
            if let Some(Commands::Unknown(words)) = &cli.command {
                log::debug!("Unrecognised command {:?}", words);
            }
            Ok(Invocation::Usage)
        }
    }
}
