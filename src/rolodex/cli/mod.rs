//! # CLI Layer
//!
//! The interactive prompt. This is the only part of rolodex that reads stdin,
//! writes stdout or stderr, and decides exit codes.
//!
//! 1. **Flags**: clap parses `--home`, `--file` and `--verbose` ([`setup`])
//! 2. **Context**: resolve the data directory, load config, open the store
//! 3. **Session**: read lines, parse them ([`parse`]), dispatch to the API
//!    and print the result ([`render`]) until `exit`
//! 4. **Persistence**: the book is saved once when the session ends

mod parse;
mod render;
mod session;
mod setup;

use clap::Parser;
use rolodex::api::RolodexApi;
use rolodex::config::{resolve_home, RolodexConfig, HOME_ENV_VAR};
use rolodex::error::Result;
use rolodex::store::fs::FileStore;
use setup::Cli;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "ROLODEX_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut api = init_api(&cli)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session::run(&mut api, stdin.lock(), &mut stdout)
}

fn init_api(cli: &Cli) -> Result<RolodexApi<FileStore>> {
    let home = resolve_home(cli.home.clone(), std::env::var(HOME_ENV_VAR).ok())?;
    let config = RolodexConfig::load(&home)?;
    let data_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_path(&home));
    tracing::debug!(home = %home.display(), data = %data_path.display(), "Resolved paths");

    let api = RolodexApi::new(FileStore::new(data_path))?.with_upcoming_days(config.upcoming_days);
    Ok(api)
}

/// Logs go to stderr so the conversation on stdout stays clean.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
