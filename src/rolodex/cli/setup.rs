use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version)]
#[command(about = "Address book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Directory holding the address book and config.json
    #[arg(long, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Address book file (overrides the configured data file)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
