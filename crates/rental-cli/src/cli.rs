//! CLI definition using clap

use clap::Parser;

#[derive(Parser)]
#[command(name = "rental-quote")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle rental cost calculator")]
#[command(long_about = None)]
pub struct Cli {
    /// Vehicle type (compact, suv, van). Prompts if not specified.
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Start date (YYYY-MM-DD). Prompts if not specified.
    #[arg(long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD). Prompts if not specified.
    #[arg(long)]
    pub end: Option<String>,

    /// Comma separated extras (e.g., "gps,child_seat"). Prompts if not specified.
    #[arg(long)]
    pub extras: Option<String>,

    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
