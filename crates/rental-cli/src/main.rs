//! Rental Quote - vehicle rental cost calculator
//!
//! Prompts for a vehicle, a date range and extras, then prints the quote.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
