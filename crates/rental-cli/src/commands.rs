//! Command handlers

use std::io;

use rental_app::{Answers, Config, QuoteSession};
use rental_types::Result;

use crate::cli::Cli;
use crate::logging::init_tracing;
use crate::output::output_summary;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::default().with_verbose(cli.verbose);
    init_tracing(&config);

    let answers = Answers {
        vehicle: cli.vehicle,
        start: cli.start,
        end: cli.end,
        extras: cli.extras,
    };

    cmd_quote(&config, answers)
}

fn cmd_quote(config: &Config, answers: Answers) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let quote = QuoteSession::new(config, stdin.lock(), stdout.lock()).run(answers)?;
    let total = quote.calculate_total();
    tracing::info!(vehicle = %quote.vehicle().name, days = quote.days(), %total, "quote ready");

    output_summary(&mut stdout.lock(), config, &quote, total)
}
