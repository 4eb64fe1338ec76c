//! Output formatting module

use std::io::Write;

use rental_app::Config;
use rental_domain::RentalQuote;
use rental_types::{Money, Result};

/// Print the rental summary
pub fn output_summary<W: Write>(
    out: &mut W,
    config: &Config,
    quote: &RentalQuote<'_>,
    total: Money,
) -> Result<()> {
    let symbol = &config.currency_symbol;

    writeln!(out)?;
    writeln!(out, "Rental summary:")?;
    writeln!(out, "Vehicle: {}", quote.vehicle().name)?;
    writeln!(out, "Days: {}", quote.days())?;
    for extra in quote.extras() {
        writeln!(out, "Extra: {} ({}{}/day)", extra.name, symbol, extra.price_per_day)?;
    }
    writeln!(out, "Total cost: {}{:.2}", symbol, total.round_dp(2))?;

    out.flush()?;
    Ok(())
}
