//! Interactive quote session
//!
//! Walks the customer through vehicle, dates and extras in a fixed order and
//! produces a validated [`RentalQuote`]. Every failure ends the session; there
//! are no retries.

use std::io::{BufRead, Write};

use rental_domain::catalog::{EXTRAS, VEHICLES};
use rental_domain::RentalQuote;
use rental_types::{Error, Result};

use crate::config::Config;
use crate::input::{parse_date, parse_extras, parse_vehicle};

const VEHICLE_PROMPT: &str = "Choose vehicle type: ";
const START_PROMPT: &str = "Start date (YYYY-MM-DD): ";
const END_PROMPT: &str = "End date (YYYY-MM-DD): ";
const EXTRAS_PROMPT: &str = "Extras: ";

/// Answers supplied up front. A present answer replaces reading that prompt.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub vehicle: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub extras: Option<String>,
}

pub struct QuoteSession<'c, R, W> {
    config: &'c Config,
    input: R,
    output: W,
}

impl<'c, R: BufRead, W: Write> QuoteSession<'c, R, W> {
    pub fn new(config: &'c Config, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Run the prompts and build the quote
    pub fn run(&mut self, answers: Answers) -> Result<RentalQuote<'static>> {
        self.print_vehicles()?;
        let vehicle_key = self.ask(VEHICLE_PROMPT, answers.vehicle)?;
        let vehicle = parse_vehicle(&vehicle_key)?;
        tracing::debug!(vehicle = %vehicle.name, "vehicle selected");

        let start_raw = self.ask(START_PROMPT, answers.start)?;
        let end_raw = self.ask(END_PROMPT, answers.end)?;
        let start_date = parse_date(&start_raw, &self.config.date_format)?;
        let end_date = parse_date(&end_raw, &self.config.date_format)?;
        RentalQuote::check_period(start_date, end_date)?;
        tracing::debug!(%start_date, %end_date, "rental period accepted");

        self.print_extras()?;
        let extras_raw = self.ask(EXTRAS_PROMPT, answers.extras)?;
        let extras = parse_extras(&extras_raw);

        RentalQuote::new(vehicle, start_date, end_date, extras)
    }

    /// Write the prompt and return the answer line.
    ///
    /// A preset answer is echoed after the prompt instead of reading input.
    fn ask(&mut self, prompt: &str, preset: Option<String>) -> Result<String> {
        write!(self.output, "{}", prompt)?;

        if let Some(answer) = preset {
            writeln!(self.output, "{}", answer)?;
            return Ok(answer);
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed(prompt.trim_end_matches([' ', ':']).to_string()));
        }
        Ok(line)
    }

    fn print_vehicles(&mut self) -> Result<()> {
        let symbol = &self.config.currency_symbol;
        writeln!(self.output, "Available vehicles:")?;
        for (key, vehicle) in VEHICLES.iter() {
            writeln!(
                self.output,
                "  {}: {} ({}{}/day)",
                key, vehicle.name, symbol, vehicle.daily_rate
            )?;
        }
        Ok(())
    }

    fn print_extras(&mut self) -> Result<()> {
        let symbol = &self.config.currency_symbol;
        writeln!(
            self.output,
            "Optional extras (comma separated keys, blank for none):"
        )?;
        for (key, extra) in EXTRAS.iter() {
            writeln!(
                self.output,
                "  {}: {} ({}{}/day)",
                key, extra.name, symbol, extra.price_per_day
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_with(input: &str, answers: Answers) -> (Result<RentalQuote<'static>>, String) {
        let config = Config::default();
        let mut output = Vec::new();
        let result = QuoteSession::new(&config, Cursor::new(input.to_string()), &mut output)
            .run(answers);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_compact_no_extras() {
        let (result, _) = run_with("compact\n2024-01-01\n2024-01-03\n\n", Answers::default());
        let quote = result.unwrap();
        assert_eq!(quote.vehicle().name, "Compact");
        assert_eq!(quote.days(), 3);
        assert!(quote.extras().is_empty());
        assert_eq!(quote.calculate_total(), dec!(150));
    }

    #[test]
    fn test_vehicle_key_is_case_insensitive() {
        let (result, _) = run_with("  SuV \n2024-01-01\n2024-01-01\ngps\n", Answers::default());
        let quote = result.unwrap();
        assert_eq!(quote.vehicle().name, "SUV");
        assert_eq!(quote.calculate_total(), dec!(85));
    }

    #[test]
    fn test_unknown_extra_dropped() {
        let (result, _) = run_with(
            "compact\n2024-01-01\n2024-01-02\ngps,unknown_key\n",
            Answers::default(),
        );
        let quote = result.unwrap();
        assert_eq!(quote.extras().len(), 1);
        assert_eq!(quote.calculate_total(), dec!(110));
    }

    #[test]
    fn test_unknown_vehicle_stops_before_dates() {
        let (result, output) = run_with("bus\n2024-01-01\n2024-01-02\n\n", Answers::default());
        assert!(matches!(result, Err(Error::InvalidVehicleSelection(_))));
        assert!(!output.contains(START_PROMPT));
    }

    #[test]
    fn test_end_before_start() {
        let (result, output) = run_with("suv\n2024-01-05\n2024-01-01\n\n", Answers::default());
        assert!(matches!(result, Err(Error::InvalidDateRange { .. })));
        assert!(!output.contains("Optional extras"));
    }

    #[test]
    fn test_bad_start_date_reported_after_both_dates_read() {
        let (result, output) = run_with("van\n01/01/2024\n2024-01-02\n", Answers::default());
        assert!(matches!(result, Err(Error::InvalidDateFormat { ref input, .. }) if input == "01/01/2024"));
        assert!(output.contains(END_PROMPT));
    }

    #[test]
    fn test_input_closed() {
        let (result, _) = run_with("van\n2024-01-01\n", Answers::default());
        assert!(matches!(result, Err(Error::InputClosed(ref prompt)) if prompt == "End date (YYYY-MM-DD)"));
    }

    #[test]
    fn test_listings_printed_in_order() {
        let (_, output) = run_with("van\n2024-01-01\n2024-01-01\n\n", Answers::default());
        let compact = output.find("  compact: Compact ($50/day)").unwrap();
        let van = output.find("  van: Van ($100/day)").unwrap();
        let gps = output.find("  gps: GPS ($5/day)").unwrap();
        let seat = output.find("  child_seat: Child Seat ($5/day)").unwrap();
        assert!(compact < van && van < gps && gps < seat);
    }

    #[test]
    fn test_preset_answers_skip_reading() {
        let answers = Answers {
            vehicle: Some("van".to_string()),
            start: Some("2024-01-01".to_string()),
            end: Some("2024-01-05".to_string()),
            extras: Some("gps,child_seat".to_string()),
        };
        let (result, output) = run_with("", answers);
        let quote = result.unwrap();
        assert_eq!(quote.calculate_total(), dec!(550));
        assert!(output.contains("Choose vehicle type: van\n"));
    }

    #[test]
    fn test_partial_presets_read_the_rest() {
        let answers = Answers {
            vehicle: Some("compact".to_string()),
            ..Answers::default()
        };
        let (result, _) = run_with("2024-01-01\n2024-01-02\ngps\n", answers);
        assert_eq!(result.unwrap().calculate_total(), dec!(110));
    }
}
