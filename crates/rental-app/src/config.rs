//! Runtime configuration for rental-quote
//!
//! There is no config file. Defaults are overridden by command-line flags only.

/// Date format accepted for start and end dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Currency symbol printed in front of every amount
pub const CURRENCY_SYMBOL: &str = "$";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// chrono format string for date answers
    pub date_format: String,

    /// Prefix for rendered amounts
    pub currency_symbol: String,

    /// Emit debug logs on stderr
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: DATE_FORMAT.to_string(),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Log filter directive matching the verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
