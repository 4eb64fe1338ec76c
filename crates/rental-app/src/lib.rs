//! Application service layer - config, input parsing, quote session

pub mod config;
pub mod input;
pub mod session;

pub use config::Config;
pub use session::{Answers, QuoteSession};
