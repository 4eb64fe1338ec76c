//! Core types for rental quoting

mod error;

pub use error::*;

use rust_decimal::Decimal;

/// Currency amount. All prices and totals use decimal arithmetic.
pub type Money = Decimal;
