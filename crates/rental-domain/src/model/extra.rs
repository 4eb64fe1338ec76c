//! Add-on item type definitions

use rental_types::Money;

/// Optional add-on billed per day for the whole rental
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    /// Display name
    pub name: String,
    /// Flat price per rental day
    pub price_per_day: Money,
}

impl Extra {
    pub fn new(name: impl Into<String>, price_per_day: Money) -> Self {
        Self {
            name: name.into(),
            price_per_day,
        }
    }
}
