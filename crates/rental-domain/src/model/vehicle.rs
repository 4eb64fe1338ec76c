//! Vehicle type definitions

use rental_types::Money;

/// Rentable vehicle category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// Display name
    pub name: String,
    /// Price charged per rental day
    pub daily_rate: Money,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, daily_rate: Money) -> Self {
        Self {
            name: name.into(),
            daily_rate,
        }
    }
}
