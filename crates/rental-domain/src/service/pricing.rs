//! Rental pricing rules

use chrono::NaiveDate;
use rental_types::Money;

use crate::model::{Extra, Vehicle};

/// Number of billable days between two dates, both ends inclusive.
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Every extra is charged for the full rental, at the same day count as the vehicle.
pub fn calculate_total(days: i64, vehicle: &Vehicle, extras: &[&Extra]) -> Money {
    let days = Money::from(days);
    let base = days * vehicle.daily_rate;
    let extras_cost: Money = extras.iter().map(|extra| extra.price_per_day * days).sum();
    base + extras_cost
}
