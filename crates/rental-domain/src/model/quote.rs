//! Rental quote

use chrono::NaiveDate;
use rental_types::{Error, Money, Result};

use super::{Extra, Vehicle};
use crate::service::pricing;

/// A single-use quote binding a vehicle, a date range and extras.
///
/// Borrows vehicle and extras from the catalog. Can only be built for a
/// range whose end is not before its start, and is never modified afterwards.
#[derive(Debug, Clone)]
pub struct RentalQuote<'a> {
    vehicle: &'a Vehicle,
    start_date: NaiveDate,
    end_date: NaiveDate,
    extras: Vec<&'a Extra>,
}

impl<'a> RentalQuote<'a> {
    pub fn new(
        vehicle: &'a Vehicle,
        start_date: NaiveDate,
        end_date: NaiveDate,
        extras: Vec<&'a Extra>,
    ) -> Result<Self> {
        Self::check_period(start_date, end_date)?;

        Ok(Self {
            vehicle,
            start_date,
            end_date,
            extras,
        })
    }

    /// Reject a rental period that ends before it starts
    pub fn check_period(start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
        if end_date < start_date {
            return Err(Error::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(())
    }

    pub fn vehicle(&self) -> &'a Vehicle {
        self.vehicle
    }

    pub fn extras(&self) -> &[&'a Extra] {
        &self.extras
    }

    /// Billable days, counting both the start and end date
    pub fn days(&self) -> i64 {
        pricing::rental_days(self.start_date, self.end_date)
    }

    pub fn calculate_total(&self) -> Money {
        let total = pricing::calculate_total(self.days(), self.vehicle, &self.extras);
        tracing::debug!(days = self.days(), %total, "quote total computed");
        total
    }
}
