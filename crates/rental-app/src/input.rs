//! Parsing of raw answers into domain values

use chrono::NaiveDate;
use rental_domain::catalog::{get_extra, get_vehicle};
use rental_domain::{Extra, Vehicle};
use rental_types::{Error, Result};

/// Resolve a vehicle identifier against the catalog
pub fn parse_vehicle(input: &str) -> Result<&'static Vehicle> {
    get_vehicle(input).ok_or_else(|| Error::InvalidVehicleSelection(input.trim().to_string()))
}

/// Parse a calendar date answer. Only the line terminator is stripped.
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate> {
    let line = input.trim_end_matches(['\r', '\n']);
    NaiveDate::parse_from_str(line, format).map_err(|source| Error::InvalidDateFormat {
        input: line.to_string(),
        source,
    })
}

/// Parse a comma separated list of extra identifiers.
///
/// Blank entries and identifiers missing from the catalog are skipped.
pub fn parse_extras(input: &str) -> Vec<&'static Extra> {
    input
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .filter_map(|key| {
            let extra = get_extra(key);
            if extra.is_none() {
                tracing::debug!(key, "unknown extra ignored");
            }
            extra
        })
        .collect()
}
