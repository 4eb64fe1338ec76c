//! Fixed vehicle and extra catalogs offered by the rental desk

use crate::model::{Extra, Vehicle};
use rental_types::Money;
use std::sync::LazyLock;

/// Read-only lookup table from short identifier to a priced entity.
///
/// Entries keep their declaration order so listings are stable.
#[derive(Debug)]
pub struct Catalog<T> {
    entries: Vec<(&'static str, T)>,
}

impl<T> Catalog<T> {
    pub fn new(entries: Vec<(&'static str, T)>) -> Self {
        Self { entries }
    }

    /// Look up an entry by identifier. Case and surrounding whitespace are ignored.
    pub fn get(&self, key: &str) -> Option<&T> {
        let key = normalize_key(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

/// Standard vehicle categories
pub static VEHICLES: LazyLock<Catalog<Vehicle>> = LazyLock::new(|| {
    Catalog::new(vec![
        ("compact", Vehicle::new("Compact", Money::from(50))),
        ("suv", Vehicle::new("SUV", Money::from(80))),
        ("van", Vehicle::new("Van", Money::from(100))),
    ])
});

/// Optional extras
pub static EXTRAS: LazyLock<Catalog<Extra>> = LazyLock::new(|| {
    Catalog::new(vec![
        ("gps", Extra::new("GPS", Money::from(5))),
        ("child_seat", Extra::new("Child Seat", Money::from(5))),
    ])
});

/// Canonical form of a user-supplied identifier
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Get vehicle by identifier
pub fn get_vehicle(key: &str) -> Option<&'static Vehicle> {
    VEHICLES.get(key)
}

/// Get extra by identifier
pub fn get_extra(key: &str) -> Option<&'static Extra> {
    EXTRAS.get(key)
}
