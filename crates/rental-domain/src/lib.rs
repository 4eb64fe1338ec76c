//! Domain layer for rental-quote
//!
//! Vehicle and extra models, the static catalogs they are offered from,
//! and the pricing rules that turn a quote into a total.

pub mod catalog;
pub mod model;
pub mod service;

pub use catalog::{get_extra, get_vehicle, Catalog, EXTRAS, VEHICLES};
pub use model::*;
