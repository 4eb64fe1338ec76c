//! Domain model types

pub mod extra;
pub mod quote;
pub mod vehicle;

pub use extra::Extra;
pub use quote::RentalQuote;
pub use vehicle::Vehicle;
