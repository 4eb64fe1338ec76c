//! Domain services

pub mod pricing;
