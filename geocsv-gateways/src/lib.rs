//! # geocsv-gateways
//!
//! Gateway implementations for resolving addresses with external
//! geocoding services.

pub mod nominatim;
pub mod opencage;
