//! # geocsv-core
//!
//! Business seams and pure use cases of geocsv.

pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use geocsv_entities::{address::*, geo::*, id::*, record::*};
}
