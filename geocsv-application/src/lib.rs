#[macro_use]
extern crate log;

mod export;
mod import;
mod process;

pub mod prelude {
    pub use super::{export::*, import::*, process::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use geocsv_core::{entities, usecases};

#[cfg(test)]
pub(crate) mod tests;
