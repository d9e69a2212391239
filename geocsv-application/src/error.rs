use std::io;
use thiserror::Error;

/// Fatal problems with the input table.
///
/// Any of these aborts the run before a single geocoding request is
/// issued or any output is written.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Input column '{0}' collides with a derived output column")]
    ReservedColumn(String),
    #[error("Record {0} has an empty id")]
    MissingId(usize),
    #[error("Duplicate id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
