//! Error types for the draft analytics pipeline

use draft_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur while loading, aggregating or querying draft data
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("row {row}: required field `{field}` is missing")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: `{field}` has invalid value {value:?}")]
    InvalidValue { row: usize, field: &'static str, value: String },

    #[error("row {row}: round {round} is outside 0..=7")]
    InvalidRound { row: usize, round: i64 },

    #[error("cannot aggregate empty group `{key}`")]
    EmptyGroup { key: String },

    #[error("no seasons selected")]
    EmptySelection,

    #[error("unknown team abbreviation: {0}")]
    UnknownTeam(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type DraftResult<T> = Result<T, DraftError>;
