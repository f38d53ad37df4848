use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conference assigned to any college missing from the conference table
pub const NON_POWER_CONFERENCE: &str = "Non-Power Conference";

/// Colour used for teams that have no entry in the colour table
pub const FALLBACK_TEAM_COLOR: &str = "#888888";

/// A franchise as the draft dataset refers to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    /// Dataset abbreviation (e.g., "NWE", "GNB")
    pub abbrev: String,

    /// Full franchise name (e.g., "New England Patriots")
    pub name: String,

    /// Primary colour as a hex string (e.g., "#002244")
    pub color: String,
}

impl TeamInfo {
    /// Create a new team entry
    pub fn new(abbrev: &str, name: &str, color: &str) -> Self {
        Self { abbrev: abbrev.to_string(), name: name.to_string(), color: color.to_string() }
    }
}

/// One row of the conference table. The source file names the college column `Team`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceRow {
    #[serde(rename = "Team")]
    pub college: String,

    #[serde(rename = "Conference")]
    pub conference: String,
}

/// Errors that can occur while building reference tables
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The conference file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The conference file is not valid CSV or is missing a column
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A conference row has an empty college or conference value
    #[error("conference row {row} has an empty {field}")]
    EmptyValue { row: usize, field: &'static str },
}
