use crate::types::{ConferenceRow, RegistryError, NON_POWER_CONFERENCE};
use std::collections::HashMap;
use std::io::Read;
use tracing::warn;

/// College -> conference lookup
///
/// Lookups are exact and case-sensitive, matching the spelling of the
/// source table. Anything not found, including a missing college, resolves
/// to [`NON_POWER_CONFERENCE`].
#[derive(Debug, Clone, Default)]
pub struct ConferenceMap {
    by_college: HashMap<String, String>,
}

impl ConferenceMap {
    /// Create an empty map; every lookup resolves to the sentinel
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from (college, conference) pairs; later pairs replace earlier ones
    pub fn from_pairs<I, C, F>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, F)>,
        C: Into<String>,
        F: Into<String>,
    {
        let by_college = pairs.into_iter().map(|(college, conf)| (college.into(), conf.into())).collect();
        Self { by_college }
    }

    /// Parse a `Team,Conference` CSV table
    pub fn from_reader<R: Read>(rdr: R, source: &str) -> Result<Self, RegistryError> {
        let mut reader = csv::Reader::from_reader(rdr);
        let mut by_college = HashMap::new();

        for (row, result) in reader.deserialize::<ConferenceRow>().enumerate() {
            let entry = result
                .map_err(|e| RegistryError::Csv { path: source.to_string(), source: e })?;

            let ConferenceRow { college, conference } = entry;
            if college.trim().is_empty() {
                return Err(RegistryError::EmptyValue { row, field: "Team" });
            }
            if conference.trim().is_empty() {
                return Err(RegistryError::EmptyValue { row, field: "Conference" });
            }

            if let Some(previous) = by_college.insert(college.clone(), conference.clone()) {
                warn!(
                    "Duplicate conference row for {} ({} replaced by {})",
                    college, previous, conference
                );
            }
        }

        Ok(Self { by_college })
    }

    /// Resolve a college to its conference
    pub fn resolve(&self, college: Option<&str>) -> &str {
        college
            .filter(|c| !c.is_empty())
            .and_then(|c| self.by_college.get(c))
            .map(String::as_str)
            .unwrap_or(NON_POWER_CONFERENCE)
    }

    /// Number of mapped colleges
    pub fn len(&self) -> usize {
        self.by_college.len()
    }

    /// Check if no college is mapped
    pub fn is_empty(&self) -> bool {
        self.by_college.is_empty()
    }
}
