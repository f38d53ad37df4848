use crate::conferences::ConferenceMap;
use crate::positions::PositionGroups;
use crate::teams::TeamTable;
use crate::types::{RegistryError, TeamInfo};
use std::path::Path;
use tracing::info;

/// Reference Registry - read-only lookup tables for the draft pipeline
///
/// Built once at startup and passed by reference into every stage that
/// needs team, conference or position information.
#[derive(Debug, Clone, Default)]
pub struct ReferenceRegistry {
    teams: TeamTable,
    conferences: ConferenceMap,
    positions: PositionGroups,
}

impl ReferenceRegistry {
    /// Create a registry from explicit tables
    pub fn new(teams: TeamTable, conferences: ConferenceMap, positions: PositionGroups) -> Self {
        Self { teams, conferences, positions }
    }

    /// NFL teams and standard position groups with the given conference table
    pub fn with_conferences(conferences: ConferenceMap) -> Self {
        Self::new(TeamTable::nfl(), conferences, PositionGroups::standard())
    }

    /// Load the conference table from a CSV file
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, RegistryError> {
        let path = file_path.as_ref();
        info!("Loading conference table from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RegistryError::Io { path: path.display().to_string(), source: e })?;
        let registry = Self::from_reader(content.as_bytes(), &path.display().to_string())?;

        info!("Loaded {} college -> conference mappings", registry.conferences.len());
        Ok(registry)
    }

    /// Parse the conference table from any reader
    pub fn from_reader<R: std::io::Read>(rdr: R, source: &str) -> Result<Self, RegistryError> {
        let conferences = ConferenceMap::from_reader(rdr, source)?;
        Ok(Self::with_conferences(conferences))
    }

    /// Replace the position grouping
    pub fn with_positions(mut self, positions: PositionGroups) -> Self {
        self.positions = positions;
        self
    }

    /// Conference for a college, or the non-power sentinel
    pub fn conference<'a>(&'a self, college: Option<&str>) -> &'a str {
        self.conferences.resolve(college)
    }

    /// Grouped position for a raw position code
    pub fn grouped_position<'a>(&'a self, position: &'a str) -> &'a str {
        self.positions.group(position)
    }

    /// Team by abbreviation
    pub fn team(&self, abbrev: &str) -> Option<&TeamInfo> {
        self.teams.get(abbrev)
    }

    /// Whether a team abbreviation can be charted
    pub fn is_known_team(&self, abbrev: &str) -> bool {
        self.teams.contains(abbrev)
    }

    pub fn teams(&self) -> &TeamTable {
        &self.teams
    }

    pub fn conferences(&self) -> &ConferenceMap {
        &self.conferences
    }

    pub fn positions(&self) -> &PositionGroups {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NON_POWER_CONFERENCE;
    use std::io::Write;

    fn create_test_registry() -> ReferenceRegistry {
        ReferenceRegistry::with_conferences(ConferenceMap::from_pairs([
            ("Alabama", "SEC"),
            ("Michigan", "Big Ten"),
        ]))
    }

    #[test]
    fn test_registry_lookups() {
        let registry = create_test_registry();

        assert_eq!(registry.conference(Some("Michigan")), "Big Ten");
        assert_eq!(registry.conference(Some("Montana")), NON_POWER_CONFERENCE);
        assert_eq!(registry.grouped_position("OG"), "OL");
        assert_eq!(registry.grouped_position("QB"), "QB");
        assert_eq!(registry.team("BUF").map(|t| t.name.as_str()), Some("Buffalo Bills"));
        assert!(registry.is_known_team("SFO"));
        assert!(!registry.is_known_team("2TM"));
    }

    #[test]
    fn test_custom_positions() {
        let registry = create_test_registry().with_positions(PositionGroups::identity());
        assert_eq!(registry.grouped_position("OG"), "OG");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Team,Conference").unwrap();
        writeln!(file, "Georgia,SEC").unwrap();
        writeln!(file, "Oregon,Big Ten").unwrap();

        let registry = ReferenceRegistry::load_from_file(file.path()).await.unwrap();
        assert_eq!(registry.conferences().len(), 2);
        assert_eq!(registry.conference(Some("Georgia")), "SEC");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = ReferenceRegistry::load_from_file("/nonexistent/conferences.csv").await.unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }
}
