//! Static franchise tables.
//!
//! The draft dataset uses Pro-Football-Reference style abbreviations, so the
//! Raiders appear under both `OAK` and `LVR`.

use crate::types::{TeamInfo, FALLBACK_TEAM_COLOR};
use std::collections::HashMap;

/// (abbreviation, full name, primary colour)
const TEAMS: &[(&str, &str, &str)] = &[
    ("ARI", "Arizona Cardinals", "#97233F"),
    ("ATL", "Atlanta Falcons", "#A71930"),
    ("BAL", "Baltimore Ravens", "#241773"),
    ("BUF", "Buffalo Bills", "#00338D"),
    ("CAR", "Carolina Panthers", "#0085CA"),
    ("CHI", "Chicago Bears", "#C83803"),
    ("CIN", "Cincinnati Bengals", "#FB4F14"),
    ("CLE", "Cleveland Browns", "#FF3C00"),
    ("DAL", "Dallas Cowboys", "#003594"),
    ("DEN", "Denver Broncos", "#FB4F14"),
    ("DET", "Detroit Lions", "#0076B6"),
    ("GNB", "Green Bay Packers", "#203731"),
    ("HOU", "Houston Texans", "#03202F"),
    ("IND", "Indianapolis Colts", "#002C5F"),
    ("JAX", "Jacksonville Jaguars", "#006778"),
    ("KAN", "Kansas City Chiefs", "#E31837"),
    ("LAC", "Los Angeles Chargers", "#0080C6"),
    ("LAR", "Los Angeles Rams", "#003594"),
    ("MIA", "Miami Dolphins", "#008E97"),
    ("MIN", "Minnesota Vikings", "#4F2683"),
    ("NWE", "New England Patriots", "#002244"),
    ("NOR", "New Orleans Saints", "#D3BC8D"),
    ("NYG", "New York Giants", "#0B2265"),
    ("NYJ", "New York Jets", "#125740"),
    ("OAK", "Oakland Raiders", "#A5ACAF"),
    ("LVR", "Las Vegas Raiders", "#000000"),
    ("PHI", "Philadelphia Eagles", "#004C54"),
    ("PIT", "Pittsburgh Steelers", "#FFB612"),
    ("SEA", "Seattle Seahawks", "#69BE28"),
    ("SFO", "San Francisco 49ers", "#AA0000"),
    ("TAM", "Tampa Bay Buccaneers", "#D50A0A"),
    ("TEN", "Tennessee Titans", "#4B92DB"),
    ("WAS", "Washington Commanders", "#5A1414"),
];

/// Abbreviation -> franchise lookup
#[derive(Debug, Clone)]
pub struct TeamTable {
    teams: HashMap<String, TeamInfo>,
}

impl TeamTable {
    /// Build the table of every franchise the dataset knows about
    pub fn nfl() -> Self {
        Self::from_entries(TEAMS.iter().map(|(abbrev, name, color)| TeamInfo::new(abbrev, name, color)))
    }

    /// Build a table from arbitrary entries; later entries replace earlier ones
    pub fn from_entries<I: IntoIterator<Item = TeamInfo>>(entries: I) -> Self {
        let teams = entries.into_iter().map(|team| (team.abbrev.clone(), team)).collect();
        Self { teams }
    }

    /// Get a team by abbreviation
    pub fn get(&self, abbrev: &str) -> Option<&TeamInfo> {
        self.teams.get(abbrev)
    }

    /// Whether the abbreviation is chart-eligible
    pub fn contains(&self, abbrev: &str) -> bool {
        self.teams.contains_key(abbrev)
    }

    /// Full name, if known
    pub fn name(&self, abbrev: &str) -> Option<&str> {
        self.teams.get(abbrev).map(|team| team.name.as_str())
    }

    /// Team colour, falling back to a neutral grey
    pub fn color(&self, abbrev: &str) -> &str {
        self.teams.get(abbrev).map(|team| team.color.as_str()).unwrap_or(FALLBACK_TEAM_COLOR)
    }

    /// Teams from `present` that exist in the table, sorted by full name.
    ///
    /// This is the order of the team selector: only franchises that actually
    /// appear in the loaded dataset are offered.
    pub fn teams_in<'a, I>(&self, present: I) -> Vec<&TeamInfo>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found: Vec<&TeamInfo> = Vec::new();
        for abbrev in present {
            if let Some(team) = self.teams.get(abbrev) {
                if !found.iter().any(|t| t.abbrev == team.abbrev) {
                    found.push(team);
                }
            }
        }
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    /// Every franchise, sorted by full name
    pub fn all(&self) -> Vec<&TeamInfo> {
        let mut teams: Vec<&TeamInfo> = self.teams.values().collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        teams
    }

    /// Number of franchises in the table
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl Default for TeamTable {
    fn default() -> Self {
        Self::nfl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfl_table_has_both_raiders_codes() {
        let table = TeamTable::nfl();
        assert_eq!(table.len(), 33);
        assert_eq!(table.name("OAK"), Some("Oakland Raiders"));
        assert_eq!(table.name("LVR"), Some("Las Vegas Raiders"));
    }

    #[test]
    fn test_color_fallback() {
        let table = TeamTable::nfl();
        assert_eq!(table.color("NWE"), "#002244");
        assert_eq!(table.color("XYZ"), FALLBACK_TEAM_COLOR);
        assert!(!table.contains("XYZ"));
    }

    #[test]
    fn test_teams_in_sorted_by_name_and_deduplicated() {
        let table = TeamTable::nfl();
        let teams = table.teams_in(["NYJ", "ARI", "XYZ", "ARI", "BUF"]);
        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Arizona Cardinals", "Buffalo Bills", "New York Jets"]);
    }
}
