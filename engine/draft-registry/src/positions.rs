use std::collections::HashMap;

/// Raw position -> grouped position
///
/// Grouping is total: codes without an entry pass through unchanged.
#[derive(Debug, Clone)]
pub struct PositionGroups {
    groups: HashMap<String, String>,
}

impl PositionGroups {
    /// Offensive line, special teams and interior defensive line groupings
    pub fn standard() -> Self {
        Self::from_pairs([
            ("OT", "OL"),
            ("OG", "OL"),
            ("C", "OL"),
            ("P", "ST"),
            ("K", "ST"),
            ("DT", "DL"),
        ])
    }

    /// No grouping at all; every code maps to itself
    pub fn identity() -> Self {
        Self { groups: HashMap::new() }
    }

    /// Build a grouping from (raw, grouped) pairs
    pub fn from_pairs<I, R, G>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, G)>,
        R: Into<String>,
        G: Into<String>,
    {
        let groups = pairs.into_iter().map(|(raw, grouped)| (raw.into(), grouped.into())).collect();
        Self { groups }
    }

    /// Group a raw position code
    pub fn group<'a>(&'a self, position: &'a str) -> &'a str {
        self.groups.get(position).map(String::as_str).unwrap_or(position)
    }

    /// Number of explicit groupings
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no grouping is defined
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for PositionGroups {
    fn default() -> Self {
        Self::standard()
    }
}
