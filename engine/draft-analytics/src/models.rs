use serde::{Deserialize, Serialize};
use std::fmt;

/// Read an optional numeric as zero when absent.
///
/// Only scoring, grading and summary arithmetic go through here; stored
/// records keep their `None` so displays can still show "N/A".
pub fn or_zero<T: Into<f64>>(value: Option<T>) -> f64 {
    value.map(Into::into).unwrap_or(0.0)
}

/// Render an optional numeric as a whole number, or "N/A" when absent
pub fn display_whole<T: Into<f64>>(value: Option<T>) -> String {
    match value {
        Some(v) => format!("{}", v.into().trunc() as i64),
        None => "N/A".to_string(),
    }
}

/// Career performance columns of a draft pick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Weighted career approximate value
    pub w_av: Option<f64>,
    /// First-team All-Pro selections
    pub allpro: Option<u32>,
    /// Pro Bowl selections
    pub probowls: Option<u32>,
    pub pass_yards: Option<f64>,
    pub pass_tds: Option<f64>,
    pub rush_yards: Option<f64>,
    pub rush_tds: Option<f64>,
    pub rec_yards: Option<f64>,
    pub rec_tds: Option<f64>,
    pub def_solo_tackles: Option<f64>,
    pub def_sacks: Option<f64>,
    pub def_ints: Option<f64>,
}

/// A validated draft pick, one per drafted player
///
/// `row` is the zero-based position of the record in the source file. That
/// order is canonical: every "first occurrence" tie-break in the pipeline
/// refers to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub row: usize,
    pub season: i32,
    /// 1-7 for drafted rounds, 0 for the supplemental marker
    pub round: Option<u8>,
    /// Overall pick number
    pub pick: Option<u32>,
    pub team: String,
    pub college: Option<String>,
    /// Raw position code (e.g., "OT", "DT", "K")
    pub position: String,
    pub player_name: String,
    pub games: Option<u32>,
    pub stats: PerformanceStats,
}

impl DraftPick {
    /// Round with a missing value read as the supplemental marker
    pub fn round_or_zero(&self) -> u8 {
        self.round.unwrap_or(0)
    }

    /// Whether the player was taken in a regular draft round
    pub fn is_drafted(&self) -> bool {
        self.round_or_zero() > 0
    }

    /// One line of chart hover text: `name: Pick N, Round N, W_AV N`
    pub fn hover_line(&self) -> String {
        format!(
            "{}: Pick {}, Round {}, W_AV {}",
            self.player_name,
            display_whole(self.pick),
            display_whole(self.round),
            display_whole(self.stats.w_av)
        )
    }
}

/// A draft pick with its position group and conference resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPick {
    #[serde(flatten)]
    pub pick: DraftPick,
    pub grouped_position: String,
    pub conference: String,
}

/// A normalized pick with its derived value metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPick {
    #[serde(flatten)]
    pub normalized: NormalizedPick,
    /// w_av plus weighted All-Pro and Pro Bowl selections
    pub impact_score: f64,
    /// w_av scaled up for later rounds
    pub context_value: f64,
    /// At least one All-Pro or Pro Bowl selection
    pub recognized: bool,
}

impl ScoredPick {
    pub fn pick(&self) -> &DraftPick {
        &self.normalized.pick
    }

    pub fn grouped_position(&self) -> &str {
        &self.normalized.grouped_position
    }

    pub fn conference(&self) -> &str {
        &self.normalized.conference
    }

    /// Check mark used in the recognition column
    pub fn recognition_mark(&self) -> &'static str {
        if self.recognized {
            "✓"
        } else {
            "✗"
        }
    }
}

/// Letter grade for a draft class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour band of a draft score
///
/// Defined by its own threshold table, independent of [`LetterGrade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeBucket {
    Good,
    Ok,
    Fair,
    Poor,
    Bad,
}

impl GradeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeBucket::Good => "good",
            GradeBucket::Ok => "ok",
            GradeBucket::Fair => "fair",
            GradeBucket::Poor => "poor",
            GradeBucket::Bad => "bad",
        }
    }

    /// Badge colour
    pub fn color(&self) -> &'static str {
        match self {
            GradeBucket::Good => "#4CAF50",
            GradeBucket::Ok => "#66BB6A",
            GradeBucket::Fair => "#FFB300",
            GradeBucket::Poor => "#FF9800",
            GradeBucket::Bad => "#B71C1C",
        }
    }
}

impl fmt::Display for GradeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draft grade of one team over a set of seasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftGrade {
    pub team: String,
    pub seasons: Vec<i32>,
    pub player_count: usize,
    /// Final score, always within [0, 100]
    pub score: f64,
    /// Score before clamping; may exceed 100
    pub raw_score: f64,
    pub letter: LetterGrade,
    pub bucket: GradeBucket,
}

impl DraftGrade {
    /// Badge text, e.g. `Draft Grade: B (71)`
    pub fn badge(&self) -> String {
        format!("Draft Grade: {} ({:.0})", self.letter, self.score)
    }
}
