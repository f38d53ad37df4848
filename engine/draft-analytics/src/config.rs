//! # Configuration Management
//!
//! Scoring weights, grading constants and data locations for the pipeline.

use crate::error::DraftError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for the draft analytics pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Source data locations
    pub data: DataConfig,
    /// Impact scoring weights
    pub scoring: ScoringConfig,
    /// Draft grade constants
    pub grading: GradingConfig,
    /// Report sizing
    pub report: ReportConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Source data locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Draft picks CSV
    pub draft_picks_path: PathBuf,
    /// College -> conference CSV
    pub conferences_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            draft_picks_path: PathBuf::from("draft_picks.csv"),
            conferences_path: PathBuf::from("conferences.csv"),
        }
    }
}

/// Impact scoring weights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per All-Pro selection
    pub allpro_weight: f64,
    /// Points per Pro Bowl selection
    pub probowl_weight: f64,
    /// Context value multiplier is `1 + round / round_context_divisor`
    pub round_context_divisor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { allpro_weight: 5.0, probowl_weight: 2.0, round_context_divisor: 10.0 }
    }
}

/// Draft grade constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Most recent complete season; recency is measured from here
    pub reference_year: i32,
    /// Recency scale is `recency_numerator / years_since_draft`
    pub recency_numerator: f64,
    /// Upper bound on the recency scale
    pub max_recency_scale: f64,
    /// Impact per player that earns a raw score of 100
    pub impact_per_player: f64,
    /// Penalty per round of average draft position beyond the first
    pub round_penalty_divisor: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            reference_year: 2024,
            recency_numerator: 4.0,
            max_recency_scale: 2.0,
            impact_per_player: 15.0,
            round_penalty_divisor: 20.0,
        }
    }
}

/// Report sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rows in the top colleges / top conferences rankings
    pub top_limit: usize,
    /// Rows in a team's top impact table
    pub team_top_players: usize,
    /// Last round included in the efficiency chart
    pub max_efficiency_round: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_limit: 15, team_top_players: 10, max_efficiency_round: 6 }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl AnalyticsConfig {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DraftError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DraftError::Io { path: path.display().to_string(), source: e })?;
        let config: AnalyticsConfig = toml::from_str(&content)
            .map_err(|e| DraftError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DraftError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| DraftError::Config(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| DraftError::Io { path: path.display().to_string(), source: e })?;
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(mut self) -> Result<Self, DraftError> {
        if let Ok(path) = std::env::var("DRAFT_PICKS_PATH") {
            self.data.draft_picks_path = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("DRAFT_CONFERENCES_PATH") {
            self.data.conferences_path = PathBuf::from(path);
        }

        if let Ok(year) = std::env::var("DRAFT_REFERENCE_YEAR") {
            self.grading.reference_year = year
                .parse()
                .map_err(|_| DraftError::Config(format!("DRAFT_REFERENCE_YEAR is not a year: {year}")))?;
        }

        if let Ok(level) = std::env::var("DRAFT_LOG_LEVEL") {
            self.logging.level = level;
        }

        self.validate()?;
        Ok(self)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self, DraftError> {
        Self::default().with_env_overrides()
    }

    /// Reject constants that would make scoring or grading meaningless
    pub fn validate(&self) -> Result<(), DraftError> {
        let positive = [
            ("scoring.round_context_divisor", self.scoring.round_context_divisor),
            ("grading.recency_numerator", self.grading.recency_numerator),
            ("grading.max_recency_scale", self.grading.max_recency_scale),
            ("grading.impact_per_player", self.grading.impact_per_player),
            ("grading.round_penalty_divisor", self.grading.round_penalty_divisor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(DraftError::Config(format!("{name} must be positive, got {value}")));
            }
        }

        let weights = [
            ("scoring.allpro_weight", self.scoring.allpro_weight),
            ("scoring.probowl_weight", self.scoring.probowl_weight),
        ];
        for (name, value) in weights {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DraftError::Config(format!("{name} must be non-negative, got {value}")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_constants() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.scoring.allpro_weight, 5.0);
        assert_eq!(config.scoring.probowl_weight, 2.0);
        assert_eq!(config.grading.reference_year, 2024);
        assert_eq!(config.grading.impact_per_player, 15.0);
        assert_eq!(config.report.top_limit, 15);
        assert_eq!(config.report.max_efficiency_round, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AnalyticsConfig = toml::from_str(
            r#"
            [grading]
            reference_year = 2023

            [logging]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.grading.reference_year, 2023);
        assert_eq!(config.grading.max_recency_scale, 2.0);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.data.draft_picks_path, PathBuf::from("draft_picks.csv"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.toml");

        let mut config = AnalyticsConfig::default();
        config.grading.reference_year = 2022;
        config.save_to_file(&path).unwrap();

        let loaded = AnalyticsConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.grading.reference_year, 2022);
    }

    #[test]
    fn test_validate_rejects_zero_divisor() {
        let mut config = AnalyticsConfig::default();
        config.grading.impact_per_player = 0.0;
        assert!(matches!(config.validate(), Err(DraftError::Config(_))));

        let mut config = AnalyticsConfig::default();
        config.scoring.allpro_weight = -1.0;
        assert!(matches!(config.validate(), Err(DraftError::Config(_))));
    }
}
