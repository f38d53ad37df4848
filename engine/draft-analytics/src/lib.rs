//! # Draft Analytics
//!
//! Scoring, aggregation and grading pipeline for NFL draft classes.
//!
//! Draft pick records flow through four stages: normalization (conference
//! lookup and position grouping), impact scoring, aggregation into
//! dashboard views, and draft grading with recency weighting. The
//! [`DraftAnalytics`] engine runs the whole pipeline for each query.

pub mod aggregation;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod grading;
pub mod loader;
pub mod models;
pub mod normalization;
pub mod scoring;
pub mod stats;

#[cfg(test)]
mod integration_tests;

// Re-export main types for easy usage
pub use config::AnalyticsConfig;
pub use engine::{DraftAnalytics, LandingReport, PlayerLine, Selection, TeamReport};
pub use error::{DraftError, DraftResult};
pub use grading::DraftGrader;
pub use models::{DraftGrade, DraftPick, GradeBucket, LetterGrade, NormalizedPick, PerformanceStats, ScoredPick};
pub use scoring::ImpactCalculator;
