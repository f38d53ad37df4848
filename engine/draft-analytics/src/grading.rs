use crate::config::GradingConfig;
use crate::models::{DraftGrade, GradeBucket, LetterGrade, ScoredPick};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Letter thresholds, inclusive lower bounds
const LETTER_THRESHOLDS: &[(f64, LetterGrade)] = &[
    (90.0, LetterGrade::APlus),
    (80.0, LetterGrade::A),
    (65.0, LetterGrade::B),
    (50.0, LetterGrade::C),
    (35.0, LetterGrade::D),
];

/// Colour band thresholds, inclusive lower bounds. Kept apart from the
/// letter table so either can change on its own.
const BUCKET_THRESHOLDS: &[(f64, GradeBucket)] = &[
    (80.0, GradeBucket::Good),
    (65.0, GradeBucket::Ok),
    (50.0, GradeBucket::Fair),
    (35.0, GradeBucket::Poor),
];

/// Letter for a score
pub fn letter_for(score: f64) -> LetterGrade {
    LETTER_THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, letter)| *letter)
        .unwrap_or(LetterGrade::F)
}

/// Colour band for a score
pub fn bucket_for(score: f64) -> GradeBucket {
    BUCKET_THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, bucket)| *bucket)
        .unwrap_or(GradeBucket::Bad)
}

/// Intermediate values of one grade computation
#[derive(Debug, Clone, PartialEq)]
pub struct GradeBreakdown {
    pub years_since_draft: i32,
    pub recency_scale: f64,
    pub adjusted_impact: f64,
    pub avg_round: f64,
    pub raw_score: f64,
    pub penalty: f64,
    /// Penalised score before clamping
    pub unclamped_score: f64,
}

/// Draft grader for team draft classes
#[derive(Debug, Clone)]
pub struct DraftGrader {
    config: GradingConfig,
}

impl DraftGrader {
    /// Create a new draft grader
    pub fn new(config: GradingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Recency boost for a class whose oldest pick is from `oldest_season`
    pub fn recency_scale(&self, oldest_season: i32) -> (i32, f64) {
        let years_since_draft = self.config.reference_year.saturating_sub(oldest_season).max(1);
        let scale = (self.config.recency_numerator / years_since_draft as f64).min(self.config.max_recency_scale);
        (years_since_draft, scale)
    }

    /// Work through the grade formula. Returns `None` for an empty class.
    pub fn breakdown(&self, picks: &[ScoredPick]) -> Option<GradeBreakdown> {
        let oldest_season = picks.iter().map(|p| p.pick().season).min()?;
        let num_players = picks.len() as f64;

        let (years_since_draft, recency_scale) = self.recency_scale(oldest_season);
        let adjusted_impact: f64 = picks.iter().map(|p| p.impact_score * recency_scale).sum();
        let avg_round = picks.iter().map(|p| p.pick().round_or_zero() as f64).sum::<f64>() / num_players;

        let raw_score = 100.0 * adjusted_impact / (num_players * self.config.impact_per_player);
        let penalty = (avg_round - 1.0) / self.config.round_penalty_divisor;
        let unclamped_score = raw_score * (1.0 - penalty);

        Some(GradeBreakdown {
            years_since_draft,
            recency_scale,
            adjusted_impact,
            avg_round,
            raw_score,
            penalty,
            unclamped_score,
        })
    }

    /// Grade one team's picks over the selected seasons.
    ///
    /// An empty class is a valid state and grades as 0 / F. Scores are
    /// clamped to [0, 100]; `raw_score` on the result keeps the unclamped value.
    pub fn grade(&self, team: &str, seasons: &BTreeSet<i32>, picks: &[ScoredPick]) -> DraftGrade {
        let (score, raw_score) = match self.breakdown(picks) {
            None => (0.0, 0.0),
            Some(b) => {
                debug!(
                    "Grade breakdown for {}: years={}, recency={:.2}, adjusted_impact={:.2}, raw={:.2}, penalty={:.3}",
                    team, b.years_since_draft, b.recency_scale, b.adjusted_impact, b.raw_score, b.penalty
                );
                if b.unclamped_score < 0.0 {
                    warn!("Draft score for {} is negative ({:.2}); clamping to 0", team, b.unclamped_score);
                }
                (b.unclamped_score.clamp(0.0, 100.0), b.unclamped_score)
            }
        };

        DraftGrade {
            team: team.to_string(),
            seasons: seasons.iter().copied().collect(),
            player_count: picks.len(),
            score,
            raw_score,
            letter: letter_for(score),
            bucket: bucket_for(score),
        }
    }
}

impl Default for DraftGrader {
    fn default() -> Self {
        Self::new(GradingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftPick, NormalizedPick, PerformanceStats};
    use proptest::prelude::*;

    fn scored(season: i32, round: u8, impact: f64) -> ScoredPick {
        ScoredPick {
            normalized: NormalizedPick {
                pick: DraftPick {
                    row: 0,
                    season,
                    round: Some(round),
                    pick: None,
                    team: "SEA".to_string(),
                    college: None,
                    position: "CB".to_string(),
                    player_name: "Test Player".to_string(),
                    games: None,
                    stats: PerformanceStats { w_av: Some(impact), ..Default::default() },
                },
                grouped_position: "CB".to_string(),
                conference: "SEC".to_string(),
            },
            impact_score: impact,
            context_value: impact,
            recognized: false,
        }
    }

    fn seasons(years: &[i32]) -> BTreeSet<i32> {
        years.iter().copied().collect()
    }

    #[test]
    fn test_empty_class_grades_f() {
        let grade = DraftGrader::default().grade("SEA", &seasons(&[2020]), &[]);
        assert_eq!(grade.score, 0.0);
        assert_eq!(grade.letter, LetterGrade::F);
        assert_eq!(grade.bucket, GradeBucket::Bad);
        assert_eq!(grade.player_count, 0);
    }

    #[test]
    fn test_recent_single_pick_caps_at_100() {
        let grader = DraftGrader::default();
        let picks = vec![scored(2024, 1, 20.0)];

        let b = grader.breakdown(&picks).unwrap();
        assert_eq!(b.years_since_draft, 1);
        assert_eq!(b.recency_scale, 2.0);
        assert_eq!(b.adjusted_impact, 40.0);
        assert!((b.raw_score - 266.666_666).abs() < 1e-3);
        assert_eq!(b.penalty, 0.0);

        let grade = grader.grade("SEA", &seasons(&[2024]), &picks);
        assert_eq!(grade.score, 100.0);
        assert!(grade.raw_score > 100.0);
        assert_eq!(grade.letter, LetterGrade::APlus);
    }

    #[test]
    fn test_older_class_with_round_penalty() {
        let grader = DraftGrader::default();
        // 2016 vs 2024: 8 years, recency 0.5
        let picks = vec![scored(2016, 1, 30.0), scored(2017, 3, 20.0)];

        let b = grader.breakdown(&picks).unwrap();
        assert_eq!(b.years_since_draft, 8);
        assert_eq!(b.recency_scale, 0.5);
        assert_eq!(b.adjusted_impact, 25.0);
        assert_eq!(b.avg_round, 2.0);
        assert!((b.penalty - 0.05).abs() < 1e-12);

        // raw = 100 * 25 / 30 = 83.33; score = 83.33 * 0.95 = 79.17
        let grade = grader.grade("SEA", &seasons(&[2016, 2017]), &picks);
        assert!((grade.score - 79.166_666).abs() < 1e-3);
        assert_eq!(grade.letter, LetterGrade::B);
        assert_eq!(grade.bucket, GradeBucket::Ok);
        assert_eq!(grade.seasons, vec![2016, 2017]);
    }

    #[test]
    fn test_future_season_counts_as_one_year() {
        let grader = DraftGrader::default();
        assert_eq!(grader.recency_scale(2030), (1, 2.0));
        assert_eq!(grader.recency_scale(2021), (3, 4.0 / 3.0));
    }

    #[test]
    fn test_extreme_seasons_do_not_overflow() {
        let grader = DraftGrader::default();
        let (years, scale) = grader.recency_scale(i32::MIN);
        assert_eq!(years, i32::MAX);
        assert!(scale > 0.0 && scale < 1e-6);
        assert_eq!(grader.recency_scale(i32::MAX), (1, 2.0));
    }

    #[test]
    fn test_letter_thresholds_inclusive() {
        assert_eq!(letter_for(90.0), LetterGrade::APlus);
        assert_eq!(letter_for(89.999), LetterGrade::A);
        assert_eq!(letter_for(80.0), LetterGrade::A);
        assert_eq!(letter_for(65.0), LetterGrade::B);
        assert_eq!(letter_for(50.0), LetterGrade::C);
        assert_eq!(letter_for(35.0), LetterGrade::D);
        assert_eq!(letter_for(34.9), LetterGrade::F);
        assert_eq!(letter_for(0.0), LetterGrade::F);
    }

    #[test]
    fn test_bucket_thresholds_independent_of_letters() {
        assert_eq!(bucket_for(95.0), GradeBucket::Good);
        assert_eq!(bucket_for(80.0), GradeBucket::Good);
        assert_eq!(bucket_for(79.9), GradeBucket::Ok);
        assert_eq!(bucket_for(65.0), GradeBucket::Ok);
        assert_eq!(bucket_for(50.0), GradeBucket::Fair);
        assert_eq!(bucket_for(35.0), GradeBucket::Poor);
        assert_eq!(bucket_for(10.0), GradeBucket::Bad);
        // A+ and A share the same colour band
        assert_eq!(bucket_for(91.0), bucket_for(81.0));
    }

    #[test]
    fn test_negative_impact_clamped_to_zero() {
        let grader = DraftGrader::default();
        let picks = vec![scored(2023, 2, -5.0)];
        let grade = grader.grade("SEA", &seasons(&[2023]), &picks);
        assert_eq!(grade.score, 0.0);
        assert!(grade.raw_score < 0.0);
        assert_eq!(grade.letter, LetterGrade::F);
    }

    #[test]
    fn test_badge_text() {
        let grader = DraftGrader::default();
        let grade = grader.grade("SEA", &seasons(&[2016, 2017]), &[scored(2016, 1, 30.0), scored(2017, 3, 20.0)]);
        assert_eq!(grade.badge(), "Draft Grade: B (79)");
    }

    proptest! {
        #[test]
        fn score_always_within_bounds(
            entries in proptest::collection::vec((2010i32..=2024, 1u8..=7, -10.0f64..300.0), 1..40)
        ) {
            let grader = DraftGrader::default();
            let picks: Vec<ScoredPick> = entries.iter().map(|(s, r, i)| scored(*s, *r, *i)).collect();
            let grade = grader.grade("SEA", &seasons(&[2020]), &picks);
            prop_assert!(grade.score >= 0.0 && grade.score <= 100.0);
        }

        #[test]
        fn grading_is_idempotent(
            entries in proptest::collection::vec((2010i32..=2024, 1u8..=7, 0.0f64..100.0), 0..20)
        ) {
            let grader = DraftGrader::default();
            let picks: Vec<ScoredPick> = entries.iter().map(|(s, r, i)| scored(*s, *r, *i)).collect();
            let first = grader.grade("SEA", &seasons(&[2020]), &picks);
            let second = grader.grade("SEA", &seasons(&[2020]), &picks);
            prop_assert_eq!(first, second);
        }
    }
}
