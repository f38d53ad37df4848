use crate::aggregation::{
    self, ConferenceCount, CountRow, DatasetSummary, GroupAggregate, PositionRoundHeatmap, TeamAggregate,
    TeamEfficiency,
};
use crate::config::AnalyticsConfig;
use crate::error::{DraftError, DraftResult};
use crate::grading::DraftGrader;
use crate::loader;
use crate::models::{DraftGrade, DraftPick, ScoredPick};
use crate::normalization;
use crate::scoring::ImpactCalculator;
use crate::stats;
use draft_registry::{ReferenceRegistry, TeamInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Seasons (and optionally one team) a query is restricted to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub seasons: BTreeSet<i32>,
    pub team: Option<String>,
}

impl Selection {
    /// Select seasons across every team. At least one season is required.
    pub fn seasons<I: IntoIterator<Item = i32>>(seasons: I) -> DraftResult<Self> {
        let seasons: BTreeSet<i32> = seasons.into_iter().collect();
        if seasons.is_empty() {
            return Err(DraftError::EmptySelection);
        }
        Ok(Self { seasons, team: None })
    }

    /// Narrow the selection to one team
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Whether a pick falls inside the selection
    pub fn matches(&self, pick: &DraftPick) -> bool {
        self.seasons.contains(&pick.season) && self.team.as_ref().map_or(true, |team| &pick.team == team)
    }
}

/// Everything the landing page shows for a selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingReport {
    pub seasons: Vec<i32>,
    pub summary: DatasetSummary,
    pub positions: Vec<CountRow>,
    pub heatmap: PositionRoundHeatmap,
    pub top_colleges: Vec<CountRow>,
    pub top_conferences: Vec<ConferenceCount>,
}

/// One row of a team's top performers table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLine {
    pub player_name: String,
    pub season: i32,
    pub position: String,
    pub grouped_position: String,
    pub games: Option<u32>,
    pub impact_score: f64,
    pub context_value: f64,
    pub recognized: bool,
    /// ✓ or ✗ for the recognition column
    pub recognition_mark: String,
    pub total_yards: f64,
    pub defense_impact: f64,
    pub stat_summary: String,
}

impl PlayerLine {
    fn from_scored(pick: &ScoredPick) -> Self {
        let raw = pick.pick();
        Self {
            player_name: raw.player_name.clone(),
            season: raw.season,
            position: raw.position.clone(),
            grouped_position: pick.grouped_position().to_string(),
            games: raw.games,
            impact_score: pick.impact_score,
            context_value: pick.context_value,
            recognized: pick.recognized,
            recognition_mark: pick.recognition_mark().to_string(),
            total_yards: stats::total_yards(&raw.stats),
            defense_impact: stats::defense_impact(&raw.stats),
            stat_summary: stats::stat_summary(&raw.position, &raw.stats),
        }
    }
}

/// Everything the team overview page shows for a team and seasons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamReport {
    pub team: TeamInfo,
    pub grade: DraftGrade,
    /// `None` when the team made no picks in the selected seasons
    pub aggregate: Option<TeamAggregate>,
    pub top_players: Vec<PlayerLine>,
}

/// Draft analytics engine
///
/// Holds the validated base records and the reference tables. Every query
/// filters the base set into a fresh view and runs the full
/// normalize -> score -> aggregate -> grade pipeline on it; the base set is
/// never modified.
#[derive(Debug, Clone)]
pub struct DraftAnalytics {
    config: AnalyticsConfig,
    registry: ReferenceRegistry,
    calculator: ImpactCalculator,
    grader: DraftGrader,
    picks: Vec<DraftPick>,
}

impl DraftAnalytics {
    /// Create an engine over already-loaded records
    pub fn new(config: AnalyticsConfig, registry: ReferenceRegistry, picks: Vec<DraftPick>) -> Self {
        let calculator = ImpactCalculator::new(config.scoring.clone());
        let grader = DraftGrader::new(config.grading.clone());
        Self { config, registry, calculator, grader, picks }
    }

    /// Load both CSV files named in the configuration
    pub async fn load(config: AnalyticsConfig) -> DraftResult<Self> {
        info!("📋 Loading draft analytics data");
        let registry = ReferenceRegistry::load_from_file(&config.data.conferences_path).await?;
        let picks = loader::load_picks_from_file(&config.data.draft_picks_path).await?;

        // Surface position errors at load time rather than on first query
        normalization::normalize_all(&picks, &registry)?;

        info!("✅ Draft analytics ready: {} picks, {} mapped colleges", picks.len(), registry.conferences().len());
        Ok(Self::new(config, registry, picks))
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn registry(&self) -> &ReferenceRegistry {
        &self.registry
    }

    /// Base records in canonical order
    pub fn picks(&self) -> &[DraftPick] {
        &self.picks
    }

    /// Distinct seasons in the dataset, ascending
    pub fn available_seasons(&self) -> Vec<i32> {
        self.picks.iter().map(|p| p.season).collect::<BTreeSet<_>>().into_iter().collect()
    }

    /// Chart-eligible teams present in the dataset, sorted by full name
    pub fn available_teams(&self) -> Vec<&TeamInfo> {
        self.registry.teams().teams_in(self.picks.iter().map(|p| p.team.as_str()))
    }

    /// Run the pipeline over the picks matching `selection` and `keep`
    pub fn scored_view<F>(&self, selection: &Selection, keep: F) -> DraftResult<Vec<ScoredPick>>
    where
        F: Fn(&DraftPick) -> bool,
    {
        let view = self.picks.iter().filter(|&p| selection.matches(p) && keep(p));
        let normalized = normalization::normalize_all(view, &self.registry)?;
        let scored = self.calculator.score_all(normalized);
        debug!("Selection {:?} produced {} scored picks", selection, scored.len());
        Ok(scored)
    }

    /// Summary metrics, position breakdowns and college/conference sourcing
    pub fn landing(&self, selection: &Selection, exclude_conference: Option<&str>) -> DraftResult<LandingReport> {
        let picks = self.scored_view(selection, |_| true)?;
        let limit = self.config.report.top_limit;

        Ok(LandingReport {
            seasons: selection.seasons.iter().copied().collect(),
            summary: DatasetSummary::from_picks(&picks),
            positions: aggregation::position_counts(&picks),
            heatmap: PositionRoundHeatmap::from_picks(&picks),
            top_colleges: aggregation::top_colleges(&picks, limit),
            top_conferences: aggregation::top_conferences(&picks, limit, exclude_conference),
        })
    }

    /// Grade, aggregate and top performers of one team's drafted players
    pub fn team_overview(&self, team: &str, seasons: &BTreeSet<i32>) -> DraftResult<TeamReport> {
        let info = self.registry.team(team).ok_or_else(|| DraftError::UnknownTeam(team.to_string()))?;
        let selection = Selection::seasons(seasons.iter().copied())?.with_team(team);
        let picks = self.scored_view(&selection, DraftPick::is_drafted)?;

        let grade = self.grader.grade(team, &selection.seasons, &picks);
        let aggregate = if picks.is_empty() {
            None
        } else {
            let members: Vec<&ScoredPick> = picks.iter().collect();
            Some(GroupAggregate::from_picks(team, &members)?)
        };
        let top_players = aggregation::top_impact(&picks, self.config.report.team_top_players)
            .into_iter()
            .map(PlayerLine::from_scored)
            .collect();

        info!("{} {}: {} players, {}", info.abbrev, info.name, picks.len(), grade.badge());
        Ok(TeamReport { team: info.clone(), grade, aggregate, top_players })
    }

    /// Average round vs. average w_av for every team in one season
    pub fn efficiency(&self, season: i32) -> DraftResult<Vec<TeamEfficiency>> {
        let max_round = self.config.report.max_efficiency_round;
        let selection = Selection::seasons([season])?;
        let picks = self.scored_view(&selection, |p| p.is_drafted() && p.round_or_zero() <= max_round)?;
        aggregation::team_efficiency(&picks, &self.registry)
    }

    /// Draft grade of every chart-eligible team, best first
    pub fn grade_table(&self, seasons: &BTreeSet<i32>) -> DraftResult<Vec<DraftGrade>> {
        let selection = Selection::seasons(seasons.iter().copied())?;
        let picks = self.scored_view(&selection, DraftPick::is_drafted)?;

        let mut grades: Vec<DraftGrade> = aggregation::group_by(&picks, |p| p.pick().team.clone())
            .into_iter()
            .filter(|(team, _)| self.registry.is_known_team(team))
            .map(|(team, members)| {
                let class: Vec<ScoredPick> = members.into_iter().cloned().collect();
                self.grader.grade(&team, &selection.seasons, &class)
            })
            .collect();

        grades.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.team.cmp(&b.team)));
        Ok(grades)
    }
}
