//! # Draft Aggregation
//!
//! Roll-ups of scored picks by team, position, round, college and conference.
//!
//! Every grouping keeps the canonical (file row) order of its members, so
//! "first occurrence" tie-breaks are stable across runs.

use crate::error::{DraftError, DraftResult};
use crate::models::{or_zero, ScoredPick};
use draft_registry::ReferenceRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

/// Label used in drill-downs for picks without a college
pub const MISSING_COLLEGE_LABEL: &str = "N/A";

/// Summary statistics of one non-empty group of picks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAggregate {
    pub key: String,
    pub player_count: usize,
    pub avg_round: f64,
    pub avg_w_av: f64,
    pub total_impact: f64,
    /// Highest impact player; ties go to the earliest row
    pub top_impact_player: String,
    pub top_impact_score: f64,
}

/// Per-team roll-up, keyed by team abbreviation
pub type TeamAggregate = GroupAggregate;

impl GroupAggregate {
    /// Aggregate a group. Empty groups have no defined averages and are rejected.
    pub fn from_picks(key: impl Into<String>, picks: &[&ScoredPick]) -> DraftResult<Self> {
        let key = key.into();
        let first = picks.first().ok_or_else(|| DraftError::EmptyGroup { key: key.clone() })?;

        let count = picks.len() as f64;
        let mut round_sum = 0.0;
        let mut w_av_sum = 0.0;
        let mut total_impact = 0.0;
        let mut top = *first;

        for &pick in picks {
            round_sum += pick.pick().round_or_zero() as f64;
            w_av_sum += or_zero(pick.pick().stats.w_av);
            total_impact += pick.impact_score;
            if pick.impact_score > top.impact_score {
                top = pick;
            }
        }

        Ok(Self {
            key,
            player_count: picks.len(),
            avg_round: round_sum / count,
            avg_w_av: w_av_sum / count,
            total_impact,
            top_impact_player: top.pick().player_name.clone(),
            top_impact_score: top.impact_score,
        })
    }
}

/// Group picks by key, keeping groups in first-appearance order
pub fn group_by<'a, K, F>(picks: &'a [ScoredPick], key: F) -> Vec<(K, Vec<&'a ScoredPick>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&ScoredPick) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&ScoredPick>)> = Vec::new();

    for pick in picks {
        let k = key(pick);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(pick),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![pick]));
            }
        }
    }

    groups
}

/// Aggregate every group produced by `key`
pub fn aggregate_by<F>(picks: &[ScoredPick], key: F) -> DraftResult<Vec<GroupAggregate>>
where
    F: Fn(&ScoredPick) -> String,
{
    group_by(picks, key)
        .into_iter()
        .map(|(k, members)| GroupAggregate::from_picks(k, &members))
        .collect()
}

/// Team aggregates sorted by abbreviation
pub fn team_aggregates(picks: &[ScoredPick]) -> DraftResult<Vec<TeamAggregate>> {
    let mut teams = aggregate_by(picks, |p| p.pick().team.clone())?;
    teams.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(teams)
}

/// A key with its number of picks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRow {
    pub key: String,
    pub count: usize,
}

/// Sort by count descending, then key ascending
fn sort_counts(rows: &mut [CountRow]) {
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
}

/// Count picks per key; picks whose key is `None` are skipped
pub fn count_by<F>(picks: &[ScoredPick], key: F) -> Vec<CountRow>
where
    F: Fn(&ScoredPick) -> Option<String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for pick in picks {
        if let Some(k) = key(pick) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<CountRow> = counts.into_iter().map(|(key, count)| CountRow { key, count }).collect();
    sort_counts(&mut rows);
    rows
}

/// Headline numbers for a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_players: usize,
    /// Distinct known colleges; missing colleges are not counted
    pub colleges: usize,
    /// Distinct conferences, including the non-power sentinel
    pub conferences: usize,
}

impl DatasetSummary {
    pub fn from_picks(picks: &[ScoredPick]) -> Self {
        let colleges: HashSet<&str> = picks.iter().filter_map(|p| p.pick().college.as_deref()).collect();
        let conferences: HashSet<&str> = picks.iter().map(|p| p.conference()).collect();

        Self { total_players: picks.len(), colleges: colleges.len(), conferences: conferences.len() }
    }
}

/// Players drafted per grouped position, most common first
pub fn position_counts(picks: &[ScoredPick]) -> Vec<CountRow> {
    count_by(picks, |p| Some(p.grouped_position().to_string()))
}

/// Players drafted per grouped position and round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRoundHeatmap {
    /// Rounds present in the selection, ascending
    pub rounds: Vec<u8>,
    /// Row order: by first-round count descending, then remaining positions
    /// in first-appearance order
    pub positions: Vec<String>,
    /// `cells[position][round]`; `None` where no pick exists
    pub cells: Vec<Vec<Option<usize>>>,
}

impl PositionRoundHeatmap {
    /// Build the heatmap. Supplemental (round 0) and round-less picks are
    /// left out of the cells, but their positions still get a row.
    pub fn from_picks(picks: &[ScoredPick]) -> Self {
        let mut counts: HashMap<(u8, &str), usize> = HashMap::new();
        let mut rounds: BTreeSet<u8> = BTreeSet::new();
        for pick in picks.iter().filter(|p| p.pick().is_drafted()) {
            let round = pick.pick().round_or_zero();
            rounds.insert(round);
            *counts.entry((round, pick.grouped_position())).or_insert(0) += 1;
        }

        let mut first_round: Vec<CountRow> = counts
            .iter()
            .filter(|((round, _), _)| *round == 1)
            .map(|((_, position), count)| CountRow { key: position.to_string(), count: *count })
            .collect();
        sort_counts(&mut first_round);

        let mut positions: Vec<String> = first_round.into_iter().map(|row| row.key).collect();
        for pick in picks {
            let position = pick.grouped_position();
            if !positions.iter().any(|p| p == position) {
                positions.push(position.to_string());
            }
        }

        let rounds: Vec<u8> = rounds.into_iter().collect();
        let cells = positions
            .iter()
            .map(|position| {
                rounds.iter().map(|round| counts.get(&(*round, position.as_str())).copied()).collect()
            })
            .collect();

        Self { rounds, positions, cells }
    }

    /// Count for one cell, if any pick landed there
    pub fn get(&self, position: &str, round: u8) -> Option<usize> {
        let row = self.positions.iter().position(|p| p == position)?;
        let col = self.rounds.iter().position(|r| *r == round)?;
        self.cells[row][col]
    }
}

/// Colleges producing the most draftees; picks without a college are skipped
pub fn top_colleges(picks: &[ScoredPick], limit: usize) -> Vec<CountRow> {
    let mut rows = count_by(picks, |p| p.pick().college.clone());
    rows.truncate(limit);
    rows
}

/// A conference with the colleges that make up its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceCount {
    pub conference: String,
    pub count: usize,
    /// Constituent colleges, count descending
    pub colleges: Vec<CountRow>,
}

impl ConferenceCount {
    /// Drill-down text, e.g. `Alabama (4)<br>Georgia (3)`
    pub fn drill_down_text(&self, separator: &str) -> String {
        self.colleges
            .iter()
            .map(|row| format!("{} ({})", row.key, row.count))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Conferences producing the most draftees, each with its college drill-down.
///
/// `exclude` drops one conference (e.g. the non-power sentinel) before ranking.
pub fn top_conferences(picks: &[ScoredPick], limit: usize, exclude: Option<&str>) -> Vec<ConferenceCount> {
    let mut rows: Vec<ConferenceCount> = group_by(picks, |p| p.conference().to_string())
        .into_iter()
        .filter(|(conference, _)| Some(conference.as_str()) != exclude)
        .map(|(conference, members)| {
            let mut colleges: HashMap<&str, usize> = HashMap::new();
            for pick in &members {
                let college = pick.pick().college.as_deref().unwrap_or(MISSING_COLLEGE_LABEL);
                *colleges.entry(college).or_insert(0) += 1;
            }
            let mut colleges: Vec<CountRow> = colleges
                .into_iter()
                .map(|(key, count)| CountRow { key: key.to_string(), count })
                .collect();
            sort_counts(&mut colleges);

            ConferenceCount { conference, count: members.len(), colleges }
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.conference.cmp(&b.conference)));
    rows.truncate(limit);
    rows
}

/// Highest impact picks first; equal scores keep canonical order
pub fn top_impact(picks: &[ScoredPick], limit: usize) -> Vec<&ScoredPick> {
    let mut ranked: Vec<&ScoredPick> = picks.iter().collect();
    ranked.sort_by(|a, b| b.impact_score.total_cmp(&a.impact_score));
    ranked.truncate(limit);
    ranked
}

/// One point of the draft efficiency chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEfficiency {
    pub team: String,
    pub team_name: String,
    pub color: String,
    pub avg_round: f64,
    pub avg_w_av: f64,
    /// Hover lines for each pick, in canonical order
    pub picks: Vec<String>,
}

/// Average round against average w_av for every chart-eligible team.
///
/// Teams missing from the registry's team table are skipped; output is
/// sorted by team abbreviation.
pub fn team_efficiency(picks: &[ScoredPick], registry: &ReferenceRegistry) -> DraftResult<Vec<TeamEfficiency>> {
    let mut points = Vec::new();
    for (team, members) in group_by(picks, |p| p.pick().team.clone()) {
        let Some(info) = registry.team(&team) else {
            continue;
        };
        let aggregate = GroupAggregate::from_picks(team.clone(), &members)?;
        points.push(TeamEfficiency {
            team,
            team_name: info.name.clone(),
            color: info.color.clone(),
            avg_round: aggregate.avg_round,
            avg_w_av: aggregate.avg_w_av,
            picks: members.iter().map(|p| p.pick().hover_line()).collect(),
        });
    }

    points.sort_by(|a, b| a.team.cmp(&b.team));
    Ok(points)
}
