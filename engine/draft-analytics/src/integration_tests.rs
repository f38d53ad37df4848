//! End-to-end tests: CSV text through the registry, loader and engine

use crate::config::AnalyticsConfig;
use crate::engine::{DraftAnalytics, Selection};
use crate::error::DraftError;
use crate::loader::load_picks_from_reader;
use crate::models::{GradeBucket, LetterGrade};
use draft_registry::{ReferenceRegistry, NON_POWER_CONFERENCE};
use std::collections::BTreeSet;

const CONFERENCES: &str = "Team,Conference
Alabama,SEC
Georgia,SEC
";

const PICKS: &str = "season,round,pick,team,pfr_player_name,position,college,allpro,probowls,w_av,games
2024,1,3,NWE,Alpha QB,QB,Alabama,0,0,20,17
2024,2,40,NWE,Beta DT,DT,Tiny State,0,0,5,10
2023,1,10,SEA,Gamma CB,CB,Georgia,1,0,10,30
2023,0,,SEA,Delta K,K,Alabama,,,,
2024,3,80,XXX,Echo WR,WR,,0,1,4,8
";

fn engine_from(picks_csv: &str) -> DraftAnalytics {
    let registry = ReferenceRegistry::from_reader(CONFERENCES.as_bytes(), "conferences").unwrap();
    let picks = load_picks_from_reader(picks_csv.as_bytes(), "picks").unwrap();
    DraftAnalytics::new(AnalyticsConfig::default(), registry, picks)
}

fn engine() -> DraftAnalytics {
    engine_from(PICKS)
}

fn seasons(years: &[i32]) -> BTreeSet<i32> {
    years.iter().copied().collect()
}

#[test]
fn test_loaded_rows_keep_file_order() {
    let engine = engine();
    let rows: Vec<usize> = engine.picks().iter().map(|p| p.row).collect();
    assert_eq!(rows, vec![0, 1, 2, 3, 4]);
    assert_eq!(engine.available_seasons(), vec![2023, 2024]);
    // XXX is not a chart-eligible team
    let teams: Vec<&str> = engine.available_teams().iter().map(|t| t.abbrev.as_str()).collect();
    assert_eq!(teams, vec!["NWE", "SEA"]);
}

#[test]
fn test_single_pick_scores() {
    let engine = engine();
    let scored = engine.scored_view(&Selection::seasons([2023]).unwrap(), |_| true).unwrap();
    let gamma = scored.iter().find(|p| p.pick().player_name == "Gamma CB").unwrap();

    assert_eq!(gamma.impact_score, 15.0);
    assert!((gamma.context_value - 11.0).abs() < 1e-9);
    assert!(gamma.recognized);

    // Nulls score as zero without touching the stored record
    let delta = scored.iter().find(|p| p.pick().player_name == "Delta K").unwrap();
    assert_eq!(delta.impact_score, 0.0);
    assert_eq!(delta.pick().stats.w_av, None);
    assert_eq!(delta.grouped_position(), "ST");
}

#[test]
fn test_team_without_picks_grades_f() {
    let report = engine().team_overview("DAL", &seasons(&[2024])).unwrap();
    assert_eq!(report.grade.score, 0.0);
    assert_eq!(report.grade.letter, LetterGrade::F);
    assert_eq!(report.grade.bucket, GradeBucket::Bad);
    assert!(report.aggregate.is_none());
    assert!(report.top_players.is_empty());
}

#[test]
fn test_recent_single_pick_grades_a_plus() {
    let csv = "season,round,pick,team,pfr_player_name,position,college,allpro,probowls,w_av,games
2024,1,5,NWE,Alpha QB,QB,Alabama,0,0,20,17
";
    let report = engine_from(csv).team_overview("NWE", &seasons(&[2024])).unwrap();
    assert_eq!(report.grade.score, 100.0);
    assert!((report.grade.raw_score - 266.666_666).abs() < 1e-3);
    assert_eq!(report.grade.letter, LetterGrade::APlus);
    assert_eq!(report.grade.badge(), "Draft Grade: A+ (100)");
}

#[test]
fn test_unmapped_college_counts_as_non_power_conference() {
    let engine = engine();
    let selection = Selection::seasons([2024]).unwrap();

    let landing = engine.landing(&selection, None).unwrap();
    let conferences: Vec<(&str, usize)> =
        landing.top_conferences.iter().map(|c| (c.conference.as_str(), c.count)).collect();
    assert_eq!(conferences, vec![(NON_POWER_CONFERENCE, 2), ("SEC", 1)]);
    assert_eq!(landing.top_conferences[0].drill_down_text(", "), "N/A (1), Tiny State (1)");

    let filtered = engine.landing(&selection, Some(NON_POWER_CONFERENCE)).unwrap();
    assert_eq!(filtered.top_conferences.len(), 1);
    assert_eq!(filtered.top_conferences[0].conference, "SEC");
}

#[test]
fn test_landing_summary_and_positions() {
    let landing = engine().landing(&Selection::seasons([2024]).unwrap(), None).unwrap();

    assert_eq!(landing.summary.total_players, 3);
    assert_eq!(landing.summary.colleges, 2);
    assert_eq!(landing.summary.conferences, 2);

    // DT groups into DL, QB and WR pass through
    let positions: Vec<&str> = landing.positions.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(positions, vec!["DL", "QB", "WR"]);
    assert_eq!(landing.heatmap.get("QB", 1), Some(1));
    assert_eq!(landing.heatmap.get("DL", 2), Some(1));
    assert_eq!(landing.heatmap.get("DL", 1), None);
}

#[test]
fn test_queries_are_idempotent() {
    let engine = engine();
    let selection = Selection::seasons([2023, 2024]).unwrap();

    let first = serde_json::to_value(engine.landing(&selection, None).unwrap()).unwrap();
    let second = serde_json::to_value(engine.landing(&selection, None).unwrap()).unwrap();
    assert_eq!(first, second);

    let grades_a = engine.grade_table(&seasons(&[2023, 2024])).unwrap();
    let grades_b = engine.grade_table(&seasons(&[2023, 2024])).unwrap();
    assert_eq!(grades_a, grades_b);
}

#[test]
fn test_team_overview_excludes_supplemental_picks() {
    let report = engine().team_overview("SEA", &seasons(&[2023])).unwrap();
    assert_eq!(report.grade.player_count, 1);
    assert_eq!(report.top_players.len(), 1);
    assert_eq!(report.top_players[0].player_name, "Gamma CB");
    assert_eq!(report.top_players[0].stat_summary, "INT: 0 | Solo Tackles: 0");
    assert_eq!(report.top_players[0].recognition_mark, "✓");

    let aggregate = report.aggregate.unwrap();
    assert_eq!(aggregate.top_impact_player, "Gamma CB");
    assert_eq!(aggregate.avg_round, 1.0);
}

#[test]
fn test_efficiency_skips_unknown_teams() {
    let points = engine().efficiency(2024).unwrap();
    assert_eq!(points.len(), 1);

    let nwe = &points[0];
    assert_eq!(nwe.team, "NWE");
    assert_eq!(nwe.team_name, "New England Patriots");
    assert_eq!(nwe.avg_round, 1.5);
    assert_eq!(nwe.avg_w_av, 12.5);
    assert_eq!(nwe.picks[0], "Alpha QB: Pick 3, Round 1, W_AV 20");
}

#[test]
fn test_grade_table_breaks_ties_by_team() {
    let grades = engine().grade_table(&seasons(&[2023, 2024])).unwrap();
    let teams: Vec<&str> = grades.iter().map(|g| g.team.as_str()).collect();
    // Both classes cap at 100; ties fall back to the abbreviation
    assert_eq!(teams, vec!["NWE", "SEA"]);
    assert!(grades.iter().all(|g| g.score == 100.0));
    assert!(grades[0].raw_score > 100.0);

    let older = engine().grade_table(&seasons(&[2023])).unwrap();
    assert_eq!(older.len(), 1);
    assert_eq!(older[0].team, "SEA");
}

#[test]
fn test_invalid_requests() {
    let engine = engine();
    assert!(matches!(Selection::seasons(Vec::new()), Err(DraftError::EmptySelection)));
    assert!(matches!(engine.grade_table(&BTreeSet::new()), Err(DraftError::EmptySelection)));
    assert!(matches!(
        engine.team_overview("XXX", &seasons(&[2024])),
        Err(DraftError::UnknownTeam(team)) if team == "XXX"
    ));
}

#[tokio::test]
async fn test_load_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let picks_path = dir.path().join("draft_picks.csv");
    let conferences_path = dir.path().join("conferences.csv");
    std::fs::write(&picks_path, PICKS).unwrap();
    std::fs::write(&conferences_path, CONFERENCES).unwrap();

    let mut config = AnalyticsConfig::default();
    config.data.draft_picks_path = picks_path;
    config.data.conferences_path = conferences_path;

    let engine = DraftAnalytics::load(config).await.unwrap();
    assert_eq!(engine.picks().len(), 5);
    assert_eq!(engine.registry().conferences().len(), 2);
}

#[tokio::test]
async fn test_load_rejects_missing_position() {
    let dir = tempfile::tempdir().unwrap();
    let picks_path = dir.path().join("draft_picks.csv");
    let conferences_path = dir.path().join("conferences.csv");
    std::fs::write(&picks_path, "season,round,team,pfr_player_name,position\n2024,1,NWE,No Position,\n").unwrap();
    std::fs::write(&conferences_path, CONFERENCES).unwrap();

    let mut config = AnalyticsConfig::default();
    config.data.draft_picks_path = picks_path;
    config.data.conferences_path = conferences_path;

    let err = DraftAnalytics::load(config).await.unwrap_err();
    assert!(matches!(err, DraftError::MissingField { row: 0, field: "position" }));
}
