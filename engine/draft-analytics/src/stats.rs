//! Per-position career stat lines shown next to a team's top picks

use crate::models::{or_zero, PerformanceStats};

fn whole(value: Option<f64>) -> i64 {
    or_zero(value).trunc() as i64
}

/// Position-specific stat line, e.g. `Rec Yards: 812 | Rec TDs: 6`.
///
/// Positions without a stat profile (offensive line, specialists) get an
/// empty line.
pub fn stat_summary(position: &str, stats: &PerformanceStats) -> String {
    let parts: Vec<(&str, Option<f64>)> = match position {
        "QB" => vec![
            ("Pass Yards", stats.pass_yards),
            ("Pass TDs", stats.pass_tds),
            ("Rush Yards", stats.rush_yards),
            ("Rush TDs", stats.rush_tds),
        ],
        "RB" | "FB" => vec![
            ("Rush Yards", stats.rush_yards),
            ("Rush TDs", stats.rush_tds),
            ("Rec Yards", stats.rec_yards),
            ("Rec TDs", stats.rec_tds),
        ],
        "WR" | "TE" => vec![("Rec Yards", stats.rec_yards), ("Rec TDs", stats.rec_tds)],
        "DL" | "DE" | "DT" | "EDGE" => {
            vec![("Sacks", stats.def_sacks), ("Solo Tackles", stats.def_solo_tackles)]
        }
        "LB" => vec![
            ("Solo Tackles", stats.def_solo_tackles),
            ("Sacks", stats.def_sacks),
            ("INT", stats.def_ints),
        ],
        "CB" | "S" | "DB" => vec![("INT", stats.def_ints), ("Solo Tackles", stats.def_solo_tackles)],
        _ => Vec::new(),
    };

    parts
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, whole(value)))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Rushing + receiving + passing yards
pub fn total_yards(stats: &PerformanceStats) -> f64 {
    or_zero(stats.rush_yards) + or_zero(stats.rec_yards) + or_zero(stats.pass_yards)
}

/// Solo tackles + sacks + interceptions
pub fn defense_impact(stats: &PerformanceStats) -> f64 {
    or_zero(stats.def_solo_tackles) + or_zero(stats.def_sacks) + or_zero(stats.def_ints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarterback_line() {
        let stats = PerformanceStats {
            pass_yards: Some(4123.0),
            pass_tds: Some(31.0),
            rush_yards: None,
            rush_tds: Some(2.0),
            ..Default::default()
        };
        assert_eq!(
            stat_summary("QB", &stats),
            "Pass Yards: 4123 | Pass TDs: 31 | Rush Yards: 0 | Rush TDs: 2"
        );
    }

    #[test]
    fn test_defensive_lines() {
        let stats = PerformanceStats {
            def_sacks: Some(10.5),
            def_solo_tackles: Some(40.0),
            def_ints: Some(1.0),
            ..Default::default()
        };
        assert_eq!(stat_summary("EDGE", &stats), "Sacks: 10 | Solo Tackles: 40");
        assert_eq!(stat_summary("LB", &stats), "Solo Tackles: 40 | Sacks: 10 | INT: 1");
        assert_eq!(stat_summary("S", &stats), "INT: 1 | Solo Tackles: 40");
    }

    #[test]
    fn test_positions_without_profile() {
        let stats = PerformanceStats::default();
        assert_eq!(stat_summary("OL", &stats), "");
        assert_eq!(stat_summary("ST", &stats), "");
    }

    #[test]
    fn test_totals_treat_nulls_as_zero() {
        let stats = PerformanceStats {
            rush_yards: Some(100.0),
            rec_yards: None,
            pass_yards: Some(20.0),
            def_sacks: Some(1.5),
            ..Default::default()
        };
        assert_eq!(total_yards(&stats), 120.0);
        assert_eq!(defense_impact(&stats), 1.5);
        assert_eq!(stats.rec_yards, None);
    }
}
