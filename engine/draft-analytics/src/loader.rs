//! # Draft Pick Loading
//!
//! Turns rows of the draft picks CSV into validated [`DraftPick`] records.
//! Rows keep their file order, which is the dataset's canonical order.

use crate::error::{DraftError, DraftResult};
use crate::models::{DraftPick, PerformanceStats};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Highest valid draft round
pub const MAX_ROUND: i64 = 7;

/// Raw CSV row. Every column is optional text so that validation can name
/// the offending row and field instead of failing inside serde.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDraftPick {
    season: Option<String>,
    round: Option<String>,
    pick: Option<String>,
    team: Option<String>,
    college: Option<String>,
    position: Option<String>,
    pfr_player_name: Option<String>,
    games: Option<String>,
    w_av: Option<String>,
    allpro: Option<String>,
    probowls: Option<String>,
    pass_yards: Option<String>,
    pass_tds: Option<String>,
    rush_yards: Option<String>,
    rush_tds: Option<String>,
    rec_yards: Option<String>,
    rec_tds: Option<String>,
    def_solo_tackles: Option<String>,
    def_sacks: Option<String>,
    def_ints: Option<String>,
}

fn is_missing(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text == "NA" || text == "NaN"
}

/// Trimmed text, with empty cells and NA markers read as missing
fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !is_missing(v))
}

/// Cell text exactly as written; used for lookup keys like the college
fn verbatim(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_missing(v))
}

fn parse_number(row: usize, field: &'static str, value: Option<String>) -> DraftResult<Option<f64>> {
    match present(value) {
        None => Ok(None),
        Some(text) => match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(DraftError::InvalidValue { row, field, value: text }),
        },
    }
}

/// Whole, non-negative numbers; accepts "3" and "3.0"
fn parse_count(row: usize, field: &'static str, value: Option<String>) -> DraftResult<Option<u32>> {
    match parse_number(row, field, value)? {
        None => Ok(None),
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => Ok(Some(v as u32)),
        Some(v) => Err(DraftError::InvalidValue { row, field, value: v.to_string() }),
    }
}

fn required(row: usize, field: &'static str, value: Option<String>) -> DraftResult<String> {
    present(value).ok_or(DraftError::MissingField { row, field })
}

impl RawDraftPick {
    fn validate(self, row: usize) -> DraftResult<DraftPick> {
        let season = parse_number(row, "season", self.season)?
            .ok_or(DraftError::MissingField { row, field: "season" })?;
        if season.fract() != 0.0 || season < i32::MIN as f64 || season > i32::MAX as f64 {
            return Err(DraftError::InvalidValue { row, field: "season", value: season.to_string() });
        }

        let round = match parse_number(row, "round", self.round)? {
            None => None,
            Some(r) if r.fract() != 0.0 => {
                return Err(DraftError::InvalidValue { row, field: "round", value: r.to_string() });
            }
            Some(r) if r < 0.0 || r as i64 > MAX_ROUND => {
                return Err(DraftError::InvalidRound { row, round: r as i64 });
            }
            Some(r) => Some(r as u8),
        };

        let position = required(row, "position", self.position)?;
        let team = required(row, "team", self.team)?;
        let player_name = required(row, "pfr_player_name", self.pfr_player_name)?;

        let stats = PerformanceStats {
            w_av: parse_number(row, "w_av", self.w_av)?,
            allpro: parse_count(row, "allpro", self.allpro)?,
            probowls: parse_count(row, "probowls", self.probowls)?,
            pass_yards: parse_number(row, "pass_yards", self.pass_yards)?,
            pass_tds: parse_number(row, "pass_tds", self.pass_tds)?,
            rush_yards: parse_number(row, "rush_yards", self.rush_yards)?,
            rush_tds: parse_number(row, "rush_tds", self.rush_tds)?,
            rec_yards: parse_number(row, "rec_yards", self.rec_yards)?,
            rec_tds: parse_number(row, "rec_tds", self.rec_tds)?,
            def_solo_tackles: parse_number(row, "def_solo_tackles", self.def_solo_tackles)?,
            def_sacks: parse_number(row, "def_sacks", self.def_sacks)?,
            def_ints: parse_number(row, "def_ints", self.def_ints)?,
        };

        Ok(DraftPick {
            row,
            season: season as i32,
            round,
            pick: parse_count(row, "pick", self.pick)?,
            team,
            college: verbatim(self.college),
            position,
            player_name,
            games: parse_count(row, "games", self.games)?,
            stats,
        })
    }
}

/// Parse draft picks from any reader. `source` names the input in errors.
pub fn load_picks_from_reader<R: Read>(rdr: R, source: &str) -> DraftResult<Vec<DraftPick>> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut picks = Vec::new();

    for (row, result) in reader.deserialize::<RawDraftPick>().enumerate() {
        let raw = result.map_err(|e| DraftError::Csv { path: source.to_string(), source: e })?;
        picks.push(raw.validate(row)?);
    }

    debug!("Parsed {} draft picks from {}", picks.len(), source);
    Ok(picks)
}

/// Load draft picks from a CSV file
pub async fn load_picks_from_file<P: AsRef<Path>>(file_path: P) -> DraftResult<Vec<DraftPick>> {
    let path = file_path.as_ref();
    info!("Loading draft picks from: {:?}", path);

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DraftError::Io { path: path.display().to_string(), source: e })?;
    let picks = load_picks_from_reader(content.as_bytes(), &path.display().to_string())?;

    info!("Loaded {} draft picks", picks.len());
    Ok(picks)
}
