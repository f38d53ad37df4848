//! # Command Line Interface
//!
//! CLI for printing the dashboard's draft reports.

use crate::config::{AnalyticsConfig, LoggingConfig};
use crate::engine::{DraftAnalytics, LandingReport, Selection, TeamReport};
use crate::aggregation::TeamEfficiency;
use crate::models::DraftGrade;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Draft analytics CLI
#[derive(Parser)]
#[command(name = "draft-cli")]
#[command(about = "NFL draft class analytics: sourcing, efficiency and draft grades")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Draft picks CSV (overrides the configuration)
    #[arg(long)]
    pub picks: Option<PathBuf>,

    /// College -> conference CSV (overrides the configuration)
    #[arg(long)]
    pub conferences: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summary, position breakdown and top colleges/conferences
    Landing {
        /// Draft years, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        years: Vec<i32>,
        /// Rows in the college and conference rankings
        #[arg(long)]
        limit: Option<usize>,
        /// Conference to leave out of the conference ranking
        #[arg(long)]
        exclude_conference: Option<String>,
    },
    /// Draft grade and top performers of one team
    Team {
        /// Team abbreviation (e.g., NWE)
        #[arg(long)]
        team: String,
        /// Draft years, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        years: Vec<i32>,
        /// Rows in the top performers table
        #[arg(long)]
        top: Option<usize>,
    },
    /// Average round vs. average w_av per team for one draft year
    Efficiency {
        #[arg(long)]
        year: i32,
    },
    /// Draft grade of every team
    Grades {
        /// Draft years, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        years: Vec<i32>,
    },
}

/// JSON envelope for every report
#[derive(Serialize)]
struct Envelope<T: Serialize> {
    generated_at: DateTime<Utc>,
    report: T,
}

/// Install the tracing subscriber. RUST_LOG wins over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let result = if config.json { builder.json().try_init() } else { builder.try_init() };
    if let Err(e) = result {
        eprintln!("logging already initialised: {e}");
    }
}

/// Resolve configuration: file (if any), then environment, then CLI flags
pub fn resolve_config(cli: &Cli) -> Result<AnalyticsConfig> {
    let config = match &cli.config {
        Some(path) => AnalyticsConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AnalyticsConfig::default(),
    };
    let mut config = config.with_env_overrides().context("Invalid environment configuration")?;

    if let Some(picks) = &cli.picks {
        config.data.draft_picks_path = picks.clone();
    }
    if let Some(conferences) = &cli.conferences {
        config.data.conferences_path = conferences.clone();
    }

    // Sizing flags override the report section
    match &cli.command {
        Commands::Landing { limit: Some(limit), .. } => config.report.top_limit = *limit,
        Commands::Team { top: Some(top), .. } => config.report.team_top_players = *top,
        _ => {}
    }
    Ok(config)
}

/// CLI handler
pub struct CliHandler {
    engine: DraftAnalytics,
    json: bool,
}

impl CliHandler {
    /// Create new CLI handler
    pub async fn new(config: AnalyticsConfig, json: bool) -> Result<Self> {
        let engine = DraftAnalytics::load(config).await.context("Failed to load draft data")?;
        Ok(Self { engine, json })
    }

    /// Handle CLI commands
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Landing { years, exclude_conference, .. } => {
                self.show_landing(years, exclude_conference.as_deref())?;
            }
            Commands::Team { team, years, .. } => {
                self.show_team(&team, years)?;
            }
            Commands::Efficiency { year } => {
                self.show_efficiency(year)?;
            }
            Commands::Grades { years } => {
                self.show_grades(years)?;
            }
        }
        Ok(())
    }

    fn emit<T: Serialize>(&self, report: T) -> Result<()> {
        let envelope = Envelope { generated_at: Utc::now(), report };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        Ok(())
    }

    fn show_landing(&self, years: Vec<i32>, exclude: Option<&str>) -> Result<()> {
        let selection = Selection::seasons(years)?;
        let report = self.engine.landing(&selection, exclude)?;

        if self.json {
            return self.emit(report);
        }
        print_landing(&report);
        Ok(())
    }

    fn show_team(&self, team: &str, years: Vec<i32>) -> Result<()> {
        let seasons: BTreeSet<i32> = years.into_iter().collect();
        let report = self.engine.team_overview(team, &seasons)?;

        if self.json {
            return self.emit(report);
        }
        print_team(&report);
        Ok(())
    }

    fn show_efficiency(&self, year: i32) -> Result<()> {
        let points = self.engine.efficiency(year)?;

        if self.json {
            return self.emit(points);
        }
        print_efficiency(year, &points);
        Ok(())
    }

    fn show_grades(&self, years: Vec<i32>) -> Result<()> {
        let seasons: BTreeSet<i32> = years.into_iter().collect();
        let grades = self.engine.grade_table(&seasons)?;

        if self.json {
            return self.emit(grades);
        }
        print_grades(&grades);
        Ok(())
    }
}

fn print_landing(report: &LandingReport) {
    println!("📊 Draft Summary {:?}", report.seasons);
    println!("{}", "=".repeat(50));
    println!("Total Players Drafted: {}", report.summary.total_players);
    println!("Colleges:              {}", report.summary.colleges);
    println!("Conferences:           {}", report.summary.conferences);

    println!("\nPosition Breakdown");
    println!("{}", "-".repeat(50));
    for row in &report.positions {
        println!("{:6} {:5}", row.key, row.count);
    }

    println!("\nPlayers by Position and Round");
    println!("{}", "-".repeat(50));
    let header: String = report.heatmap.rounds.iter().map(|r| format!("{:>5}", r)).collect();
    println!("{:6}{}", "", header);
    for (position, cells) in report.heatmap.positions.iter().zip(&report.heatmap.cells) {
        let line: String = cells
            .iter()
            .map(|c| c.map_or_else(|| format!("{:>5}", "."), |n| format!("{:>5}", n)))
            .collect();
        println!("{:6}{}", position, line);
    }

    println!("\nTop Colleges");
    println!("{}", "-".repeat(50));
    for row in &report.top_colleges {
        println!("{:30} {:5}", row.key, row.count);
    }

    println!("\nTop Conferences");
    println!("{}", "-".repeat(50));
    for conf in &report.top_conferences {
        println!("{:30} {:5}  {}", conf.conference, conf.count, conf.drill_down_text(", "));
    }
}

fn print_team(report: &TeamReport) {
    println!("🏈 Team Draft Performance: {}", report.team.name);
    println!("{}", "=".repeat(50));
    println!("{}  [{}]", report.grade.badge(), report.grade.bucket.color());
    println!("Players Drafted: {}", report.grade.player_count);

    match &report.aggregate {
        Some(agg) => {
            println!("Avg Weighted Approximate Value: {:.1}", agg.avg_w_av);
            println!("Avg Round: {:.2}", agg.avg_round);
            println!("Top Impact Player: {}", agg.top_impact_player);
        }
        None => println!("No players drafted in the selected years"),
    }

    if report.top_players.is_empty() {
        return;
    }
    println!("\nTop Statistical Performers");
    println!("{}", "-".repeat(50));
    for line in &report.top_players {
        println!(
            "{:7.1} {} {:25} {:5} {}  {}",
            line.impact_score,
            line.season,
            line.player_name,
            line.position,
            line.recognition_mark,
            line.stat_summary
        );
    }
}

fn print_efficiency(year: i32, points: &[TeamEfficiency]) {
    println!("⚡ NFL Draft Efficiency by Team ({})", year);
    println!("{}", "=".repeat(50));
    println!("Team  Avg Round  Avg W_AV  Picks");
    for point in points {
        println!("{:5} {:9.2} {:9.2} {:6}", point.team, point.avg_round, point.avg_w_av, point.picks.len());
    }
}

fn print_grades(grades: &[DraftGrade]) {
    println!("🎯 Draft Grades");
    println!("{}", "=".repeat(50));
    for grade in grades {
        println!("{:5} {:3} {:6.1} {:3} players", grade.team, grade.letter.as_str(), grade.score, grade.player_count);
    }
}
