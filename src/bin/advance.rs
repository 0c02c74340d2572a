//! Command-line driver: import a scoring-feed CSV export and print the advancement views as JSON.
//! Run with: cargo run --bin advance -- <format> <matches.csv>
//! Without arguments reads env: BRACKET_FORMAT (e.g. double_elim_8), BRACKET_MATCHES (CSV path).
//!
//! CSV columns: phase (qual/playoff), raw, red, blue (space separated team keys),
//! red_score, blue_score, winner (red/blue/tie, empty if unplayed).

use playoff_bracket::{
    generate, group_by_level, resolve, Alliance, GameMatch, MatchOutcome, MatchPhase,
    TournamentFormat, Winner,
};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RowPhase {
    Qual,
    Playoff,
}

impl From<RowPhase> for MatchPhase {
    fn from(phase: RowPhase) -> Self {
        match phase {
            RowPhase::Qual => MatchPhase::QualificationPhase,
            RowPhase::Playoff => MatchPhase::PlayoffPhase,
        }
    }
}

/// One exported match as the scoring system numbers it.
#[derive(Debug, Deserialize)]
struct MatchRow {
    phase: RowPhase,
    raw: u32,
    red: String,
    blue: String,
    red_score: Option<u32>,
    blue_score: Option<u32>,
    winner: Option<Winner>,
}

impl MatchRow {
    /// Assign the canonical identifier; fails for numbers the format doesn't define.
    fn into_match(self, format: TournamentFormat) -> playoff_bracket::Result<GameMatch> {
        let identifier = resolve(format, self.phase.into(), self.raw)?;
        log::debug!("{} {} -> {}", self.phase.label(), self.raw, identifier.verbose_name());
        let m = GameMatch::new(
            identifier,
            Alliance::new(self.red.split_whitespace()),
            Alliance::new(self.blue.split_whitespace()),
        );
        Ok(match self.winner {
            Some(winner) => m.with_outcome(MatchOutcome {
                winner,
                red_score: self.red_score.unwrap_or(0),
                blue_score: self.blue_score.unwrap_or(0),
            }),
            None => m,
        })
    }
}

impl RowPhase {
    fn label(self) -> &'static str {
        match self {
            RowPhase::Qual => "qual",
            RowPhase::Playoff => "playoff",
        }
    }
}

fn default_format() -> String {
    "bracket_8".to_string()
}

fn default_matches_path() -> String {
    "matches.csv".to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let format: TournamentFormat = args
        .next()
        .or_else(|| std::env::var("BRACKET_FORMAT").ok())
        .unwrap_or_else(default_format)
        .parse()?;
    let path = args
        .next()
        .or_else(|| std::env::var("BRACKET_MATCHES").ok())
        .unwrap_or_else(default_matches_path);
    log::info!("Importing {} as {}", path, format.display_name());

    let mut reader = csv::Reader::from_path(&path)?;
    let mut imported = Vec::new();
    for (index, row) in reader.deserialize::<MatchRow>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        match row?.into_match(format) {
            Ok(m) => imported.push(m),
            Err(e) => log::warn!("Quarantined line {}: {}", line, e),
        }
    }
    log::info!("Resolved {} match(es)", imported.len());

    let advancement = generate(format, &group_by_level(imported));
    for rejected in &advancement.rejected {
        log::warn!("Left out of advancement: {}", rejected);
    }
    if advancement.result.unsupported {
        log::info!("{} advancement is curated manually", format.display_name());
    }

    println!("{}", serde_json::to_string_pretty(&advancement.result)?);
    Ok(())
}
