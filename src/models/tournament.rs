//! TournamentFormat: the playoff topologies an event can run.

use crate::models::error::Error;
use crate::models::level::CompetitionLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alliance count of a single-elimination bracket.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BracketSize {
    Four,
    Eight,
    Sixteen,
}

impl BracketSize {
    pub fn alliances(self) -> u32 {
        match self {
            BracketSize::Four => 4,
            BracketSize::Eight => 8,
            BracketSize::Sixteen => 16,
        }
    }
}

/// Length of a finals-only series.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FinalsLength {
    BestOf3,
    BestOf5,
}

impl FinalsLength {
    pub fn matches(self) -> u32 {
        match self {
            FinalsLength::BestOf3 => 3,
            FinalsLength::BestOf5 => 5,
        }
    }
}

/// Playoff topology of an event. Fixed per event once matches are imported.
///
/// Serialized as its slug (`bracket_8`, `double_elim_8`, ...).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TournamentFormat {
    SingleElimBracket { size: BracketSize },
    /// Quarterfinal and semifinal rounds ranked by average score, then a best-of-3 final.
    AverageScoreSeeded8,
    /// Six alliances play a 15-match round robin, top two meet in a best-of-3 final.
    RoundRobin6,
    DoubleElim8,
    BestOfNFinals { n: FinalsLength },
    /// Advancement for these events is curated outside this crate.
    Custom,
}

impl TournamentFormat {
    pub const ALL: [TournamentFormat; 9] = [
        TournamentFormat::SingleElimBracket {
            size: BracketSize::Four,
        },
        TournamentFormat::SingleElimBracket {
            size: BracketSize::Eight,
        },
        TournamentFormat::SingleElimBracket {
            size: BracketSize::Sixteen,
        },
        TournamentFormat::AverageScoreSeeded8,
        TournamentFormat::RoundRobin6,
        TournamentFormat::DoubleElim8,
        TournamentFormat::BestOfNFinals {
            n: FinalsLength::BestOf3,
        },
        TournamentFormat::BestOfNFinals {
            n: FinalsLength::BestOf5,
        },
        TournamentFormat::Custom,
    ];

    /// Stable identifier used in configuration and serialized output.
    pub fn slug(self) -> &'static str {
        match self {
            TournamentFormat::SingleElimBracket { size } => match size {
                BracketSize::Four => "bracket_4",
                BracketSize::Eight => "bracket_8",
                BracketSize::Sixteen => "bracket_16",
            },
            TournamentFormat::AverageScoreSeeded8 => "avg_score_8",
            TournamentFormat::RoundRobin6 => "round_robin_6",
            TournamentFormat::DoubleElim8 => "double_elim_8",
            TournamentFormat::BestOfNFinals { n } => match n {
                FinalsLength::BestOf3 => "bo3_finals",
                FinalsLength::BestOf5 => "bo5_finals",
            },
            TournamentFormat::Custom => "custom",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TournamentFormat::SingleElimBracket { size } => match size {
                BracketSize::Four => "Elimination Bracket (4 Alliances)",
                BracketSize::Eight => "Elimination Bracket (8 Alliances)",
                BracketSize::Sixteen => "Elimination Bracket (16 Alliances)",
            },
            TournamentFormat::AverageScoreSeeded8 => "Average Score (8 Alliances)",
            TournamentFormat::RoundRobin6 => "Round Robin (6 Alliances)",
            TournamentFormat::DoubleElim8 => "Double Elimination Bracket (8 Alliances)",
            TournamentFormat::BestOfNFinals { n } => match n {
                FinalsLength::BestOf3 => "Best of 3 Finals",
                FinalsLength::BestOf5 => "Best of 5 Finals",
            },
            TournamentFormat::Custom => "Custom",
        }
    }

    /// Size of the playoff raw numbering domain, `None` for `Custom`.
    pub fn playoff_match_count(self) -> Option<u32> {
        match self {
            TournamentFormat::SingleElimBracket { size } => match size {
                BracketSize::Four => Some(9),
                BracketSize::Eight => Some(21),
                BracketSize::Sixteen => Some(45),
            },
            TournamentFormat::AverageScoreSeeded8 => Some(17),
            TournamentFormat::RoundRobin6 => Some(18),
            TournamentFormat::DoubleElim8 => Some(15),
            TournamentFormat::BestOfNFinals { n } => Some(n.matches()),
            TournamentFormat::Custom => None,
        }
    }

    /// Playoff levels this format plays, in order.
    pub fn playoff_levels(self) -> &'static [CompetitionLevel] {
        use CompetitionLevel::*;
        match self {
            TournamentFormat::SingleElimBracket { size } => match size {
                BracketSize::Four => &[SemiFinal, Final],
                BracketSize::Eight => &[QuarterFinal, SemiFinal, Final],
                BracketSize::Sixteen => &[EighthFinal, QuarterFinal, SemiFinal, Final],
            },
            TournamentFormat::AverageScoreSeeded8 => &[QuarterFinal, SemiFinal, Final],
            TournamentFormat::RoundRobin6 => &[SemiFinal, Final],
            TournamentFormat::DoubleElim8 => &[EighthFinal, QuarterFinal, SemiFinal, Final],
            TournamentFormat::BestOfNFinals { .. } => &[Final],
            TournamentFormat::Custom => &[],
        }
    }
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for TournamentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TournamentFormat::ALL
            .into_iter()
            .find(|format| format.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidFormat(s.to_string()))
    }
}

impl From<TournamentFormat> for String {
    fn from(format: TournamentFormat) -> Self {
        format.slug().to_string()
    }
}

impl TryFrom<String> for TournamentFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Side of a double elimination bracket a set belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleElimBracket {
    Winner,
    Loser,
}
