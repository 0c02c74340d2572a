//! Match, Alliance, and outcome data handed over by the reporting path.

use crate::models::identifier::MatchIdentifier;
use crate::models::level::CompetitionLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Team key as stored upstream (e.g. `frc254`).
pub type TeamKey = String;

/// Side of the field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllianceColor {
    Red,
    Blue,
}

impl AllianceColor {
    pub fn opponent(self) -> Self {
        match self {
            AllianceColor::Red => AllianceColor::Blue,
            AllianceColor::Blue => AllianceColor::Red,
        }
    }
}

/// Which side took the match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Red,
    Blue,
    Tie,
}

impl Winner {
    pub fn color(self) -> Option<AllianceColor> {
        match self {
            Winner::Red => Some(AllianceColor::Red),
            Winner::Blue => Some(AllianceColor::Blue),
            Winner::Tie => None,
        }
    }
}

/// Result of a played match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Winner,
    pub red_score: u32,
    pub blue_score: u32,
}

impl MatchOutcome {
    pub fn score(&self, color: AllianceColor) -> u32 {
        match color {
            AllianceColor::Red => self.red_score,
            AllianceColor::Blue => self.blue_score,
        }
    }
}

/// Teams playing together on one side of a match. Team order is normalized on construction.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Alliance {
    pub teams: Vec<TeamKey>,
}

impl Alliance {
    pub fn new<I, T>(teams: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TeamKey>,
    {
        let mut teams: Vec<TeamKey> = teams.into_iter().map(Into::into).collect();
        teams.sort();
        teams.dedup();
        Self { teams }
    }

    /// No teams listed yet (match scheduled before its alliances are decided).
    pub fn is_unknown(&self) -> bool {
        self.teams.is_empty()
    }

    /// Same alliance despite a backup robot swap: more than half of the smaller lineup is shared.
    /// An unknown lineup matches nothing, itself included.
    pub fn same_as(&self, other: &Alliance) -> bool {
        if self.is_unknown() || other.is_unknown() {
            return false;
        }
        if self == other {
            return true;
        }
        let smaller = self.teams.len().min(other.teams.len());
        let shared = self
            .teams
            .iter()
            .filter(|t| other.teams.contains(t))
            .count();
        shared > smaller / 2
    }
}

/// A match with its canonical identifier and, once played, its outcome.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub identifier: MatchIdentifier,
    pub red: Alliance,
    pub blue: Alliance,
    /// None if not yet played.
    pub outcome: Option<MatchOutcome>,
}

impl GameMatch {
    pub fn new(identifier: MatchIdentifier, red: Alliance, blue: Alliance) -> Self {
        Self {
            identifier,
            red,
            blue,
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, outcome: MatchOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn alliance(&self, color: AllianceColor) -> &Alliance {
        match color {
            AllianceColor::Red => &self.red,
            AllianceColor::Blue => &self.blue,
        }
    }

    /// Color `alliance` played as in this match, if it played.
    pub fn color_of(&self, alliance: &Alliance) -> Option<AllianceColor> {
        if self.red.same_as(alliance) {
            Some(AllianceColor::Red)
        } else if self.blue.same_as(alliance) {
            Some(AllianceColor::Blue)
        } else {
            None
        }
    }

    /// Winning alliance; None if unplayed or tied.
    pub fn winning_alliance(&self) -> Option<&Alliance> {
        let color = self.outcome?.winner.color()?;
        Some(self.alliance(color))
    }

    pub fn losing_alliance(&self) -> Option<&Alliance> {
        let color = self.outcome?.winner.color()?;
        Some(self.alliance(color.opponent()))
    }
}

/// Matches of one event grouped by the level they were filed under.
pub type MatchesByLevel = BTreeMap<CompetitionLevel, Vec<GameMatch>>;

/// Group matches by their identifier's level, preserving input order within a level.
pub fn group_by_level<I>(matches: I) -> MatchesByLevel
where
    I: IntoIterator<Item = GameMatch>,
{
    let mut grouped = MatchesByLevel::new();
    for m in matches {
        grouped.entry(m.identifier.level).or_default().push(m);
    }
    grouped
}
