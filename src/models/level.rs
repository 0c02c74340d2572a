//! CompetitionLevel and MatchPhase.

use crate::models::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse tournament phase. Ordering follows play order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    Qualification,
    /// Octofinals; only 16-alliance brackets and double elimination use it.
    EighthFinal,
    QuarterFinal,
    SemiFinal,
    Final,
}

impl CompetitionLevel {
    pub const ALL: [CompetitionLevel; 5] = [
        CompetitionLevel::Qualification,
        CompetitionLevel::EighthFinal,
        CompetitionLevel::QuarterFinal,
        CompetitionLevel::SemiFinal,
        CompetitionLevel::Final,
    ];

    /// Short code used in match keys (`qm`, `ef`, `qf`, `sf`, `f`).
    pub fn abbreviation(self) -> &'static str {
        match self {
            CompetitionLevel::Qualification => "qm",
            CompetitionLevel::EighthFinal => "ef",
            CompetitionLevel::QuarterFinal => "qf",
            CompetitionLevel::SemiFinal => "sf",
            CompetitionLevel::Final => "f",
        }
    }

    pub fn verbose_name(self) -> &'static str {
        match self {
            CompetitionLevel::Qualification => "Quals",
            CompetitionLevel::EighthFinal => "Octos",
            CompetitionLevel::QuarterFinal => "Quarters",
            CompetitionLevel::SemiFinal => "Semis",
            CompetitionLevel::Final => "Finals",
        }
    }

    pub fn is_playoff(self) -> bool {
        self != CompetitionLevel::Qualification
    }

    /// Phase whose feed numbers matches at this level.
    pub fn phase(self) -> MatchPhase {
        if self.is_playoff() {
            MatchPhase::PlayoffPhase
        } else {
            MatchPhase::QualificationPhase
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for CompetitionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompetitionLevel::ALL
            .into_iter()
            .find(|level| level.abbreviation() == s)
            .ok_or_else(|| Error::InvalidIdentifier(s.to_string()))
    }
}

/// Which numbering sequence a raw feed number belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    QualificationPhase,
    PlayoffPhase,
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPhase::QualificationPhase => f.write_str("qualification"),
            MatchPhase::PlayoffPhase => f.write_str("playoff"),
        }
    }
}
