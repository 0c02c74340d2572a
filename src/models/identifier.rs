//! MatchIdentifier: the canonical (level, set, match) key for a match.

use crate::models::error::Error;
use crate::models::level::CompetitionLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical match position within an event. Qualification matches always use set 1.
///
/// Ordering is play order within a level: level, then set, then match.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MatchIdentifier {
    pub level: CompetitionLevel,
    pub set_number: u32,
    pub match_number: u32,
}

impl MatchIdentifier {
    pub fn new(level: CompetitionLevel, set_number: u32, match_number: u32) -> Self {
        Self {
            level,
            set_number,
            match_number,
        }
    }

    pub fn qualification(match_number: u32) -> Self {
        Self::new(CompetitionLevel::Qualification, 1, match_number)
    }

    /// Human label, e.g. "Quals 12" or "Quarters 4 Match 3".
    pub fn verbose_name(&self) -> String {
        match self.level {
            CompetitionLevel::Qualification => {
                format!("{} {}", self.level.verbose_name(), self.match_number)
            }
            _ => format!(
                "{} {} Match {}",
                self.level.verbose_name(),
                self.set_number,
                self.match_number
            ),
        }
    }

    /// Full match key for an event, e.g. `2019casj_qf4m3`.
    pub fn event_key_name(&self, event_key: &str) -> String {
        format!("{}_{}", event_key, self)
    }
}

impl fmt::Display for MatchIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            CompetitionLevel::Qualification => write!(f, "qm{}", self.match_number),
            level => write!(f, "{}{}m{}", level, self.set_number, self.match_number),
        }
    }
}

impl FromStr for MatchIdentifier {
    type Err = Error;

    /// Parses the short key produced by `Display` (`qm12`, `sf2m1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidIdentifier(s.to_string());
        let split = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (prefix, rest) = s.split_at(split);
        let level: CompetitionLevel = prefix.parse().map_err(|_| invalid())?;

        let (set_number, match_number) = match level {
            CompetitionLevel::Qualification => (1, rest.parse::<u32>().map_err(|_| invalid())?),
            _ => {
                let (set, m) = rest.split_once('m').ok_or_else(invalid)?;
                (
                    set.parse::<u32>().map_err(|_| invalid())?,
                    m.parse::<u32>().map_err(|_| invalid())?,
                )
            }
        };
        if set_number == 0 || match_number == 0 {
            return Err(invalid());
        }
        Ok(Self::new(level, set_number, match_number))
    }
}
