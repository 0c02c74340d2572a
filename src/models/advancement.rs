//! AdvancementResult and the views it carries.

use crate::models::error::Error;
use crate::models::game::{Alliance, AllianceColor, GameMatch};
use crate::models::identifier::MatchIdentifier;
use crate::models::level::CompetitionLevel;
use crate::models::standing::AllianceAdvancementStatus;
use crate::models::tournament::DoubleElimBracket;
use serde::{Deserialize, Serialize};

/// Where a bracket slot's alliance comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "from")]
pub enum SlotSource {
    Seed { seed: u32 },
    WinnerOf { level: CompetitionLevel, set_number: u32 },
    LoserOf { level: CompetitionLevel, set_number: u32 },
    /// Finishing position in a ranked round.
    RankOf { level: CompetitionLevel, rank: u32 },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum Slot {
    Known { alliance: Alliance },
    /// Not determined yet; rendered as a placeholder.
    Pending { source: SlotSource },
}

impl Slot {
    pub fn alliance(&self) -> Option<&Alliance> {
        match self {
            Slot::Known { alliance } => Some(alliance),
            Slot::Pending { .. } => None,
        }
    }
}

/// One pairing of the bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketSet {
    pub set_number: u32,
    pub red: Slot,
    pub blue: Slot,
    pub best_of: u32,
    pub red_wins: u32,
    pub blue_wins: u32,
    pub ties: u32,
    pub winner: Option<AllianceColor>,
    pub matches: Vec<MatchIdentifier>,
}

impl BracketSet {
    pub fn slot(&self, color: AllianceColor) -> &Slot {
        match color {
            AllianceColor::Red => &self.red,
            AllianceColor::Blue => &self.blue,
        }
    }

    pub fn winning_alliance(&self) -> Option<&Alliance> {
        self.slot(self.winner?).alliance()
    }

    pub fn losing_alliance(&self) -> Option<&Alliance> {
        self.slot(self.winner?.opponent()).alliance()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketLevel {
    pub level: CompetitionLevel,
    pub sets: Vec<BracketSet>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketTable {
    pub levels: Vec<BracketLevel>,
}

impl BracketTable {
    pub fn set(&self, level: CompetitionLevel, set_number: u32) -> Option<&BracketSet> {
        self.levels
            .iter()
            .find(|l| l.level == level)?
            .sets
            .iter()
            .find(|s| s.set_number == set_number)
    }
}

/// A level whose alliances are ranked against each other instead of paired off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdvancementRound {
    pub level: CompetitionLevel,
    pub matches_expected: u32,
    pub matches_played: u32,
    /// How many of the top places advance once the round is complete.
    pub advance_count: u32,
    pub complete: bool,
    pub standings: Vec<AllianceAdvancementStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancementTable {
    pub rounds: Vec<AdvancementRound>,
    /// Every alliance seen in the playoffs, best placed first.
    pub standings: Vec<AllianceAdvancementStatus>,
}

impl AdvancementTable {
    pub fn round(&self, level: CompetitionLevel) -> Option<&AdvancementRound> {
        self.rounds.iter().find(|r| r.level == level)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DoubleElimLevel {
    pub level: CompetitionLevel,
    pub matches: Vec<GameMatch>,
}

/// Double elimination matches split by the bracket they belong to.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DoubleElimView {
    pub winner: Vec<DoubleElimLevel>,
    pub loser: Vec<DoubleElimLevel>,
}

impl DoubleElimView {
    pub fn side(&self, bracket: DoubleElimBracket) -> &[DoubleElimLevel] {
        match bracket {
            DoubleElimBracket::Winner => &self.winner,
            DoubleElimBracket::Loser => &self.loser,
        }
    }
}

/// Selects the view a rendering layer should use. Opaque to this crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TemplateTag {
    #[serde(rename = "playoff_table")]
    PlayoffTable,
    #[serde(rename = "playoff_round_robin_6_team")]
    RoundRobin6Team,
    #[serde(rename = "playoff_double_elim_8_team")]
    DoubleElim8Team,
}

impl TemplateTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateTag::PlayoffTable => "playoff_table",
            TemplateTag::RoundRobin6Team => "playoff_round_robin_6_team",
            TemplateTag::DoubleElim8Team => "playoff_double_elim_8_team",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancementResult {
    pub bracket_table: Option<BracketTable>,
    pub playoff_advancement: Option<AdvancementTable>,
    pub double_elim_matches: Option<DoubleElimView>,
    pub playoff_template: Option<TemplateTag>,
    /// Set for `Custom` events, whose advancement is supplied externally.
    pub unsupported: bool,
}

impl AdvancementResult {
    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }
}

/// Best-effort result plus the matches that had to be set aside.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Advancement {
    pub result: AdvancementResult,
    pub rejected: Vec<Error>,
}
