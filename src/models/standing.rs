//! Record and AllianceAdvancementStatus: per-alliance playoff standing.

use crate::models::game::Alliance;
use crate::models::level::CompetitionLevel;
use serde::{Deserialize, Serialize};

/// Win/loss/tie tally.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Record {
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    pub fn add_tie(&mut self) {
        self.ties += 1;
    }

    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Round-robin points: 2 per win, 1 per tie.
    pub fn points(&self) -> u32 {
        self.wins * 2 + self.ties
    }
}

/// Where an alliance stands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllianceStatus {
    #[default]
    Playing,
    /// Finished a ranked round inside the advancing places.
    Advanced,
    Eliminated,
    Champion,
}

impl AllianceStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, AllianceStatus::Eliminated | AllianceStatus::Champion)
    }
}

/// One row of an advancement table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllianceAdvancementStatus {
    /// 1-based position in the table it appears in.
    pub rank: u32,
    pub alliance: Alliance,
    pub current_level: CompetitionLevel,
    pub level_record: Record,
    pub playoff_record: Record,
    /// Only for formats ranked by average score.
    pub playoff_average: Option<f64>,
    pub status: AllianceStatus,
}

impl AllianceAdvancementStatus {
    pub fn new(alliance: Alliance, current_level: CompetitionLevel) -> Self {
        Self {
            rank: 0,
            alliance,
            current_level,
            level_record: Record::default(),
            playoff_record: Record::default(),
            playoff_average: None,
            status: AllianceStatus::Playing,
        }
    }

    pub fn eliminate(&mut self) {
        self.status = AllianceStatus::Eliminated;
    }
}
