//! Error values returned by the resolver and the advancement synthesizer.

use crate::models::identifier::MatchIdentifier;
use crate::models::level::{CompetitionLevel, MatchPhase};
use crate::models::tournament::TournamentFormat;
use serde::Serialize;
use thiserror::Error;

/// Why a match handed to the synthesizer was set aside.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MalformedReason {
    /// No set of the active format carries this identifier.
    UnknownSet,
    /// The match was grouped under a different level than its identifier names.
    LevelMismatch { grouped_under: CompetitionLevel },
    /// An earlier match already carries this identifier.
    Duplicate,
    /// Grand final rematch listed although the winner-bracket alliance took match 1.
    UnnecessaryRematch,
}

#[derive(Clone, Debug, Eq, PartialEq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Error {
    #[error("{phase} match {raw_sequence_number} has no mapping under {format}")]
    OutOfRangeMatch {
        format: TournamentFormat,
        phase: MatchPhase,
        raw_sequence_number: u32,
    },

    #[error("{identifier} is not a double elimination bracket position")]
    InvalidBracketPosition { identifier: MatchIdentifier },

    #[error("{identifier} rejected from advancement: {reason:?}")]
    MalformedAdvancementInput {
        identifier: MatchIdentifier,
        reason: MalformedReason,
    },

    #[error("{format} playoff matches are not resolved automatically")]
    UnresolvableFormat { format: TournamentFormat },

    #[error("{identifier} has no raw sequence number under {format}")]
    UnmappedIdentifier {
        format: TournamentFormat,
        identifier: MatchIdentifier,
    },

    #[error("Unknown tournament format: {0}")]
    InvalidFormat(String),

    #[error("Invalid match identifier: {0}")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
