//! Data structures: formats, levels, match identifiers, matches and advancement views.

mod advancement;
mod error;
mod game;
mod identifier;
mod level;
mod standing;
mod tournament;

pub use advancement::{
    Advancement, AdvancementResult, AdvancementRound, AdvancementTable, BracketLevel, BracketSet,
    BracketTable, DoubleElimLevel, DoubleElimView, Slot, SlotSource, TemplateTag,
};
pub use error::{Error, MalformedReason, Result};
pub use game::{
    group_by_level, Alliance, AllianceColor, GameMatch, MatchOutcome, MatchesByLevel, TeamKey,
    Winner,
};
pub use identifier::MatchIdentifier;
pub use level::{CompetitionLevel, MatchPhase};
pub use standing::{AllianceAdvancementStatus, AllianceStatus, Record};
pub use tournament::{BracketSize, DoubleElimBracket, FinalsLength, TournamentFormat};
