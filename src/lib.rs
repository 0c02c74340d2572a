//! Playoff bracket engine: resolves raw scoring-feed match numbers into canonical
//! match identifiers and builds bracket/advancement views from identified matches.

pub mod logic;
pub mod models;

pub use logic::{classify_bracket_side, generate, invert, resolve, template_tag, validate};
pub use models::{
    group_by_level, Advancement, AdvancementResult, AdvancementRound, AdvancementTable, Alliance,
    AllianceAdvancementStatus, AllianceColor, AllianceStatus, BracketLevel, BracketSet,
    BracketSize, BracketTable, CompetitionLevel, DoubleElimBracket, DoubleElimLevel,
    DoubleElimView, Error, FinalsLength, GameMatch, MalformedReason, MatchIdentifier,
    MatchOutcome, MatchPhase, MatchesByLevel, Record, Result, Slot, SlotSource, TeamKey,
    TemplateTag, TournamentFormat, Winner,
};
