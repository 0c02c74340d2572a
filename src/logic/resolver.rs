//! Raw sequence number to MatchIdentifier, and back.

use crate::logic::tables::{
    band_invert, band_resolve, Band, LookupTable, AVG_SCORE_8_BANDS, BO3_FINALS_BANDS,
    BO5_FINALS_BANDS, BRACKET_16_TABLE, BRACKET_4_OFFSET, BRACKET_8_BANDS, DOUBLE_ELIM_8_TABLE,
    ROUND_ROBIN_6_BANDS,
};
use crate::models::{
    BracketSize, CompetitionLevel, DoubleElimBracket, Error, FinalsLength, MatchIdentifier,
    MatchPhase, Result, TournamentFormat,
};

/// How a format numbers its playoff matches.
enum Policy {
    Bands(&'static [Band]),
    /// Band list of a larger draw whose first `offset` raw numbers don't exist here.
    OffsetBands {
        bands: &'static [Band],
        offset: u32,
    },
    Table(&'static LookupTable),
    /// No automatic mapping.
    Unresolved,
}

fn policy(format: TournamentFormat) -> Policy {
    match format {
        TournamentFormat::SingleElimBracket { size } => match size {
            BracketSize::Four => Policy::OffsetBands {
                bands: BRACKET_8_BANDS,
                offset: BRACKET_4_OFFSET,
            },
            BracketSize::Eight => Policy::Bands(BRACKET_8_BANDS),
            BracketSize::Sixteen => Policy::Table(&BRACKET_16_TABLE),
        },
        TournamentFormat::AverageScoreSeeded8 => Policy::Bands(AVG_SCORE_8_BANDS),
        TournamentFormat::RoundRobin6 => Policy::Bands(ROUND_ROBIN_6_BANDS),
        TournamentFormat::DoubleElim8 => Policy::Table(&DOUBLE_ELIM_8_TABLE),
        TournamentFormat::BestOfNFinals { n } => match n {
            FinalsLength::BestOf3 => Policy::Bands(BO3_FINALS_BANDS),
            FinalsLength::BestOf5 => Policy::Bands(BO5_FINALS_BANDS),
        },
        TournamentFormat::Custom => Policy::Unresolved,
    }
}

/// Assign the canonical identifier for a raw, phase-local sequence number.
///
/// Qualification numbering is the identity under every format. Playoff numbering
/// depends on the format; a number outside its domain is `OutOfRangeMatch`.
pub fn resolve(
    format: TournamentFormat,
    phase: MatchPhase,
    raw_sequence_number: u32,
) -> Result<MatchIdentifier> {
    let out_of_range = || Error::OutOfRangeMatch {
        format,
        phase,
        raw_sequence_number,
    };
    if raw_sequence_number == 0 {
        return Err(out_of_range());
    }
    if phase == MatchPhase::QualificationPhase {
        return Ok(MatchIdentifier::qualification(raw_sequence_number));
    }

    let resolved = match policy(format) {
        Policy::Bands(bands) => band_resolve(bands, raw_sequence_number),
        Policy::OffsetBands { bands, offset } => raw_sequence_number
            .checked_add(offset)
            .and_then(|raw| band_resolve(bands, raw)),
        Policy::Table(table) => table.get(raw_sequence_number),
        Policy::Unresolved => return Err(Error::UnresolvableFormat { format }),
    };
    resolved.ok_or_else(out_of_range)
}

/// Raw sequence number `identifier` was resolved from. Left inverse of [`resolve`].
pub fn invert(format: TournamentFormat, identifier: &MatchIdentifier) -> Result<u32> {
    let unmapped = || Error::UnmappedIdentifier {
        format,
        identifier: *identifier,
    };
    if identifier.level == CompetitionLevel::Qualification {
        return match (identifier.set_number, identifier.match_number) {
            (1, m) if m > 0 => Ok(m),
            _ => Err(unmapped()),
        };
    }

    let raw = match policy(format) {
        Policy::Bands(bands) => band_invert(bands, identifier),
        Policy::OffsetBands { bands, offset } => band_invert(bands, identifier)
            .and_then(|raw| raw.checked_sub(offset))
            .filter(|&raw| raw > 0),
        Policy::Table(table) => table.position(identifier),
        Policy::Unresolved => return Err(Error::UnresolvableFormat { format }),
    };
    raw.ok_or_else(unmapped)
}

/// Whether `identifier` names a match that can exist under `format`.
pub fn validate(format: TournamentFormat, identifier: &MatchIdentifier) -> Result<()> {
    invert(format, identifier).map(|_| ())
}

/// Winner or loser side of a double elimination set.
///
/// Finals set 1 is the loser-bracket final and set 2 the grand final, which the
/// winner-bracket alliance enters from the winner side.
pub fn classify_bracket_side(
    format: TournamentFormat,
    identifier: &MatchIdentifier,
) -> Result<DoubleElimBracket> {
    let invalid = || Error::InvalidBracketPosition {
        identifier: *identifier,
    };
    if format != TournamentFormat::DoubleElim8 {
        return Err(invalid());
    }
    use DoubleElimBracket::{Loser, Winner};
    match (identifier.level, identifier.set_number) {
        (CompetitionLevel::EighthFinal, 1..=4) => Ok(Winner),
        (CompetitionLevel::EighthFinal, 5..=8) => Ok(Loser),
        (CompetitionLevel::QuarterFinal, 1..=2) => Ok(Winner),
        (CompetitionLevel::QuarterFinal, 3..=4) => Ok(Loser),
        (CompetitionLevel::SemiFinal, 1) => Ok(Winner),
        (CompetitionLevel::SemiFinal, 2) => Ok(Loser),
        (CompetitionLevel::Final, 1) => Ok(Loser),
        (CompetitionLevel::Final, 2) => Ok(Winner),
        _ => Err(invalid()),
    }
}
