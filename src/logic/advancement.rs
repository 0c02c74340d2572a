//! Advancement synthesis: the bracket and standings views for one event.

use crate::logic::bracket::{build_bracket, topology};
use crate::logic::double_elim::{group_sides, unnecessary_rematch};
use crate::logic::resolver::validate;
use crate::logic::standings::{overall_standings, rank_rounds};
use crate::models::{
    Advancement, AdvancementResult, AdvancementTable, Error, GameMatch, MalformedReason,
    MatchesByLevel, TemplateTag, TournamentFormat,
};
use std::collections::HashSet;

/// Rendering template for the format, if it needs more than the plain bracket.
pub fn template_tag(format: TournamentFormat) -> Option<TemplateTag> {
    match format {
        TournamentFormat::AverageScoreSeeded8 => Some(TemplateTag::PlayoffTable),
        TournamentFormat::RoundRobin6 => Some(TemplateTag::RoundRobin6Team),
        TournamentFormat::DoubleElim8 => Some(TemplateTag::DoubleElim8Team),
        TournamentFormat::SingleElimBracket { .. }
        | TournamentFormat::BestOfNFinals { .. }
        | TournamentFormat::Custom => None,
    }
}

/// Whether the format gets a tabular advancement view next to its bracket.
fn has_advancement_table(format: TournamentFormat) -> bool {
    match format {
        TournamentFormat::AverageScoreSeeded8
        | TournamentFormat::RoundRobin6
        | TournamentFormat::DoubleElim8 => true,
        TournamentFormat::SingleElimBracket { .. }
        | TournamentFormat::BestOfNFinals { .. }
        | TournamentFormat::Custom => false,
    }
}

/// Split input into valid playoff matches (sorted by identifier) and rejections.
///
/// Qualification matches are accepted but play no part in the playoff views. The
/// first occurrence of an identifier wins; later copies are rejected.
fn screen(format: TournamentFormat, matches_by_level: &MatchesByLevel) -> (Vec<&GameMatch>, Vec<Error>) {
    let mut seen = HashSet::new();
    let mut playoff = Vec::new();
    let mut rejected = Vec::new();

    for (&grouped_under, matches) in matches_by_level {
        for m in matches {
            let identifier = m.identifier;
            let reason = if identifier.level != grouped_under {
                Some(MalformedReason::LevelMismatch { grouped_under })
            } else if validate(format, &identifier).is_err() {
                Some(MalformedReason::UnknownSet)
            } else if !seen.insert(identifier) {
                Some(MalformedReason::Duplicate)
            } else {
                None
            };
            match reason {
                Some(reason) => rejected.push(Error::MalformedAdvancementInput { identifier, reason }),
                None if identifier.level.is_playoff() => playoff.push(m),
                None => {}
            }
        }
    }
    playoff.sort_by_key(|m| m.identifier);
    (playoff, rejected)
}

/// Build the advancement views for one event's matches.
///
/// Malformed matches are set aside and reported in `rejected`; the views are computed
/// from the rest. `Custom` events get an empty result marked unsupported.
pub fn generate(format: TournamentFormat, matches_by_level: &MatchesByLevel) -> Advancement {
    if format == TournamentFormat::Custom {
        return Advancement {
            result: AdvancementResult::unsupported(),
            rejected: Vec::new(),
        };
    }

    let (mut playoff, mut rejected) = screen(format, matches_by_level);
    if format == TournamentFormat::DoubleElim8 {
        if let Some(identifier) = unnecessary_rematch(&playoff) {
            playoff.retain(|m| m.identifier != identifier);
            rejected.push(Error::MalformedAdvancementInput {
                identifier,
                reason: MalformedReason::UnnecessaryRematch,
            });
        }
    }

    let sets = topology(format);
    let mut advancement = AdvancementTable {
        rounds: rank_rounds(format, &playoff),
        standings: Vec::new(),
    };
    let bracket = build_bracket(&sets, &playoff, Some(&advancement));

    let playoff_advancement = if has_advancement_table(format) {
        advancement.standings =
            overall_standings(format, &sets, &playoff, &advancement.rounds, &bracket);
        Some(advancement)
    } else {
        None
    };
    let double_elim_matches =
        (format == TournamentFormat::DoubleElim8).then(|| group_sides(format, &playoff));

    Advancement {
        result: AdvancementResult {
            bracket_table: Some(bracket),
            playoff_advancement,
            double_elim_matches,
            playoff_template: template_tag(format),
            unsupported: false,
        },
        rejected,
    }
}
