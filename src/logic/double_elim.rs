//! Double elimination: winner/loser side grouping and the grand final rematch.

use crate::logic::resolver::classify_bracket_side;
use crate::models::{
    AllianceColor, CompetitionLevel, DoubleElimBracket, DoubleElimLevel, DoubleElimView,
    GameMatch, MatchIdentifier, TournamentFormat,
};

const SIDE_LEVELS: [CompetitionLevel; 4] = [
    CompetitionLevel::EighthFinal,
    CompetitionLevel::QuarterFinal,
    CompetitionLevel::SemiFinal,
    CompetitionLevel::Final,
];

fn empty_side() -> Vec<DoubleElimLevel> {
    SIDE_LEVELS
        .iter()
        .map(|&level| DoubleElimLevel {
            level,
            matches: Vec::new(),
        })
        .collect()
}

/// Grand final rematch that should not exist: the winner-bracket alliance took match 1.
///
/// The loser-bracket finalist is the winner of finals set 1. When that set has no
/// winner yet, blue is taken as the loser-bracket side of the grand final.
pub(crate) fn unnecessary_rematch(matches: &[&GameMatch]) -> Option<MatchIdentifier> {
    let find = |set_number, match_number| {
        let id = MatchIdentifier::new(CompetitionLevel::Final, set_number, match_number);
        matches.iter().copied().find(|m| m.identifier == id)
    };
    let opener = find(2, 1)?;
    let rematch = find(2, 2)?;
    let opener_winner = opener.outcome?.winner.color()?;

    let loser_bracket_color = find(1, 1)
        .and_then(GameMatch::winning_alliance)
        .and_then(|finalist| opener.color_of(finalist))
        .unwrap_or(AllianceColor::Blue);
    (opener_winner != loser_bracket_color).then_some(rematch.identifier)
}

/// Group validated playoff matches by bracket side, every level present on both sides.
pub(crate) fn group_sides(format: TournamentFormat, matches: &[&GameMatch]) -> DoubleElimView {
    let mut view = DoubleElimView {
        winner: empty_side(),
        loser: empty_side(),
    };
    for m in matches {
        let Ok(side) = classify_bracket_side(format, &m.identifier) else {
            continue;
        };
        let levels = match side {
            DoubleElimBracket::Winner => &mut view.winner,
            DoubleElimBracket::Loser => &mut view.loser,
        };
        if let Some(group) = levels.iter_mut().find(|g| g.level == m.identifier.level) {
            group.matches.push((*m).clone());
        }
    }
    view
}
