//! Bracket topologies and bracket table construction.
//!
//! Each format's bracket is a list of sets in play order. Every set names where its
//! two alliances come from; a decided set's winner (and, in double elimination, its
//! loser) flows into the sets that reference it.

use crate::models::{
    Alliance, AllianceColor, AdvancementTable, BracketLevel, BracketSet, BracketSize,
    BracketTable, CompetitionLevel, GameMatch, Slot, SlotSource, TournamentFormat,
};

use CompetitionLevel::{EighthFinal, Final, QuarterFinal, SemiFinal};

/// How a set is decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SetRule {
    BestOf(u32),
    /// Double elimination grand final: the red (winner bracket) alliance needs one win,
    /// the blue (loser bracket) alliance must win match 1 and the rematch.
    GrandFinal,
}

impl SetRule {
    fn max_matches(self) -> u32 {
        match self {
            SetRule::BestOf(n) => n,
            SetRule::GrandFinal => 2,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct SetSpec {
    pub level: CompetitionLevel,
    pub set_number: u32,
    pub red: SlotSource,
    pub blue: SlotSource,
    pub rule: SetRule,
}

fn seed(seed: u32) -> SlotSource {
    SlotSource::Seed { seed }
}

fn winner_of(level: CompetitionLevel, set_number: u32) -> SlotSource {
    SlotSource::WinnerOf { level, set_number }
}

fn loser_of(level: CompetitionLevel, set_number: u32) -> SlotSource {
    SlotSource::LoserOf { level, set_number }
}

fn rank_of(level: CompetitionLevel, rank: u32) -> SlotSource {
    SlotSource::RankOf { level, rank }
}

fn set(
    level: CompetitionLevel,
    set_number: u32,
    red: SlotSource,
    blue: SlotSource,
    rule: SetRule,
) -> SetSpec {
    SetSpec {
        level,
        set_number,
        red,
        blue,
        rule,
    }
}

/// Standard seeding of an 8-alliance first round: 1v8, 4v5, 2v7, 3v6.
const EIGHT_SEED_PAIRS: [(u32, u32); 4] = [(1, 8), (4, 5), (2, 7), (3, 6)];

const SIXTEEN_SEED_PAIRS: [(u32, u32); 8] = [
    (1, 16),
    (8, 9),
    (4, 13),
    (5, 12),
    (2, 15),
    (7, 10),
    (3, 14),
    (6, 11),
];

/// Sets of `level` fed pairwise by the winners of `from`'s sets.
fn winners_round(level: CompetitionLevel, from: CompetitionLevel, sets: u32) -> Vec<SetSpec> {
    (1..=sets)
        .map(|s| {
            set(
                level,
                s,
                winner_of(from, 2 * s - 1),
                winner_of(from, 2 * s),
                SetRule::BestOf(3),
            )
        })
        .collect()
}

fn seeded_round(level: CompetitionLevel, pairs: &[(u32, u32)], rule: SetRule) -> Vec<SetSpec> {
    pairs
        .iter()
        .zip(1u32..)
        .map(|(&(high, low), s)| set(level, s, seed(high), seed(low), rule))
        .collect()
}

/// Sets of the format's bracket in play order. Empty for `Custom`.
pub(crate) fn topology(format: TournamentFormat) -> Vec<SetSpec> {
    let best_of_3 = SetRule::BestOf(3);
    match format {
        TournamentFormat::SingleElimBracket { size } => {
            let mut sets = match size {
                BracketSize::Four => seeded_round(SemiFinal, &[(1, 4), (2, 3)], best_of_3),
                BracketSize::Eight => {
                    let mut sets = seeded_round(QuarterFinal, &EIGHT_SEED_PAIRS, best_of_3);
                    sets.extend(winners_round(SemiFinal, QuarterFinal, 2));
                    sets
                }
                BracketSize::Sixteen => {
                    let mut sets = seeded_round(EighthFinal, &SIXTEEN_SEED_PAIRS, best_of_3);
                    sets.extend(winners_round(QuarterFinal, EighthFinal, 4));
                    sets.extend(winners_round(SemiFinal, QuarterFinal, 2));
                    sets
                }
            };
            sets.extend(winners_round(Final, SemiFinal, 1));
            sets
        }
        TournamentFormat::AverageScoreSeeded8 | TournamentFormat::RoundRobin6 => vec![set(
            Final,
            1,
            rank_of(SemiFinal, 1),
            rank_of(SemiFinal, 2),
            best_of_3,
        )],
        TournamentFormat::BestOfNFinals { n } => {
            seeded_round(Final, &[(1, 2)], SetRule::BestOf(n.matches()))
        }
        TournamentFormat::DoubleElim8 => {
            let single = SetRule::BestOf(1);
            let mut sets = seeded_round(EighthFinal, &EIGHT_SEED_PAIRS, single);
            sets.extend([
                set(EighthFinal, 5, loser_of(EighthFinal, 1), loser_of(EighthFinal, 2), single),
                set(EighthFinal, 6, loser_of(EighthFinal, 3), loser_of(EighthFinal, 4), single),
                set(QuarterFinal, 1, winner_of(EighthFinal, 1), winner_of(EighthFinal, 2), single),
                set(QuarterFinal, 2, winner_of(EighthFinal, 3), winner_of(EighthFinal, 4), single),
                // Loser bracket crosses over so first-round opponents don't meet again.
                set(QuarterFinal, 3, winner_of(EighthFinal, 5), loser_of(QuarterFinal, 2), single),
                set(QuarterFinal, 4, winner_of(EighthFinal, 6), loser_of(QuarterFinal, 1), single),
                set(SemiFinal, 1, winner_of(QuarterFinal, 1), winner_of(QuarterFinal, 2), single),
                set(SemiFinal, 2, winner_of(QuarterFinal, 3), winner_of(QuarterFinal, 4), single),
                set(Final, 1, winner_of(SemiFinal, 2), loser_of(SemiFinal, 1), single),
                set(Final, 2, winner_of(SemiFinal, 1), winner_of(Final, 1), SetRule::GrandFinal),
            ]);
            sets
        }
        TournamentFormat::Custom => Vec::new(),
    }
}

/// Whether the loser of this set plays on (double elimination winner bracket).
pub(crate) fn loser_continues(sets: &[SetSpec], level: CompetitionLevel, set_number: u32) -> bool {
    let source = SlotSource::LoserOf { level, set_number };
    sets.iter().any(|spec| spec.red == source || spec.blue == source)
}

/// Last set of the bracket; its winner is the champion.
pub(crate) fn championship_set(sets: &[SetSpec]) -> Option<(CompetitionLevel, u32)> {
    sets.last().map(|spec| (spec.level, spec.set_number))
}

fn slot_from(source: SlotSource, table: &BracketTable, ranks: Option<&AdvancementTable>) -> Slot {
    let alliance = match source {
        SlotSource::Seed { .. } => None,
        SlotSource::WinnerOf { level, set_number } => table
            .set(level, set_number)
            .and_then(BracketSet::winning_alliance)
            .cloned(),
        SlotSource::LoserOf { level, set_number } => table
            .set(level, set_number)
            .and_then(BracketSet::losing_alliance)
            .cloned(),
        SlotSource::RankOf { level, rank } => ranks
            .and_then(|t| t.round(level))
            .filter(|round| round.complete)
            .and_then(|round| round.standings.get(rank.checked_sub(1)? as usize))
            .map(|status| status.alliance.clone()),
    };
    match alliance {
        Some(alliance) => Slot::Known { alliance },
        None => Slot::Pending { source },
    }
}

/// Match lineup if listed, else whatever the feeder gave.
fn listed_or(feeder: Slot, listed: &Alliance) -> Slot {
    if listed.is_unknown() {
        feeder
    } else {
        Slot::Known {
            alliance: listed.clone(),
        }
    }
}

/// Pick the set's alliances: from its earliest match when one exists, oriented so a
/// feeder-resolved red alliance stays red; otherwise from the feeders.
fn seat(red: Slot, blue: Slot, first: Option<&GameMatch>) -> (Slot, Slot) {
    let Some(first) = first else {
        return (red, blue);
    };
    let swapped = red
        .alliance()
        .is_some_and(|expected| first.color_of(expected) == Some(AllianceColor::Blue))
        || blue
            .alliance()
            .is_some_and(|expected| first.color_of(expected) == Some(AllianceColor::Red));
    let (r, b) = if swapped {
        (&first.blue, &first.red)
    } else {
        (&first.red, &first.blue)
    };
    (listed_or(red, r), listed_or(blue, b))
}

/// Bracket color that won `m`, given the set's red alliance.
fn set_color_of_winner(m: &GameMatch, red: Option<&Alliance>) -> Option<AllianceColor> {
    let color = m.outcome?.winner.color()?;
    let flipped = red.is_some_and(|r| m.color_of(r) == Some(AllianceColor::Blue));
    Some(if flipped { color.opponent() } else { color })
}

fn build_set(
    spec: &SetSpec,
    matches: &[&GameMatch],
    table: &BracketTable,
    ranks: Option<&AdvancementTable>,
) -> BracketSet {
    let set_matches: Vec<&GameMatch> = matches
        .iter()
        .copied()
        .filter(|m| m.identifier.level == spec.level && m.identifier.set_number == spec.set_number)
        .collect();

    let (red, blue) = seat(
        slot_from(spec.red, table, ranks),
        slot_from(spec.blue, table, ranks),
        set_matches.first().copied(),
    );

    let mut bracket_set = BracketSet {
        set_number: spec.set_number,
        red,
        blue,
        best_of: spec.rule.max_matches(),
        red_wins: 0,
        blue_wins: 0,
        ties: 0,
        winner: None,
        matches: set_matches.iter().map(|m| m.identifier).collect(),
    };

    // Decided results in match order; ties only count toward `ties`.
    let mut decided = Vec::new();
    for m in set_matches.iter().filter(|m| m.outcome.is_some()) {
        match set_color_of_winner(m, bracket_set.red.alliance()) {
            Some(color) => {
                match color {
                    AllianceColor::Red => bracket_set.red_wins += 1,
                    AllianceColor::Blue => bracket_set.blue_wins += 1,
                }
                decided.push(color);
            }
            None => bracket_set.ties += 1,
        }
    }

    bracket_set.winner = match spec.rule {
        SetRule::BestOf(n) => {
            let needed = n / 2 + 1;
            if bracket_set.red_wins >= needed {
                Some(AllianceColor::Red)
            } else if bracket_set.blue_wins >= needed {
                Some(AllianceColor::Blue)
            } else {
                None
            }
        }
        SetRule::GrandFinal => match decided.as_slice() {
            [AllianceColor::Red, ..] => Some(AllianceColor::Red),
            [AllianceColor::Blue, rematch, ..] => Some(*rematch),
            _ => None,
        },
    };
    bracket_set
}

/// Walk a topology in play order and fill every set from `matches`.
///
/// `matches` holds validated playoff matches sorted by identifier. Sets nobody has
/// reached yet carry pending slots.
pub(crate) fn build_bracket(
    sets: &[SetSpec],
    matches: &[&GameMatch],
    ranks: Option<&AdvancementTable>,
) -> BracketTable {
    let mut table = BracketTable::default();
    for spec in sets {
        let bracket_set = build_set(spec, matches, &table, ranks);
        match table.levels.iter_mut().find(|l| l.level == spec.level) {
            Some(level) => level.sets.push(bracket_set),
            None => table.levels.push(BracketLevel {
                level: spec.level,
                sets: vec![bracket_set],
            }),
        }
    }
    table
}
