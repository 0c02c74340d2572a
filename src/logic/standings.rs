//! Ranked rounds (average score, round robin) and overall alliance standings.

use crate::logic::bracket::{championship_set, loser_continues, SetSpec};
use crate::models::{
    AdvancementRound, Alliance, AllianceAdvancementStatus, AllianceColor, AllianceStatus, BracketTable,
    CompetitionLevel, GameMatch, Record, TournamentFormat,
};
use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;

/// How a ranked round orders its alliances.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RankOrder {
    /// Highest average score first.
    Average,
    /// Most points (2 per win, 1 per tie) first, average score breaks ties.
    Points,
}

#[derive(Clone, Copy, Debug)]
struct RoundRule {
    level: CompetitionLevel,
    matches_expected: u32,
    advance_count: u32,
    order: RankOrder,
}

const AVG_SCORE_8_ROUNDS: &[RoundRule] = &[
    RoundRule {
        level: CompetitionLevel::QuarterFinal,
        matches_expected: 8,
        advance_count: 4,
        order: RankOrder::Average,
    },
    RoundRule {
        level: CompetitionLevel::SemiFinal,
        matches_expected: 6,
        advance_count: 2,
        order: RankOrder::Average,
    },
];

const ROUND_ROBIN_6_ROUNDS: &[RoundRule] = &[RoundRule {
    level: CompetitionLevel::SemiFinal,
    matches_expected: 15,
    advance_count: 2,
    order: RankOrder::Points,
}];

fn round_rules(format: TournamentFormat) -> &'static [RoundRule] {
    match format {
        TournamentFormat::AverageScoreSeeded8 => AVG_SCORE_8_ROUNDS,
        TournamentFormat::RoundRobin6 => ROUND_ROBIN_6_ROUNDS,
        TournamentFormat::SingleElimBracket { .. }
        | TournamentFormat::DoubleElim8
        | TournamentFormat::BestOfNFinals { .. }
        | TournamentFormat::Custom => &[],
    }
}

/// Running totals for one alliance.
#[derive(Clone, Debug)]
struct Tally {
    alliance: Alliance,
    record: Record,
    total_score: u64,
    scored: u32,
    deepest: CompetitionLevel,
    level_records: BTreeMap<CompetitionLevel, Record>,
}

impl Tally {
    fn new(alliance: Alliance, level: CompetitionLevel) -> Self {
        Self {
            alliance,
            record: Record::default(),
            total_score: 0,
            scored: 0,
            deepest: level,
            level_records: BTreeMap::new(),
        }
    }

    fn average(&self) -> Option<f64> {
        (self.scored > 0).then(|| self.total_score as f64 / f64::from(self.scored))
    }

    fn level_record(&self, level: CompetitionLevel) -> Record {
        self.level_records.get(&level).copied().unwrap_or_default()
    }
}

/// Tally every alliance in `matches`, in order of first appearance.
fn tally(matches: &[&GameMatch]) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = Vec::new();
    for m in matches {
        let level = m.identifier.level;
        for color in [AllianceColor::Red, AllianceColor::Blue] {
            let alliance = m.alliance(color);
            if alliance.is_unknown() {
                continue;
            }
            let index = match tallies.iter().position(|t| t.alliance.same_as(alliance)) {
                Some(i) => i,
                None => {
                    tallies.push(Tally::new(alliance.clone(), level));
                    tallies.len() - 1
                }
            };
            let t = &mut tallies[index];
            t.deepest = t.deepest.max(level);

            let Some(outcome) = m.outcome else {
                continue;
            };
            t.total_score += u64::from(outcome.score(color));
            t.scored += 1;
            let level_record = t.level_records.entry(level).or_default();
            match outcome.winner.color() {
                None => {
                    t.record.add_tie();
                    level_record.add_tie();
                }
                Some(winner) if winner == color => {
                    t.record.add_win();
                    level_record.add_win();
                }
                Some(_) => {
                    t.record.add_loss();
                    level_record.add_loss();
                }
            }
        }
    }
    tallies
}

fn average_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(f64::NEG_INFINITY)
        .total_cmp(&a.unwrap_or(f64::NEG_INFINITY))
}

fn rank_round(rule: &RoundRule, matches: &[&GameMatch], overall: &[Tally]) -> AdvancementRound {
    let level_matches: Vec<&GameMatch> = matches
        .iter()
        .copied()
        .filter(|m| m.identifier.level == rule.level)
        .collect();
    let matches_played = level_matches.iter().filter(|m| m.outcome.is_some()).count() as u32;
    let complete = matches_played >= rule.matches_expected;

    let mut entries: Vec<AllianceAdvancementStatus> = tally(&level_matches)
        .into_iter()
        .map(|t| {
            let mut status = AllianceAdvancementStatus::new(t.alliance.clone(), rule.level);
            status.level_record = t.record;
            status.playoff_average = t.average();
            status.playoff_record = overall
                .iter()
                .find(|o| o.alliance.same_as(&t.alliance))
                .map(|o| o.record)
                .unwrap_or(t.record);
            status
        })
        .collect();

    entries.sort_by(|a, b| {
        let primary = match rule.order {
            RankOrder::Average => Ordering::Equal,
            RankOrder::Points => b.level_record.points().cmp(&a.level_record.points()),
        };
        primary
            .then_with(|| average_desc(a.playoff_average, b.playoff_average))
            .then_with(|| a.alliance.cmp(&b.alliance))
    });

    for (status, rank) in entries.iter_mut().zip(1u32..) {
        status.rank = rank;
        if complete {
            status.status = if rank <= rule.advance_count {
                AllianceStatus::Advanced
            } else {
                AllianceStatus::Eliminated
            };
        }
    }

    AdvancementRound {
        level: rule.level,
        matches_expected: rule.matches_expected,
        matches_played,
        advance_count: rule.advance_count,
        complete,
        standings: entries,
    }
}

/// One ranked table per ranked level of the format, empty tables for levels not yet played.
pub(crate) fn rank_rounds(format: TournamentFormat, matches: &[&GameMatch]) -> Vec<AdvancementRound> {
    let overall = tally(matches);
    round_rules(format)
        .iter()
        .map(|rule| rank_round(rule, matches, &overall))
        .collect()
}

fn status_order(status: AllianceStatus) -> u8 {
    match status {
        AllianceStatus::Champion => 0,
        AllianceStatus::Playing | AllianceStatus::Advanced => 1,
        AllianceStatus::Eliminated => 2,
    }
}

/// Every playoff alliance with its deepest level, records, and terminal status.
/// Averages are only filled in for formats with ranked rounds.
///
/// An alliance is eliminated when it loses a decided set whose loser has nowhere to
/// go, or finishes a complete ranked round outside the advancing places without
/// reaching a later level.
pub(crate) fn overall_standings(
    format: TournamentFormat,
    sets: &[SetSpec],
    matches: &[&GameMatch],
    rounds: &[AdvancementRound],
    bracket: &BracketTable,
) -> Vec<AllianceAdvancementStatus> {
    let ranked_by_score = !round_rules(format).is_empty();
    let champion = championship_set(sets)
        .and_then(|(level, set_number)| bracket.set(level, set_number))
        .and_then(|set| set.winning_alliance());

    let knocked_out = |alliance: &Alliance, deepest: CompetitionLevel| {
        let lost_out = bracket.levels.iter().any(|level| {
            level.sets.iter().any(|set| {
                set.losing_alliance()
                    .is_some_and(|loser| loser.same_as(alliance))
                    && !loser_continues(sets, level.level, set.set_number)
            })
        });
        let ranked_out = rounds.iter().any(|round| {
            round.level == deepest
                && round.standings.iter().any(|s| {
                    s.alliance.same_as(alliance) && s.status == AllianceStatus::Eliminated
                })
        });
        lost_out || ranked_out
    };

    let mut standings: Vec<AllianceAdvancementStatus> = tally(matches)
        .into_iter()
        .map(|t| {
            let mut status = AllianceAdvancementStatus::new(t.alliance.clone(), t.deepest);
            status.level_record = t.level_record(t.deepest);
            status.playoff_record = t.record;
            if ranked_by_score {
                status.playoff_average = t.average();
            }
            if champion.is_some_and(|c| c.same_as(&t.alliance)) {
                status.status = AllianceStatus::Champion;
            } else if knocked_out(&t.alliance, t.deepest) {
                status.eliminate();
            }
            status
        })
        .collect();

    standings.sort_by_key(|s| {
        (
            status_order(s.status),
            Reverse(s.current_level),
            Reverse(s.playoff_record.wins),
            s.playoff_record.losses,
            s.alliance.clone(),
        )
    });
    for (status, rank) in standings.iter_mut().zip(1u32..) {
        status.rank = rank;
    }
    standings
}
