//! Integration tests for raw sequence number resolution, inversion, and bracket sides.

use playoff_bracket::{
    classify_bracket_side, invert, resolve, BracketSize, CompetitionLevel, DoubleElimBracket,
    Error, FinalsLength, MatchIdentifier, MatchPhase, TournamentFormat,
};
use proptest::prelude::*;

use CompetitionLevel::{EighthFinal, Final, QuarterFinal, SemiFinal};
use MatchPhase::{PlayoffPhase, QualificationPhase};

const BRACKET_4: TournamentFormat = TournamentFormat::SingleElimBracket {
    size: BracketSize::Four,
};
const BRACKET_8: TournamentFormat = TournamentFormat::SingleElimBracket {
    size: BracketSize::Eight,
};
const BRACKET_16: TournamentFormat = TournamentFormat::SingleElimBracket {
    size: BracketSize::Sixteen,
};
const BO3: TournamentFormat = TournamentFormat::BestOfNFinals {
    n: FinalsLength::BestOf3,
};
const BO5: TournamentFormat = TournamentFormat::BestOfNFinals {
    n: FinalsLength::BestOf5,
};

fn id(level: CompetitionLevel, set_number: u32, match_number: u32) -> MatchIdentifier {
    MatchIdentifier::new(level, set_number, match_number)
}

fn playoff(format: TournamentFormat, raw: u32) -> MatchIdentifier {
    resolve(format, PlayoffPhase, raw).unwrap()
}

fn is_out_of_range(format: TournamentFormat, raw: u32) -> bool {
    matches!(
        resolve(format, PlayoffPhase, raw),
        Err(Error::OutOfRangeMatch { raw_sequence_number, .. }) if raw_sequence_number == raw
    )
}

#[test]
fn every_playoff_number_round_trips() {
    for format in TournamentFormat::ALL {
        let Some(count) = format.playoff_match_count() else {
            continue;
        };
        for raw in 1..=count {
            let identifier = playoff(format, raw);
            assert_eq!(invert(format, &identifier), Ok(raw), "{format} raw {raw}");
        }
        assert!(is_out_of_range(format, count + 1), "{format} past its domain");
    }
}

#[test]
fn resolved_levels_belong_to_the_format() {
    for format in TournamentFormat::ALL {
        let Some(count) = format.playoff_match_count() else {
            assert!(format.playoff_levels().is_empty());
            continue;
        };
        let mut seen = Vec::new();
        for raw in 1..=count {
            let level = playoff(format, raw).level;
            assert!(level.is_playoff());
            assert_eq!(level.phase(), PlayoffPhase);
            if !seen.contains(&level) {
                seen.push(level);
            }
        }
        assert_eq!(seen, format.playoff_levels(), "{format}");
    }
    assert_eq!(CompetitionLevel::Qualification.phase(), QualificationPhase);
}

#[test]
fn bracket_8_covers_exactly_one_through_twenty_one() {
    for raw in 1..=21 {
        assert!(resolve(BRACKET_8, PlayoffPhase, raw).is_ok(), "raw {raw}");
    }
    for raw in [0, 22, 23, 100, u32::MAX] {
        assert!(is_out_of_range(BRACKET_8, raw), "raw {raw}");
    }
}

#[test]
fn bracket_8_band_boundaries() {
    assert_eq!(playoff(BRACKET_8, 1), id(QuarterFinal, 1, 1));
    assert_eq!(playoff(BRACKET_8, 5), id(QuarterFinal, 1, 2));
    assert_eq!(playoff(BRACKET_8, 12), id(QuarterFinal, 4, 3));
    assert_eq!(playoff(BRACKET_8, 13), id(SemiFinal, 1, 1));
    assert_eq!(playoff(BRACKET_8, 14), id(SemiFinal, 2, 1));
    assert_eq!(playoff(BRACKET_8, 18), id(SemiFinal, 2, 3));
    assert_eq!(playoff(BRACKET_8, 19), id(Final, 1, 1));
    assert_eq!(playoff(BRACKET_8, 21), id(Final, 1, 3));
}

#[test]
fn bracket_4_skips_the_quarterfinal_numbers() {
    assert_eq!(playoff(BRACKET_4, 1), id(SemiFinal, 1, 1));
    assert_eq!(playoff(BRACKET_4, 6), id(SemiFinal, 2, 3));
    assert_eq!(playoff(BRACKET_4, 7), id(Final, 1, 1));
    assert_eq!(playoff(BRACKET_4, 9), id(Final, 1, 3));
    assert!(is_out_of_range(BRACKET_4, 10));
    assert!(matches!(
        invert(BRACKET_4, &id(QuarterFinal, 4, 3)),
        Err(Error::UnmappedIdentifier { .. })
    ));
}

#[test]
fn bracket_16_table() {
    assert_eq!(playoff(BRACKET_16, 1), id(EighthFinal, 1, 1));
    assert_eq!(playoff(BRACKET_16, 9), id(EighthFinal, 1, 2));
    assert_eq!(playoff(BRACKET_16, 24), id(EighthFinal, 8, 3));
    assert_eq!(playoff(BRACKET_16, 25), id(QuarterFinal, 1, 1));
    assert_eq!(playoff(BRACKET_16, 36), id(QuarterFinal, 4, 3));
    assert_eq!(playoff(BRACKET_16, 37), id(SemiFinal, 1, 1));
    assert_eq!(playoff(BRACKET_16, 43), id(Final, 1, 1));
    assert!(is_out_of_range(BRACKET_16, 46));
}

#[test]
fn average_score_bands() {
    let format = TournamentFormat::AverageScoreSeeded8;
    assert_eq!(playoff(format, 8), id(QuarterFinal, 1, 8));
    assert_eq!(playoff(format, 9), id(SemiFinal, 1, 1));
    assert_eq!(playoff(format, 14), id(SemiFinal, 1, 6));
    assert_eq!(playoff(format, 15), id(Final, 1, 1));
    assert!(is_out_of_range(format, 18));
}

#[test]
fn round_robin_wraps_into_finals() {
    let format = TournamentFormat::RoundRobin6;
    assert_eq!(playoff(format, 1), id(SemiFinal, 1, 1));
    assert_eq!(playoff(format, 15), id(SemiFinal, 1, 15));
    assert_eq!(playoff(format, 16), id(Final, 1, 1));
    assert_eq!(playoff(format, 18), id(Final, 1, 3));
    assert!(is_out_of_range(format, 19));
}

#[test]
fn double_elim_table() {
    let format = TournamentFormat::DoubleElim8;
    assert_eq!(playoff(format, 4), id(EighthFinal, 4, 1));
    assert_eq!(playoff(format, 5), id(EighthFinal, 5, 1));
    assert_eq!(playoff(format, 9), id(QuarterFinal, 3, 1));
    assert_eq!(playoff(format, 12), id(SemiFinal, 2, 1));
    assert_eq!(playoff(format, 13), id(Final, 1, 1));
    assert_eq!(playoff(format, 14), id(Final, 2, 1));
    assert_eq!(playoff(format, 15), id(Final, 2, 2));
    assert!(is_out_of_range(format, 16));
    assert!(matches!(
        invert(format, &id(QuarterFinal, 1, 2)),
        Err(Error::UnmappedIdentifier { .. })
    ));
}

#[test]
fn best_of_n_finals_is_a_single_band() {
    assert_eq!(playoff(BO3, 3), id(Final, 1, 3));
    assert!(is_out_of_range(BO3, 4));
    assert_eq!(playoff(BO5, 5), id(Final, 1, 5));
    assert!(is_out_of_range(BO5, 6));
}

#[test]
fn custom_playoffs_are_not_resolved() {
    let format = TournamentFormat::Custom;
    assert_eq!(
        resolve(format, PlayoffPhase, 1),
        Err(Error::UnresolvableFormat { format })
    );
    assert_eq!(
        invert(format, &id(Final, 1, 1)),
        Err(Error::UnresolvableFormat { format })
    );
    assert_eq!(
        resolve(format, QualificationPhase, 7),
        Ok(MatchIdentifier::qualification(7))
    );
}

#[test]
fn zero_is_out_of_range_in_both_phases() {
    for phase in [QualificationPhase, PlayoffPhase] {
        assert!(matches!(
            resolve(BRACKET_8, phase, 0),
            Err(Error::OutOfRangeMatch { .. })
        ));
    }
}

#[test]
fn double_elim_bracket_sides() {
    let format = TournamentFormat::DoubleElim8;
    let side = |level, set| classify_bracket_side(format, &id(level, set, 1));

    assert_eq!(side(EighthFinal, 1), Ok(DoubleElimBracket::Winner));
    assert_eq!(side(EighthFinal, 4), Ok(DoubleElimBracket::Winner));
    assert_eq!(side(EighthFinal, 5), Ok(DoubleElimBracket::Loser));
    assert_eq!(side(EighthFinal, 8), Ok(DoubleElimBracket::Loser));
    assert_eq!(side(QuarterFinal, 1), Ok(DoubleElimBracket::Winner));
    assert_eq!(side(QuarterFinal, 3), Ok(DoubleElimBracket::Loser));
    assert_eq!(side(SemiFinal, 1), Ok(DoubleElimBracket::Winner));
    assert_eq!(side(SemiFinal, 2), Ok(DoubleElimBracket::Loser));
    assert_eq!(side(Final, 1), Ok(DoubleElimBracket::Loser));
    assert_eq!(side(Final, 2), Ok(DoubleElimBracket::Winner));

    for (level, set) in [(EighthFinal, 9), (QuarterFinal, 5), (SemiFinal, 3), (Final, 3)] {
        assert_eq!(
            side(level, set),
            Err(Error::InvalidBracketPosition {
                identifier: id(level, set, 1)
            })
        );
    }
    assert!(side(CompetitionLevel::Qualification, 1).is_err());
}

#[test]
fn bracket_sides_only_exist_for_double_elim() {
    let identifier = id(QuarterFinal, 1, 1);
    assert!(matches!(
        classify_bracket_side(BRACKET_8, &identifier),
        Err(Error::InvalidBracketPosition { .. })
    ));
}

#[test]
fn identifier_keys() {
    let qf = id(QuarterFinal, 4, 3);
    assert_eq!(qf.to_string(), "qf4m3");
    assert_eq!(qf.verbose_name(), "Quarters 4 Match 3");
    assert_eq!(qf.event_key_name("2019casj"), "2019casj_qf4m3");
    assert_eq!("qf4m3".parse::<MatchIdentifier>(), Ok(qf));

    let qm = MatchIdentifier::qualification(12);
    assert_eq!(qm.to_string(), "qm12");
    assert_eq!(qm.verbose_name(), "Quals 12");
    assert_eq!("qm12".parse::<MatchIdentifier>(), Ok(qm));

    assert_eq!("f1m2".parse::<MatchIdentifier>(), Ok(id(Final, 1, 2)));
    for bad in ["", "qf", "zz1m1", "qf0m1", "sf1", "qmx"] {
        assert!(bad.parse::<MatchIdentifier>().is_err(), "{bad}");
    }
}

#[test]
fn format_slugs_round_trip() {
    for format in TournamentFormat::ALL {
        assert_eq!(format.slug().parse::<TournamentFormat>(), Ok(format));
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, format!("\"{}\"", format.slug()));
        assert_eq!(serde_json::from_str::<TournamentFormat>(&json).unwrap(), format);
    }
    assert!(matches!(
        "triple_elim".parse::<TournamentFormat>(),
        Err(Error::InvalidFormat(_))
    ));
}

proptest! {
    #[test]
    fn qualification_numbering_is_identity(raw in 1u32..100_000, index in 0usize..9) {
        let format = TournamentFormat::ALL[index];
        prop_assert_eq!(
            resolve(format, QualificationPhase, raw),
            Ok(MatchIdentifier::qualification(raw))
        );
        prop_assert_eq!(invert(format, &MatchIdentifier::qualification(raw)), Ok(raw));
    }
}
