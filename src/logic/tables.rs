//! Numbering tables: playoff raw sequence number to (level, set, match) per format.
//!
//! Regular topologies are described as bands of consecutive raw numbers; irregular
//! ones (16-alliance brackets, double elimination) as explicit tables. Both are
//! immutable; table reverse indexes are built on first use.

use crate::models::{CompetitionLevel, MatchIdentifier};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use CompetitionLevel::{EighthFinal, Final, QuarterFinal, SemiFinal};

/// Consecutive raw numbers played at one level, dealt round-robin across `sets`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Band {
    pub level: CompetitionLevel,
    pub first: u32,
    pub last: u32,
    pub sets: u32,
}

impl Band {
    const fn new(level: CompetitionLevel, first: u32, last: u32, sets: u32) -> Self {
        Self {
            level,
            first,
            last,
            sets,
        }
    }
}

/// Look `raw` up in a band list. Set = offset % sets + 1, match = offset / sets + 1.
pub(crate) fn band_resolve(bands: &[Band], raw: u32) -> Option<MatchIdentifier> {
    let band = bands.iter().find(|b| (b.first..=b.last).contains(&raw))?;
    let offset = raw - band.first;
    Some(MatchIdentifier::new(
        band.level,
        offset % band.sets + 1,
        offset / band.sets + 1,
    ))
}

pub(crate) fn band_invert(bands: &[Band], id: &MatchIdentifier) -> Option<u32> {
    let band = bands.iter().find(|b| b.level == id.level)?;
    if id.set_number == 0 || id.set_number > band.sets || id.match_number == 0 {
        return None;
    }
    let raw = band
        .first
        .checked_add((id.match_number - 1).checked_mul(band.sets)?)?
        .checked_add(id.set_number - 1)?;
    (raw <= band.last).then_some(raw)
}

/// Quarterfinals best of 3 over four sets, semifinals over two, then the final.
pub(crate) const BRACKET_8_BANDS: &[Band] = &[
    Band::new(QuarterFinal, 1, 12, 4),
    Band::new(SemiFinal, 13, 18, 2),
    Band::new(Final, 19, 21, 1),
];

/// A 4-alliance draw numbers its matches as the last nine of the 8-alliance draw.
pub(crate) const BRACKET_4_OFFSET: u32 = 12;

pub(crate) const AVG_SCORE_8_BANDS: &[Band] = &[
    Band::new(QuarterFinal, 1, 8, 1),
    Band::new(SemiFinal, 9, 14, 1),
    Band::new(Final, 15, 17, 1),
];

/// Round robin matches keep their raw number; finals restart at 1.
pub(crate) const ROUND_ROBIN_6_BANDS: &[Band] = &[
    Band::new(SemiFinal, 1, 15, 1),
    Band::new(Final, 16, 18, 1),
];

pub(crate) const BO3_FINALS_BANDS: &[Band] = &[Band::new(Final, 1, 3, 1)];

pub(crate) const BO5_FINALS_BANDS: &[Band] = &[Band::new(Final, 1, 5, 1)];

type Entry = (CompetitionLevel, u32, u32);

/// Explicit mapping indexed by `raw - 1`, with a reverse index built once.
pub(crate) struct LookupTable {
    entries: &'static [Entry],
    reverse: Lazy<HashMap<MatchIdentifier, u32>>,
}

impl LookupTable {
    pub fn get(&self, raw: u32) -> Option<MatchIdentifier> {
        let index = usize::try_from(raw.checked_sub(1)?).ok()?;
        let &(level, set, m) = self.entries.get(index)?;
        Some(MatchIdentifier::new(level, set, m))
    }

    pub fn position(&self, id: &MatchIdentifier) -> Option<u32> {
        self.reverse.get(id).copied()
    }
}

fn reverse_index(entries: &[Entry]) -> HashMap<MatchIdentifier, u32> {
    entries
        .iter()
        .zip(1u32..)
        .map(|(&(level, set, m), raw)| (MatchIdentifier::new(level, set, m), raw))
        .collect()
}

const BRACKET_16_ENTRIES: [Entry; 45] = [
    // octofinals
    (EighthFinal, 1, 1),
    (EighthFinal, 2, 1),
    (EighthFinal, 3, 1),
    (EighthFinal, 4, 1),
    (EighthFinal, 5, 1),
    (EighthFinal, 6, 1),
    (EighthFinal, 7, 1),
    (EighthFinal, 8, 1),
    (EighthFinal, 1, 2),
    (EighthFinal, 2, 2),
    (EighthFinal, 3, 2),
    (EighthFinal, 4, 2),
    (EighthFinal, 5, 2),
    (EighthFinal, 6, 2),
    (EighthFinal, 7, 2),
    (EighthFinal, 8, 2),
    (EighthFinal, 1, 3),
    (EighthFinal, 2, 3),
    (EighthFinal, 3, 3),
    (EighthFinal, 4, 3),
    (EighthFinal, 5, 3),
    (EighthFinal, 6, 3),
    (EighthFinal, 7, 3),
    (EighthFinal, 8, 3),
    // quarterfinals
    (QuarterFinal, 1, 1),
    (QuarterFinal, 2, 1),
    (QuarterFinal, 3, 1),
    (QuarterFinal, 4, 1),
    (QuarterFinal, 1, 2),
    (QuarterFinal, 2, 2),
    (QuarterFinal, 3, 2),
    (QuarterFinal, 4, 2),
    (QuarterFinal, 1, 3),
    (QuarterFinal, 2, 3),
    (QuarterFinal, 3, 3),
    (QuarterFinal, 4, 3),
    // semifinals
    (SemiFinal, 1, 1),
    (SemiFinal, 2, 1),
    (SemiFinal, 1, 2),
    (SemiFinal, 2, 2),
    (SemiFinal, 1, 3),
    (SemiFinal, 2, 3),
    // finals
    (Final, 1, 1),
    (Final, 1, 2),
    (Final, 1, 3),
];

const DOUBLE_ELIM_8_ENTRIES: [Entry; 15] = [
    // winner bracket, round 1
    (EighthFinal, 1, 1),
    (EighthFinal, 2, 1),
    (EighthFinal, 3, 1),
    (EighthFinal, 4, 1),
    // loser bracket, round 1
    (EighthFinal, 5, 1),
    (EighthFinal, 6, 1),
    // winner bracket, round 2
    (QuarterFinal, 1, 1),
    (QuarterFinal, 2, 1),
    // loser bracket, round 2
    (QuarterFinal, 3, 1),
    (QuarterFinal, 4, 1),
    // winner bracket final
    (SemiFinal, 1, 1),
    // loser bracket, round 3
    (SemiFinal, 2, 1),
    // loser bracket final
    (Final, 1, 1),
    // grand final, second match only if necessary
    (Final, 2, 1),
    (Final, 2, 2),
];

pub(crate) static BRACKET_16_TABLE: LookupTable = LookupTable {
    entries: &BRACKET_16_ENTRIES,
    reverse: Lazy::new(|| reverse_index(&BRACKET_16_ENTRIES)),
};

pub(crate) static DOUBLE_ELIM_8_TABLE: LookupTable = LookupTable {
    entries: &DOUBLE_ELIM_8_ENTRIES,
    reverse: Lazy::new(|| reverse_index(&DOUBLE_ELIM_8_ENTRIES)),
};
