//! Completeness check gating artifact generation.

use std::collections::{BTreeMap, BTreeSet};

use wotd_types::{DAYS_IN_DICTIONARY, DictionaryEntry, ValidationReport};

/// Check that `scheduled` covers every day 1..=366 exactly once.
///
/// Never fails; the caller decides what an invalid report means. Keys outside
/// the day range still count toward `total_count`.
pub fn validate<V>(scheduled: &BTreeMap<u16, V>) -> ValidationReport {
    let present: BTreeSet<u16> = scheduled.keys().copied().collect();
    build_report(scheduled.len(), &present, Vec::new())
}

/// Validate a flat list of entries that may repeat a day index.
///
/// Unscheduled entries are skipped. Every day index seen more than once is
/// reported in `duplicate_indexes`.
pub fn validate_entries(entries: &[DictionaryEntry]) -> ValidationReport {
    let mut seen: BTreeMap<u16, usize> = BTreeMap::new();
    let mut total = 0;

    for day in entries.iter().filter_map(|e| e.day_index) {
        total += 1;
        *seen.entry(day).or_default() += 1;
    }

    let duplicates = seen
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(day, _)| *day)
        .collect();
    let present: BTreeSet<u16> = seen.into_keys().collect();

    build_report(total, &present, duplicates)
}

fn build_report(
    total_count: usize,
    present: &BTreeSet<u16>,
    duplicate_indexes: Vec<u16>,
) -> ValidationReport {
    let mut is_valid = total_count == usize::from(DAYS_IN_DICTIONARY);

    let missing_indexes: Vec<u16> = (1..=DAYS_IN_DICTIONARY)
        .filter(|day| !present.contains(day))
        .collect();

    if !missing_indexes.is_empty() || !duplicate_indexes.is_empty() {
        is_valid = false;
    }

    ValidationReport {
        is_valid,
        total_count,
        missing_indexes,
        duplicate_indexes,
    }
}
