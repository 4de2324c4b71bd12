use anyhow::Result;
use wotd_core::validate;
use wotd_store::WordRepository;
use wotd_types::{DAYS_IN_DICTIONARY, ValidationReport};

/// Print the report; returns whether the dictionary is complete
pub fn run(repo: &impl WordRepository, json: bool) -> Result<bool> {
    let report = validate(&repo.scheduled_map()?);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", describe(&report));
    }
    Ok(report.is_valid)
}

pub fn describe(report: &ValidationReport) -> String {
    let mut out = format!(
        "{} of {} days scheduled\n",
        report.total_count, DAYS_IN_DICTIONARY
    );
    if !report.missing_indexes.is_empty() {
        out.push_str(&format!(
            "missing days: {}\n",
            format_ranges(&report.missing_indexes)
        ));
    }
    if !report.duplicate_indexes.is_empty() {
        out.push_str(&format!(
            "duplicate days: {}\n",
            format_ranges(&report.duplicate_indexes)
        ));
    }
    out.push_str(if report.is_valid { "OK\n" } else { "INVALID\n" });
    out
}

/// `[1, 2, 3, 7, 9, 10]` -> `1-3, 7, 9-10`; input must be ascending
pub fn format_ranges(days: &[u16]) -> String {
    let mut parts = Vec::new();
    let mut iter = days.iter().copied().peekable();

    while let Some(start) = iter.next() {
        let mut end = start;
        while let Some(next) = iter.next_if(|&d| Some(d) == end.checked_add(1)) {
            end = next;
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{start}-{end}"));
        }
    }

    parts.join(", ")
}
