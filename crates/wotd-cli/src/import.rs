use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use wotd_core::{parse_artifact, validate_entries};
use wotd_store::WordRepository;
use wotd_types::DictionaryEntry;

use crate::normalize::normalize_entry;

pub fn run(repo: &mut impl WordRepository, file: &Path) -> Result<()> {
    let json =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let records =
        parse_artifact(&json).with_context(|| format!("failed to parse {}", file.display()))?;

    let entries: Vec<DictionaryEntry> = records
        .into_iter()
        .map(|r| normalize_entry(DictionaryEntry::from(r)))
        .collect();

    let report = validate_entries(&entries);
    if !report.duplicate_indexes.is_empty() {
        bail!(
            "{} repeats day indexes {:?}",
            file.display(),
            report.duplicate_indexes
        );
    }

    let summary = repo.import(&entries).context("import failed")?;
    tracing::info!(
        "Imported {} scheduled and {} unscheduled words",
        summary.scheduled,
        summary.unscheduled
    );
    println!(
        "Imported {} words ({} scheduled, {} unscheduled)",
        summary.scheduled + summary.unscheduled,
        summary.scheduled,
        summary.unscheduled
    );
    Ok(())
}
