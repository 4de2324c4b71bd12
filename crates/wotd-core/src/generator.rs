use std::collections::BTreeMap;

use wotd_types::{DictionaryEntry, WordRecord};

use crate::error::GenerateError;
use crate::validator::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Artifact rows in ascending day order.
///
/// The map key is authoritative for `index`.
pub fn ordered_records(scheduled: &BTreeMap<u16, DictionaryEntry>) -> Vec<WordRecord> {
    scheduled
        .iter()
        .map(|(day, entry)| WordRecord {
            index: *day,
            ..WordRecord::from(entry)
        })
        .collect()
}

/// Serialize `scheduled` without checking completeness.
///
/// Callers are expected to have validated first; see [`generate_checked`].
pub fn generate(
    scheduled: &BTreeMap<u16, DictionaryEntry>,
    mode: OutputMode,
) -> Result<String, GenerateError> {
    let records = ordered_records(scheduled);
    let json = match mode {
        OutputMode::Pretty => serde_json::to_string_pretty(&records)?,
        OutputMode::Compact => serde_json::to_string(&records)?,
    };
    Ok(json)
}

/// Validate, then serialize. Refuses to produce output for an incomplete dictionary.
pub fn generate_checked(
    scheduled: &BTreeMap<u16, DictionaryEntry>,
    mode: OutputMode,
) -> Result<String, GenerateError> {
    let report = validate(scheduled);
    if !report.is_valid {
        return Err(GenerateError::Invalid(Box::new(report)));
    }
    generate(scheduled, mode)
}

pub fn parse_artifact(json: &str) -> Result<Vec<WordRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
