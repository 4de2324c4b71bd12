use serde::{Deserialize, Serialize};

/// Number of scheduled days a complete dictionary covers (leap years included)
pub const DAYS_IN_DICTIONARY: u16 = 366;

/// A word as kept by the offline tooling
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DictionaryEntry {
    /// Store-assigned row id, 0 when not persisted yet
    pub id: i64,
    /// 1..=366 when scheduled, `None` while in the unscheduled pool
    pub day_index: Option<u16>,
    pub text: String,
    pub meaning: String,
    pub link: Option<String>,
    /// Key of the image in blob storage
    pub image_ref: Option<String>,
    pub image_attribution: Option<String>,
}

impl DictionaryEntry {
    pub fn new(text: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meaning: meaning.into(),
            ..Self::default()
        }
    }

    pub fn scheduled(day: u16, text: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            day_index: Some(day),
            ..Self::new(text, meaning)
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.day_index.is_some()
    }

    pub fn has_image(&self) -> bool {
        self.image_ref.as_deref().is_some_and(|r| !r.is_empty())
    }
}

/// One row of the published `dictionary.json` artifact.
///
/// Field names are the artifact's external contract. Empty strings stand in
/// for absent optional values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordRecord {
    pub index: u16,
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub photo_attribution: String,
}

impl WordRecord {
    pub fn has_photo(&self) -> bool {
        !self.photo.is_empty()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

impl From<&DictionaryEntry> for WordRecord {
    fn from(entry: &DictionaryEntry) -> Self {
        Self {
            index: entry.day_index.unwrap_or(0),
            word: entry.text.clone(),
            meaning: entry.meaning.clone(),
            link: entry.link.clone().unwrap_or_default(),
            photo: entry.image_ref.clone().unwrap_or_default(),
            photo_attribution: entry.image_attribution.clone().unwrap_or_default(),
        }
    }
}

impl From<WordRecord> for DictionaryEntry {
    fn from(record: WordRecord) -> Self {
        Self {
            id: 0,
            // index 0 is how older artifacts mark an unscheduled word
            day_index: (record.index != 0).then_some(record.index),
            text: record.word,
            meaning: record.meaning,
            link: non_empty(record.link),
            image_ref: non_empty(record.photo),
            image_attribution: non_empty(record.photo_attribution),
        }
    }
}

/// Outcome of checking a day-indexed dictionary for completeness
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub total_count: usize,
    /// Ascending
    pub missing_indexes: Vec<u16>,
    /// Ascending, each index listed once
    pub duplicate_indexes: Vec<u16>,
}

impl ValidationReport {
    pub fn count_mismatch(&self) -> bool {
        self.total_count != usize::from(DAYS_IN_DICTIONARY)
    }
}
