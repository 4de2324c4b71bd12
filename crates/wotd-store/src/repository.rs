use std::collections::BTreeMap;

use wotd_types::DictionaryEntry;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub scheduled: usize,
    pub unscheduled: usize,
}

/// Source of truth for the dictionary, edited by the offline tool.
///
/// A day index belongs to at most one word; entries without one form the
/// unscheduled pool.
pub trait WordRepository {
    /// Persist a new word and return its id
    fn insert(&mut self, entry: &DictionaryEntry) -> Result<i64, StoreError>;

    /// Overwrite the word with `entry.id`
    fn update(&mut self, entry: &DictionaryEntry) -> Result<(), StoreError>;

    fn get(&self, id: i64) -> Result<Option<DictionaryEntry>, StoreError>;

    fn delete(&mut self, id: i64) -> Result<(), StoreError>;

    /// Scheduled words in ascending day order
    fn list_scheduled(&self) -> Result<Vec<DictionaryEntry>, StoreError>;

    fn list_unscheduled(&self) -> Result<Vec<DictionaryEntry>, StoreError>;

    /// Assign `day` to a word; the day must be free
    fn schedule(&mut self, id: i64, day: u16) -> Result<(), StoreError>;

    /// Move a word back to the unscheduled pool
    fn unschedule(&mut self, id: i64) -> Result<(), StoreError>;

    /// Exchange the words on two scheduled days
    fn swap_days(&mut self, a: u16, b: u16) -> Result<(), StoreError>;

    /// Insert many words at once, all or nothing
    fn import(&mut self, entries: &[DictionaryEntry]) -> Result<ImportSummary, StoreError>;

    /// Scheduled words keyed by day, ready for validation and export
    fn scheduled_map(&self) -> Result<BTreeMap<u16, DictionaryEntry>, StoreError> {
        Ok(self
            .list_scheduled()?
            .into_iter()
            .filter_map(|e| e.day_index.map(|day| (day, e)))
            .collect())
    }
}
