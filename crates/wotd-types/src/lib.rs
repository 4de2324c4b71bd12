pub mod types;

pub use types::{DAYS_IN_DICTIONARY, DictionaryEntry, ValidationReport, WordRecord};
