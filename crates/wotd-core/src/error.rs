use wotd_types::ValidationReport;

/// Failure to pick a word out of a collection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("dictionary is empty")]
    EmptyCollection,

    #[error("position must be a positive integer, got {position}")]
    InvalidPosition { position: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(
        "dictionary is incomplete: {} entries, {} missing and {} duplicate day indexes",
        .0.total_count,
        .0.missing_indexes.len(),
        .0.duplicate_indexes.len()
    )]
    Invalid(Box<ValidationReport>),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
