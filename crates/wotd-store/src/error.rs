#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("word {0} not found")]
    NotFound(i64),

    #[error("day {day} is already taken by word {id}")]
    DayTaken { day: u16, id: i64 },

    #[error("no word is scheduled on day {0}")]
    DayEmpty(u16),

    #[error("day {0} is outside 1..=366")]
    DayOutOfRange(u16),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
