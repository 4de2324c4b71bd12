pub mod error;
pub mod repository;
pub mod sqlite;

pub use error::StoreError;
pub use repository::{ImportSummary, WordRepository};
pub use sqlite::SqliteWordRepository;
