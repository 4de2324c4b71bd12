pub mod calendar;
pub mod error;
pub mod generator;
pub mod selector;
pub mod validator;

pub use calendar::{DayOfYearSource, FixedDay, SystemCalendar};
pub use error::{GenerateError, SelectError};
pub use generator::{OutputMode, generate, generate_checked, ordered_records, parse_artifact};
pub use selector::{select_by_day_of_year, select_by_position};
pub use validator::{validate, validate_entries};
