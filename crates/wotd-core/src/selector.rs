//! Deterministic word selection.
//!
//! Positions are 1-based. Anything past the end of the collection wraps
//! around instead of failing, so a dictionary with fewer than 366 words still
//! yields a word for every day.

use crate::error::SelectError;

/// Pick the entry at a 1-based `position`, wrapping past the end.
///
/// A position that is an exact multiple of the length maps to the last
/// entry, so with `[A, B, C]` positions `1..=7` give `A B C A B C A`.
pub fn select_by_position<T>(entries: &[T], position: i64) -> Result<&T, SelectError> {
    if entries.is_empty() {
        return Err(SelectError::EmptyCollection);
    }
    if position <= 0 {
        return Err(SelectError::InvalidPosition { position });
    }

    Ok(&entries[wrapped_offset(entries.len(), position.unsigned_abs())])
}

/// Same as [`select_by_position`] with the day of the year as the position
pub fn select_by_day_of_year<T>(entries: &[T], day_of_year: u32) -> Result<&T, SelectError> {
    select_by_position(entries, i64::from(day_of_year))
}

fn wrapped_offset(len: usize, position: u64) -> usize {
    let len = len as u64;
    let offset = if position <= len {
        position - 1
    } else {
        match position % len {
            0 => len - 1,
            remainder => remainder - 1,
        }
    };
    // offset < len, and len came from a usize
    offset as usize
}
