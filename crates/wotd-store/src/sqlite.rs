use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, Row, params};
use wotd_types::{DAYS_IN_DICTIONARY, DictionaryEntry};

use crate::error::StoreError;
use crate::repository::{ImportSummary, WordRepository};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS words (
    id                INTEGER PRIMARY KEY,
    day_index         INTEGER UNIQUE CHECK (day_index BETWEEN 1 AND 366),
    word              TEXT NOT NULL,
    meaning           TEXT NOT NULL,
    link              TEXT,
    photo             TEXT,
    photo_attribution TEXT
);
";

const COLUMNS: &str = "id, day_index, word, meaning, link, photo, photo_attribution";

/// SQLite-backed [`WordRepository`]
pub struct SqliteWordRepository {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteWordRepository {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn, path })
    }

    /// Backing file, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn list_where(&self, clause: &str) -> Result<Vec<DictionaryEntry>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM words WHERE {clause}");
        let mut stmt = self.conn.prepare(&sql)?;
        let entries = stmt
            .query_map([], row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }
}

impl WordRepository for SqliteWordRepository {
    fn insert(&mut self, entry: &DictionaryEntry) -> Result<i64, StoreError> {
        insert_entry(&self.conn, entry)
    }

    fn update(&mut self, entry: &DictionaryEntry) -> Result<(), StoreError> {
        check_fields(entry)?;
        if let Some(day) = entry.day_index {
            check_day_free(&self.conn, day, Some(entry.id))?;
        }

        let changed = self.conn.execute(
            "UPDATE words
             SET day_index = ?2, word = ?3, meaning = ?4, link = ?5, photo = ?6, photo_attribution = ?7
             WHERE id = ?1",
            params![
                entry.id,
                entry.day_index,
                entry.text,
                entry.meaning,
                non_empty(&entry.link),
                non_empty(&entry.image_ref),
                non_empty(&entry.image_attribution),
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(entry.id));
        }
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<DictionaryEntry>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM words WHERE id = ?1");
        let entry = self
            .conn
            .query_row(&sql, params![id], row_to_entry)
            .optional()?;
        Ok(entry)
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM words WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn list_scheduled(&self) -> Result<Vec<DictionaryEntry>, StoreError> {
        self.list_where("day_index IS NOT NULL ORDER BY day_index")
    }

    fn list_unscheduled(&self) -> Result<Vec<DictionaryEntry>, StoreError> {
        self.list_where("day_index IS NULL ORDER BY id")
    }

    fn schedule(&mut self, id: i64, day: u16) -> Result<(), StoreError> {
        check_day_free(&self.conn, day, Some(id))?;
        let changed = self.conn.execute(
            "UPDATE words SET day_index = ?2 WHERE id = ?1",
            params![id, day],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn unschedule(&mut self, id: i64) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE words SET day_index = NULL WHERE id = ?1",
            params![id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn swap_days(&mut self, a: u16, b: u16) -> Result<(), StoreError> {
        check_range(a)?;
        check_range(b)?;
        if a == b {
            return Ok(());
        }

        let tx = self.conn.transaction()?;
        let id_a = occupant(&tx, a)?.ok_or(StoreError::DayEmpty(a))?;
        let id_b = occupant(&tx, b)?.ok_or(StoreError::DayEmpty(b))?;

        // park one word so the unique index never sees two rows on a day
        tx.execute(
            "UPDATE words SET day_index = NULL WHERE id = ?1",
            params![id_a],
        )?;
        tx.execute(
            "UPDATE words SET day_index = ?2 WHERE id = ?1",
            params![id_b, a],
        )?;
        tx.execute(
            "UPDATE words SET day_index = ?2 WHERE id = ?1",
            params![id_a, b],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn import(&mut self, entries: &[DictionaryEntry]) -> Result<ImportSummary, StoreError> {
        let tx = self.conn.transaction()?;
        let mut summary = ImportSummary::default();

        for entry in entries {
            insert_entry(&tx, entry)?;
            if entry.is_scheduled() {
                summary.scheduled += 1;
            } else {
                summary.unscheduled += 1;
            }
        }

        tx.commit()?;
        Ok(summary)
    }
}

fn insert_entry(conn: &Connection, entry: &DictionaryEntry) -> Result<i64, StoreError> {
    check_fields(entry)?;
    if let Some(day) = entry.day_index {
        check_day_free(conn, day, None)?;
    }

    conn.execute(
        "INSERT INTO words (day_index, word, meaning, link, photo, photo_attribution)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.day_index,
            entry.text,
            entry.meaning,
            non_empty(&entry.link),
            non_empty(&entry.image_ref),
            non_empty(&entry.image_attribution),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn occupant(conn: &Connection, day: u16) -> Result<Option<i64>, StoreError> {
    let id = conn
        .query_row(
            "SELECT id FROM words WHERE day_index = ?1",
            params![day],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// `owner` may already hold the day
fn check_day_free(conn: &Connection, day: u16, owner: Option<i64>) -> Result<(), StoreError> {
    check_range(day)?;
    match occupant(conn, day)? {
        Some(id) if Some(id) != owner => Err(StoreError::DayTaken { day, id }),
        _ => Ok(()),
    }
}

fn check_range(day: u16) -> Result<(), StoreError> {
    if (1..=DAYS_IN_DICTIONARY).contains(&day) {
        Ok(())
    } else {
        Err(StoreError::DayOutOfRange(day))
    }
}

fn check_fields(entry: &DictionaryEntry) -> Result<(), StoreError> {
    if entry.text.trim().is_empty() {
        return Err(StoreError::EmptyField("word"));
    }
    if entry.meaning.trim().is_empty() {
        return Err(StoreError::EmptyField("meaning"));
    }
    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<DictionaryEntry> {
    Ok(DictionaryEntry {
        id: row.get(0)?,
        day_index: row.get(1)?,
        text: row.get(2)?,
        meaning: row.get(3)?,
        link: row.get(4)?,
        image_ref: row.get(5)?,
        image_attribution: row.get(6)?,
    })
}
