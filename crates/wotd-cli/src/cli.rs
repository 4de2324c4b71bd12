use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Offline maintenance for the word-of-the-day dictionary.
#[derive(Parser)]
#[command(name = "wotd", version, about = "Maintain the word-of-the-day dictionary")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Word database. Defaults to `WOTD_DB_PATH`, then `words.db`.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load words from a dictionary.json artifact into the database.
    Import(ImportArgs),
    /// Add a single word.
    Add(AddArgs),
    /// Assign a day to a word.
    Schedule {
        id: i64,
        day: u16,
    },
    /// Move a word back to the unscheduled pool.
    Unschedule {
        id: i64,
    },
    /// Exchange the words on two days.
    Swap {
        day_a: u16,
        day_b: u16,
    },
    /// Delete a word.
    Remove {
        id: i64,
    },
    /// Print scheduled (or unscheduled) words.
    List(ListArgs),
    /// Check that every day of the year has exactly one word.
    Validate(ValidateArgs),
    /// Validate, then write the dictionary.json artifact.
    Generate(GenerateArgs),
    /// Copy the database to a timestamped backup file.
    Backup(BackupArgs),
}

#[derive(clap::Args)]
pub struct ImportArgs {
    /// JSON file holding a list of words in artifact format.
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct AddArgs {
    #[arg(long)]
    pub word: String,

    #[arg(long)]
    pub meaning: String,

    #[arg(long)]
    pub link: Option<String>,

    /// Image key in blob storage.
    #[arg(long)]
    pub photo: Option<String>,

    #[arg(long = "photo-attribution")]
    pub photo_attribution: Option<String>,

    /// Schedule the word on this day right away.
    #[arg(long)]
    pub day: Option<u16>,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// List the unscheduled pool instead.
    #[arg(long)]
    pub unscheduled: bool,
}

#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    #[arg(short, long, default_value = "dictionary.json")]
    pub output: PathBuf,

    /// Single-line output instead of indented.
    #[arg(long)]
    pub compact: bool,
}

#[derive(clap::Args)]
pub struct BackupArgs {
    /// Target directory. Defaults to `WOTD_BACKUP_DIR`, then `backups`.
    #[arg(long)]
    pub dir: Option<PathBuf>,
}
