use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;

pub fn run(db_path: &Path, dir: &Path) -> Result<PathBuf> {
    if !db_path.is_file() {
        bail!("database {} does not exist", db_path.display());
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let stamp = Local::now().format("%Y%m%dT%H%M%S").to_string();
    let target = dir.join(backup_name(db_path, &stamp));
    fs::copy(db_path, &target).with_context(|| {
        format!("failed to copy {} to {}", db_path.display(), target.display())
    })?;

    tracing::info!("Backed up {} to {}", db_path.display(), target.display());
    println!("Backup written to {}", target.display());
    Ok(target)
}

/// `words.db` + stamp -> `words-{stamp}.db`
fn backup_name(db_path: &Path, stamp: &str) -> String {
    let stem = db_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "words".to_string());
    match db_path.extension() {
        Some(ext) => format!("{stem}-{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{stamp}"),
    }
}
