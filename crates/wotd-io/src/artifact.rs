use std::fs;
use std::io::Write;
use std::path::Path;

use wotd_types::WordRecord;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a `dictionary.json` artifact
pub fn read_artifact(path: &Path) -> Result<Vec<WordRecord>, ArtifactError> {
    tracing::info!("Loading dictionary artifact: {}", path.display());
    let json = fs::read_to_string(path)?;
    let records = wotd_core::parse_artifact(&json)?;
    tracing::info!("Loaded {} words", records.len());
    Ok(records)
}

/// Write `contents` next to `path` first, then rename over it, so readers
/// never observe a half-written artifact.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), ArtifactError> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        if !contents.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        file.sync_all()?;
    }

    fs::rename(&tmp, path)?;
    tracing::info!("Wrote dictionary artifact: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        let json = r#"[{"index":1,"word":"ことば","meaning":"word","link":"","photo":"","photo_attribution":""}]"#;

        write_artifact(&path, json).unwrap();
        let records = read_artifact(&path).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "ことば");
        assert!(!dir.path().join("dictionary.json.tmp").exists());
    }

    #[test]
    fn overwrite_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        write_artifact(&path, "[]").unwrap();
        write_artifact(&path, r#"[{"index":2,"word":"a","meaning":"b"}]"#).unwrap();
        assert_eq!(read_artifact(&path).unwrap()[0].index, 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_artifact(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io(_)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(read_artifact(&path), Err(ArtifactError::Parse(_))));
    }
}
