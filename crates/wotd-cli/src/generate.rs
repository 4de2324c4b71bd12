use std::path::Path;

use anyhow::{Context, Result};
use wotd_core::{GenerateError, OutputMode, generate_checked};
use wotd_store::WordRepository;

use crate::validate_cmd::describe;

pub fn run(repo: &impl WordRepository, output: &Path, compact: bool) -> Result<()> {
    let mode = if compact {
        OutputMode::Compact
    } else {
        OutputMode::Pretty
    };

    let map = repo.scheduled_map()?;
    let json = match generate_checked(&map, mode) {
        Ok(json) => json,
        Err(GenerateError::Invalid(report)) => {
            eprint!("{}", describe(&report));
            anyhow::bail!("refusing to write {}: dictionary is incomplete", output.display());
        }
        Err(e) => return Err(e.into()),
    };

    wotd_io::write_artifact(output, &json)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Wrote {} words to {}", map.len(), output.display());
    Ok(())
}
