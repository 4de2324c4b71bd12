use anyhow::{Context, Result, bail};
use wotd_store::WordRepository;
use wotd_types::DictionaryEntry;

use crate::cli::AddArgs;
use crate::normalize::normalize_entry;

pub fn add(repo: &mut impl WordRepository, args: AddArgs) -> Result<()> {
    let entry = normalize_entry(DictionaryEntry {
        id: 0,
        day_index: args.day,
        text: args.word,
        meaning: args.meaning,
        link: args.link,
        image_ref: args.photo,
        image_attribution: args.photo_attribution,
    });

    let id = repo.insert(&entry).context("failed to add word")?;
    match entry.day_index {
        Some(day) => println!("Added word {id} on day {day}"),
        None => println!("Added word {id} (unscheduled)"),
    }
    Ok(())
}

pub fn schedule(repo: &mut impl WordRepository, id: i64, day: u16) -> Result<()> {
    repo.schedule(id, day)?;
    println!("Scheduled word {id} on day {day}");
    Ok(())
}

pub fn unschedule(repo: &mut impl WordRepository, id: i64) -> Result<()> {
    repo.unschedule(id)?;
    println!("Moved word {id} to the unscheduled pool");
    Ok(())
}

pub fn swap(repo: &mut impl WordRepository, day_a: u16, day_b: u16) -> Result<()> {
    repo.swap_days(day_a, day_b)?;
    println!("Swapped days {day_a} and {day_b}");
    Ok(())
}

pub fn remove(repo: &mut impl WordRepository, id: i64) -> Result<()> {
    let Some(entry) = repo.get(id)? else {
        bail!("word {id} not found");
    };
    repo.delete(id)?;
    println!("Removed word {id} ({})", entry.text);
    Ok(())
}

pub fn list(repo: &impl WordRepository, unscheduled: bool) -> Result<()> {
    let entries = if unscheduled {
        repo.list_unscheduled()?
    } else {
        repo.list_scheduled()?
    };

    for entry in &entries {
        println!("{}", format_line(entry));
    }
    tracing::info!("{} words listed", entries.len());
    Ok(())
}

fn format_line(entry: &DictionaryEntry) -> String {
    let day = entry
        .day_index
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    format!("{day:>3}  #{:<5} {}  {}", entry.id, entry.text, entry.meaning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_layout() {
        let mut entry = DictionaryEntry::scheduled(7, "侘寂", "beauty in imperfection");
        entry.id = 12;
        assert_eq!(format_line(&entry), "  7  #12    侘寂  beauty in imperfection");

        entry.day_index = None;
        assert!(format_line(&entry).starts_with("  -  #12"));
    }
}
