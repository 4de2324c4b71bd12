mod backup;
mod cli;
mod generate;
mod import;
mod logging;
mod normalize;
mod validate_cmd;
mod words;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use wotd_config::Config;
use wotd_store::SqliteWordRepository;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::new();

    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.store.db_path));

    match run(cli.command, db_path, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, db_path: PathBuf, config: &Config) -> Result<ExitCode> {
    // backup copies the file as is; everything else needs an open store
    let command = match command {
        Command::Backup(args) => {
            let dir = args
                .dir
                .unwrap_or_else(|| PathBuf::from(&config.store.backup_dir));
            backup::run(&db_path, &dir)?;
            return Ok(ExitCode::SUCCESS);
        }
        command => command,
    };

    let mut repo = SqliteWordRepository::open(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;
    tracing::debug!("Opened word database {}", db_path.display());

    match command {
        Command::Import(args) => import::run(&mut repo, &args.file)?,
        Command::Add(args) => words::add(&mut repo, args)?,
        Command::Schedule { id, day } => words::schedule(&mut repo, id, day)?,
        Command::Unschedule { id } => words::unschedule(&mut repo, id)?,
        Command::Swap { day_a, day_b } => words::swap(&mut repo, day_a, day_b)?,
        Command::Remove { id } => words::remove(&mut repo, id)?,
        Command::List(args) => words::list(&repo, args.unscheduled)?,
        Command::Validate(args) => {
            if !validate_cmd::run(&repo, args.json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Generate(args) => generate::run(&repo, &args.output, args.compact)?,
        Command::Backup(_) => unreachable!("handled above"),
    }

    Ok(ExitCode::SUCCESS)
}
