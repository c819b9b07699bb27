//! CLI probe over the schedule core.
//!
//! # Responsibility
//! - Verify `schedule_core` linkage and configuration loading.
//! - Run read-only service queries against a database file.

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use schedule_core::db::open_db;
use schedule_core::{
    init_logging, CoreConfig, GroupService, LectorService, ServiceError, SqliteGroupRepository,
    SqliteLectorRepository,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "schedule", version, about = "Schedule core probe")]
struct Cli {
    /// TOML config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core health and version.
    Ping,
    /// List all groups.
    Groups,
    /// List all lectors.
    Lectors,
    /// Count lessons for one group.
    GroupLessons { id: i64 },
    /// Count lessons starting in `[start, end)`, e.g. 2024-09-02T08:00:00.
    LectorLessons {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Command::Ping = cli.command {
        println!("schedule_core ping={}", schedule_core::ping());
        println!("schedule_core version={}", schedule_core::core_version());
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => CoreConfig::load(path)?,
        None => CoreConfig::default(),
    };
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }
    log::info!("event=cli_start module=cli status=ok command={:?}", cli.command);

    let conn = open_db(&config.database)?;
    let groups = GroupService::with_default_validator(SqliteGroupRepository::new(&conn));
    let lectors = LectorService::with_default_validator(SqliteLectorRepository::new(&conn));

    let outcome = match cli.command {
        Command::Ping => Ok(()),
        Command::Groups => groups.get_all().map(|all| {
            for group in all {
                println!("{}\t{}", group.id.unwrap_or_default(), group.name);
            }
        }),
        Command::Lectors => lectors.get_all().map(|all| {
            for lector in all {
                println!("{}\t{}", lector.id.unwrap_or_default(), lector.full_name());
            }
        }),
        Command::GroupLessons { id } => groups
            .lessons_for_group(id)
            .map(|count| println!("{count}")),
        Command::LectorLessons { start, end } => lectors
            .lessons_for_lector(start, end)
            .map(|count| println!("{count}")),
    };

    outcome.map_err(|err: ServiceError| format!("[{}] {err}", err.kind().as_str()).into())
}
