use clap::{Args, Subcommand};
use countries::config::{format_size, get_sqlite_info, SqliteDatabaseInfo};
use countries::database::COUNTRY_SEED_COUNT;
use countries::CountriesConfig;
use std::time::Instant;

use super::open_database_unseeded;

/// Arguments for the Database command
#[derive(Args)]
pub struct DatabaseArgs {
    /// Print results as JSON
    #[clap(long, global = true)]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Option<DatabaseCommands>,
}

/// Database subcommands
#[derive(Subcommand)]
pub enum DatabaseCommands {
    /// Show database status (default when no subcommand)
    Status,

    /// Insert any missing seed rows; existing rows are left untouched
    Seed,

    /// Drop all tables, recreate them and seed again
    Reset {
        /// Skip confirmation prompt
        #[clap(long, short = 'y')]
        yes: bool,
    },
}

pub fn run(config: &CountriesConfig, args: DatabaseArgs) {
    match args.command {
        None | Some(DatabaseCommands::Status) => run_status(config, args.json),
        Some(DatabaseCommands::Seed) => run_seed(config, args.json),
        Some(DatabaseCommands::Reset { yes }) => run_reset(config, yes, args.json),
    }
}

fn run_status(config: &CountriesConfig, json: bool) {
    let info = get_sqlite_info(config);

    if json {
        match serde_json::to_string_pretty(&info) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Error serializing database status: {}", e),
        }
    } else {
        print_status(&info);
    }
}

fn print_status(info: &SqliteDatabaseInfo) {
    println!("SQLite Database:");
    println!("  Path:           {}", info.path);
    println!(
        "  Status:         {}",
        if info.exists { "exists" } else { "not created" }
    );
    if let Some(size) = info.size_bytes {
        println!("  Size:           {}", format_size(size));
    }
    println!(
        "  Schema:         {}",
        if info.schema_initialized {
            format!("initialized (v{})", info.schema_version.unwrap_or(0))
        } else {
            "not initialized".to_string()
        }
    );
    if let Some(count) = info.country_count {
        println!(
            "  Countries:      {} of {} records",
            count, COUNTRY_SEED_COUNT
        );
    }
    if let Some(ts) = info.seeded_at {
        println!("  Seeded at:      {} (unix)", ts);
    }
}

fn run_seed(config: &CountriesConfig, json: bool) {
    let start = Instant::now();
    let db = open_database_unseeded(config);

    match db.countries().seed() {
        Ok(inserted) => {
            let duration_secs = start.elapsed().as_secs_f64();
            let total = db.countries().count().unwrap_or(0);
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "inserted": inserted,
                        "total": total,
                        "duration_secs": duration_secs
                    })
                );
            } else {
                println!(
                    "✓ Inserted {} countries, {} in database ({:.2}s)",
                    inserted, total, duration_secs
                );
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to seed countries: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_reset(config: &CountriesConfig, yes: bool, json: bool) {
    if !yes {
        eprintln!("This will drop and re-seed {}", config.sqlite_path());
        eprint!("Continue? [y/N] ");
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !matches!(input.trim(), "y" | "Y" | "yes")
        {
            eprintln!("Aborted.");
            return;
        }
    }

    let start = Instant::now();
    let db = open_database_unseeded(config);

    match db.reset() {
        Ok(inserted) => {
            let duration_secs = start.elapsed().as_secs_f64();
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "reset": true,
                        "inserted": inserted,
                        "duration_secs": duration_secs
                    })
                );
            } else {
                println!(
                    "✓ Database reset, {} countries seeded ({:.2}s)",
                    inserted, duration_secs
                );
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to reset database: {}", e);
            std::process::exit(1);
        }
    }
}
