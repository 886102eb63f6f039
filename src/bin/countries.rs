use clap::{Parser, Subcommand};
use countries::lens::country::{CountryActiveArgs, CountryListArgs};
use countries::CountriesConfig;
use tracing::Level;

mod commands;

use commands::config::ConfigArgs;
use commands::database::DatabaseArgs;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path, by default $HOME/.countries/countries.toml is used
    #[clap(short, long)]
    config: Option<String>,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List countries with filters, sorting and pagination
    List(CountryListArgs),

    /// List active countries, optionally of one continent
    Active(CountryActiveArgs),

    /// Inspect, seed or reset the countries database
    Database(DatabaseArgs),

    /// Show the current configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            // filter spans/events with level DEBUG or higher.
            .with_max_level(Level::DEBUG)
            .init();
    }

    let config = match CountriesConfig::new(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::List(args) => commands::list::run(&config, args),
        Commands::Active(args) => commands::active::run(&config, args),
        Commands::Database(args) => commands::database::run(&config, args),
        Commands::Config(args) => commands::config::run(&config, args),
    }
}
