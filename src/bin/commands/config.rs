use clap::Args;
use countries::config::{format_size, get_sqlite_info, SqliteDatabaseInfo};
use countries::CountriesConfig;
use serde::Serialize;

/// Arguments for the Config command
#[derive(Args)]
pub struct ConfigArgs {
    /// Print configuration as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConfigInfo {
    config_file: String,
    data_dir: String,
    default_language: String,
    database: SqliteDatabaseInfo,
}

pub fn run(config: &CountriesConfig, args: ConfigArgs) {
    let config_info = ConfigInfo {
        config_file: CountriesConfig::config_file_path(),
        data_dir: config.data_dir.clone(),
        default_language: config.default_language.clone(),
        database: get_sqlite_info(config),
    };

    if args.json {
        match serde_json::to_string_pretty(&config_info) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing config info: {}", e),
        }
    } else {
        print_config_table(config, &config_info);
    }
}

fn print_config_table(config: &CountriesConfig, info: &ConfigInfo) {
    println!("Countries Configuration");
    println!("=======================\n");

    println!("General:");
    println!("  Config file:    {}", info.config_file);
    println!();
    println!("{}", config.summary());
    println!();

    println!("SQLite Database:");
    println!(
        "  Status:         {}",
        if info.database.exists {
            "exists"
        } else {
            "not created"
        }
    );
    if let Some(size) = info.database.size_bytes {
        println!("  Size:           {}", format_size(size));
    }
    if let Some(count) = info.database.country_count {
        println!("  Countries:      {} records", count);
    }
}
