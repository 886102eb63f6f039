use countries::lens::country::{CountryActiveArgs, CountryLens};
use countries::CountriesConfig;

use super::open_database;

pub fn run(config: &CountriesConfig, mut args: CountryActiveArgs) {
    if args.lang.is_none() {
        args.lang = Some(config.default_language.clone());
    }

    let db = open_database(config);
    let lens = CountryLens::new(db.provider());

    match lens.active(&args) {
        Ok(results) => println!("{}", lens.format_results(&results, &args.format)),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
