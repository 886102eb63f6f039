use countries::lens::country::{CountryLens, CountryListArgs};
use countries::CountriesConfig;

use super::open_database;

pub fn run(config: &CountriesConfig, mut args: CountryListArgs) {
    if args.lang.is_none() {
        args.lang = Some(config.default_language.clone());
    }

    let db = open_database(config);
    let lens = CountryLens::new(db.provider());

    match lens.list(&args) {
        Ok(results) => println!("{}", lens.format_results(&results, &args.format)),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
