use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub planets_csv: String,
    pub spacex_sync: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/launches.db".to_string()),
            planets_csv: env::var("PLANETS_CSV")
                .unwrap_or_else(|_| "data/kepler_exoplanets.csv".to_string()),
            spacex_sync: env::var("SPACEX_SYNC")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }
}
