use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub seed_demo: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            database_url: try_load("DATABASE_URL", "sqlite:marketplace.db?mode=rwc"),
            host: try_load("HOST", "127.0.0.1"),
            port: try_load("PORT", "3000"),
            seed_demo: try_load("SEED_DEMO", "false"),
        }
    }
}

pub(crate) fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            parse_default(key, default)
        }
    }
}

fn parse_default<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    match default.parse() {
        Ok(value) => value,
        // defaults are literals in this module
        Err(e) => unreachable!("default for {key} does not parse: {e}"),
    }
}
