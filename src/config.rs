use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::constants::SIMILARITY_THRESHOLD;

#[derive(Debug)]
pub struct Config {
    pub log_level: String,
    pub similarity_threshold: f64,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            similarity_threshold: env::var("SIMILARITY_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SIMILARITY_THRESHOLD),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
