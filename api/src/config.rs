use std::env;
use std::str::FromStr;

use crate::feed::LinkMode;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// How many of the newest records the feed shows
    pub feed_limit: usize,
    /// How many records the in-memory log keeps
    pub retain_records: usize,
    /// Nick prefix of the relay bot whose lines are recorded
    pub announcer_prefix: String,
    /// Page auto-refresh interval
    pub refresh_secs: u32,
    pub page_title: String,
    pub link_mode: LinkMode,
    /// Ingest rate limit per peer: sustained requests per second.
    /// The relay forwards every chat line, so this has to cover channel volume.
    pub ingest_per_second: u64,
    /// Ingest rate limit per peer: burst size
    pub ingest_burst: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_var("PORT", 8080),
            feed_limit: parse_var("FEED_LIMIT", 100),
            retain_records: parse_var("RETAIN_RECORDS", 1000),
            announcer_prefix: env::var("ANNOUNCER_PREFIX")
                .unwrap_or_else(|_| "warbot".to_string()),
            refresh_secs: parse_var("REFRESH_SECS", 30),
            page_title: env::var("PAGE_TITLE")
                .unwrap_or_else(|_| "Urban Terror Warbot".to_string()),
            link_mode: parse_var("LINK_MODE", LinkMode::ReplaceAllWithFirst),
            ingest_per_second: parse_var("INGEST_PER_SECOND", 20),
            ingest_burst: parse_var("INGEST_BURST", 40),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            feed_limit: 100,
            retain_records: 1000,
            announcer_prefix: "warbot".to_string(),
            refresh_secs: 30,
            page_title: "Urban Terror Warbot".to_string(),
            link_mode: LinkMode::ReplaceAllWithFirst,
            ingest_per_second: 20,
            ingest_burst: 40,
        }
    }
}

impl Config {
    /// Interval after which the rate limiter restores one ingest request
    pub fn ingest_replenish_ms(&self) -> u64 {
        (1000 / self.ingest_per_second.max(1)).max(1)
    }
}

/// Read and parse an env var, falling back to `default` when unset or invalid
fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}
