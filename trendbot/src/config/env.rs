//! Environment helpers shared by the config sections.

use anyhow::Result;
use std::env;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "trendbot.db";
pub const DEFAULT_LOG_FILE: &str = "logs/trendbot.log";

/// Non-empty value of the first variable that is set.
pub(crate) fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

/// Parses `name` when set; an unparsable value is an error rather than a silent default.
pub(crate) fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match first_var(&[name]) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has an invalid value {:?}: {}", name, raw, e)),
        None => Ok(default),
    }
}

/// DATABASE_URL, default `trendbot.db`.
pub fn database_url_from_env() -> String {
    first_var(&["DATABASE_URL"]).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// LOG_FILE, default `logs/trendbot.log`.
pub fn log_file_from_env() -> String {
    first_var(&["LOG_FILE"]).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}
