use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(log_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => level_filter(log_level),
    }
}

fn level_filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(log_level).with_context(|| format!("Invalid LOG_LEVEL '{log_level}'"))
}

/// Install the global subscriber; logs go to stderr so stdout carries only results.
pub fn init(log_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_levels_and_directives() {
        assert!(level_filter("info").is_ok());
        assert!(level_filter("listing_scout=debug,reqwest=warn").is_ok());
    }

    #[test]
    fn rejects_malformed_level() {
        let err = level_filter("listing_scout=loud").unwrap_err();
        assert_eq!(err.to_string(), "Invalid LOG_LEVEL 'listing_scout=loud'");
    }
}
