use std::env;

use anyhow::{Context, Result, bail};

use crate::models::MAX_RESULTS;

/// Display cap for the results message
pub const MAX_RESULTS_VAR: &str = "PROVENANCE_MAX_RESULTS";
/// Tracing filter directive for the binary
pub const LOG_VAR: &str = "PROVENANCE_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub max_results: u64,
    pub log_filter: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_results: u64::from(MAX_RESULTS.get()),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ListingConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` (used by tests to avoid touching the environment)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_RESULTS_VAR) {
            config.max_results = parse_max_results(&raw)
                .with_context(|| format!("Invalid {} value: {:?}", MAX_RESULTS_VAR, raw))?;
        }
        if let Some(filter) = lookup(LOG_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn parse_max_results(raw: &str) -> Result<u64> {
    let value: u64 = raw.trim().parse().context("not an unsigned integer")?;
    if value == 0 {
        bail!("must be greater than zero");
    }
    Ok(value)
}
