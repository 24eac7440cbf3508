use std::str::FromStr;

use crate::contract::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_CACHE_MAX_AGE_SECS, DEFAULT_CONCURRENCY};
use crate::response::ResponsePolicy;

pub const CONCURRENCY_ENV: &str = "BUCKET_OWNERS_CONCURRENCY";
pub const CACHE_MAX_AGE_ENV: &str = "BUCKET_OWNERS_CACHE_MAX_AGE_SECS";
pub const ALLOWED_ORIGIN_ENV: &str = "BUCKET_OWNERS_ALLOWED_ORIGIN";
pub const NAME_PREFIX_ENV: &str = "BUCKET_OWNERS_NAME_PREFIX";

const POSITIVE_INTEGER: &str = "a positive integer";
const NON_NEGATIVE_INTEGER: &str = "a non-negative integer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Upper bound on tag lookups in flight at once.
    pub concurrency: usize,
    pub response: ResponsePolicy,
    pub name_prefix: Option<String>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            response: ResponsePolicy::default(),
            name_prefix: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigError {}

impl AggregatorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from a variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let concurrency = parse_or(
            read(CONCURRENCY_ENV),
            CONCURRENCY_ENV,
            POSITIVE_INTEGER,
            DEFAULT_CONCURRENCY,
        )?;
        if concurrency == 0 {
            return Err(invalid_value(CONCURRENCY_ENV, POSITIVE_INTEGER, "0"));
        }

        let cache_max_age_secs = parse_or(
            read(CACHE_MAX_AGE_ENV),
            CACHE_MAX_AGE_ENV,
            NON_NEGATIVE_INTEGER,
            DEFAULT_CACHE_MAX_AGE_SECS,
        )?;

        Ok(Self {
            concurrency,
            response: ResponsePolicy {
                cache_max_age_secs,
                allowed_origin: read(ALLOWED_ORIGIN_ENV)
                    .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            },
            name_prefix: read(NAME_PREFIX_ENV),
        })
    }

    pub fn includes_bucket(&self, name: &str) -> bool {
        self.name_prefix
            .as_deref()
            .map_or(true, |prefix| name.starts_with(prefix))
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &str,
    expected: &str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| invalid_value(key, expected, &raw)),
    }
}

fn invalid_value(key: &str, expected: &str, raw: &str) -> ConfigError {
    ConfigError::new(format!("{key} must be {expected}, got '{raw}'"))
}
