//! Catalog configuration.
//!
//! Read from the environment:
//!
//! - `SHOP_CATALOG_RESULT_LIMIT` - maximum entries returned by a search (default: 10, min: 1, max: 10)
//! - `SHOP_CATALOG_NAME_SEPARATOR` - joins producer and name in long display names (default: `" - "`)

use shop_core::{DomainError, DomainResult};

pub const RESULT_LIMIT_VAR: &str = "SHOP_CATALOG_RESULT_LIMIT";
pub const NAME_SEPARATOR_VAR: &str = "SHOP_CATALOG_NAME_SEPARATOR";

pub const DEFAULT_RESULT_LIMIT: usize = 10;
pub const DEFAULT_NAME_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Upper bound on entries returned by `list_by_name` / `list_by_producer`.
    pub result_limit: usize,
    pub name_separator: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            name_separator: DEFAULT_NAME_SEPARATOR.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let result_limit = match lookup(RESULT_LIMIT_VAR) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                DomainError::validation(format!("{RESULT_LIMIT_VAR}={raw:?}: {e}"))
            })?,
            None => DEFAULT_RESULT_LIMIT,
        };

        let name_separator =
            lookup(NAME_SEPARATOR_VAR).unwrap_or_else(|| DEFAULT_NAME_SEPARATOR.to_string());

        let config = Self {
            result_limit,
            name_separator,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(1..=DEFAULT_RESULT_LIMIT).contains(&self.result_limit) {
            return Err(DomainError::validation(format!(
                "{RESULT_LIMIT_VAR} must be between 1 and {DEFAULT_RESULT_LIMIT}, got {}",
                self.result_limit
            )));
        }
        if self.name_separator.is_empty() {
            return Err(DomainError::validation(format!(
                "{NAME_SEPARATOR_VAR} must not be empty"
            )));
        }
        Ok(())
    }
}
