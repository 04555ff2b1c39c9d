//! # Configuration Management for SqlPager
//!
//! This crate provides the configuration structures for SqlPager: which SQL
//! dialect to page for, which statements are paginated, and how ordering
//! fields are written.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::PagerConfig;
//!
//! let pager_config = PagerConfig::new("oracle")
//!     .with_page_statement_pattern(".*ByPage$")
//!     .with_default_page_size(20);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [pager]
//! dialect = "mysql"
//! page_statement_pattern = ".*Page$"
//! default_page_size = 10
//! snake_case_order_fields = true
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from SQLPAGER_CONFIG or ./sqlpager.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./sqlpager.toml";
const CONFIG_PATH_VAR: &str = "SQLPAGER_CONFIG";

const DIALECT_VAR: &str = "SQLPAGER_DIALECT";
const PAGE_STATEMENT_PATTERN_VAR: &str = "SQLPAGER_PAGE_STATEMENT_PATTERN";
const DEFAULT_PAGE_SIZE_VAR: &str = "SQLPAGER_DEFAULT_PAGE_SIZE";
const SNAKE_CASE_ORDER_FIELDS_VAR: &str = "SQLPAGER_SNAKE_CASE_ORDER_FIELDS";

/// Dialect used when none is configured
pub const DEFAULT_DIALECT: &str = "mysql";

/// Statement id pattern used when none is configured
pub const DEFAULT_PAGE_STATEMENT_PATTERN: &str = ".*Page$";

pub use page_engine::DEFAULT_PAGE_SIZE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pager: PagerConfig,
}

/// Pagination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// `mysql`, `oracle` or `sqlserver`; other values disable pagination
    #[serde(default)]
    pub dialect: Option<String>,
    /// Regular expression matched against the full statement id
    #[serde(default)]
    pub page_statement_pattern: Option<String>,
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
    /// Fold camelCase order fields to snake_case; unset keeps the dialect default
    #[serde(default)]
    pub snake_case_order_fields: Option<bool>,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            dialect: None,
            page_statement_pattern: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            snake_case_order_fields: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment (or `.env`),
    /// falling back to `./sqlpager.toml`
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            load_dotenv()?;

            if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
                Self::from_file(&config_path)
            } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
                Self::from_file(DEFAULT_CONFIG_PATH)
            } else {
                Err(ConfigError::Invalid(format!(
                    "Config path must be specified as {} (environment or .env file) or in {} file",
                    CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
                )))
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        self.pager.validate()
    }
}

impl PagerConfig {
    /// Create a pager configuration for a dialect
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: Some(dialect.into()),
            ..Self::default()
        }
    }

    pub fn with_page_statement_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.page_statement_pattern = Some(pattern.into());
        self
    }

    pub fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn with_snake_case_order_fields(mut self, enabled: bool) -> Self {
        self.snake_case_order_fields = Some(enabled);
        self
    }

    /// Read pager settings from `SQLPAGER_*` environment variables (and `.env`)
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv()?;

        let mut config = Self {
            dialect: read_var(DIALECT_VAR)?,
            page_statement_pattern: read_var(PAGE_STATEMENT_PATTERN_VAR)?,
            ..Self::default()
        };

        if let Some(size) = read_var(DEFAULT_PAGE_SIZE_VAR)? {
            config.default_page_size = size.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{} must be an integer, got '{}'",
                    DEFAULT_PAGE_SIZE_VAR, size
                ))
            })?;
        }

        if let Some(flag) = read_var(SNAKE_CASE_ORDER_FIELDS_VAR)? {
            config.snake_case_order_fields = Some(flag.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{} must be true or false, got '{}'",
                    SNAKE_CASE_ORDER_FIELDS_VAR, flag
                ))
            })?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Configured dialect name, if set and not blank
    pub fn configured_dialect(&self) -> Option<&str> {
        // Kept verbatim; dialect names are matched exactly
        self.dialect.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Configured statement id pattern, if set and not blank
    pub fn configured_page_statement_pattern(&self) -> Option<&str> {
        non_blank(self.page_statement_pattern.as_deref())
    }

    /// Dialect name to use, defaulting to `mysql`
    pub fn dialect_or_default(&self) -> &str {
        self.configured_dialect().unwrap_or(DEFAULT_DIALECT)
    }

    /// Statement id pattern to use, defaulting to `.*Page$`
    pub fn page_statement_pattern_or_default(&self) -> &str {
        self.configured_page_statement_pattern()
            .unwrap_or(DEFAULT_PAGE_STATEMENT_PATTERN)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 || self.default_page_size < -1 {
            return Err(ConfigError::Invalid(format!(
                "Pager default_page_size must be positive or -1, got {}",
                self.default_page_size
            )));
        }

        Ok(())
    }
}

fn load_dotenv() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn read_var(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
