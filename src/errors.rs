//! Error types for the SqlPager crate
//!
//! This module contains all error types that can be returned by SqlPager operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlPagerError {
    #[error("Pagination error: {0}")]
    Pager(#[from] page_engine::PagerError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid page statement pattern: {0}")]
    StatementPattern(#[from] regex::Error),
}
