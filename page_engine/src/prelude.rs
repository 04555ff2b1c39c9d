//! Convenience re-exports for common page-engine usage

// Dialects and errors
pub use crate::dialect::Dialect;
pub use crate::errors::{CountError, PagerError};

// Count execution
pub use crate::executor::{CountExecutor, FnCountExecutor, MySqlCountExecutor};

// Rewriting
pub use crate::rewrite::{
    OrderByNormalizer, PageCalculator, PageDialect, PageRequest, PageResult, PaginationRewriter,
    RewrittenQuery, SortOrder,
};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde_json::Value;
