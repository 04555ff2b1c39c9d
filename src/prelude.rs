//! Convenience re-exports for common SqlPager usage
//!
//! This prelude module re-exports the most commonly used items from SqlPager,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use sqlpager::prelude::*;
//!
//! let page = PageRequest::new(1, 20);
//! assert_eq!(page.page_size, 20);
//! ```

// Core SqlPager components
pub use crate::core::PageInterceptor;
pub use crate::errors::SqlPagerError;
pub use crate::statement::{PagedStatement, RowBounds};

// Re-export centralized config
pub use config::{AppConfig, ConfigError, PagerConfig};

// Re-export commonly used page-engine types for convenience
pub use page_engine::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::MySqlPool;
