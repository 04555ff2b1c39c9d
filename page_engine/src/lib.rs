//! Page Engine - dialect-aware SQL pagination for SqlPager
//!
//! This crate rewrites an opaque read query into a count query and a page
//! query for MySQL, Oracle or SQL Server. The count query is executed by the
//! caller through a `CountExecutor`; everything else is pure string and
//! integer work with no shared state.

pub mod dialect;
pub mod errors;
pub mod executor;
pub mod prelude;
pub mod rewrite;

pub use dialect::Dialect;
pub use errors::{CountError, PagerError};
pub use executor::{CountExecutor, FnCountExecutor, MySqlCountExecutor};
pub use rewrite::{
    OrderByNormalizer, PageCalculator, PageDialect, PageRequest, PageResult, PaginationRewriter,
    RewrittenQuery, SortOrder, DEFAULT_PAGE_SIZE,
};
