//! Query rewriting for physical pagination
//!
//! This module turns a base query into its count query and page query.

pub mod ordering;
pub mod pagination;
pub mod rewriter;
pub mod sql_generation;


pub use ordering::{OrderByNormalizer, OrderField, OrderSpec, SortOrder};
pub use pagination::{PageCalculator, PageRequest, PageResult, DEFAULT_PAGE_SIZE, FETCH_ALL};
pub use rewriter::{PaginationRewriter, RewrittenQuery};
pub use sql_generation::{build_count_query, PageDialect};
