//! Page request and page arithmetic
//!
//! `PageRequest` is owned by the caller. The calculator reads it, rewrites
//! the `-1` "all rows" page size once the total is known, and derives the
//! totals into a `PageResult`.

use serde::{Deserialize, Serialize};

use crate::errors::PagerError;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page size sentinel that requests every row as a single page
pub const FETCH_ALL: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub current_page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    pub fn new(current_page: i64, page_size: i64) -> Self {
        Self {
            current_page,
            page_size,
        }
    }

    /// Request every row as one page
    pub fn all() -> Self {
        Self::new(1, FETCH_ALL)
    }

    pub fn is_fetch_all(&self) -> bool {
        self.page_size == FETCH_ALL
    }

    /// Check the request before any SQL is built
    pub fn validate(&self) -> Result<(), PagerError> {
        if self.current_page < 1 {
            return Err(PagerError::InvalidCurrentPage(self.current_page));
        }
        if self.page_size == 0 || self.page_size < FETCH_ALL {
            return Err(PagerError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    /// Rows skipped before this page
    pub fn offset(&self) -> Result<i64, PagerError> {
        self.current_page
            .checked_sub(1)
            .and_then(|skipped| skipped.checked_mul(self.page_size))
            .ok_or_else(|| self.overflow())
    }

    /// Last row number covered by this page, counting from 1
    pub fn end_row(&self) -> Result<i64, PagerError> {
        self.offset()?
            .checked_add(self.page_size)
            .ok_or_else(|| self.overflow())
    }

    fn overflow(&self) -> PagerError {
        PagerError::PageWindowOverflow {
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }
}

/// Totals derived from a count query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub total_count: i64,
    pub total_page: i64,
    pub pre_page: i64,
    pub next_page: i64,
}

impl PageResult {
    pub fn has_previous(&self) -> bool {
        self.pre_page >= 1
    }

    pub fn has_next(&self) -> bool {
        self.next_page <= self.total_page
    }
}

pub struct PageCalculator;

impl PageCalculator {
    /// Derive totals for `page` and resolve the fetch-all page size.
    ///
    /// Previous and next page numbers are not clamped.
    pub fn compute(total_count: i64, page: &mut PageRequest) -> Result<PageResult, PagerError> {
        if total_count < 0 {
            return Err(PagerError::NegativeCount(total_count));
        }

        let total_page = if page.is_fetch_all() {
            if total_count > 0 { 1 } else { 0 }
        } else if page.page_size > 0 {
            total_count / page.page_size + if total_count % page.page_size == 0 { 0 } else { 1 }
        } else {
            return Err(PagerError::InvalidPageSize(page.page_size));
        };

        let result = PageResult {
            total_count,
            total_page,
            pre_page: page.current_page.saturating_sub(1),
            next_page: page.current_page.saturating_add(1),
        };

        if page.is_fetch_all() {
            page.page_size = total_count;
        }

        Ok(result)
    }
}
