//! Statements handed to the interceptor
//!
//! A `PagedStatement` is what a data-access layer is about to execute: its id,
//! SQL text, bound parameters, and the paging input that travels with them.

use page_engine::{PageRequest, PageResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// In-memory offset/limit a host applies after fetching rows.
///
/// Physical pagination makes it redundant, so paginated statements get
/// unbounded row bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowBounds {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl RowBounds {
    pub fn unbounded() -> Self {
        Self {
            offset: None,
            limit: None,
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.offset.is_none() && self.limit.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedStatement {
    pub id: String,
    pub sql: String,
    #[serde(default)]
    pub params: Vec<Value>,
    #[serde(default)]
    pub page: Option<PageRequest>,
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub row_bounds: RowBounds,
    /// Totals filled in once the statement has been paginated
    #[serde(default)]
    pub page_result: Option<PageResult>,
}

impl PagedStatement {
    pub fn new(id: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sql: sql.into(),
            params: Vec::new(),
            page: None,
            order_by: None,
            row_bounds: RowBounds::unbounded(),
            page_result: None,
        }
    }

    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn with_row_bounds(mut self, row_bounds: RowBounds) -> Self {
        self.row_bounds = row_bounds;
        self
    }
}
