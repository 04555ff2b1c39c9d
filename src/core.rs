//! Core SqlPager functionality
//!
//! This module contains the `PageInterceptor`, the statement-level entry point
//! a data-access layer calls right before executing a query. It decides
//! whether the statement is paginated, rewrites it through the page engine
//! and clears the host's in-memory row bounds.

use page_engine::{
    CountExecutor, Dialect, MySqlCountExecutor, PageRequest, PageResult, PagerError,
    PaginationRewriter,
};
use regex::Regex;
use sqlx::MySqlPool;

use crate::errors::SqlPagerError;
use crate::statement::{PagedStatement, RowBounds};
use config::{AppConfig, PagerConfig, DEFAULT_DIALECT, DEFAULT_PAGE_STATEMENT_PATTERN};

/// Rewrites paginated statements for the configured dialect
#[derive(Debug, Clone)]
pub struct PageInterceptor {
    rewriter: PaginationRewriter,
    page_statement: Regex,
    default_page_size: i64,
}

impl PageInterceptor {
    /// Build an interceptor from pager configuration.
    ///
    /// A missing dialect falls back to `mysql` and a missing statement pattern
    /// to `.*Page$`, each with a warning.
    pub fn new(config: &PagerConfig) -> Result<Self, SqlPagerError> {
        config.validate()?;

        let dialect = match config.configured_dialect() {
            Some(name) => Dialect::parse(name),
            None => {
                tracing::warn!("Property dialect is not set, using default '{}'", DEFAULT_DIALECT);
                Dialect::parse(DEFAULT_DIALECT)
            }
        };
        if !dialect.is_supported() {
            match Dialect::near_match(dialect.as_str()) {
                Some(known) => tracing::warn!(
                    "Dialect '{}' is not supported (did you mean '{}'?), statements will not be paginated",
                    dialect,
                    known
                ),
                None => tracing::warn!(
                    "Dialect '{}' is not supported, statements will not be paginated",
                    dialect
                ),
            }
        }

        let pattern = match config.configured_page_statement_pattern() {
            Some(pattern) => pattern,
            None => {
                tracing::warn!(
                    "Property page_statement_pattern is not set, using default '{}'",
                    DEFAULT_PAGE_STATEMENT_PATTERN
                );
                DEFAULT_PAGE_STATEMENT_PATTERN
            }
        };
        // Statement ids must match as a whole
        let page_statement = Regex::new(&format!("^(?:{})$", pattern))?;

        let mut rewriter = PaginationRewriter::new(dialect);
        if let Some(enabled) = config.snake_case_order_fields {
            rewriter = rewriter.with_snake_case_order_fields(enabled);
        }

        Ok(Self {
            rewriter,
            page_statement,
            default_page_size: config.default_page_size,
        })
    }

    pub fn from_app_config(config: &AppConfig) -> Result<Self, SqlPagerError> {
        Self::new(&config.pager)
    }

    /// Build an interceptor from `SQLPAGER_CONFIG` or `./sqlpager.toml`
    pub fn load() -> Result<Self, SqlPagerError> {
        let config = AppConfig::load()?;
        Self::from_app_config(&config)
    }

    pub fn dialect(&self) -> &Dialect {
        self.rewriter.dialect()
    }

    pub fn rewriter(&self) -> &PaginationRewriter {
        &self.rewriter
    }

    /// Whether the statement with this id gets physical pagination
    pub fn is_paginated(&self, statement_id: &str) -> bool {
        self.page_statement.is_match(statement_id)
    }

    /// Page request for `current_page` using the configured default size
    pub fn page_request(&self, current_page: i64) -> PageRequest {
        PageRequest::new(current_page, self.default_page_size)
    }

    /// Paginate `statement` in place when its id matches.
    ///
    /// Returns `None` for statements that are not paginated; those are left
    /// untouched and never counted.
    pub async fn intercept<E>(
        &self,
        statement: &mut PagedStatement,
        executor: &E,
    ) -> Result<Option<PageResult>, SqlPagerError>
    where
        E: CountExecutor + ?Sized,
    {
        if !self.is_paginated(&statement.id) {
            crate::trace_log!("[INTERCEPT] {} is not paginated", statement.id);
            return Ok(None);
        }

        let page = statement
            .page
            .ok_or_else(|| PagerError::missing_page(statement.id.as_str()))?;

        crate::debug_log!("[INTERCEPT] {} page: {:?}", statement.id, page);

        let rewritten = self
            .rewriter
            .rewrite(&statement.sql, Some(page), statement.order_by.as_deref(), executor)
            .await?;

        statement.sql = rewritten.sql;
        statement.page = Some(rewritten.page);
        statement.page_result = Some(rewritten.result);
        statement.row_bounds = RowBounds::unbounded();

        Ok(Some(rewritten.result))
    }

    /// Paginate `statement`, counting on `pool` with the statement's own parameters
    pub async fn intercept_mysql(
        &self,
        statement: &mut PagedStatement,
        pool: &MySqlPool,
    ) -> Result<Option<PageResult>, SqlPagerError> {
        let params = statement.params.clone();
        let executor = MySqlCountExecutor::new(pool, &params);
        self.intercept(statement, &executor).await
    }
}
