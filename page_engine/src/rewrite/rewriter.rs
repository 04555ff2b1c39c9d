//! Pagination rewriter
//!
//! Ties the pieces together: count the base query through the caller's
//! executor, derive the page totals, normalize the ordering and build the
//! dialect's page query.

use serde::Serialize;

use crate::dialect::Dialect;
use crate::errors::PagerError;
use crate::executor::CountExecutor;
use crate::rewrite::ordering::OrderByNormalizer;
use crate::rewrite::pagination::{PageCalculator, PageRequest, PageResult};

/// Page query plus the paging metadata it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewrittenQuery {
    pub sql: String,
    pub page: PageRequest,
    pub result: PageResult,
}

#[derive(Debug, Clone)]
pub struct PaginationRewriter {
    dialect: Dialect,
    normalizer: OrderByNormalizer,
}

impl PaginationRewriter {
    pub fn new(dialect: Dialect) -> Self {
        let normalizer = OrderByNormalizer::for_dialect(&dialect);
        Self {
            dialect,
            normalizer,
        }
    }

    /// Override camelCase folding of order fields for this dialect
    pub fn with_snake_case_order_fields(mut self, enabled: bool) -> Self {
        self.normalizer = self.normalizer.with_snake_case(enabled);
        self
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn normalizer(&self) -> &OrderByNormalizer {
        &self.normalizer
    }

    pub fn count_query(&self, sql: &str) -> String {
        self.dialect.strategy().build_count_query(sql)
    }

    /// Clause for an optional order spec; blank specs produce no clause
    pub fn order_clause(&self, order_spec: Option<&str>) -> Option<String> {
        order_spec
            .filter(|spec| !spec.trim().is_empty())
            .and_then(|spec| self.normalizer.normalize(spec))
    }

    /// Build the page query for `sql` once the total row count is known
    pub fn page_query(
        &self,
        sql: &str,
        total_count: i64,
        mut page: PageRequest,
        order_spec: Option<&str>,
    ) -> Result<RewrittenQuery, PagerError> {
        page.validate()?;
        let result = PageCalculator::compute(total_count, &mut page)?;

        if !self.dialect.is_supported() {
            tracing::warn!(
                "Dialect '{}' is not supported, statement is not paginated",
                self.dialect
            );
        }

        let strategy = self.dialect.strategy();
        let order_by = self.order_clause(order_spec);
        let page_sql = strategy.build_page_query(sql, &page, order_by.as_deref())?;

        tracing::debug!("[PAGE] {} SQL: {}", strategy.name(), page_sql);

        Ok(RewrittenQuery {
            sql: page_sql,
            page,
            result,
        })
    }

    /// Count `sql` through `executor`, then build its page query.
    ///
    /// A missing page request fails before the executor is called; a failed
    /// count aborts the rewrite.
    pub async fn rewrite<E>(
        &self,
        sql: &str,
        page: Option<PageRequest>,
        order_spec: Option<&str>,
        executor: &E,
    ) -> Result<RewrittenQuery, PagerError>
    where
        E: CountExecutor + ?Sized,
    {
        let page = page.ok_or_else(|| PagerError::missing_page(sql))?;
        page.validate()?;

        let count_sql = self.count_query(sql);
        tracing::debug!("[COUNT] SQL: {}", count_sql);

        let total_count = executor.count(&count_sql).await.map_err(|e| {
            tracing::error!("[COUNT] failed: {}", e);
            PagerError::count_execution(&count_sql, e)
        })?;

        self.page_query(sql, total_count, page, order_spec)
    }
}
