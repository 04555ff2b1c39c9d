//! Dialect-specific count and page query generation
//!
//! Paging numbers are rendered as decimal literals inside the generated SQL.
//! They come from paging controls, not free-form input; callers paging on
//! untrusted input must validate the request first.

use crate::errors::PagerError;
use crate::rewrite::pagination::PageRequest;

/// Count query wrapper shared by every dialect.
///
/// Placeholders in `sql` are kept verbatim, so the count query binds the
/// same parameters as the base query.
pub fn build_count_query(sql: &str) -> String {
    let mut count_sql = String::with_capacity(sql.len() + 40);
    count_sql.push_str("select count(0) from (");
    count_sql.push_str(sql);
    count_sql.push_str(") as total");
    count_sql
}

/// Page query strategy for one database family
pub trait PageDialect: Send + Sync {
    fn name(&self) -> &'static str;

    fn build_count_query(&self, sql: &str) -> String {
        build_count_query(sql)
    }

    /// Limit `sql` to the rows of `page`.
    ///
    /// `order_by` is a complete clause such as `order by id asc`. `page` must
    /// already have its fetch-all size resolved.
    fn build_page_query(
        &self,
        sql: &str,
        page: &PageRequest,
        order_by: Option<&str>,
    ) -> Result<String, PagerError>;
}

/// Offset of a resolved page request
fn page_offset(page: &PageRequest) -> Result<i64, PagerError> {
    if page.current_page < 1 {
        return Err(PagerError::InvalidCurrentPage(page.current_page));
    }
    if page.page_size < 0 {
        return Err(PagerError::InvalidPageSize(page.page_size));
    }
    page.offset()
}

fn push_order_by(sql: &mut String, order_by: Option<&str>) {
    if let Some(clause) = order_by {
        sql.push(' ');
        sql.push_str(clause);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl PageDialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn build_page_query(
        &self,
        sql: &str,
        page: &PageRequest,
        order_by: Option<&str>,
    ) -> Result<String, PagerError> {
        let offset = page_offset(page)?;

        let mut page_sql = String::with_capacity(sql.len() + 64);
        page_sql.push_str(sql);
        push_order_by(&mut page_sql, order_by);
        page_sql.push_str(&format!(" limit {},{}", offset, page.page_size));
        Ok(page_sql)
    }
}

/// OFFSET/FETCH paging; SQL Server rejects it without an ORDER BY, so
/// `order by 1` stands in when no ordering is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerDialect;

impl PageDialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn build_page_query(
        &self,
        sql: &str,
        page: &PageRequest,
        order_by: Option<&str>,
    ) -> Result<String, PagerError> {
        let offset = page_offset(page)?;

        let mut page_sql = String::with_capacity(sql.len() + 80);
        page_sql.push_str(sql);
        push_order_by(&mut page_sql, Some(order_by.unwrap_or("order by 1")));
        page_sql.push_str(&format!(
            " offset {} rows fetch next {} rows only",
            offset, page.page_size
        ));
        Ok(page_sql)
    }
}

/// ROWNUM window; the ordering goes inside the innermost subquery so rows
/// are numbered after sorting.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl PageDialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn build_page_query(
        &self,
        sql: &str,
        page: &PageRequest,
        order_by: Option<&str>,
    ) -> Result<String, PagerError> {
        let offset = page_offset(page)?;
        let end_row = page.end_row()?;

        let mut page_sql = String::with_capacity(sql.len() + 128);
        page_sql.push_str("select * from (select temp.*, rownum row_id from (");
        page_sql.push_str(sql);
        push_order_by(&mut page_sql, order_by);
        page_sql.push_str(&format!(
            ") temp where rownum <= {}) where row_id > {}",
            end_row, offset
        ));
        Ok(page_sql)
    }
}

/// Fallback for unrecognized dialects: the SQL is returned unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughDialect;

impl PageDialect for PassthroughDialect {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn build_page_query(
        &self,
        sql: &str,
        _page: &PageRequest,
        _order_by: Option<&str>,
    ) -> Result<String, PagerError> {
        Ok(sql.to_string())
    }
}
