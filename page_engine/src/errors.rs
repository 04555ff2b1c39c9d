use thiserror::Error;

/// Error raised by a count executor while running the count query
pub type CountError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("Missing page request for paginated statement: {statement}")]
    MissingPageRequest { statement: String },

    #[error("Invalid page size: {0} (expected a positive size or -1 for all rows)")]
    InvalidPageSize(i64),

    #[error("Invalid current page: {0} (pages start at 1)")]
    InvalidCurrentPage(i64),

    #[error("Count query failed: {sql}: {source}")]
    CountExecution {
        sql: String,
        #[source]
        source: CountError,
    },

    #[error("Count query returned a negative row count: {0}")]
    NegativeCount(i64),

    #[error("Page window overflows for page {current_page} with size {page_size}")]
    PageWindowOverflow { current_page: i64, page_size: i64 },
}

impl PagerError {
    pub fn missing_page(statement: impl Into<String>) -> Self {
        Self::MissingPageRequest {
            statement: statement.into(),
        }
    }

    pub fn count_execution(sql: &str, source: impl Into<CountError>) -> Self {
        Self::CountExecution {
            sql: sql.to_string(),
            source: source.into(),
        }
    }
}
