//! Count query execution
//!
//! The engine never touches a database itself. The count query is handed to a
//! `CountExecutor`, which must run it with the bound parameters of the base
//! statement and return the single integer it produces.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::{MySql, MySqlArguments, MySqlPool};
use sqlx::query::QueryScalar;

use crate::errors::CountError;

#[async_trait]
pub trait CountExecutor: Send + Sync {
    /// Run `sql` and return the row count it selects
    async fn count(&self, sql: &str) -> Result<i64, CountError>;
}

/// Adapts a plain function into a count executor
pub struct FnCountExecutor<F> {
    f: F,
}

impl<F> FnCountExecutor<F>
where
    F: Fn(&str) -> Result<i64, CountError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> CountExecutor for FnCountExecutor<F>
where
    F: Fn(&str) -> Result<i64, CountError> + Send + Sync,
{
    async fn count(&self, sql: &str) -> Result<i64, CountError> {
        (self.f)(sql)
    }
}

/// Runs count queries on a MySQL pool, binding the base statement's
/// parameters in order
#[derive(Debug, Clone, Copy)]
pub struct MySqlCountExecutor<'a> {
    pool: &'a MySqlPool,
    params: &'a [Value],
}

impl<'a> MySqlCountExecutor<'a> {
    pub fn new(pool: &'a MySqlPool, params: &'a [Value]) -> Self {
        Self { pool, params }
    }
}

#[async_trait]
impl<'a> CountExecutor for MySqlCountExecutor<'a> {
    async fn count(&self, sql: &str) -> Result<i64, CountError> {
        let total = count_query(sql, self.params).fetch_one(self.pool).await?;
        Ok(total)
    }
}

/// Scalar count query with `params` bound in order
fn count_query<'q>(
    sql: &'q str,
    params: &[Value],
) -> QueryScalar<'q, MySql, i64, MySqlArguments> {
    params
        .iter()
        .map(BoundParam::from)
        .fold(sqlx::query_scalar::<_, i64>(sql), |query, param| param.bind(query))
}

/// SQL value a JSON parameter is sent as
#[derive(Debug, Clone, PartialEq)]
enum BoundParam {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    // Arrays and objects are sent as JSON documents
    Json(Value),
}

impl From<&Value> for BoundParam {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => BoundParam::Null,
            Value::Bool(flag) => BoundParam::Bool(*flag),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    BoundParam::Int(int)
                } else if let Some(uint) = number.as_u64() {
                    BoundParam::UInt(uint)
                } else {
                    number.as_f64().map_or(BoundParam::Null, BoundParam::Float)
                }
            }
            Value::String(text) => BoundParam::Text(text.clone()),
            other => BoundParam::Json(other.clone()),
        }
    }
}

impl BoundParam {
    fn bind<'q>(
        self,
        query: QueryScalar<'q, MySql, i64, MySqlArguments>,
    ) -> QueryScalar<'q, MySql, i64, MySqlArguments> {
        match self {
            BoundParam::Null => query.bind(None::<String>),
            BoundParam::Bool(flag) => query.bind(flag),
            BoundParam::Int(int) => query.bind(int),
            BoundParam::UInt(uint) => query.bind(uint),
            BoundParam::Float(float) => query.bind(float),
            BoundParam::Text(text) => query.bind(text),
            BoundParam::Json(document) => query.bind(sqlx::types::Json(document)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::{Arguments, Execute};

    #[test]
    fn test_json_values_map_to_sql_values() {
        let params = [
            Value::Null,
            json!(true),
            json!(-7),
            json!(u64::MAX),
            json!(2.5),
            json!("shipped"),
            json!([1, 2]),
            json!({"tier": "gold"}),
        ];

        let bound: Vec<BoundParam> = params.iter().map(BoundParam::from).collect();

        assert_eq!(
            bound,
            vec![
                BoundParam::Null,
                BoundParam::Bool(true),
                BoundParam::Int(-7),
                BoundParam::UInt(u64::MAX),
                BoundParam::Float(2.5),
                BoundParam::Text("shipped".to_string()),
                BoundParam::Json(json!([1, 2])),
                BoundParam::Json(json!({"tier": "gold"})),
            ]
        );
    }

    #[test]
    fn test_count_query_binds_every_param() {
        let params = [json!("shipped"), json!(18), json!(false), Value::Null];
        let sql = "select count(0) from (select * from orders \
                   where status = ? and age > ? and archived = ? and note <=> ?) as total";

        let mut query = count_query(sql, &params);
        assert_eq!(query.sql(), sql);

        let arguments = query
            .take_arguments()
            .expect("arguments encode")
            .expect("arguments are bound");
        assert_eq!(arguments.len(), params.len());
    }

    #[test]
    fn test_count_query_without_params() {
        let mut query = count_query("select count(0) from (select 1) as total", &[]);
        let bound = query.take_arguments().expect("arguments encode");
        assert_eq!(bound.map_or(0, |arguments| arguments.len()), 0);
    }
}
