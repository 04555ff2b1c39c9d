//! SQL dialect selection
//!
//! A dialect is a plain selector carried with each call. Unknown names are
//! kept verbatim so they can be reported, but they disable pagination.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::rewrite::sql_generation::{
    MySqlDialect, OracleDialect, PageDialect, PassthroughDialect, SqlServerDialect,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dialect {
    #[default]
    MySql,
    Oracle,
    SqlServer,
    Unsupported(String),
}

impl Dialect {
    /// Parse a dialect name. Only the exact lower-case names are recognized.
    pub fn parse(name: &str) -> Self {
        match name {
            "mysql" => Dialect::MySql,
            "oracle" => Dialect::Oracle,
            "sqlserver" => Dialect::SqlServer,
            _ => Dialect::Unsupported(name.to_string()),
        }
    }

    /// Known dialect this name would select if it were spelled exactly
    pub fn near_match(name: &str) -> Option<Self> {
        match Self::parse(&name.trim().to_ascii_lowercase()) {
            Dialect::Unsupported(_) => None,
            dialect => Some(dialect),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Oracle => "oracle",
            Dialect::SqlServer => "sqlserver",
            Dialect::Unsupported(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Dialect::Unsupported(_))
    }

    /// Whether order fields are folded from camelCase to snake_case by default
    pub fn folds_order_fields(&self) -> bool {
        !matches!(self, Dialect::SqlServer)
    }

    /// Page query strategy for this dialect
    pub fn strategy(&self) -> &'static dyn PageDialect {
        match self {
            Dialect::MySql => &MySqlDialect,
            Dialect::Oracle => &OracleDialect,
            Dialect::SqlServer => &SqlServerDialect,
            Dialect::Unsupported(_) => &PassthroughDialect,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Dialect {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for Dialect {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Dialect> for String {
    fn from(value: Dialect) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::pagination::PageRequest;

    #[test]
    fn test_parse_known_dialects() {
        assert_eq!(Dialect::parse("mysql"), Dialect::MySql);
        assert_eq!(Dialect::parse("oracle"), Dialect::Oracle);
        assert_eq!(Dialect::parse("sqlserver"), Dialect::SqlServer);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            Dialect::parse("ORACLE"),
            Dialect::Unsupported("ORACLE".to_string())
        );
        assert_eq!(
            Dialect::parse(" sqlserver "),
            Dialect::Unsupported(" sqlserver ".to_string())
        );
        assert!(!Dialect::parse("MySQL").is_supported());
    }

    #[test]
    fn test_miscased_name_is_not_paginated() {
        let page = PageRequest::new(2, 10);
        let sql = Dialect::parse("ORACLE")
            .strategy()
            .build_page_query("select * from t", &page, None)
            .unwrap();
        assert_eq!(sql, "select * from t");
    }

    #[test]
    fn test_near_match() {
        assert_eq!(Dialect::near_match(" Oracle "), Some(Dialect::Oracle));
        assert_eq!(Dialect::near_match("MYSQL"), Some(Dialect::MySql));
        assert_eq!(Dialect::near_match("db2"), None);
    }

    #[test]
    fn test_parse_unknown_dialect_is_kept() {
        let dialect = Dialect::parse("db2");
        assert_eq!(dialect, Dialect::Unsupported("db2".to_string()));
        assert!(!dialect.is_supported());
        assert_eq!(dialect.to_string(), "db2");
    }

    #[test]
    fn test_folding_default() {
        assert!(Dialect::MySql.folds_order_fields());
        assert!(Dialect::Oracle.folds_order_fields());
        assert!(!Dialect::SqlServer.folds_order_fields());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Dialect::SqlServer).unwrap();
        assert_eq!(json, "\"sqlserver\"");

        let dialect: Dialect = serde_json::from_str("\"mysql\"").unwrap();
        assert_eq!(dialect, Dialect::MySql);

        let dialect: Dialect = serde_json::from_str("\"MySQL\"").unwrap();
        assert_eq!(dialect, Dialect::Unsupported("MySQL".to_string()));
    }
}
