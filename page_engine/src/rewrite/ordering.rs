//! Order spec parsing and ORDER BY normalization
//!
//! An order spec is a comma-separated list of field names, each optionally
//! prefixed with `-` for descending order: `-createTime,userName`.

use crate::dialect::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Single field token of an order spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderField {
    pub field: String,
    pub order: SortOrder,
}

impl OrderField {
    /// Parse one token; a leading `-` selects descending order
    pub fn parse(token: &str) -> Self {
        match token.strip_prefix('-') {
            Some(field) => Self {
                field: field.to_string(),
                order: SortOrder::Desc,
            },
            None => Self {
                field: token.to_string(),
                order: SortOrder::Asc,
            },
        }
    }
}

/// Parsed order spec
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSpec {
    pub fields: Vec<OrderField>,
}

impl OrderSpec {
    /// Split on commas, trim tokens and drop empty ones
    pub fn parse(spec: &str) -> Self {
        let fields = spec
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(OrderField::parse)
            .collect();

        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fold camelCase into snake_case: every ASCII uppercase letter becomes `_`
/// followed by its lowercase form.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            result.push('_');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Builds `order by` clauses from order specs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderByNormalizer {
    snake_case_fields: bool,
}

impl OrderByNormalizer {
    pub fn new(snake_case_fields: bool) -> Self {
        Self { snake_case_fields }
    }

    /// Normalizer with the dialect's default field folding
    pub fn for_dialect(dialect: &Dialect) -> Self {
        Self::new(dialect.folds_order_fields())
    }

    /// Override field folding regardless of dialect
    pub fn with_snake_case(mut self, enabled: bool) -> Self {
        self.snake_case_fields = enabled;
        self
    }

    pub fn snake_case_fields(&self) -> bool {
        self.snake_case_fields
    }

    /// Build the clause for `spec`, or `None` when it holds no usable field
    pub fn normalize(&self, spec: &str) -> Option<String> {
        let spec = OrderSpec::parse(spec);
        if spec.is_empty() {
            return None;
        }

        let items: Vec<String> = spec
            .fields
            .iter()
            .map(|item| {
                let field = if self.snake_case_fields {
                    to_snake_case(&item.field)
                } else {
                    item.field.clone()
                };
                format!("{} {}", field, item.order.to_sql())
            })
            .collect();

        Some(format!("order by {}", items.join(", ")))
    }
}

/// Normalize `spec` with the default folding of `dialect`
pub fn normalize(spec: &str, dialect: &Dialect) -> Option<String> {
    OrderByNormalizer::for_dialect(dialect).normalize(spec)
}
