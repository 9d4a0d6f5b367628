//! Predicate AST for slice `WHERE` clauses.
#![forbid(unsafe_code)]

use slicesql_types::Literal;

/// Comparison operators a slice predicate may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// Single comparison of a key column against a literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub op: CompareOp,
    pub value: Literal,
}

impl Filter {
    pub fn new(column: impl Into<String>, op: CompareOp, value: Literal) -> Self {
        Self {
            column: column.into(),
            op,
            value,
        }
    }

    #[inline]
    pub fn equals(column: &str, value: &Literal) -> Self {
        Self::new(column, CompareOp::Eq, value.clone())
    }

    #[inline]
    pub fn less_than(column: &str, value: &Literal) -> Self {
        Self::new(column, CompareOp::Lt, value.clone())
    }

    #[inline]
    pub fn at_most(column: &str, value: &Literal) -> Self {
        Self::new(column, CompareOp::LtEq, value.clone())
    }

    #[inline]
    pub fn greater_than(column: &str, value: &Literal) -> Self {
        Self::new(column, CompareOp::Gt, value.clone())
    }

    #[inline]
    pub fn at_least(column: &str, value: &Literal) -> Self {
        Self::new(column, CompareOp::GtEq, value.clone())
    }
}

/// A pure-AND conjunction of filters selecting one slice segment.
///
/// Slices never need `OR`: a lexicographic interval is expressed as several disjoint
/// conjunctions instead, each emitted as its own statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlicePredicate {
    filters: Vec<Filter>,
}

impl SlicePredicate {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    /// Build a predicate from a leading filter followed by an existing conjunction.
    pub fn prefixed(head: Filter, tail: SlicePredicate) -> Self {
        let mut filters = Vec::with_capacity(tail.filters.len() + 1);
        filters.push(head);
        filters.extend(tail.filters);
        Self { filters }
    }

    #[inline]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
