//! In-memory evaluation of predicates against key tuples.
//!
//! Evaluation follows SQL three-valued logic collapsed to `WHERE` semantics: a comparison
//! against `NULL` (or between incomparable kinds) is unknown, and unknown rows are not
//! selected.

use std::cmp::Ordering;

use slicesql_types::Literal;

use crate::{CompareOp, Filter, SlicePredicate};

impl CompareOp {
    /// True when `ordering` (of `value` relative to the literal) satisfies the operator.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::LtEq => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::GtEq => ordering != Ordering::Less,
        }
    }
}

impl Filter {
    pub fn matches(&self, value: &Literal) -> bool {
        value
            .compare(&self.value)
            .is_some_and(|ordering| self.op.accepts(ordering))
    }
}

impl SlicePredicate {
    /// Evaluate against a row whose values are laid out in `columns` order.
    ///
    /// A filter naming a column absent from `columns` never matches.
    pub fn matches(&self, columns: &[String], row: &[Literal]) -> bool {
        self.filters().iter().all(|filter| {
            columns
                .iter()
                .position(|c| *c == filter.column)
                .and_then(|idx| row.get(idx))
                .is_some_and(|value| filter.matches(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols() -> Vec<String> {
        vec!["a".to_string(), "b".to_string()]
    }

    #[test]
    fn conjunction_requires_every_filter() {
        let pred = SlicePredicate::new(vec![
            Filter::equals("a", &Literal::from(1i64)),
            Filter::at_least("b", &Literal::from(5i64)),
        ]);
        let row = |a: i64, b: i64| vec![Literal::from(a), Literal::from(b)];
        assert!(pred.matches(&cols(), &row(1, 5)));
        assert!(pred.matches(&cols(), &row(1, 9)));
        assert!(!pred.matches(&cols(), &row(1, 4)));
        assert!(!pred.matches(&cols(), &row(2, 9)));
    }

    #[test]
    fn null_values_are_never_selected() {
        let pred = SlicePredicate::new(vec![Filter::at_most("a", &Literal::from(10i64))]);
        assert!(!pred.matches(&cols(), &[Literal::Null, Literal::from(0i64)]));
    }

    #[test]
    fn unknown_column_never_matches() {
        let pred = SlicePredicate::new(vec![Filter::equals("zz", &Literal::from(1i64))]);
        assert!(!pred.matches(&cols(), &[Literal::from(1i64), Literal::from(1i64)]));
    }
}
