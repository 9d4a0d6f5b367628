//! Composite primary keys: disjoint conjunctions covering a lexicographic interval.
//!
//! A lexicographic range over several columns cannot be written as one flat conjunction.
//! Instead the interval `[left, right)` is cut into bands on the leading column:
//!
//! ```text
//! head = left[0]  AND tail >= left[1..]           (lower band, via lower closure)
//! head > left[0]  AND head < right[0]             (middle band, tail unconstrained)
//! head = right[0] AND tail <  right[1..]          (upper band, via upper closure)
//! ```
//!
//! The bands are disjoint on the head column alone, and each closure repeats the same
//! banding one column further down, so the emitted predicates never overlap. When both
//! boundaries share a head value the whole interval lives inside that value and the builder
//! recurses on the tail instead.

use std::cmp::Ordering;

use slicesql_expr::{Filter, SlicePredicate};
use slicesql_result::{Error, Result};
use slicesql_types::{Literal, first_incomparable};

use crate::single::column_range;

/// Predicates covering `[left, right)` over `columns`, or `[left, right]` when `is_last`.
///
/// `left` and `right` are adjacent boundary tuples with `left < right` lexicographically;
/// they may be equal only for the final interval.
pub fn build_composite(
    columns: &[String],
    left: &[Literal],
    right: &[Literal],
    is_last: bool,
) -> Result<Vec<SlicePredicate>> {
    if columns.is_empty() {
        return Err(Error::EmptyPrimaryKey);
    }
    for (index, tuple) in [left, right].into_iter().enumerate() {
        if tuple.len() != columns.len() {
            return Err(Error::BoundaryArity {
                index,
                expected: columns.len(),
                actual: tuple.len(),
            });
        }
    }
    check_pair(columns, left, right, 0, is_last)?;
    Ok(composite_range(columns, left, right, is_last))
}

/// Validate that the pair at `index` is ordered and non-empty.
///
/// `NULL`s and mismatched kinds are rejected in every column. Otherwise values are compared
/// column by column up to the first column where they differ. Text order depends on the
/// database collation, which is unknown here, so a text column that decides the pair is
/// taken in the order the source returned it.
pub(crate) fn check_pair(
    columns: &[String],
    left: &[Literal],
    right: &[Literal],
    index: usize,
    is_last: bool,
) -> Result<()> {
    if let Some(col) = first_incomparable(left, right) {
        return Err(Error::IncomparableBoundary {
            index,
            column: columns.get(col).cloned().unwrap_or_default(),
        });
    }
    for (low, high) in left.iter().zip(right) {
        match low.compare(high).unwrap_or(Ordering::Equal) {
            Ordering::Equal => continue,
            _ if low.is_text() => return Ok(()),
            Ordering::Greater => return Err(Error::UnorderedBoundaries { index }),
            Ordering::Less => return Ok(()),
        }
    }
    if is_last {
        Ok(())
    } else {
        Err(Error::EmptyInterval { index })
    }
}

/// Recursive core of [`build_composite`]; inputs are already validated.
pub(crate) fn composite_range(
    columns: &[String],
    left: &[Literal],
    right: &[Literal],
    is_last: bool,
) -> Vec<SlicePredicate> {
    let Some((head, tail)) = columns.split_first() else {
        return vec![SlicePredicate::default()];
    };
    if tail.is_empty() {
        return vec![column_range(head, &left[0], &right[0], is_last)];
    }

    if left[0].same_key(&right[0]) {
        let fixed = Filter::equals(head, &left[0]);
        return composite_range(tail, &left[1..], &right[1..], is_last)
            .into_iter()
            .map(|segment| SlicePredicate::prefixed(fixed.clone(), segment))
            .collect();
    }

    let mut predicates = Vec::new();

    let low_head = Filter::equals(head, &left[0]);
    for segment in lower_closure(tail, &left[1..]) {
        predicates.push(SlicePredicate::prefixed(low_head.clone(), segment));
    }

    predicates.push(SlicePredicate::new(vec![
        Filter::greater_than(head, &left[0]),
        Filter::less_than(head, &right[0]),
    ]));

    let high_head = Filter::equals(head, &right[0]);
    for segment in upper_closure(tail, &right[1..], is_last) {
        predicates.push(SlicePredicate::prefixed(high_head.clone(), segment));
    }

    predicates
}

/// Disjoint segments whose union is `columns >= bound` lexicographically.
pub(crate) fn lower_closure(columns: &[String], bound: &[Literal]) -> Vec<SlicePredicate> {
    match columns {
        [] => vec![SlicePredicate::default()],
        [column] => vec![SlicePredicate::new(vec![Filter::at_least(
            column, &bound[0],
        )])],
        [head, rest @ ..] => {
            let fixed = Filter::equals(head, &bound[0]);
            let mut segments: Vec<SlicePredicate> = lower_closure(rest, &bound[1..])
                .into_iter()
                .map(|segment| SlicePredicate::prefixed(fixed.clone(), segment))
                .collect();
            segments.push(SlicePredicate::new(vec![Filter::greater_than(
                head, &bound[0],
            )]));
            segments
        }
    }
}

/// Disjoint segments whose union is `columns <= bound` (or `< bound` unless `inclusive`).
///
/// The inclusivity flag only ever reaches the final column's comparison.
pub(crate) fn upper_closure(
    columns: &[String],
    bound: &[Literal],
    inclusive: bool,
) -> Vec<SlicePredicate> {
    match columns {
        [] => vec![SlicePredicate::default()],
        [column] => {
            let filter = if inclusive {
                Filter::at_most(column, &bound[0])
            } else {
                Filter::less_than(column, &bound[0])
            };
            vec![SlicePredicate::new(vec![filter])]
        }
        [head, rest @ ..] => {
            let fixed = Filter::equals(head, &bound[0]);
            let mut segments = vec![SlicePredicate::new(vec![Filter::less_than(
                head, &bound[0],
            )])];
            segments.extend(
                upper_closure(rest, &bound[1..], inclusive)
                    .into_iter()
                    .map(|segment| SlicePredicate::prefixed(fixed.clone(), segment)),
            );
            segments
        }
    }
}
