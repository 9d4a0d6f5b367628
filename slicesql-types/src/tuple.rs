//! Primary-key tuples and their lexicographic ordering.

use std::cmp::Ordering;

use crate::literal::Literal;

/// One sampled row's primary-key value, one [`Literal`] per key column.
pub type KeyTuple = Vec<Literal>;

/// Compare two tuples column by column, matching multi-column `ORDER BY`.
///
/// Returns `None` as soon as a column pair is incomparable. Tuples of different length
/// compare on their common prefix, then by length.
pub fn compare_tuples(left: &[Literal], right: &[Literal]) -> Option<Ordering> {
    for (l, r) in left.iter().zip(right) {
        match l.compare(r)? {
            Ordering::Equal => continue,
            other => return Some(other),
        }
    }
    Some(left.len().cmp(&right.len()))
}

/// Element-wise key equality across the full column list.
pub fn same_tuple(left: &[Literal], right: &[Literal]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| l.same_key(r))
}

/// Index of the first column whose values cannot be compared, if any.
pub fn first_incomparable(left: &[Literal], right: &[Literal]) -> Option<usize> {
    left.iter()
        .zip(right)
        .position(|(l, r)| l.compare(r).is_none())
}
