//! Single-column primary keys: one range predicate per adjacent boundary pair.

use slicesql_expr::{Filter, SlicePredicate};
use slicesql_result::{Error, Result};
use slicesql_types::Literal;

/// Turn deduplicated, ascending boundary values into range predicates over `column`.
///
/// Every pair but the last is half-open (`col >= lo AND col < hi`); the last is closed
/// (`col >= lo AND col <= hi`) so the maximum key lands in exactly one slice.
pub fn partition_single(column: &str, boundaries: &[Literal]) -> Result<Vec<SlicePredicate>> {
    if boundaries.len() < 2 {
        return Err(Error::InvalidArgumentError(format!(
            "single-column partitioning needs at least two boundaries, got {}",
            boundaries.len()
        )));
    }
    Ok(single_ranges(column, boundaries))
}

pub(crate) fn single_ranges(column: &str, boundaries: &[Literal]) -> Vec<SlicePredicate> {
    let last = boundaries.len().saturating_sub(2);
    boundaries
        .windows(2)
        .enumerate()
        .map(|(idx, pair)| column_range(column, &pair[0], &pair[1], idx == last))
        .collect()
}

/// `column >= low AND column < high`, or `<= high` when `inclusive_upper`.
pub(crate) fn column_range(
    column: &str,
    low: &Literal,
    high: &Literal,
    inclusive_upper: bool,
) -> SlicePredicate {
    let upper = if inclusive_upper {
        Filter::at_most(column, high)
    } else {
        Filter::less_than(column, high)
    };
    SlicePredicate::new(vec![Filter::at_least(column, low), upper])
}
