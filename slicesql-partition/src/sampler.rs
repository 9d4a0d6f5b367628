//! Boundary sampling: which row numbers to fetch, and how to clean up what comes back.

use rustc_hash::FxHashSet;
use slicesql_result::{Error, Result};
use slicesql_types::{KeyTuple, same_tuple};

/// Row numbers (1-based, under `ORDER BY <primary key>`) whose keys become slice boundaries.
///
/// Samples `1 + i * step` for `i` in `0..=desired_slices`, where
/// `step = ceil(total_rows / desired_slices)`, clamping each to `total_rows` and always
/// including `total_rows` itself. The result is ascending and free of duplicates. An empty
/// table yields no row numbers.
pub fn plan_row_numbers(total_rows: u64, desired_slices: usize) -> Result<Vec<u64>> {
    if desired_slices == 0 {
        return Err(Error::InvalidArgumentError(
            "desired slice count must be at least 1".into(),
        ));
    }
    if total_rows == 0 {
        return Ok(Vec::new());
    }

    let slices = u64::try_from(desired_slices).unwrap_or(u64::MAX);
    let step = total_rows.div_ceil(slices).max(1);

    // Sampling stops at the last row, so work is bounded by the row count.
    let capacity = slices.min(total_rows).min(1024) as usize + 2;
    let mut seen = FxHashSet::default();
    let mut row_numbers = Vec::with_capacity(capacity);
    for i in 0..=slices {
        let rn = i
            .checked_mul(step)
            .and_then(|offset| offset.checked_add(1))
            .map_or(total_rows, |rn| rn.min(total_rows));
        if seen.insert(rn) {
            row_numbers.push(rn);
        }
        if rn >= total_rows {
            break;
        }
    }
    if seen.insert(total_rows) {
        row_numbers.push(total_rows);
    }
    row_numbers.sort_unstable();

    tracing::trace!(
        "[SAMPLER] count={} step={} rns={:?}",
        total_rows,
        step,
        row_numbers
    );
    Ok(row_numbers)
}

/// Collapse immediately-adjacent equal tuples into one.
///
/// When a single tuple remains it is duplicated, so the whole table still forms one closed
/// interval `[k, k]`. Empty input stays empty.
pub fn dedupe_boundaries(tuples: Vec<KeyTuple>) -> Vec<KeyTuple> {
    let mut deduped: Vec<KeyTuple> = Vec::with_capacity(tuples.len());
    for tuple in tuples {
        if deduped.last().is_some_and(|prev| same_tuple(prev, &tuple)) {
            continue;
        }
        deduped.push(tuple);
    }
    if deduped.len() == 1 {
        let only = deduped[0].clone();
        deduped.push(only);
    }
    deduped
}
