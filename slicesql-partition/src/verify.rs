//! In-memory check that a set of slices partitions a key table exactly.

use rustc_hash::FxHashMap;
use slicesql_expr::SlicePredicate;

use crate::memory::MemoryKeySource;

/// Counts gathered by [`verify_slices`], mirroring what the database-side checks report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SliceVerification {
    /// Rows in the table.
    pub total: usize,
    /// Rows selected by each slice, in slice order.
    pub slice_counts: Vec<usize>,
    pub sum_slices: usize,
    /// Distinct rows selected by any slice.
    pub union_count: usize,
    /// Selections of rows picked by more than one slice, summed over those rows.
    pub overlap_count: usize,
}

impl SliceVerification {
    /// Every row selected exactly once.
    pub fn is_exact(&self) -> bool {
        self.overlap_count == 0 && self.sum_slices == self.total && self.union_count == self.total
    }
}

pub fn verify_slices(source: &MemoryKeySource, predicates: &[SlicePredicate]) -> SliceVerification {
    let mut hits: FxHashMap<usize, usize> = FxHashMap::default();
    let mut slice_counts = Vec::with_capacity(predicates.len());
    for predicate in predicates {
        let mut count = 0;
        for (idx, row) in source.rows().iter().enumerate() {
            if predicate.matches(source.columns(), row) {
                *hits.entry(idx).or_default() += 1;
                count += 1;
            }
        }
        slice_counts.push(count);
    }

    let overlap_count = hits.values().filter(|n| **n > 1).sum();
    let verification = SliceVerification {
        total: source.len(),
        sum_slices: slice_counts.iter().sum(),
        slice_counts,
        union_count: hits.len(),
        overlap_count,
    };
    tracing::debug!(
        "[VERIFY] total={} sum={} union={} overlap={}",
        verification.total,
        verification.sum_slices,
        verification.union_count,
        verification.overlap_count
    );
    verification
}
