//! Exact-partition checks over explicit rows.

use slicesql_expr::SlicePredicate;
use slicesql_types::KeyTuple;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionReport {
    /// Rows no predicate selected.
    pub missing: Vec<KeyTuple>,
    /// Rows selected by more than one predicate, with the indexes that selected them.
    pub duplicated: Vec<(KeyTuple, Vec<usize>)>,
}

impl PartitionReport {
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.duplicated.is_empty()
    }
}

pub fn partition_report(
    columns: &[String],
    rows: &[KeyTuple],
    predicates: &[SlicePredicate],
) -> PartitionReport {
    let mut report = PartitionReport::default();
    for row in rows {
        let hits: Vec<usize> = predicates
            .iter()
            .enumerate()
            .filter(|(_, p)| p.matches(columns, row))
            .map(|(idx, _)| idx)
            .collect();
        match hits.len() {
            0 => report.missing.push(row.clone()),
            1 => {}
            _ => report.duplicated.push((row.clone(), hits)),
        }
    }
    report
}

/// Panic with the offending rows unless every row is selected exactly once.
pub fn assert_exact_partition(columns: &[String], rows: &[KeyTuple], predicates: &[SlicePredicate]) {
    let report = partition_report(columns, rows, predicates);
    let rendered: Vec<String> = predicates.iter().map(SlicePredicate::to_sql).collect();
    assert!(
        report.missing.is_empty(),
        "{} rows not covered, first {:?}\npredicates: {:#?}",
        report.missing.len(),
        report.missing.first(),
        rendered
    );
    assert!(
        report.duplicated.is_empty(),
        "{} rows selected more than once, first {:?}\npredicates: {:#?}",
        report.duplicated.len(),
        report.duplicated.first(),
        rendered
    );
}
