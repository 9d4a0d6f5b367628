//! End-to-end slice planning: key discovery, sampling, partitioning, rendering.

use std::time::{Duration, Instant};

use slicesql_expr::SlicePredicate;
use slicesql_result::{Error, Result};
use slicesql_types::{KeyTuple, Literal};

use crate::composite::{check_pair, composite_range};
use crate::sampler::{dedupe_boundaries, plan_row_numbers};
use crate::single::single_ranges;
use crate::source::KeySource;
use crate::table::TableRef;

/// Options for a planning run.
///
/// There is deliberately no `Default`: the caller must choose how many slices it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceOptions {
    /// Target number of slices. The result may contain fewer (small or skewed tables) or,
    /// for composite keys, more statements than this.
    pub desired_slices: usize,
}

impl SliceOptions {
    pub fn new(desired_slices: usize) -> Self {
        Self { desired_slices }
    }

    pub fn validate(&self) -> Result<()> {
        if self.desired_slices == 0 {
            return Err(Error::InvalidArgumentError(
                "desired slice count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Wall-clock time spent in each phase of [`plan_slices`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanTimings {
    /// Primary-key discovery and row count.
    pub metadata: Duration,
    /// Fetching boundary tuples.
    pub fetch: Duration,
    /// The whole run.
    pub total: Duration,
}

/// Everything a planning run decided.
#[derive(Debug, Clone)]
pub struct SlicePlan {
    pub table: TableRef,
    pub primary_key: Vec<String>,
    pub total_rows: u64,
    /// Row numbers that were sampled.
    pub row_numbers: Vec<u64>,
    /// Deduplicated boundaries the predicates were built from.
    pub boundaries: Vec<KeyTuple>,
    pub predicates: Vec<SlicePredicate>,
    pub timings: PlanTimings,
}

impl SlicePlan {
    /// One `SELECT * FROM <table> WHERE <predicate>;` per predicate, in order.
    pub fn statements(&self) -> Vec<String> {
        self.predicates
            .iter()
            .map(|predicate| render_statement(&self.table, predicate))
            .collect()
    }

    /// True when the table was empty and there is nothing to scan.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

pub fn render_statement(table: &TableRef, predicate: &SlicePredicate) -> String {
    format!("SELECT * FROM {} WHERE {};", table, predicate)
}

/// Build slice predicates straight from sampled boundary tuples.
///
/// `boundaries` are the tuples fetched at the sampled row numbers, in row-number order.
/// Adjacent repeats are collapsed first; a single-column key is then partitioned with plain
/// ranges and a composite key band by band. An empty boundary list means an empty table and
/// yields no predicates.
pub fn build_slice_predicates(
    columns: &[String],
    boundaries: Vec<KeyTuple>,
) -> Result<Vec<SlicePredicate>> {
    if columns.is_empty() {
        return Err(Error::EmptyPrimaryKey);
    }
    let deduped = prepare_boundaries(columns, boundaries)?;
    Ok(predicates_for(columns, &deduped))
}

/// Check arity, dedupe, then check ordering of every adjacent pair.
pub(crate) fn prepare_boundaries(
    columns: &[String],
    boundaries: Vec<KeyTuple>,
) -> Result<Vec<KeyTuple>> {
    for (index, tuple) in boundaries.iter().enumerate() {
        if tuple.len() != columns.len() {
            return Err(Error::BoundaryArity {
                index,
                expected: columns.len(),
                actual: tuple.len(),
            });
        }
    }
    let deduped = dedupe_boundaries(boundaries);
    let last = deduped.len().saturating_sub(2);
    for (index, pair) in deduped.windows(2).enumerate() {
        check_pair(columns, &pair[0], &pair[1], index, index == last)?;
    }
    Ok(deduped)
}

fn predicates_for(columns: &[String], deduped: &[KeyTuple]) -> Vec<SlicePredicate> {
    if deduped.len() < 2 {
        return Vec::new();
    }
    if let [column] = columns {
        let values: Vec<Literal> = deduped.iter().map(|tuple| tuple[0].clone()).collect();
        return single_ranges(column, &values);
    }
    let last = deduped.len() - 2;
    deduped
        .windows(2)
        .enumerate()
        .flat_map(|(idx, pair)| composite_range(columns, &pair[0], &pair[1], idx == last))
        .collect()
}

/// Run the full planning flow against `source`.
pub fn plan_slices<S>(source: &mut S, table: &TableRef, options: &SliceOptions) -> Result<SlicePlan>
where
    S: KeySource + ?Sized,
{
    options.validate()?;
    let started = Instant::now();

    tracing::debug!("[PLANNER] fetching primary key for {}", table);
    let primary_key = source.primary_key_columns(table)?;
    if primary_key.is_empty() {
        return Err(Error::PrimaryKeyNotFound(table.qualified()));
    }
    let total_rows = source.row_count(table)?;
    let metadata = started.elapsed();
    tracing::debug!(
        "[PLANNER] pk columns {:?}, {} rows",
        primary_key,
        total_rows
    );

    let row_numbers = plan_row_numbers(total_rows, options.desired_slices)?;
    let fetch_started = Instant::now();
    let fetched = if row_numbers.is_empty() {
        Vec::new()
    } else {
        source.keys_at_row_numbers(table, &primary_key, &row_numbers)?
    };
    let fetch = fetch_started.elapsed();
    if total_rows > 0 && fetched.is_empty() {
        return Err(Error::MissingBoundaries { total_rows });
    }

    let boundaries = prepare_boundaries(&primary_key, fetched)?;
    tracing::info!(
        "pk_cols={:?} boundaries={}",
        primary_key,
        boundaries.len()
    );
    let predicates = predicates_for(&primary_key, &boundaries);
    tracing::info!("sqls={}", predicates.len());

    Ok(SlicePlan {
        table: table.clone(),
        primary_key,
        total_rows,
        row_numbers,
        boundaries,
        predicates,
        timings: PlanTimings {
            metadata,
            fetch,
            total: started.elapsed(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryKeySource;

    fn ids(values: &[i64]) -> Vec<KeyTuple> {
        values.iter().map(|v| vec![Literal::from(*v)]).collect()
    }

    fn render(preds: &[SlicePredicate]) -> Vec<String> {
        preds.iter().map(SlicePredicate::to_sql).collect()
    }

    #[test]
    fn repeated_first_boundary_is_collapsed() {
        let preds = build_slice_predicates(&["id".to_string()], ids(&[1, 1, 50, 100])).unwrap();
        assert_eq!(
            render(&preds),
            vec!["id >= 1 AND id < 50", "id >= 50 AND id <= 100"]
        );
    }

    #[test]
    fn single_value_table_is_one_closed_slice() {
        let preds = build_slice_predicates(&["id".to_string()], ids(&[7, 7, 7, 7, 7])).unwrap();
        assert_eq!(render(&preds), vec!["id >= 7 AND id <= 7"]);
    }

    #[test]
    fn empty_boundaries_mean_empty_table() {
        assert!(
            build_slice_predicates(&["id".to_string()], Vec::new())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn descending_boundaries_fail_fast() {
        let err = build_slice_predicates(&["id".to_string()], ids(&[1, 9, 5])).unwrap_err();
        assert!(matches!(err, Error::UnorderedBoundaries { index: 1 }));
    }

    #[test]
    fn empty_column_list_is_rejected() {
        assert!(matches!(
            build_slice_predicates(&[], ids(&[1, 2])),
            Err(Error::EmptyPrimaryKey)
        ));
    }

    #[test]
    fn plan_renders_statements_for_the_table() {
        let mut source =
            MemoryKeySource::new(vec!["id".into()], ids(&[5, 1, 4, 2, 3, 6, 8, 7])).unwrap();
        let table = TableRef::parse("app.events").unwrap();
        let plan = plan_slices(&mut source, &table, &SliceOptions::new(2)).unwrap();
        assert_eq!(plan.total_rows, 8);
        assert_eq!(plan.row_numbers, vec![1, 5, 8]);
        assert_eq!(
            plan.statements(),
            vec![
                "SELECT * FROM app.events WHERE id >= 1 AND id < 5;",
                "SELECT * FROM app.events WHERE id >= 5 AND id <= 8;",
            ]
        );
    }

    #[test]
    fn empty_table_plans_nothing() {
        let mut source = MemoryKeySource::new(vec!["id".into()], Vec::new()).unwrap();
        let table = TableRef::parse("t").unwrap();
        let plan = plan_slices(&mut source, &table, &SliceOptions::new(4)).unwrap();
        assert!(plan.is_empty());
        assert!(plan.statements().is_empty());
    }

    #[test]
    fn zero_slices_is_rejected_before_any_query() {
        let mut source = MemoryKeySource::new(vec!["id".into()], ids(&[1])).unwrap();
        let table = TableRef::parse("t").unwrap();
        assert!(plan_slices(&mut source, &table, &SliceOptions::new(0)).is_err());
    }
}
