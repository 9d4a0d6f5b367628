//! An in-memory table of primary keys.
//!
//! Backs the command-line tool (keys loaded from an export) and the verification helpers:
//! it answers the same questions a database would, and can evaluate slice predicates
//! against every row.

use std::cmp::Ordering;

use slicesql_expr::SlicePredicate;
use slicesql_result::{Error, Result};
use slicesql_types::{KeyTuple, compare_tuples, first_incomparable};

use crate::source::KeySource;
use crate::table::TableRef;

#[derive(Debug, Clone)]
pub struct MemoryKeySource {
    columns: Vec<String>,
    rows: Vec<KeyTuple>,
}

impl MemoryKeySource {
    /// Build a key table, sorting `rows` lexicographically by `columns`.
    ///
    /// Every row must carry one value per column, and all values in a column must be
    /// mutually comparable (no `NULL`s, no mixed kinds), as they would be in a real key.
    pub fn new(columns: Vec<String>, mut rows: Vec<KeyTuple>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::EmptyPrimaryKey);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::BoundaryArity {
                    index,
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
        }
        if let Some(first) = rows.first() {
            for (index, row) in rows.iter().enumerate() {
                if let Some(col) = first_incomparable(first, row) {
                    return Err(Error::IncomparableBoundary {
                        index,
                        column: columns[col].clone(),
                    });
                }
            }
        }
        rows.sort_by(|a, b| compare_tuples(a, b).unwrap_or(Ordering::Equal));
        tracing::debug!(
            "[MEMORY] loaded {} key rows over columns {:?}",
            rows.len(),
            columns
        );
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in key order; row number `n` is `rows()[n - 1]`.
    pub fn rows(&self) -> &[KeyTuple] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows selected by `predicate`, in key order.
    pub fn select<'a>(
        &'a self,
        predicate: &'a SlicePredicate,
    ) -> impl Iterator<Item = &'a KeyTuple> + 'a {
        self.rows
            .iter()
            .filter(move |row| predicate.matches(&self.columns, row))
    }

    pub fn count(&self, predicate: &SlicePredicate) -> usize {
        self.select(predicate).count()
    }
}

impl KeySource for MemoryKeySource {
    fn primary_key_columns(&mut self, _table: &TableRef) -> Result<Vec<String>> {
        Ok(self.columns.clone())
    }

    fn row_count(&mut self, _table: &TableRef) -> Result<u64> {
        Ok(self.rows.len() as u64)
    }

    fn keys_at_row_numbers(
        &mut self,
        table: &TableRef,
        columns: &[String],
        row_numbers: &[u64],
    ) -> Result<Vec<KeyTuple>> {
        if columns != self.columns.as_slice() {
            return Err(Error::InvalidArgumentError(format!(
                "table {table} is ordered by {:?}, not {:?}",
                self.columns, columns
            )));
        }
        let mut wanted = row_numbers.to_vec();
        wanted.sort_unstable();
        wanted.dedup();
        let tuples: Vec<KeyTuple> = wanted
            .into_iter()
            .filter(|rn| *rn >= 1)
            .filter_map(|rn| usize::try_from(rn - 1).ok())
            .filter_map(|idx| self.rows.get(idx).cloned())
            .collect();
        tracing::debug!("[MEMORY] fetched {} boundary rows", tuples.len());
        Ok(tuples)
    }
}
