//! The collaborator that knows how to reach the table.
//!
//! The partitioner never talks to a database itself. A [`KeySource`] answers three
//! questions (which columns form the primary key, how many rows there are, and what key sits
//! at a given row number) and the planner decides everything else. Implementations backed by
//! a live connection run the SQL rendered by [`Dialect`](crate::Dialect); tests and the
//! command-line tool use [`MemoryKeySource`](crate::MemoryKeySource).

use slicesql_result::Result;
use slicesql_types::KeyTuple;

use crate::table::TableRef;

pub trait KeySource {
    /// Primary-key columns of `table` in key order. Empty when the table has no key.
    fn primary_key_columns(&mut self, table: &TableRef) -> Result<Vec<String>>;

    /// Total number of rows in `table`.
    fn row_count(&mut self, table: &TableRef) -> Result<u64>;

    /// Key tuples found at each 1-based row number under `ORDER BY <columns>`.
    ///
    /// Tuples come back ordered by row number. Row numbers past the end of the table have
    /// no row and are absent from the result.
    fn keys_at_row_numbers(
        &mut self,
        table: &TableRef,
        columns: &[String],
        row_numbers: &[u64],
    ) -> Result<Vec<KeyTuple>>;
}

impl<S: KeySource + ?Sized> KeySource for &mut S {
    fn primary_key_columns(&mut self, table: &TableRef) -> Result<Vec<String>> {
        (**self).primary_key_columns(table)
    }

    fn row_count(&mut self, table: &TableRef) -> Result<u64> {
        (**self).row_count(table)
    }

    fn keys_at_row_numbers(
        &mut self,
        table: &TableRef,
        columns: &[String],
        row_numbers: &[u64],
    ) -> Result<Vec<KeyTuple>> {
        (**self).keys_at_row_numbers(table, columns, row_numbers)
    }
}
