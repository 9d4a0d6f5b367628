//! slicesql: split a table into disjoint primary-key range slices.
//!
//! Given a table's primary key, its row count and the keys found at a handful of evenly
//! spaced row numbers, slicesql emits `SELECT * FROM <table> WHERE <predicate>;` statements
//! whose union selects every row exactly once. Each predicate is a pure conjunction of
//! comparisons on key columns, so every statement can be served by a range scan of the
//! primary-key index and the slices can be exported in parallel.
//!
//! # Quick Start
//!
//! ```rust
//! use slicesql::{Literal, MemoryKeySource, SliceOptions, TableRef, plan_slices};
//!
//! let rows = (1..=100i64).map(|id| vec![Literal::from(id)]).collect();
//! let mut source = MemoryKeySource::new(vec!["id".into()], rows).unwrap();
//! let table = TableRef::parse("app.orders").unwrap();
//! let plan = plan_slices(&mut source, &table, &SliceOptions::new(4)).unwrap();
//! assert_eq!(
//!     plan.statements()[0],
//!     "SELECT * FROM app.orders WHERE id >= 1 AND id < 26;"
//! );
//! ```
//!
//! # Architecture
//!
//! - **Values** (`slicesql-types`): the [`Literal`] union and SQL literal rendering.
//! - **Predicates** (`slicesql-expr`): [`SlicePredicate`] conjunctions and their evaluation.
//! - **Partitioning** (`slicesql-partition`): sampling, range construction, planning, dialect
//!   SQL and verification.
//! - **Key exports** (`slicesql-csv`): loading a [`MemoryKeySource`] from CSV.
//! - **Errors** (`slicesql-result`): the shared [`Error`] type.

pub mod cli;

pub use slicesql_csv::{CsvKeyOptions, load_key_source};
pub use slicesql_expr::{CompareOp, Filter, SlicePredicate};
pub use slicesql_partition::{
    Dialect, KeySource, MemoryKeySource, PlanTimings, SliceOptions, SlicePlan,
    SliceVerification, TableRef, build_composite, build_slice_predicates, dedupe_boundaries,
    partition_single, plan_row_numbers, plan_slices, render_statement, verify_slices,
};
pub use slicesql_result::{Error, Result};
pub use slicesql_types::{DecimalValue, KeyTuple, Literal, encode_literal};
