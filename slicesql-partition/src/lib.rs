//! Range partitioning of a table into disjoint SQL slices by primary key.
//!
//! The flow mirrors what a parallel exporter needs:
//!
//! 1. discover the primary key and count the rows ([`KeySource`]),
//! 2. pick evenly spaced row numbers ([`plan_row_numbers`]),
//! 3. fetch the key tuples at those row numbers and collapse repeats ([`dedupe_boundaries`]),
//! 4. turn each adjacent pair into predicates ([`partition_single`], [`build_composite`]).
//!
//! [`plan_slices`] runs all four steps. The union of the resulting predicates selects every
//! row exactly once, and each predicate is a pure conjunction so it stays index-friendly.
#![forbid(unsafe_code)]

pub mod composite;
pub mod dialect;
pub mod memory;
pub mod planner;
pub mod sampler;
pub mod single;
pub mod source;
pub mod table;
pub mod verify;

pub use composite::build_composite;
pub use dialect::Dialect;
pub use memory::MemoryKeySource;
pub use planner::{
    PlanTimings, SliceOptions, SlicePlan, build_slice_predicates, plan_slices, render_statement,
};
pub use sampler::{dedupe_boundaries, plan_row_numbers};
pub use single::partition_single;
pub use source::KeySource;
pub use table::TableRef;
pub use verify::{SliceVerification, verify_slices};
