//! Typed primary-key values for slicesql.
//!
//! - [`Literal`]: closed tagged union over the value kinds a key column can hold
//! - [`encode_literal`]: SQL literal rendering (the only way values leave this crate)
//! - [`KeyTuple`] and [`compare_tuples`]: lexicographic ordering across key columns
//! - [`DecimalValue`]: fixed-point numbers with numeric equality
//!
//! Values are read from Arrow arrays with [`Literal::from_array_ref`].

pub mod array;
pub mod decimal;
pub mod encode;
pub mod literal;
pub mod tuple;

pub use decimal::{DecimalError, DecimalValue};
pub use encode::{encode_literal, quote_text};
pub use literal::Literal;
pub use tuple::{KeyTuple, compare_tuples, first_incomparable, same_tuple};
