//! Error types and result definitions shared by every slicesql crate.
//!
//! All fallible operations return [`Result<T>`], whose error variant is the single
//! workspace-wide [`Error`] enum. Errors propagate with `?` across crate boundaries and are
//! rendered into user-facing messages only at the command-line edge.
//!
//! # Error Categories
//!
//! - **I/O errors** ([`Error::Io`]): reading key exports, writing log files
//! - **Data format errors** ([`Error::Arrow`]): CSV decoding and schema inference
//! - **User input errors** ([`Error::InvalidArgumentError`]): bad slice counts, table names
//! - **Key discovery** ([`Error::PrimaryKeyNotFound`], [`Error::EmptyPrimaryKey`])
//! - **Boundary contract violations** ([`Error::BoundaryArity`],
//!   [`Error::UnorderedBoundaries`], [`Error::EmptyInterval`], [`Error::MissingBoundaries`],
//!   [`Error::IncomparableBoundary`])
//! - **Internal errors** ([`Error::Internal`]): bugs or unexpected states

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
