//! CSV primary-key exports.
//!
//! A key export is a CSV file holding (at least) the primary-key columns of a table, one row
//! per table row. Column types come from Arrow's CSV inference, so integers, decimals, dates
//! and timestamps keep their native ordering and render as typed SQL literals.

pub mod loader;
pub mod reader;

pub use loader::load_key_source;
pub use reader::CsvKeyOptions;
