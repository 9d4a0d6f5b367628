pub mod expr;
pub use expr::*;

pub mod eval;
pub mod format;
