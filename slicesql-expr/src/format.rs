//! SQL rendering for predicate types.

use std::fmt;

use crate::{CompareOp, Filter, SlicePredicate};

impl CompareOp {
    /// Render the operator as a SQL symbol.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.value.to_sql())
    }
}

impl fmt::Display for SlicePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("1=1");
        }
        for (idx, filter) in self.filters().iter().enumerate() {
            if idx > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

impl SlicePredicate {
    /// Render the predicate as a `WHERE`-clause body.
    #[inline]
    pub fn to_sql(&self) -> String {
        self.to_string()
    }
}
