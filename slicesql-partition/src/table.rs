//! Caller-supplied table identifiers.

use std::fmt;
use std::str::FromStr;

use slicesql_result::{Error, Result};

/// A table name, optionally schema-qualified.
///
/// Identifiers are passed through unmodified: no quoting and no case folding. Dialects that
/// look tables up in their catalogs apply their own folding (see
/// [`Dialect::primary_key_params`](crate::Dialect::primary_key_params)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    schema: Option<String>,
    name: String,
}

impl TableRef {
    pub fn new(schema: Option<String>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidArgumentError("table name is empty".into()));
        }
        if schema.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(Error::InvalidArgumentError(format!(
                "schema for table '{name}' is empty"
            )));
        }
        Ok(Self { schema, name })
    }

    /// Split `schema.name` on the first dot; a bare name has no schema.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.split_once('.') {
            Some((schema, name)) => Self::new(Some(schema.to_string()), name),
            None => Self::new(None, raw),
        }
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `schema.name`, or just `name`.
    pub fn qualified(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for TableRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
