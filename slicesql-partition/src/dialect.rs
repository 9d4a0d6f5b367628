//! SQL text for the database side of planning and verification.
//!
//! Nothing here executes queries. A live [`KeySource`](crate::KeySource) runs these strings
//! with its own driver; the command-line tool prints them with `--emit-queries`.

use std::fmt;
use std::str::FromStr;

use slicesql_result::{Error, Result};

use crate::table::TableRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Postgres,
    Oracle,
}

impl Dialect {
    /// Short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "pg",
            Dialect::Oracle => "ora",
        }
    }

    /// Bind placeholder for the 1-based parameter `position`.
    pub fn placeholder(&self, position: usize) -> String {
        match self {
            Dialect::Postgres => format!("${position}"),
            Dialect::Oracle => format!(":{position}"),
        }
    }

    /// Query returning the primary-key column names of a table, one row per column, in key
    /// order. Bind it with [`Dialect::primary_key_params`].
    pub fn primary_key_query(&self, table: &TableRef) -> String {
        match self {
            Dialect::Postgres => "SELECT a.attname \
                 FROM pg_constraint c \
                 CROSS JOIN LATERAL unnest(c.conkey) WITH ORDINALITY AS k(attnum, ord) \
                 JOIN pg_attribute a ON a.attrelid = c.conrelid AND a.attnum = k.attnum \
                 WHERE c.conrelid = $1::regclass AND c.contype = 'p' \
                 ORDER BY k.ord"
                .to_string(),
            Dialect::Oracle if table.schema().is_some() => "SELECT acc.column_name \
                 FROM all_constraints ac \
                 JOIN all_cons_columns acc \
                 ON ac.owner = acc.owner AND ac.constraint_name = acc.constraint_name \
                 WHERE ac.owner = :1 AND ac.table_name = :2 AND ac.constraint_type = 'P' \
                 ORDER BY acc.position"
                .to_string(),
            Dialect::Oracle => "SELECT acc.column_name \
                 FROM user_constraints ac \
                 JOIN user_cons_columns acc ON ac.constraint_name = acc.constraint_name \
                 WHERE ac.table_name = :1 AND ac.constraint_type = 'P' \
                 ORDER BY acc.position"
                .to_string(),
        }
    }

    /// Bind values for [`Dialect::primary_key_query`].
    ///
    /// Postgres resolves the qualified name through `regclass`. Oracle stores unquoted
    /// identifiers upper-case, so owner and table are folded before lookup.
    pub fn primary_key_params(&self, table: &TableRef) -> Vec<String> {
        match self {
            Dialect::Postgres => vec![table.qualified()],
            Dialect::Oracle => match table.schema() {
                Some(schema) => vec![schema.to_uppercase(), table.name().to_uppercase()],
                None => vec![table.name().to_uppercase()],
            },
        }
    }

    pub fn count_query(&self, table: &TableRef) -> String {
        format!("SELECT COUNT(*) FROM {table}")
    }

    /// Windowed query returning the key tuples at `row_numbers` bind positions, ordered by
    /// row number. `row_count` placeholders are generated; bind the planned row numbers.
    pub fn boundary_query(&self, table: &TableRef, columns: &[String], row_count: usize) -> String {
        let col_list = columns.join(", ");
        let placeholders = (1..=row_count)
            .map(|position| self.placeholder(position))
            .collect::<Vec<_>>()
            .join(", ");
        let alias = self.subquery_alias();
        format!(
            "SELECT {col_list} FROM ( SELECT {col_list}, ROW_NUMBER() OVER (ORDER BY {col_list}) rn \
             FROM {table} ){alias} WHERE rn IN ({placeholders}) ORDER BY rn"
        )
    }

    /// `SELECT COUNT(*)` over an arbitrary statement. A trailing `;` is dropped.
    pub fn count_wrapped(&self, sql: &str) -> String {
        format!(
            "SELECT COUNT(*) FROM ({}){}",
            strip_terminator(sql),
            self.subquery_alias()
        )
    }

    /// Query returning one row per primary key that appears in more than one slice; each
    /// row holds the number of times that key was selected.
    pub fn overlap_query(&self, primary_key: &[String], slice_sqls: &[String]) -> String {
        let pk_list = primary_key.join(",");
        format!(
            "SELECT COUNT(*) FROM ({}){} GROUP BY {pk_list} HAVING COUNT(*)>1",
            key_selects(&pk_list, slice_sqls).join(" UNION ALL "),
            self.subquery_alias()
        )
    }

    /// Count of distinct primary keys selected by any slice.
    pub fn union_count_query(&self, primary_key: &[String], slice_sqls: &[String]) -> String {
        let pk_list = primary_key.join(",");
        format!(
            "SELECT COUNT(*) FROM ({}){}",
            key_selects(&pk_list, slice_sqls).join(" UNION "),
            self.subquery_alias()
        )
    }

    /// Oracle rejects `AS` on derived tables and does not need the alias at all.
    fn subquery_alias(&self) -> &'static str {
        match self {
            Dialect::Postgres => " AS t",
            Dialect::Oracle => "",
        }
    }
}

fn strip_terminator(sql: &str) -> &str {
    sql.trim_end_matches(|c: char| c == ';' || c.is_whitespace())
}

fn key_selects(pk_list: &str, slice_sqls: &[String]) -> Vec<String> {
    slice_sqls
        .iter()
        .map(|sql| strip_terminator(sql).replacen("SELECT *", &format!("SELECT {pk_list}"), 1))
        .collect()
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pg" | "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "ora" | "oracle" => Ok(Dialect::Oracle),
            other => Err(Error::InvalidArgumentError(format!(
                "unknown database type '{other}', expected pg or ora"
            ))),
        }
    }
}
