//! Random primary-key tables with controllable skew.

use rand::Rng;
use rustc_hash::FxHashSet;
use slicesql_types::{KeyTuple, Literal};
use time::{Date, Duration};

/// Value kind of one generated key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Integers in `0..domain`.
    Int,
    /// Zero-padded labels such as `L07`, so byte order matches numeric order.
    Text,
    /// Consecutive days starting at 2026-01-26.
    Date,
}

#[derive(Debug, Clone)]
pub struct KeyTableSpec {
    /// One entry per key column, leading column first.
    pub columns: Vec<(KeyKind, u32)>,
    pub rows: usize,
}

impl KeyTableSpec {
    /// `arity` integer columns, each drawn from `0..domain`.
    pub fn ints(arity: usize, domain: u32, rows: usize) -> Self {
        Self {
            columns: vec![(KeyKind::Int, domain); arity],
            rows,
        }
    }

    pub fn column_names(&self) -> Vec<String> {
        (0..self.columns.len()).map(|i| format!("k{i}")).collect()
    }
}

/// Draw `spec.rows` distinct key tuples. The result is unsorted.
///
/// Small domains on the leading columns produce heavy ties, which is what exercises the
/// composite banding. If the key space is smaller than `spec.rows`, fewer rows are returned.
pub fn random_key_table<R: Rng>(rng: &mut R, spec: &KeyTableSpec) -> Vec<KeyTuple> {
    let space: u128 = spec
        .columns
        .iter()
        .map(|(_, domain)| u128::from((*domain).max(1)))
        .product();
    let wanted = (spec.rows as u128).min(space) as usize;

    let mut seen = FxHashSet::default();
    let mut rows = Vec::with_capacity(wanted);
    while rows.len() < wanted {
        let raw: Vec<u32> = spec
            .columns
            .iter()
            .map(|(_, domain)| rng.random_range(0..(*domain).max(1)))
            .collect();
        if seen.insert(raw.clone()) {
            rows.push(
                raw.iter()
                    .zip(&spec.columns)
                    .map(|(value, (kind, _))| key_value(*kind, *value))
                    .collect(),
            );
        }
    }
    rows
}

fn key_value(kind: KeyKind, value: u32) -> Literal {
    match kind {
        KeyKind::Int => Literal::from(value),
        KeyKind::Text => Literal::from(format!("L{value:02}")),
        KeyKind::Date => {
            let base = Date::from_calendar_date(2026, time::Month::January, 26)
                .unwrap_or(Date::MIN);
            Literal::from(base.saturating_add(Duration::days(i64::from(value))))
        }
    }
}
