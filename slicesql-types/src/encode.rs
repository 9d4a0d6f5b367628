//! SQL literal rendering for key values.
//!
//! Predicates are executed against the same database that produced the sampled values, so
//! literals use ANSI typed-literal syntax (`DATE '...'`, `TIME '...'`, `TIMESTAMP '...'`)
//! understood by both PostgreSQL and Oracle. Rendering never fails.

use std::fmt::Write;

use time::{Date, PrimitiveDateTime, Time};

use crate::literal::Literal;

/// Render `value` as a SQL literal.
///
/// ```
/// use slicesql_types::{Literal, encode_literal};
///
/// assert_eq!(encode_literal(&Literal::from("O'Brien")), "'O''Brien'");
/// assert_eq!(encode_literal(&Literal::Null), "NULL");
/// assert_eq!(encode_literal(&Literal::from(42i64)), "42");
/// ```
pub fn encode_literal(value: &Literal) -> String {
    match value {
        Literal::Null => "NULL".to_string(),
        Literal::Int128(i) => i.to_string(),
        Literal::Float64(f) if f.is_finite() => f.to_string(),
        Literal::Float64(f) => quote_text(&non_finite_text(*f)),
        Literal::Decimal128(d) => d.to_string(),
        Literal::String(s) => quote_text(s),
        Literal::Date(d) => format!("DATE '{}'", format_date(*d)),
        Literal::Time(t) => format!("TIME '{}'", format_time(*t)),
        Literal::Timestamp(ts) => format!("TIMESTAMP '{}'", format_timestamp(*ts)),
    }
}

impl Literal {
    /// Render this value as a SQL literal. See [`encode_literal`].
    #[inline]
    pub fn to_sql(&self) -> String {
        encode_literal(self)
    }
}

/// Single-quote `text`, doubling embedded quotes.
pub fn quote_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

fn non_finite_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_sign_positive() {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

pub(crate) fn format_date(date: Date) -> String {
    let (year, month, day) = date.to_calendar_date();
    format!("{:04}-{:02}-{:02}", year, month as u8, day)
}

pub(crate) fn format_time(time: Time) -> String {
    let mut out = format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    );
    push_fraction(&mut out, time.nanosecond());
    out
}

fn format_timestamp(ts: PrimitiveDateTime) -> String {
    format!("{} {}", format_date(ts.date()), format_time(ts.time()))
}

/// Append `.fraction` with trailing zeros trimmed; nothing for whole seconds.
fn push_fraction(out: &mut String, nanos: u32) {
    if nanos == 0 {
        return;
    }
    let mut digits = String::with_capacity(9);
    let _ = write!(digits, "{:09}", nanos);
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}
