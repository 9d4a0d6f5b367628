//! Typed key values sampled from a table's primary-key columns.
//!
//! A [`Literal`] is decided once, at the point a value is read from the collaborator's
//! result set, and everything downstream (ordering, deduplication, rendering) dispatches
//! over this closed set of kinds.

use std::cmp::Ordering;

use time::{Date, PrimitiveDateTime, Time};

use crate::decimal::DecimalValue;

/// A single primary-key value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Int128(i128),
    Float64(f64),
    /// Decimal literal stored as scaled integer with fixed precision.
    Decimal128(DecimalValue),
    /// Text, and the fallback for any value kind without a dedicated variant.
    String(String),
    Date(Date),
    Time(Time),
    /// Timestamp without time zone. Zoned values are normalised to UTC by the reader.
    Timestamp(PrimitiveDateTime),
}

macro_rules! impl_from_for_literal {
    ($variant:ident, $($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(v: $t) -> Self {
                    Literal::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_literal!(Int128, i8, i16, i32, i64, i128, u8, u16, u32, u64);
impl_from_for_literal!(Float64, f32, f64);
impl_from_for_literal!(String, String);
impl_from_for_literal!(Decimal128, DecimalValue);
impl_from_for_literal!(Date, Date);
impl_from_for_literal!(Time, Time);
impl_from_for_literal!(Timestamp, PrimitiveDateTime);

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::String(v.to_string())
    }
}

impl<T> From<Option<T>> for Literal
where
    T: Into<Literal>,
{
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Literal::Null)
    }
}

impl Literal {
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Literal::String(_))
    }

    /// Compare two values under the ordering a database applies to `ORDER BY`.
    ///
    /// Numeric kinds compare with each other; integers against floats compare exactly. A date
    /// compares with a timestamp as midnight of that day. Text compares byte-wise, which need
    /// not match a database collation. `NULL` and mismatched kinds are incomparable and yield
    /// `None`.
    pub fn compare(&self, other: &Literal) -> Option<Ordering> {
        use Literal as L;
        match (self, other) {
            (L::Int128(a), L::Int128(b)) => Some(a.cmp(b)),
            (L::Float64(a), L::Float64(b)) => a.partial_cmp(b),
            (L::Int128(a), L::Float64(b)) => compare_int_float(*a, *b),
            (L::Float64(a), L::Int128(b)) => compare_int_float(*b, *a).map(Ordering::reverse),
            (L::Decimal128(a), L::Decimal128(b)) => Some(a.cmp(b)),
            (L::Decimal128(a), L::Int128(b)) => Some(a.cmp(&integer_as_decimal(*b)?)),
            (L::Int128(a), L::Decimal128(b)) => Some(integer_as_decimal(*a)?.cmp(b)),
            (L::Decimal128(a), L::Float64(b)) => a.to_f64().partial_cmp(b),
            (L::Float64(a), L::Decimal128(b)) => a.partial_cmp(&b.to_f64()),
            (L::String(a), L::String(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (L::Date(a), L::Date(b)) => Some(a.cmp(b)),
            (L::Time(a), L::Time(b)) => Some(a.cmp(b)),
            (L::Timestamp(a), L::Timestamp(b)) => Some(a.cmp(b)),
            (L::Date(a), L::Timestamp(b)) => Some(a.midnight().cmp(b)),
            (L::Timestamp(a), L::Date(b)) => Some(a.cmp(&b.midnight())),
            _ => None,
        }
    }

    /// Key equality used when collapsing repeated boundaries.
    ///
    /// Unlike SQL `=`, two `NULL`s are the same boundary.
    pub fn same_key(&self, other: &Literal) -> bool {
        match (self, other) {
            (Literal::Null, Literal::Null) => true,
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }
}

/// Order `int` against `float` without rounding `int` to 53 bits.
fn compare_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // i128::MIN is exactly -2^127; i128::MAX rounds up to 2^127.
    let bound = -(i128::MIN as f64);
    if float >= bound {
        return Some(Ordering::Less);
    }
    if float < -bound {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0f64.partial_cmp(&(float - whole)),
        other => Some(other),
    }
}

fn integer_as_decimal(value: i128) -> Option<DecimalValue> {
    DecimalValue::new(value, 0).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn numeric_kinds_compare_with_each_other() {
        let one = Literal::from(1i64);
        let one_and_half = Literal::Decimal128(DecimalValue::new(15, 1).unwrap());
        let two = Literal::from(2.0f64);
        assert_eq!(one.compare(&one_and_half), Some(Ordering::Less));
        assert_eq!(two.compare(&one_and_half), Some(Ordering::Greater));
        assert!(Literal::Decimal128(DecimalValue::new(200, 2).unwrap()).same_key(&two));
    }

    #[test]
    fn integers_compare_exactly_against_floats() {
        let big = 1i64 << 53;
        let rounded = Literal::from(big as f64);
        assert_eq!(Literal::from(big + 1).compare(&rounded), Some(Ordering::Greater));
        assert_eq!(rounded.compare(&Literal::from(big + 1)), Some(Ordering::Less));
        assert!(Literal::from(big).same_key(&rounded));
        assert_eq!(Literal::from(-3i64).compare(&Literal::from(-2.5f64)), Some(Ordering::Less));
        assert_eq!(Literal::from(2i64).compare(&Literal::from(2.5f64)), Some(Ordering::Less));
        assert_eq!(
            Literal::from(i128::MAX).compare(&Literal::from(f64::INFINITY)),
            Some(Ordering::Less)
        );
        assert_eq!(Literal::from(0i64).compare(&Literal::from(f64::NAN)), None);
    }

    #[test]
    fn null_and_mismatched_kinds_are_incomparable() {
        assert_eq!(Literal::Null.compare(&Literal::Null), None);
        assert!(Literal::Null.same_key(&Literal::Null));
        assert_eq!(Literal::from("1").compare(&Literal::from(1i32)), None);
        assert!(!Literal::from("1").same_key(&Literal::from(1i32)));
    }

    #[test]
    fn dates_order_against_timestamps_at_midnight() {
        let day = Date::from_calendar_date(2024, Month::March, 9).unwrap();
        let noon = PrimitiveDateTime::new(day, Time::from_hms(12, 0, 0).unwrap());
        assert_eq!(
            Literal::Date(day).compare(&Literal::Timestamp(noon)),
            Some(Ordering::Less)
        );
        assert!(Literal::Date(day).same_key(&Literal::Timestamp(day.midnight())));
    }

    #[test]
    fn option_converts_to_null() {
        assert_eq!(Literal::from(None::<i64>), Literal::Null);
        assert_eq!(Literal::from(Some("x")), Literal::String("x".into()));
    }
}
