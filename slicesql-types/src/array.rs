//! Conversion from Arrow arrays into [`Literal`] values.
//!
//! This is the single place where a value's kind is decided. Arrow types without a
//! dedicated `Literal` variant (booleans, binary, nested types, ...) are carried as text
//! using Arrow's display formatting, which renders them through the quoted-text fallback.

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{
    DataType, Date32Type, Date64Type, Decimal128Type, Float32Type, Float64Type, Int8Type,
    Int16Type, Int32Type, Int64Type, Time32MillisecondType, Time32SecondType,
    Time64MicrosecondType, Time64NanosecondType, TimeUnit, TimestampMicrosecondType,
    TimestampMillisecondType, TimestampNanosecondType, TimestampSecondType, UInt8Type,
    UInt16Type, UInt32Type, UInt64Type,
};
use arrow::util::display::array_value_to_string;
use slicesql_result::{Error, Result};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::decimal::DecimalValue;
use crate::literal::Literal;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

impl Literal {
    /// Read the value at `index` of `array`.
    pub fn from_array_ref(array: &ArrayRef, index: usize) -> Result<Literal> {
        if array.is_null(index) {
            return Ok(Literal::Null);
        }

        let converted: Option<Literal> = match array.data_type() {
            DataType::Int8 => Some(array.as_primitive::<Int8Type>().value(index).into()),
            DataType::Int16 => Some(array.as_primitive::<Int16Type>().value(index).into()),
            DataType::Int32 => Some(array.as_primitive::<Int32Type>().value(index).into()),
            DataType::Int64 => Some(array.as_primitive::<Int64Type>().value(index).into()),
            DataType::UInt8 => Some(array.as_primitive::<UInt8Type>().value(index).into()),
            DataType::UInt16 => Some(array.as_primitive::<UInt16Type>().value(index).into()),
            DataType::UInt32 => Some(array.as_primitive::<UInt32Type>().value(index).into()),
            DataType::UInt64 => Some(array.as_primitive::<UInt64Type>().value(index).into()),
            DataType::Float32 => Some(array.as_primitive::<Float32Type>().value(index).into()),
            DataType::Float64 => Some(array.as_primitive::<Float64Type>().value(index).into()),
            DataType::Decimal128(_, scale) => {
                let raw = array.as_primitive::<Decimal128Type>().value(index);
                let decimal = DecimalValue::new(raw, *scale).map_err(|err| {
                    Error::InvalidArgumentError(format!(
                        "invalid decimal value for literal conversion: {err}"
                    ))
                })?;
                Some(Literal::Decimal128(decimal))
            }
            DataType::Utf8 => Some(array.as_string::<i32>().value(index).into()),
            DataType::LargeUtf8 => Some(array.as_string::<i64>().value(index).into()),
            DataType::Utf8View => Some(array.as_string_view().value(index).into()),
            DataType::Date32 => {
                date_from_days(array.as_primitive::<Date32Type>().value(index)).map(Literal::Date)
            }
            DataType::Date64 => {
                let millis = array.as_primitive::<Date64Type>().value(index) as i128;
                datetime_from_unix_nanos(millis * 1_000_000).map(date_or_timestamp)
            }
            DataType::Time32(TimeUnit::Second) => {
                let secs = array.as_primitive::<Time32SecondType>().value(index) as i64;
                time_from_nanos(secs * 1_000_000_000).map(Literal::Time)
            }
            DataType::Time32(TimeUnit::Millisecond) => {
                let millis = array.as_primitive::<Time32MillisecondType>().value(index) as i64;
                time_from_nanos(millis * 1_000_000).map(Literal::Time)
            }
            DataType::Time64(TimeUnit::Microsecond) => {
                let micros = array.as_primitive::<Time64MicrosecondType>().value(index);
                time_from_nanos(micros.saturating_mul(1_000)).map(Literal::Time)
            }
            DataType::Time64(TimeUnit::Nanosecond) => {
                let nanos = array.as_primitive::<Time64NanosecondType>().value(index);
                time_from_nanos(nanos).map(Literal::Time)
            }
            DataType::Timestamp(unit, _) => {
                let nanos = timestamp_nanos(array, index, *unit);
                datetime_from_unix_nanos(nanos).map(Literal::Timestamp)
            }
            _ => None,
        };

        match converted {
            Some(literal) => Ok(literal),
            None => Ok(Literal::String(array_value_to_string(array, index)?)),
        }
    }
}

fn timestamp_nanos(array: &ArrayRef, index: usize, unit: TimeUnit) -> i128 {
    match unit {
        TimeUnit::Second => {
            array.as_primitive::<TimestampSecondType>().value(index) as i128 * NANOS_PER_SECOND
        }
        TimeUnit::Millisecond => {
            array.as_primitive::<TimestampMillisecondType>().value(index) as i128 * 1_000_000
        }
        TimeUnit::Microsecond => {
            array.as_primitive::<TimestampMicrosecondType>().value(index) as i128 * 1_000
        }
        TimeUnit::Nanosecond => array.as_primitive::<TimestampNanosecondType>().value(index) as i128,
    }
}

fn epoch_julian_day() -> Option<i32> {
    Date::from_calendar_date(1970, Month::January, 1)
        .ok()
        .map(Date::to_julian_day)
}

fn date_from_days(days: i32) -> Option<Date> {
    let julian = epoch_julian_day()?.checked_add(days)?;
    Date::from_julian_day(julian).ok()
}

fn datetime_from_unix_nanos(nanos: i128) -> Option<PrimitiveDateTime> {
    let instant = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?;
    Some(PrimitiveDateTime::new(instant.date(), instant.time()))
}

fn time_from_nanos(nanos: i64) -> Option<Time> {
    if !(0..NANOS_PER_DAY).contains(&nanos) {
        return None;
    }
    let secs = nanos / 1_000_000_000;
    Time::from_hms_nano(
        (secs / 3600) as u8,
        ((secs / 60) % 60) as u8,
        (secs % 60) as u8,
        (nanos % 1_000_000_000) as u32,
    )
    .ok()
}

/// Midnight values of a date-with-time column are plain dates.
fn date_or_timestamp(value: PrimitiveDateTime) -> Literal {
    if value.time() == Time::MIDNIGHT {
        Literal::Date(value.date())
    } else {
        Literal::Timestamp(value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{
        BooleanArray, Date32Array, Decimal128Array, Int64Array, StringArray,
        Time64MicrosecondArray, TimestampMillisecondArray,
    };

    use super::*;

    #[test]
    fn primitive_arrays_convert_to_literals() {
        let ints: ArrayRef = Arc::new(Int64Array::from(vec![Some(10), None]));
        assert_eq!(Literal::from_array_ref(&ints, 0).unwrap(), Literal::from(10i64));
        assert_eq!(Literal::from_array_ref(&ints, 1).unwrap(), Literal::Null);

        let text: ArrayRef = Arc::new(StringArray::from(vec!["O'Brien"]));
        assert_eq!(
            Literal::from_array_ref(&text, 0).unwrap().to_sql(),
            "'O''Brien'"
        );

        let decimals: ArrayRef = Arc::new(
            Decimal128Array::from(vec![12345])
                .with_precision_and_scale(10, 2)
                .unwrap(),
        );
        assert_eq!(Literal::from_array_ref(&decimals, 0).unwrap().to_sql(), "123.45");
    }

    #[test]
    fn temporal_arrays_convert_to_typed_literals() {
        let dates: ArrayRef = Arc::new(Date32Array::from(vec![19723]));
        assert_eq!(
            Literal::from_array_ref(&dates, 0).unwrap().to_sql(),
            "DATE '2024-01-01'"
        );

        let stamps: ArrayRef = Arc::new(TimestampMillisecondArray::from(vec![1_704_067_200_500]));
        assert_eq!(
            Literal::from_array_ref(&stamps, 0).unwrap().to_sql(),
            "TIMESTAMP '2024-01-01 00:00:00.5'"
        );

        let times: ArrayRef = Arc::new(Time64MicrosecondArray::from(vec![3_723_000_001]));
        assert_eq!(
            Literal::from_array_ref(&times, 0).unwrap().to_sql(),
            "TIME '01:02:03.000001'"
        );
    }

    #[test]
    fn unknown_kinds_fall_back_to_text() {
        let flags: ArrayRef = Arc::new(BooleanArray::from(vec![true]));
        assert_eq!(
            Literal::from_array_ref(&flags, 0).unwrap(),
            Literal::String("true".into())
        );
    }
}
