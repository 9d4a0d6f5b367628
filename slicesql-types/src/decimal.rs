//! Fixed-point decimal values read from `NUMERIC` / `NUMBER` key columns.
//!
//! Values use Arrow's `Decimal128` layout: a scaled `i128` plus a scale. Keys only need
//! ordering, equality and rendering, so no arithmetic is provided.

use std::cmp::Ordering;
use std::fmt;

use arrow::datatypes::DECIMAL128_MAX_PRECISION;
use arrow_buffer::i256;

/// Maximum precision supported by `DecimalValue` (aligns with Arrow's Decimal128).
pub const MAX_DECIMAL_PRECISION: u8 = DECIMAL128_MAX_PRECISION;
const POW10_BASE: i256 = i256::from_i128(10);

/// Errors raised while constructing decimal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// Requested scale falls outside the supported range.
    ScaleOutOfRange { scale: i8 },
    /// Value exceeded the maximum representable precision.
    PrecisionOverflow { value: i128, scale: i8 },
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::ScaleOutOfRange { scale } => {
                write!(f, "decimal scale {scale} outside supported range")
            }
            DecimalError::PrecisionOverflow { value, scale } => {
                write!(
                    f,
                    "decimal value {value} with scale {scale} exceeds maximum precision"
                )
            }
        }
    }
}

impl std::error::Error for DecimalError {}

/// Runtime representation of a Decimal128 value.
///
/// Equality and ordering are numeric: `1.50` equals `1.5`.
#[derive(Clone, Copy, Debug)]
pub struct DecimalValue {
    value: i128,
    scale: i8,
}

impl DecimalValue {
    /// Create a decimal from its raw parts, validating precision bounds.
    pub fn new(value: i128, scale: i8) -> Result<Self, DecimalError> {
        if !scale_within_bounds(scale as i16) {
            return Err(DecimalError::ScaleOutOfRange { scale });
        }
        if digit_count_i256(i256::from_i128(value)) > MAX_DECIMAL_PRECISION {
            return Err(DecimalError::PrecisionOverflow { value, scale });
        }
        Ok(Self { value, scale })
    }

    /// Convert the decimal into an `f64` (lossy for high precision inputs).
    pub fn to_f64(self) -> f64 {
        if self.value == 0 {
            return 0.0;
        }
        let denominator = 10_f64.powi(self.scale as i32);
        (self.value as f64) / denominator
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale <= 0 {
            // Negative scale shifts digits left of the decimal point.
            write!(f, "{}", self.value)?;
            for _ in 0..(-(self.scale as i16)) {
                if self.value != 0 {
                    f.write_str("0")?;
                }
            }
            return Ok(());
        }
        let negative = self.value < 0;
        let digits = digit_buffer(i256::from_i128(self.value));
        let scale = self.scale as usize;
        if negative {
            f.write_str("-")?;
        }
        if digits.len() <= scale {
            f.write_str("0.")?;
            for _ in digits.len()..scale {
                f.write_str("0")?;
            }
            return f.write_str(&digits);
        }
        let split = digits.len() - scale;
        f.write_str(&digits[..split])?;
        f.write_str(".")?;
        f.write_str(&digits[split..])
    }
}

impl PartialEq for DecimalValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DecimalValue {}

impl PartialOrd for DecimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.value.cmp(&other.value);
        }

        let max_scale = std::cmp::max(self.scale, other.scale);
        let scale_diff_self = (max_scale - self.scale) as u32;
        let scale_diff_other = (max_scale - other.scale) as u32;

        // i256 leaves headroom for rescaling any i128 by up to 10^38.
        let l_scaled =
            i256::from_i128(self.value).wrapping_mul(POW10_BASE.wrapping_pow(scale_diff_self));
        let r_scaled =
            i256::from_i128(other.value).wrapping_mul(POW10_BASE.wrapping_pow(scale_diff_other));

        l_scaled.cmp(&r_scaled)
    }
}

fn digit_count_i256(mut value: i256) -> u8 {
    if value == i256::ZERO {
        return 1;
    }
    if value < i256::ZERO {
        value = value.wrapping_neg();
    }
    let mut count: u8 = 0;
    while value != i256::ZERO {
        value = value.wrapping_div(POW10_BASE);
        count += 1;
    }
    count
}

fn digit_buffer(value: i256) -> String {
    if value == i256::ZERO {
        return "0".to_owned();
    }
    let mut current = if value < i256::ZERO {
        value.wrapping_neg()
    } else {
        value
    };
    let mut buf = Vec::new();
    while current != i256::ZERO {
        let rem = current.wrapping_rem(POW10_BASE).as_i128();
        buf.push(b'0' + rem as u8);
        current = current.wrapping_div(POW10_BASE);
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

fn scale_within_bounds(scale: i16) -> bool {
    let max = MAX_DECIMAL_PRECISION as i16;
    (-max..=max).contains(&scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_places_the_decimal_point() {
        assert_eq!(DecimalValue::new(12345, 2).unwrap().to_string(), "123.45");
        assert_eq!(DecimalValue::new(-5, 3).unwrap().to_string(), "-0.005");
        assert_eq!(DecimalValue::new(0, 2).unwrap().to_string(), "0.00");
        assert_eq!(DecimalValue::new(42, 0).unwrap().to_string(), "42");
        assert_eq!(DecimalValue::new(7, -2).unwrap().to_string(), "700");
    }

    #[test]
    fn compare_across_scales() {
        let a = DecimalValue::new(150, 2).unwrap();
        let b = DecimalValue::new(15, 1).unwrap();
        let c = DecimalValue::new(-25, 2).unwrap();
        assert_eq!(a, b);
        assert!(c < b);
        assert_eq!(c.to_string(), "-0.25");
    }

    #[test]
    fn out_of_range_parts_are_rejected() {
        assert_eq!(
            DecimalValue::new(1, 40),
            Err(DecimalError::ScaleOutOfRange { scale: 40 })
        );
        assert!(matches!(
            DecimalValue::new(i128::MAX, 0),
            Err(DecimalError::PrecisionOverflow { .. })
        ));
    }
}
