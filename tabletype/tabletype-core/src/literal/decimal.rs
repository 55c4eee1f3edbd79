use std::fmt;

/// Largest number of decimal digits a [`Decimal`] can carry.
pub const MAX_DECIMAL_PRECISION: u32 = 38;

/// Fixed-point decimal stored as an unscaled integer and a scale.
///
/// The represented value is `unscaled * 10^-scale`. Two decimals are equal only
/// when both the unscaled value and the scale match, so `1.0` and `1.00` differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: i128,
    scale: u32,
}

impl Decimal {
    pub fn new(unscaled: i128, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    pub fn unscaled(&self) -> i128 {
        self.unscaled
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Number of significant digits in the unscaled value (at least 1).
    pub fn precision(&self) -> u32 {
        self.unscaled
            .unsigned_abs()
            .checked_ilog10()
            .map_or(1, |digits| digits + 1)
    }

    /// Whether this value fits a `decimal(precision, self.scale())` column.
    pub fn fits_precision(&self, precision: u32) -> bool {
        self.precision() <= precision
    }

    /// Parse a plain decimal string such as `-12.50`. Exponents are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, body) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let mut unscaled: i128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            if !b.is_ascii_digit() {
                return None;
            }
            unscaled = unscaled
                .checked_mul(10)?
                .checked_add(i128::from(b - b'0'))?;
        }
        let scale = u32::try_from(frac_part.len()).ok()?;
        let unscaled = if negative { -unscaled } else { unscaled };
        Some(Self::new(unscaled, scale))
    }

    /// Convert a float through its shortest decimal rendering, rounding half-up.
    pub fn from_f64(value: f64, scale: u32) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Self::parse(&value.to_string())?.round_half_up(scale)
    }

    pub fn from_f32(value: f32, scale: u32) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Self::parse(&value.to_string())?.round_half_up(scale)
    }

    /// Change the scale without losing digits; fails if the value would be truncated.
    pub fn rescale(&self, scale: u32) -> Option<Self> {
        if scale >= self.scale {
            let factor = pow10(scale - self.scale)?;
            Some(Self::new(self.unscaled.checked_mul(factor)?, scale))
        } else {
            let Some(factor) = pow10(self.scale - scale) else {
                return (self.unscaled == 0).then_some(Self::new(0, scale));
            };
            if self.unscaled % factor != 0 {
                return None;
            }
            Some(Self::new(self.unscaled / factor, scale))
        }
    }

    /// Change the scale, rounding dropped digits half away from zero.
    pub fn round_half_up(&self, scale: u32) -> Option<Self> {
        if scale >= self.scale {
            return self.rescale(scale);
        }
        // Dropping 39 or more digits leaves less than half a unit of any i128 value.
        let Some(factor) = pow10(self.scale - scale) else {
            return Some(Self::new(0, scale));
        };
        let quotient = self.unscaled / factor;
        let remainder = self.unscaled % factor;
        let rounded = if remainder.unsigned_abs() * 2 >= factor.unsigned_abs() {
            quotient + self.unscaled.signum()
        } else {
            quotient
        };
        Some(Self::new(rounded, scale))
    }
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.unsigned_abs().to_string();
        let sign = if self.unscaled < 0 { "-" } else { "" };
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int_part}.{frac_part}")
        } else {
            write!(f, "{sign}0.{digits:0>scale$}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_keep_scale() {
        let d = Decimal::parse("-12.50").unwrap();
        assert_eq!(d.unscaled(), -1250);
        assert_eq!(d.scale(), 2);
        assert_eq!(d.to_string(), "-12.50");
        assert_eq!(Decimal::new(5, 3).to_string(), "0.005");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Decimal::parse("").is_none());
        assert!(Decimal::parse("-").is_none());
        assert!(Decimal::parse(".").is_none());
        assert!(Decimal::parse("1e5").is_none());
        assert!(Decimal::parse("1.2.3").is_none());
    }

    #[test]
    fn rounding_is_half_up() {
        let d = Decimal::parse("1.005").unwrap();
        assert_eq!(d.round_half_up(2), Some(Decimal::new(101, 2)));
        let d = Decimal::parse("-1.005").unwrap();
        assert_eq!(d.round_half_up(2), Some(Decimal::new(-101, 2)));
        assert_eq!(Decimal::from_f64(1.005, 2), Some(Decimal::new(101, 2)));
    }

    #[test]
    fn rounding_past_i128_digits_yields_zero() {
        let tiny = Decimal::new(12345678901234567, 41);
        assert_eq!(tiny.round_half_up(2), Some(Decimal::new(0, 2)));
        assert_eq!(
            Decimal::new(-1, 60).round_half_up(0),
            Some(Decimal::new(0, 0))
        );
        assert_eq!(tiny.rescale(2), None);
        assert_eq!(Decimal::new(0, 60).rescale(2), Some(Decimal::new(0, 2)));
    }

    #[test]
    fn rescale_refuses_truncation() {
        let d = Decimal::new(1234, 2);
        assert_eq!(d.rescale(4), Some(Decimal::new(123400, 4)));
        assert_eq!(d.rescale(1), None);
        assert_eq!(Decimal::new(1230, 2).rescale(1), Some(Decimal::new(123, 1)));
    }

    #[test]
    fn precision_counts_digits() {
        assert_eq!(Decimal::new(0, 2).precision(), 1);
        assert_eq!(Decimal::new(-999, 0).precision(), 3);
        assert_eq!(Decimal::new(1000, 0).precision(), 4);
    }
}
