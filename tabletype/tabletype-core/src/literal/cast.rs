//! Conversion of literals to a target [`Type`].
//!
//! A conversion either produces a literal whose variant matches the target
//! type exactly, or `None` when the value is not representable. Integer
//! values never saturate or lose digits; integers convert to floating point
//! only when the result is exact. Narrowing a double to a float and turning a
//! floating-point value into a decimal round to the nearest representable
//! value (half-up for decimals).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use uuid::Uuid;

use super::{Decimal, Literal};
use crate::schema::{DecimalType, PrimitiveType, Type};

const MICROS_PER_DAY: i64 = 86_400_000_000;
const NANOS_PER_DAY: i64 = MICROS_PER_DAY * 1_000;

impl Literal {
    /// Convert this literal to `ty`, returning `None` when the value cannot be
    /// represented by that type.
    pub fn to(&self, ty: &Type) -> Option<Literal> {
        let Type::Primitive(target) = ty else {
            return None;
        };

        match self {
            Literal::Boolean(v) => match target {
                PrimitiveType::Boolean => Some(Literal::Boolean(*v)),
                _ => None,
            },
            Literal::Int(v) => match target {
                PrimitiveType::Int => Some(Literal::Int(*v)),
                PrimitiveType::Long => Some(Literal::Long(i64::from(*v))),
                PrimitiveType::Float => exact_f32(i64::from(*v)).map(Literal::Float),
                PrimitiveType::Double => Some(Literal::Double(f64::from(*v))),
                PrimitiveType::Date => Some(Literal::Date(*v)),
                PrimitiveType::Decimal(d) => {
                    fit_decimal(Decimal::new(i128::from(*v), 0).rescale(d.scale())?, d)
                }
                _ => None,
            },
            Literal::Long(v) => match target {
                PrimitiveType::Int => i32::try_from(*v).ok().map(Literal::Int),
                PrimitiveType::Long => Some(Literal::Long(*v)),
                PrimitiveType::Float => exact_f32(*v).map(Literal::Float),
                PrimitiveType::Double => exact_f64(*v).map(Literal::Double),
                PrimitiveType::Date => i32::try_from(*v).ok().map(Literal::Date),
                PrimitiveType::Time => Some(Literal::Time(*v)),
                PrimitiveType::Timestamp { .. } => Some(Literal::Timestamp(*v)),
                PrimitiveType::TimestampNs { .. } => Some(Literal::TimestampNanos(*v)),
                PrimitiveType::Decimal(d) => {
                    fit_decimal(Decimal::new(i128::from(*v), 0).rescale(d.scale())?, d)
                }
                _ => None,
            },
            Literal::Float(v) => match target {
                PrimitiveType::Float => Some(Literal::Float(*v)),
                PrimitiveType::Double => Some(Literal::Double(f64::from(*v))),
                PrimitiveType::Decimal(d) => fit_decimal(Decimal::from_f32(*v, d.scale())?, d),
                _ => None,
            },
            Literal::Double(v) => match target {
                PrimitiveType::Float => double_to_float(*v).map(Literal::Float),
                PrimitiveType::Double => Some(Literal::Double(*v)),
                PrimitiveType::Decimal(d) => fit_decimal(Decimal::from_f64(*v, d.scale())?, d),
                _ => None,
            },
            Literal::Date(v) => match target {
                PrimitiveType::Date => Some(Literal::Date(*v)),
                _ => None,
            },
            Literal::Time(v) => match target {
                PrimitiveType::Time => Some(Literal::Time(*v)),
                _ => None,
            },
            Literal::Timestamp(micros) => match target {
                PrimitiveType::Timestamp { .. } => Some(Literal::Timestamp(*micros)),
                PrimitiveType::TimestampNs { .. } => {
                    micros.checked_mul(1_000).map(Literal::TimestampNanos)
                }
                PrimitiveType::Date => {
                    i32::try_from(micros.div_euclid(MICROS_PER_DAY)).ok().map(Literal::Date)
                }
                _ => None,
            },
            Literal::TimestampNanos(nanos) => match target {
                PrimitiveType::TimestampNs { .. } => Some(Literal::TimestampNanos(*nanos)),
                PrimitiveType::Timestamp { .. } => {
                    Some(Literal::Timestamp(nanos.div_euclid(1_000)))
                }
                PrimitiveType::Date => {
                    i32::try_from(nanos.div_euclid(NANOS_PER_DAY)).ok().map(Literal::Date)
                }
                _ => None,
            },
            Literal::String(s) => string_to(s, target),
            Literal::Uuid(v) => match target {
                PrimitiveType::Uuid => Some(Literal::Uuid(*v)),
                _ => None,
            },
            Literal::Fixed(bytes) | Literal::Binary(bytes) => match target {
                PrimitiveType::Binary => Some(Literal::Binary(bytes.clone())),
                PrimitiveType::Fixed(len) if bytes.len() == *len as usize => {
                    Some(Literal::Fixed(bytes.clone()))
                }
                _ => None,
            },
            Literal::Decimal(v) => match target {
                PrimitiveType::Decimal(d) if v.scale() == d.scale() => fit_decimal(*v, d),
                _ => None,
            },
        }
    }
}

fn fit_decimal(value: Decimal, ty: &DecimalType) -> Option<Literal> {
    value
        .fits_precision(ty.precision())
        .then_some(Literal::Decimal(value))
}

fn exact_f32(v: i64) -> Option<f32> {
    let f = v as f32;
    (f as i128 == i128::from(v)).then_some(f)
}

fn exact_f64(v: i64) -> Option<f64> {
    let d = v as f64;
    (d as i128 == i128::from(v)).then_some(d)
}

fn double_to_float(v: f64) -> Option<f32> {
    if v.is_finite() && v.abs() > f64::from(f32::MAX) {
        return None;
    }
    Some(v as f32)
}

fn string_to(s: &str, target: &PrimitiveType) -> Option<Literal> {
    match target {
        PrimitiveType::String => Some(Literal::string(s)),
        PrimitiveType::Uuid => Uuid::parse_str(s).ok().map(Literal::Uuid),
        PrimitiveType::Date => {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
            days_from_date(date).map(Literal::Date)
        }
        PrimitiveType::Time => {
            let time = NaiveTime::parse_from_str(s, "%H:%M:%S%.f").ok()?;
            let micros = i64::from(time.num_seconds_from_midnight()) * 1_000_000
                + i64::from(time.nanosecond() / 1_000);
            Some(Literal::Time(micros))
        }
        PrimitiveType::Timestamp { adjust_to_utc } => {
            let ts = parse_timestamp(s, *adjust_to_utc)?;
            Some(Literal::Timestamp(ts.and_utc().timestamp_micros()))
        }
        PrimitiveType::TimestampNs { adjust_to_utc } => {
            let ts = parse_timestamp(s, *adjust_to_utc)?;
            ts.and_utc().timestamp_nanos_opt().map(Literal::TimestampNanos)
        }
        PrimitiveType::Decimal(d) => {
            let value = Decimal::parse(s)?;
            if value.scale() != d.scale() {
                return None;
            }
            fit_decimal(value, d)
        }
        _ => None,
    }
}

/// Zone-adjusted timestamps require an explicit offset; local ones forbid it.
fn parse_timestamp(s: &str, adjust_to_utc: bool) -> Option<NaiveDateTime> {
    if adjust_to_utc {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|ts| ts.naive_utc())
    } else {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}

fn epoch() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

fn days_from_date(date: NaiveDate) -> Option<i32> {
    i32::try_from(date.signed_duration_since(epoch()).num_days()).ok()
}

pub(super) fn date_from_days(days: i32) -> Option<NaiveDate> {
    epoch().checked_add_signed(TimeDelta::try_days(i64::from(days))?)
}

pub(super) fn time_from_micros(micros: i64) -> Option<NaiveTime> {
    let secs = u32::try_from(micros.div_euclid(1_000_000)).ok()?;
    let nanos = u32::try_from(micros.rem_euclid(1_000_000) * 1_000).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
}
