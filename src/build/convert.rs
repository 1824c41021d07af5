//! Best-effort conversions from dynamic values into concrete field types.

use std::any::type_name;
use std::convert::TryFrom;

use rust_decimal::Decimal;

use crate::types::{Number, Record, Value, ValueError};

/// A type that can be produced from a [`Value`], converting between
/// compatible representations where possible.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

/// Converts a value for assignment to a field. A null value yields the
/// field type's default.
#[doc(hidden)]
pub fn convert_field<F: FromValue + Default>(value: &Value) -> Result<F, ValueError> {
    if value.is_null() { Ok(F::default()) }
    else { F::from_value(value) }
}

fn cannot_convert<T>(value: &Value) -> Result<T, ValueError> {
    Err(ValueError::CannotConvert(value.kind()))
}

fn to_number(value: &Value) -> Result<Number, ValueError> {
    match value {
        Value::Integer(i) => Ok(Number::Integer(*i)),
        Value::Decimal(d) => Ok(Number::Decimal(*d)),
        Value::Boolean(b) => Ok(Number::Integer(*b as i64)),
        Value::String(s) => Number::parse(s).ok_or(ValueError::Unparsable("number")),
        _ => cannot_convert(value),
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Decimal(d) => Ok(d.to_string()),
            Value::Boolean(b) => Ok(b.to_string()),
            _ => cannot_convert(value),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(i) => Ok(*i != 0),
            Value::Decimal(d) => {
                let whole = Number::Decimal(*d).to_i128()
                    .ok_or(ValueError::OutOfRange(value.kind(), "bool"))?;

                Ok(whole != 0)
            },
            Value::String(s) => {
                let s = s.trim();

                if s.eq_ignore_ascii_case("true") { Ok(true) }
                else if s.eq_ignore_ascii_case("false") { Ok(false) }
                else { Err(ValueError::Unparsable("bool")) }
            },
            _ => cannot_convert(value),
        }
    }
}

macro_rules! integer_from_value {
    ($($int:ty),* $(,)?) => {
        $(
            impl FromValue for $int {
                fn from_value(value: &Value) -> Result<Self, ValueError> {
                    let out_of_range = || ValueError::OutOfRange(value.kind(), type_name::<$int>());

                    // Whole values are widened to `i128` first, so the full
                    // `u64` range is reachable through a decimal.
                    let whole = to_number(value)?.to_i128().ok_or_else(out_of_range)?;

                    <$int>::try_from(whole).map_err(|_| out_of_range())
                }
            }
        )*
    };
}

integer_from_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => s.trim().parse().map_err(|_| ValueError::Unparsable("f64")),
            _ => to_number(value)?.to_f64().ok_or(ValueError::OutOfRange(value.kind(), "f64")),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        let wide = f64::from_value(value)?;
        let narrow = wide as f32;

        if wide.is_finite() && !narrow.is_finite() {
            return Err(ValueError::OutOfRange(value.kind(), "f32"));
        }

        Ok(narrow)
    }
}

impl FromValue for Decimal {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        to_number(value).map(|n| n.to_decimal())
    }
}

impl FromValue for Number {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        to_number(value)
    }
}

impl FromValue for Record {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Mapping(record) => Ok(record.clone()),
            _ => cannot_convert(value),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            _ => T::from_value(value).map(Some),
        }
    }
}

// Sequences are converted element-wise, and fail on the first bad element.
impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Sequence(seq) => seq.iter().map(T::from_value).collect(),
            _ => cannot_convert(value),
        }
    }
}
