//! Wrapper type for values that behave either as an integer or a decimal.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Number {
    Integer(i64),
    Decimal(Decimal),
}

impl Number {
    /// Returns the whole value this number represents, or `None` if it has a
    /// fractional part. Every `Decimal` whole value fits in an `i128`.
    pub fn to_i128(&self) -> Option<i128> {
        match self {
            Self::Integer(i) => Some(i128::from(*i)),
            Self::Decimal(d) => {
                let normal = d.normalize();

                if normal.scale() == 0 { Some(normal.mantissa()) }
                else { None }
            },
        }
    }

    pub fn to_decimal(&self) -> Decimal {
        match self {
            Self::Integer(i) => Decimal::from(*i),
            Self::Decimal(d) => *d,
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => i.to_f64(),
            Self::Decimal(d) => d.to_f64(),
        }
    }

    /// Parses a number from a string, preferring an integer representation.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        s.parse::<i64>().map(Self::Integer).ok()
            .or_else(|| s.parse::<Decimal>().map(Self::Decimal).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    #[test]
    fn number_to_i128() {
        let inputs_and_expected = vec![
            (Number::Integer(-4), Some(-4)),
            (Number::Integer(i64::MIN), Some(i128::from(i64::MIN))),
            (Number::Decimal(dec!(7)), Some(7)),
            (Number::Decimal(dec!(7.000)), Some(7)),
            (Number::Decimal(dec!(-120)), Some(-120)),
            (Number::Decimal(dec!(7.5)), None),
            (Number::Decimal(dec!(-0.1)), None),
            (Number::Decimal(Decimal::from(u64::MAX)), Some(i128::from(u64::MAX))),
            (Number::Decimal(dec!(99999999999999999999)), Some(99999999999999999999)),
        ];

        for (input, expected) in inputs_and_expected {
            assert_eq!(expected, input.to_i128());
        }
    }

    #[test]
    fn number_parse() {
        let inputs_and_expected = vec![
            ("42", Some(Number::Integer(42))),
            (" -3 ", Some(Number::Integer(-3))),
            ("3.25", Some(Number::Decimal(dec!(3.25)))),
            ("abc", None),
            ("", None),
        ];

        for (input, expected) in inputs_and_expected {
            assert_eq!(expected, Number::parse(input));
        }
    }

    #[test]
    fn number_to_decimal_and_float() {
        assert_eq!(dec!(5), Number::Integer(5).to_decimal());
        assert_eq!(Some(2.5), Number::Decimal(dec!(2.5)).to_f64());
        assert_eq!(Some(-1.0), Number::Integer(-1).to_f64());
    }
}
