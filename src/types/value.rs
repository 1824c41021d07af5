//! Primitive dynamic value types.

pub use rust_decimal::Decimal;

use serde::Deserialize;
use serde::Serialize;
use strum::{AsRefStr, EnumDiscriminants};
use thiserror::Error;

use crate::types::Record;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("cannot convert value of kind {} into target type", .0.as_ref())]
    CannotConvert(ValueKind),
    #[error("value of kind {} is out of range for {}", .0.as_ref(), .1)]
    OutOfRange(ValueKind, &'static str),
    #[error("string could not be parsed as {0}")]
    Unparsable(&'static str),
}

pub type Sequence = Vec<Value>;

/// Represents the types of data that can be stored in a record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, EnumDiscriminants)]
#[serde(untagged)]
#[strum_discriminants(name(ValueKind), derive(Hash, AsRefStr))]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Boolean(bool),
    Decimal(Decimal),
    Sequence(Sequence),
    Mapping(Record),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        self.into()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Mapping(value)
    }
}
