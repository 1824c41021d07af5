//! Options controlling how records are mapped onto typed objects, settable
//! both programmatically and from deserialized configuration.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// How record keys are compared against field names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NameMatching {
    Exact,
    /// ASCII case-insensitive comparison.
    IgnoreCase,
}

impl NameMatching {
    pub fn matches(&self, field_name: &str, key: &str) -> bool {
        match *self {
            Self::Exact => field_name == key,
            Self::IgnoreCase => field_name.eq_ignore_ascii_case(key),
        }
    }
}

impl Default for NameMatching {
    fn default() -> Self {
        NameMatching::Exact
    }
}

/// What happens when a record value cannot be converted to its field's type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Leniency {
    /// The entry is skipped and the field keeps its current value.
    Lenient,
    /// Building fails with a type mismatch error.
    Strict,
}

impl Default for Leniency {
    fn default() -> Self {
        Leniency::Lenient
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub matching: NameMatching,
    pub leniency: Leniency,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matching(mut self, matching: NameMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn leniency(mut self, leniency: Leniency) -> Self {
        self.leniency = leniency;
        self
    }
}
