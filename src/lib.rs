//! Helper operations on key-value mappings.
//!
//! - [`MapExt`] adds flattening, merging, keyed inserts and reverse lookup to
//!   any [`Mapping`] (`HashMap`, `BTreeMap`, `IndexMap` and [`Record`]).
//! - [`Builder`] and [`build_from_mapping`] populate typed objects from
//!   records of dynamic [`Value`]s.

pub mod build;
pub mod config;
pub mod error;
pub mod mapping;
pub mod types;

pub use crate::build::{Buildable, Builder, FromValue, build_from_mapping};
pub use crate::config::{BuildOptions, Leniency, NameMatching};
pub use crate::error::BuildError;
pub use crate::mapping::{DuplicateKey, MapExt, Mapping, OrderedMapping, ValueGroup};
pub use crate::types::{Number, Record, Value, ValueError, ValueKind};
