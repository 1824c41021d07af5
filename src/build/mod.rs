//! Building typed objects out of records.
//!
//! A target type opts in by implementing [`Buildable`], which exposes a static
//! table of its settable field names and a setter keyed by those names. The
//! [`buildable!`](crate::buildable) macro generates both from a list of
//! `"Name" => field` pairs. The [`Builder`] then walks a source mapping, finds
//! the field each key refers to, and assigns the converted value.
//!
//! Keys with no matching field are ignored. Values that cannot be converted to
//! their field's type are ignored too, unless [`Leniency::Strict`] is selected.

mod convert;
mod macros;

pub use self::convert::{FromValue, convert_field};

use std::fmt::Display;

use crate::config::{BuildOptions, Leniency};
use crate::error::BuildError;
use crate::mapping::Mapping;
use crate::types::{Value, ValueError};

/// A type whose named fields can be assigned from values.
pub trait Buildable {
    /// Names of the settable fields, as they appear in source records.
    const FIELDS: &'static [&'static str];

    /// Converts and assigns `value` to the field called `name`.
    /// Returns `Ok(false)` if this type has no such field.
    fn set_field(&mut self, name: &str, value: &Value) -> Result<bool, ValueError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Builder {
    options: BuildOptions,
}

impl Builder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Creates a default instance of `T` and populates it from `source`.
    pub fn build<T, M>(&self, source: &M) -> Result<T, BuildError>
    where
        T: Buildable + Default,
        M: Mapping<Key = String, Value = Value> + ?Sized,
    {
        let mut target = T::default();
        self.build_into(&mut target, source)?;
        Ok(target)
    }

    /// Creates an instance of `T` with `factory` and populates it from `source`.
    /// A factory failure is reported as [`BuildError::Construction`].
    pub fn build_with<T, M, F, E>(&self, source: &M, factory: F) -> Result<T, BuildError>
    where
        T: Buildable,
        M: Mapping<Key = String, Value = Value> + ?Sized,
        F: FnOnce() -> Result<T, E>,
        E: Display,
    {
        let mut target = factory().map_err(|e| BuildError::Construction(e.to_string()))?;
        self.build_into(&mut target, source)?;
        Ok(target)
    }

    /// Populates an existing instance from `source`, in the source's iteration order.
    ///
    /// Assignment is not transactional. When [`Leniency::Strict`] stops on a
    /// mismatch, fields assigned from earlier entries keep their new values.
    /// [`Builder::build`] and [`Builder::build_with`] drop the partially built
    /// instance in that case.
    pub fn build_into<T, M>(&self, target: &mut T, source: &M) -> Result<(), BuildError>
    where
        T: Buildable,
        M: Mapping<Key = String, Value = Value> + ?Sized,
    {
        for (key, value) in source.entries() {
            let field = match self.resolve_field::<T>(key) {
                Some(field) => field,
                None => {
                    tracing::debug!(key = key.as_str(), "skipping entry, no matching field");
                    continue;
                },
            };

            match target.set_field(field, value) {
                Ok(true) => {
                    tracing::trace!(field, "assigned field");
                },
                Ok(false) => {
                    tracing::debug!(field, "field listed but not settable, skipping");
                },
                Err(source) => match self.options.leniency {
                    Leniency::Lenient => {
                        tracing::debug!(field, error = %source, "skipping entry, value not convertible");
                    },
                    Leniency::Strict => return Err(BuildError::TypeMismatch { field, source }),
                },
            }
        }

        Ok(())
    }

    fn resolve_field<T: Buildable>(&self, key: &str) -> Option<&'static str> {
        T::FIELDS.iter()
            .copied()
            .find(|field_name| self.options.matching.matches(field_name, key))
    }
}

/// Builds a `T` from `source` with the default options: exact name matching,
/// and unconvertible values skipped.
pub fn build_from_mapping<T, M>(source: &M) -> T
where
    T: Buildable + Default,
    M: Mapping<Key = String, Value = Value> + ?Sized,
{
    // Lenient building never fails.
    Builder::default().build(source).unwrap_or_default()
}
