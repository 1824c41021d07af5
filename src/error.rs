use thiserror::Error;

use crate::types::ValueError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("unable to construct target instance: {0}")]
    Construction(String),
    #[error("value for field {field} has an incompatible type")]
    TypeMismatch {
        field: &'static str,
        #[source]
        source: ValueError,
    },
}
