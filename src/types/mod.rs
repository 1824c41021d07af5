mod number;
pub mod record;
mod value;

pub use self::number::Number;
pub use self::record::Record;
pub use self::value::{Decimal, Error as ValueError, Sequence, Value, ValueKind};
