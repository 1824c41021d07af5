/// Implements [`Buildable`](crate::build::Buildable) for a struct, given pairs
/// of record key and field identifier.
///
/// ```
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     age: i32,
/// }
///
/// mapkit::buildable! {
///     Person {
///         "Name" => name,
///         "Age" => age,
///     }
/// }
/// ```
///
/// Every listed field type must implement [`FromValue`](crate::build::FromValue)
/// and `Default`; a null value resets the field to its default.
#[macro_export]
macro_rules! buildable {
    ($ty:ty { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::build::Buildable for $ty {
            const FIELDS: &'static [&'static str] = &[$($name),*];

            fn set_field(
                &mut self,
                name: &str,
                value: &$crate::types::Value,
            ) -> ::std::result::Result<bool, $crate::types::ValueError> {
                match name {
                    $(
                        $name => {
                            self.$field = $crate::build::convert_field(value)?;
                            Ok(true)
                        },
                    )*
                    _ => Ok(false),
                }
            }
        }
    };
}
