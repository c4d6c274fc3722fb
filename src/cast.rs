use crate::error::Result;
use crate::value::AnyValue;

/// Gets a reference to the value held by `value` as type T
///
/// Equivalent to [`AnyValue::downcast_ref`].
///
/// # Errors
///
/// - Returns `AnyError::Empty` if the container holds nothing
/// - Returns `AnyError::BadCast` if the held value is not exactly a `T`
///
/// # Examples
///
/// ```
/// use sovran_any::{any_cast, AnyError, AnyValue};
///
/// let value = AnyValue::new(2.5f32);
/// assert_eq!(*any_cast::<f32>(&value)?, 2.5);
/// assert!(any_cast::<f64>(&value).is_err());
/// # Ok::<(), AnyError>(())
/// ```
pub fn any_cast<T: 'static>(value: &AnyValue) -> Result<&T> {
    value.downcast_ref::<T>()
}

/// Gets a mutable reference to the value held by `value` as type T
///
/// # Errors
///
/// - Returns `AnyError::Empty` if the container holds nothing
/// - Returns `AnyError::BadCast` if the held value is not exactly a `T`
pub fn any_cast_mut<T: 'static>(value: &mut AnyValue) -> Result<&mut T> {
    value.downcast_mut::<T>()
}

/// Builds a `T` from `args` and returns a new container holding it
///
/// # Examples
///
/// ```
/// use sovran_any::{make_any, AnyError};
///
/// let value = make_any::<String, _>("built in place");
/// assert_eq!(value.downcast_ref::<String>()?, "built in place");
/// # Ok::<(), AnyError>(())
/// ```
pub fn make_any<T, A>(args: A) -> AnyValue
where
    T: From<A> + Clone + 'static,
{
    let mut value = AnyValue::new_empty();
    value.emplace::<T, A>(args);
    value
}
