use crate::error::{AnyError, Result};
use crate::holder::Holder;
use std::any::{type_name, TypeId};
use std::fmt;
use tracing::trace;

/// A container holding at most one value of any clonable type
///
/// The concrete type is erased when the value is stored and can only be
/// recovered by asking for exactly that type again. There is no conversion,
/// and two types with identical layout are still different types.
///
/// Every stored value lives in its own heap allocation. Cloning an `AnyValue`
/// deep-clones the held value through its own `Clone` impl.
///
/// Replacing a value (`set`, `emplace`, `emplace_with`, `clone_from`) builds the
/// new value first and only then drops the old one, so a constructor that
/// panics leaves the previous value in place.
///
/// `AnyValue` is neither `Send` nor `Sync`; held types need not be either.
///
/// # Examples
///
/// ```
/// use sovran_any::{AnyValue, AnyError};
///
/// let mut value = AnyValue::new(42i32);
/// assert!(value.has_value());
/// assert_eq!(value.downcast_ref::<i32>()?, &42);
/// assert!(matches!(
///     value.downcast_ref::<String>(),
///     Err(AnyError::BadCast { .. })
/// ));
///
/// value.set(String::from("hello"));
/// assert_eq!(value.downcast_ref::<String>()?, "hello");
/// # Ok::<(), AnyError>(())
/// ```
#[derive(Default)]
pub struct AnyValue {
    holder: Option<Holder>,
}

impl AnyValue {
    /// Creates a container holding `value`
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            holder: Some(Holder::new(value)),
        }
    }

    /// Creates a container holding nothing
    pub const fn new_empty() -> Self {
        Self { holder: None }
    }

    /// Replaces the held value (if any) with `value`
    pub fn set<T: Clone + 'static>(&mut self, value: T) {
        self.replace_holder(Some(Holder::new(value)));
    }

    /// Replaces the held value (if any) with a `T` built from `args`
    ///
    /// The target type is named explicitly and constructed through its
    /// `From` impl, so tuples work as constructor argument lists. Returns a
    /// mutable reference to the newly stored value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// impl From<(i32, i32)> for Point {
    ///     fn from((x, y): (i32, i32)) -> Self { Point { x, y } }
    /// }
    ///
    /// let mut value = AnyValue::new(1u8);
    /// let point = value.emplace::<Point, _>((3, 4));
    /// point.y += 1;
    /// assert_eq!(value.downcast_ref::<Point>().unwrap(), &Point { x: 3, y: 5 });
    /// assert!(value.downcast_ref::<u8>().is_err());
    /// ```
    pub fn emplace<T, A>(&mut self, args: A) -> &mut T
    where
        T: From<A> + Clone + 'static,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Replaces the held value (if any) with the result of `f`
    ///
    /// Returns a mutable reference to the newly stored value. If `f` panics
    /// the previous value is kept.
    pub fn emplace_with<T, F>(&mut self, f: F) -> &mut T
    where
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        let holder = Holder::new(f());
        self.replace_holder(Some(holder));
        match self.holder.as_mut().and_then(Holder::downcast_mut::<T>) {
            Some(value) => value,
            None => unreachable!("holder was just built from a `{}`", type_name::<T>()),
        }
    }

    /// Drops the held value, leaving the container empty
    ///
    /// Does nothing if the container is already empty.
    pub fn reset(&mut self) {
        if let Some(holder) = self.holder.take() {
            trace!(type_name = holder.type_name(), "released held value");
        }
    }

    /// Moves the held value into a new container, leaving this one empty
    pub fn take(&mut self) -> AnyValue {
        std::mem::take(self)
    }

    /// Exchanges the contents of two containers without cloning either value
    pub fn swap(&mut self, other: &mut AnyValue) {
        std::mem::swap(&mut self.holder, &mut other.holder);
    }

    /// Returns true if the container holds a value
    pub fn has_value(&self) -> bool {
        self.holder.is_some()
    }

    /// Returns the `TypeId` of the held value, or `None` if empty
    ///
    /// This shadows [`Any::type_id`](std::any::Any::type_id), which still
    /// reports `AnyValue` itself when called as `Any::type_id(&value)`.
    pub fn type_id(&self) -> Option<TypeId> {
        self.holder.as_ref().map(Holder::type_id)
    }

    /// Returns the type name of the held value, or `None` if empty
    ///
    /// The name is for diagnostics only; use [`AnyValue::is`] or
    /// [`AnyValue::type_id`] to compare types.
    pub fn type_name(&self) -> Option<&'static str> {
        self.holder.as_ref().map(Holder::type_name)
    }

    /// Returns true if the held value is exactly of type T
    pub fn is<T: 'static>(&self) -> bool {
        self.holder.as_ref().is_some_and(Holder::is_type::<T>)
    }

    /// Gets a reference to the held value as type T
    ///
    /// # Errors
    ///
    /// - Returns `AnyError::Empty` if the container holds nothing
    /// - Returns `AnyError::BadCast` if the held value is not exactly a `T`
    pub fn downcast_ref<T: 'static>(&self) -> Result<&T> {
        let holder = self.holder.as_ref().ok_or_else(empty::<T>)?;
        holder
            .downcast_ref::<T>()
            .ok_or_else(|| bad_cast::<T>(holder.type_name()))
    }

    /// Gets a mutable reference to the held value as type T
    ///
    /// # Errors
    ///
    /// - Returns `AnyError::Empty` if the container holds nothing
    /// - Returns `AnyError::BadCast` if the held value is not exactly a `T`
    pub fn downcast_mut<T: 'static>(&mut self) -> Result<&mut T> {
        let holder = self.holder.as_mut().ok_or_else(empty::<T>)?;
        let found = holder.type_name();
        holder
            .downcast_mut::<T>()
            .ok_or_else(|| bad_cast::<T>(found))
    }

    /// Moves the held value out as type T, leaving the container empty
    ///
    /// On error the container is left untouched.
    ///
    /// # Errors
    ///
    /// - Returns `AnyError::Empty` if the container holds nothing
    /// - Returns `AnyError::BadCast` if the held value is not exactly a `T`
    pub fn remove<T: 'static>(&mut self) -> Result<T> {
        let holder = self.holder.take().ok_or_else(empty::<T>)?;
        match holder.into_inner::<T>() {
            Ok(value) => Ok(value),
            Err(holder) => {
                let found = holder.type_name();
                self.holder = Some(holder);
                Err(bad_cast::<T>(found))
            }
        }
    }

    /// Consumes the container and returns the held value as type T
    ///
    /// Gives the container back unchanged if it is empty or holds a
    /// different type.
    pub fn downcast<T: 'static>(mut self) -> std::result::Result<T, AnyValue> {
        match self.remove::<T>() {
            Ok(value) => Ok(value),
            Err(_) => Err(self),
        }
    }

    fn replace_holder(&mut self, holder: Option<Holder>) {
        trace!(
            from = ?self.type_name(),
            to = ?holder.as_ref().map(Holder::type_name),
            "replacing held value"
        );
        self.holder = holder;
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            holder: self.holder.clone(),
        }
    }

    /// Replaces the held value with a deep clone of `source`'s value
    fn clone_from(&mut self, source: &Self) {
        let holder = source.holder.clone();
        self.replace_holder(holder);
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.holder {
            Some(holder) => f.debug_tuple("AnyValue").field(&holder.type_name()).finish(),
            None => f.write_str("AnyValue(<empty>)"),
        }
    }
}

fn empty<T: 'static>() -> AnyError {
    trace!(expected = type_name::<T>(), "cast on empty container");
    AnyError::Empty {
        expected: type_name::<T>(),
    }
}

fn bad_cast<T: 'static>(found: &'static str) -> AnyError {
    trace!(expected = type_name::<T>(), found, "cast type mismatch");
    AnyError::BadCast {
        expected: type_name::<T>(),
        found,
    }
}
