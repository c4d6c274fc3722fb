use std::any::{Any, TypeId};
use std::fmt;

/// Object-safe capability set for an erased value: duplicate itself and
/// expose itself as `Any` for downcasting.
pub(crate) trait CloneAny: Any {
    /// Clone the value into a new boxed trait object.
    fn clone_box(&self) -> Box<dyn CloneAny>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Convert into a boxed `Any` so the value can be moved out by type.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> CloneAny for T
where
    T: Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn CloneAny> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A heap-allocated, type-erased value together with its type identity
pub(crate) struct Holder {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn CloneAny>,
}

impl Holder {
    /// Box up a value of any clonable type, recording its type identity
    pub(crate) fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    pub(crate) fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if the contained value is exactly of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Get a reference to the contained value if it is of type T
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    /// Get a mutable reference to the contained value if it is of type T
    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.as_any_mut().downcast_mut::<T>()
    }

    /// Unbox the contained value, or give the holder back untouched if it is
    /// not of type T
    pub(crate) fn into_inner<T: 'static>(self) -> Result<T, Self> {
        if !self.is_type::<T>() {
            return Err(self);
        }
        match self.value.into_any().downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(_) => unreachable!("type id matched `{}`", std::any::type_name::<T>()),
        }
    }
}

impl Clone for Holder {
    fn clone(&self) -> Self {
        Self {
            type_id: self.type_id,
            type_name: self.type_name,
            value: self.value.clone_box(),
        }
    }
}

impl fmt::Debug for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holder")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Meters(f64);

    #[derive(Clone, Debug, PartialEq)]
    struct Feet(f64);

    #[test]
    fn type_identity_is_fixed_at_construction() {
        let holder = Holder::new(Meters(1.5));

        assert_eq!(holder.type_id(), TypeId::of::<Meters>());
        assert!(holder.type_name().ends_with("Meters"));
        assert!(holder.is_type::<Meters>());
        assert!(!holder.is_type::<Feet>());
    }

    #[test]
    fn same_layout_types_are_distinct() {
        let holder = Holder::new(Meters(3.0));

        assert!(holder.downcast_ref::<Feet>().is_none());
        assert_eq!(holder.downcast_ref::<Meters>(), Some(&Meters(3.0)));
    }

    #[test]
    fn clone_box_creates_independent_copy() {
        let original = Holder::new(vec![1, 2, 3]);
        let mut copy = original.clone();

        copy.downcast_mut::<Vec<i32>>().unwrap().push(4);

        assert_eq!(original.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
        assert_eq!(copy.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3, 4]));
        assert_eq!(copy.type_id(), original.type_id());
    }

    #[test]
    fn into_inner_moves_value_out() {
        let holder = Holder::new(String::from("owned"));
        assert_eq!(
            holder.into_inner::<String>().ok(),
            Some(String::from("owned"))
        );
    }

    #[test]
    fn into_inner_returns_holder_on_mismatch() {
        let holder = Holder::new(7u8);

        let holder = match holder.into_inner::<u16>() {
            Ok(_) => panic!("u8 should not unbox as u16"),
            Err(holder) => holder,
        };

        assert!(holder.is_type::<u8>());
        assert_eq!(holder.downcast_ref::<u8>(), Some(&7));
    }

    #[test]
    fn debug_shows_type_name() {
        let holder = Holder::new(42i32);
        assert_eq!(format!("{:?}", holder), "Holder { type_name: \"i32\", .. }");
    }
}
