use sovran_any::{any_cast, make_any, AnyError, AnyValue, TypeId};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
struct Widget {
    size: i32,
    label: String,
}

impl From<(i32, &str)> for Widget {
    fn from((size, label): (i32, &str)) -> Self {
        Self {
            size,
            label: label.to_string(),
        }
    }
}

trait Shape {
    fn area(&self) -> f64;
}

#[derive(Clone)]
struct Square(f64);

impl Shape for Square {
    fn area(&self) -> f64 {
        self.0 * self.0
    }
}

#[test]
fn test_integer_scenario() {
    let value = AnyValue::new(42i32);

    assert!(value.has_value());
    assert_eq!(value.type_id(), Some(TypeId::of::<i32>()));
    assert_eq!(any_cast::<i32>(&value), Ok(&42));
    assert!(matches!(
        any_cast::<String>(&value),
        Err(AnyError::BadCast { .. })
    ));
}

#[test]
fn test_empty_then_string_scenario() -> Result<(), AnyError> {
    let mut value = AnyValue::default();
    assert!(!value.has_value());

    value.reset();
    assert!(!value.has_value());

    value.set(String::from("hello"));
    assert!(value.has_value());
    assert_eq!(any_cast::<String>(&value)?, "hello");

    Ok(())
}

#[test]
fn test_emplace_struct_scenario() -> Result<(), AnyError> {
    let mut value = AnyValue::new(100i32);

    value.emplace::<Widget, _>((3, "x"));

    let widget = any_cast::<Widget>(&value)?;
    assert_eq!(widget.size, 3);
    assert_eq!(widget.label, "x");
    assert!(any_cast::<i32>(&value).is_err());

    Ok(())
}

#[test]
fn test_multiple_types() -> Result<(), AnyError> {
    let values = vec![
        AnyValue::new(42i32),
        AnyValue::new("borrowed"),
        AnyValue::new(String::from("owned")),
        AnyValue::new(vec![1.0f64, 2.0]),
        AnyValue::new(HashMap::from([("k".to_string(), 1u8)])),
        AnyValue::new(Some(7u16)),
    ];

    assert_eq!(*values[0].downcast_ref::<i32>()?, 42);
    assert_eq!(*values[1].downcast_ref::<&str>()?, "borrowed");
    assert_eq!(values[2].downcast_ref::<String>()?, "owned");
    assert_eq!(values[3].downcast_ref::<Vec<f64>>()?.len(), 2);
    assert_eq!(values[4].downcast_ref::<HashMap<String, u8>>()?["k"], 1);
    assert_eq!(values[5].downcast_ref::<Option<u16>>()?, &Some(7));

    // &str and String are different types
    assert!(values[1].downcast_ref::<String>().is_err());
    assert!(values[2].downcast_ref::<&str>().is_err());

    // Option<u16> is not u16
    assert!(values[5].downcast_ref::<u16>().is_err());

    Ok(())
}

#[test]
fn test_numeric_types_do_not_convert() {
    let value = AnyValue::new(1u32);

    assert!(value.downcast_ref::<u32>().is_ok());
    assert!(value.downcast_ref::<i32>().is_err());
    assert!(value.downcast_ref::<u64>().is_err());
    assert!(value.downcast_ref::<usize>().is_err());
}

#[test]
fn test_trait_object_is_distinct_from_concrete() -> Result<(), AnyError> {
    let boxed: std::rc::Rc<dyn Shape> = std::rc::Rc::new(Square(2.0));
    let value = AnyValue::new(boxed);

    // Only the exact stored type works, not the concrete type behind it
    assert!(value.downcast_ref::<Square>().is_err());
    let shape = value.downcast_ref::<std::rc::Rc<dyn Shape>>()?;
    assert_eq!(shape.area(), 4.0);

    Ok(())
}

#[test]
fn test_make_any_from_conversion() -> Result<(), AnyError> {
    let value = make_any::<Vec<u8>, _>("bytes");

    assert_eq!(value.downcast_ref::<Vec<u8>>()?, b"bytes");
    assert!(value.downcast_ref::<&str>().is_err());

    Ok(())
}

#[test]
fn test_error_messages() {
    let value = AnyValue::new(5u8);

    let err = value.downcast_ref::<bool>().unwrap_err();
    assert_eq!(err.to_string(), "bad any cast: expected `bool`, found `u8`");

    let empty = AnyValue::new_empty();
    let err = empty.downcast_ref::<bool>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad any cast: expected `bool`, container is empty"
    );
}

#[test]
fn test_heterogeneous_registry() -> Result<(), AnyError> {
    let mut registry: HashMap<&str, AnyValue> = HashMap::new();
    registry.insert("retries", AnyValue::new(3u32));
    registry.insert("name", AnyValue::new(String::from("svc")));

    let snapshot = registry.clone();

    if let Some(retries) = registry.get_mut("retries") {
        *retries.downcast_mut::<u32>()? += 1;
    }

    assert_eq!(*registry["retries"].downcast_ref::<u32>()?, 4);
    assert_eq!(*snapshot["retries"].downcast_ref::<u32>()?, 3);
    assert_eq!(snapshot["name"].downcast_ref::<String>()?, "svc");

    Ok(())
}
