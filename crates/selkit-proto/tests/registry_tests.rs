//! Tests for constructor lookup by type name.

use selkit_proto::prototype::{Prototype, number_arg};
use selkit_proto::{Circle, ProtoError, PrototypeRegistry, Rectangle};
use serde_json::Value;

/// Shares `Circle`'s name to exercise the mismatch path.
#[derive(Debug)]
struct Impostor;

impl Prototype for Impostor {
    const TYPE_NAME: &'static str = "Circle";
    const ARITY: usize = 0;

    fn construct(_args: &[Value]) -> Result<Self, ProtoError> {
        Ok(Self)
    }
}

/// A prototype defined outside the crate.
#[derive(Debug)]
struct Square {
    side: f64,
}

impl Prototype for Square {
    const TYPE_NAME: &'static str = "Square";
    const ARITY: usize = 1;

    fn construct(args: &[Value]) -> Result<Self, ProtoError> {
        Ok(Self {
            side: number_arg(Self::TYPE_NAME, args, 0)?,
        })
    }
}

#[test]
fn test_builtin_registry() {
    let registry = PrototypeRegistry::with_builtin();
    assert!(registry.contains("Rectangle"));
    assert!(registry.contains("Circle"));
    assert!(!registry.contains("Square"));
    assert_eq!(registry.type_names(), vec!["Circle", "Rectangle"]);
}

#[test]
fn test_empty_registry() {
    let registry = PrototypeRegistry::default();
    assert!(registry.type_names().is_empty());
    assert!(matches!(
        registry.construct("Rectangle", "{}"),
        Err(ProtoError::UnknownType(name)) if name == "Rectangle"
    ));
}

#[test]
fn test_construct_by_name() -> Result<(), ProtoError> {
    let registry = PrototypeRegistry::with_builtin();
    let value = registry.construct("Rectangle", r#"{"w": 2, "h": 5}"#)?;
    let rect = value.downcast_ref::<Rectangle>();
    assert_eq!(rect, Some(&Rectangle::new(2.0, 5.0)));
    Ok(())
}

#[test]
fn test_construct_as() -> Result<(), ProtoError> {
    let registry = PrototypeRegistry::with_builtin();
    let circle: Circle = registry.construct_as(r#"{"radius": 1.5}"#)?;
    assert_eq!(circle, Circle::new(1.5));
    Ok(())
}

#[test]
fn test_register_custom_prototype() -> Result<(), ProtoError> {
    let mut registry = PrototypeRegistry::new();
    registry.register::<Square>();
    let square: Square = registry.construct_as(r#"{"side": 9}"#)?;
    assert!((square.side - 9.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_construct_as_type_mismatch() {
    let mut registry = PrototypeRegistry::new();
    registry.register::<Impostor>();

    let result = registry.construct_as::<Circle>(r#"{"radius": 1}"#);
    assert!(matches!(
        result,
        Err(ProtoError::TypeMismatch { expected: "Circle" })
    ));
}

#[test]
fn test_later_registration_replaces_earlier() {
    let mut registry = PrototypeRegistry::with_builtin();
    registry.register::<Impostor>();
    assert!(registry.construct_as::<Impostor>("{}").is_ok());
    assert!(registry.construct_as::<Circle>(r#"{"radius": 1}"#).is_err());
    assert_eq!(registry.type_names().len(), 2);
}

#[test]
fn test_constructor_errors_propagate() {
    let registry = PrototypeRegistry::with_builtin();
    let result = registry.construct("Circle", r#"{"radius": null}"#);
    assert!(matches!(
        result,
        Err(ProtoError::InvalidArgument {
            type_name: "Circle",
            index: 0,
            expected: "number",
        })
    ));
}
