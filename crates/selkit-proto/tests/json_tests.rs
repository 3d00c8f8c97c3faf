//! Tests for JSON serialization and positional reconstruction.

use selkit_common::warning::has_warned;
use selkit_proto::{Circle, ProtoError, Rectangle, from_json, from_json_with_prototype, to_json};

#[test]
fn test_rectangle_to_json() -> Result<(), ProtoError> {
    assert_eq!(to_json(&Rectangle::new(2.0, 3.0))?, r#"{"width":2.0,"height":3.0}"#);
    Ok(())
}

#[test]
fn test_to_json_plain_values() -> Result<(), ProtoError> {
    assert_eq!(to_json(&[1, 2, 3])?, "[1,2,3]");
    assert_eq!(to_json(&"quoted \"text\"")?, r#""quoted \"text\"""#);
    Ok(())
}

#[test]
fn test_from_json_by_field_name() -> Result<(), ProtoError> {
    let rect: Rectangle = from_json(r#"{"height": 4, "width": 3}"#)?;
    assert_eq!(rect, Rectangle::new(3.0, 4.0));
    Ok(())
}

#[test]
fn test_from_json_rejects_malformed_input() {
    let result: Result<Rectangle, ProtoError> = from_json("{\"width\": ");
    assert!(matches!(result, Err(ProtoError::Json(_))));
}

#[test]
fn test_prototype_uses_document_order() -> Result<(), ProtoError> {
    // Field names are ignored; the first value is the width
    let rect: Rectangle = from_json_with_prototype(r#"{"height": 4, "width": 3}"#)?;
    assert_eq!(rect, Rectangle::new(4.0, 3.0));
    Ok(())
}

#[test]
fn test_prototype_circle() -> Result<(), ProtoError> {
    let circle: Circle = from_json_with_prototype(r#"{"radius": 10}"#)?;
    assert_eq!(circle, Circle::new(10.0));
    Ok(())
}

#[test]
fn test_prototype_round_trips_serialized_rectangle() -> Result<(), ProtoError> {
    let original = Rectangle::new(7.5, 0.5);
    let rebuilt: Rectangle = from_json_with_prototype(&to_json(&original)?)?;
    assert_eq!(rebuilt, original);
    Ok(())
}

#[test]
fn test_prototype_missing_argument() {
    let result: Result<Rectangle, ProtoError> = from_json_with_prototype(r#"{"width": 3}"#);
    assert!(matches!(
        result,
        Err(ProtoError::MissingArgument {
            type_name: "Rectangle",
            index: 1,
        })
    ));
}

#[test]
fn test_prototype_invalid_argument() {
    let result: Result<Circle, ProtoError> = from_json_with_prototype(r#"{"radius": "ten"}"#);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Circle constructor argument 0 must be a number");
}

#[test]
fn test_prototype_requires_object() {
    let result: Result<Circle, ProtoError> = from_json_with_prototype("[10]");
    assert!(matches!(result, Err(ProtoError::NotAnObject)));
}

#[test]
fn test_prototype_ignores_extra_values_with_warning() -> Result<(), ProtoError> {
    let circle: Circle = from_json_with_prototype(r#"{"radius": 2, "color": "red"}"#)?;
    assert_eq!(circle, Circle::new(2.0));
    assert!(has_warned(
        "Proto",
        "Circle takes 1 arguments, ignoring 1 extra record values"
    ));
    Ok(())
}
