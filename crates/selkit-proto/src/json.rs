use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use selkit_common::warning::warn_once;

use crate::error::ProtoError;
use crate::prototype::Prototype;

/// Serialize `value` to compact JSON.
///
/// # Errors
///
/// Returns [`ProtoError::Json`] if `value` cannot be represented as JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ProtoError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse `json` into a `T` by field name.
///
/// # Errors
///
/// Returns [`ProtoError::Json`] if `json` is malformed or does not match `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ProtoError> {
    Ok(serde_json::from_str(json)?)
}

/// Rebuild a `T` by passing the record's values to its constructor in
/// document order. Field names are not consulted.
///
/// ```
/// use selkit_proto::{Rectangle, from_json_with_prototype};
///
/// # fn main() -> Result<(), selkit_proto::ProtoError> {
/// let rect: Rectangle = from_json_with_prototype(r#"{"w": 3, "h": 4}"#)?;
/// assert!((rect.area() - 12.0).abs() < f64::EPSILON);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`ProtoError::Json`] for malformed input, [`ProtoError::NotAnObject`]
/// if the top-level value is not an object, and the constructor's own error
/// if the values do not fit it.
pub fn from_json_with_prototype<T: Prototype>(json: &str) -> Result<T, ProtoError> {
    let args = positional_args(json, T::TYPE_NAME, T::ARITY)?;
    T::construct(&args)
}

/// Parse `json` as an object record and return its values in order.
///
/// Values past `arity` are kept (and ignored by the constructor) but
/// reported once per type and count.
pub(crate) fn positional_args(
    json: &str,
    type_name: &str,
    arity: usize,
) -> Result<Vec<Value>, ProtoError> {
    let Value::Object(record) = serde_json::from_str::<Value>(json)? else {
        return Err(ProtoError::NotAnObject);
    };

    if record.len() > arity {
        warn_once(
            "Proto",
            &format!(
                "{type_name} takes {arity} arguments, ignoring {} extra record values",
                record.len() - arity
            ),
        );
    }

    Ok(record.into_values().collect())
}
