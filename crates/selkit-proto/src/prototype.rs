use serde_json::Value;

use crate::error::ProtoError;

/// A type that can be rebuilt from an ordered list of constructor arguments.
///
/// Implementations read `args` positionally; values past [`Prototype::ARITY`]
/// are ignored by the callers in this crate.
pub trait Prototype: Sized {
    /// Name the type is registered under.
    const TYPE_NAME: &'static str;

    /// Number of constructor arguments.
    const ARITY: usize;

    /// Build a value from positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ProtoError::MissingArgument`] or [`ProtoError::InvalidArgument`]
    /// when `args` does not fit the constructor.
    fn construct(args: &[Value]) -> Result<Self, ProtoError>;
}

/// Read argument `index` as a number.
///
/// # Errors
///
/// Returns [`ProtoError::MissingArgument`] if `args` is too short and
/// [`ProtoError::InvalidArgument`] if the value is not a JSON number.
pub fn number_arg(
    type_name: &'static str,
    args: &[Value],
    index: usize,
) -> Result<f64, ProtoError> {
    let value = args
        .get(index)
        .ok_or(ProtoError::MissingArgument { type_name, index })?;
    value.as_f64().ok_or(ProtoError::InvalidArgument {
        type_name,
        index,
        expected: "number",
    })
}
