use thiserror::Error;

/// Failure to serialize a value or to rebuild one from a JSON record.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// The input was not valid JSON, or the value could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Positional reconstruction needs a JSON object record.
    #[error("expected a JSON object record")]
    NotAnObject,

    /// The record has fewer values than the constructor takes.
    #[error("{type_name} is missing constructor argument {index}")]
    MissingArgument {
        /// Registered name of the type being constructed.
        type_name: &'static str,
        /// Zero-based position of the missing argument.
        index: usize,
    },

    /// A record value has the wrong JSON type for its position.
    #[error("{type_name} constructor argument {index} must be a {expected}")]
    InvalidArgument {
        /// Registered name of the type being constructed.
        type_name: &'static str,
        /// Zero-based position of the argument.
        index: usize,
        /// JSON type the constructor accepts at this position.
        expected: &'static str,
    },

    /// No constructor is registered under this name.
    #[error("no prototype registered for type {0:?}")]
    UnknownType(String),

    /// The constructor registered under `expected` built some other type.
    #[error("prototype {expected} constructed a different type")]
    TypeMismatch {
        /// The type name that was looked up.
        expected: &'static str,
    },
}
