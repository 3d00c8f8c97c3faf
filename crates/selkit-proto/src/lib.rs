//! Prototype utilities for selkit.
//!
//! # Scope
//!
//! This crate provides:
//! - **Shapes** - `Rectangle` and `Circle` value types with a derived area
//! - **JSON** - thin wrappers over `serde_json` serialization
//! - **Prototypes** - rebuilding a typed value from a JSON record by passing
//!   the record's values, in document order, to the type's constructor
//! - **Registry** - constructors looked up by type name
//!
//! # Example
//!
//! ```
//! use selkit_proto::{Circle, from_json_with_prototype, to_json};
//!
//! # fn main() -> Result<(), selkit_proto::ProtoError> {
//! let circle: Circle = from_json_with_prototype(r#"{"radius": 10}"#)?;
//! assert!((circle.radius() - 10.0).abs() < f64::EPSILON);
//! assert_eq!(to_json(&circle)?, r#"{"radius":10.0}"#);
//! # Ok(())
//! # }
//! ```

/// Errors raised while serializing or reconstructing values.
pub mod error;
/// JSON serialization wrappers and positional reconstruction.
pub mod json;
/// The `Prototype` trait and argument helpers.
pub mod prototype;
/// Constructor lookup by type name.
pub mod registry;
/// Shape value types.
pub mod shapes;

// Re-exports for convenience
pub use error::ProtoError;
pub use json::{from_json, from_json_with_prototype, to_json};
pub use prototype::Prototype;
pub use registry::PrototypeRegistry;
pub use shapes::{Circle, Rectangle};
