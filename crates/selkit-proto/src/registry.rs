use std::any::Any;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::ProtoError;
use crate::json::positional_args;
use crate::prototype::Prototype;
use crate::shapes::{Circle, Rectangle};

/// Type-erased positional constructor.
type Constructor = fn(&[Value]) -> Result<Box<dyn Any>, ProtoError>;

struct Entry {
    arity: usize,
    construct: Constructor,
}

fn construct_boxed<T: Prototype + 'static>(args: &[Value]) -> Result<Box<dyn Any>, ProtoError> {
    Ok(Box::new(T::construct(args)?))
}

/// Registry of prototype constructors keyed by type name.
///
/// Lets callers pick the target type at runtime from a name, e.g. one read
/// alongside the record.
pub struct PrototypeRegistry {
    constructors: HashMap<&'static str, Entry>,
}

impl PrototypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create a registry holding the shapes defined in this crate.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register::<Rectangle>();
        registry.register::<Circle>();
        registry
    }

    /// Register `T` under [`Prototype::TYPE_NAME`], replacing any previous
    /// constructor with that name.
    pub fn register<T: Prototype + 'static>(&mut self) {
        let _ = self.constructors.insert(
            T::TYPE_NAME,
            Entry {
                arity: T::ARITY,
                construct: construct_boxed::<T>,
            },
        );
    }

    /// Check if a constructor is registered under `type_name`.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// All registered type names, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.constructors.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Build the type registered as `type_name` from a JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`ProtoError::UnknownType`] if nothing is registered under
    /// `type_name`, otherwise the errors of
    /// [`from_json_with_prototype`](crate::json::from_json_with_prototype).
    pub fn construct(&self, type_name: &str, json: &str) -> Result<Box<dyn Any>, ProtoError> {
        let entry = self
            .constructors
            .get(type_name)
            .ok_or_else(|| ProtoError::UnknownType(type_name.to_string()))?;
        let args = positional_args(json, type_name, entry.arity)?;
        (entry.construct)(&args)
    }

    /// Build a `T` through the constructor registered under its type name.
    ///
    /// # Errors
    ///
    /// As [`PrototypeRegistry::construct`], plus [`ProtoError::TypeMismatch`]
    /// if a different type was registered under `T`'s name.
    pub fn construct_as<T: Prototype + 'static>(&self, json: &str) -> Result<T, ProtoError> {
        self.construct(T::TYPE_NAME, json)?
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| ProtoError::TypeMismatch {
                expected: T::TYPE_NAME,
            })
    }
}

impl Default for PrototypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
