use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtoError;
use crate::prototype::{Prototype, number_arg};

/// An axis-aligned rectangle. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal extent.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Prototype for Rectangle {
    const TYPE_NAME: &'static str = "Rectangle";
    const ARITY: usize = 2;

    fn construct(args: &[Value]) -> Result<Self, ProtoError> {
        Ok(Self::new(
            number_arg(Self::TYPE_NAME, args, 0)?,
            number_arg(Self::TYPE_NAME, args, 1)?,
        ))
    }
}

/// A circle given by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Create a circle with the given radius.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Distance from the center to the edge.
    #[must_use]
    pub const fn radius(self) -> f64 {
        self.radius
    }

    /// `π * radius²`
    #[must_use]
    pub fn area(self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Prototype for Circle {
    const TYPE_NAME: &'static str = "Circle";
    const ARITY: usize = 1;

    fn construct(args: &[Value]) -> Result<Self, ProtoError> {
        Ok(Self::new(number_arg(Self::TYPE_NAME, args, 0)?))
    }
}
