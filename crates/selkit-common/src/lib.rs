//! Common utilities for the selkit crates.
//!
//! This crate provides shared infrastructure used by the selector builder and
//! the prototype utilities:
//! - **Warning System** - colored, deduplicated terminal output for inputs
//!   that are accepted but suspicious

pub mod warning;
