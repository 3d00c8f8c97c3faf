//! CSS selector string construction for selkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Builder** ([Selectors Level 4 § 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class, and pseudo-element parts
//!   - Grammar order enforcement (type before ID before class, and so on)
//!   - Single-occurrence checks for type, ID, and pseudo-element parts
//!
//! - **Combinators** ([Selectors Level 4 § 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Joining two built selectors with a combinator token
//!
//! # Not Implemented
//!
//! - Selector parsing or matching (strings are only built, never read back)
//! - Validation of the part values themselves
//!
//! # Example
//!
//! ```
//! use selkit_css::selector::{combine, element, id};
//!
//! # fn main() -> Result<(), selkit_css::SelectorError> {
//! let rendered = id("main").class("container")?.class("editable")?.stringify();
//! assert_eq!(rendered, "#main.container.editable");
//!
//! let sibling = combine(
//!     element("div").id("main")?,
//!     "+",
//!     element("table").id("data")?,
//! )
//! .stringify();
//! assert_eq!(sibling, "div#main + table#data");
//! # Ok(())
//! # }
//! ```

/// Errors raised while building a selector.
pub mod error;
/// Selector builder, categories, and combinators per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{Category, Combinator, SelectorBuilder};
