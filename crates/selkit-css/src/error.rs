use thiserror::Error;

use crate::selector::Category;

/// A malformed selector construction sequence.
///
/// Raised at the offending call. Parts appended before the failure stay on
/// the builder; nothing is rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// "If it contains a type selector or universal selector, that selector
    /// must come first in the sequence."
    ///
    /// `found` was appended after the higher-ranked `previous`.
    #[error(
        "selector parts must appear in order: element, id, class, attribute, pseudo-class, pseudo-element ({found} after {previous})"
    )]
    Order {
        /// The category of the rejected call.
        found: Category,
        /// The category appended most recently.
        previous: Category,
    },

    /// A second element, id, or pseudo-element part.
    #[error("element, id, and pseudo-element must not occur more than once ({0} repeated)")]
    Uniqueness(Category),

    /// A category part appended to a builder that holds a combined selector.
    #[error("cannot append {0} to a combined selector")]
    InvalidState(Category),
}

impl SelectorError {
    /// The category of the call that failed.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Order { found, .. } => *found,
            Self::Uniqueness(category) | Self::InvalidState(category) => *category,
        }
    }
}
