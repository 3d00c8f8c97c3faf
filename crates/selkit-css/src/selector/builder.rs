//! Fluent selector builder and its factory functions.

use std::fmt;

use selkit_common::warning::warn_once;

use super::{Category, Combinator};
use crate::error::SelectorError;

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// An in-progress compound selector, or the result of [`combine`].
///
/// Parts are stored already prefixed (`#main`, `.container`, `[href]`) and
/// rendered in category order. Rendering with [`SelectorBuilder::stringify`]
/// consumes the accumulated parts and leaves the builder empty.
///
/// ```
/// use selkit_css::selector::element;
///
/// # fn main() -> Result<(), selkit_css::SelectorError> {
/// let rendered = element("a")
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?
///     .stringify();
/// assert_eq!(rendered, r#"a[href$=".png"]:focus"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Category of the most recent append, `None` until the first one.
    last_category: Option<Category>,
    /// Set only by [`combine`]; the per-category fields stay empty.
    combined: Option<String>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh builder holding one part. A single part is always in order.
    fn seeded(category: Category, value: &str) -> Self {
        let mut builder = Self {
            last_category: Some(category),
            ..Self::default()
        };
        builder.put(category, value);
        builder
    }

    /// Append a part of any category.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::InvalidState`] if this builder holds a combined selector.
    /// - [`SelectorError::Order`] if `category` ranks below the previous part.
    /// - [`SelectorError::Uniqueness`] if `category` repeats a single-occurrence
    ///   category (element, id, pseudo-element).
    pub fn append(
        &mut self,
        category: Category,
        value: &str,
    ) -> Result<&mut Self, SelectorError> {
        self.advance(category)?;
        self.put(category, value);
        Ok(self)
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Repeatable: `class("a")` then `class("b")` renders `.a.b`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// `value` is the raw body between the brackets, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn attr(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// Check `category` against the previous part and record it.
    fn advance(&mut self, category: Category) -> Result<(), SelectorError> {
        if self.combined.is_some() {
            return Err(SelectorError::InvalidState(category));
        }

        if let Some(previous) = self.last_category {
            if category < previous {
                return Err(SelectorError::Order {
                    found: category,
                    previous,
                });
            }
            if category == previous && category.is_single_occurrence() {
                return Err(SelectorError::Uniqueness(category));
            }
        }

        self.last_category = Some(category);
        Ok(())
    }

    fn put(&mut self, category: Category, value: &str) {
        let part = format!("{}{value}{}", category.prefix(), category.suffix());

        #[cfg(feature = "selector-trace")]
        eprintln!("[SELECTOR] append {category} (rank {}): {part}", category.rank());

        match category {
            Category::Element => self.tag = Some(part),
            Category::Id => self.id = Some(part),
            Category::Class => self.classes.push(part),
            Category::Attribute => self.attributes.push(part),
            Category::PseudoClass => self.pseudo_classes.push(part),
            Category::PseudoElement => self.pseudo_element = Some(part),
        }
    }

    /// Render the selector and reset the builder to empty.
    ///
    /// A combined builder returns its combined selector. An empty builder
    /// returns `""`, so a second call right after the first does too.
    #[must_use = "stringify clears the builder; use `reset` to discard its parts"]
    pub fn stringify(&mut self) -> String {
        let rendered = self.to_string();
        self.reset();
        rendered
    }

    /// Discard every part, the combined result, and the ordering state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True if nothing has been appended and no combined selector is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined.is_none()
            && self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.pseudo_classes.is_empty()
            && self.pseudo_element.is_none()
    }

    /// True if this builder was produced by [`combine`] and not yet rendered.
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined.is_some()
    }
}

/// Renders without resetting; see [`SelectorBuilder::stringify`].
impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combined) = &self.combined {
            return f.write_str(combined);
        }

        // type#id.class[attr]:pseudo-class::pseudo-element
        let singles_before = self.tag.iter().chain(&self.id);
        let repeated = self
            .classes
            .iter()
            .chain(&self.attributes)
            .chain(&self.pseudo_classes);
        for part in singles_before.chain(repeated).chain(&self.pseudo_element) {
            f.write_str(part)?;
        }
        Ok(())
    }
}

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::Element, value)
}

/// Start a selector with an ID selector, e.g. `#main`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::Id, value)
}

/// Start a selector with a class selector, e.g. `.container`.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::Class, value)
}

/// Start a selector with an attribute selector; `value` is the bracket body.
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::Attribute, value)
}

/// Start a selector with a pseudo-class, e.g. `:focus`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::PseudoClass, value)
}

/// Start a selector with a pseudo-element, e.g. `::after`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::PseudoElement, value)
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Render `left` and `right` (resetting both) and join them as
/// `"{left} {combinator} {right}"` in a new builder.
///
/// The combinator is written verbatim between single spaces, so the
/// descendant combinator `" "` produces three spaces in a row. Tokens other
/// than the four CSS combinators are accepted with a warning.
///
/// Combined builders nest: combining a combined builder renders its whole
/// combined selector as one side.
#[must_use]
pub fn combine(
    left: &mut SelectorBuilder,
    combinator: &str,
    right: &mut SelectorBuilder,
) -> SelectorBuilder {
    if Combinator::from_token(combinator).is_none() {
        warn_once(
            "Selector",
            &format!("unrecognized combinator {combinator:?}, inserting it verbatim"),
        );
    }

    let combined = format!("{} {combinator} {}", left.stringify(), right.stringify());
    SelectorBuilder {
        combined: Some(combined),
        ..SelectorBuilder::default()
    }
}
