//! Selector construction and combination.
//!
//! This module provides the core building functionality:
//!
//! - [`SelectorBuilder`]: accumulates fragments under the fixed order
//!   tag, id, class, attribute, pseudo-class, pseudo-element
//! - [`CombinedSelector`]: two built selectors joined by a [`Combinator`]
//! - Entry points: [`element`], [`id`], [`class`], [`attr`],
//!   [`pseudo_class`], [`pseudo_element`], and [`combine`], each starting
//!   a fresh, independent selector per call
//!
//! ## Example
//!
//! ```rust
//! use cssbuild::selectors::{Combinator, Render, combine, element, id};
//!
//! let mut item = element("li");
//! item.class("active").unwrap();
//!
//! let selected = combine(&id("menu"), Combinator::Child, &item);
//! assert_eq!(selected.render(), "#menu > li.active");
//! ```

mod builder;
mod combinator;
mod combined;
mod fragment;

pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use combined::CombinedSelector;
pub use fragment::FragmentKind;

use std::fmt;

/// Anything that renders to a selector string.
///
/// This is the seam [`combine`] is polymorphic over: both
/// [`SelectorBuilder`] and [`CombinedSelector`] implement it, so combined
/// selectors nest.
pub trait Render: fmt::Display {
    /// The canonical string form of this selector.
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Starts a selector with an element (tag) fragment.
pub fn element(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Tag, name)
}

/// Starts a selector with an id fragment.
pub fn id(id: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Id, id)
}

/// Starts a selector with a class fragment.
pub fn class(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Class, name)
}

/// Starts a selector with an attribute expression fragment.
pub fn attr(expression: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Attribute, expression)
}

/// Starts a selector with a pseudo-class fragment.
pub fn pseudo_class(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::PseudoClass, name)
}

/// Starts a selector with a pseudo-element fragment.
pub fn pseudo_element(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::PseudoElement, name)
}

/// Joins two built selectors with a combinator.
///
/// Operands are captured as rendered strings, so the result is
/// independent of later changes to `left` or `right`.
pub fn combine(
    left: &impl Render,
    combinator: Combinator,
    right: &impl Render,
) -> CombinedSelector {
    CombinedSelector::new(left, combinator, right)
}
