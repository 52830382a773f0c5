//! The selector builder: fragment accumulation and rendering.

use std::fmt;

use crate::error::SelectorError;
use crate::selectors::Render;
use crate::selectors::fragment::{FragmentKind, FragmentKinds};

/// Accumulates selector fragments and renders them in canonical order.
///
/// Fragments must arrive in the fixed order tag, id, class, attribute,
/// pseudo-class, pseudo-element. Singleton kinds (tag, id, pseudo-element)
/// may appear at most once; the repeatable kinds (class, attribute,
/// pseudo-class) may repeat and render in insertion order. A violating
/// call fails immediately and leaves the builder untouched.
///
/// Each mutating operation returns `&mut Self` on success, so chains
/// compose with `?` or `unwrap`:
///
/// ```rust
/// use cssbuild::selectors::{Render, element};
///
/// let mut selector = element("a");
/// selector.class("external").unwrap().pseudo_class("hover").unwrap();
/// assert_eq!(selector.render(), "a.external:hover");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    present: FragmentKinds,
}

impl SelectorBuilder {
    /// Creates an empty selector. It renders to `""` until fragments are
    /// appended.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh selector holding a single fragment. The entry
    /// points call this with an empty builder, where no rule can fire.
    pub(crate) fn seeded(kind: FragmentKind, value: &str) -> Self {
        let mut selector = Self::new();
        selector.store(kind, value.to_string());
        selector
    }

    /// Sets the element (tag) fragment. It must be the very first
    /// fragment appended overall.
    pub fn tag(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Tag, name)
    }

    /// Sets the id fragment, rendered as `#id`.
    pub fn id(&mut self, id: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Id, id)
    }

    /// Appends a class fragment, rendered as `.class`.
    pub fn class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// Appends an attribute expression fragment, rendered as `[expr]`.
    ///
    /// The expression is taken verbatim (e.g. `title`, `data-id="1"`,
    /// `href$=".png"`); no escaping is applied.
    pub fn attribute(&mut self, expression: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Attribute, expression)
    }

    /// Appends a pseudo-class fragment, rendered as `:name`.
    pub fn pseudo_class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Sets the pseudo-element fragment, rendered as `::name`.
    pub fn pseudo_element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name)
    }

    fn append(&mut self, kind: FragmentKind, value: &str) -> Result<&mut Self, SelectorError> {
        self.ensure_can_append(kind)?;
        log::trace!("append {} fragment {:?}", kind, value);
        self.store(kind, value.to_string());
        Ok(self)
    }

    /// Checks duplicate and ordering rules without touching any state.
    fn ensure_can_append(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if kind.is_singleton() && self.present.contains(kind.flag()) {
            return Err(SelectorError::DuplicateFragment(kind));
        }
        if let Some(conflicting) = self.present.intersection(kind.later()).highest() {
            return Err(SelectorError::FragmentOutOfOrder { kind, conflicting });
        }
        Ok(())
    }

    fn store(&mut self, kind: FragmentKind, value: String) {
        match kind {
            FragmentKind::Tag => self.tag = Some(value),
            FragmentKind::Id => self.id = Some(value),
            FragmentKind::Class => self.classes.push(value),
            FragmentKind::Attribute => self.attributes.push(value),
            FragmentKind::PseudoClass => self.pseudo_classes.push(value),
            FragmentKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.present.insert(kind.flag());
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}

impl Render for SelectorBuilder {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selector_is_empty() {
        let selector = SelectorBuilder::new();
        assert_eq!(selector.to_string(), "");
        assert_eq!(selector, SelectorBuilder::default());
    }

    #[test]
    fn test_seeded_selector_holds_one_fragment() {
        let selector = SelectorBuilder::seeded(FragmentKind::PseudoElement, "before");
        assert_eq!(selector.to_string(), "::before");
    }

    #[test]
    fn test_repeatable_kind_appends_after_same_kind() {
        let mut selector = SelectorBuilder::seeded(FragmentKind::Class, "btn");
        selector.class("primary").unwrap().class("large").unwrap();
        assert_eq!(selector.to_string(), ".btn.primary.large");
    }

    #[test]
    fn test_duplicate_singleton_is_rejected() {
        let mut selector = SelectorBuilder::seeded(FragmentKind::Id, "main");
        let err = selector.id("other").err();
        assert_eq!(err, Some(SelectorError::DuplicateFragment(FragmentKind::Id)));
        assert_eq!(selector.to_string(), "#main");
    }

    #[test]
    fn test_out_of_order_reports_furthest_kind() {
        let mut selector = SelectorBuilder::seeded(FragmentKind::Class, "btn");
        selector.pseudo_class("hover").unwrap();
        let err = selector.id("main").err();
        assert_eq!(
            err,
            Some(SelectorError::FragmentOutOfOrder {
                kind: FragmentKind::Id,
                conflicting: FragmentKind::PseudoClass,
            })
        );
    }

    #[test]
    fn test_pseudo_element_only_fails_on_duplicate() {
        let mut selector = SelectorBuilder::new();
        selector.pseudo_element("selection").unwrap();
        let err = selector.pseudo_element("before").err();
        assert_eq!(
            err,
            Some(SelectorError::DuplicateFragment(FragmentKind::PseudoElement))
        );
        assert_eq!(selector.to_string(), "::selection");
    }
}
