//! Error types for selector construction.
//!
//! This module defines the single error raised when a fragment cannot be
//! appended to a selector under construction. Violations surface at the
//! offending call, never at render time, and leave the builder exactly as
//! it was before the call.

use thiserror::Error;

use crate::selectors::FragmentKind;

/// Errors raised when a selector would become structurally invalid.
///
/// # Examples
///
/// ```rust
/// use cssbuild::selectors::element;
///
/// // A selector may only carry one tag fragment.
/// let mut selector = element("div");
/// assert!(selector.tag("span").is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A singleton fragment kind (tag, id, pseudo-element) was set twice.
    ///
    /// The value stored by the first call is kept.
    #[error("duplicate {0} fragment: a selector may contain at most one")]
    DuplicateFragment(FragmentKind),

    /// A fragment was appended after a kind that must come later.
    ///
    /// Fragments follow the fixed order tag, id, class, attribute,
    /// pseudo-class, pseudo-element.
    #[error("{kind} fragment out of order: {conflicting} is already present")]
    FragmentOutOfOrder {
        /// The kind the caller tried to append.
        kind: FragmentKind,
        /// The furthest-along kind already present in the selector.
        conflicting: FragmentKind,
    },
}
