//! # cssbuild - CSS Selector Builder
//!
//! A fluent, validated builder for CSS selector strings.
//!
//! Selectors accumulate *fragments* (tag, id, classes, attribute
//! expressions, pseudo-classes, a pseudo-element) through chained calls
//! and render to their canonical string form. This crate provides:
//!
//! - **Building**: [`selectors::SelectorBuilder`] with fail-fast ordering
//!   and uniqueness validation
//! - **Combining**: [`selectors::combine`] joins built selectors with a
//!   [`selectors::Combinator`]
//! - **Entry points**: [`selectors::element`] and friends start a fresh,
//!   independent selector per call
//!
//! ## Quick Start
//!
//! ```rust
//! use cssbuild::selectors::{Render, element, id};
//!
//! let mut heading = id("main");
//! heading.class("container").unwrap().class("editable").unwrap();
//! assert_eq!(heading.render(), "#main.container.editable");
//!
//! let mut link = element("a");
//! link.attribute(r#"href$=".png""#).unwrap().pseudo_class("focus").unwrap();
//! assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
//! ```
//!
//! ## Fragment order
//!
//! Fragments follow a fixed order: tag, id, class, attribute,
//! pseudo-class, pseudo-element. Tag, id, and pseudo-element may appear
//! at most once. Appending out of order or repeating a singleton kind
//! fails at the offending call with [`SelectorError`] and leaves the
//! builder unchanged:
//!
//! ```rust
//! use cssbuild::selectors::pseudo_class;
//!
//! let mut selector = pseudo_class("hover");
//! assert!(selector.id("nav").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`selectors`]: selector construction and combination
//! - [`error`]: the structural validation error
//! - [`geometry`]: rectangle support type
//! - [`json`]: generic JSON serialize/deserialize helpers

pub mod error;
pub mod geometry;
pub mod json;
pub mod selectors;

pub use error::SelectorError;
pub use selectors::{Combinator, CombinedSelector, Render, SelectorBuilder};
