//! Combined selectors: two operands joined by a combinator.

use std::fmt;

use crate::selectors::{Combinator, Render};

/// Two rendered selectors joined by a [`Combinator`].
///
/// Operands are captured as rendered strings at construction time, so a
/// combined selector never observes later changes to its sources. Either
/// operand may itself be a combined selector, which nests arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    left: String,
    combinator: Combinator,
    right: String,
}

impl CombinedSelector {
    /// Joins two already-built selectors with `combinator`.
    pub fn new(left: &impl Render, combinator: Combinator, right: &impl Render) -> Self {
        let left = left.render();
        let right = right.render();
        log::trace!("combine {:?} {:?} {:?}", left, combinator, right);
        Self {
            left,
            combinator,
            right,
        }
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

impl Render for CombinedSelector {}
