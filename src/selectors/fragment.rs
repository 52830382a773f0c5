//! Fragment kinds and their fixed ordering.
//!
//! A selector is made of up to six kinds of fragment, appended in a fixed
//! total order: tag, id, class, attribute, pseudo-class, pseudo-element.
//! [`FragmentKind`] names the kinds; [`FragmentKinds`] is the flag set the
//! builder keeps to check ordering and uniqueness in constant time.

use std::fmt;

use bitflags::bitflags;

/// One kind of selector fragment, in declaration order = required order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FragmentKind {
    /// Element (type) fragment, rendered with no prefix.
    Tag,
    /// Id fragment, rendered as `#id`.
    Id,
    /// Class fragment, rendered as `.class`.
    Class,
    /// Attribute expression fragment, rendered as `[expr]`.
    Attribute,
    /// Pseudo-class fragment, rendered as `:name`.
    PseudoClass,
    /// Pseudo-element fragment, rendered as `::name`.
    PseudoElement,
}

bitflags! {
    /// Set of fragment kinds present in a selector under construction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct FragmentKinds: u8 {
        const TAG            = 0b0000_0001;
        const ID             = 0b0000_0010;
        const CLASS          = 0b0000_0100;
        const ATTRIBUTE      = 0b0000_1000;
        const PSEUDO_CLASS   = 0b0001_0000;
        const PSEUDO_ELEMENT = 0b0010_0000;
    }
}

impl FragmentKind {
    /// All six kinds, lowest rank first.
    pub const ALL: [FragmentKind; 6] = [
        Self::Tag,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the fixed fragment order (tag = 0).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Singleton kinds may appear at most once per selector.
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Tag | Self::Id | Self::PseudoElement)
    }

    pub(crate) fn flag(self) -> FragmentKinds {
        FragmentKinds::from_bits_truncate(1 << self.rank())
    }

    /// Every kind with a higher rank than this one.
    pub(crate) fn later(self) -> FragmentKinds {
        FragmentKinds::from_bits_truncate(!0u8 << (self.rank() + 1))
    }
}

impl FragmentKinds {
    /// Highest-ranked kind in the set, if any.
    pub(crate) fn highest(self) -> Option<FragmentKind> {
        FragmentKind::ALL
            .into_iter()
            .rev()
            .find(|kind| self.contains(kind.flag()))
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag => write!(f, "tag"),
            Self::Id => write!(f, "id"),
            Self::Class => write!(f, "class"),
            Self::Attribute => write!(f, "attribute"),
            Self::PseudoClass => write!(f, "pseudo-class"),
            Self::PseudoElement => write!(f, "pseudo-element"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_declaration_order() {
        for (expected, kind) in FragmentKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.rank(), expected as u8);
        }
        assert!(FragmentKind::Tag < FragmentKind::PseudoElement);
    }

    #[test]
    fn test_singleton_classification() {
        assert!(FragmentKind::Tag.is_singleton());
        assert!(FragmentKind::Id.is_singleton());
        assert!(FragmentKind::PseudoElement.is_singleton());
        assert!(!FragmentKind::Class.is_singleton());
        assert!(!FragmentKind::Attribute.is_singleton());
        assert!(!FragmentKind::PseudoClass.is_singleton());
    }

    #[test]
    fn test_later_masks() {
        assert_eq!(
            FragmentKind::Tag.later(),
            FragmentKinds::all().difference(FragmentKinds::TAG)
        );
        assert_eq!(
            FragmentKind::PseudoClass.later(),
            FragmentKinds::PSEUDO_ELEMENT
        );
        assert!(FragmentKind::PseudoElement.later().is_empty());
    }

    #[test]
    fn test_highest_present_kind() {
        let set = FragmentKinds::ID | FragmentKinds::CLASS;
        assert_eq!(set.highest(), Some(FragmentKind::Class));
        assert_eq!(FragmentKinds::empty().highest(), None);
    }
}
