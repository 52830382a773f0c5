//! Combinators joining two selectors.

use std::fmt;

/// Relation between the two operands of a combined selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace).
    Descendant,
    /// Child combinator (`>`).
    Child,
    /// Adjacent sibling combinator (`+`).
    AdjacentSibling,
    /// General sibling combinator (`~`).
    GeneralSibling,
}

impl Combinator {
    /// Parse a combinator from its token.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::AdjacentSibling),
            "~" => Some(Self::GeneralSibling),
            _ => None,
        }
    }

    /// The CSS token for this combinator.
    pub fn token(&self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::AdjacentSibling => '+',
            Self::GeneralSibling => '~',
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinator_parse() {
        assert_eq!(Combinator::parse(" "), Some(Combinator::Descendant));
        assert_eq!(Combinator::parse(">"), Some(Combinator::Child));
        assert_eq!(Combinator::parse("+"), Some(Combinator::AdjacentSibling));
        assert_eq!(Combinator::parse("~"), Some(Combinator::GeneralSibling));
        assert_eq!(Combinator::parse(""), None);
        assert_eq!(Combinator::parse(">>"), None);
        assert_eq!(Combinator::parse("|"), None);
    }

    #[test]
    fn test_combinator_token() {
        assert_eq!(Combinator::Descendant.token(), ' ');
        assert_eq!(Combinator::Child.token(), '>');
        assert_eq!(Combinator::AdjacentSibling.token(), '+');
        assert_eq!(Combinator::GeneralSibling.token(), '~');
    }

    #[test]
    fn test_combinator_display_round_trips() {
        for combinator in [
            Combinator::Descendant,
            Combinator::Child,
            Combinator::AdjacentSibling,
            Combinator::GeneralSibling,
        ] {
            assert_eq!(
                Combinator::parse(&combinator.to_string()),
                Some(combinator)
            );
        }
    }
}
