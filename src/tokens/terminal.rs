//! Terminal symbol tokens
//!
//! The non-fixed terminal symbols of the family's grammars: tokens whose text
//! varies per occurrence (names, literals, whitespace, comment contents).
//! Each kind carries the terminal symbol's name in the grammar that defines
//! it.

/// A terminal symbol token in some dialect's grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminalKind {
    // === XPath 1.0 ===
    Literal,
    NcName,
    Number,
    PrefixedName,
    Whitespace,

    // === XPath 2.0 ===
    IntegerLiteral,
    DecimalLiteral,
    DoubleLiteral,
    StringLiteralAposContents,
    StringLiteralQuotContents,
    CommentContents,

    // === XPath 3.0 ===
    BracedUriLiteral,

    // === XPath Full Text 1.0 ===
    PragmaContents,
}

impl TerminalKind {
    /// Every terminal kind, in declaration order.
    pub const ALL: &'static [TerminalKind] = &[
        TerminalKind::Literal,
        TerminalKind::NcName,
        TerminalKind::Number,
        TerminalKind::PrefixedName,
        TerminalKind::Whitespace,
        TerminalKind::IntegerLiteral,
        TerminalKind::DecimalLiteral,
        TerminalKind::DoubleLiteral,
        TerminalKind::StringLiteralAposContents,
        TerminalKind::StringLiteralQuotContents,
        TerminalKind::CommentContents,
        TerminalKind::BracedUriLiteral,
        TerminalKind::PragmaContents,
    ];

    /// The name of the terminal symbol in the grammar.
    pub const fn symbol(self) -> &'static str {
        match self {
            TerminalKind::Literal => "Literal",
            TerminalKind::NcName => "NCName",
            TerminalKind::Number => "Number",
            TerminalKind::PrefixedName => "PrefixedName",
            TerminalKind::Whitespace => "S",
            TerminalKind::IntegerLiteral => "IntegerLiteral",
            TerminalKind::DecimalLiteral => "DecimalLiteral",
            TerminalKind::DoubleLiteral => "DoubleLiteral",
            TerminalKind::StringLiteralAposContents => "StringLiteralAposContents",
            TerminalKind::StringLiteralQuotContents => "StringLiteralQuotContents",
            TerminalKind::CommentContents => "CommentContents",
            TerminalKind::BracedUriLiteral => "BracedURILiteral",
            TerminalKind::PragmaContents => "PragmaContents",
        }
    }
}

/// A set of terminal kinds, cheap to store and const-composable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSet(u16);

impl TerminalSet {
    pub const EMPTY: TerminalSet = TerminalSet(0);

    /// Build a set from a list of kinds.
    pub const fn of(kinds: &[TerminalKind]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << kinds[i] as u16;
            i += 1;
        }
        TerminalSet(bits)
    }

    pub const fn union(self, other: TerminalSet) -> Self {
        TerminalSet(self.0 | other.0)
    }

    pub const fn contains(self, kind: TerminalKind) -> bool {
        self.0 & (1 << kind as u16) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = TerminalKind> {
        TerminalKind::ALL.iter().copied().filter(move |k| self.contains(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_ordered() {
        assert_eq!(TerminalKind::ALL.len(), 13);
        for (i, kind) in TerminalKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn test_symbol_names() {
        assert_eq!(TerminalKind::NcName.symbol(), "NCName");
        assert_eq!(TerminalKind::Whitespace.symbol(), "S");
        assert_eq!(TerminalKind::BracedUriLiteral.symbol(), "BracedURILiteral");
        assert_eq!(TerminalKind::PragmaContents.symbol(), "PragmaContents");
    }

    #[test]
    fn test_set_operations() {
        let set = TerminalSet::of(&[TerminalKind::NcName, TerminalKind::Whitespace]);
        assert!(set.contains(TerminalKind::NcName));
        assert!(!set.contains(TerminalKind::Number));
        assert_eq!(set.len(), 2);

        let more = set.union(TerminalSet::of(&[TerminalKind::Number]));
        assert_eq!(more.len(), 3);
        assert!(TerminalSet::EMPTY.is_empty());
    }
}
