//! Symbol tokens
//!
//! Every fixed-text symbol token appearing anywhere in the language family,
//! as one flat enum. Which symbols a given language version actually accepts
//! is a [`Dialect`](crate::dialect::Dialect) membership question, answered by
//! the per-dialect [`SymbolSet`] tables.

/// A symbol token: fixed punctuation text in some dialect's grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    // === XPath 1.0 ===
    AbbrevAttribute,        // @
    AbbrevDescendantOrSelf, // //
    AbbrevParent,           // ..
    AxisSeparator,          // ::
    Colon,                  // :
    Comma,                  // ,
    ContextItem,            // .
    Equals,                 // =
    GreaterThan,            // >
    GreaterThanOrEquals,    // >=
    LessThan,               // <
    LessThanOrEquals,       // <=
    Minus,                  // -
    NotEquals,              // !=
    ParenthesisClose,       // )
    ParenthesisOpen,        // (
    PathOperator,           // /
    Plus,                   // +
    SquareBracketClose,     // ]
    SquareBracketOpen,      // [
    Star,                   // *
    Union,                  // |
    VariableIndicator,      // $

    // === XPath 2.0 ===
    CommentClose,      // :)
    CommentOpen,       // (:
    EscapeApos,        // ''
    EscapeQuot,        // ""
    NodeFollows,       // >>
    NodePrecedes,      // <<
    QuestionMark,      // ?
    StringLiteralApos, // '
    StringLiteralQuot, // "

    // === XPath 3.0 ===
    AssignEquals,      // :=
    Concatenation,     // ||
    CurlyBracketClose, // }
    CurlyBracketOpen,  // {
    FunctionRef,       // #
    MapOperator,       // !

    // === XPath 3.1 ===
    ThickArrow, // =>

    // === XPath 4.0 ===
    TernaryElse,   // !!
    TernaryIfThen, // ??
    ThinArrow,     // ->

    // === XPath Full Text 1.0 ===
    PragmaClose, // #)
    PragmaOpen,  // (#

    // === Saxon ===
    TypeAlias,           // ~
    ContextFunctionOpen, // .{
    LambdaFunctionOpen,  // _{
}

impl SymbolKind {
    /// Every symbol kind, in declaration order.
    pub const ALL: &'static [SymbolKind] = &[
        SymbolKind::AbbrevAttribute,
        SymbolKind::AbbrevDescendantOrSelf,
        SymbolKind::AbbrevParent,
        SymbolKind::AxisSeparator,
        SymbolKind::Colon,
        SymbolKind::Comma,
        SymbolKind::ContextItem,
        SymbolKind::Equals,
        SymbolKind::GreaterThan,
        SymbolKind::GreaterThanOrEquals,
        SymbolKind::LessThan,
        SymbolKind::LessThanOrEquals,
        SymbolKind::Minus,
        SymbolKind::NotEquals,
        SymbolKind::ParenthesisClose,
        SymbolKind::ParenthesisOpen,
        SymbolKind::PathOperator,
        SymbolKind::Plus,
        SymbolKind::SquareBracketClose,
        SymbolKind::SquareBracketOpen,
        SymbolKind::Star,
        SymbolKind::Union,
        SymbolKind::VariableIndicator,
        SymbolKind::CommentClose,
        SymbolKind::CommentOpen,
        SymbolKind::EscapeApos,
        SymbolKind::EscapeQuot,
        SymbolKind::NodeFollows,
        SymbolKind::NodePrecedes,
        SymbolKind::QuestionMark,
        SymbolKind::StringLiteralApos,
        SymbolKind::StringLiteralQuot,
        SymbolKind::AssignEquals,
        SymbolKind::Concatenation,
        SymbolKind::CurlyBracketClose,
        SymbolKind::CurlyBracketOpen,
        SymbolKind::FunctionRef,
        SymbolKind::MapOperator,
        SymbolKind::ThickArrow,
        SymbolKind::TernaryElse,
        SymbolKind::TernaryIfThen,
        SymbolKind::ThinArrow,
        SymbolKind::PragmaClose,
        SymbolKind::PragmaOpen,
        SymbolKind::TypeAlias,
        SymbolKind::ContextFunctionOpen,
        SymbolKind::LambdaFunctionOpen,
    ];

    /// The character representation of the token.
    pub const fn text(self) -> &'static str {
        match self {
            SymbolKind::AbbrevAttribute => "@",
            SymbolKind::AbbrevDescendantOrSelf => "//",
            SymbolKind::AbbrevParent => "..",
            SymbolKind::AxisSeparator => "::",
            SymbolKind::Colon => ":",
            SymbolKind::Comma => ",",
            SymbolKind::ContextItem => ".",
            SymbolKind::Equals => "=",
            SymbolKind::GreaterThan => ">",
            SymbolKind::GreaterThanOrEquals => ">=",
            SymbolKind::LessThan => "<",
            SymbolKind::LessThanOrEquals => "<=",
            SymbolKind::Minus => "-",
            SymbolKind::NotEquals => "!=",
            SymbolKind::ParenthesisClose => ")",
            SymbolKind::ParenthesisOpen => "(",
            SymbolKind::PathOperator => "/",
            SymbolKind::Plus => "+",
            SymbolKind::SquareBracketClose => "]",
            SymbolKind::SquareBracketOpen => "[",
            SymbolKind::Star => "*",
            SymbolKind::Union => "|",
            SymbolKind::VariableIndicator => "$",
            SymbolKind::CommentClose => ":)",
            SymbolKind::CommentOpen => "(:",
            SymbolKind::EscapeApos => "''",
            SymbolKind::EscapeQuot => "\"\"",
            SymbolKind::NodeFollows => ">>",
            SymbolKind::NodePrecedes => "<<",
            SymbolKind::QuestionMark => "?",
            SymbolKind::StringLiteralApos => "'",
            SymbolKind::StringLiteralQuot => "\"",
            SymbolKind::AssignEquals => ":=",
            SymbolKind::Concatenation => "||",
            SymbolKind::CurlyBracketClose => "}",
            SymbolKind::CurlyBracketOpen => "{",
            SymbolKind::FunctionRef => "#",
            SymbolKind::MapOperator => "!",
            SymbolKind::ThickArrow => "=>",
            SymbolKind::TernaryElse => "!!",
            SymbolKind::TernaryIfThen => "??",
            SymbolKind::ThinArrow => "->",
            SymbolKind::PragmaClose => "#)",
            SymbolKind::PragmaOpen => "(#",
            SymbolKind::TypeAlias => "~",
            SymbolKind::ContextFunctionOpen => ".{",
            SymbolKind::LambdaFunctionOpen => "_{",
        }
    }
}

/// A set of symbol kinds, cheap to store and const-composable.
///
/// Dialect membership tables are built at compile time by unioning a base
/// dialect's set with the dialect's own additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet(u64);

impl SymbolSet {
    pub const EMPTY: SymbolSet = SymbolSet(0);

    /// Build a set from a list of kinds.
    pub const fn of(kinds: &[SymbolKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << kinds[i] as u64;
            i += 1;
        }
        SymbolSet(bits)
    }

    pub const fn union(self, other: SymbolSet) -> Self {
        SymbolSet(self.0 | other.0)
    }

    pub const fn contains(self, kind: SymbolKind) -> bool {
        self.0 & (1 << kind as u64) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = SymbolKind> {
        SymbolKind::ALL.iter().copied().filter(move |k| self.contains(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_ordered() {
        assert_eq!(SymbolKind::ALL.len(), 47);
        for (i, kind) in SymbolKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn test_text() {
        assert_eq!(SymbolKind::ParenthesisOpen.text(), "(");
        assert_eq!(SymbolKind::AxisSeparator.text(), "::");
        assert_eq!(SymbolKind::AbbrevDescendantOrSelf.text(), "//");
        assert_eq!(SymbolKind::AssignEquals.text(), ":=");
        assert_eq!(SymbolKind::ThickArrow.text(), "=>");
        assert_eq!(SymbolKind::TernaryIfThen.text(), "??");
        assert_eq!(SymbolKind::PragmaOpen.text(), "(#");
        assert_eq!(SymbolKind::LambdaFunctionOpen.text(), "_{");
    }

    #[test]
    fn test_texts_are_unique() {
        for (i, a) in SymbolKind::ALL.iter().enumerate() {
            for b in &SymbolKind::ALL[i + 1..] {
                assert_ne!(a.text(), b.text(), "{:?} and {:?} share text", a, b);
            }
        }
    }

    #[test]
    fn test_set_operations() {
        let set = SymbolSet::of(&[SymbolKind::Comma, SymbolKind::Star]);
        assert!(set.contains(SymbolKind::Comma));
        assert!(set.contains(SymbolKind::Star));
        assert!(!set.contains(SymbolKind::Plus));
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(SymbolSet::EMPTY.is_empty());

        let more = set.union(SymbolSet::of(&[SymbolKind::Plus]));
        assert_eq!(more.len(), 3);
        assert!(more.contains(SymbolKind::Plus));
    }

    #[test]
    fn test_set_iteration_order() {
        let set = SymbolSet::of(&[SymbolKind::Star, SymbolKind::Comma, SymbolKind::ThinArrow]);
        let kinds: Vec<_> = set.iter().collect();
        assert_eq!(
            kinds,
            vec![SymbolKind::Comma, SymbolKind::Star, SymbolKind::ThinArrow]
        );
    }
}
