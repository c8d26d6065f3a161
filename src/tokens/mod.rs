//! Token vocabularies for the XPath/XQuery/XSLT family
//!
//! Three flat kind enums cover every token in every supported language
//! version:
//! - SymbolKind: fixed punctuation tokens (`(`, `::`, `=>`, ...)
//! - KeywordKind: reserved-looking NCNames (`for`, `ancestor`, `ftand`, ...)
//! - TerminalKind: variable-text terminals (NCName, IntegerLiteral, ...)
//!
//! Per-version membership lives in the [`dialect`](crate::dialect) tables,
//! not here; a kind exists once no matter how many dialects accept it.

pub mod keyword;
pub mod symbol;
pub mod terminal;

pub use keyword::{KeywordKind, KeywordSet};
pub use symbol::{SymbolKind, SymbolSet};
pub use terminal::{TerminalKind, TerminalSet};

/// Any token kind in the family, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Symbol(SymbolKind),
    Keyword(KeywordKind),
    Terminal(TerminalKind),
}

impl TokenKind {
    /// The fixed source text of this token, if it has one.
    ///
    /// Symbols and keywords have fixed text; terminals do not.
    pub const fn fixed_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Symbol(s) => Some(s.text()),
            TokenKind::Keyword(k) => Some(k.text()),
            TokenKind::Terminal(_) => None,
        }
    }
}

impl From<SymbolKind> for TokenKind {
    fn from(kind: SymbolKind) -> Self {
        TokenKind::Symbol(kind)
    }
}

impl From<KeywordKind> for TokenKind {
    fn from(kind: KeywordKind) -> Self {
        TokenKind::Keyword(kind)
    }
}

impl From<TerminalKind> for TokenKind {
    fn from(kind: TerminalKind) -> Self {
        TokenKind::Terminal(kind)
    }
}
