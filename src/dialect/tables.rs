//! Per-dialect membership tables
//!
//! Each language version's token set is its base version's set unioned with a
//! delta, computed at compile time. Versions that merge two lines (Full Text
//! over XPath 3.0, Saxon 11 over XPath 4.0, the XSLT patterns over their
//! XPath level) union both bases; repeated members cost nothing.

use crate::tokens::keyword::KeywordKind as K;
use crate::tokens::symbol::SymbolKind as S;
use crate::tokens::terminal::TerminalKind as T;
use crate::tokens::{KeywordSet, SymbolSet, TerminalSet};

// === Symbols ===

pub(super) const XPATH10_SYMBOLS: SymbolSet = SymbolSet::of(&[
    S::AbbrevAttribute,
    S::AbbrevDescendantOrSelf,
    S::AbbrevParent,
    S::AxisSeparator,
    S::Colon,
    S::Comma,
    S::ContextItem,
    S::Equals,
    S::GreaterThan,
    S::GreaterThanOrEquals,
    S::LessThan,
    S::LessThanOrEquals,
    S::Minus,
    S::NotEquals,
    S::ParenthesisClose,
    S::ParenthesisOpen,
    S::PathOperator,
    S::Plus,
    S::SquareBracketClose,
    S::SquareBracketOpen,
    S::Star,
    S::Union,
    S::VariableIndicator,
]);

pub(super) const XPATH20_SYMBOLS: SymbolSet = XPATH10_SYMBOLS.union(SymbolSet::of(&[
    S::CommentClose,
    S::CommentOpen,
    S::EscapeApos,
    S::EscapeQuot,
    S::NodeFollows,
    S::NodePrecedes,
    S::QuestionMark,
    S::StringLiteralApos,
    S::StringLiteralQuot,
]));

// The 2003 draft redefines token usage but introduces no new symbols.
pub(super) const XPATH_WD2003_SYMBOLS: SymbolSet = XPATH20_SYMBOLS;

pub(super) const XPATH30_SYMBOLS: SymbolSet = XPATH20_SYMBOLS.union(SymbolSet::of(&[
    S::AssignEquals,
    S::Concatenation,
    S::CurlyBracketClose,
    S::CurlyBracketOpen,
    S::FunctionRef,
    S::MapOperator,
]));

pub(super) const XPATH31_SYMBOLS: SymbolSet =
    XPATH30_SYMBOLS.union(SymbolSet::of(&[S::ThickArrow]));

pub(super) const XPATH40_SYMBOLS: SymbolSet = XPATH31_SYMBOLS.union(SymbolSet::of(&[
    S::TernaryElse,
    S::TernaryIfThen,
    S::ThinArrow,
]));

pub(super) const XPATH20_FT10_SYMBOLS: SymbolSet = XPATH20_SYMBOLS.union(SymbolSet::of(&[
    S::CurlyBracketClose,
    S::CurlyBracketOpen,
    S::PragmaClose,
    S::PragmaOpen,
]));

pub(super) const XPATH30_FT10_SYMBOLS: SymbolSet = XPATH20_FT10_SYMBOLS.union(XPATH30_SYMBOLS);

pub(super) const MARKLOGIC60_XPATH_SYMBOLS: SymbolSet = XPATH20_SYMBOLS;
pub(super) const MARKLOGIC60_INDEXABLE_PATH_SYMBOLS: SymbolSet = XPATH20_SYMBOLS;
pub(super) const MARKLOGIC70_XPATH_SYMBOLS: SymbolSet = MARKLOGIC60_XPATH_SYMBOLS;
pub(super) const MARKLOGIC80_XPATH_SYMBOLS: SymbolSet = MARKLOGIC70_XPATH_SYMBOLS;
pub(super) const MARKLOGIC80_INDEXABLE_PATH_SYMBOLS: SymbolSet =
    MARKLOGIC60_INDEXABLE_PATH_SYMBOLS;
pub(super) const MARKLOGIC90_EXTRACT_PATH_SYMBOLS: SymbolSet = XPATH20_SYMBOLS;

pub(super) const SAXON98_SYMBOLS: SymbolSet =
    XPATH31_SYMBOLS.union(SymbolSet::of(&[S::TypeAlias]));
pub(super) const SAXON99_SYMBOLS: SymbolSet = SAXON98_SYMBOLS;
pub(super) const SAXON100_SYMBOLS: SymbolSet = SAXON99_SYMBOLS.union(SymbolSet::of(&[
    S::ContextFunctionOpen,
    S::LambdaFunctionOpen,
]));
pub(super) const SAXON110_SYMBOLS: SymbolSet = SAXON100_SYMBOLS.union(XPATH40_SYMBOLS);

pub(super) const XSLT_PATTERN10_SYMBOLS: SymbolSet = XPATH10_SYMBOLS;
pub(super) const XSLT_PATTERN20_SYMBOLS: SymbolSet = XSLT_PATTERN10_SYMBOLS.union(XPATH20_SYMBOLS);
pub(super) const XSLT_PATTERN30_SYMBOLS: SymbolSet = XSLT_PATTERN20_SYMBOLS.union(XPATH30_SYMBOLS);
pub(super) const XSLT_PATTERN31_SYMBOLS: SymbolSet = XSLT_PATTERN30_SYMBOLS.union(XPATH31_SYMBOLS);
pub(super) const XSLT_PATTERN40_SYMBOLS: SymbolSet = XSLT_PATTERN31_SYMBOLS.union(XPATH40_SYMBOLS);

// === Keywords ===

pub(super) const XPATH10_KEYWORDS: KeywordSet = KeywordSet::of(&[
    K::Ancestor,
    K::AncestorOrSelf,
    K::And,
    K::Attribute,
    K::Child,
    K::Comment,
    K::Descendant,
    K::DescendantOrSelf,
    K::Div,
    K::Following,
    K::FollowingSibling,
    K::Mod,
    K::Namespace,
    K::Node,
    K::Or,
    K::Parent,
    K::Preceding,
    K::PrecedingSibling,
    K::ProcessingInstruction,
    K::Self_,
    K::Text,
]);

pub(super) const XPATH20_KEYWORDS: KeywordSet = XPATH10_KEYWORDS.union(KeywordSet::of(&[
    K::As,
    K::Cast,
    K::Castable,
    K::DocumentNode,
    K::Element,
    K::Else,
    K::EmptySequence,
    K::Eq,
    K::Every,
    K::Except,
    K::For,
    K::Ge,
    K::Gt,
    K::Idiv,
    K::If,
    K::In,
    K::Instance,
    K::Intersect,
    K::Is,
    K::Item,
    K::Le,
    K::Lt,
    K::Ne,
    K::Of,
    K::Return,
    K::Satisfies,
    K::SchemaAttribute,
    K::SchemaElement,
    K::Some,
    K::Then,
    K::To,
    K::Treat,
    K::Union,
]));

pub(super) const XPATH_WD2003_KEYWORDS: KeywordSet = XPATH20_KEYWORDS.union(KeywordSet::of(&[
    K::Empty,
    K::IsNot,
    K::Nillable,
    K::Type,
]));

pub(super) const XPATH30_KEYWORDS: KeywordSet = XPATH20_KEYWORDS.union(KeywordSet::of(&[
    K::Function,
    K::Let,
    K::NamespaceNode,
]));

pub(super) const XPATH31_KEYWORDS: KeywordSet =
    XPATH30_KEYWORDS.union(KeywordSet::of(&[K::Array, K::Map]));

pub(super) const XPATH40_KEYWORDS: KeywordSet = XPATH31_KEYWORDS.union(KeywordSet::of(&[
    K::Enum,
    K::Member,
    K::Otherwise,
    K::Record,
    K::With,
]));

pub(super) const XPATH20_FT10_KEYWORDS: KeywordSet = XPATH20_KEYWORDS.union(KeywordSet::of(&[
    K::All,
    K::Any,
    K::At,
    K::Case,
    K::Contains,
    K::Content,
    K::Default,
    K::Diacritics,
    K::Different,
    K::Distance,
    K::End,
    K::Entire,
    K::Exactly,
    K::From,
    K::FtAnd,
    K::FtNot,
    K::FtOr,
    K::Insensitive,
    K::Language,
    K::Least,
    K::Levels,
    K::Lowercase,
    K::Most,
    K::No,
    K::Not,
    K::Occurs,
    K::Option,
    K::Ordered,
    K::Paragraph,
    K::Paragraphs,
    K::Phrase,
    K::Relationship,
    K::Same,
    K::Score,
    K::Sensitive,
    K::Sentence,
    K::Sentences,
    K::Start,
    K::Stemming,
    K::Stop,
    K::Thesaurus,
    K::Times,
    K::Uppercase,
    K::Using,
    K::Weight,
    K::Wildcards,
    K::Window,
    K::Without,
    K::Word,
    K::Words,
]));

pub(super) const XPATH30_FT10_KEYWORDS: KeywordSet = XPATH20_FT10_KEYWORDS.union(XPATH30_KEYWORDS);

pub(super) const MARKLOGIC60_XPATH_KEYWORDS: KeywordSet =
    XPATH20_KEYWORDS.union(KeywordSet::of(&[K::Binary, K::Property]));

pub(super) const MARKLOGIC60_INDEXABLE_PATH_KEYWORDS: KeywordSet = XPATH20_KEYWORDS;

pub(super) const MARKLOGIC70_XPATH_KEYWORDS: KeywordSet =
    MARKLOGIC60_XPATH_KEYWORDS.union(KeywordSet::of(&[
        K::AttributeDecl,
        K::ComplexType,
        K::ElementDecl,
        K::ModelGroup,
        K::SchemaComponent,
        K::SchemaParticle,
        K::SchemaRoot,
        K::SchemaType,
        K::SchemaWildcard,
        K::SimpleType,
    ]));

pub(super) const MARKLOGIC80_XPATH_KEYWORDS: KeywordSet =
    MARKLOGIC70_XPATH_KEYWORDS.union(KeywordSet::of(&[
        K::ArrayNode,
        K::BooleanNode,
        K::NullNode,
        K::NumberNode,
        K::ObjectNode,
        K::SchemaFacet,
    ]));

pub(super) const MARKLOGIC80_INDEXABLE_PATH_KEYWORDS: KeywordSet =
    MARKLOGIC60_INDEXABLE_PATH_KEYWORDS.union(KeywordSet::of(&[
        K::ArrayNode,
        K::BooleanNode,
        K::NullNode,
        K::NumberNode,
        K::ObjectNode,
    ]));

pub(super) const MARKLOGIC90_EXTRACT_PATH_KEYWORDS: KeywordSet =
    XPATH20_KEYWORDS.union(KeywordSet::of(&[
        K::ArrayNode,
        K::BooleanNode,
        K::NullNode,
        K::NumberNode,
        K::ObjectNode,
    ]));

pub(super) const SAXON98_KEYWORDS: KeywordSet =
    XPATH31_KEYWORDS.union(KeywordSet::of(&[K::Tuple]));

pub(super) const SAXON99_KEYWORDS: KeywordSet =
    SAXON98_KEYWORDS.union(KeywordSet::of(&[K::AndAlso, K::Fn, K::OrElse]));

pub(super) const SAXON100_KEYWORDS: KeywordSet =
    SAXON99_KEYWORDS.union(KeywordSet::of(&[K::Member, K::Otherwise, K::Type]));

pub(super) const SAXON110_KEYWORDS: KeywordSet = SAXON100_KEYWORDS.union(XPATH40_KEYWORDS);

pub(super) const XSLT_PATTERN10_KEYWORDS: KeywordSet =
    XPATH10_KEYWORDS.union(KeywordSet::of(&[K::Id, K::Key]));

pub(super) const XSLT_PATTERN20_KEYWORDS: KeywordSet =
    XSLT_PATTERN10_KEYWORDS.union(XPATH20_KEYWORDS);

pub(super) const XSLT_PATTERN30_KEYWORDS: KeywordSet = XSLT_PATTERN20_KEYWORDS
    .union(XPATH30_KEYWORDS)
    .union(KeywordSet::of(&[K::Doc, K::ElementWithId, K::Root]));

pub(super) const XSLT_PATTERN31_KEYWORDS: KeywordSet =
    XSLT_PATTERN30_KEYWORDS.union(XPATH31_KEYWORDS);

pub(super) const XSLT_PATTERN40_KEYWORDS: KeywordSet = XSLT_PATTERN31_KEYWORDS
    .union(XPATH40_KEYWORDS)
    .union(KeywordSet::of(&[K::Type]));

// === Terminals ===

pub(super) const XPATH10_TERMINALS: TerminalSet = TerminalSet::of(&[
    T::Literal,
    T::NcName,
    T::Number,
    T::PrefixedName,
    T::Whitespace,
]);

pub(super) const XPATH20_TERMINALS: TerminalSet = XPATH10_TERMINALS.union(TerminalSet::of(&[
    T::IntegerLiteral,
    T::DecimalLiteral,
    T::DoubleLiteral,
    T::StringLiteralAposContents,
    T::StringLiteralQuotContents,
    T::CommentContents,
]));

pub(super) const XPATH_WD2003_TERMINALS: TerminalSet = XPATH20_TERMINALS;

pub(super) const XPATH30_TERMINALS: TerminalSet =
    XPATH20_TERMINALS.union(TerminalSet::of(&[T::BracedUriLiteral]));

pub(super) const XPATH31_TERMINALS: TerminalSet = XPATH30_TERMINALS;
pub(super) const XPATH40_TERMINALS: TerminalSet = XPATH31_TERMINALS;

pub(super) const XPATH20_FT10_TERMINALS: TerminalSet =
    XPATH20_TERMINALS.union(TerminalSet::of(&[T::PragmaContents]));

pub(super) const XPATH30_FT10_TERMINALS: TerminalSet =
    XPATH20_FT10_TERMINALS.union(XPATH30_TERMINALS);

pub(super) const MARKLOGIC_TERMINALS: TerminalSet = XPATH20_TERMINALS;

pub(super) const SAXON98_TERMINALS: TerminalSet = XPATH31_TERMINALS;
pub(super) const SAXON99_TERMINALS: TerminalSet = SAXON98_TERMINALS;
pub(super) const SAXON100_TERMINALS: TerminalSet = SAXON99_TERMINALS;
pub(super) const SAXON110_TERMINALS: TerminalSet = SAXON100_TERMINALS.union(XPATH40_TERMINALS);

pub(super) const XSLT_PATTERN10_TERMINALS: TerminalSet = XPATH10_TERMINALS;
pub(super) const XSLT_PATTERN20_TERMINALS: TerminalSet =
    XSLT_PATTERN10_TERMINALS.union(XPATH20_TERMINALS);
pub(super) const XSLT_PATTERN30_TERMINALS: TerminalSet =
    XSLT_PATTERN20_TERMINALS.union(XPATH30_TERMINALS);
pub(super) const XSLT_PATTERN31_TERMINALS: TerminalSet =
    XSLT_PATTERN30_TERMINALS.union(XPATH31_TERMINALS);
pub(super) const XSLT_PATTERN40_TERMINALS: TerminalSet =
    XSLT_PATTERN31_TERMINALS.union(XPATH40_TERMINALS);
