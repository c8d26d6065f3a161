//! Keyword tokens
//!
//! Every keyword appearing anywhere in the language family, as one flat enum.
//! Keywords are valid NCNames; a lexer decides between NCName and keyword by
//! consulting the active dialect's [`KeywordSet`]. Grouped by the language
//! version that introduced each keyword.

/// A keyword token in some dialect's grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeywordKind {
    // === XPath 1.0 ===
    Ancestor,
    AncestorOrSelf,
    And,
    Attribute,
    Child,
    Comment,
    Descendant,
    DescendantOrSelf,
    Div,
    Following,
    FollowingSibling,
    Mod,
    Namespace,
    Node,
    Or,
    Parent,
    Preceding,
    PrecedingSibling,
    ProcessingInstruction,
    Self_,
    Text,

    // === XPath 2.0 ===
    As,
    Cast,
    Castable,
    DocumentNode,
    Element,
    Else,
    EmptySequence,
    Eq,
    Every,
    Except,
    For,
    Ge,
    Gt,
    Idiv,
    If,
    In,
    Instance,
    Intersect,
    Is,
    Item,
    Le,
    Lt,
    Ne,
    Of,
    Return,
    Satisfies,
    SchemaAttribute,
    SchemaElement,
    Some,
    Then,
    To,
    Treat,
    Union,

    // === XPath 2.0 Working Draft 2003 ===
    Empty,
    IsNot,
    Nillable,
    Type,

    // === XPath 3.0 ===
    Function,
    Let,
    NamespaceNode,

    // === XPath 3.1 ===
    Array,
    Map,

    // === XPath 4.0 ===
    Enum,
    Member,
    Otherwise,
    Record,
    With,

    // === XPath Full Text 1.0 ===
    All,
    Any,
    At,
    Case,
    Contains,
    Content,
    Default,
    Diacritics,
    Different,
    Distance,
    End,
    Entire,
    Exactly,
    From,
    FtAnd,
    FtNot,
    FtOr,
    Insensitive,
    Language,
    Least,
    Levels,
    Lowercase,
    Most,
    No,
    Not,
    Occurs,
    Option,
    Ordered,
    Paragraph,
    Paragraphs,
    Phrase,
    Relationship,
    Same,
    Score,
    Sensitive,
    Sentence,
    Sentences,
    Start,
    Stemming,
    Stop,
    Thesaurus,
    Times,
    Uppercase,
    Using,
    Weight,
    Wildcards,
    Window,
    Without,
    Word,
    Words,

    // === MarkLogic ===
    Binary,
    Property,
    AttributeDecl,
    ComplexType,
    ElementDecl,
    ModelGroup,
    SchemaComponent,
    SchemaParticle,
    SchemaRoot,
    SchemaType,
    SchemaWildcard,
    SimpleType,
    ArrayNode,
    BooleanNode,
    NullNode,
    NumberNode,
    ObjectNode,
    SchemaFacet,

    // === Saxon ===
    Tuple,
    AndAlso,
    Fn,
    OrElse,

    // === XSLT patterns ===
    Id,
    Key,
    Doc,
    ElementWithId,
    Root,
}

impl KeywordKind {
    /// Every keyword kind, in declaration order.
    pub const ALL: &'static [KeywordKind] = &[
        KeywordKind::Ancestor,
        KeywordKind::AncestorOrSelf,
        KeywordKind::And,
        KeywordKind::Attribute,
        KeywordKind::Child,
        KeywordKind::Comment,
        KeywordKind::Descendant,
        KeywordKind::DescendantOrSelf,
        KeywordKind::Div,
        KeywordKind::Following,
        KeywordKind::FollowingSibling,
        KeywordKind::Mod,
        KeywordKind::Namespace,
        KeywordKind::Node,
        KeywordKind::Or,
        KeywordKind::Parent,
        KeywordKind::Preceding,
        KeywordKind::PrecedingSibling,
        KeywordKind::ProcessingInstruction,
        KeywordKind::Self_,
        KeywordKind::Text,
        KeywordKind::As,
        KeywordKind::Cast,
        KeywordKind::Castable,
        KeywordKind::DocumentNode,
        KeywordKind::Element,
        KeywordKind::Else,
        KeywordKind::EmptySequence,
        KeywordKind::Eq,
        KeywordKind::Every,
        KeywordKind::Except,
        KeywordKind::For,
        KeywordKind::Ge,
        KeywordKind::Gt,
        KeywordKind::Idiv,
        KeywordKind::If,
        KeywordKind::In,
        KeywordKind::Instance,
        KeywordKind::Intersect,
        KeywordKind::Is,
        KeywordKind::Item,
        KeywordKind::Le,
        KeywordKind::Lt,
        KeywordKind::Ne,
        KeywordKind::Of,
        KeywordKind::Return,
        KeywordKind::Satisfies,
        KeywordKind::SchemaAttribute,
        KeywordKind::SchemaElement,
        KeywordKind::Some,
        KeywordKind::Then,
        KeywordKind::To,
        KeywordKind::Treat,
        KeywordKind::Union,
        KeywordKind::Empty,
        KeywordKind::IsNot,
        KeywordKind::Nillable,
        KeywordKind::Type,
        KeywordKind::Function,
        KeywordKind::Let,
        KeywordKind::NamespaceNode,
        KeywordKind::Array,
        KeywordKind::Map,
        KeywordKind::Enum,
        KeywordKind::Member,
        KeywordKind::Otherwise,
        KeywordKind::Record,
        KeywordKind::With,
        KeywordKind::All,
        KeywordKind::Any,
        KeywordKind::At,
        KeywordKind::Case,
        KeywordKind::Contains,
        KeywordKind::Content,
        KeywordKind::Default,
        KeywordKind::Diacritics,
        KeywordKind::Different,
        KeywordKind::Distance,
        KeywordKind::End,
        KeywordKind::Entire,
        KeywordKind::Exactly,
        KeywordKind::From,
        KeywordKind::FtAnd,
        KeywordKind::FtNot,
        KeywordKind::FtOr,
        KeywordKind::Insensitive,
        KeywordKind::Language,
        KeywordKind::Least,
        KeywordKind::Levels,
        KeywordKind::Lowercase,
        KeywordKind::Most,
        KeywordKind::No,
        KeywordKind::Not,
        KeywordKind::Occurs,
        KeywordKind::Option,
        KeywordKind::Ordered,
        KeywordKind::Paragraph,
        KeywordKind::Paragraphs,
        KeywordKind::Phrase,
        KeywordKind::Relationship,
        KeywordKind::Same,
        KeywordKind::Score,
        KeywordKind::Sensitive,
        KeywordKind::Sentence,
        KeywordKind::Sentences,
        KeywordKind::Start,
        KeywordKind::Stemming,
        KeywordKind::Stop,
        KeywordKind::Thesaurus,
        KeywordKind::Times,
        KeywordKind::Uppercase,
        KeywordKind::Using,
        KeywordKind::Weight,
        KeywordKind::Wildcards,
        KeywordKind::Window,
        KeywordKind::Without,
        KeywordKind::Word,
        KeywordKind::Words,
        KeywordKind::Binary,
        KeywordKind::Property,
        KeywordKind::AttributeDecl,
        KeywordKind::ComplexType,
        KeywordKind::ElementDecl,
        KeywordKind::ModelGroup,
        KeywordKind::SchemaComponent,
        KeywordKind::SchemaParticle,
        KeywordKind::SchemaRoot,
        KeywordKind::SchemaType,
        KeywordKind::SchemaWildcard,
        KeywordKind::SimpleType,
        KeywordKind::ArrayNode,
        KeywordKind::BooleanNode,
        KeywordKind::NullNode,
        KeywordKind::NumberNode,
        KeywordKind::ObjectNode,
        KeywordKind::SchemaFacet,
        KeywordKind::Tuple,
        KeywordKind::AndAlso,
        KeywordKind::Fn,
        KeywordKind::OrElse,
        KeywordKind::Id,
        KeywordKind::Key,
        KeywordKind::Doc,
        KeywordKind::ElementWithId,
        KeywordKind::Root,
    ];

    /// The keyword text as it appears in source.
    pub const fn text(self) -> &'static str {
        match self {
            KeywordKind::Ancestor => "ancestor",
            KeywordKind::AncestorOrSelf => "ancestor-or-self",
            KeywordKind::And => "and",
            KeywordKind::Attribute => "attribute",
            KeywordKind::Child => "child",
            KeywordKind::Comment => "comment",
            KeywordKind::Descendant => "descendant",
            KeywordKind::DescendantOrSelf => "descendant-or-self",
            KeywordKind::Div => "div",
            KeywordKind::Following => "following",
            KeywordKind::FollowingSibling => "following-sibling",
            KeywordKind::Mod => "mod",
            KeywordKind::Namespace => "namespace",
            KeywordKind::Node => "node",
            KeywordKind::Or => "or",
            KeywordKind::Parent => "parent",
            KeywordKind::Preceding => "preceding",
            KeywordKind::PrecedingSibling => "preceding-sibling",
            KeywordKind::ProcessingInstruction => "processing-instruction",
            KeywordKind::Self_ => "self",
            KeywordKind::Text => "text",
            KeywordKind::As => "as",
            KeywordKind::Cast => "cast",
            KeywordKind::Castable => "castable",
            KeywordKind::DocumentNode => "document-node",
            KeywordKind::Element => "element",
            KeywordKind::Else => "else",
            KeywordKind::EmptySequence => "empty-sequence",
            KeywordKind::Eq => "eq",
            KeywordKind::Every => "every",
            KeywordKind::Except => "except",
            KeywordKind::For => "for",
            KeywordKind::Ge => "ge",
            KeywordKind::Gt => "gt",
            KeywordKind::Idiv => "idiv",
            KeywordKind::If => "if",
            KeywordKind::In => "in",
            KeywordKind::Instance => "instance",
            KeywordKind::Intersect => "intersect",
            KeywordKind::Is => "is",
            KeywordKind::Item => "item",
            KeywordKind::Le => "le",
            KeywordKind::Lt => "lt",
            KeywordKind::Ne => "ne",
            KeywordKind::Of => "of",
            KeywordKind::Return => "return",
            KeywordKind::Satisfies => "satisfies",
            KeywordKind::SchemaAttribute => "schema-attribute",
            KeywordKind::SchemaElement => "schema-element",
            KeywordKind::Some => "some",
            KeywordKind::Then => "then",
            KeywordKind::To => "to",
            KeywordKind::Treat => "treat",
            KeywordKind::Union => "union",
            KeywordKind::Empty => "empty",
            KeywordKind::IsNot => "isnot",
            KeywordKind::Nillable => "nillable",
            KeywordKind::Type => "type",
            KeywordKind::Function => "function",
            KeywordKind::Let => "let",
            KeywordKind::NamespaceNode => "namespace-node",
            KeywordKind::Array => "array",
            KeywordKind::Map => "map",
            KeywordKind::Enum => "enum",
            KeywordKind::Member => "member",
            KeywordKind::Otherwise => "otherwise",
            KeywordKind::Record => "record",
            KeywordKind::With => "with",
            KeywordKind::All => "all",
            KeywordKind::Any => "any",
            KeywordKind::At => "at",
            KeywordKind::Case => "case",
            KeywordKind::Contains => "contains",
            KeywordKind::Content => "content",
            KeywordKind::Default => "default",
            KeywordKind::Diacritics => "diacritics",
            KeywordKind::Different => "different",
            KeywordKind::Distance => "distance",
            KeywordKind::End => "end",
            KeywordKind::Entire => "entire",
            KeywordKind::Exactly => "exactly",
            KeywordKind::From => "from",
            KeywordKind::FtAnd => "ftand",
            KeywordKind::FtNot => "ftnot",
            KeywordKind::FtOr => "ftor",
            KeywordKind::Insensitive => "insensitive",
            KeywordKind::Language => "language",
            KeywordKind::Least => "least",
            KeywordKind::Levels => "levels",
            KeywordKind::Lowercase => "lowercase",
            KeywordKind::Most => "most",
            KeywordKind::No => "no",
            KeywordKind::Not => "not",
            KeywordKind::Occurs => "occurs",
            KeywordKind::Option => "option",
            KeywordKind::Ordered => "ordered",
            KeywordKind::Paragraph => "paragraph",
            KeywordKind::Paragraphs => "paragraphs",
            KeywordKind::Phrase => "phrase",
            KeywordKind::Relationship => "relationship",
            KeywordKind::Same => "same",
            KeywordKind::Score => "score",
            KeywordKind::Sensitive => "sensitive",
            KeywordKind::Sentence => "sentence",
            KeywordKind::Sentences => "sentences",
            KeywordKind::Start => "start",
            KeywordKind::Stemming => "stemming",
            KeywordKind::Stop => "stop",
            KeywordKind::Thesaurus => "thesaurus",
            KeywordKind::Times => "times",
            KeywordKind::Uppercase => "uppercase",
            KeywordKind::Using => "using",
            KeywordKind::Weight => "weight",
            KeywordKind::Wildcards => "wildcards",
            KeywordKind::Window => "window",
            KeywordKind::Without => "without",
            KeywordKind::Word => "word",
            KeywordKind::Words => "words",
            KeywordKind::Binary => "binary",
            KeywordKind::Property => "property",
            KeywordKind::AttributeDecl => "attribute-decl",
            KeywordKind::ComplexType => "complex-type",
            KeywordKind::ElementDecl => "element-decl",
            KeywordKind::ModelGroup => "model-group",
            KeywordKind::SchemaComponent => "schema-component",
            KeywordKind::SchemaParticle => "schema-particle",
            KeywordKind::SchemaRoot => "schema-root",
            KeywordKind::SchemaType => "schema-type",
            KeywordKind::SchemaWildcard => "schema-wildcard",
            KeywordKind::SimpleType => "simple-type",
            KeywordKind::ArrayNode => "array-node",
            KeywordKind::BooleanNode => "boolean-node",
            KeywordKind::NullNode => "null-node",
            KeywordKind::NumberNode => "number-node",
            KeywordKind::ObjectNode => "object-node",
            KeywordKind::SchemaFacet => "schema-facet",
            KeywordKind::Tuple => "tuple",
            KeywordKind::AndAlso => "andAlso",
            KeywordKind::Fn => "fn",
            KeywordKind::OrElse => "orElse",
            KeywordKind::Id => "id",
            KeywordKind::Key => "key",
            KeywordKind::Doc => "doc",
            KeywordKind::ElementWithId => "element-with-id",
            KeywordKind::Root => "root",
        }
    }

    /// Look up a keyword by its source text.
    ///
    /// Dialect-agnostic: a lexer checks the result against the active
    /// dialect's keyword set before treating the name as a keyword.
    pub fn from_text(text: &str) -> Option<KeywordKind> {
        KeywordKind::ALL.iter().copied().find(|k| k.text() == text)
    }
}

/// A set of keyword kinds, cheap to store and const-composable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet([u64; 3]);

impl KeywordSet {
    pub const EMPTY: KeywordSet = KeywordSet([0; 3]);

    /// Build a set from a list of kinds.
    pub const fn of(kinds: &[KeywordKind]) -> Self {
        let mut bits = [0u64; 3];
        let mut i = 0;
        while i < kinds.len() {
            let k = kinds[i] as usize;
            bits[k / 64] |= 1 << (k % 64);
            i += 1;
        }
        KeywordSet(bits)
    }

    pub const fn union(self, other: KeywordSet) -> Self {
        KeywordSet([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
        ])
    }

    pub const fn contains(self, kind: KeywordKind) -> bool {
        let k = kind as usize;
        self.0[k / 64] & (1 << (k % 64)) != 0
    }

    pub const fn len(self) -> usize {
        (self.0[0].count_ones() + self.0[1].count_ones() + self.0[2].count_ones()) as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0
    }

    /// Iterate the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = KeywordKind> {
        KeywordKind::ALL.iter().copied().filter(move |k| self.contains(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_ordered() {
        assert_eq!(KeywordKind::ALL.len(), 145);
        for (i, kind) in KeywordKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn test_text() {
        assert_eq!(KeywordKind::AncestorOrSelf.text(), "ancestor-or-self");
        assert_eq!(KeywordKind::Self_.text(), "self");
        assert_eq!(KeywordKind::EmptySequence.text(), "empty-sequence");
        assert_eq!(KeywordKind::Idiv.text(), "idiv");
        assert_eq!(KeywordKind::FtAnd.text(), "ftand");
        assert_eq!(KeywordKind::ArrayNode.text(), "array-node");
        assert_eq!(KeywordKind::AndAlso.text(), "andAlso");
        assert_eq!(KeywordKind::ElementWithId.text(), "element-with-id");
    }

    #[test]
    fn test_from_text_round_trips_every_kind() {
        for kind in KeywordKind::ALL {
            assert_eq!(KeywordKind::from_text(kind.text()), Some(*kind));
        }
    }

    #[test]
    fn test_from_text_rejects_non_keywords() {
        assert_eq!(KeywordKind::from_text("price"), None);
        assert_eq!(KeywordKind::from_text("AND"), None);
        assert_eq!(KeywordKind::from_text(""), None);
    }

    #[test]
    fn test_texts_are_unique() {
        for (i, a) in KeywordKind::ALL.iter().enumerate() {
            for b in &KeywordKind::ALL[i + 1..] {
                assert_ne!(a.text(), b.text(), "{:?} and {:?} share text", a, b);
            }
        }
    }

    #[test]
    fn test_set_operations() {
        let set = KeywordSet::of(&[KeywordKind::For, KeywordKind::Root]);
        assert!(set.contains(KeywordKind::For));
        assert!(set.contains(KeywordKind::Root));
        assert!(!set.contains(KeywordKind::If));
        assert_eq!(set.len(), 2);
        assert!(KeywordSet::EMPTY.is_empty());

        // Root lives in the third word of the bitset
        assert!(KeywordKind::Root as usize >= 128);

        let more = set.union(KeywordSet::of(&[KeywordKind::If]));
        assert_eq!(more.len(), 3);
    }

    #[test]
    fn test_set_iteration_order() {
        let set = KeywordSet::of(&[KeywordKind::Root, KeywordKind::And, KeywordKind::Window]);
        let kinds: Vec<_> = set.iter().collect();
        assert_eq!(
            kinds,
            vec![KeywordKind::And, KeywordKind::Window, KeywordKind::Root]
        );
    }
}
