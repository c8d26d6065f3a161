//! Language dialects and their token sets
//!
//! One variant per supported language version or vendor dialect. Later
//! versions extend earlier ones; merged lines (Full Text, Saxon 11, the XSLT
//! patterns) extend two bases at once. The extension structure is plain set
//! union over the flat kind enums — see [`tables`] for the composed
//! membership tables.

mod tables;

use crate::tokens::{KeywordSet, SymbolSet, TerminalSet};
use std::fmt;

/// Publication status of the document defining a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Specification {
    /// A W3C Recommendation.
    Recommendation,
    /// A W3C Working Draft; token sets may differ from the final
    /// Recommendation.
    WorkingDraft,
    /// A W3C Editor's Draft; subject to change between crate releases.
    EditorsDraft,
    /// A vendor extension with no W3C standing.
    Vendor,
}

/// A language version or vendor dialect of the XPath/XQuery/XSLT family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    XPath10,
    XPath20,
    /// The May 2003 XPath 2.0 working draft, which some processors shipped.
    XPathWD2003,
    XPath30,
    XPath31,
    XPath40,
    /// XPath 2.0 with the Full Text 1.0 extension.
    XPath20FullText10,
    /// XPath 3.0 with the Full Text 1.0 extension.
    XPath30FullText10,
    MarkLogic60XPath,
    MarkLogic60IndexablePath,
    MarkLogic70XPath,
    MarkLogic80XPath,
    MarkLogic80IndexablePath,
    MarkLogic90ExtractPath,
    Saxon98XPath,
    Saxon99XPath,
    Saxon100XPath,
    Saxon110XPath,
    XsltPattern10,
    XsltPattern20,
    XsltPattern30,
    XsltPattern31,
    XsltPattern40,
}

impl Dialect {
    /// Every dialect, in declaration order.
    pub const ALL: &'static [Dialect] = &[
        Dialect::XPath10,
        Dialect::XPath20,
        Dialect::XPathWD2003,
        Dialect::XPath30,
        Dialect::XPath31,
        Dialect::XPath40,
        Dialect::XPath20FullText10,
        Dialect::XPath30FullText10,
        Dialect::MarkLogic60XPath,
        Dialect::MarkLogic60IndexablePath,
        Dialect::MarkLogic70XPath,
        Dialect::MarkLogic80XPath,
        Dialect::MarkLogic80IndexablePath,
        Dialect::MarkLogic90ExtractPath,
        Dialect::Saxon98XPath,
        Dialect::Saxon99XPath,
        Dialect::Saxon100XPath,
        Dialect::Saxon110XPath,
        Dialect::XsltPattern10,
        Dialect::XsltPattern20,
        Dialect::XsltPattern30,
        Dialect::XsltPattern31,
        Dialect::XsltPattern40,
    ];

    /// The dialects this dialect directly extends. Empty for XPath 1.0.
    pub const fn extends(self) -> &'static [Dialect] {
        match self {
            Dialect::XPath10 => &[],
            Dialect::XPath20 => &[Dialect::XPath10],
            Dialect::XPathWD2003 => &[Dialect::XPath20],
            Dialect::XPath30 => &[Dialect::XPath20],
            Dialect::XPath31 => &[Dialect::XPath30],
            Dialect::XPath40 => &[Dialect::XPath31],
            Dialect::XPath20FullText10 => &[Dialect::XPath20],
            Dialect::XPath30FullText10 => &[Dialect::XPath20FullText10, Dialect::XPath30],
            Dialect::MarkLogic60XPath => &[Dialect::XPath20],
            Dialect::MarkLogic60IndexablePath => &[Dialect::XPath20],
            Dialect::MarkLogic70XPath => &[Dialect::MarkLogic60XPath],
            Dialect::MarkLogic80XPath => &[Dialect::MarkLogic70XPath],
            Dialect::MarkLogic80IndexablePath => &[Dialect::MarkLogic60IndexablePath],
            Dialect::MarkLogic90ExtractPath => &[Dialect::XPath20],
            Dialect::Saxon98XPath => &[Dialect::XPath31],
            Dialect::Saxon99XPath => &[Dialect::Saxon98XPath],
            Dialect::Saxon100XPath => &[Dialect::Saxon99XPath],
            Dialect::Saxon110XPath => &[Dialect::Saxon100XPath, Dialect::XPath40],
            Dialect::XsltPattern10 => &[Dialect::XPath10],
            Dialect::XsltPattern20 => &[Dialect::XsltPattern10, Dialect::XPath20],
            Dialect::XsltPattern30 => &[Dialect::XsltPattern20, Dialect::XPath30],
            Dialect::XsltPattern31 => &[Dialect::XsltPattern30, Dialect::XPath31],
            Dialect::XsltPattern40 => &[Dialect::XsltPattern31, Dialect::XPath40],
        }
    }

    /// The symbol tokens this dialect accepts.
    pub const fn symbols(self) -> SymbolSet {
        match self {
            Dialect::XPath10 => tables::XPATH10_SYMBOLS,
            Dialect::XPath20 => tables::XPATH20_SYMBOLS,
            Dialect::XPathWD2003 => tables::XPATH_WD2003_SYMBOLS,
            Dialect::XPath30 => tables::XPATH30_SYMBOLS,
            Dialect::XPath31 => tables::XPATH31_SYMBOLS,
            Dialect::XPath40 => tables::XPATH40_SYMBOLS,
            Dialect::XPath20FullText10 => tables::XPATH20_FT10_SYMBOLS,
            Dialect::XPath30FullText10 => tables::XPATH30_FT10_SYMBOLS,
            Dialect::MarkLogic60XPath => tables::MARKLOGIC60_XPATH_SYMBOLS,
            Dialect::MarkLogic60IndexablePath => tables::MARKLOGIC60_INDEXABLE_PATH_SYMBOLS,
            Dialect::MarkLogic70XPath => tables::MARKLOGIC70_XPATH_SYMBOLS,
            Dialect::MarkLogic80XPath => tables::MARKLOGIC80_XPATH_SYMBOLS,
            Dialect::MarkLogic80IndexablePath => tables::MARKLOGIC80_INDEXABLE_PATH_SYMBOLS,
            Dialect::MarkLogic90ExtractPath => tables::MARKLOGIC90_EXTRACT_PATH_SYMBOLS,
            Dialect::Saxon98XPath => tables::SAXON98_SYMBOLS,
            Dialect::Saxon99XPath => tables::SAXON99_SYMBOLS,
            Dialect::Saxon100XPath => tables::SAXON100_SYMBOLS,
            Dialect::Saxon110XPath => tables::SAXON110_SYMBOLS,
            Dialect::XsltPattern10 => tables::XSLT_PATTERN10_SYMBOLS,
            Dialect::XsltPattern20 => tables::XSLT_PATTERN20_SYMBOLS,
            Dialect::XsltPattern30 => tables::XSLT_PATTERN30_SYMBOLS,
            Dialect::XsltPattern31 => tables::XSLT_PATTERN31_SYMBOLS,
            Dialect::XsltPattern40 => tables::XSLT_PATTERN40_SYMBOLS,
        }
    }

    /// The keyword tokens this dialect accepts.
    pub const fn keywords(self) -> KeywordSet {
        match self {
            Dialect::XPath10 => tables::XPATH10_KEYWORDS,
            Dialect::XPath20 => tables::XPATH20_KEYWORDS,
            Dialect::XPathWD2003 => tables::XPATH_WD2003_KEYWORDS,
            Dialect::XPath30 => tables::XPATH30_KEYWORDS,
            Dialect::XPath31 => tables::XPATH31_KEYWORDS,
            Dialect::XPath40 => tables::XPATH40_KEYWORDS,
            Dialect::XPath20FullText10 => tables::XPATH20_FT10_KEYWORDS,
            Dialect::XPath30FullText10 => tables::XPATH30_FT10_KEYWORDS,
            Dialect::MarkLogic60XPath => tables::MARKLOGIC60_XPATH_KEYWORDS,
            Dialect::MarkLogic60IndexablePath => tables::MARKLOGIC60_INDEXABLE_PATH_KEYWORDS,
            Dialect::MarkLogic70XPath => tables::MARKLOGIC70_XPATH_KEYWORDS,
            Dialect::MarkLogic80XPath => tables::MARKLOGIC80_XPATH_KEYWORDS,
            Dialect::MarkLogic80IndexablePath => tables::MARKLOGIC80_INDEXABLE_PATH_KEYWORDS,
            Dialect::MarkLogic90ExtractPath => tables::MARKLOGIC90_EXTRACT_PATH_KEYWORDS,
            Dialect::Saxon98XPath => tables::SAXON98_KEYWORDS,
            Dialect::Saxon99XPath => tables::SAXON99_KEYWORDS,
            Dialect::Saxon100XPath => tables::SAXON100_KEYWORDS,
            Dialect::Saxon110XPath => tables::SAXON110_KEYWORDS,
            Dialect::XsltPattern10 => tables::XSLT_PATTERN10_KEYWORDS,
            Dialect::XsltPattern20 => tables::XSLT_PATTERN20_KEYWORDS,
            Dialect::XsltPattern30 => tables::XSLT_PATTERN30_KEYWORDS,
            Dialect::XsltPattern31 => tables::XSLT_PATTERN31_KEYWORDS,
            Dialect::XsltPattern40 => tables::XSLT_PATTERN40_KEYWORDS,
        }
    }

    /// The terminal symbols this dialect's grammar names.
    pub const fn terminals(self) -> TerminalSet {
        match self {
            Dialect::XPath10 => tables::XPATH10_TERMINALS,
            Dialect::XPath20 => tables::XPATH20_TERMINALS,
            Dialect::XPathWD2003 => tables::XPATH_WD2003_TERMINALS,
            Dialect::XPath30 => tables::XPATH30_TERMINALS,
            Dialect::XPath31 => tables::XPATH31_TERMINALS,
            Dialect::XPath40 => tables::XPATH40_TERMINALS,
            Dialect::XPath20FullText10 => tables::XPATH20_FT10_TERMINALS,
            Dialect::XPath30FullText10 => tables::XPATH30_FT10_TERMINALS,
            Dialect::MarkLogic60XPath
            | Dialect::MarkLogic60IndexablePath
            | Dialect::MarkLogic70XPath
            | Dialect::MarkLogic80XPath
            | Dialect::MarkLogic80IndexablePath
            | Dialect::MarkLogic90ExtractPath => tables::MARKLOGIC_TERMINALS,
            Dialect::Saxon98XPath => tables::SAXON98_TERMINALS,
            Dialect::Saxon99XPath => tables::SAXON99_TERMINALS,
            Dialect::Saxon100XPath => tables::SAXON100_TERMINALS,
            Dialect::Saxon110XPath => tables::SAXON110_TERMINALS,
            Dialect::XsltPattern10 => tables::XSLT_PATTERN10_TERMINALS,
            Dialect::XsltPattern20 => tables::XSLT_PATTERN20_TERMINALS,
            Dialect::XsltPattern30 => tables::XSLT_PATTERN30_TERMINALS,
            Dialect::XsltPattern31 => tables::XSLT_PATTERN31_TERMINALS,
            Dialect::XsltPattern40 => tables::XSLT_PATTERN40_TERMINALS,
        }
    }

    /// Status of the document defining this dialect.
    pub const fn specification(self) -> Specification {
        match self {
            Dialect::XPath10
            | Dialect::XPath20
            | Dialect::XPath30
            | Dialect::XPath31
            | Dialect::XPath20FullText10
            | Dialect::XPath30FullText10
            | Dialect::XsltPattern10
            | Dialect::XsltPattern20
            | Dialect::XsltPattern30
            | Dialect::XsltPattern31 => Specification::Recommendation,
            Dialect::XPathWD2003 => Specification::WorkingDraft,
            Dialect::XPath40 | Dialect::XsltPattern40 => Specification::EditorsDraft,
            Dialect::MarkLogic60XPath
            | Dialect::MarkLogic60IndexablePath
            | Dialect::MarkLogic70XPath
            | Dialect::MarkLogic80XPath
            | Dialect::MarkLogic80IndexablePath
            | Dialect::MarkLogic90ExtractPath
            | Dialect::Saxon98XPath
            | Dialect::Saxon99XPath
            | Dialect::Saxon100XPath
            | Dialect::Saxon110XPath => Specification::Vendor,
        }
    }

    /// Human-readable dialect name.
    pub const fn name(self) -> &'static str {
        match self {
            Dialect::XPath10 => "XPath 1.0",
            Dialect::XPath20 => "XPath 2.0",
            Dialect::XPathWD2003 => "XPath 2.0 (2003 Working Draft)",
            Dialect::XPath30 => "XPath 3.0",
            Dialect::XPath31 => "XPath 3.1",
            Dialect::XPath40 => "XPath 4.0",
            Dialect::XPath20FullText10 => "XPath 2.0 Full Text 1.0",
            Dialect::XPath30FullText10 => "XPath 3.0 Full Text 1.0",
            Dialect::MarkLogic60XPath => "MarkLogic 6.0 XPath",
            Dialect::MarkLogic60IndexablePath => "MarkLogic 6.0 indexable path",
            Dialect::MarkLogic70XPath => "MarkLogic 7.0 XPath",
            Dialect::MarkLogic80XPath => "MarkLogic 8.0 XPath",
            Dialect::MarkLogic80IndexablePath => "MarkLogic 8.0 indexable path",
            Dialect::MarkLogic90ExtractPath => "MarkLogic 9.0 extract path",
            Dialect::Saxon98XPath => "Saxon 9.8 XPath",
            Dialect::Saxon99XPath => "Saxon 9.9 XPath",
            Dialect::Saxon100XPath => "Saxon 10.0 XPath",
            Dialect::Saxon110XPath => "Saxon 11 XPath",
            Dialect::XsltPattern10 => "XSLT 1.0 patterns",
            Dialect::XsltPattern20 => "XSLT 2.0 patterns",
            Dialect::XsltPattern30 => "XSLT 3.0 patterns",
            Dialect::XsltPattern31 => "XSLT 3.1 patterns",
            Dialect::XsltPattern40 => "XSLT 4.0 patterns",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
