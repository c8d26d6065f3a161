//! xqtlex - Lexical foundations for the XPath/XQuery/XSLT family
//!
//! Layers, bottom to top:
//! - chars: codepoint model - UTF-16 decoding, XML character classes, the
//!   codepoint reader a tokenizer scans with
//! - tokens: flat token-kind vocabularies (symbols, keywords, terminals)
//!   covering every supported language version
//! - dialect: per-version membership tables, composed from per-version deltas
//!
//! No tokenizer lives here: this crate is the substrate one is built on. A
//! lexer resets a [`CodepointReader`] over its input, classifies
//! [`Codepoint`]s with the character classes, and consults a [`Dialect`]'s
//! sets to decide which fixed tokens and keywords exist in the language
//! version it is lexing.

pub mod chars;
pub mod dialect;
pub mod tokens;

pub use chars::{
    decode_to_utf16, utf16_units, CharacterClass, Codepoint, CodepointReader, Digit,
    EncodingError, HexDigit, NameChar, NameStartChar, SourceEncoding,
};
pub use dialect::{Dialect, Specification};
pub use tokens::{
    KeywordKind, KeywordSet, SymbolKind, SymbolSet, TerminalKind, TerminalSet, TokenKind,
};

#[cfg(test)]
mod tests {
    use super::*;

    // Substrate smoke test: scan an XPath expression the way a lexer would,
    // using the reader, the classes, and a dialect's tables together.
    #[test]
    fn test_name_scan_against_dialect() {
        let buf = utf16_units("child::para[1]");
        let mut reader = CodepointReader::new();
        reader.reset(&buf);

        assert!(NameStartChar.contains(reader.current_char()));
        let start = reader.current_offset();
        reader.advance_while(|c| NameChar.contains(c) && c.value() != ':' as u32);
        let name: String = char::decode_utf16(buf[start..reader.current_offset()].iter().copied())
            .map(|r| r.unwrap())
            .collect();

        let keyword = KeywordKind::from_text(&name).unwrap();
        assert_eq!(keyword, KeywordKind::Child);
        assert!(Dialect::XPath10.keywords().contains(keyword));

        // "::" follows the axis name
        assert_eq!(reader.current_char(), Codepoint::from(':'));
        assert!(Dialect::XPath10.symbols().contains(SymbolKind::AxisSeparator));
    }

    #[test]
    fn test_digit_run_after_predicate_open() {
        let buf = utf16_units("[42]");
        let mut reader = CodepointReader::new();
        reader.reset(&buf);

        assert_eq!(reader.current_char(), Codepoint::from('['));
        reader.advance();

        let start = reader.current_offset();
        reader.advance_while(|c| Digit.contains(c));
        assert_eq!(start, 1);
        assert_eq!(reader.current_offset(), 3);
        assert_eq!(reader.current_char(), Codepoint::from(']'));
    }
}
