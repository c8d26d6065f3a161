//! XML 1.0 lexical character classes
//!
//! Membership predicates for the character categories the XPath/XQuery family
//! builds names and numbers from, per XML 1.0 (Fifth Edition) section 2.3:
//! <https://www.w3.org/TR/2008/REC-xml-20081126/#sec-common-syn>
//!
//! Each class is a stateless singleton; classification is a pure range check
//! with no allocation.

use super::codepoint::Codepoint;

/// A lexical character class: a fixed set of codepoints.
pub trait CharacterClass {
    /// Returns true if the scalar value belongs to this class.
    fn contains_value(&self, value: u32) -> bool;

    /// Returns true if the codepoint belongs to this class.
    #[inline]
    fn contains(&self, c: Codepoint) -> bool {
        self.contains_value(c.value())
    }
}

/// An ASCII digit.
///
/// ```text
/// Digit ::= [0-9]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Digit;

impl CharacterClass for Digit {
    #[inline]
    fn contains_value(&self, value: u32) -> bool {
        matches!(value, 0x30..=0x39)
    }
}

/// An ASCII hexadecimal digit.
///
/// ```text
/// HexDigit ::= [0-9a-fA-F]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexDigit;

impl CharacterClass for HexDigit {
    #[inline]
    fn contains_value(&self, value: u32) -> bool {
        matches!(value, 0x30..=0x39 | 0x41..=0x46 | 0x61..=0x66)
    }
}

/// An XML name start character.
///
/// ```text
/// NameStartChar ::= ":" | [A-Z] | "_" | [a-z]
///                 | [#xC0-#xD6] | [#xD8-#xF6] | [#xF8-#x2FF]
///                 | [#x370-#x37D] | [#x37F-#x1FFF]
///                 | [#x200C-#x200D] | [#x2070-#x218F] | [#x2C00-#x2FEF]
///                 | [#x3001-#xD7FF] | [#xF900-#xFDCF] | [#xFDF0-#xFFFD]
///                 | [#x10000-#xEFFFF]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NameStartChar;

impl CharacterClass for NameStartChar {
    fn contains_value(&self, value: u32) -> bool {
        // Buckets keyed on the upper bound of each run of ranges, so each
        // lookup resolves in at most one arm. 0xD7, 0xF7, and 0x37E sit in
        // gaps between adjacent ranges and are carved out explicitly.
        match value {
            ..=0x7F => matches!(value as u8, b':' | b'A'..=b'Z' | b'_' | b'a'..=b'z'),
            ..=0x2FF => value >= 0xC0 && value != 0xD7 && value != 0xF7,
            ..=0x1FFF => value >= 0x370 && value != 0x37E,
            ..=0x2FEF => matches!(value, 0x200C..=0x200D | 0x2070..=0x218F) || value >= 0x2C00,
            ..=0xFFFD => matches!(value, 0x3001..=0xD7FF | 0xF900..=0xFDCF) || value >= 0xFDF0,
            ..=0xEFFFF => value >= 0x1_0000,
            _ => false,
        }
    }
}

/// An XML name character.
///
/// ```text
/// NameChar ::= NameStartChar | "-" | "." | [0-9] | #xB7
///            | [#x300-#x36F] | [#x203F-#x2040]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NameChar;

impl CharacterClass for NameChar {
    fn contains_value(&self, value: u32) -> bool {
        NameStartChar.contains_value(value)
            || value <= 0x7F && matches!(value as u8, b'-' | b'.' | b'0'..=b'9')
            || value == 0xB7
            || matches!(value, 0x300..=0x36F | 0x203F..=0x2040)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_class(class: &dyn CharacterClass, c: char) -> bool {
        class.contains(Codepoint::from(c))
    }

    #[test]
    fn test_digit() {
        assert!(in_class(&Digit, '0'));
        assert!(in_class(&Digit, '5'));
        assert!(in_class(&Digit, '9'));

        assert!(!in_class(&Digit, 'a'));
        assert!(!in_class(&Digit, 'A'));
        assert!(!in_class(&Digit, '='));
    }

    #[test]
    fn test_hex_digit() {
        assert!(in_class(&HexDigit, '0'));
        assert!(in_class(&HexDigit, '9'));
        assert!(in_class(&HexDigit, 'a'));
        assert!(in_class(&HexDigit, 'f'));
        assert!(in_class(&HexDigit, 'A'));
        assert!(in_class(&HexDigit, 'F'));

        assert!(!in_class(&HexDigit, 'g'));
        assert!(!in_class(&HexDigit, 'G'));
        assert!(!in_class(&HexDigit, '='));
    }

    #[test]
    fn test_name_start_char_ascii() {
        assert!(in_class(&NameStartChar, ':'));
        assert!(in_class(&NameStartChar, '_'));
        assert!(in_class(&NameStartChar, 'A'));
        assert!(in_class(&NameStartChar, 'M'));
        assert!(in_class(&NameStartChar, 'Z'));
        assert!(in_class(&NameStartChar, 'a'));
        assert!(in_class(&NameStartChar, 'm'));
        assert!(in_class(&NameStartChar, 'z'));

        assert!(!in_class(&NameStartChar, '-'));
        assert!(!in_class(&NameStartChar, '.'));
        assert!(!in_class(&NameStartChar, '+'));
        assert!(!in_class(&NameStartChar, '0'));
        assert!(!in_class(&NameStartChar, '9'));
    }

    #[test]
    fn test_name_start_char_latin_ranges() {
        // [#xC0-#xD6] | [#xD8-#xF6] | [#xF8-#x2FF]
        assert!(!NameStartChar.contains_value(0xB7));
        assert!(NameStartChar.contains_value(0xC0));
        assert!(NameStartChar.contains_value(0xC8));
        assert!(NameStartChar.contains_value(0xD6));
        assert!(!NameStartChar.contains_value(0xD7));
        assert!(NameStartChar.contains_value(0xD8));
        assert!(NameStartChar.contains_value(0xF6));
        assert!(!NameStartChar.contains_value(0xF7));
        assert!(NameStartChar.contains_value(0xF8));
        assert!(NameStartChar.contains_value(0x179));
        assert!(NameStartChar.contains_value(0x2FF));
    }

    #[test]
    fn test_name_start_char_greek_ranges() {
        // combining marks are not start characters
        assert!(!NameStartChar.contains_value(0x300));
        assert!(!NameStartChar.contains_value(0x36F));

        // [#x370-#x37D] | [#x37F-#x1FFF]
        assert!(NameStartChar.contains_value(0x370));
        assert!(NameStartChar.contains_value(0x37D));
        assert!(!NameStartChar.contains_value(0x37E));
        assert!(NameStartChar.contains_value(0x37F));
        assert!(NameStartChar.contains_value(0x596));
        assert!(NameStartChar.contains_value(0x1FFF));
    }

    #[test]
    fn test_name_start_char_punctuation_gap() {
        // [#x200C-#x200D] | [#x2070-#x218F] | [#x2C00-#x2FEF]
        assert!(!NameStartChar.contains_value(0x2000));
        assert!(NameStartChar.contains_value(0x200C));
        assert!(NameStartChar.contains_value(0x200D));
        assert!(!NameStartChar.contains_value(0x200E));
        assert!(!NameStartChar.contains_value(0x203F));
        assert!(!NameStartChar.contains_value(0x2040));
        assert!(NameStartChar.contains_value(0x2070));
        assert!(NameStartChar.contains_value(0x218F));
        assert!(!NameStartChar.contains_value(0x2190));
        assert!(NameStartChar.contains_value(0x2C00));
        assert!(NameStartChar.contains_value(0x2FEF));
        assert!(!NameStartChar.contains_value(0x2FF0));
    }

    #[test]
    fn test_name_start_char_cjk_and_plane_ranges() {
        // [#x3001-#xD7FF] | [#xF900-#xFDCF] | [#xFDF0-#xFFFD]
        assert!(!NameStartChar.contains_value(0x3000));
        assert!(NameStartChar.contains_value(0x3001));
        assert!(NameStartChar.contains_value(0xD7FF));
        assert!(!NameStartChar.contains_value(0xD800));
        assert!(!NameStartChar.contains_value(0xE000));
        assert!(NameStartChar.contains_value(0xF900));
        assert!(NameStartChar.contains_value(0xFDCF));
        assert!(!NameStartChar.contains_value(0xFDD0));
        assert!(NameStartChar.contains_value(0xFDF0));
        assert!(NameStartChar.contains_value(0xFFFD));
        assert!(!NameStartChar.contains_value(0xFFFE));

        // [#x10000-#xEFFFF]
        assert!(NameStartChar.contains_value(0x1_0000));
        assert!(NameStartChar.contains_value(0x1F601));
        assert!(NameStartChar.contains_value(0xEFFFF));
        assert!(!NameStartChar.contains_value(0xF0000));
        assert!(!NameStartChar.contains_value(0x10FFFF));
    }

    #[test]
    fn test_name_char_extends_name_start_char() {
        assert!(in_class(&NameChar, ':'));
        assert!(in_class(&NameChar, '_'));
        assert!(in_class(&NameChar, 'a'));
        assert!(in_class(&NameChar, 'Z'));

        // the continuation-only additions
        assert!(in_class(&NameChar, '-'));
        assert!(in_class(&NameChar, '.'));
        assert!(in_class(&NameChar, '0'));
        assert!(in_class(&NameChar, '9'));
        assert!(NameChar.contains_value(0xB7));
        assert!(NameChar.contains_value(0x300));
        assert!(NameChar.contains_value(0x36F));
        assert!(NameChar.contains_value(0x203F));
        assert!(NameChar.contains_value(0x2040));

        assert!(!in_class(&NameChar, '+'));
        assert!(!in_class(&NameChar, '='));
        assert!(!in_class(&NameChar, ' '));
    }

    #[test]
    fn test_name_char_honors_name_start_char_gaps() {
        assert!(!NameChar.contains_value(0xD7));
        assert!(!NameChar.contains_value(0xF7));
        assert!(!NameChar.contains_value(0x37E));
        assert!(!NameChar.contains_value(0x2041));
        assert!(!NameChar.contains_value(0xF0000));
    }

    #[test]
    fn test_classes_reject_end_of_buffer_sentinel() {
        let sentinel = Codepoint::new(u32::MAX);
        assert!(!Digit.contains(sentinel));
        assert!(!HexDigit.contains(sentinel));
        assert!(!NameStartChar.contains(sentinel));
        assert!(!NameChar.contains(sentinel));
    }
}
