//! Codepoint-level character model
//!
//! The building blocks a tokenizer sits on top of:
//! - Codepoint: a single Unicode scalar value, decoded from UTF-16 code units
//! - CharacterClass: XML 1.0 lexical category predicates (Digit, NameStartChar, ...)
//! - CodepointReader: a cursor over a UTF-16 buffer with surrogate-pair decoding
//! - Encoding: detection and conversion of raw bytes into UTF-16 code units

pub mod classes;
pub mod codepoint;
pub mod encoding;
pub mod reader;

pub use classes::{CharacterClass, Digit, HexDigit, NameChar, NameStartChar};
pub use codepoint::Codepoint;
pub use encoding::{decode_to_utf16, utf16_units, EncodingError, SourceEncoding};
pub use reader::CodepointReader;
