//! Source encoding detection and conversion
//!
//! Handles detection of UTF-16 and UTF-8 input based on BOM and byte
//! patterns, and converts raw bytes into the UTF-16 code-unit buffer the
//! reader scans. UTF-16 payloads are reinterpreted unit by unit: unpaired
//! surrogates are kept as-is rather than rejected, so the reader's
//! lone-surrogate handling applies to byte input too.

use thiserror::Error;

/// Detected encoding of raw source bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl SourceEncoding {
    /// Detect encoding from a byte order mark or initial bytes.
    pub fn detect(input: &[u8]) -> Self {
        if input.len() < 2 {
            return SourceEncoding::Utf8;
        }

        // Check for BOM
        match (input[0], input[1]) {
            // UTF-16 LE BOM: 0xFF 0xFE
            (0xFF, 0xFE) => SourceEncoding::Utf16Le,
            // UTF-16 BE BOM: 0xFE 0xFF
            (0xFE, 0xFF) => SourceEncoding::Utf16Be,
            // UTF-8 BOM: 0xEF 0xBB 0xBF (detected but treated as UTF-8)
            (0xEF, 0xBB) if input.len() >= 3 && input[2] == 0xBF => SourceEncoding::Utf8,
            // No BOM - check for UTF-16 pattern (< followed by null or null followed by <)
            (0x00, b'<') => SourceEncoding::Utf16Be,
            (b'<', 0x00) => SourceEncoding::Utf16Le,
            _ => SourceEncoding::Utf8,
        }
    }
}

/// Conversion failures for byte input.
///
/// UTF-16 content errors (unpaired surrogates) are deliberately absent:
/// those pass through to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid UTF-16 payload: odd number of bytes ({len})")]
    OddByteCount { len: usize },

    #[error("invalid UTF-8 input: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Convert raw source bytes into UTF-16 code units.
///
/// The encoding is detected via [`SourceEncoding::detect`]; a leading BOM is
/// stripped. UTF-8 input must be valid; UTF-16 input only needs an even byte
/// count.
pub fn decode_to_utf16(input: &[u8]) -> Result<Vec<u16>, EncodingError> {
    let encoding = SourceEncoding::detect(input);

    #[cfg(feature = "logging")]
    log::debug!("decoding {} bytes of {:?} input", input.len(), encoding);

    match encoding {
        SourceEncoding::Utf8 => {
            let body = input.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(input);
            let text = std::str::from_utf8(body)?;
            Ok(utf16_units(text))
        }
        SourceEncoding::Utf16Le => {
            let body = input.strip_prefix(&[0xFF, 0xFE][..]).unwrap_or(input);
            collect_units(body, u16::from_le_bytes)
        }
        SourceEncoding::Utf16Be => {
            let body = input.strip_prefix(&[0xFE, 0xFF][..]).unwrap_or(input);
            collect_units(body, u16::from_be_bytes)
        }
    }
}

/// Encode a string as the UTF-16 code-unit buffer the reader scans.
pub fn utf16_units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

fn collect_units(bytes: &[u8], assemble: fn([u8; 2]) -> u16) -> Result<Vec<u16>, EncodingError> {
    if bytes.len() % 2 != 0 {
        return Err(EncodingError::OddByteCount { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|chunk| assemble([chunk[0], chunk[1]]))
        .collect())
}
