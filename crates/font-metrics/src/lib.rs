//! Font Metrics - read-only font data for the standard 14 fonts
//!
//! This crate provides:
//! - Rune to byte tables for the predefined single-byte encodings
//!   (StandardEncoding, WinAnsiEncoding, MacRomanEncoding, PDFDocEncoding)
//! - Glyph code points and advance widths for the standard 14 fonts
//! - A table model for caller-supplied custom encodings
//!
//! All tables are built once per process and never mutated afterwards, so they
//! can be shared freely between threads.
//!
//! # Example
//!
//! ```ignore
//! use font_metrics::{Encoding, StandardFont};
//!
//! let helvetica = StandardFont::Helvetica.metrics();
//! assert_eq!(helvetica.width('A'), Some(667));
//!
//! let win_ansi = Encoding::WinAnsi;
//! assert_eq!(win_ansi.table().and_then(|t| t.code('€')), Some(0x80));
//! ```

mod encoding;
mod encoding_tables;
mod metrics;
mod metrics_data;

pub use encoding::{Encoding, EncodingTable};
pub use metrics::{glyph_name, FontMetrics, GlyphInfo, StandardFont};

use thiserror::Error;

/// Errors that can occur while looking up font data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("Unknown font: {0}")]
    UnknownFont(String),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Invalid encoding table: {0}")]
    InvalidEncodingTable(String),
}

/// Result type for font data operations
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Returns true if `name` is one of the standard 14 font names
pub fn is_builtin_font(name: &str) -> bool {
    StandardFont::from_name(name).is_some()
}

/// Returns true if `name` is one of the predefined encoding names
pub fn is_builtin_encoding(name: &str) -> bool {
    name.parse::<Encoding>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_builtin_font() {
        assert!(is_builtin_font("Helvetica"));
        assert!(is_builtin_font("ZapfDingbats"));
        assert!(!is_builtin_font("Arial"));
        assert!(!is_builtin_font("helvetica"));
    }

    #[test]
    fn test_is_builtin_encoding() {
        assert!(is_builtin_encoding("StandardEncoding"));
        assert!(is_builtin_encoding("WinAnsiEncoding"));
        assert!(is_builtin_encoding("MacRomanEncoding"));
        assert!(is_builtin_encoding("PDFDocEncoding"));
        assert!(!is_builtin_encoding("MacExpertEncoding"));
    }

    #[test]
    fn test_error_display() {
        let err = MetricsError::UnknownFont("Arial".to_string());
        assert_eq!(err.to_string(), "Unknown font: Arial");
    }
}
