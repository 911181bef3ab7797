//! PDF Encoder - sequential PDF file writer
//!
//! This crate provides functionality for:
//! - Building a graph of indirect objects (dictionaries, arrays, streams, references)
//! - Serializing every object kind into PDF object syntax
//! - Writing a complete file (header, body, cross-reference table, trailer) in a
//!   single forward pass with byte-exact offsets
//! - Laying out text in the standard 14 fonts
//!
//! # Example
//!
//! ```ignore
//! use pdf_encoder::{dictionary, Document, Encoding, Text};
//!
//! let mut doc = Document::new();
//! let helvetica = doc.add_font("Helvetica", Encoding::WinAnsi)?;
//!
//! let mut text = Text::new();
//! text.set_font(&helvetica, 12.0)?;
//! text.next_line_offset(72.0, 720.0)?;
//! text.show("Hello, World!")?;
//!
//! let resources = dictionary! { "Font" => doc.font_resources(&text)? };
//! let contents = doc.add(text.into_stream());
//! // ... add page tree and catalog, then:
//! doc.set_root(catalog);
//! doc.save("hello.pdf")?;
//! ```

mod document;
mod encoder;
mod font;
mod marshal;
mod object;
mod registry;
mod text;
mod writer;

pub use document::Document;
pub use encoder::{Encoder, PDF_HEADER};
pub use font::{resolve, BoundFont, Font};
pub use marshal::IndirectObject;
pub use object::{Dictionary, Name, Object, Reference, Stream};
pub use registry::Registry;
pub use text::{Text, DEFAULT_LEADING_SCALAR};
pub use writer::OffsetWriter;

pub use font_metrics::{Encoding, EncodingTable, MetricsError, StandardFont};

use thiserror::Error;

/// Object number and generation of an indirect object
pub type ObjectId = (u32, u16);

/// Errors that can occur while building or encoding a document
#[derive(Debug, Error)]
pub enum PdfError {
    #[error(
        "Unsupported value{}: {reason}",
        .object.map(|(n, g)| format!(" in object {n} {g}")).unwrap_or_default()
    )]
    UnsupportedValue {
        object: Option<ObjectId>,
        reason: String,
    },

    #[error("No active font: call set_font before showing text")]
    NoActiveFont,

    #[error("Unsupported font/encoding combination: {font} with {encoding}")]
    UnsupportedFont { font: String, encoding: String },

    #[error(
        "Dangling reference {reference}{}",
        .referrer.map(|(n, g)| format!(" in object {n} {g}")).unwrap_or_default()
    )]
    DanglingReference {
        reference: Reference,
        referrer: Option<ObjectId>,
    },

    #[error("Document has no root object")]
    MissingRoot,

    #[error("Font not bound to document: {0}")]
    FontNotBound(String),

    #[error("Font already exists: {0}")]
    FontAlreadyExists(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Font data error: {0}")]
    MetricsError(#[from] MetricsError),
}

impl PdfError {
    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        PdfError::UnsupportedValue {
            object: None,
            reason: reason.into(),
        }
    }

    /// Attach the enclosing indirect object to errors that don't name one yet
    pub(crate) fn in_object(self, id: ObjectId) -> Self {
        match self {
            PdfError::UnsupportedValue {
                object: None,
                reason,
            } => PdfError::UnsupportedValue {
                object: Some(id),
                reason,
            },
            other => other,
        }
    }
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_value_message() {
        let err = PdfError::unsupported("real number NaN");
        assert_eq!(err.to_string(), "Unsupported value: real number NaN");

        let err = err.in_object((4, 0));
        assert_eq!(
            err.to_string(),
            "Unsupported value in object 4 0: real number NaN"
        );
    }

    #[test]
    fn test_in_object_keeps_innermost() {
        let err = PdfError::unsupported("x").in_object((2, 0)).in_object((9, 0));
        assert!(matches!(
            err,
            PdfError::UnsupportedValue {
                object: Some((2, 0)),
                ..
            }
        ));
    }

    #[test]
    fn test_dangling_reference_message() {
        let err = PdfError::DanglingReference {
            reference: Reference::new(7, 0),
            referrer: Some((1, 0)),
        };
        assert_eq!(err.to_string(), "Dangling reference 7 0 R in object 1 0");
    }

    #[test]
    fn test_package_metadata() {
        assert_eq!(env!("CARGO_PKG_NAME"), "pdf-encoder");
        assert_eq!(env!("CARGO_PKG_AUTHORS"), "pdf-encoder contributors");
        assert_eq!(env!("CARGO_PKG_REPOSITORY"), "");
    }

    #[test]
    fn test_metrics_error_converts() {
        fn build() -> Result<EncodingTable> {
            Ok(EncodingTable::new("", &[('a', 1)])?)
        }
        assert!(matches!(build(), Err(PdfError::MetricsError(_))));
    }
}
