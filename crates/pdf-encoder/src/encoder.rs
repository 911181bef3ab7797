//! Single-pass PDF file encoder

use crate::dictionary;
use crate::marshal::{IndirectObject, NEWLINE};
use crate::object::{Object, Reference};
use crate::registry::Registry;
use crate::writer::OffsetWriter;
use crate::{ObjectId, PdfError, Result};
use log::{debug, trace};
use std::io::Write;

/// File header: version line, then a comment of high bytes marking the file as binary
pub const PDF_HEADER: &[u8] = b"%PDF-1.7\r\n%\x93\x8c\x8b\x9e\r\n";

/// Largest offset a 10-digit cross-reference entry can hold
const MAX_XREF_OFFSET: u64 = 9_999_999_999;

/// Generation of the free-list head, object 0
const FREE_HEAD_GENERATION: u16 = 65535;

/// Writes the objects of one [`Registry`] as a complete PDF file
///
/// The encoder is consumed by [`Encoder::encode`]; each document gets its own.
#[derive(Debug)]
pub struct Encoder {
    registry: Registry,
}

impl Encoder {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Write header, body, cross-reference table and trailer to `writer`
    ///
    /// Every reference in the object graph, and `root`, is checked before the
    /// first byte is written. Output is produced front to back and never
    /// revisited; if an error is returned mid-way, whatever reached `writer`
    /// is not a valid file and should be discarded.
    ///
    /// Returns the number of bytes written.
    pub fn encode<W: Write>(self, root: Reference, writer: W) -> Result<u64> {
        self.check_references(root)?;

        let mut w = OffsetWriter::new(writer);
        w.write_all(PDF_HEADER)?;

        // Body
        let mut offsets = Vec::with_capacity(self.registry.len());
        let mut buf = Vec::new();
        for (reference, object) in self.registry.iter() {
            let offset = w.offset();
            if offset > MAX_XREF_OFFSET {
                return Err(PdfError::unsupported(format!(
                    "offset {offset} does not fit a cross-reference entry"
                )));
            }
            offsets.push(offset);
            trace!("object {} at offset {}", reference.number(), offset);

            buf.clear();
            IndirectObject::new(reference, object).marshal(&mut buf)?;
            buf.extend_from_slice(NEWLINE);
            w.write_all(&buf)?;
        }

        // Cross-reference table
        let xref_offset = w.offset();
        let size = offsets.len() + 1;
        w.write_all(b"xref\r\n")?;
        write!(w, "0 {size}\r\n")?;
        write!(w, "{:010} {:05} f\r\n", 0, FREE_HEAD_GENERATION)?;
        for offset in &offsets {
            write!(w, "{:010} {:05} n\r\n", offset, 0)?;
        }

        // Trailer
        let trailer = Object::from(dictionary! {
            "Size" => size,
            "Root" => root,
        });
        buf.clear();
        trailer.marshal(&mut buf)?;
        w.write_all(b"trailer\r\n")?;
        w.write_all(&buf)?;
        w.write_all(NEWLINE)?;
        write!(w, "startxref\r\n{xref_offset}\r\n")?;
        w.write_all(b"%%EOF\r\n")?;
        w.flush()?;

        debug!(
            "encoded {} objects, {} bytes, xref at {}",
            offsets.len(),
            w.offset(),
            xref_offset
        );
        Ok(w.offset())
    }

    /// Fail on any reference that names an object the registry doesn't hold
    fn check_references(&self, root: Reference) -> Result<()> {
        if !self.registry.contains(root) {
            return Err(PdfError::DanglingReference {
                reference: root,
                referrer: None,
            });
        }
        for (reference, object) in self.registry.iter() {
            self.check_object(object, reference.id())?;
        }
        Ok(())
    }

    fn check_object(&self, object: &Object, referrer: ObjectId) -> Result<()> {
        match object {
            Object::Reference(reference) => {
                if !self.registry.contains(*reference) {
                    return Err(PdfError::DanglingReference {
                        reference: *reference,
                        referrer: Some(referrer),
                    });
                }
            }
            Object::Array(items) => {
                for item in items {
                    self.check_object(item, referrer)?;
                }
            }
            Object::Dictionary(dict) => {
                for (_, value) in dict.iter() {
                    self.check_object(value, referrer)?;
                }
            }
            Object::Stream(stream) => {
                for (_, value) in stream.dict().iter() {
                    self.check_object(value, referrer)?;
                }
            }
            Object::Null
            | Object::Boolean(_)
            | Object::Integer(_)
            | Object::Real(_)
            | Object::String(_)
            | Object::Name(_) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Stream;
    use pretty_assertions::assert_eq;
    use std::io;

    fn encode(registry: Registry, root: Reference) -> Vec<u8> {
        let mut out = Vec::new();
        Encoder::new(registry).encode(root, &mut out).unwrap();
        out
    }

    #[test]
    fn test_minimal_file_layout() {
        let mut registry = Registry::new();
        let root = registry.add(dictionary! { "Type" => "Catalog" });
        let out = encode(registry, root);

        let mut expected = PDF_HEADER.to_vec();
        // Object 1 starts right after the 17 header bytes
        assert_eq!(expected.len(), 17);
        expected.extend_from_slice(b"1 0 obj\r\n<< /Type /Catalog >>\r\nendobj\r\n");
        let xref_offset = expected.len();
        expected.extend_from_slice(b"xref\r\n0 2\r\n");
        expected.extend_from_slice(b"0000000000 65535 f\r\n");
        expected.extend_from_slice(b"0000000017 00000 n\r\n");
        expected.extend_from_slice(b"trailer\r\n<< /Size 2 /Root 1 0 R >>\r\n");
        expected.extend_from_slice(format!("startxref\r\n{xref_offset}\r\n%%EOF\r\n").as_bytes());

        assert_eq!(String::from_utf8_lossy(&out), String::from_utf8_lossy(&expected));
    }

    #[test]
    fn test_returns_byte_count() {
        let mut registry = Registry::new();
        let root = registry.add(dictionary! { "Type" => "Catalog" });
        registry.add(Stream::new(dictionary! {}, vec![0u8; 100]));

        let mut out = Vec::new();
        let written = Encoder::new(registry).encode(root, &mut out).unwrap();
        assert_eq!(written, out.len() as u64);
    }

    #[test]
    fn test_dangling_root() {
        let mut registry = Registry::new();
        registry.add(dictionary! { "Type" => "Catalog" });

        let mut out = Vec::new();
        let err = Encoder::new(registry)
            .encode(Reference::new(5, 0), &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            PdfError::DanglingReference { referrer: None, .. }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_dangling_reference_in_nested_value() {
        let mut registry = Registry::new();
        let root = registry.add(dictionary! { "Type" => "Catalog" });
        registry.add(dictionary! {
            "Kids" => vec![Object::from(root), Object::Reference(Reference::new(9, 0))],
        });

        let mut out = Vec::new();
        let err = Encoder::new(registry).encode(root, &mut out).unwrap_err();
        match err {
            PdfError::DanglingReference {
                reference,
                referrer,
            } => {
                assert_eq!(reference, Reference::new(9, 0));
                assert_eq!(referrer, Some((2, 0)));
            }
            other => panic!("unexpected error: {other}"),
        }
        // Nothing was written, not even the header
        assert!(out.is_empty());
    }

    #[test]
    fn test_reference_with_wrong_generation_is_dangling() {
        let mut registry = Registry::new();
        let root = registry.add(dictionary! { "Self" => Reference::new(1, 3) });
        let mut out = Vec::new();
        assert!(Encoder::new(registry).encode(root, &mut out).is_err());
    }

    #[test]
    fn test_stream_dictionary_references_are_checked() {
        let mut registry = Registry::new();
        let root = registry.add(dictionary! { "Type" => "Catalog" });
        registry.add(Stream::new(
            dictionary! { "Font" => Reference::new(40, 0) },
            vec![],
        ));
        let mut out = Vec::new();
        assert!(matches!(
            Encoder::new(registry).encode(root, &mut out),
            Err(PdfError::DanglingReference { .. })
        ));
    }

    #[test]
    fn test_forward_reference_is_fine() {
        let mut registry = Registry::new();
        let root = registry.add(dictionary! { "Pages" => Reference::new(2, 0) });
        registry.add(dictionary! { "Type" => "Pages" });
        let out = encode(registry, root);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_unsupported_value_aborts() {
        let mut registry = Registry::new();
        let root = registry.add(dictionary! { "Type" => "Catalog" });
        registry.add(vec![Object::Real(f64::NAN)]);
        let mut out = Vec::new();
        let err = Encoder::new(registry).encode(root, &mut out).unwrap_err();
        assert!(matches!(
            err,
            PdfError::UnsupportedValue {
                object: Some((2, 0)),
                ..
            }
        ));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut registry = Registry::new();
        let root = registry.add(dictionary! { "Type" => "Catalog" });
        let err = Encoder::new(registry)
            .encode(root, FailingWriter)
            .unwrap_err();
        assert!(matches!(err, PdfError::IoError(_)));
    }
}
