//! Serialization of objects into PDF syntax
//!
//! Every object kind appends its byte representation to a growable buffer.
//! Dispatch is a single exhaustive `match` over [`Object`].

use crate::object::{Dictionary, Name, Object, Reference, Stream};
use crate::{PdfError, Result};

pub(crate) const NEWLINE: &[u8] = b"\r\n";

const STREAM_BEGIN: &[u8] = b"\r\nstream\r\n";
const STREAM_END: &[u8] = b"\r\nendstream";

/// Fractional digits kept when writing real numbers
const REAL_PRECISION: usize = 5;

/// An object together with the number it is filed under
///
/// Marshals as `N G obj\r\n<payload>\r\nendobj`.
#[derive(Debug, Clone, Copy)]
pub struct IndirectObject<'a> {
    pub reference: Reference,
    pub object: &'a Object,
}

impl<'a> IndirectObject<'a> {
    pub fn new(reference: Reference, object: &'a Object) -> Self {
        Self { reference, object }
    }

    pub fn marshal(&self, out: &mut Vec<u8>) -> Result<()> {
        let (number, generation) = self.reference.id();
        out.extend_from_slice(format!("{number} {generation} obj").as_bytes());
        out.extend_from_slice(NEWLINE);
        self.object
            .marshal(out)
            .map_err(|e| e.in_object(self.reference.id()))?;
        out.extend_from_slice(NEWLINE);
        out.extend_from_slice(b"endobj");
        Ok(())
    }
}

impl Object {
    /// Append this object as the payload of an indirect object
    ///
    /// Streams are accepted here; nested anywhere else they are rejected.
    pub fn marshal(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Object::Stream(stream) => stream.marshal(out),
            other => other.marshal_direct(out),
        }
    }

    fn marshal_direct(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Object::Null => out.extend_from_slice(b"null"),
            Object::Boolean(true) => out.extend_from_slice(b"true"),
            Object::Boolean(false) => out.extend_from_slice(b"false"),
            Object::Integer(value) => out.extend_from_slice(value.to_string().as_bytes()),
            Object::Real(value) => out.extend_from_slice(format_number(*value)?.as_bytes()),
            Object::String(bytes) => write_string(bytes, out),
            Object::Name(name) => name.marshal(out),
            Object::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.marshal_direct(out)?;
                }
                out.push(b']');
            }
            Object::Dictionary(dict) => write_dictionary(dict, None, out)?,
            Object::Stream(_) => {
                return Err(PdfError::unsupported(
                    "stream nested inside another object; streams must be indirect",
                ))
            }
            Object::Reference(reference) => {
                out.extend_from_slice(reference.to_string().as_bytes())
            }
        }
        Ok(())
    }
}

impl Name {
    /// Append `/name`, escaping bytes outside `!`..=`~` and `#`, `(`, `)` as `#XX`
    pub fn marshal(&self, out: &mut Vec<u8>) {
        out.push(b'/');
        for &b in self.as_bytes() {
            if needs_escape(b) {
                out.extend_from_slice(format!("#{b:02X}").as_bytes());
            } else {
                out.push(b);
            }
        }
    }
}

/// Bytes outside the regular printable range, plus `#` and the PDF delimiters
fn needs_escape(b: u8) -> bool {
    !(0x21..=0x7e).contains(&b)
        || matches!(
            b,
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
        )
}

impl Stream {
    fn marshal(&self, out: &mut Vec<u8>) -> Result<()> {
        write_dictionary(self.dict(), Some(self.content().len()), out)?;
        out.extend_from_slice(STREAM_BEGIN);
        out.extend_from_slice(self.content());
        out.extend_from_slice(STREAM_END);
        Ok(())
    }
}

/// Write `<< /Key value ... >>`
///
/// With `length` set, the `Length` entry is forced to that value: replaced in
/// place when present, appended otherwise.
fn write_dictionary(dict: &Dictionary, length: Option<usize>, out: &mut Vec<u8>) -> Result<()> {
    out.extend_from_slice(b"<<");
    let mut length_written = false;
    for (key, value) in dict.iter() {
        out.push(b' ');
        key.marshal(out);
        out.push(b' ');
        match length {
            Some(len) if key.as_bytes() == b"Length" => {
                out.extend_from_slice(len.to_string().as_bytes());
                length_written = true;
            }
            _ => value.marshal_direct(out)?,
        }
    }
    if let Some(len) = length {
        if !length_written {
            out.extend_from_slice(format!(" /Length {len}").as_bytes());
        }
    }
    out.extend_from_slice(b" >>");
    Ok(())
}

/// Write a literal string, escaping delimiters and control characters
pub(crate) fn write_string(bytes: &[u8], out: &mut Vec<u8>) {
    out.push(b'(');
    for &b in bytes {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'(' => out.extend_from_slice(b"\\("),
            b')' => out.extend_from_slice(b"\\)"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0c => out.extend_from_slice(b"\\f"),
            _ => out.push(b),
        }
    }
    out.push(b')');
}

/// Format a number the way PDF content expects: no exponent, no trailing zeros
pub(crate) fn format_number(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(PdfError::unsupported(format!("real number {value}")));
    }

    let mut s = format!("{:.*}", REAL_PRECISION, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary;
    use pretty_assertions::assert_eq;

    fn marshal(obj: impl Into<Object>) -> String {
        let mut out = Vec::new();
        obj.into().marshal(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(marshal(Object::Null), "null");
        assert_eq!(marshal(true), "true");
        assert_eq!(marshal(false), "false");
        assert_eq!(marshal(-42), "-42");
        assert_eq!(marshal(Reference::new(3, 0)), "3 0 R");
    }

    #[test]
    fn test_reals() {
        assert_eq!(marshal(12.0), "12");
        assert_eq!(marshal(12.0 * 1.2), "14.4");
        assert_eq!(marshal(0.5), "0.5");
        assert_eq!(marshal(-0.000001), "0");
        assert_eq!(marshal(595.28), "595.28");
        assert_eq!(marshal(1.0 / 3.0), "0.33333");
    }

    #[test]
    fn test_non_finite_real_is_unsupported() {
        let mut out = Vec::new();
        let err = Object::Real(f64::NAN).marshal(&mut out).unwrap_err();
        assert!(matches!(err, PdfError::UnsupportedValue { object: None, .. }));
    }

    #[test]
    fn test_name_escaping() {
        assert_eq!(marshal(Name::from("Type")), "/Type");
        assert_eq!(marshal(Name::from("A B")), "/A#20B");
        assert_eq!(marshal(Name::from("Paired()")), "/Paired#28#29");
        assert_eq!(marshal(Name::new(vec![b'x', 0xe9])), "/x#E9");
        assert_eq!(marshal(Name::new(vec![0x7f])), "/#7F");
    }

    #[test]
    fn test_name_escapes_delimiters() {
        assert_eq!(marshal(Name::from("a/b[c]")), "/a#2Fb#5Bc#5D");
        assert_eq!(marshal(Name::from("<<x>>")), "/#3C#3Cx#3E#3E");
        assert_eq!(marshal(Name::from("{50%}")), "/#7B50#25#7D");
        assert_eq!(marshal(Name::from("Times-Roman")), "/Times-Roman");
    }

    #[test]
    fn test_name_escaping_is_applied_once() {
        // A literal '#' in the data is itself escaped, so "A#20" never reads back as "A B"
        assert_eq!(marshal(Name::from("A#20")), "/A#2320");
        assert_eq!(marshal(Name::from("#")), "/#23");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(marshal(Object::string("Hello")), "(Hello)");
        assert_eq!(marshal(Object::string("a(b)c")), "(a\\(b\\)c)");
        assert_eq!(marshal(Object::string("back\\slash")), "(back\\\\slash)");
        assert_eq!(marshal(Object::string("line\nbreak\r")), "(line\\nbreak\\r)");
    }

    #[test]
    fn test_array() {
        assert_eq!(marshal(vec![Object::from(0), 0.into(), 612.into(), 792.into()]), "[0 0 612 792]");
        assert_eq!(marshal(Vec::<Object>::new()), "[]");
        assert_eq!(
            marshal(vec![Object::from("A"), Object::from(vec![1, 2])]),
            "[/A [1 2]]"
        );
    }

    #[test]
    fn test_dictionary() {
        let dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "Widths" => vec![278, 556],
            "Parent" => Reference::new(2, 0),
        };
        assert_eq!(
            marshal(dict),
            "<< /Type /Font /Subtype /Type1 /Widths [278 556] /Parent 2 0 R >>"
        );
        assert_eq!(marshal(Dictionary::new()), "<< >>");
    }

    #[test]
    fn test_stream_length_is_computed() {
        let stream = Stream::new(dictionary! { "Type" => "XObject" }, b"0 0 m 10 10 l S".to_vec());
        assert_eq!(
            marshal(stream),
            "<< /Type /XObject /Length 15 >>\r\nstream\r\n0 0 m 10 10 l S\r\nendstream"
        );
    }

    #[test]
    fn test_stream_length_replaced_in_place() {
        let stream = Stream::new(
            dictionary! { "Length" => 999, "Filter" => "None" },
            vec![0u8, 1, 2],
        );
        let out = marshal(stream);
        assert!(out.starts_with("<< /Length 3 /Filter /None >>"));
    }

    #[test]
    fn test_stream_with_binary_content() {
        let content = vec![0u8, 0xff, b'\r', b'\n', b')'];
        let mut out = Vec::new();
        Object::from(Stream::new(Dictionary::new(), content.clone()))
            .marshal(&mut out)
            .unwrap();
        let start = out.windows(8).position(|w| w == b"stream\r\n").unwrap() + 8;
        assert_eq!(&out[start..start + content.len()], content.as_slice());
    }

    #[test]
    fn test_nested_stream_is_unsupported() {
        let inner = Stream::new(Dictionary::new(), vec![]);
        let dict = dictionary! { "Bad" => inner };
        let mut out = Vec::new();
        let err = Object::from(dict).marshal(&mut out).unwrap_err();
        assert!(matches!(err, PdfError::UnsupportedValue { .. }));
    }

    #[test]
    fn test_indirect_object() {
        let obj = Object::from(dictionary! { "Type" => "Catalog" });
        let mut out = Vec::new();
        IndirectObject::new(Reference::new(1, 0), &obj)
            .marshal(&mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 0 obj\r\n<< /Type /Catalog >>\r\nendobj"
        );
    }

    #[test]
    fn test_indirect_object_error_names_object() {
        let obj = Object::from(vec![Object::Real(f64::INFINITY)]);
        let mut out = Vec::new();
        let err = IndirectObject::new(Reference::new(6, 0), &obj)
            .marshal(&mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            PdfError::UnsupportedValue {
                object: Some((6, 0)),
                ..
            }
        ));
    }
}
