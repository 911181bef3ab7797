//! Named single-byte encodings

use crate::encoding_tables::{MAC_ROMAN, PDF_DOC, WIN_ANSI};
use crate::{MetricsError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

static WIN_ANSI_TABLE: Lazy<EncodingTable> =
    Lazy::new(|| EncodingTable::from_static("WinAnsiEncoding", WIN_ANSI));
static MAC_ROMAN_TABLE: Lazy<EncodingTable> =
    Lazy::new(|| EncodingTable::from_static("MacRomanEncoding", MAC_ROMAN));
static PDF_DOC_TABLE: Lazy<EncodingTable> =
    Lazy::new(|| EncodingTable::from_static("PDFDocEncoding", PDF_DOC));

/// A rune to byte mapping for a single-byte encoding
///
/// The predefined encodings are exposed through [`Encoding::table`]; callers
/// that need a different mapping build their own table with
/// [`EncodingTable::new`] and wrap it in [`Encoding::Custom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTable {
    name: String,
    codes: HashMap<char, u8>,
}

impl EncodingTable {
    /// Build a table from `(rune, byte)` pairs
    ///
    /// Several runes may share a byte, but a rune may only be listed once
    /// (or repeatedly with the same byte).
    pub fn new(name: &str, entries: &[(char, u8)]) -> Result<Self> {
        if name.is_empty() {
            return Err(MetricsError::InvalidEncodingTable(
                "encoding name is empty".to_string(),
            ));
        }

        let mut codes = HashMap::with_capacity(entries.len());
        for &(rune, code) in entries {
            if let Some(prev) = codes.insert(rune, code) {
                if prev != code {
                    return Err(MetricsError::InvalidEncodingTable(format!(
                        "rune {rune:?} mapped to both {prev:#04x} and {code:#04x}"
                    )));
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            codes,
        })
    }

    fn from_static(name: &str, entries: &[(char, u8)]) -> Self {
        Self {
            name: name.to_string(),
            codes: entries.iter().copied().collect(),
        }
    }

    /// Encoding name as written in font dictionaries
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte for `rune`, if the encoding has one
    pub fn code(&self, rune: char) -> Option<u8> {
        self.codes.get(&rune).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(rune, byte)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.codes.iter().map(|(&rune, &code)| (rune, code))
    }
}

/// Character encoding used to map text runes to font code points
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// The font's built-in encoding, taken from its metrics table
    #[default]
    #[serde(rename = "StandardEncoding")]
    Standard,
    #[serde(rename = "WinAnsiEncoding")]
    WinAnsi,
    #[serde(rename = "MacRomanEncoding")]
    MacRoman,
    #[serde(rename = "PDFDocEncoding")]
    PdfDoc,
    /// Caller-supplied table
    #[serde(skip)]
    Custom(Arc<EncodingTable>),
}

impl Encoding {
    /// Wrap a caller-supplied table
    pub fn custom(table: EncodingTable) -> Self {
        Encoding::Custom(Arc::new(table))
    }

    /// Encoding name (e.g. "WinAnsiEncoding")
    pub fn name(&self) -> &str {
        match self {
            Encoding::Standard => "StandardEncoding",
            Encoding::WinAnsi => "WinAnsiEncoding",
            Encoding::MacRoman => "MacRomanEncoding",
            Encoding::PdfDoc => "PDFDocEncoding",
            Encoding::Custom(table) => table.name(),
        }
    }

    /// Rune to byte table
    ///
    /// Returns `None` for [`Encoding::Standard`], whose code points depend on
    /// the font and come from the font's metrics instead.
    pub fn table(&self) -> Option<&EncodingTable> {
        match self {
            Encoding::Standard => None,
            Encoding::WinAnsi => Some(&*WIN_ANSI_TABLE),
            Encoding::MacRoman => Some(&*MAC_ROMAN_TABLE),
            Encoding::PdfDoc => Some(&*PDF_DOC_TABLE),
            Encoding::Custom(table) => Some(table.as_ref()),
        }
    }

    /// True for the four predefined encodings
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Encoding::Custom(_))
    }
}

impl FromStr for Encoding {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "StandardEncoding" => Ok(Encoding::Standard),
            "WinAnsiEncoding" => Ok(Encoding::WinAnsi),
            "MacRomanEncoding" => Ok(Encoding::MacRoman),
            "PDFDocEncoding" => Ok(Encoding::PdfDoc),
            other => Err(MetricsError::UnknownEncoding(other.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_win_ansi_table() {
        let table = Encoding::WinAnsi.table().unwrap();
        assert_eq!(table.name(), "WinAnsiEncoding");
        assert_eq!(table.code('A'), Some(0x41));
        assert_eq!(table.code('\u{20ac}'), Some(0x80));
        assert_eq!(table.code('\u{00e9}'), Some(0xe9));
        assert_eq!(table.code('\u{0391}'), None);
    }

    #[test]
    fn test_mac_roman_differs_from_win_ansi() {
        let mac = Encoding::MacRoman.table().unwrap();
        let win = Encoding::WinAnsi.table().unwrap();
        assert_eq!(mac.code('a'), win.code('a'));
        assert_ne!(mac.code('\u{00e9}'), win.code('\u{00e9}'));
    }

    #[test]
    fn test_pdf_doc_table() {
        let table = Encoding::PdfDoc.table().unwrap();
        assert_eq!(table.name(), "PDFDocEncoding");
        assert_eq!(table.code('Z'), Some(0x5a));
    }

    #[test]
    fn test_standard_has_no_table() {
        assert!(Encoding::Standard.table().is_none());
        assert_eq!(Encoding::default(), Encoding::Standard);
    }

    #[test]
    fn test_from_str_and_display() {
        for name in [
            "StandardEncoding",
            "WinAnsiEncoding",
            "MacRomanEncoding",
            "PDFDocEncoding",
        ] {
            let encoding: Encoding = name.parse().unwrap();
            assert_eq!(encoding.to_string(), name);
        }

        let err = "Latin1".parse::<Encoding>().unwrap_err();
        assert_eq!(err, MetricsError::UnknownEncoding("Latin1".to_string()));
    }

    #[test]
    fn test_custom_table() {
        let table = EncodingTable::new("Tiny", &[('a', 0x01), ('b', 0x02), ('c', 0x01)]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.code('c'), Some(0x01));

        let encoding = Encoding::custom(table);
        assert_eq!(encoding.name(), "Tiny");
        assert!(!encoding.is_builtin());
        assert_eq!(encoding.table().unwrap().code('b'), Some(0x02));
    }

    #[test]
    fn test_custom_table_conflict() {
        let err = EncodingTable::new("Bad", &[('a', 0x01), ('a', 0x02)]).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidEncodingTable(_)));

        // Repeating an identical entry is harmless
        assert!(EncodingTable::new("Ok", &[('a', 0x01), ('a', 0x01)]).is_ok());
    }

    #[test]
    fn test_custom_table_empty_name() {
        assert!(EncodingTable::new("", &[('a', 0x01)]).is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Encoding::WinAnsi).unwrap();
        assert_eq!(json, "\"WinAnsiEncoding\"");

        let encoding: Encoding = serde_json::from_str("\"MacRomanEncoding\"").unwrap();
        assert_eq!(encoding, Encoding::MacRoman);
    }
}
