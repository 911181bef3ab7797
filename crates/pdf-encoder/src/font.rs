//! Font resolution and binding
//!
//! A [`Font`] is pure data: a name plus rune to code point and rune to width
//! maps. It becomes usable as a page resource once it is bound into a document
//! with [`Font::bind`], which adds its font dictionary to the registry and
//! yields a [`BoundFont`] carrying the dictionary's reference.

use crate::object::{Dictionary, Name, Object, Reference};
use crate::registry::Registry;
use crate::{dictionary, PdfError, Result};
use font_metrics::{Encoding, StandardFont};
use log::debug;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

/// Font descriptor: the data needed to encode and measure text
///
/// The maps are shared snapshots. Changing a font with [`Font::set_width`]
/// or [`Font::set_code_point`] copies the map first, so text already laid
/// out with an earlier clone keeps its bytes and widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    name: Name,
    encoding: Encoding,
    /// Source of glyph names for encoding differences
    standard: Option<StandardFont>,
    code_points: Arc<HashMap<char, u8>>,
    widths: Arc<HashMap<char, u16>>,
}

/// Resolve a font name and encoding into a [`Font`]
///
/// `font_name` must be one of the standard 14 fonts. The code point map is the
/// encoding's table restricted to glyphs the font has (or, for
/// [`Encoding::Standard`], the font's own code points); the width map covers
/// exactly the runes that have a code point. Symbolic fonts only resolve with
/// [`Encoding::Standard`].
pub fn resolve(font_name: &str, encoding: &Encoding) -> Result<Font> {
    let unsupported = || PdfError::UnsupportedFont {
        font: font_name.to_string(),
        encoding: encoding.name().to_string(),
    };

    let standard = StandardFont::from_name(font_name).ok_or_else(unsupported)?;
    if standard.is_symbolic() && *encoding != Encoding::Standard {
        return Err(unsupported());
    }

    let table = encoding.table();
    let mut code_points = HashMap::new();
    let mut widths = HashMap::new();
    for glyph in standard.metrics().iter() {
        let code = match table {
            Some(table) => table.code(glyph.rune),
            None => glyph.code_point,
        };
        if let Some(code) = code {
            code_points.insert(glyph.rune, code);
            widths.insert(glyph.rune, glyph.width);
        }
    }

    debug!(
        "resolved {} with {}: {} encodable runes",
        font_name,
        encoding,
        code_points.len()
    );

    Ok(Font {
        name: Name::from(font_name),
        encoding: encoding.clone(),
        standard: Some(standard),
        code_points: Arc::new(code_points),
        widths: Arc::new(widths),
    })
}

impl Font {
    /// Font with caller-supplied metrics
    ///
    /// `encoding` must carry a table (any encoding except
    /// [`Encoding::Standard`], which needs a standard font's metrics).
    /// Runes with a code point but no entry in `widths` advance by 0.
    pub fn custom(name: &str, encoding: Encoding, widths: &[(char, u16)]) -> Result<Self> {
        let table = encoding.table().ok_or_else(|| PdfError::UnsupportedFont {
            font: name.to_string(),
            encoding: encoding.name().to_string(),
        })?;
        let code_points: HashMap<char, u8> = table.iter().collect();
        let widths = widths
            .iter()
            .copied()
            .filter(|(rune, _)| code_points.contains_key(rune))
            .collect();

        Ok(Self {
            name: Name::from(name),
            encoding,
            standard: None,
            code_points: Arc::new(code_points),
            widths: Arc::new(widths),
        })
    }

    /// BaseFont name, also used as the resource name in content streams
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn code_point(&self, rune: char) -> Option<u8> {
        self.code_points.get(&rune).copied()
    }

    /// Width of `rune` in thousandths of the font size
    pub fn width(&self, rune: char) -> Option<u16> {
        self.widths.get(&rune).copied()
    }

    /// Override the width of one rune
    pub fn set_width(&mut self, rune: char, width: u16) {
        Arc::make_mut(&mut self.widths).insert(rune, width);
    }

    /// Override the code point of one rune
    pub fn set_code_point(&mut self, rune: char, code: u8) {
        Arc::make_mut(&mut self.code_points).insert(rune, code);
    }

    /// Encode `text` to single-byte codes, dropping runes the font can't show
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars().filter_map(|c| self.code_point(c)).collect()
    }

    /// Advance of `text` at `size` points
    ///
    /// Runes without a code point are dropped when shown, so they add nothing.
    pub fn string_width(&self, text: &str, size: f64) -> f64 {
        let total: u64 = text
            .chars()
            .filter(|c| self.code_points.contains_key(c))
            .filter_map(|c| self.width(c))
            .map(u64::from)
            .sum();
        total as f64 * size / 1000.0
    }

    /// Font dictionary for this font
    ///
    /// Code points that differ from the named encoding are listed in an
    /// `/Encoding` dictionary's `/Differences`, on top of the built-in
    /// encoding or `/BaseEncoding`.
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.name.clone(),
        };
        match &self.encoding {
            Encoding::Standard => {
                let metrics = self.standard.map(StandardFont::metrics);
                let differences = self.differences(|rune, code| {
                    metrics.and_then(|m| m.code_point(rune)) != Some(code)
                });
                if !differences.is_empty() {
                    dict.set(
                        "Encoding",
                        dictionary! {
                            "Type" => "Encoding",
                            "Differences" => differences,
                        },
                    );
                }
            }
            Encoding::WinAnsi | Encoding::MacRoman => {
                let table = self.encoding.table();
                let differences =
                    self.differences(|rune, code| table.and_then(|t| t.code(rune)) != Some(code));
                if differences.is_empty() {
                    dict.set("Encoding", self.encoding.name());
                } else {
                    dict.set(
                        "Encoding",
                        dictionary! {
                            "Type" => "Encoding",
                            "BaseEncoding" => self.encoding.name(),
                            "Differences" => differences,
                        },
                    );
                }
            }
            Encoding::PdfDoc | Encoding::Custom(_) => {
                let differences = self.differences(|_, _| true);
                if !differences.is_empty() {
                    dict.set(
                        "Encoding",
                        dictionary! {
                            "Type" => "Encoding",
                            "Differences" => differences,
                        },
                    );
                }
            }
        }
        dict
    }

    fn glyph_name(&self, rune: char) -> Option<&'static str> {
        self.standard
            .and_then(|font| font.metrics().glyph(rune))
            .map(|glyph| glyph.name)
            .or_else(|| font_metrics::glyph_name(rune))
    }

    /// `/Differences` array naming the glyph of every code selected by `diverges`
    ///
    /// Runes with no known glyph name are left out.
    fn differences(&self, diverges: impl Fn(char, u8) -> bool) -> Vec<Object> {
        let mut codes: Vec<(u8, &'static str)> = self
            .code_points
            .iter()
            .filter(|&(&rune, &code)| diverges(rune, code))
            .filter_map(|(&rune, &code)| self.glyph_name(rune).map(|name| (code, name)))
            .collect();
        codes.sort_unstable();
        codes.dedup_by_key(|(code, _)| *code);

        let mut differences = Vec::new();
        let mut next: Option<u8> = None;
        for (code, glyph) in codes {
            if next != Some(code) {
                differences.push(Object::from(code));
            }
            differences.push(Object::from(glyph));
            next = code.checked_add(1);
        }
        differences
    }

    /// Add this font's dictionary to `registry`
    pub fn bind(self, registry: &mut Registry) -> BoundFont {
        let reference = registry.add(self.to_dictionary());
        BoundFont {
            font: self,
            reference,
        }
    }
}

/// A font whose dictionary lives in a document's registry
#[derive(Debug, Clone, PartialEq)]
pub struct BoundFont {
    font: Font,
    reference: Reference,
}

impl BoundFont {
    /// Reference to the font dictionary
    pub fn reference(&self) -> Reference {
        self.reference
    }

    pub fn font(&self) -> &Font {
        &self.font
    }
}

impl Deref for BoundFont {
    type Target = Font;

    fn deref(&self) -> &Font {
        &self.font
    }
}

impl AsRef<Font> for BoundFont {
    fn as_ref(&self) -> &Font {
        &self.font
    }
}

impl AsRef<Font> for Font {
    fn as_ref(&self) -> &Font {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use font_metrics::EncodingTable;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_helvetica_standard() {
        let font = resolve("Helvetica", &Encoding::Standard).unwrap();
        assert_eq!(font.name(), &Name::from("Helvetica"));
        assert_eq!(font.code_point('A'), Some(0x41));
        assert_eq!(font.width('A'), Some(667));
        // Built-in encoding puts the curly quote at 0x27
        assert_eq!(font.code_point('\u{2019}'), Some(0x27));
        assert_eq!(font.code_point('\''), Some(0xa9));
    }

    #[test]
    fn test_resolve_helvetica_win_ansi() {
        let font = resolve("Helvetica", &Encoding::WinAnsi).unwrap();
        assert_eq!(font.code_point('\''), Some(0x27));
        assert_eq!(font.code_point('\u{2019}'), Some(0x92));
        assert_eq!(font.width('\''), Some(191));
        // WinAnsi has the euro, but the font's metrics don't
        assert_eq!(font.code_point('\u{20ac}'), None);
    }

    #[test]
    fn test_resolve_unknown_font() {
        let err = resolve("Arial", &Encoding::WinAnsi).unwrap_err();
        match err {
            PdfError::UnsupportedFont { font, encoding } => {
                assert_eq!(font, "Arial");
                assert_eq!(encoding, "WinAnsiEncoding");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(resolve("Arial", &Encoding::Standard).is_err());
    }

    #[test]
    fn test_resolve_symbol() {
        let font = resolve("Symbol", &Encoding::Standard).unwrap();
        assert_eq!(font.code_point('\u{03c0}'), Some(0x70));
        assert_eq!(font.code_point('p'), None);
        assert!(resolve("Symbol", &Encoding::WinAnsi).is_err());
    }

    #[test]
    fn test_resolve_custom_encoding() {
        let table = EncodingTable::new("Shuffled", &[('A', 0x01), ('B', 0x02), ('\u{0391}', 0x03)])
            .unwrap();
        let font = resolve("Times-Roman", &Encoding::custom(table)).unwrap();
        assert_eq!(font.code_point('A'), Some(0x01));
        assert_eq!(font.code_point('B'), Some(0x02));
        // Alpha is in the table but not in Times-Roman
        assert_eq!(font.code_point('\u{0391}'), None);
        assert_eq!(font.code_point('C'), None);
    }

    #[test]
    fn test_encode_drops_unknown_runes() {
        let font = resolve("Courier", &Encoding::WinAnsi).unwrap();
        assert_eq!(font.encode("a\u{4e2d}b"), b"ab".to_vec());
    }

    #[test]
    fn test_string_width() {
        let font = resolve("Helvetica", &Encoding::Standard).unwrap();
        // H=722 e=556 l=222 l=222 o=556 -> 2278
        let width = font.string_width("Hello", 10.0);
        assert!((width - 22.78).abs() < 1e-9);
        assert_eq!(font.string_width("\u{4e2d}", 10.0), 0.0);
    }

    #[test]
    fn test_string_width_of_long_text() {
        let font = resolve("Courier", &Encoding::Standard).unwrap();
        let text = "a".repeat(8_000_000);
        // 8e6 glyphs of 600 units sum past u32::MAX
        assert_eq!(font.string_width(&text, 10.0), 48_000_000.0);
    }

    #[test]
    fn test_latin1_text_in_win_ansi() {
        let font = resolve("Helvetica", &Encoding::WinAnsi).unwrap();
        assert_eq!(font.encode("Caf\u{00e9} M\u{00fc}ller"), b"Caf\xe9 M\xfcller".to_vec());
        // C=722 a=556 f=278 e-acute=556
        assert!((font.string_width("Caf\u{00e9}", 10.0) - 21.12).abs() < 1e-9);
    }

    #[test]
    fn test_set_width_copies_on_write() {
        let original = resolve("Courier", &Encoding::Standard).unwrap();
        let mut changed = original.clone();
        changed.set_width('a', 1000);
        assert_eq!(original.width('a'), Some(600));
        assert_eq!(changed.width('a'), Some(1000));
    }

    #[test]
    fn test_custom_font() {
        let table = EncodingTable::new("Mini", &[('x', 0x41), ('y', 0x42)]).unwrap();
        let font = Font::custom("MyFont", Encoding::custom(table), &[('x', 500), ('z', 700)]).unwrap();
        assert_eq!(font.code_point('x'), Some(0x41));
        assert_eq!(font.width('x'), Some(500));
        assert_eq!(font.width('y'), None);
        assert_eq!(font.width('z'), None);

        assert!(Font::custom("MyFont", Encoding::Standard, &[]).is_err());
    }

    #[test]
    fn test_custom_font_dictionary_names_glyphs() {
        let table = EncodingTable::new("Mini", &[('x', 0x41), ('y', 0x42), ('\u{03c0}', 0x50)]).unwrap();
        let font = Font::custom("MyFont", Encoding::custom(table), &[('x', 500)]).unwrap();
        let dict = font.to_dictionary();
        let encoding = dict.get("Encoding").and_then(Object::as_dict).unwrap();
        assert_eq!(encoding.get("Type"), Some(&Object::from("Encoding")));
        assert_eq!(
            encoding.get("Differences"),
            Some(&Object::Array(vec![
                Object::Integer(0x41),
                Object::from("x"),
                Object::from("y"),
                Object::Integer(0x50),
                Object::from("pi"),
            ]))
        );
    }

    #[test]
    fn test_dictionary_win_ansi() {
        let font = resolve("Helvetica-Bold", &Encoding::WinAnsi).unwrap();
        let dict = font.to_dictionary();
        assert_eq!(dict.get("BaseFont"), Some(&Object::from("Helvetica-Bold")));
        assert_eq!(dict.get("Encoding"), Some(&Object::from("WinAnsiEncoding")));
    }

    #[test]
    fn test_dictionary_win_ansi_with_override() {
        let mut font = resolve("Helvetica", &Encoding::WinAnsi).unwrap();
        font.set_code_point('\u{2212}', 0x2d);
        let dict = font.to_dictionary();
        let encoding = dict.get("Encoding").and_then(Object::as_dict).unwrap();
        assert_eq!(encoding.get("BaseEncoding"), Some(&Object::from("WinAnsiEncoding")));
        assert_eq!(
            encoding.get("Differences"),
            Some(&Object::Array(vec![Object::Integer(0x2d), Object::from("minus")]))
        );
    }

    #[test]
    fn test_dictionary_standard_with_override() {
        let mut font = resolve("Times-Roman", &Encoding::Standard).unwrap();
        font.set_code_point('\u{00e9}', 0x80);
        let dict = font.to_dictionary();
        let encoding = dict.get("Encoding").and_then(Object::as_dict).unwrap();
        assert!(!encoding.contains_key("BaseEncoding"));
        assert_eq!(
            encoding.get("Differences"),
            Some(&Object::Array(vec![Object::Integer(0x80), Object::from("eacute")]))
        );
    }

    #[test]
    fn test_dictionary_standard_has_no_encoding() {
        let font = resolve("Times-Roman", &Encoding::Standard).unwrap();
        assert!(!font.to_dictionary().contains_key("Encoding"));
    }

    #[test]
    fn test_dictionary_differences() {
        let table = EncodingTable::new("Abc", &[('a', 0x01), ('b', 0x02), ('z', 0x10)]).unwrap();
        let font = resolve("Helvetica", &Encoding::custom(table)).unwrap();
        let dict = font.to_dictionary();
        let encoding = dict.get("Encoding").and_then(Object::as_dict).unwrap();
        assert_eq!(
            encoding.get("Differences"),
            Some(&Object::Array(vec![
                Object::Integer(1),
                Object::from("a"),
                Object::from("b"),
                Object::Integer(16),
                Object::from("z"),
            ]))
        );
    }

    #[test]
    fn test_bind_adds_dictionary() {
        let mut registry = Registry::new();
        let font = resolve("Courier", &Encoding::Standard).unwrap();
        let bound = font.bind(&mut registry);
        assert_eq!(bound.reference(), Reference::new(1, 0));
        assert_eq!(bound.name(), &Name::from("Courier"));
        let dict = registry.get(bound.reference()).and_then(Object::as_dict).unwrap();
        assert_eq!(dict.get("Type"), Some(&Object::from("Font")));
    }
}
