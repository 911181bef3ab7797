//! Glyph metrics for the standard 14 fonts

use crate::metrics_data::{
    COURIER, COURIER_BOLD, COURIER_BOLD_OBLIQUE, COURIER_OBLIQUE, HELVETICA, HELVETICA_BOLD,
    HELVETICA_BOLD_OBLIQUE, HELVETICA_OBLIQUE, SYMBOL, TIMES_BOLD, TIMES_BOLD_ITALIC,
    TIMES_ITALIC, TIMES_ROMAN, ZAPF_DINGBATS,
};
use crate::{MetricsError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Metrics of a single glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphInfo {
    /// Unicode character drawn by the glyph
    pub rune: char,
    /// Code point in the font's built-in encoding, if the glyph is encoded there
    pub code_point: Option<u8>,
    /// Advance width in thousandths of the font size
    pub width: u16,
    /// Adobe glyph name
    pub name: &'static str,
}

/// The standard 14 fonts every PDF reader provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StandardFont {
    #[serde(rename = "Courier")]
    Courier,
    #[serde(rename = "Courier-Bold")]
    CourierBold,
    #[serde(rename = "Courier-Oblique")]
    CourierOblique,
    #[serde(rename = "Courier-BoldOblique")]
    CourierBoldOblique,
    #[serde(rename = "Helvetica")]
    Helvetica,
    #[serde(rename = "Helvetica-Bold")]
    HelveticaBold,
    #[serde(rename = "Helvetica-Oblique")]
    HelveticaOblique,
    #[serde(rename = "Helvetica-BoldOblique")]
    HelveticaBoldOblique,
    #[serde(rename = "Times-Roman")]
    TimesRoman,
    #[serde(rename = "Times-Bold")]
    TimesBold,
    #[serde(rename = "Times-Italic")]
    TimesItalic,
    #[serde(rename = "Times-BoldItalic")]
    TimesBoldItalic,
    #[serde(rename = "Symbol")]
    Symbol,
    #[serde(rename = "ZapfDingbats")]
    ZapfDingbats,
}

static FONT_METRICS: Lazy<HashMap<StandardFont, FontMetrics>> = Lazy::new(|| {
    StandardFont::ALL
        .iter()
        .map(|&font| (font, FontMetrics::from_glyphs(font.glyphs())))
        .collect()
});

static GLYPH_NAMES: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut names = HashMap::new();
    for font in StandardFont::ALL {
        for glyph in font.glyphs() {
            names.entry(glyph.rune).or_insert(glyph.name);
        }
    }
    names
});

/// Adobe glyph name for `rune`, taken from the first standard font that has it
pub fn glyph_name(rune: char) -> Option<&'static str> {
    GLYPH_NAMES.get(&rune).copied()
}

impl StandardFont {
    pub const ALL: [StandardFont; 14] = [
        StandardFont::Courier,
        StandardFont::CourierBold,
        StandardFont::CourierOblique,
        StandardFont::CourierBoldOblique,
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
        StandardFont::TimesRoman,
        StandardFont::TimesBold,
        StandardFont::TimesItalic,
        StandardFont::TimesBoldItalic,
        StandardFont::Symbol,
        StandardFont::ZapfDingbats,
    ];

    /// PostScript name used as the font's BaseFont
    pub fn name(self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Symbol => "Symbol",
            StandardFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Look up a font by its PostScript name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|font| font.name() == name)
    }

    /// Symbolic fonts carry their own glyph set and only support their
    /// built-in encoding
    pub fn is_symbolic(self) -> bool {
        matches!(self, StandardFont::Symbol | StandardFont::ZapfDingbats)
    }

    /// Raw glyph table, in the order it was compiled
    pub fn glyphs(self) -> &'static [GlyphInfo] {
        match self {
            StandardFont::Courier => COURIER,
            StandardFont::CourierBold => COURIER_BOLD,
            StandardFont::CourierOblique => COURIER_OBLIQUE,
            StandardFont::CourierBoldOblique => COURIER_BOLD_OBLIQUE,
            StandardFont::Helvetica => HELVETICA,
            StandardFont::HelveticaBold => HELVETICA_BOLD,
            StandardFont::HelveticaOblique => HELVETICA_OBLIQUE,
            StandardFont::HelveticaBoldOblique => HELVETICA_BOLD_OBLIQUE,
            StandardFont::TimesRoman => TIMES_ROMAN,
            StandardFont::TimesBold => TIMES_BOLD,
            StandardFont::TimesItalic => TIMES_ITALIC,
            StandardFont::TimesBoldItalic => TIMES_BOLD_ITALIC,
            StandardFont::Symbol => SYMBOL,
            StandardFont::ZapfDingbats => ZAPF_DINGBATS,
        }
    }

    /// Rune-indexed metrics, built once per process
    pub fn metrics(self) -> &'static FontMetrics {
        &FONT_METRICS[&self]
    }
}

impl FromStr for StandardFont {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| MetricsError::UnknownFont(s.to_string()))
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Glyph metrics of one font, indexed by rune
#[derive(Debug, Clone)]
pub struct FontMetrics {
    glyphs: HashMap<char, GlyphInfo>,
}

impl FontMetrics {
    fn from_glyphs(glyphs: &[GlyphInfo]) -> Self {
        let mut map = HashMap::with_capacity(glyphs.len());
        for glyph in glyphs {
            // First entry wins when a rune appears under several glyph names
            map.entry(glyph.rune).or_insert(*glyph);
        }
        Self { glyphs: map }
    }

    pub fn glyph(&self, rune: char) -> Option<&GlyphInfo> {
        self.glyphs.get(&rune)
    }

    /// Advance width of `rune` in thousandths of the font size
    pub fn width(&self, rune: char) -> Option<u16> {
        self.glyph(rune).map(|g| g.width)
    }

    /// Code point of `rune` in the font's built-in encoding
    pub fn code_point(&self, rune: char) -> Option<u8> {
        self.glyph(rune).and_then(|g| g.code_point)
    }

    pub fn contains(&self, rune: char) -> bool {
        self.glyphs.contains_key(&rune)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlyphInfo> {
        self.glyphs.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_round_trip() {
        for font in StandardFont::ALL {
            assert_eq!(StandardFont::from_name(font.name()), Some(font));
            assert_eq!(font.to_string().parse::<StandardFont>().unwrap(), font);
        }
    }

    #[test]
    fn test_unknown_font() {
        assert_eq!(
            "Comic Sans".parse::<StandardFont>(),
            Err(MetricsError::UnknownFont("Comic Sans".to_string()))
        );
    }

    #[test]
    fn test_every_font_has_space() {
        for font in StandardFont::ALL {
            let metrics = font.metrics();
            assert!(!metrics.is_empty(), "{font} has no glyphs");
            assert_eq!(metrics.code_point(' '), Some(0x20), "{font}");
        }
    }

    #[test]
    fn test_helvetica_widths() {
        let metrics = StandardFont::Helvetica.metrics();
        assert_eq!(metrics.width('H'), Some(722));
        assert_eq!(metrics.width('e'), Some(556));
        assert_eq!(metrics.width('l'), Some(222));
        assert_eq!(metrics.width(' '), Some(278));
    }

    #[test]
    fn test_latin1_glyphs() {
        let metrics = StandardFont::Helvetica.metrics();
        assert_eq!(metrics.width('\u{00e9}'), Some(556));
        assert_eq!(metrics.width('\u{00c4}'), Some(667));
        assert_eq!(metrics.width('\u{00dc}'), Some(722));
        assert_eq!(metrics.width('\u{00df}'), Some(611));
        assert_eq!(metrics.glyph('\u{00fc}').unwrap().name, "udieresis");
        // Accented letters are outside the built-in encoding
        assert_eq!(metrics.code_point('\u{00e9}'), None);
        assert_eq!(metrics.code_point('\u{00df}'), Some(0xfb));

        let times = StandardFont::TimesRoman.metrics();
        assert_eq!(times.width('\u{00e9}'), Some(444));
        assert_eq!(times.width('\u{2014}'), Some(1000));
        assert_eq!(times.code_point('\u{2014}'), Some(0xd0));
    }

    #[test]
    fn test_dingbats_cover_built_in_encoding() {
        let metrics = StandardFont::ZapfDingbats.metrics();
        assert_eq!(metrics.glyph('\u{2605}').unwrap().name, "a35");
        assert_eq!(metrics.code_point('\u{2780}'), Some(0xc0));
        assert_eq!(metrics.code_point('\u{27be}'), Some(0xfe));
        assert_eq!(metrics.width('\u{2794}'), Some(894));
    }

    #[test]
    fn test_courier_is_monospaced() {
        let metrics = StandardFont::Courier.metrics();
        assert!(metrics.iter().all(|g| g.width == 600));
    }

    #[test]
    fn test_quote_code_points() {
        // The built-in encoding places the curly quote where ASCII has '
        let metrics = StandardFont::TimesRoman.metrics();
        assert_eq!(metrics.code_point('\u{2019}'), Some(0x27));
        assert_eq!(metrics.code_point('\''), Some(0xa9));
        assert_eq!(metrics.glyph('\'').unwrap().name, "quotesingle");
    }

    #[test]
    fn test_symbol_maps_greek() {
        let metrics = StandardFont::Symbol.metrics();
        assert_eq!(metrics.code_point('\u{03b1}'), Some(0x61));
        assert_eq!(metrics.glyph('\u{03b1}').unwrap().name, "alpha");
        assert!(!metrics.contains('a'));
        assert_eq!(metrics.code_point('\u{221e}'), Some(0xa5));
        assert_eq!(metrics.width('\u{2211}'), Some(713));
        assert!(StandardFont::Symbol.is_symbolic());
        assert!(!StandardFont::Helvetica.is_symbolic());
    }

    #[test]
    fn test_glyph_name_across_fonts() {
        assert_eq!(glyph_name('A'), Some("A"));
        assert_eq!(glyph_name('\u{00e9}'), Some("eacute"));
        assert_eq!(glyph_name('\u{03c0}'), Some("pi"));
        assert_eq!(glyph_name('\u{2701}'), Some("a1"));
        assert_eq!(glyph_name('\u{4e2d}'), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&StandardFont::TimesBoldItalic).unwrap();
        assert_eq!(json, "\"Times-BoldItalic\"");
        let font: StandardFont = serde_json::from_str("\"Helvetica-Oblique\"").unwrap();
        assert_eq!(font, StandardFont::HelveticaOblique);
    }
}
