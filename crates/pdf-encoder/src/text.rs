//! Text layout
//!
//! [`Text`] accumulates text-object commands for a content stream while
//! tracking the cursor the way a viewer would:
//!
//! ```text
//! /Helvetica 12 Tf
//! 14 TL
//! (Hello, World!) Tj
//! T*
//! ```

use crate::font::Font;
use crate::marshal::{format_number, write_string};
use crate::object::{Dictionary, Name, Stream};
use crate::{PdfError, Result};
use indexmap::IndexSet;

/// Leading applied by [`Text::set_font`], as a multiple of the font size
pub const DEFAULT_LEADING_SCALAR: f64 = 1.2;

/// Text object under construction
#[derive(Debug, Clone, Default)]
pub struct Text {
    buf: Vec<u8>,
    fonts: IndexSet<Name>,
    x: f64,
    y: f64,
    size: f64,
    leading: f64,
    /// Leading implied by the last `set_font` that no `TL` command carries yet
    leading_pending: bool,
    /// Snapshot of the active font's maps
    font: Option<Font>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `font` the active font at `size` points
    ///
    /// Leading becomes `size * DEFAULT_LEADING_SCALAR`. It is written to the
    /// buffer only if a line break happens before [`Text::set_leading`]
    /// overrides it.
    pub fn set_font(&mut self, font: impl AsRef<Font>, size: f64) -> Result<()> {
        let font = font.as_ref();
        let size_str = format_number(size)?;
        let leading = size * DEFAULT_LEADING_SCALAR;
        format_number(leading)?;

        font.name().marshal(&mut self.buf);
        self.buf.push(b' ');
        self.buf.extend_from_slice(size_str.as_bytes());
        self.buf.extend_from_slice(b" Tf\n");

        self.fonts.insert(font.name().clone());
        self.font = Some(font.clone());
        self.size = size;
        self.leading = leading;
        self.leading_pending = true;
        Ok(())
    }

    /// Set the distance between baselines
    pub fn set_leading(&mut self, leading: f64) -> Result<()> {
        self.write_leading(leading)?;
        self.leading = leading;
        self.leading_pending = false;
        Ok(())
    }

    fn write_leading(&mut self, leading: f64) -> Result<()> {
        self.buf.extend_from_slice(format_number(leading)?.as_bytes());
        self.buf.extend_from_slice(b" TL\n");
        Ok(())
    }

    /// Show `text` in the active font and advance the cursor
    ///
    /// Runes the font can't encode are dropped and don't advance the cursor.
    pub fn show(&mut self, text: &str) -> Result<()> {
        let font = self.font.as_ref().ok_or(PdfError::NoActiveFont)?;
        let encoded = font.encode(text);
        let advance = font.string_width(text, self.size);

        write_string(&encoded, &mut self.buf);
        self.buf.extend_from_slice(b" Tj\n");
        self.x += advance;
        Ok(())
    }

    /// Move to the start of the next line
    pub fn next_line(&mut self) {
        if self.leading_pending {
            // Leading derived from a finite font size is always printable
            if self.write_leading(self.leading).is_ok() {
                self.leading_pending = false;
            }
        }
        self.buf.extend_from_slice(b"T*\n");
        self.x = 0.0;
        self.y -= self.leading;
    }

    /// Move to the start of the next line, offset by `(tx, ty)`
    ///
    /// `x` is set to `tx` while `y` accumulates `ty`.
    pub fn next_line_offset(&mut self, tx: f64, ty: f64) -> Result<()> {
        let tx_str = format_number(tx)?;
        let ty_str = format_number(ty)?;
        self.buf
            .extend_from_slice(format!("{tx_str} {ty_str} Td\n").as_bytes());
        self.x = tx;
        self.y += ty;
        Ok(())
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn leading(&self) -> f64 {
        self.leading
    }

    pub fn font_size(&self) -> f64 {
        self.size
    }

    /// Names of every font selected so far, in first-use order
    pub fn fonts(&self) -> impl Iterator<Item = &Name> {
        self.fonts.iter()
    }

    /// Commands written so far, without the `BT`/`ET` wrapper
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Wrap the commands in `BT`/`ET` as a content stream
    pub fn into_stream(self) -> Stream {
        let mut content = Vec::with_capacity(self.buf.len() + 6);
        content.extend_from_slice(b"BT\n");
        content.extend_from_slice(&self.buf);
        content.extend_from_slice(b"ET");
        Stream::new(Dictionary::new(), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::resolve;
    use font_metrics::Encoding;
    use pretty_assertions::assert_eq;

    fn helvetica() -> Font {
        resolve("Helvetica", &Encoding::Standard).unwrap()
    }

    fn text(t: &Text) -> String {
        String::from_utf8_lossy(t.bytes()).into_owned()
    }

    #[test]
    fn test_hello_sparta() {
        let mut t = Text::new();
        t.set_font(helvetica(), 12.0).unwrap();
        t.set_leading(14.0).unwrap();
        t.show("Hello, World!").unwrap();
        t.next_line();
        t.show("This is SPARTA!!1!").unwrap();

        assert_eq!(
            text(&t),
            "/Helvetica 12 Tf\n14 TL\n(Hello, World!) Tj\nT*\n(This is SPARTA!!1!) Tj\n"
        );
        let fonts: Vec<&Name> = t.fonts().collect();
        assert_eq!(fonts, vec![&Name::from("Helvetica")]);
    }

    #[test]
    fn test_default_leading() {
        let mut t = Text::new();
        t.set_font(helvetica(), 12.0).unwrap();
        assert!((t.leading() - 14.4).abs() < 1e-9);
        assert_eq!(t.font_size(), 12.0);

        t.next_line();
        assert_eq!(text(&t), "/Helvetica 12 Tf\n14.4 TL\nT*\n");
        assert!((t.y() + 14.4).abs() < 1e-9);

        // Already written; not repeated
        t.next_line();
        assert_eq!(text(&t), "/Helvetica 12 Tf\n14.4 TL\nT*\nT*\n");
    }

    #[test]
    fn test_show_without_font() {
        let mut t = Text::new();
        t.set_leading(10.0).unwrap();
        t.next_line_offset(5.0, 5.0).unwrap();
        assert!(matches!(t.show("x"), Err(PdfError::NoActiveFont)));
        assert_eq!(text(&t), "10 TL\n5 5 Td\n");
    }

    #[test]
    fn test_show_advances_x() {
        let mut t = Text::new();
        t.set_font(helvetica(), 10.0).unwrap();
        t.show("Hello").unwrap();
        assert!((t.x() - 22.78).abs() < 1e-9);
        t.show("Hello").unwrap();
        assert!((t.x() - 45.56).abs() < 1e-9);
    }

    #[test]
    fn test_show_drops_unencodable_runes() {
        let mut t = Text::new();
        t.set_font(resolve("Courier", &Encoding::WinAnsi).unwrap(), 10.0)
            .unwrap();
        t.show("a\u{4e2d}b").unwrap();
        assert!(text(&t).ends_with("(ab) Tj\n"));
        assert!((t.x() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_show_long_run_of_text() {
        let mut t = Text::new();
        t.set_font(resolve("Courier", &Encoding::Standard).unwrap(), 10.0)
            .unwrap();
        t.show(&"a".repeat(8_000_000)).unwrap();
        assert_eq!(t.x(), 48_000_000.0);
    }

    #[test]
    fn test_show_accented_latin_text() {
        let mut t = Text::new();
        t.set_font(resolve("Helvetica", &Encoding::WinAnsi).unwrap(), 10.0)
            .unwrap();
        t.show("Caf\u{00e9} M\u{00fc}ller").unwrap();
        assert!(t.bytes().ends_with(b"(Caf\xe9 M\xfcller) Tj\n"));
    }

    #[test]
    fn test_show_escapes_delimiters() {
        let mut t = Text::new();
        t.set_font(helvetica(), 10.0).unwrap();
        t.show("(a\\b)").unwrap();
        assert!(text(&t).ends_with("(\\(a\\\\b\\)) Tj\n"));
    }

    #[test]
    fn test_next_line_resets_x() {
        let mut t = Text::new();
        t.set_font(helvetica(), 10.0).unwrap();
        t.set_leading(12.0).unwrap();
        t.show("Hello").unwrap();
        t.next_line();
        assert_eq!(t.x(), 0.0);
        assert_eq!(t.y(), -12.0);
    }

    #[test]
    fn test_next_line_offset_sets_x_and_accumulates_y() {
        let mut t = Text::new();
        t.next_line_offset(72.0, 720.0).unwrap();
        t.next_line_offset(10.0, -20.0).unwrap();
        assert_eq!(t.x(), 10.0);
        assert_eq!(t.y(), 700.0);
        assert_eq!(text(&t), "72 720 Td\n10 -20 Td\n");
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let mut t = Text::new();
        assert!(t.set_font(helvetica(), f64::NAN).is_err());
        assert!(t.set_leading(f64::INFINITY).is_err());
        assert!(t.next_line_offset(0.0, f64::NAN).is_err());
        assert!(t.bytes().is_empty());
    }

    #[test]
    fn test_font_snapshot() {
        let mut font = resolve("Courier", &Encoding::Standard).unwrap();
        let mut t = Text::new();
        t.set_font(&font, 10.0).unwrap();

        font.set_width('a', 1000);
        font.set_code_point('a', b'z');

        t.show("a").unwrap();
        assert!(text(&t).ends_with("(a) Tj\n"));
        assert!((t.x() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_fonts_recorded_once_in_order() {
        let courier = resolve("Courier", &Encoding::Standard).unwrap();
        let mut t = Text::new();
        t.set_font(helvetica(), 10.0).unwrap();
        t.set_font(&courier, 10.0).unwrap();
        t.set_font(helvetica(), 12.0).unwrap();
        let fonts: Vec<String> = t.fonts().map(|n| n.to_string()).collect();
        assert_eq!(fonts, vec!["Helvetica", "Courier"]);
    }

    #[test]
    fn test_into_stream() {
        let mut t = Text::new();
        t.set_font(helvetica(), 12.0).unwrap();
        t.show("Hi").unwrap();
        let stream = t.into_stream();
        assert_eq!(
            String::from_utf8_lossy(stream.content()),
            "BT\n/Helvetica 12 Tf\n(Hi) Tj\nET"
        );
        assert!(stream.dict().is_empty());
    }
}
