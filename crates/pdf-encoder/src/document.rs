//! Document builder
//!
//! Owns the [`Registry`] for one file together with the fonts bound into it,
//! and hands both to the [`Encoder`] when the file is written.

use crate::encoder::Encoder;
use crate::font::{resolve, BoundFont, Font};
use crate::object::{Dictionary, Name, Object, Reference};
use crate::registry::Registry;
use crate::text::Text;
use crate::{PdfError, Result};
use font_metrics::Encoding;
use indexmap::IndexMap;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A PDF document under construction
///
/// Objects are added in the order they should appear in the file. Once the
/// root (the catalog) is set, the document is consumed by one of
/// [`Document::encode`], [`Document::to_bytes`] or [`Document::save`].
#[derive(Debug, Default)]
pub struct Document {
    registry: Registry,
    fonts: IndexMap<Name, BoundFont>,
    root: Option<Reference>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an indirect object
    pub fn add(&mut self, object: impl Into<Object>) -> Reference {
        self.registry.add(object)
    }

    pub fn get(&self, reference: Reference) -> Option<&Object> {
        self.registry.get(reference)
    }

    /// Mutable access to an added object, e.g. to link a parent to a child
    /// added after it
    pub fn get_mut(&mut self, reference: Reference) -> Option<&mut Object> {
        self.registry.get_mut(reference)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve a standard font and bind it into this document
    ///
    /// Adding a font that is already bound with the same encoding returns the
    /// existing binding; the same name with another encoding is an error.
    pub fn add_font(&mut self, font_name: &str, encoding: Encoding) -> Result<BoundFont> {
        if let Some(bound) = self.fonts.get(font_name.as_bytes()) {
            if *bound.encoding() == encoding {
                return Ok(bound.clone());
            }
            return Err(PdfError::FontAlreadyExists(font_name.to_string()));
        }
        let font = resolve(font_name, &encoding)?;
        Ok(self.bind(font))
    }

    /// Bind a caller-built font, see [`Font::custom`]
    pub fn add_custom_font(&mut self, font: Font) -> Result<BoundFont> {
        if self.fonts.contains_key(font.name().as_bytes()) {
            return Err(PdfError::FontAlreadyExists(font.name().to_string()));
        }
        Ok(self.bind(font))
    }

    fn bind(&mut self, font: Font) -> BoundFont {
        let bound = font.bind(&mut self.registry);
        debug!(
            "bound font {} as object {}",
            bound.name(),
            bound.reference().number()
        );
        self.fonts.insert(bound.name().clone(), bound.clone());
        bound
    }

    /// Font bound under `name`
    pub fn font(&self, name: &str) -> Option<&BoundFont> {
        self.fonts.get(name.as_bytes())
    }

    /// `/Font` resource dictionary for the fonts `text` selected
    pub fn font_resources(&self, text: &Text) -> Result<Dictionary> {
        let mut resources = Dictionary::new();
        for name in text.fonts() {
            let bound = self
                .fonts
                .get(name)
                .ok_or_else(|| PdfError::FontNotBound(name.to_string()))?;
            resources.set(name, bound.reference());
        }
        Ok(resources)
    }

    /// Set the document catalog
    pub fn set_root(&mut self, root: Reference) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<Reference> {
        self.root
    }

    /// Write the complete file to `writer`, returning the bytes written
    pub fn encode<W: Write>(self, writer: W) -> Result<u64> {
        let root = self.root.ok_or(PdfError::MissingRoot)?;
        Encoder::new(self.registry).encode(root, writer)
    }

    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode(&mut buffer)?;
        Ok(buffer)
    }

    /// Write the document to a file
    ///
    /// A partially written file is removed when encoding fails.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        if self.root.is_none() {
            return Err(PdfError::MissingRoot);
        }

        let writer = BufWriter::new(File::create(path)?);
        if let Err(e) = self.encode(writer) {
            let _ = fs::remove_file(path);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_font_once() {
        let mut doc = Document::new();
        let first = doc.add_font("Helvetica", Encoding::WinAnsi).unwrap();
        let second = doc.add_font("Helvetica", Encoding::WinAnsi).unwrap();
        assert_eq!(first.reference(), second.reference());
        assert_eq!(doc.registry().len(), 1);
    }

    #[test]
    fn test_add_font_conflicting_encoding() {
        let mut doc = Document::new();
        doc.add_font("Helvetica", Encoding::WinAnsi).unwrap();
        assert!(matches!(
            doc.add_font("Helvetica", Encoding::MacRoman),
            Err(PdfError::FontAlreadyExists(_))
        ));
    }

    #[test]
    fn test_add_unknown_font() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.add_font("Comic Sans", Encoding::WinAnsi),
            Err(PdfError::UnsupportedFont { .. })
        ));
        assert!(doc.registry().is_empty());
    }

    #[test]
    fn test_font_resources() {
        let mut doc = Document::new();
        let helvetica = doc.add_font("Helvetica", Encoding::Standard).unwrap();
        let courier = doc.add_font("Courier", Encoding::Standard).unwrap();

        let mut text = Text::new();
        text.set_font(&courier, 10.0).unwrap();
        text.set_font(&helvetica, 10.0).unwrap();

        let resources = doc.font_resources(&text).unwrap();
        let keys: Vec<String> = resources.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["Courier", "Helvetica"]);
        assert_eq!(
            resources.get("Helvetica"),
            Some(&Object::Reference(helvetica.reference()))
        );
    }

    #[test]
    fn test_font_resources_unbound() {
        let doc = Document::new();
        let font = resolve("Times-Roman", &Encoding::Standard).unwrap();
        let mut text = Text::new();
        text.set_font(&font, 10.0).unwrap();
        match doc.font_resources(&text) {
            Err(PdfError::FontNotBound(name)) => assert_eq!(name, "Times-Roman"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_custom_font_name_clash() {
        let mut doc = Document::new();
        doc.add_font("Courier", Encoding::WinAnsi).unwrap();
        let custom = Font::custom("Courier", Encoding::WinAnsi, &[]).unwrap();
        assert!(doc.add_custom_font(custom).is_err());
    }

    #[test]
    fn test_encode_without_root() {
        let mut doc = Document::new();
        doc.add(dictionary! { "Type" => "Catalog" });
        assert!(matches!(doc.to_bytes(), Err(PdfError::MissingRoot)));
    }

    #[test]
    fn test_to_bytes() {
        let mut doc = Document::new();
        let catalog = doc.add(dictionary! { "Type" => "Catalog" });
        doc.set_root(catalog);
        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7\r\n"));
        assert!(bytes.ends_with(b"%%EOF\r\n"));
    }

    #[test]
    fn test_save_removes_file_on_error() {
        let path = std::env::temp_dir().join(format!(
            "pdf-encoder-dangling-{}.pdf",
            std::process::id()
        ));
        let mut doc = Document::new();
        let catalog = doc.add(dictionary! { "Pages" => Reference::new(2, 0) });
        doc.set_root(catalog);

        assert!(doc.save(&path).is_err());
        assert!(!path.exists());
    }
}
