//! Hello World
//!
//! Writes a one-page A4 document with two lines of Helvetica and a line of
//! Symbol glyphs.
//!
//! Run with: cargo run --example hello_world

use pdf_encoder::{dictionary, Document, Encoding, Object, Text};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("output")?;

    let mut doc = Document::new();
    let helvetica = doc.add_font("Helvetica", Encoding::WinAnsi)?;
    let symbol = doc.add_font("Symbol", Encoding::Standard)?;

    let mut text = Text::new();
    text.set_font(&helvetica, 12.0)?;
    text.set_leading(14.0)?;
    text.next_line_offset(72.0, 770.0)?;
    text.show("Hello, World!")?;
    text.next_line();
    text.show("This is SPARTA!!1!")?;
    text.next_line();
    text.set_font(&symbol, 12.0)?;
    text.show("\u{03b1} + \u{03b2} = \u{03c0}")?;

    // Page tree: the page is added after its parent, then linked back
    let fonts = doc.font_resources(&text)?;
    let contents = doc.add(text.into_stream());
    let pages = doc.add(dictionary! { "Type" => "Pages", "Count" => 1 });
    let page = doc.add(dictionary! {
        "Type" => "Page",
        "Parent" => pages,
        "MediaBox" => vec![0.into(), 0.into(), Object::from(595.28), Object::from(841.89)],
        "Resources" => dictionary! { "Font" => fonts },
        "Contents" => contents,
    });
    if let Some(dict) = doc.get_mut(pages).and_then(Object::as_dict_mut) {
        dict.set("Kids", vec![page]);
    }

    let catalog = doc.add(dictionary! { "Type" => "Catalog", "Pages" => pages });
    doc.set_root(catalog);

    let output_path = "output/hello_world.pdf";
    doc.save(output_path)?;

    println!("Generated: {output_path}");
    Ok(())
}
