//! PDF drawing surface using lopdf.
//!
//! This crate provides an in-memory `Surface` implementation that accumulates
//! pages as lopdf content streams and writes a complete PDF on finalize.

mod page;
mod renderer;

pub use renderer::{A4, LopdfSurface};

#[cfg(test)]
mod tests {
    use super::*;
    use enroll_render_core::{RenderError, Surface};
    use enroll_types::{Color, FontStyle, RectStyle};
    use lopdf::Document;
    use tempfile::tempdir;

    #[test]
    fn test_drawing_without_page_fails() {
        let mut surface = LopdfSurface::a4();
        let err = surface
            .rect(0.0, 0.0, 10.0, 10.0, RectStyle::Outline)
            .unwrap_err();
        assert!(matches!(err, RenderError::NoPage));
    }

    #[test]
    fn test_text_requires_font() {
        let mut surface = LopdfSurface::a4();
        surface.add_page().unwrap();
        assert!(surface.text(1.0, 1.0, "no font").is_err());
    }

    #[test]
    fn test_finalize_without_pages_fails() {
        let surface = LopdfSurface::a4();
        assert!(surface.finalize(Vec::new()).is_err());
    }

    #[test]
    fn test_writes_loadable_pdf() {
        let mut surface = LopdfSurface::a4();
        surface.add_page().unwrap();
        surface.set_fill_color(Color::gray(200)).unwrap();
        surface
            .rect(10.0, 10.0, 277.0, 250.0, RectStyle::Fill)
            .unwrap();
        surface.set_font("Arial", FontStyle::Regular, 8.0).unwrap();
        surface.set_text_color(Color::BLACK).unwrap();
        surface.text(16.0, 17.8, "Hello world").unwrap();
        surface.line(0.0, 0.0, 210.0, 297.0).unwrap();
        surface.add_page().unwrap();
        surface.set_font("Times", FontStyle::Bold, 12.0).unwrap();
        surface.text(10.0, 10.0, "Second page").unwrap();
        assert_eq!(surface.page_count(), 2);

        let bytes = surface.finalize(Vec::new()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);

        let base_fonts: Vec<Vec<u8>> = doc
            .objects
            .values()
            .filter_map(|obj| obj.as_dict().ok())
            .filter(|dict| dict.get(b"Type").and_then(|t| t.as_name()).ok() == Some(b"Font".as_slice()))
            .filter_map(|dict| dict.get(b"BaseFont").and_then(|f| f.as_name()).ok())
            .map(|name| name.to_vec())
            .collect();
        assert!(base_fonts.contains(&b"Helvetica".to_vec()));
        assert!(base_fonts.contains(&b"Times-Bold".to_vec()));
    }

    #[test]
    fn test_text_is_written_as_windows_1252() {
        let mut surface = LopdfSurface::a4();
        surface.add_page().unwrap();
        surface.set_font("Helvetica", FontStyle::Regular, 10.0).unwrap();
        surface.text(10.0, 10.0, "5\u{20AC} \u{201C}x\u{201D}").unwrap();

        let bytes = surface.finalize(Vec::new()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let content = lopdf::content::Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let drawn: Vec<Vec<u8>> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first().and_then(|o| o.as_str().ok()).map(<[u8]>::to_vec))
            .collect();
        assert_eq!(drawn, vec![vec![b'5', 0x80, b' ', 0x93, b'x', 0x94]]);
    }

    #[test]
    fn test_image_is_embedded_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        image::RgbImage::from_pixel(4, 2, image::Rgb([66, 95, 168]))
            .save(&path)
            .unwrap();

        let mut surface = LopdfSurface::a4();
        surface.add_page().unwrap();
        surface.image(&path, 5.0, 5.0, 50.0, 50.0).unwrap();
        surface.image(&path, 60.0, 5.0, 50.0, 50.0).unwrap();

        let bytes = surface.finalize(Vec::new()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let image_count = doc
            .objects
            .values()
            .filter_map(|obj| obj.as_stream().ok())
            .filter(|stream| {
                stream.dict.get(b"Subtype").and_then(|s| s.as_name()).ok()
                    == Some(b"Image".as_slice())
            })
            .count();
        assert_eq!(image_count, 1);
    }

    #[test]
    fn test_undecodable_image_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let mut surface = LopdfSurface::a4();
        surface.add_page().unwrap();
        match surface.image(&path, 0.0, 0.0, 10.0, 10.0) {
            Err(RenderError::Image { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected image error, got {:?}", other),
        }
    }
}
