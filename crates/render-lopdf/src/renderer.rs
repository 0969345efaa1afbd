use crate::page::PageContext;
use enroll_render_core::utils::base14_font_name;
use enroll_render_core::{RenderError, Surface};
use enroll_types::{Color, FontStyle, RectStyle, Size};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A4 portrait, in millimetres.
pub const A4: Size = Size {
    width: 210.0,
    height: 297.0,
};

#[derive(Debug, Clone)]
struct SelectedFont {
    base_name: &'static str,
    size_pt: f32,
}

/// A PDF drawing surface built on the `lopdf` library.
///
/// Pages are accumulated in memory; [`Surface::finalize`] writes the whole
/// document in one go. Fonts are the standard base-14 Type1 fonts, so nothing
/// is embedded.
pub struct LopdfSurface {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page_size: Size,
    page: Option<PageContext>,
    fill_color: Color,
    draw_color: Color,
    text_color: Color,
    font: Option<SelectedFont>,
    /// Base font name -> (resource key, object id)
    fonts: BTreeMap<&'static str, (String, ObjectId)>,
    /// Image path -> (resource key, object id)
    images: HashMap<PathBuf, (String, ObjectId)>,
}

impl LopdfSurface {
    pub fn new(page_size: Size) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            page_size,
            page: None,
            fill_color: Color::BLACK,
            draw_color: Color::BLACK,
            text_color: Color::BLACK,
            font: None,
            fonts: BTreeMap::new(),
            images: HashMap::new(),
        }
    }

    pub fn a4() -> Self {
        Self::new(A4)
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len() + usize::from(self.page.is_some())
    }

    fn page_mut(&mut self) -> Result<&mut PageContext, RenderError> {
        self.page.as_mut().ok_or(RenderError::NoPage)
    }

    fn font_key(&mut self, base_name: &'static str) -> String {
        if let Some((key, _)) = self.fonts.get(base_name) {
            return key.clone();
        }
        let key = format!("F{}", self.fonts.len() + 1);
        let font_id = self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_name,
            "Encoding" => "WinAnsiEncoding",
        });
        self.fonts.insert(base_name, (key.clone(), font_id));
        key
    }

    fn image_key(&mut self, path: &Path) -> Result<String, RenderError> {
        if let Some((key, _)) = self.images.get(path) {
            return Ok(key.clone());
        }

        let decoded = image::open(path).map_err(|e| RenderError::Image {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        let data = compress(&rgb.into_raw())?;

        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            data,
        );
        let image_id = self.document.add_object(stream);
        let key = format!("Im{}", self.images.len() + 1);
        log::debug!("Embedded image {} as /{} ({}x{})", path.display(), key, width, height);
        self.images.insert(path.to_path_buf(), (key.clone(), image_id));
        Ok(key)
    }

    fn flush_page(&mut self) -> Result<(), RenderError> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };
        let content = compress(&page.finish()?)?;
        let content_id = self.document.add_object(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            content,
        ));

        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            enroll_render_core::utils::mm_to_pt(self.page_size.width).into(),
            enroll_render_core::utils::mm_to_pt(self.page_size.height).into(),
        ];
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn resources(&self) -> Dictionary {
        let mut font_dict = Dictionary::new();
        for (key, id) in self.fonts.values() {
            font_dict.set(key.as_bytes(), Object::Reference(*id));
        }
        let mut xobject_dict = Dictionary::new();
        for (key, id) in self.images.values() {
            xobject_dict.set(key.as_bytes(), Object::Reference(*id));
        }
        dictionary! {
            "Font" => font_dict,
            "XObject" => xobject_dict,
        }
    }
}

impl Default for LopdfSurface {
    fn default() -> Self {
        Self::a4()
    }
}

impl Surface for LopdfSurface {
    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.fill_color = color;
        Ok(())
    }

    fn set_draw_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.draw_color = color;
        Ok(())
    }

    fn set_text_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.text_color = color;
        Ok(())
    }

    fn set_font(
        &mut self,
        name: &str,
        style: FontStyle,
        size_pt: f32,
    ) -> Result<(), RenderError> {
        if !size_pt.is_finite() || size_pt <= 0.0 {
            return Err(RenderError::Other(format!(
                "Invalid font size {} for '{}'",
                size_pt, name
            )));
        }
        self.font = Some(SelectedFont {
            base_name: base14_font_name(name, style),
            size_pt,
        });
        Ok(())
    }

    fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: RectStyle,
    ) -> Result<(), RenderError> {
        let (fill, stroke) = (self.fill_color, self.draw_color);
        self.page_mut()?
            .draw_rect(x, y, width, height, style, fill, stroke);
        Ok(())
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        let stroke = self.draw_color;
        self.page_mut()?.draw_line(x1, y1, x2, y2, stroke);
        Ok(())
    }

    fn text(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError> {
        if self.page.is_none() {
            return Err(RenderError::NoPage);
        }
        let font = self
            .font
            .clone()
            .ok_or_else(|| RenderError::Other("No font selected before drawing text".into()))?;
        let key = self.font_key(font.base_name);
        let color = self.text_color;
        self.page_mut()?
            .draw_text(x, y, text, &key, font.size_pt, color);
        Ok(())
    }

    fn image(
        &mut self,
        path: &Path,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError> {
        if self.page.is_none() {
            return Err(RenderError::NoPage);
        }
        let key = self.image_key(path)?;
        self.page_mut()?.draw_image(&key, x, y, width, height);
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), RenderError> {
        self.flush_page()?;
        self.page = Some(PageContext::new(self.page_size.height));
        Ok(())
    }

    fn finalize<W: Write>(mut self, mut writer: W) -> Result<W, RenderError> {
        self.flush_page()?;
        if self.page_ids.is_empty() {
            return Err(RenderError::Other("Document has no pages".into()));
        }

        let resources = self.resources();
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        log::debug!(
            "Writing PDF with {} page(s), {} font(s), {} image(s)",
            self.page_ids.len(),
            self.fonts.len(),
            self.images.len()
        );
        self.document.save_to(&mut writer)?;
        writer.flush()?;
        Ok(writer)
    }
}

fn compress(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
