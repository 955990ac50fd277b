//! Single-page vector PDF authoring.
//!
//! Coordinates are PDF user-space points with the origin at the bottom-left
//! corner of the page. Callers that lay out in raster space (y down) flip with
//! [`PdfPage::flip_y`].

use anyhow::{bail, Error as AnyError};
use pdf_writer::{Content, Finish, Pdf, Rect, Ref, TextStr};

/// Kappa for quarter-circle cubic Bezier approximation.
const K: f32 = 0.552_284_8;

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PdfColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn components(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl From<(u8, u8, u8)> for PdfColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A single PDF page being drawn.
///
/// Drawing calls append to one content stream; [`PdfPage::finish`] writes the
/// catalog, page tree, page and content objects and returns the file bytes.
pub struct PdfPage {
    width: f32,
    height: f32,
    title: Option<String>,
    content: Content,
}

impl PdfPage {
    /// Create a page of `width` x `height` points.
    pub fn new(width: f32, height: f32) -> Result<Self, AnyError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            bail!("Invalid page size {}x{}", width, height);
        }
        Ok(Self {
            width,
            height,
            title: None,
            content: Content::new(),
        })
    }

    /// Set the document title written to the info dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Map a raster y coordinate (origin top-left) into page space.
    pub fn flip_y(&self, y: f32) -> f32 {
        self.height - y
    }

    pub fn set_fill_color(&mut self, color: PdfColor) -> &mut Self {
        let (r, g, b) = color.components();
        self.content.set_fill_rgb(r, g, b);
        self
    }

    pub fn set_stroke_color(&mut self, color: PdfColor) -> &mut Self {
        let (r, g, b) = color.components();
        self.content.set_stroke_rgb(r, g, b);
        self
    }

    pub fn set_line_width(&mut self, width: f32) -> &mut Self {
        self.content.set_line_width(width);
        self
    }

    /// Add a circle centred at `(cx, cy)` and paint it.
    pub fn circle(&mut self, cx: f32, cy: f32, radius: f32, mode: PaintMode) -> &mut Self {
        log::debug!(target: "pdf", "circle {} {} r={} {:?}", cx, cy, radius, mode);
        let k = radius * K;
        self.content
            .move_to(cx + radius, cy)
            .cubic_to(cx + radius, cy + k, cx + k, cy + radius, cx, cy + radius)
            .cubic_to(cx - k, cy + radius, cx - radius, cy + k, cx - radius, cy)
            .cubic_to(cx - radius, cy - k, cx - k, cy - radius, cx, cy - radius)
            .cubic_to(cx + k, cy - radius, cx + radius, cy - k, cx + radius, cy)
            .close_path();
        self.paint(mode)
    }

    /// Stroke a straight line.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        log::debug!(target: "pdf", "line {} {} {} {}", x1, y1, x2, y2);
        self.content.move_to(x1, y1).line_to(x2, y2).stroke();
        self
    }

    fn paint(&mut self, mode: PaintMode) -> &mut Self {
        match mode {
            PaintMode::Fill => self.content.fill_nonzero(),
            PaintMode::Stroke => self.content.stroke(),
        };
        self
    }

    /// Serialize the document.
    pub fn finish(self) -> Result<Vec<u8>, AnyError> {
        // Allocate the indirect reference IDs
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let page_id = Ref::new(3);
        let content_id = Ref::new(4);
        let info_id = Ref::new(5);

        let mut writer = Pdf::new();
        writer.catalog(catalog_id).pages(page_tree_id);
        writer.pages(page_tree_id).kids([page_id]).count(1);

        let mut page = writer.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, self.width, self.height));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.finish();

        // Write the content stream
        writer.stream(content_id, &self.content.finish());

        let mut info = writer.document_info(info_id);
        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        info.creator(TextStr(concat!("anon-brand-pdf ", env!("CARGO_PKG_VERSION"))));
        info.finish();

        let bytes = writer.finish();
        log::debug!(target: "pdf", "finished page {}x{} ({} bytes)", self.width, self.height, bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_size() {
        assert!(PdfPage::new(0.0, 10.0).is_err());
        assert!(PdfPage::new(10.0, -1.0).is_err());
        assert!(PdfPage::new(f32::NAN, 10.0).is_err());
    }

    #[test]
    fn test_flip_y() {
        let page = PdfPage::new(512.0, 512.0).unwrap();
        assert_eq!(page.flip_y(0.0), 512.0);
        assert_eq!(page.flip_y(256.0), 256.0);
        assert_eq!(page.flip_y(512.0), 0.0);
    }

    #[test]
    fn test_color_components() {
        let (r, g, b) = PdfColor::new(255, 0, 51).components();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
