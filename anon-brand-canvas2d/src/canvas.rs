//! The raster canvas.

use crate::color::CanvasColor;
use crate::error::{CanvasError, CanvasResult};
use crate::font_book::FontBook;
use crate::text::{self, CanvasFont, TextRun};
use cosmic_text::{FontSystem, SwashCache};
use std::fmt;
use tiny_skia::{FillRule, LineCap, LineJoin, Path, Pixmap, Stroke, Transform};

/// Largest accepted width or height.
pub const MAX_SIDE: u32 = 32_767;

/// How a path is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    /// Coverage-blended edges. Off, a pixel is painted only if its centre is inside the stroke.
    pub anti_alias: bool,
}

impl Pen {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            anti_alias: true,
        }
    }

    pub fn join(self, join: LineJoin) -> Self {
        Self { join, ..self }
    }

    pub fn aliased(self) -> Self {
        Self {
            anti_alias: false,
            ..self
        }
    }
}

/// An RGBA canvas, transparent when created. Colours composite source-over.
pub struct Canvas {
    pixmap: Pixmap,
    font_system: FontSystem,
    swash: SwashCache,
    has_fonts: bool,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fonts: &FontBook) -> CanvasResult<Self> {
        let invalid = CanvasError::InvalidSize {
            width,
            height,
            max: MAX_SIDE,
        };
        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(invalid);
        }
        let pixmap = Pixmap::new(width, height).ok_or(invalid)?;
        log::debug!(target: "canvas", "new {}x{} with {} font faces", width, height, fonts.face_count());

        Ok(Self {
            pixmap,
            font_system: FontSystem::new_with_locale_and_db("en".to_string(), fonts.database()),
            swash: SwashCache::new(),
            has_fonts: !fonts.is_empty(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Replace every pixel with `color`.
    pub fn fill_background(&mut self, color: CanvasColor) {
        self.pixmap.fill(tiny_skia::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }

    pub fn fill_path(&mut self, path: &Path, color: CanvasColor) {
        log::debug!(target: "canvas", "fill {:?} {:?}", path.bounds(), color);
        self.pixmap.fill_path(
            path,
            &color.paint(true),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    pub fn stroke_path(&mut self, path: &Path, color: CanvasColor, pen: &Pen) {
        log::debug!(target: "canvas", "stroke {:?} {:?} width={}", path.bounds(), color, pen.width);
        let stroke = Stroke {
            width: pen.width,
            line_cap: pen.cap,
            line_join: pen.join,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &color.paint(pen.anti_alias),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Shape `text` once for repeated drawing. Empty when the canvas has no fonts.
    pub fn shape_text(&mut self, text: &str, font: &CanvasFont) -> TextRun {
        if !self.has_fonts || text.is_empty() {
            return TextRun::default();
        }
        text::shape(&mut self.font_system, &mut self.swash, text, font)
    }

    /// Fill a shaped run with the top-left of its line box at `(x, y)`.
    pub fn fill_text_run(&mut self, run: &TextRun, x: f32, y: f32, color: CanvasColor) {
        let paint = color.paint(true);
        let transform = Transform::from_translate(x, y);
        for glyph in run.glyphs() {
            self.pixmap
                .fill_path(glyph, &paint, FillRule::Winding, transform, None);
        }
    }

    pub fn fill_text(&mut self, text: &str, font: &CanvasFont, x: f32, y: f32, color: CanvasColor) {
        log::debug!(target: "canvas", "text {:?} at {} {}", text, x, y);
        let run = self.shape_text(text, font);
        self.fill_text_run(&run, x, y, color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<CanvasColor> {
        self.pixmap.pixel(x, y).map(CanvasColor::from)
    }

    /// 8-bit straight-alpha RGBA PNG.
    pub fn encode_png(&self) -> CanvasResult<Vec<u8>> {
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, self.width(), self.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;
        Ok(out)
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("has_fonts", &self.has_fonts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    const CYAN: CanvasColor = CanvasColor::from_rgb8(0, 255, 255);

    fn blank(width: u32, height: u32) -> Canvas {
        Canvas::new(width, height, &FontBook::new()).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(matches!(
            Canvas::new(0, 10, &FontBook::new()),
            Err(CanvasError::InvalidSize { width: 0, .. })
        ));
        assert!(Canvas::new(MAX_SIDE + 1, 1, &FontBook::new()).is_err());
    }

    #[test]
    fn test_starts_transparent() {
        let canvas = blank(4, 4);
        assert_eq!(canvas.pixel(2, 2), Some(CanvasColor::from_rgba8(0, 0, 0, 0)));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_translucent_fill_blends_over_background() {
        let mut canvas = blank(10, 10);
        canvas.fill_background(CanvasColor::from_rgb8(0, 0, 0));
        canvas.fill_path(&path::rect(0.0, 0.0, 10.0, 10.0).unwrap(), CYAN.with_alpha(128));
        let p = canvas.pixel(5, 5).unwrap();
        assert_eq!(p.a, 255);
        assert_eq!(p.r, 0);
        assert!((126..=130).contains(&p.g), "g = {}", p.g);
    }

    #[test]
    fn test_aliased_stroke_is_solid() {
        // A 1px ring on a half-pixel radius never reaches full coverage when anti-aliased
        let ring = path::ellipse(8.5, 8.5, 6.0, 6.0).unwrap();

        let mut smooth = blank(17, 17);
        smooth.stroke_path(&ring, CYAN, &Pen::new(1.0));
        let mut hard = blank(17, 17);
        hard.stroke_path(&ring, CYAN, &Pen::new(1.0).aliased());

        assert_eq!(hard.pixel(8, 2), Some(CYAN));
        assert_eq!(hard.pixel(2, 8), Some(CYAN));
        assert_eq!(hard.pixel(8, 8).unwrap().a, 0);
        assert!(smooth.pixel(2, 8).unwrap().a < 255);
    }

    #[test]
    fn test_text_without_fonts_is_a_no_op() {
        let mut canvas = blank(40, 20);
        let run = canvas.shape_text("Anonymize", &CanvasFont::new(Default::default(), 12.0));
        assert!(run.is_empty());
        canvas.fill_text_run(&run, 0.0, 0.0, CYAN);
        assert_eq!(canvas.pixel(5, 10).unwrap().a, 0);
    }
}
