//! Text shaping into reusable glyph outlines.

use cosmic_text::{
    Attrs, Buffer, CacheKeyFlags, Command, Family, FontSystem, Metrics, Shaping, SwashCache,
};
use tiny_skia::{Path, PathBuilder, Transform};

/// Family a [`CanvasFont`] asks for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// A family registered in the [`FontBook`](crate::FontBook).
    Named(String),
    /// Whatever the book maps to sans-serif.
    #[default]
    SansSerif,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasFont {
    pub family: FontFamily,
    pub size_px: f32,
}

impl CanvasFont {
    pub fn new(family: FontFamily, size_px: f32) -> Self {
        Self { family, size_px }
    }
}

/// Shaped text as glyph outlines, laid out with the top-left corner of the
/// line box at the origin. Fill it any number of times at different offsets.
#[derive(Debug, Clone, Default)]
pub struct TextRun {
    glyphs: Vec<Path>,
    width: f32,
    height: f32,
}

impl TextRun {
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height of the line box.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub(crate) fn glyphs(&self) -> &[Path] {
        &self.glyphs
    }
}

pub(crate) fn shape(
    font_system: &mut FontSystem,
    swash: &mut SwashCache,
    text: &str,
    font: &CanvasFont,
) -> TextRun {
    let mut buffer = Buffer::new(font_system, Metrics::new(font.size_px, font.size_px * 1.2));
    let family = match &font.family {
        FontFamily::Named(name) => Family::Name(name),
        FontFamily::SansSerif => Family::SansSerif,
    };
    let attrs = Attrs::new()
        .family(family)
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);
    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let mut run = TextRun::default();
    for line in buffer.layout_runs() {
        run.width = run.width.max(line.line_w);
        run.height = run.height.max(line.line_top + line.line_height);
        for glyph in line.glyphs {
            let key = glyph.physical((0.0, 0.0), 1.0).cache_key;
            let Some(commands) = swash.get_outline_commands(font_system, key) else {
                continue;
            };
            let x = glyph.x + glyph.font_size * glyph.x_offset;
            let y = line.line_y + glyph.y - glyph.font_size * glyph.y_offset;
            if let Some(path) =
                outline(commands).and_then(|p| p.transform(Transform::from_translate(x, y)))
            {
                run.glyphs.push(path);
            }
        }
    }
    run
}

/// Font outlines are y-up; flip them into canvas space.
fn outline(commands: &[Command]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for cmd in commands {
        match cmd {
            Command::MoveTo(p) => pb.move_to(p.x, -p.y),
            Command::LineTo(p) => pb.line_to(p.x, -p.y),
            Command::QuadTo(c, p) => pb.quad_to(c.x, -c.y, p.x, -p.y),
            Command::CurveTo(c1, c2, p) => pb.cubic_to(c1.x, -c1.y, c2.x, -c2.y, p.x, -p.y),
            Command::Close => pb.close(),
        }
    }
    pb.finish()
}
