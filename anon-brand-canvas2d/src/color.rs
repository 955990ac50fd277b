/// Straight (non-premultiplied) 8-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub(crate) fn paint(self, anti_alias: bool) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(self.r, self.g, self.b, self.a);
        paint.anti_alias = anti_alias;
        paint
    }
}

impl From<(u8, u8, u8)> for CanvasColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb8(r, g, b)
    }
}

impl From<tiny_skia::PremultipliedColorU8> for CanvasColor {
    fn from(px: tiny_skia::PremultipliedColorU8) -> Self {
        let c = px.demultiply();
        Self::from_rgba8(c.red(), c.green(), c.blue(), c.alpha())
    }
}
