use super::{px, shape_canvas};
use crate::error::BrandResult;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use anon_brand_canvas2d::{Canvas, CanvasColor};
use std::path::{Path, PathBuf};

pub const PRODUCT_ICON_SIZE: u32 = 200;

/// Product whose badge is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductIcon {
    /// MCP server: proxy nodes inside a shield.
    Mcp,
    /// Desktop app: monitor with terminal lines.
    Desktop,
    /// Office add-in: document with a plus sign.
    Office,
    /// API: bracket pair with connection dots.
    Api,
}

impl ProductIcon {
    pub const ALL: [ProductIcon; 4] = [
        ProductIcon::Mcp,
        ProductIcon::Desktop,
        ProductIcon::Office,
        ProductIcon::Api,
    ];

    /// File stem used by the default asset run.
    pub const fn default_name(self) -> &'static str {
        match self {
            ProductIcon::Mcp => "mcp-server",
            ProductIcon::Desktop => "desktop-app",
            ProductIcon::Office => "office-addin",
            ProductIcon::Api => "api",
        }
    }

    pub const fn accent(self) -> Palette {
        match self {
            ProductIcon::Mcp => Palette::TerminalGreen,
            _ => Palette::ElectricCyan,
        }
    }
}

/// Write `icon-{name}.png` for one product.
pub fn create_product_icon(
    out_dir: &Path,
    name: &str,
    kind: ProductIcon,
    size: u32,
) -> BrandResult<PathBuf> {
    let canvas = draw_product_icon(kind, size)?;
    let path = save_png(&canvas, out_dir, &format!("icon-{name}.png"))?;
    log::info!("Created icon: icon-{}.png", name);
    Ok(path)
}

/// Write every product icon under its default name.
pub fn create_product_icons(out_dir: &Path, size: u32) -> BrandResult<Vec<PathBuf>> {
    ProductIcon::ALL
        .into_iter()
        .map(|kind| create_product_icon(out_dir, kind.default_name(), kind, size))
        .collect()
}

fn draw_product_icon(kind: ProductIcon, size: u32) -> BrandResult<Canvas> {
    let mut canvas = shape_canvas(size, size)?;
    let center = size as i32 / 2;
    let bg_radius = size as i32 / 2 - 15;
    let c = px(center);
    let accent = kind.accent();

    for i in (1..=4).rev() {
        canvas.circle(
            c,
            c,
            px(bg_radius + i * 5),
            ShapeStyle::fill(accent.with_alpha((40 - i * 8) as u8)),
        );
    }
    canvas.circle(
        c,
        c,
        px(bg_radius),
        ShapeStyle::fill(Palette::TerminalDark.rgb()).with_outline(accent.rgb(), 2.0),
    );

    let color = accent.rgb();
    match kind {
        ProductIcon::Mcp => draw_mcp(&mut canvas, c, color),
        ProductIcon::Desktop => draw_desktop(&mut canvas, c, color),
        ProductIcon::Office => draw_office(&mut canvas, c, color),
        ProductIcon::Api => draw_api(&mut canvas, c, color),
    }

    Ok(canvas)
}

fn draw_mcp(canvas: &mut Canvas, c: f32, color: CanvasColor) {
    canvas.circle(c, c, 12.0, ShapeStyle::fill(color));

    for (dx, dy) in [(-35.0, -25.0), (35.0, -25.0), (-35.0, 25.0), (35.0, 25.0)] {
        let (x, y) = (c + dx, c + dy);
        canvas.circle(x, y, 8.0, ShapeStyle::fill(color));
        canvas.line(&[(x, y), (c, c)], color, 2.0);
    }

    let shield = [
        (c, c - 30.0),
        (c + 25.0, c - 15.0),
        (c + 25.0, c + 10.0),
        (c, c + 30.0),
        (c - 25.0, c + 10.0),
        (c - 25.0, c - 15.0),
    ];
    canvas.polygon(&shield, ShapeStyle::outline(color, 2.0));
}

fn draw_desktop(canvas: &mut Canvas, c: f32, color: CanvasColor) {
    let (left, top, width, height) = (c - 40.0, c - 30.0, 80.0, 50.0);
    canvas.rectangle(
        BBox::new(left, top, left + width, top + height),
        ShapeStyle::outline(color, 2.0),
    );

    // Terminal lines
    for i in 0..3 {
        let y = top + 12.0 + i as f32 * 12.0;
        let len = 50.0 - i as f32 * 10.0;
        canvas.line(&[(left + 10.0, y), (left + 10.0 + len, y)], color, 2.0);
    }

    let base = top + height;
    canvas.line(&[(c, base), (c, base + 15.0)], color, 2.0);
    canvas.line(&[(c - 20.0, base + 15.0), (c + 20.0, base + 15.0)], color, 3.0);
}

fn draw_office(canvas: &mut Canvas, c: f32, color: CanvasColor) {
    let (left, top, width, height) = (c - 30.0, c - 40.0, 50.0, 65.0);
    let fold = 12.0;

    canvas.polygon(
        &[
            (left, top),
            (left + width - fold, top),
            (left + width, top + fold),
            (left + width, top + height),
            (left, top + height),
        ],
        ShapeStyle::outline(color, 2.0),
    );
    canvas.line(
        &[
            (left + width - fold, top),
            (left + width - fold, top + fold),
            (left + width, top + fold),
        ],
        color,
        1.0,
    );

    for i in 0..3 {
        let y = top + 20.0 + i as f32 * 12.0;
        canvas.line(&[(left + 8.0, y), (left + width - 15.0, y)], color, 2.0);
    }

    let green = Palette::TerminalGreen.rgb();
    let (plus_x, plus_y) = (left + width - 8.0, top + height - 15.0);
    canvas.line(&[(plus_x - 8.0, plus_y), (plus_x + 8.0, plus_y)], green, 3.0);
    canvas.line(&[(plus_x, plus_y - 8.0), (plus_x, plus_y + 8.0)], green, 3.0);
}

fn draw_api(canvas: &mut Canvas, c: f32, color: CanvasColor) {
    for side in [-1.0, 1.0] {
        let inner = c + side * 35.0;
        let outer = c + side * 45.0;
        canvas.line(&[(inner, c - 25.0), (outer, c - 25.0)], color, 3.0);
        canvas.line(&[(outer, c - 25.0), (outer, c + 25.0)], color, 3.0);
        canvas.line(&[(inner, c + 25.0), (outer, c + 25.0)], color, 3.0);
    }

    for dx in [-15.0, 0.0, 15.0] {
        canvas.circle(c + dx, c, 5.0, ShapeStyle::fill(color));
    }
}
