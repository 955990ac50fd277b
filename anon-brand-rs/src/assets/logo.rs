use super::{px, shape_canvas};
use crate::error::BrandResult;
use crate::output::{save_png, write_file};
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use anon_brand_canvas2d::Canvas;
use anon_brand_pdf::{PaintMode, PdfColor, PdfPage};
use std::path::{Path, PathBuf};

pub const LOGO_SIZE: u32 = 512;

const LOGO_PNG: &str = "logo-anonymize-dev.png";
const LOGO_PDF: &str = "logo-anonymize-dev.pdf";

const STROKE: i32 = 6;
const DOT_RADIUS: i32 = 8;
const DOT_LIFT: i32 = 5;

/// Layout of the logo in raster coordinates (y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogoLayout {
    size: i32,
    center: i32,
    radius: i32,
    border_radius: i32,
    a_top: i32,
    a_left: i32,
    a_width: i32,
    a_height: i32,
    crossbar_y: i32,
    crossbar_left: i32,
    crossbar_right: i32,
}

impl LogoLayout {
    fn new(size: u32) -> Self {
        let size = size as i32;
        let center = size / 2;
        let radius = size / 2 - 20;
        let a_height = (size as f32 * 0.45) as i32;
        let a_width = (size as f32 * 0.35) as i32;
        let a_top = center - a_height / 2;
        let a_left = center - a_width / 2;
        Self {
            size,
            center,
            radius,
            border_radius: radius - 4,
            a_top,
            a_left,
            a_width,
            a_height,
            crossbar_y: a_top + (a_height as f32 * 0.6) as i32,
            crossbar_left: a_left + (a_width as f32 * 0.2) as i32,
            crossbar_right: a_left + (a_width as f32 * 0.8) as i32,
        }
    }
}

/// Draw the logo at `size` and write it as PNG and PDF.
pub fn create_logo(out_dir: &Path, size: u32) -> BrandResult<Vec<PathBuf>> {
    let layout = LogoLayout::new(size);

    let canvas = draw_raster(size, &layout)?;
    let png = save_png(&canvas, out_dir, LOGO_PNG)?;

    let pdf = draw_vector(&layout)?;
    let pdf = write_file(out_dir, LOGO_PDF, &pdf)?;

    Ok(vec![png, pdf])
}

fn draw_raster(size: u32, l: &LogoLayout) -> BrandResult<Canvas> {
    let mut canvas = shape_canvas(size, size)?;
    let c = px(l.center);
    let cyan = Palette::ElectricCyan.rgb();

    // Glow, outermost and faintest first
    for i in (1..=5).rev() {
        let alpha = (50 - i * 8) as u8;
        canvas.circle(
            c,
            c,
            px(l.radius + i * 8),
            ShapeStyle::fill(Palette::ElectricCyan.with_alpha(alpha)),
        );
    }

    canvas.circle(c, c, px(l.radius), ShapeStyle::fill(Palette::TerminalDark.rgb()));
    canvas.circle(c, c, px(l.border_radius), ShapeStyle::outline(cyan, 2.0));

    let bottom = px(l.a_top + l.a_height);
    canvas.line(&[(c, px(l.a_top)), (px(l.a_left), bottom)], cyan, STROKE as f32);
    canvas.line(
        &[(c, px(l.a_top)), (px(l.a_left + l.a_width), bottom)],
        cyan,
        STROKE as f32,
    );
    canvas.line(
        &[
            (px(l.crossbar_left), px(l.crossbar_y)),
            (px(l.crossbar_right), px(l.crossbar_y)),
        ],
        cyan,
        STROKE as f32,
    );

    // Data point above the apex
    canvas.ellipse_box(
        BBox::new(
            px(l.center - DOT_RADIUS),
            px(l.a_top - DOT_RADIUS - DOT_LIFT),
            px(l.center + DOT_RADIUS),
            px(l.a_top + DOT_RADIUS - DOT_LIFT),
        ),
        ShapeStyle::fill(Palette::TerminalGreen.rgb()),
    );

    Ok(canvas)
}

fn draw_vector(l: &LogoLayout) -> BrandResult<Vec<u8>> {
    let mut page = PdfPage::new(px(l.size), px(l.size))?.with_title("Anonymize.dev logo");
    let c = px(l.center);
    let cy = page.flip_y(c);

    page.set_fill_color(PdfColor::from(Palette::TerminalDark.rgb_tuple()))
        .circle(c, cy, px(l.radius), PaintMode::Fill);

    page.set_stroke_color(PdfColor::from(Palette::ElectricCyan.rgb_tuple()))
        .set_line_width(2.0)
        .circle(c, cy, px(l.border_radius), PaintMode::Stroke);

    let top = page.flip_y(px(l.a_top));
    let bottom = page.flip_y(px(l.a_top + l.a_height));
    let crossbar = page.flip_y(px(l.crossbar_y));
    page.set_line_width(STROKE as f32)
        .line(c, top, px(l.a_left), bottom)
        .line(c, top, px(l.a_left + l.a_width), bottom)
        .line(px(l.crossbar_left), crossbar, px(l.crossbar_right), crossbar);

    page.set_fill_color(PdfColor::from(Palette::TerminalGreen.rgb_tuple()))
        .circle(c, top + px(DOT_RADIUS + DOT_LIFT), px(DOT_RADIUS), PaintMode::Fill);

    Ok(page.finish()?)
}
