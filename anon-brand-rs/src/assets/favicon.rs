use super::{px, shape_canvas};
use crate::error::BrandResult;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use anon_brand_canvas2d::Canvas;
use std::path::{Path, PathBuf};

pub const FAVICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Smallest favicon that still gets the "A" letterform.
pub const LETTERFORM_MIN_SIZE: u32 = 32;

/// Write `favicon-{size}.png` for every size.
pub fn create_favicons(out_dir: &Path, sizes: &[u32]) -> BrandResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let canvas = draw_favicon(size)?;
        written.push(save_png(&canvas, out_dir, &format!("favicon-{size}.png"))?);
    }
    log::info!("Created favicons: {:?}", sizes);
    Ok(written)
}

fn draw_favicon(size: u32) -> BrandResult<Canvas> {
    let mut canvas = shape_canvas(size, size)?;
    let s = size as i32;
    let center = s / 2;
    let radius = s / 2 - 1;
    let c = px(center);
    let cyan = Palette::ElectricCyan.rgb();

    canvas.circle(c, c, px(radius), ShapeStyle::fill(Palette::TerminalDark.rgb()));
    canvas.ellipse_box(
        BBox::new(
            px(center - radius + 1),
            px(center - radius + 1),
            px(center + radius - 1),
            px(center + radius - 1),
        ),
        ShapeStyle::outline(cyan, (s / 32).max(1) as f32),
    );

    if size >= LETTERFORM_MIN_SIZE {
        let a_height = (s as f32 * 0.4) as i32;
        let a_width = (s as f32 * 0.3) as i32;
        let a_top = center - a_height / 2;
        let a_left = center - a_width / 2;
        let width = (s / 16).max(1) as f32;
        let bottom = px(a_top + a_height);

        canvas.line(&[(c, px(a_top)), (px(a_left), bottom)], cyan, width);
        canvas.line(&[(c, px(a_top)), (px(a_left + a_width), bottom)], cyan, width);

        let crossbar_y = px(a_top + (a_height as f32 * 0.6) as i32);
        canvas.line(
            &[
                (px(a_left + (a_width as f32 * 0.15) as i32), crossbar_y),
                (px(a_left + (a_width as f32 * 0.85) as i32), crossbar_y),
            ],
            cyan,
            width,
        );
    }

    Ok(canvas)
}
