use super::{px, shape_canvas};
use crate::error::BrandResult;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BrandDraw, ShapeStyle};
use anon_brand_canvas2d::Canvas;
use std::path::{Path, PathBuf};

pub const PATTERN_TILE_SIZE: u32 = 100;

const SPACING: usize = 20;
const DOT_RADIUS: f32 = 2.0;

/// Repeating dot-grid tile for page backgrounds.
pub fn create_pattern_tile(out_dir: &Path, size: u32) -> BrandResult<PathBuf> {
    let canvas = draw_pattern(size)?;
    let path = save_png(&canvas, out_dir, "pattern-tile.png")?;
    log::info!("Created pattern tile: pattern-tile.png");
    Ok(path)
}

fn draw_pattern(size: u32) -> BrandResult<Canvas> {
    let mut canvas = shape_canvas(size, size)?;
    let dot = ShapeStyle::fill(Palette::MatrixGray.with_alpha(80));
    for x in (0..size as i32).step_by(SPACING) {
        for y in (0..size as i32).step_by(SPACING) {
            canvas.circle(px(x), px(y), DOT_RADIUS, dot);
        }
    }
    Ok(canvas)
}
