use super::{px, shape_canvas};
use crate::error::BrandResult;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use anon_brand_canvas2d::{Canvas, CanvasColor};
use std::path::{Path, PathBuf};

pub const HERO_WIDTH: u32 = 1200;
pub const HERO_HEIGHT: u32 = 600;

const GRID_SPACING: usize = 40;
const ARROW_SIZE: f32 = 8.0;

/// Data-flow illustration: sensitive blocks, the MCP shield, protected blocks.
pub fn create_hero_graphic(out_dir: &Path, width: u32, height: u32) -> BrandResult<PathBuf> {
    let canvas = draw_hero(width, height)?;
    let path = save_png(&canvas, out_dir, "hero-graphic.png")?;
    log::info!("Created hero graphic: hero-graphic.png");
    Ok(path)
}

/// Vertical centre of each of the four data rows.
fn row_ys(center_y: i32) -> impl Iterator<Item = f32> {
    (0..4).map(move |i| px(center_y - 90 + i * 60))
}

fn draw_hero(width: u32, height: u32) -> BrandResult<Canvas> {
    let mut canvas = shape_canvas(width, height)?;
    canvas.fill_background(Palette::VoidBlack.rgb());

    let (w, h) = (width as i32, height as i32);
    let grid = Palette::MatrixGray.with_alpha(100);
    for x in (0..w).step_by(GRID_SPACING) {
        canvas.line(&[(px(x), 0.0), (px(x), px(h))], grid, 1.0);
    }
    for y in (0..h).step_by(GRID_SPACING) {
        canvas.line(&[(0.0, px(y)), (px(w), px(y))], grid, 1.0);
    }

    let left_x = 150;
    let center_y = h / 2;
    let mcp_x = w / 2;
    let right_x = w - 150;

    let coral = Palette::HotCoral.rgb();
    let green = Palette::TerminalGreen.rgb();
    let cyan = Palette::ElectricCyan.rgb();

    // Sensitive data
    for y in row_ys(center_y) {
        canvas.rectangle(
            BBox::new(px(left_x - 60), y - 15.0, px(left_x + 60), y + 15.0),
            ShapeStyle::fill(Palette::HotCoral.with_alpha(180)).with_outline(coral, 2.0),
        );
    }

    // Shield
    let (mx, cy) = (px(mcp_x), px(center_y));
    let shield = [
        (mx, cy - 100.0),
        (mx + 80.0, cy - 60.0),
        (mx + 80.0, cy + 40.0),
        (mx, cy + 100.0),
        (mx - 80.0, cy + 40.0),
        (mx - 80.0, cy - 60.0),
    ];
    for i in (1..=5).rev() {
        canvas.polygon(
            &shield,
            ShapeStyle::fill(Palette::TerminalGreen.with_alpha((30 - i * 5) as u8)),
        );
    }
    canvas.polygon(&shield, ShapeStyle::outline(green, 3.0));

    // "MCP" label box
    let label_y = cy - 10.0;
    canvas.rectangle(
        BBox::new(mx - 35.0, label_y - 12.0, mx + 35.0, label_y + 12.0),
        ShapeStyle::fill(Palette::TerminalDark.rgb()).with_outline(green, 1.0),
    );

    // Protected (tokenized) data
    for y in row_ys(center_y) {
        canvas.rectangle(
            BBox::new(px(right_x - 60), y - 15.0, px(right_x + 60), y + 15.0),
            ShapeStyle::fill(Palette::TerminalDark.with_alpha(200)).with_outline(cyan, 2.0),
        );
        for j in 0..5 {
            let x = px(right_x - 40 + j * 20);
            canvas.ellipse_box(BBox::new(x, y - 3.0, x + 6.0, y + 3.0), ShapeStyle::fill(cyan));
        }
    }

    for y in row_ys(center_y) {
        dashed_line(&mut canvas, left_x + 70, mcp_x - 90, y, coral);
        dashed_line(&mut canvas, mcp_x + 90, right_x - 70, y, cyan);
        arrow_head(&mut canvas, px(mcp_x - 90), y, coral);
        arrow_head(&mut canvas, px(right_x - 70), y, cyan);
    }

    // Label placeholders
    let label_top = px(h - 60);
    let label_bottom = px(h - 40);
    canvas.rectangle(
        BBox::new(px(left_x - 50), label_top, px(left_x + 50), label_bottom),
        ShapeStyle::outline(coral, 1.0),
    );
    canvas.rectangle(
        BBox::new(px(right_x - 50), label_top, px(right_x + 50), label_bottom),
        ShapeStyle::outline(cyan, 1.0),
    );
    canvas.rectangle(
        BBox::new(px(mcp_x - 60), label_top, px(mcp_x + 60), label_bottom),
        ShapeStyle::outline(green, 1.0),
    );

    Ok(canvas)
}

/// 10 px dashes every 20 px starting at `from`, stopping before `to`.
fn dashed_line(canvas: &mut Canvas, from: i32, to: i32, y: f32, color: CanvasColor) {
    for x in (from..to).step_by(20) {
        canvas.line(&[(px(x), y), (px(x + 10), y)], color, 2.0);
    }
}

/// Right-pointing triangle with its tip at `(x, y)`.
fn arrow_head(canvas: &mut Canvas, x: f32, y: f32, color: CanvasColor) {
    canvas.polygon(
        &[
            (x, y),
            (x - ARROW_SIZE, y - ARROW_SIZE),
            (x - ARROW_SIZE, y + ARROW_SIZE),
        ],
        ShapeStyle::fill(color),
    );
}
