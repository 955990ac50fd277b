use crate::error::BrandResult;
use crate::fonts::BrandFonts;
use crate::palette::Palette;
use crate::shapes::BrandDraw;
use anon_brand_canvas2d::{Canvas, CanvasColor, CanvasFont};

/// Distance between grid lines of the marketing background.
pub const GRID_SPACING: usize = 40;

const GRID_ALPHA: u8 = 50;

/// Opaque void_black canvas with a faint matrix_gray grid.
pub fn gradient_background(
    fonts: &BrandFonts,
    width: u32,
    height: u32,
) -> BrandResult<Canvas> {
    let mut canvas = fonts.canvas(width, height)?;
    canvas.fill_background(Palette::VoidBlack.rgb());

    let grid = Palette::MatrixGray.with_alpha(GRID_ALPHA);
    let (w, h) = (width as f32, height as f32);
    for x in (0..width).step_by(GRID_SPACING) {
        let x = x as f32;
        canvas.line(&[(x, 0.0), (x, h)], grid, 1.0);
    }
    for y in (0..height).step_by(GRID_SPACING) {
        let y = y as f32;
        canvas.line(&[(0.0, y), (w, y)], grid, 1.0);
    }
    Ok(canvas)
}

/// Neon text: faint copies spread over growing squares, then the text itself.
///
/// For offset 5 down to 1 the string is drawn at every `(x + dx, y + dy)` with
/// `|dx|, |dy| <= offset` at alpha `40 - 6 * offset`. `glow` defaults to `color`.
/// The text is shaped once and the outlines reused for every copy.
pub fn draw_glow_text(
    canvas: &mut Canvas,
    text: &str,
    (x, y): (f32, f32),
    font: &CanvasFont,
    color: CanvasColor,
    glow: Option<CanvasColor>,
) {
    let run = canvas.shape_text(text, font);
    if run.is_empty() {
        return;
    }
    let glow = glow.unwrap_or(color);
    for offset in (1..=5i32).rev() {
        let layer = glow.with_alpha((40 - offset * 6) as u8);
        for dx in -offset..=offset {
            for dy in -offset..=offset {
                canvas.fill_text_run(&run, x + dx as f32, y + dy as f32, layer);
            }
        }
    }
    canvas.fill_text_run(&run, x, y, color.with_alpha(255));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_opaque_void_black() {
        let canvas = gradient_background(&BrandFonts::none(), 200, 100).unwrap();
        assert_eq!(canvas.pixel(20, 20).unwrap(), Palette::VoidBlack.rgb());
        assert_eq!(canvas.pixel(199, 99).unwrap().a, 255);
    }

    #[test]
    fn test_grid_lines_are_tinted() {
        let canvas = gradient_background(&BrandFonts::none(), 200, 100).unwrap();
        let void = Palette::VoidBlack.rgb();
        let on_grid = canvas.pixel(40, 20).unwrap();
        assert_eq!(on_grid.a, 255);
        assert_ne!(on_grid, void);
        // Blended towards matrix_gray, never past it
        assert!(on_grid.b > void.b && on_grid.b < Palette::MatrixGray.rgb().b);
        assert_ne!(canvas.pixel(20, 40).unwrap(), void);
    }

    #[test]
    fn test_glow_without_glyphs_leaves_canvas_untouched() {
        let mut canvas = gradient_background(&BrandFonts::none(), 100, 60).unwrap();
        let before = canvas.encode_png().unwrap();
        let font = BrandFonts::none().font(20.0);
        draw_glow_text(
            &mut canvas,
            "Anonymize.dev",
            (10.0, 10.0),
            &font,
            Palette::ElectricCyan.rgb(),
            None,
        );
        assert_eq!(canvas.encode_png().unwrap(), before);
    }

    fn alpha(canvas: &Canvas, x: u32, y: u32) -> u8 {
        canvas.pixel(x, y).unwrap().a
    }

    /// Leftmost fully covered pixel of the middle solid row.
    fn solid_left_edge(canvas: &Canvas) -> (u32, u32) {
        let solid_rows: Vec<u32> = (0..canvas.height())
            .filter(|&y| (0..canvas.width()).any(|x| alpha(canvas, x, y) == 255))
            .collect();
        assert!(!solid_rows.is_empty(), "no solid glyph pixels");
        let row = solid_rows[solid_rows.len() / 2];
        let x = (0..canvas.width())
            .find(|&x| alpha(canvas, x, row) == 255)
            .unwrap();
        (x, row)
    }

    #[test]
    fn test_glow_halo_fades_out_within_five_pixels() {
        let fonts = BrandFonts::generic();
        let font = fonts.font(48.0);
        let cyan = Palette::ElectricCyan.rgb();

        let mut plain = fonts.canvas(120, 100).unwrap();
        plain.text((40.0, 20.0), "I", &font, cyan);
        let (edge, row) = solid_left_edge(&plain);
        assert!(edge >= 10);

        let mut glowing = fonts.canvas(120, 100).unwrap();
        draw_glow_text(&mut glowing, "I", (40.0, 20.0), &font, cyan, None);

        assert_eq!(alpha(&glowing, edge, row), 255);
        for d in 1..=5 {
            assert!(alpha(&glowing, edge - d, row) > 0, "no halo {d}px out");
        }
        let outer = alpha(&glowing, edge - 5, row);
        assert!(outer < 255, "halo saturated 5px out");
        assert!(alpha(&glowing, edge - 1, row) >= outer);
        assert_eq!(alpha(&glowing, edge - 8, row), 0);
    }

    #[test]
    fn test_glow_colour_differs_from_text_colour() {
        let fonts = BrandFonts::generic();
        let font = fonts.font(48.0);
        let mut plain = fonts.canvas(120, 100).unwrap();
        plain.text((40.0, 20.0), "I", &font, Palette::PureWhite.rgb());
        let (edge, row) = solid_left_edge(&plain);

        let mut canvas = fonts.canvas(120, 100).unwrap();
        draw_glow_text(
            &mut canvas,
            "I",
            (40.0, 20.0),
            &font,
            Palette::PureWhite.rgb(),
            Some(Palette::HotCoral.rgb()),
        );
        assert_eq!(canvas.pixel(edge, row).unwrap(), Palette::PureWhite.rgb());
        let halo = canvas.pixel(edge - 4, row).unwrap();
        assert!(halo.a > 0);
        assert!(halo.r > 200 && halo.g < 100, "halo = {halo:?}");
    }
}
