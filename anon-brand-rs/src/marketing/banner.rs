use super::background::{draw_glow_text, gradient_background};
use crate::error::BrandResult;
use crate::fonts::BrandFonts;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use std::path::{Path, PathBuf};

/// `web-banner.png`, 1920x400, title on the left and a mock terminal on the right.
pub fn create_web_banner(out_dir: &Path, fonts: &BrandFonts) -> BrandResult<PathBuf> {
    let (width, height) = (1920, 400);
    let mut canvas = gradient_background(fonts, width, height)?;
    let (w, h) = (width as f32, height as f32);
    let large = fonts.font(64.0);
    let medium = fonts.font(32.0);
    let gray = Palette::MatrixGray.rgb();

    draw_glow_text(
        &mut canvas,
        "Privacy-as-Code",
        (100.0, 120.0),
        &large,
        Palette::ElectricCyan.rgb(),
        None,
    );
    canvas.text(
        (100.0, 210.0),
        "MCP Server | Desktop App | Office Add-in",
        &medium,
        Palette::GhostWhite.rgb(),
    );

    let tx = w - 600.0;
    canvas.rectangle(
        BBox::new(tx, 80.0, w - 80.0, h - 80.0),
        ShapeStyle::outline(gray, 2.0),
    );
    canvas.rectangle(BBox::new(tx, 80.0, w - 80.0, 120.0), ShapeStyle::fill(gray));

    let lines = [
        ("$ npx @anonym-legal/mcp-server", Palette::TerminalGreen),
        ("> PII protection enabled", Palette::ElectricCyan),
        ("> 50+ entity types active", Palette::SyntaxSlate),
    ];
    for (i, (line, color)) in lines.into_iter().enumerate() {
        let y = 140.0 + 50.0 * i as f32;
        canvas.text((tx + 20.0, y), line, &medium, color.rgb());
    }

    save_png(&canvas, out_dir, "web-banner.png")
}

/// `email-banner.png`, 600x200.
pub fn create_email_banner(out_dir: &Path, fonts: &BrandFonts) -> BrandResult<PathBuf> {
    let (width, height) = (600, 200);
    let mut canvas = gradient_background(fonts, width, height)?;
    let w = width as f32;

    draw_glow_text(
        &mut canvas,
        "Anonymize.dev",
        (40.0, 50.0),
        &fonts.font(36.0),
        Palette::ElectricCyan.rgb(),
        None,
    );
    canvas.text(
        (40.0, 110.0),
        "Privacy-as-Code for Developers",
        &fonts.font(20.0),
        Palette::GhostWhite.rgb(),
    );
    canvas.line(
        &[(40.0, 160.0), (w - 40.0, 160.0)],
        Palette::TerminalGreen.rgb(),
        2.0,
    );

    save_png(&canvas, out_dir, "email-banner.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_banner_title_bar() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_web_banner(dir.path(), &BrandFonts::generic()).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (1920, 400));
        let [r, g, b, a] = img.get_pixel(1500, 100).0;
        assert_eq!((r, g, b, a), (0x1e, 0x1e, 0x2e, 255));
    }

    #[test]
    fn test_email_banner_rule() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_email_banner(dir.path(), &BrandFonts::generic()).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (600, 200));
        let [r, g, b, _] = img.get_pixel(300, 160).0;
        assert_eq!((r, g, b), Palette::TerminalGreen.rgb_tuple());
        let [r, g, b, _] = img.get_pixel(20, 150).0;
        assert_eq!((r, g, b), Palette::VoidBlack.rgb_tuple());
    }
}
