use super::background::{draw_glow_text, gradient_background};
use crate::error::BrandResult;
use crate::fonts::BrandFonts;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use std::path::{Path, PathBuf};

const TITLE: &str = "Privacy-as-Code";
const URL: &str = "anonymize.dev";

/// `linkedin-post.png`, 1200x627.
pub fn create_linkedin_post(out_dir: &Path, fonts: &BrandFonts) -> BrandResult<PathBuf> {
    let (width, height) = (1200, 627);
    let mut canvas = gradient_background(fonts, width, height)?;
    let (w, h) = (width as f32, height as f32);
    let large = fonts.font(56.0);
    let medium = fonts.font(32.0);
    let small = fonts.font(24.0);
    let cyan = Palette::ElectricCyan.rgb();
    let green = Palette::TerminalGreen.rgb();

    draw_glow_text(&mut canvas, TITLE, (60.0, 180.0), &large, cyan, None);
    canvas.text(
        (60.0, 260.0),
        "Protect data in your AI workflows",
        &medium,
        Palette::GhostWhite.rgb(),
    );

    let features = [
        "MCP Server for Claude & Cursor",
        "50+ Entity Types",
        "48 Languages",
    ];
    for (i, feature) in features.iter().enumerate() {
        let y = 340.0 + 40.0 * i as f32;
        canvas.text((80.0, y), &format!(">{feature}"), &small, green);
    }

    canvas.text((60.0, h - 80.0), URL, &medium, Palette::NeonMagenta.rgb());

    canvas.rectangle(
        BBox::new(w - 300.0, 100.0, w - 60.0, 500.0),
        ShapeStyle::outline(cyan, 2.0),
    );
    canvas.text((w - 280.0, 120.0), "MCP", &large, cyan);
    canvas.text((w - 280.0, 200.0), "Server", &medium, green);

    save_png(&canvas, out_dir, "linkedin-post.png")
}

/// `twitter-post.png`, 1200x675, centred layout with green corner brackets.
pub fn create_twitter_post(out_dir: &Path, fonts: &BrandFonts) -> BrandResult<PathBuf> {
    let (width, height) = (1200, 675);
    let mut canvas = gradient_background(fonts, width, height)?;
    let (w, h) = (width as f32, height as f32);
    let (half_w, half_h) = ((width / 2) as f32, (height / 2) as f32);
    let large = fonts.font(64.0);
    let medium = fonts.font(36.0);

    draw_glow_text(
        &mut canvas,
        TITLE,
        (half_w - 280.0, half_h - 80.0),
        &large,
        Palette::ElectricCyan.rgb(),
        None,
    );
    canvas.text(
        (half_w - 220.0, half_h + 20.0),
        "MCP Server for AI workflows",
        &medium,
        Palette::GhostWhite.rgb(),
    );
    canvas.text(
        (half_w - 120.0, h - 100.0),
        URL,
        &medium,
        Palette::NeonMagenta.rgb(),
    );

    let green = Palette::TerminalGreen.rgb();
    canvas.line(&[(40.0, 40.0), (40.0, 120.0)], green, 3.0);
    canvas.line(&[(40.0, 40.0), (120.0, 40.0)], green, 3.0);
    canvas.line(&[(w - 40.0, h - 40.0), (w - 40.0, h - 120.0)], green, 3.0);
    canvas.line(&[(w - 40.0, h - 40.0), (w - 120.0, h - 40.0)], green, 3.0);

    save_png(&canvas, out_dir, "twitter-post.png")
}

/// `instagram-square.png`, 1080x1080, with fading concentric rings above the title.
pub fn create_instagram_square(out_dir: &Path, fonts: &BrandFonts) -> BrandResult<PathBuf> {
    let size = 1080;
    let mut canvas = gradient_background(fonts, size, size)?;
    let c = (size / 2) as f32;
    let large = fonts.font(72.0);
    let medium = fonts.font(40.0);
    let cyan = Palette::ElectricCyan.rgb();

    for r in (51..=200).rev().step_by(30) {
        let alpha = (100.0 - (200 - r) as f32 * 0.4) as u8;
        let r = r as f32;
        canvas.ellipse_box(
            BBox::new(c - r, c - r - 50.0, c + r, c + r - 50.0),
            ShapeStyle::outline(cyan.with_alpha(alpha), 2.0),
        );
    }

    draw_glow_text(&mut canvas, TITLE, (c - 280.0, c + 180.0), &large, cyan, None);
    canvas.text(
        (c - 260.0, c + 280.0),
        "Protect your AI workflows",
        &medium,
        Palette::GhostWhite.rgb(),
    );
    canvas.text(
        (c - 120.0, size as f32 - 100.0),
        URL,
        &medium,
        Palette::NeonMagenta.rgb(),
    );

    save_png(&canvas, out_dir, "instagram-square.png")
}
