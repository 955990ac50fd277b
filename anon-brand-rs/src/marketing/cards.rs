use super::background::{draw_glow_text, gradient_background};
use crate::error::BrandResult;
use crate::fonts::BrandFonts;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use std::path::{Path, PathBuf};

pub const CARD_WIDTH: u32 = 400;
pub const CARD_HEIGHT: u32 = 500;

/// One product marketing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCard {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: Palette,
    pub features: [&'static str; 3],
}

impl ProductCard {
    pub const ALL: [ProductCard; 3] = [
        ProductCard {
            id: "mcp-server",
            title: "MCP Server",
            subtitle: "AI Privacy Shield",
            accent: Palette::TerminalGreen,
            features: ["Claude Desktop", "Cursor IDE", "Pro+ plans"],
        },
        ProductCard {
            id: "desktop-app",
            title: "Desktop App",
            subtitle: "Bulk Processing",
            accent: Palette::ElectricCyan,
            features: ["Windows FREE", "Drag & drop", "Local processing"],
        },
        ProductCard {
            id: "office-add-in",
            title: "Office Add-in",
            subtitle: "In-app Protection",
            accent: Palette::NeonMagenta,
            features: ["Word, Excel, PPT", "Select & protect", "All plans"],
        },
    ];

    pub fn file_name(&self) -> String {
        format!("card-{}.png", self.id)
    }
}

/// Write `card-{id}.png` for every product card.
pub fn create_product_cards(out_dir: &Path, fonts: &BrandFonts) -> BrandResult<Vec<PathBuf>> {
    let large = fonts.font(36.0);
    let medium = fonts.font(24.0);
    let (w, h) = (CARD_WIDTH as f32, CARD_HEIGHT as f32);
    let c = (CARD_WIDTH / 2) as f32;

    let mut written = Vec::with_capacity(ProductCard::ALL.len());
    for card in &ProductCard::ALL {
        let mut canvas = gradient_background(fonts, CARD_WIDTH, CARD_HEIGHT)?;
        let accent = card.accent.rgb();

        canvas.rectangle(
            BBox::new(10.0, 10.0, w - 10.0, h - 10.0),
            ShapeStyle::outline(accent, 2.0),
        );
        canvas.ellipse_box(
            BBox::new(c - 60.0, 80.0, c + 60.0, 200.0),
            ShapeStyle::outline(accent, 3.0),
        );

        // Rough centring by character count
        let title_x = c - (card.title.chars().count() * 10) as f32;
        draw_glow_text(&mut canvas, card.title, (title_x, 240.0), &large, accent, None);
        let subtitle_x = c - (card.subtitle.chars().count() * 6) as f32;
        canvas.text(
            (subtitle_x, 300.0),
            card.subtitle,
            &medium,
            Palette::GhostWhite.rgb(),
        );

        for (i, feature) in card.features.iter().enumerate() {
            let y = 360.0 + 35.0 * i as f32;
            canvas.text(
                (60.0, y),
                &format!("> {feature}"),
                &medium,
                Palette::SyntaxSlate.rgb(),
            );
        }

        written.push(save_png(&canvas, out_dir, &card.file_name())?);
    }
    log::info!("Created {} product cards ({}x{})", written.len(), CARD_WIDTH, CARD_HEIGHT);
    Ok(written)
}
