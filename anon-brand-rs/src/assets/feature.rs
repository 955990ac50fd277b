use super::shape_canvas;
use crate::error::BrandResult;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use anon_brand_canvas2d::Canvas;
use std::path::{Path, PathBuf};

pub const FEATURE_ICON_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureIcon {
    Shield,
    Lock,
    Globe,
    Speed,
    Terminal,
}

impl FeatureIcon {
    pub const ALL: [FeatureIcon; 5] = [
        FeatureIcon::Shield,
        FeatureIcon::Lock,
        FeatureIcon::Globe,
        FeatureIcon::Speed,
        FeatureIcon::Terminal,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FeatureIcon::Shield => "shield",
            FeatureIcon::Lock => "lock",
            FeatureIcon::Globe => "globe",
            FeatureIcon::Speed => "speed",
            FeatureIcon::Terminal => "terminal",
        }
    }
}

/// Write `icon-{name}.png` for every feature.
pub fn create_feature_icons(out_dir: &Path, size: u32) -> BrandResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(FeatureIcon::ALL.len());
    for icon in FeatureIcon::ALL {
        let canvas = draw_feature(icon, size)?;
        written.push(save_png(&canvas, out_dir, &format!("icon-{}.png", icon.name()))?);
    }
    log::info!("Created feature icons: {} icons", written.len());
    Ok(written)
}

fn draw_feature(icon: FeatureIcon, size: u32) -> BrandResult<Canvas> {
    let mut canvas = shape_canvas(size, size)?;
    let c = (size / 2) as f32;
    let cyan = Palette::ElectricCyan.rgb();
    let green = Palette::TerminalGreen.rgb();

    match icon {
        FeatureIcon::Shield => {
            let shield = [
                (c, c - 35.0),
                (c + 30.0, c - 20.0),
                (c + 30.0, c + 10.0),
                (c, c + 35.0),
                (c - 30.0, c + 10.0),
                (c - 30.0, c - 20.0),
            ];
            canvas.polygon(&shield, ShapeStyle::outline(green, 3.0));
            canvas.line(
                &[(c - 12.0, c), (c - 2.0, c + 10.0), (c + 15.0, c - 12.0)],
                green,
                3.0,
            );
        }
        FeatureIcon::Lock => {
            canvas.rounded_rectangle(
                BBox::new(c - 18.0, c - 5.0, c + 18.0, c + 25.0),
                3.0,
                ShapeStyle::outline(cyan, 2.0),
            );
            canvas.arc_box(BBox::new(c - 12.0, c - 25.0, c + 12.0, c), 0.0, 180.0, cyan, 2.0);
            canvas.line(&[(c - 12.0, c - 12.0), (c - 12.0, c - 5.0)], cyan, 2.0);
            canvas.line(&[(c + 12.0, c - 12.0), (c + 12.0, c - 5.0)], cyan, 2.0);
        }
        FeatureIcon::Globe => {
            let r = 28.0;
            let half = 14.0;
            canvas.circle(c, c, r, ShapeStyle::outline(cyan, 2.0));
            canvas.ellipse_box(
                BBox::new(c - half, c - r, c + half, c + r),
                ShapeStyle::outline(cyan, 1.0),
            );
            canvas.line(&[(c - r, c), (c + r, c)], cyan, 1.0);
            canvas.arc_box(BBox::new(c - r, c - half, c + r, c + half + r), 200.0, 340.0, cyan, 1.0);
        }
        FeatureIcon::Speed => {
            canvas.arc_box(BBox::around(c, c, 28.0), 135.0, 405.0, cyan, 3.0);
            canvas.line(&[(c, c), (c + 15.0, c - 20.0)], green, 3.0);
            canvas.circle(c, c, 5.0, ShapeStyle::fill(cyan));
        }
        FeatureIcon::Terminal => {
            canvas.rounded_rectangle(
                BBox::new(c - 30.0, c - 22.0, c + 30.0, c + 22.0),
                4.0,
                ShapeStyle::outline(cyan, 2.0),
            );
            canvas.line(&[(c - 30.0, c - 14.0), (c + 30.0, c - 14.0)], cyan, 1.0);

            let lights = [Palette::HotCoral, Palette::NeonMagenta, Palette::TerminalGreen];
            for (i, light) in lights.into_iter().enumerate() {
                let x = c - 24.0 + i as f32 * 10.0;
                canvas.ellipse_box(
                    BBox::new(x, c - 20.0, x + 6.0, c - 14.0),
                    ShapeStyle::fill(light.rgb()),
                );
            }

            canvas.line(&[(c - 22.0, c - 2.0), (c - 12.0, c - 2.0)], green, 2.0);
            canvas.line(&[(c - 22.0, c + 8.0), (c + 15.0, c + 8.0)], cyan, 2.0);
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_hub_is_cyan() {
        let canvas = draw_feature(FeatureIcon::Speed, FEATURE_ICON_SIZE).unwrap();
        assert_eq!(canvas.pixel(50, 50).unwrap(), Palette::ElectricCyan.rgb());
    }

    #[test]
    fn test_speed_gauge_has_open_bottom() {
        let canvas = draw_feature(FeatureIcon::Speed, FEATURE_ICON_SIZE).unwrap();
        // 135..405 degrees leaves the bottom quadrant (45..135) undrawn
        assert_eq!(canvas.pixel(50, 77).unwrap().a, 0);
        assert!(canvas.pixel(50, 23).unwrap().a > 0);
    }

    #[test]
    fn test_terminal_traffic_lights() {
        let canvas = draw_feature(FeatureIcon::Terminal, FEATURE_ICON_SIZE).unwrap();
        assert_eq!(canvas.pixel(29, 33).unwrap(), Palette::HotCoral.rgb());
        assert_eq!(canvas.pixel(39, 33).unwrap(), Palette::NeonMagenta.rgb());
        assert_eq!(canvas.pixel(49, 33).unwrap(), Palette::TerminalGreen.rgb());
    }
}
