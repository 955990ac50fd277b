use super::shape_canvas;
use crate::error::BrandResult;
use crate::output::save_png;
use crate::palette::Palette;
use crate::shapes::{BBox, BrandDraw, ShapeStyle};
use anon_brand_canvas2d::Canvas;
use std::path::{Path, PathBuf};

pub const ENTITY_ICON_SIZE: u32 = 80;

/// Kind of personal data an entity badge stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityIcon {
    Person,
    Email,
    Phone,
    Location,
    IdCard,
    CreditCard,
    Code,
}

impl EntityIcon {
    pub const ALL: [EntityIcon; 7] = [
        EntityIcon::Person,
        EntityIcon::Email,
        EntityIcon::Phone,
        EntityIcon::Location,
        EntityIcon::IdCard,
        EntityIcon::CreditCard,
        EntityIcon::Code,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EntityIcon::Person => "person",
            EntityIcon::Email => "email",
            EntityIcon::Phone => "phone",
            EntityIcon::Location => "location",
            EntityIcon::IdCard => "id-card",
            EntityIcon::CreditCard => "credit-card",
            EntityIcon::Code => "code",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            EntityIcon::Person => "user silhouette",
            EntityIcon::Email => "envelope",
            EntityIcon::Phone => "phone",
            EntityIcon::Location => "pin",
            EntityIcon::IdCard => "card",
            EntityIcon::CreditCard => "payment card",
            EntityIcon::Code => "code brackets",
        }
    }
}

/// Write `entity-{name}.png` for every entity type.
pub fn create_entity_icons(out_dir: &Path, size: u32) -> BrandResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(EntityIcon::ALL.len());
    for icon in EntityIcon::ALL {
        let canvas = draw_entity(icon, size)?;
        written.push(save_png(&canvas, out_dir, &format!("entity-{}.png", icon.name()))?);
    }
    log::info!("Created entity icons: {} icons", written.len());
    Ok(written)
}

fn draw_entity(icon: EntityIcon, size: u32) -> BrandResult<Canvas> {
    let mut canvas = shape_canvas(size, size)?;
    let c = (size / 2) as f32;
    let cyan = Palette::ElectricCyan.rgb();
    let stroke = ShapeStyle::outline(cyan, 2.0);

    let bg_r = (size / 2) as f32 - 4.0;
    canvas.circle(
        c,
        c,
        bg_r,
        ShapeStyle::fill(Palette::TerminalDark.with_alpha(200)).with_outline(cyan, 1.0),
    );

    match icon {
        EntityIcon::Person => {
            canvas.ellipse_box(BBox::new(c - 8.0, c - 20.0, c + 8.0, c - 4.0), stroke);
            canvas.arc_box(BBox::new(c - 15.0, c - 5.0, c + 15.0, c + 25.0), 0.0, 180.0, cyan, 2.0);
        }
        EntityIcon::Email => {
            canvas.rectangle(BBox::new(c - 18.0, c - 10.0, c + 18.0, c + 12.0), stroke);
            canvas.line(
                &[(c - 18.0, c - 10.0), (c, c + 5.0), (c + 18.0, c - 10.0)],
                cyan,
                2.0,
            );
        }
        EntityIcon::Phone => {
            canvas.rounded_rectangle(BBox::new(c - 10.0, c - 18.0, c + 10.0, c + 18.0), 3.0, stroke);
            canvas.line(&[(c - 5.0, c + 12.0), (c + 5.0, c + 12.0)], cyan, 2.0);
        }
        EntityIcon::Location => {
            canvas.ellipse_box(BBox::new(c - 8.0, c - 15.0, c + 8.0, c + 1.0), stroke);
            canvas.polygon(&[(c - 8.0, c - 2.0), (c, c + 18.0), (c + 8.0, c - 2.0)], stroke);
        }
        EntityIcon::IdCard => {
            canvas.rounded_rectangle(BBox::new(c - 20.0, c - 12.0, c + 20.0, c + 12.0), 2.0, stroke);
            canvas.line(&[(c - 15.0, c - 5.0), (c - 5.0, c - 5.0)], cyan, 2.0);
            canvas.line(&[(c - 15.0, c + 2.0), (c + 10.0, c + 2.0)], cyan, 2.0);
            canvas.line(&[(c - 15.0, c + 7.0), (c + 5.0, c + 7.0)], cyan, 2.0);
        }
        EntityIcon::CreditCard => {
            canvas.rounded_rectangle(BBox::new(c - 22.0, c - 14.0, c + 22.0, c + 14.0), 2.0, stroke);
            canvas.line(&[(c - 22.0, c - 6.0), (c + 22.0, c - 6.0)], cyan, 2.0);
            canvas.rectangle(
                BBox::new(c - 18.0, c + 2.0, c - 8.0, c + 8.0),
                ShapeStyle::outline(cyan, 1.0),
            );
        }
        EntityIcon::Code => {
            for side in [-1.0, 1.0] {
                let inner = c + side * 12.0;
                let outer = c + side * 18.0;
                canvas.line(&[(inner, c - 12.0), (outer, c - 12.0)], cyan, 2.0);
                canvas.line(&[(outer, c - 12.0), (outer, c + 12.0)], cyan, 2.0);
                canvas.line(&[(inner, c + 12.0), (outer, c + 12.0)], cyan, 2.0);
            }
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<_> =
            EntityIcon::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), 7);
        assert_eq!(EntityIcon::CreditCard.description(), "payment card");
    }

    #[test]
    fn test_badge_background_is_translucent() {
        let canvas = draw_entity(EntityIcon::Code, ENTITY_ICON_SIZE).unwrap();
        // Inside the badge, clear of the brackets
        let p = canvas.pixel(40, 40).unwrap();
        assert_eq!(p.a, 200);
        assert_eq!(canvas.pixel(0, 0).unwrap().a, 0);
    }
}
