//! Brand asset routines.
//!
//! Every routine draws onto a fresh transparent (or, for the hero graphic,
//! opaque) canvas and writes its files into the given directory, returning the
//! paths in write order.

mod entity;
mod favicon;
mod feature;
mod hero;
mod logo;
mod pattern;
mod product_icon;

pub use entity::{create_entity_icons, EntityIcon, ENTITY_ICON_SIZE};
pub use favicon::{create_favicons, FAVICON_SIZES, LETTERFORM_MIN_SIZE};
pub use feature::{create_feature_icons, FeatureIcon, FEATURE_ICON_SIZE};
pub use hero::{create_hero_graphic, HERO_HEIGHT, HERO_WIDTH};
pub use logo::{create_logo, LOGO_SIZE};
pub use pattern::{create_pattern_tile, PATTERN_TILE_SIZE};
pub use product_icon::{create_product_icon, create_product_icons, ProductIcon, PRODUCT_ICON_SIZE};

use crate::error::BrandResult;
use crate::fonts::BrandFonts;
use anon_brand_canvas2d::Canvas;

/// Canvas for text-free artwork; no font faces are registered.
fn shape_canvas(width: u32, height: u32) -> BrandResult<Canvas> {
    BrandFonts::none().canvas(width, height)
}

/// Integer pixel coordinate as a drawing coordinate.
fn px(v: i32) -> f32 {
    v as f32
}
