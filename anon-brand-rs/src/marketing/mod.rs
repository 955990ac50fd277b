//! Social and marketing graphics.
//!
//! All routines draw on an opaque grid background and take the run's resolved
//! [`BrandFonts`](crate::BrandFonts); text is anchored at its top-left corner.

mod background;
mod banner;
mod cards;
mod social;

pub use background::{draw_glow_text, gradient_background, GRID_SPACING};
pub use banner::{create_email_banner, create_web_banner};
pub use cards::{create_product_cards, ProductCard, CARD_HEIGHT, CARD_WIDTH};
pub use social::{create_instagram_square, create_linkedin_post, create_twitter_post};
