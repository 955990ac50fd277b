//! Procedural brand and marketing imagery for Anonymize.dev.
//!
//! Every image is composed from primitive shapes and text on a
//! [`Canvas`](anon_brand_canvas2d::Canvas) and written as PNG;
//! the logo is additionally written as a one-page vector PDF.
//!
//! ```rust,ignore
//! use anon_brand_rs::{AssetGenerator, GeneratorConfig};
//!
//! let written = AssetGenerator::new(GeneratorConfig::new("assets")).run()?;
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod fonts;
pub mod generator;
pub mod marketing;
pub mod output;
pub mod palette;
pub mod shapes;

pub use config::{FontFallback, FontSpec, GeneratorConfig, DEFAULT_FONT_FILE};
pub use error::{BrandError, BrandResult};
pub use fonts::BrandFonts;
pub use generator::{AssetGenerator, MarketingGenerator};
pub use palette::{hex_to_rgb, Palette};
pub use shapes::{BBox, BrandDraw, ShapeStyle};
