//! Raster canvas for the brand generators.
//!
//! A [`Canvas`] is an RGBA pixmap that fills and strokes `tiny-skia` paths,
//! draws text as glyph outlines shaped by `cosmic-text`, and encodes itself as
//! PNG. Paths come from the builders in [`path`]; fonts come from a
//! [`FontBook`] that is built once and cloned into every canvas.
//!
//! ```rust,ignore
//! use anon_brand_canvas2d::{path, Canvas, CanvasColor, FontBook};
//!
//! let mut canvas = Canvas::new(64, 64, &FontBook::new())?;
//! if let Some(disc) = path::ellipse(32.0, 32.0, 20.0, 20.0) {
//!     canvas.fill_path(&disc, CanvasColor::from_rgb8(0, 255, 255));
//! }
//! let png = canvas.encode_png()?;
//! ```

mod canvas;
mod color;
mod error;
mod font_book;
pub mod path;
mod text;

pub use canvas::{Canvas, Pen, MAX_SIDE};
pub use color::CanvasColor;
pub use error::{CanvasError, CanvasResult};
pub use font_book::FontBook;
pub use text::{CanvasFont, FontFamily, TextRun};

pub use tiny_skia::{LineCap, LineJoin, Path};
