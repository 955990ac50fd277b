//! Font resolution for generated text.
//!
//! The configured font file is read and registered once per run; every canvas
//! the run creates clones the resulting font book. A bundled sans-serif face
//! (Inter, SIL Open Font License) is always registered so text never depends
//! on what the host has installed.

use crate::config::{FontFallback, FontSpec};
use crate::error::{BrandError, BrandResult};
use anon_brand_canvas2d::{Canvas, CanvasFont, FontBook, FontFamily};
use std::path::PathBuf;

const BUNDLED_SANS: &[u8] = include_bytes!("../fonts/inter/Inter-Regular.ttf");

/// Fonts available to one generator run.
#[derive(Debug, Clone)]
pub struct BrandFonts {
    book: FontBook,
    family: FontFamily,
    source: Option<PathBuf>,
}

impl BrandFonts {
    /// Resolve `spec` according to `fallback`.
    ///
    /// With [`FontFallback::Default`] a missing or unreadable file is logged and
    /// replaced by the bundled sans-serif face.
    pub fn load(spec: &FontSpec, fallback: FontFallback) -> BrandResult<Self> {
        match Self::load_file(spec) {
            Ok(fonts) => Ok(fonts),
            Err(reason) => match fallback {
                FontFallback::Fail => Err(BrandError::FontUnavailable {
                    file: spec.file.clone(),
                    reason,
                }),
                FontFallback::Default => {
                    log::warn!(
                        "Font file {} unavailable ({}); using the default sans-serif font",
                        spec.file.display(),
                        reason
                    );
                    Ok(Self::generic())
                }
            },
        }
    }

    /// The bundled face only, text drawn in the generic sans-serif family.
    pub fn generic() -> Self {
        Self {
            book: bundled_book(),
            family: FontFamily::SansSerif,
            source: None,
        }
    }

    /// No fonts at all. Canvases built from this draw shapes only.
    pub fn none() -> Self {
        Self {
            book: FontBook::new(),
            family: FontFamily::SansSerif,
            source: None,
        }
    }

    fn load_file(spec: &FontSpec) -> Result<Self, String> {
        let path = spec.locate().ok_or_else(|| {
            if spec.search_dirs.is_empty() {
                "file not found".to_string()
            } else {
                format!("file not found in {} search dir(s)", spec.search_dirs.len())
            }
        })?;
        let data = std::fs::read(&path).map_err(|e| format!("{}: {}", path.display(), e))?;

        let mut book = bundled_book();
        let family = book.add_font(data).map_err(|e| e.to_string())?;
        log::info!("Using font family {:?} from {}", family, path.display());
        Ok(Self {
            book,
            family: FontFamily::Named(family),
            source: Some(path),
        })
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// True when the configured file was replaced by the bundled face.
    pub fn is_fallback(&self) -> bool {
        self.source.is_none()
    }

    /// The brand font at `size_px`.
    pub fn font(&self, size_px: f32) -> CanvasFont {
        CanvasFont::new(self.family.clone(), size_px)
    }

    /// A new transparent canvas sharing this run's fonts.
    pub fn canvas(&self, width: u32, height: u32) -> BrandResult<Canvas> {
        Ok(Canvas::new(width, height, &self.book)?)
    }
}

fn bundled_book() -> FontBook {
    let mut book = FontBook::new();
    match book.add_font(BUNDLED_SANS.to_vec()) {
        Ok(family) => book.set_sans_serif(&family),
        Err(err) => log::warn!("Bundled sans-serif font rejected: {}", err),
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_fails_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        let spec = FontSpec::new(dir.path().join("missing.ttf"));
        let err = BrandFonts::load(&spec, FontFallback::Fail).unwrap_err();
        match err {
            BrandError::FontUnavailable { file, .. } => assert_eq!(file, spec.file),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unreadable_font_fails_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"this is not a font").unwrap();

        let err = BrandFonts::load(&FontSpec::new(&path), FontFallback::Fail).unwrap_err();
        assert!(matches!(err, BrandError::FontUnavailable { .. }));
    }

    #[test]
    fn test_missing_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let spec = FontSpec::new(dir.path().join("missing.ttf"));
        let fonts = BrandFonts::load(&spec, FontFallback::Default).unwrap();
        assert!(fonts.is_fallback());
        assert_eq!(fonts.family(), &FontFamily::SansSerif);
        assert_eq!(fonts.font(24.0).size_px, 24.0);
    }

    #[test]
    fn test_custom_font_keeps_bundled_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.ttf");
        std::fs::write(&path, BUNDLED_SANS).unwrap();

        let fonts = BrandFonts::load(&FontSpec::new(&path), FontFallback::Fail).unwrap();
        assert!(!fonts.is_fallback());
        assert!(matches!(fonts.family(), FontFamily::Named(name) if !name.is_empty()));
        assert_eq!(fonts.book.face_count(), 2);
    }

    #[test]
    fn test_generic_fonts_draw_text() {
        let fonts = BrandFonts::generic();
        assert!(!fonts.book.is_empty());
        let mut canvas = fonts.canvas(60, 30).unwrap();
        let run = canvas.shape_text("Ag", &fonts.font(20.0));
        assert!(!run.is_empty());
        assert!(run.width() > 10.0);
    }

    #[test]
    fn test_none_builds_canvases() {
        let fonts = BrandFonts::none();
        let canvas = fonts.canvas(32, 16).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (32, 16));
        assert!(matches!(
            fonts.canvas(0, 16),
            Err(BrandError::Canvas(_))
        ));
    }
}
