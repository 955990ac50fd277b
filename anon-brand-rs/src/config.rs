//! Generator configuration.

use std::path::{Path, PathBuf};

/// Font file used for marketing text when nothing else is configured.
pub const DEFAULT_FONT_FILE: &str = "arial.ttf";

/// Where to find the TrueType font used for text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// Font file, tried as given first.
    pub file: PathBuf,
    /// Directories searched for `file` when it is not found as given.
    pub search_dirs: Vec<PathBuf>,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FONT_FILE),
            search_dirs: Vec::new(),
        }
    }
}

impl FontSpec {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            search_dirs: Vec::new(),
        }
    }

    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// First existing candidate: the file as given, then `dir/file` for each search dir.
    ///
    /// Absolute paths are only tried as given.
    pub fn locate(&self) -> Option<PathBuf> {
        if self.file.is_file() {
            return Some(self.file.clone());
        }
        if self.file.is_absolute() {
            return None;
        }
        self.search_dirs
            .iter()
            .map(|dir| dir.join(&self.file))
            .find(|candidate| candidate.is_file())
    }
}

/// What to do when the configured font file is missing or unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontFallback {
    /// Log a warning and draw text with the generic sans-serif family.
    #[default]
    Default,
    /// Stop with [`BrandError::FontUnavailable`](crate::BrandError::FontUnavailable).
    Fail,
}

/// Configuration shared by the asset and marketing generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory that receives the generated files; created if missing.
    pub output_dir: PathBuf,
    pub font: FontSpec,
    pub fallback: FontFallback,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            font: FontSpec::default(),
            fallback: FontFallback::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    pub fn with_fallback(mut self, fallback: FontFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
