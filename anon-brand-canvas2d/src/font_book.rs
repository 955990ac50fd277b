//! The font database shared by the canvases of one run.

use crate::error::{CanvasError, CanvasResult};
use std::fmt;

/// Fonts available to text drawing. Cheap to clone into each [`Canvas`](crate::Canvas).
#[derive(Clone, Default)]
pub struct FontBook {
    db: fontdb::Database,
}

impl FontBook {
    /// A book with no faces. Canvases built from it draw no text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register font bytes and return the family name of the first face they contain.
    pub fn add_font(&mut self, data: Vec<u8>) -> CanvasResult<String> {
        let known = self.db.len();
        self.db.load_font_data(data);
        let family = self
            .db
            .faces()
            .skip(known)
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
        family.ok_or(CanvasError::NoFontFace)
    }

    /// Family used for [`FontFamily::SansSerif`](crate::FontFamily::SansSerif).
    pub fn set_sans_serif(&mut self, family: &str) {
        self.db.set_sans_serif_family(family);
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    pub(crate) fn database(&self) -> fontdb::Database {
        self.db.clone()
    }
}

impl fmt::Debug for FontBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .finish()
    }
}
