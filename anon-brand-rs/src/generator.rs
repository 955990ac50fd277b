//! Whole-run generators: every asset or every marketing graphic in one call.

use crate::assets::{
    create_entity_icons, create_favicons, create_feature_icons, create_hero_graphic, create_logo,
    create_pattern_tile, create_product_icons, ENTITY_ICON_SIZE, FAVICON_SIZES,
    FEATURE_ICON_SIZE, HERO_HEIGHT, HERO_WIDTH, LOGO_SIZE, PATTERN_TILE_SIZE, PRODUCT_ICON_SIZE,
};
use crate::config::GeneratorConfig;
use crate::error::BrandResult;
use crate::fonts::BrandFonts;
use crate::marketing::{
    create_email_banner, create_instagram_square, create_linkedin_post, create_product_cards,
    create_twitter_post, create_web_banner,
};
use crate::output::ensure_dir;
use std::path::PathBuf;

/// Writes the brand asset set (logo, favicons, icons, hero, pattern).
#[derive(Debug, Clone)]
pub struct AssetGenerator {
    config: GeneratorConfig,
}

impl AssetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate every asset and return the written paths in order.
    pub fn run(&self) -> BrandResult<Vec<PathBuf>> {
        let out = self.config.output_dir();
        ensure_dir(out)?;
        log::info!("Generating brand assets into {}", out.display());

        let mut written = create_logo(out, LOGO_SIZE)?;
        written.extend(create_favicons(out, &FAVICON_SIZES)?);
        written.extend(create_product_icons(out, PRODUCT_ICON_SIZE)?);
        written.push(create_hero_graphic(out, HERO_WIDTH, HERO_HEIGHT)?);
        written.push(create_pattern_tile(out, PATTERN_TILE_SIZE)?);
        written.extend(create_entity_icons(out, ENTITY_ICON_SIZE)?);
        written.extend(create_feature_icons(out, FEATURE_ICON_SIZE)?);
        Ok(written)
    }
}

/// Writes the social and marketing graphics.
#[derive(Debug, Clone)]
pub struct MarketingGenerator {
    config: GeneratorConfig,
}

impl MarketingGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Resolve the font, then generate every graphic.
    ///
    /// The font is resolved before the output directory is touched, so a
    /// strict font failure leaves nothing behind.
    pub fn run(&self) -> BrandResult<Vec<PathBuf>> {
        let fonts = BrandFonts::load(&self.config.font, self.config.fallback)?;
        let out = self.config.output_dir();
        ensure_dir(out)?;
        log::info!("Generating marketing materials into {}", out.display());
        if fonts.is_fallback() {
            log::info!("Marketing text uses the bundled sans-serif face");
        }

        let mut written = vec![
            create_linkedin_post(out, &fonts)?,
            create_twitter_post(out, &fonts)?,
            create_instagram_square(out, &fonts)?,
            create_web_banner(out, &fonts)?,
            create_email_banner(out, &fonts)?,
        ];
        written.extend(create_product_cards(out, &fonts)?);
        Ok(written)
    }
}
