use anon_brand_rs::{
    AssetGenerator, BrandError, FontFallback, FontSpec, GeneratorConfig, MarketingGenerator,
};
use rstest::rstest;
use std::collections::BTreeSet;
use std::path::Path;

fn file_names(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

#[test]
fn test_asset_generator_writes_full_set() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("assets");
    let written = AssetGenerator::new(GeneratorConfig::new(&out)).run().unwrap();

    let names = file_names(&out);
    assert_eq!(names.len(), written.len());
    // logo png + pdf, 6 favicons, 4 product icons, hero, pattern, 7 entities, 5 features
    assert_eq!(names.len(), 26);
    for expected in [
        "logo-anonymize-dev.png",
        "logo-anonymize-dev.pdf",
        "icon-mcp-server.png",
        "icon-desktop-app.png",
        "icon-office-addin.png",
        "icon-api.png",
        "hero-graphic.png",
        "pattern-tile.png",
        "icon-shield.png",
        "icon-terminal.png",
    ] {
        assert!(names.contains(expected), "missing {expected}");
    }
}

#[rstest]
#[case("logo-anonymize-dev.png", (512, 512))]
#[case("favicon-16.png", (16, 16))]
#[case("favicon-256.png", (256, 256))]
#[case("icon-api.png", (200, 200))]
#[case("hero-graphic.png", (1200, 600))]
#[case("pattern-tile.png", (100, 100))]
#[case("entity-credit-card.png", (80, 80))]
#[case("icon-globe.png", (100, 100))]
fn test_asset_dimensions(#[case] name: &str, #[case] expected: (u32, u32)) {
    let dir = tempfile::tempdir().unwrap();
    AssetGenerator::new(GeneratorConfig::new(dir.path()))
        .run()
        .unwrap();
    assert_eq!(png_dimensions(&dir.path().join(name)), expected);
}

#[test]
fn test_entity_and_favicon_file_sets() {
    let dir = tempfile::tempdir().unwrap();
    AssetGenerator::new(GeneratorConfig::new(dir.path()))
        .run()
        .unwrap();
    let names = file_names(dir.path());

    let favicons: BTreeSet<_> = names
        .iter()
        .filter(|n| n.starts_with("favicon-"))
        .cloned()
        .collect();
    assert_eq!(favicons.len(), 6);

    let entities: BTreeSet<_> = names
        .iter()
        .filter(|n| n.starts_with("entity-"))
        .cloned()
        .collect();
    let expected: BTreeSet<_> = [
        "person",
        "email",
        "phone",
        "location",
        "id-card",
        "credit-card",
        "code",
    ]
    .iter()
    .map(|n| format!("entity-{n}.png"))
    .collect();
    assert_eq!(entities, expected);
}

#[test]
fn test_asset_rerun_keeps_file_set() {
    let dir = tempfile::tempdir().unwrap();
    let generator = AssetGenerator::new(GeneratorConfig::new(dir.path()));
    generator.run().unwrap();
    let first = file_names(dir.path());
    generator.run().unwrap();
    assert_eq!(file_names(dir.path()), first);
}

#[test]
fn test_logo_pdf_header() {
    let dir = tempfile::tempdir().unwrap();
    AssetGenerator::new(GeneratorConfig::new(dir.path()))
        .run()
        .unwrap();
    let pdf = std::fs::read(dir.path().join("logo-anonymize-dev.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_marketing_generator_with_fallback_font() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path().join("marketing"))
        .with_font(FontSpec::new(dir.path().join("no-such-font.ttf")));
    let written = MarketingGenerator::new(config).run().unwrap();
    assert_eq!(written.len(), 8);

    let out = dir.path().join("marketing");
    assert_eq!(png_dimensions(&out.join("linkedin-post.png")), (1200, 627));
    assert_eq!(png_dimensions(&out.join("twitter-post.png")), (1200, 675));
    assert_eq!(png_dimensions(&out.join("instagram-square.png")), (1080, 1080));
    assert_eq!(png_dimensions(&out.join("web-banner.png")), (1920, 400));
    assert_eq!(png_dimensions(&out.join("email-banner.png")), (600, 200));
    for id in ["mcp-server", "desktop-app", "office-add-in"] {
        assert_eq!(
            png_dimensions(&out.join(format!("card-{id}.png"))),
            (400, 500)
        );
    }
}

#[test]
fn test_marketing_strict_font_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("marketing");
    let missing = dir.path().join("no-such-font.ttf");
    let config = GeneratorConfig::new(&out)
        .with_font(FontSpec::new(&missing))
        .with_fallback(FontFallback::Fail);

    match MarketingGenerator::new(config).run() {
        Err(BrandError::FontUnavailable { file, .. }) => assert_eq!(file, missing),
        other => panic!("expected FontUnavailable, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn test_marketing_rerun_keeps_file_set() {
    let dir = tempfile::tempdir().unwrap();
    let generator = MarketingGenerator::new(GeneratorConfig::new(dir.path()));
    let first_paths = generator.run().unwrap();
    let first = file_names(dir.path());
    assert_eq!(first.len(), 8);

    let second_paths = generator.run().unwrap();
    assert_eq!(second_paths, first_paths);
    assert_eq!(file_names(dir.path()), first);
}

#[test]
fn test_marketing_text_is_rendered_with_font_file() {
    let dir = tempfile::tempdir().unwrap();
    let font = dir.path().join("brand.ttf");
    std::fs::write(&font, include_bytes!("../fonts/inter/Inter-Regular.ttf")).unwrap();
    let out = dir.path().join("marketing");
    let config = GeneratorConfig::new(&out)
        .with_font(FontSpec::new(&font))
        .with_fallback(FontFallback::Fail);
    MarketingGenerator::new(config).run().unwrap();

    // Subtitle band of the email banner, below the glow title and above the rule
    let img = image::open(out.join("email-banner.png")).unwrap().to_rgba8();
    let bright = (40..400)
        .flat_map(|x| (110..140).map(move |y| (x, y)))
        .filter(|&(x, y)| {
            let [r, g, b, _] = img.get_pixel(x, y).0;
            r > 150 && g > 150 && b > 150
        })
        .count();
    assert!(bright > 100, "bright subtitle pixels = {bright}");
}
