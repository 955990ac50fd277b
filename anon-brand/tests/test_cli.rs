// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_assets_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    Command::cargo_bin("anon-brand")?
        .arg("assets")
        .arg("--output-root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: logo-anonymize-dev.pdf"))
        .stdout(predicate::str::contains("Brand assets generated successfully!"));

    let assets = root.path().join("assets");
    assert!(assets.join("logo-anonymize-dev.png").is_file());
    assert!(assets.join("favicon-256.png").is_file());
    assert!(assets.join("entity-code.png").is_file());
    assert!(!root.path().join("marketing").exists());
    Ok(())
}

#[test]
fn test_progress_is_framed_by_rules() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let output = Command::cargo_bin("anon-brand")?
        .arg("assets")
        .arg("--output-root")
        .arg(root.path())
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let rule = "=".repeat(50);
    assert_eq!(stdout.lines().filter(|line| *line == rule).count(), 2);
    assert_eq!(
        stdout.lines().filter(|line| line.starts_with("Created: ")).count(),
        26
    );
    Ok(())
}

#[test]
fn test_strict_fonts_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    Command::cargo_bin("anon-brand")?
        .arg("marketing")
        .arg("--output-root")
        .arg(root.path())
        .arg("--font-file")
        .arg("definitely-missing-font.ttf")
        .arg("--strict-fonts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("definitely-missing-font.ttf"));

    assert!(!root.path().join("marketing").exists());
    Ok(())
}

#[test]
fn test_marketing_falls_back_without_strict() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    Command::cargo_bin("anon-brand")?
        .arg("marketing")
        .arg("--output-root")
        .arg(root.path())
        .arg("--font-file")
        .arg("definitely-missing-font.ttf")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: card-office-add-in.png"));

    assert!(root.path().join("marketing").join("web-banner.png").is_file());
    Ok(())
}

#[rstest]
#[case::no_subcommand(None)]
#[case::all(Some("all"))]
fn test_default_runs_both(#[case] subcommand: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let mut cmd = Command::cargo_bin("anon-brand")?;
    if let Some(subcommand) = subcommand {
        cmd.arg(subcommand);
    }
    cmd.arg("--output-root")
        .arg(root.path())
        .assert()
        .success();

    assert!(root.path().join("assets").join("hero-graphic.png").is_file());
    assert!(root.path().join("marketing").join("twitter-post.png").is_file());
    Ok(())
}

#[test]
fn test_unknown_subcommand_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("anon-brand")?
        .arg("posters")
        .assert()
        .failure();
    Ok(())
}
