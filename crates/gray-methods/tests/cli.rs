use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("gray-methods").expect("binary built")
}

#[test]
fn fails_cleanly_on_missing_input() {
    let dir = tempfile::tempdir().expect("tempdir");

    cli()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("leaves.jpg").and(predicate::str::contains("was not found")),
        );
}

#[test]
fn names_the_missing_file_in_the_diagnostic() {
    let dir = tempfile::tempdir().expect("tempdir");

    cli()
        .current_dir(dir.path())
        .arg("vacation.jpeg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vacation.jpeg"));
}

#[test]
fn writes_figure_and_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input.png");
    let img = RgbImage::from_fn(16, 12, |x, y| Rgb([(x * 15) as u8, (y * 20) as u8, 128]));
    img.save(&input).expect("write test image");

    cli()
        .current_dir(dir.path())
        .args(["input.png", "-o", "figure.png", "--report", "report.json"])
        .assert()
        .success();

    assert!(dir.path().join("figure.png").exists());

    let raw = std::fs::read_to_string(dir.path().join("report.json")).expect("read report");
    let report: serde_json::Value = serde_json::from_str(&raw).expect("parse report");
    assert_eq!(report["width"], 16);
    assert_eq!(report["height"], 12);
    assert_eq!(report["methods"].as_array().map(Vec::len), Some(3));
}

#[test]
fn derives_the_output_name_from_the_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("photo.png");
    let img = RgbImage::from_pixel(8, 8, Rgb([10, 200, 30]));
    img.save(&input).expect("write test image");

    cli()
        .current_dir(dir.path())
        .arg("photo.png")
        .assert()
        .success();

    assert!(dir.path().join("photo.grayscale.png").exists());
}
