//! End-to-end tests for the cardex binary.

use std::path::PathBuf;

use assert_cmd::Command;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use predicates::prelude::*;

fn write_png(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let mut img = RgbImage::new(16, 16);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 16) as u8, (y * 16) as u8, 96]);
    }

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), 16, 16, ExtendedColorType::Rgb8)
        .unwrap();

    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn extract_student_card_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(&dir, "card.png");

    Command::cargo_bin("cardex")
        .unwrap()
        .args(["extract", input.to_str().unwrap(), "--doc-type", "student-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SHEIKH HOSSAIN"))
        .stdout(predicate::str::contains("2023-1-60-060"));
}

#[test]
fn extract_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.gif");
    std::fs::write(&path, b"GIF89a").unwrap();

    Command::cargo_bin("cardex")
        .unwrap()
        .args(["extract", path.to_str().unwrap(), "--doc-type", "nid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn batch_writes_summary_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_png(&dir, "a.png");
    write_png(&dir, "b.png");
    let pattern = format!("{}/*.png", dir.path().display());

    Command::cargo_bin("cardex")
        .unwrap()
        .args([
            "batch",
            &pattern,
            "--doc-type",
            "company-id",
            "--summary",
            "--output-dir",
            out.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let summary = std::fs::read_to_string(out.path().join("summary.csv")).unwrap();
    assert!(summary.contains("EMP-2023-0458"));
    assert_eq!(summary.lines().count(), 3);
}

#[test]
fn config_show_prints_defaults() {
    Command::cargo_bin("cardex")
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_file_size"));
}
