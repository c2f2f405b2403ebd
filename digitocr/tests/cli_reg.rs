//! Command-line regression test
//!
//! Runs the `digitocr` binary against the committed fixtures and checks
//! output and exit status for success and each failure mode.

use digitocr_test::{RegParams, synth, test_data_path};
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_digitocr"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn digitocr")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn cli_reg_success() {
    let mut rp = RegParams::new("cli_success");

    for (name, digits) in [("captcha_01234.b64", "01234"), ("captcha_41871.b64", "41871")] {
        let path = test_data_path(name);
        let out = run(&[&path]);
        rp.compare_values(0.0, out.status.code().unwrap_or(-1) as f64, 0.0);
        let expected = format!("Input {}\nRecognized digits: {}\n", path, digits);
        rp.compare_strings(expected.as_bytes(), stdout(&out).as_bytes());
    }

    assert!(rp.cleanup(), "cli success test failed");
}

#[test]
fn cli_reg_default_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("base64.txt"),
        synth::captcha_base64("27182").unwrap(),
    )
    .unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_digitocr"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "Input base64.txt\nRecognized digits: 27182\n");
}

#[test]
fn cli_reg_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let path = path.to_string_lossy();

    let out = run(&[&path]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains(&format!("Error: The file '{}' was not found.", path)));
}

#[test]
fn cli_reg_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "  \n\n").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let out = run(&[&path]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains(&format!("Error: The file '{}' is empty.", path)));
}

#[test]
fn cli_reg_invalid_data() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "definitely not a bitmap!").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let out = run(&[&path]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("An error occurred: invalid Base64 string"));

    let bm = digitocr_core::Bitmap24::new_filled(
        digitocr_core::ImageGeometry::new(100, 30),
        synth::PAPER,
    )
    .unwrap();
    std::fs::write(file.path(), synth::to_base64(&bm)).unwrap();
    let out = run(&[&path]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("expected image dimensions 100x27, but got 100x30"));
}

#[test]
fn cli_reg_no_offset_correction() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), synth::captcha_base64("18000").unwrap()).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let out = run(&[&path]);
    assert!(stdout(&out).ends_with("Recognized digits: 18000\n"));

    // slots after the '1' are sampled one pixel too far right
    let out = run(&["--no-offset-correction", &path]);
    assert!(out.status.success());
    assert!(stdout(&out).ends_with("Recognized digits: 11111\n"));
}

#[test]
fn cli_reg_usage() {
    let out = run(&["--help"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("Usage: digitocr"));

    let out = run(&["--frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("unknown option '--frobnicate'"));
}
