//! End-to-end pipeline regression test
//!
//! Decodes a source image, applies one filter and checks the encoded
//! output bytes, both through [`process`] and through the command-line
//! entry point writing a real file.
//!
//! # Test summary
//! - Negate a uniform P6 image (tests 1-2)
//! - Grayscale P3 images to P2, including the 3x3 fixture (tests 3-5)
//! - Contrast to P5 with the observed range (test 6)
//! - CLI output naming and contents (tests 7-9)

use argh::FromArgs;
use netpbm::cli::{Args, run};
use netpbm::filter::Operation;
use netpbm::{DataMode, Encoding, PipelineError, process};
use netpbm_test::{RegParams, test_data_path};
use std::fs;

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // Tests 1-2: negate a uniform binary color image
    eprintln!("=== Tests 1-2: negate P6 ===");
    let mut source = b"P6\n3 3\n255\n".to_vec();
    source.extend([100u8, 150, 200].repeat(9));
    let mut out = Vec::new();
    let enc = process(&source[..], Operation::Negate, DataMode::Binary, &mut out).unwrap();
    assert_eq!(enc, Encoding::BinaryColor);
    let mut expected = b"P6\n3 3\n255\n".to_vec();
    expected.extend([155u8, 105, 55].repeat(9));
    rp.compare_strings(&expected, &out);
    rp.compare_values(expected.len() as f64, out.len() as f64, 0.0);

    // Tests 3-5: grayscale an ASCII color image to P2
    eprintln!("=== Tests 3-5: grayscale P3 -> P2 ===");
    let source = b"P3\n# two pixels\n2 1\n255\n100 150 200 10 20 30\n";
    let mut out = Vec::new();
    process(&source[..], Operation::Grayscale, DataMode::Ascii, &mut out).unwrap();
    rp.compare_strings(b"P2\n# two pixels\n2 1\n255\n140 18 ", &out);
    rp.compare_strings(b"P2", &out[..2]);

    // 3x3 ASCII color to ASCII gray; border pixels are converted too
    let swatch = fs::read(test_data_path("swatch3x3.ppm")).unwrap();
    let mut out = Vec::new();
    let enc = process(&swatch[..], Operation::Grayscale, DataMode::Ascii, &mut out).unwrap();
    assert_eq!(enc, Encoding::AsciiGray);
    rp.compare_strings(
        b"P2\n# 3x3 test swatch\n3 3\n255\n77 153 26 140 140 140 0 128 255 ",
        &out,
    );

    // Test 6: contrast
    eprintln!("=== Test 6: contrast P3 -> P5 ===");
    let source = b"P3\n3 1\n255\n100 100 100 110 110 110 151 151 151 ";
    let mut out = Vec::new();
    process(&source[..], Operation::Contrast, DataMode::Binary, &mut out).unwrap();
    // gray levels 100, 110, 151: scale 5
    rp.compare_strings(b"P5\n3 1\n255\n\x00\x32\xff", &out);

    // Tests 7-9: the command-line entry point
    eprintln!("=== Tests 7-9: pnmfilter run ===");
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = test_data_path("swatch3x3.ppm");

    let base = dir.path().join("swatch_gray");
    let args = Args::from_args(
        &["pnmfilter"],
        &["-g", "-o", "b", base.to_str().unwrap(), input.as_str()],
    )
    .unwrap();
    let written = run(&args).unwrap();
    assert_eq!(written, dir.path().join("swatch_gray.pgm"));
    let bytes = fs::read(&written).unwrap();
    rp.compare_strings(b"P5\n# 3x3 test swatch\n3 3\n255\n", &bytes[..bytes.len() - 9]);

    let base = dir.path().join("swatch_neg");
    let args = Args::from_args(
        &["pnmfilter"],
        &["-n", "-o", "a", base.to_str().unwrap(), input.as_str()],
    )
    .unwrap();
    let written = run(&args).unwrap();
    assert_eq!(written.extension().and_then(|e| e.to_str()), Some("ppm"));
    let text = fs::read_to_string(&written).unwrap();
    rp.compare_values(
        1.0,
        text.starts_with("P3\n# 3x3 test swatch\n3 3\n255\n0 255 255 255 0 255 ") as u8 as f64,
        0.0,
    );

    let base = dir.path().join("never");
    let args = Args::from_args(
        &["pnmfilter"],
        &["-o", "b", base.to_str().unwrap(), "/nonexistent/input.ppm"],
    )
    .unwrap();
    assert!(matches!(run(&args), Err(PipelineError::Io(_))));
    rp.compare_values(0.0, dir.path().join("never.ppm").exists() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "pipeline regression test failed");
}
