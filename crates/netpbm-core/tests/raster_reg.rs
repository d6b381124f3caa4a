//! Raster regression test
//!
//! Exercises the plane-set container on decoded fixtures: shape,
//! per-pixel access, plane replacement and the switch to gray.
//!
//! # Test summary
//! - Decoded fixture shape and samples (tests 1-3)
//! - Plane replacement keeps the header (tests 4-5)
//! - Gray switch keeps data mode (tests 6-7)

use netpbm_core::{ChannelMode, Encoding, Error, Plane, RgbPlanes};
use netpbm_test::{RegParams, load_test_image};

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    // Tests 1-3: decoded fixture
    eprintln!("=== Tests 1-3: fixture access ===");
    let mut raster = load_test_image("gradient4x4.ppm").expect("load gradient4x4.ppm");
    rp.compare_values(16.0, raster.rgb().unwrap().red.data().len() as f64, 0.0);
    let (r, g, b) = raster.rgb().unwrap().get_rgb(3, 2).unwrap();
    rp.compare_values((17 * 3 + 3 * 2) as f64, r as f64, 0.0);
    rp.compare_values((11 * 2 + 5 * 3) as f64, g as f64, 0.0);
    assert_eq!(b, 255 - 13 * 3 - 7 * 2);
    assert!(raster.rgb().unwrap().get_rgb(4, 0).is_none());
    assert!(raster.gray().is_err());

    // Tests 4-5: replacement
    eprintln!("=== Tests 4-5: replace planes ===");
    let old = raster.replace_rgb(RgbPlanes::new(4, 4).unwrap()).unwrap();
    rp.compare_values(r as f64, old.red.get(3, 2).unwrap() as f64, 0.0);
    rp.compare_values(0.0, raster.rgb().unwrap().red.get(3, 2).unwrap() as f64, 0.0);
    assert!(matches!(
        raster.replace_rgb(RgbPlanes::new(3, 4).unwrap()),
        Err(Error::DimensionMismatch { .. })
    ));
    assert_eq!(raster.max_value(), "255");

    // Tests 6-7: gray switch
    eprintln!("=== Tests 6-7: gray switch ===");
    let mut swatch = load_test_image("swatch3x3.ppm").expect("load swatch3x3.ppm");
    swatch.set_gray(Plane::filled(3, 3, 9).unwrap()).unwrap();
    assert_eq!(swatch.channel_mode(), ChannelMode::Gray);
    rp.compare_strings(b"P2", swatch.encoding().signature().as_bytes());
    rp.compare_values(9.0, swatch.gray().unwrap().get(2, 2).unwrap() as f64, 0.0);
    assert!(swatch.comment().is_some());
    assert!(swatch.set_encoding(Encoding::BinaryColor).is_err());

    assert!(rp.cleanup(), "raster regression test failed");
}
