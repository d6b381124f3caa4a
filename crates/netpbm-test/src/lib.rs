//! netpbm-test - Regression test framework for the netpbm toolkit
//!
//! Modeled on a golden-file regression harness with three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use netpbm_test::RegParams;
//!
//! let mut rp = RegParams::new("filters");
//! rp.compare_values(255.0, sample as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use netpbm_core::{Encoding, Raster};

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "gradient4x4.ppm")
pub fn load_test_image(name: &str) -> TestResult<Raster> {
    let path = test_data_path(name);
    netpbm_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // netpbm-test is at crates/netpbm-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Color raster with every pixel set to `rgb`.
pub fn uniform_raster(w: u32, h: u32, rgb: (u8, u8, u8)) -> TestResult<Raster> {
    let mut raster = Raster::new(Encoding::BinaryColor, w, h, "255")?;
    let planes = raster.rgb_mut()?;
    planes.red.data_mut().fill(rgb.0);
    planes.green.data_mut().fill(rgb.1);
    planes.blue.data_mut().fill(rgb.2);
    Ok(raster)
}

/// Color raster whose samples vary with position:
/// red = 17x + 3y, green = 11y + 5x, blue = 255 - 13x - 7y (all mod 256).
pub fn gradient_raster(w: u32, h: u32) -> TestResult<Raster> {
    let mut raster = Raster::new(Encoding::BinaryColor, w, h, "255")?;
    let planes = raster.rgb_mut()?;
    for y in 0..h {
        for x in 0..w {
            let r = (17 * x + 3 * y) as u8;
            let g = (11 * y + 5 * x) as u8;
            let b = 255u32.wrapping_sub(13 * x + 7 * y) as u8;
            planes.set_rgb_unchecked(x, y, r, g, b);
        }
    }
    Ok(raster)
}
