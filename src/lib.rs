//! Batch conversion of SVG fruit sprites into fixed-size PNGs.
//!
//! The pipeline is strictly sequential: [`check_dependencies`], then
//! [`scan_assets`], then [`convert_one`] for every file, then a [`Summary`].

use std::io::Write;
use std::path::PathBuf;

pub mod convert;
pub mod deps;
pub mod error;
pub mod raster;
pub mod report;
pub mod scan;

pub use convert::{convert_one, target_path};
pub use deps::{check_dependencies, REMEDIATION};
pub use error::{ConvertError, Error, RenderError};
#[cfg(feature = "resvg")]
pub use raster::ResvgRasterizer;
pub use raster::{RasterSize, Rasterizer};
pub use report::Summary;
pub use scan::scan_assets;

use report::file_name;

/// Where the sprites live, relative to the crate root.
pub const ASSETS_DIR: &str = "assets/images/fruits";

#[derive(Debug, Clone)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub size: RasterSize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(ASSETS_DIR),
            size: RasterSize::FRUIT,
        }
    }
}

/// Convert every SVG in `config.assets_dir`, writing progress to `out`.
///
/// Per-file failures are counted in the returned [`Summary`]; only a missing
/// or empty assets directory (or a broken `out`) produces an `Err`.
pub fn run(config: &Config, rasterizer: &dyn Rasterizer, out: &mut impl Write) -> Result<Summary, Error> {
    let files = scan_assets(&config.assets_dir)?;

    writeln!(out, "Found {} SVG files to convert:", files.len())?;
    for file in &files {
        writeln!(out, "  - {}", file_name(file))?;
    }
    writeln!(out, "\nStarting conversion...")?;

    let mut summary = Summary::new(files.len());
    for file in files {
        let result = convert_one(rasterizer, &file, config.size);
        match &result {
            Ok(target) => writeln!(out, "✓ Converted {} -> {}", file_name(&file), file_name(target))?,
            Err(e) => {
                log::debug!("conversion of {} failed: {e:?}", file.display());
                writeln!(out, "✗ Failed to convert {}: {e}", file_name(&file))?
            }
        }
        summary.record(file, result);
    }

    summary.print(out)?;
    Ok(summary)
}

/// The whole program: dependency check, then [`run`], mapped to a process
/// exit code. Environment and configuration failures are reported on `out`
/// and yield 1; only a broken `out` is returned as an `Err`.
pub fn convert_all<F>(check: F, config: &Config, out: &mut impl Write) -> Result<u8, Error>
where
    F: FnOnce() -> Result<Box<dyn Rasterizer>, Error>,
{
    let rasterizer = match check() {
        Ok(r) => r,
        Err(e) => {
            writeln!(out, "{e}")?;
            writeln!(out, "Cannot proceed without a rasterization backend. Please install it manually:")?;
            writeln!(out, "{REMEDIATION}")?;
            return Ok(1);
        }
    };
    writeln!(out, "Using {} rasterizer", rasterizer.name())?;

    match run(config, rasterizer.as_ref(), out) {
        Ok(summary) => Ok(summary.exit_code()),
        Err(e @ (Error::MissingAssetsDir(_) | Error::NoSvgFiles(_) | Error::ScanDir { .. })) => {
            writeln!(out, "{e}")?;
            Ok(1)
        }
        Err(e) => Err(e),
    }
}
