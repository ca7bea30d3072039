use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::ConvertError;
use crate::raster::{RasterSize, Rasterizer};

pub const PNG_EXTENSION: &str = "png";

/// `fruits/apple.svg` -> `fruits/apple.png`
pub fn target_path(source: &Path) -> PathBuf {
    source.with_extension(PNG_EXTENSION)
}

/// Render `source` to a PNG next to it, replacing any previous output.
/// Returns the path that was written.
pub fn convert_one(
    rasterizer: &dyn Rasterizer,
    source: &Path,
    size: RasterSize,
) -> Result<PathBuf, ConvertError> {
    let svg = fs::read(source).map_err(|source_err| ConvertError::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let image = rasterizer.rasterize(&svg, size)?;

    let target = target_path(source);
    image
        .save_with_format(&target, ImageFormat::Png)
        .map_err(|e| ConvertError::Write {
            path: target.clone(),
            source: e,
        })?;
    Ok(target)
}
