use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end the whole run before or instead of converting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no rasterization backend was compiled into this binary")]
    BackendUnavailable,

    #[error("rasterization backend `{name}` failed its self-test: {source}")]
    BackendBroken {
        name: &'static str,
        #[source]
        source: RenderError,
    },

    #[error("Assets directory not found: {}", .0.display())]
    MissingAssetsDir(PathBuf),

    #[error("No SVG files found in the assets directory {}", .0.display())]
    NoSvgFiles(PathBuf),

    #[error("failed to read assets directory {}: {source}", .path.display())]
    ScanDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write progress output: {0}")]
    Output(#[from] io::Error),
}

/// A single file that could not be converted. Never aborts the batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("malformed SVG: {0}")]
    Parse(String),

    #[error("invalid output size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("SVG has an empty intrinsic size")]
    EmptySource,
}
