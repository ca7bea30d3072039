use crate::error::Error;
use crate::raster::{RasterSize, Rasterizer};

/// What to tell the user when no working backend is available.
pub const REMEDIATION: &str = "cargo install --path . --features resvg";

const PROBE_SVG: &[u8] =
    br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"><rect width="1" height="1"/></svg>"#;

/// Find the rasterization backend this binary was built with and make sure it
/// can actually render.
pub fn check_dependencies() -> Result<Box<dyn Rasterizer>, Error> {
    let rasterizer = builtin().ok_or(Error::BackendUnavailable)?;
    verify(rasterizer)
}

/// Render a one pixel probe with `rasterizer`.
pub fn verify(rasterizer: Box<dyn Rasterizer>) -> Result<Box<dyn Rasterizer>, Error> {
    let name = rasterizer.name();
    log::debug!("probing rasterizer {name}");
    match rasterizer.rasterize(PROBE_SVG, RasterSize::new(1, 1)) {
        Ok(_) => Ok(rasterizer),
        Err(source) => Err(Error::BackendBroken { name, source }),
    }
}

#[cfg(feature = "resvg")]
fn builtin() -> Option<Box<dyn Rasterizer>> {
    Some(Box::new(crate::raster::ResvgRasterizer::new()))
}

#[cfg(not(feature = "resvg"))]
fn builtin() -> Option<Box<dyn Rasterizer>> {
    None
}
