use image::RgbaImage;

use crate::error::RenderError;

/// Pixel dimensions of a rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub width: u32,
    pub height: u32,
}

impl RasterSize {
    /// The size the mini-game expects for fruit sprites.
    pub const FRUIT: RasterSize = RasterSize::new(200, 200);

    pub const fn new(width: u32, height: u32) -> Self {
        RasterSize { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for RasterSize {
    fn default() -> Self {
        RasterSize::FRUIT
    }
}

/// Something that turns SVG source into pixels.
///
/// Implementations must return an image of exactly `size`, stretching the
/// drawing on each axis independently if the aspect ratios differ.
pub trait Rasterizer {
    fn name(&self) -> &'static str;

    fn rasterize(&self, svg: &[u8], size: RasterSize) -> Result<RgbaImage, RenderError>;
}

#[cfg(feature = "resvg")]
pub use self::cpu::ResvgRasterizer;

#[cfg(feature = "resvg")]
mod cpu {
    use image::{Rgba, RgbaImage};
    use resvg::tiny_skia::{Pixmap, Transform};
    use resvg::usvg::{Options, Tree};

    use super::{RasterSize, Rasterizer};
    use crate::error::RenderError;

    /// Software rasterizer backed by resvg and tiny-skia.
    pub struct ResvgRasterizer {
        options: Options<'static>,
    }

    impl ResvgRasterizer {
        pub fn new() -> Self {
            let mut options = Options::default();
            options.fontdb_mut().load_system_fonts();
            log::debug!("resvg: loaded {} font faces", options.fontdb.len());
            ResvgRasterizer { options }
        }
    }

    impl Default for ResvgRasterizer {
        fn default() -> Self {
            ResvgRasterizer::new()
        }
    }

    impl Rasterizer for ResvgRasterizer {
        fn name(&self) -> &'static str {
            "resvg"
        }

        fn rasterize(&self, svg: &[u8], size: RasterSize) -> Result<RgbaImage, RenderError> {
            let tree = Tree::from_data(svg, &self.options)
                .map_err(|e| RenderError::Parse(e.to_string()))?;
            rasterize_tree(&tree, size)
        }
    }

    pub fn rasterize_tree(tree: &Tree, size: RasterSize) -> Result<RgbaImage, RenderError> {
        let invalid = RenderError::InvalidSize {
            width: size.width,
            height: size.height,
        };
        if size.is_empty() {
            return Err(invalid);
        }

        let source = tree.size();
        if source.width() <= 0.0 || source.height() <= 0.0 {
            return Err(RenderError::EmptySource);
        }
        let sx = size.width as f32 / source.width();
        let sy = size.height as f32 / source.height();
        log::debug!(
            "resvg: {}x{} -> {}x{} (scale {sx:.3}, {sy:.3})",
            source.width(),
            source.height(),
            size.width,
            size.height
        );

        let mut pixmap = Pixmap::new(size.width, size.height).ok_or(invalid)?;
        resvg::render(tree, Transform::from_scale(sx, sy), &mut pixmap.as_mut());

        // tiny-skia keeps premultiplied alpha; PNG wants straight alpha.
        let mut image = RgbaImage::new(size.width, size.height);
        for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(image)
    }

}
