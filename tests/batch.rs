use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use image::{Rgba, RgbaImage};
use svg_batch_rasterize::{convert_all, run, Config, Error, RasterSize, Rasterizer, RenderError, REMEDIATION};

/// Fills the target with a flat colour; chokes on anything mentioning "broken".
#[derive(Clone, Default)]
struct Flat {
    calls: Rc<Cell<usize>>,
}

impl Rasterizer for Flat {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn rasterize(&self, svg: &[u8], size: RasterSize) -> Result<RgbaImage, RenderError> {
        self.calls.set(self.calls.get() + 1);
        if String::from_utf8_lossy(svg).contains("broken") {
            return Err(RenderError::Parse("unexpected end of stream".into()));
        }
        Ok(RgbaImage::from_pixel(size.width, size.height, Rgba([0, 128, 0, 255])))
    }
}

fn config(dir: &Path) -> Config {
    Config {
        assets_dir: dir.to_path_buf(),
        size: RasterSize::FRUIT,
    }
}

fn run_capture(config: &Config, rasterizer: &Flat) -> (Result<svg_batch_rasterize::Summary, Error>, String) {
    let mut out = Vec::new();
    let result = run(config, rasterizer, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn one_bad_file_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("apple.svg"), "<svg/>").unwrap();
    fs::write(dir.path().join("banana.svg"), "<svg/>").unwrap();
    fs::write(dir.path().join("broken.svg"), "broken").unwrap();
    fs::write(dir.path().join("cherry.svg"), "<svg/>").unwrap();

    let flat = Flat::default();
    let (summary, text) = run_capture(&config(dir.path()), &flat);
    let summary = summary.unwrap();

    assert_eq!(flat.calls.get(), 4);
    assert_eq!((summary.converted, summary.total), (3, 4));
    assert!(!summary.is_success());
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].source.ends_with("broken.svg"));

    assert!(dir.path().join("cherry.png").exists());
    assert!(!dir.path().join("broken.png").exists());
    assert!(text.contains("Found 4 SVG files to convert:"));
    assert!(text.contains("✓ Converted apple.svg -> apple.png"));
    assert!(text.contains("✗ Failed to convert broken.svg: malformed SVG"));
    assert!(text.contains("3/4 files converted successfully"));
}

#[test]
fn all_good_is_success() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("kiwi.svg"), "<svg/>").unwrap();

    let (summary, text) = run_capture(&config(dir.path()), &Flat::default());
    let summary = summary.unwrap();
    assert!(summary.is_success());
    assert_eq!(summary.exit_code(), 0);
    assert!(text.contains("All SVG files have been successfully converted to PNG!"));

    let png = image::open(dir.path().join("kiwi.png")).unwrap();
    assert_eq!((png.width(), png.height()), (200, 200));
}

#[test]
fn missing_dir_converts_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let flat = Flat::default();
    let (result, text) = run_capture(&config(&dir.path().join("fruits")), &flat);
    assert!(matches!(result, Err(Error::MissingAssetsDir(_))));
    assert_eq!(flat.calls.get(), 0);
    assert!(text.is_empty());
}

#[test]
fn no_svgs_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.txt"), "fruit").unwrap();

    let flat = Flat::default();
    let (result, _) = run_capture(&config(dir.path()), &flat);
    assert!(matches!(result, Err(Error::NoSvgFiles(_))));
    assert_eq!(flat.calls.get(), 0);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

fn convert_all_capture(
    check: impl FnOnce() -> Result<Box<dyn Rasterizer>, Error>,
    config: &Config,
) -> (u8, String) {
    let mut out = Vec::new();
    let code = convert_all(check, config, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

fn pngs_in(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter(|e| e.as_ref().unwrap().path().extension().map_or(false, |x| x == "png"))
        .count()
}

#[test]
fn failed_dependency_check_stops_before_scanning() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("apple.svg"), "<svg/>").unwrap();

    let (code, text) = convert_all_capture(|| Err(Error::BackendUnavailable), &config(dir.path()));
    assert_eq!(code, 1);
    assert!(text.contains("Please install it manually"));
    assert!(text.contains(REMEDIATION));
    assert!(!text.contains("Found"));
    assert_eq!(pngs_in(dir.path()), 0);
}

#[test]
fn missing_dir_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let flat = Flat::default();
    let backend = flat.clone();

    let (code, text) = convert_all_capture(
        move || Ok(Box::new(backend) as Box<dyn Rasterizer>),
        &config(&dir.path().join("fruits")),
    );
    assert_eq!(code, 1);
    assert!(text.contains("Using flat rasterizer"));
    assert!(text.contains("Assets directory not found"));
    assert_eq!(flat.calls.get(), 0);
}

#[test]
fn no_svgs_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let (code, text) = convert_all_capture(
        || Ok(Box::new(Flat::default()) as Box<dyn Rasterizer>),
        &config(dir.path()),
    );
    assert_eq!(code, 1);
    assert!(text.contains("No SVG files found"));
}

#[test]
fn exit_code_follows_the_tally() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("apple.svg"), "<svg/>").unwrap();
    fs::write(dir.path().join("pear.svg"), "<svg/>").unwrap();

    let flat = Flat::default();
    let backend = flat.clone();
    let (code, text) = convert_all_capture(move || Ok(Box::new(backend) as Box<dyn Rasterizer>), &config(dir.path()));
    assert_eq!(code, 0);
    assert_eq!(flat.calls.get(), 2);
    assert!(text.contains("2/2 files converted successfully"));
    assert_eq!(pngs_in(dir.path()), 2);

    fs::write(dir.path().join("broken.svg"), "broken").unwrap();
    let (code, text) = convert_all_capture(
        || Ok(Box::new(Flat::default()) as Box<dyn Rasterizer>),
        &config(dir.path()),
    );
    assert_eq!(code, 1);
    assert!(text.contains("2/3 files converted successfully"));
}
