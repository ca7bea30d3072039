use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const SVG_SUFFIX: &str = ".svg";

/// List the `*.svg` entries directly inside `dir`, sorted by name.
pub fn scan_assets(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    if !dir.is_dir() {
        return Err(Error::MissingAssetsDir(dir.to_path_buf()));
    }

    let scan_err = |source| Error::ScanDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let path = entry.map_err(scan_err)?.path();
        if is_svg(&path) {
            files.push(path);
        } else {
            log::trace!("skipping {}", path.display());
        }
    }

    if files.is_empty() {
        return Err(Error::NoSvgFiles(dir.to_path_buf()));
    }
    files.sort();
    log::debug!("found {} svg files in {}", files.len(), dir.display());
    Ok(files)
}

/// Same as a `*.svg` glob: dotfiles count, so a bare `.svg` matches.
fn is_svg(path: &Path) -> bool {
    path.file_name()
        .map_or(false, |name| name.as_encoded_bytes().ends_with(SVG_SUFFIX.as_bytes()))
}
