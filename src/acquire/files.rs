use anyhow::{Context, Result};
use opencv::core::Mat;
use opencv::imgcodecs;
use opencv::prelude::*;
use std::path::{Path, PathBuf};

use crate::report;

/// Load a list of image files in order.
/// Files that cannot be read or decoded are skipped with a warning;
/// the surviving images keep their relative order.
pub fn load(paths: &[PathBuf], verbose: bool) -> Result<Vec<Mat>> {
    let mut images = Vec::with_capacity(paths.len());

    for path in paths {
        match read_image(path)? {
            Some(image) => {
                if verbose {
                    println!("Loaded {}", path.display());
                }
                images.push(image);
            }
            None => report::status(&format!("Skipping unreadable image: {}", path.display())),
        }
    }

    Ok(images)
}

fn read_image(path: &Path) -> Result<Option<Mat>> {
    // OpenCV only takes UTF-8 paths
    let Some(path_str) = path.to_str() else {
        return Ok(None);
    };

    let image = imgcodecs::imread(path_str, imgcodecs::IMREAD_COLOR)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(if image.empty() { None } else { Some(image) })
}
