pub mod camera;
pub mod demo;
pub mod files;
pub mod picker;
pub mod video;

use anyhow::Result;
use opencv::core::Mat;
use std::path::PathBuf;

/// Minimum number of source images the stitcher can work with.
pub const MIN_IMAGES: usize = 2;

/// The acquisition strategy chosen on the command line.
/// Exactly one is active per run.
#[derive(Debug, Clone)]
pub enum Source {
    /// Interactive capture from the default camera.
    Camera,
    /// Multi-select file picker dialog.
    Select,
    /// Explicit list of image files.
    Files(Vec<PathBuf>),
    /// Periodic frame samples from a video file.
    Video { path: PathBuf, frequency: f64 },
    /// One of the bundled demo image sets.
    Demo(usize),
}

/// Check that the gathered sequence is large enough to stitch.
pub fn enough(images: &[Mat]) -> bool {
    images.len() >= MIN_IMAGES
}

/// Produce the input sequence for the chosen strategy.
/// The order of the returned images is the stitching order.
pub fn acquire(source: Source, verbose: bool) -> Result<Vec<Mat>> {
    match source {
        Source::Camera => camera::capture(verbose),
        Source::Select => picker::pick_and_load(verbose),
        Source::Files(paths) => files::load(&paths, verbose),
        Source::Video { path, frequency } => video::sample(&path, frequency, verbose),
        Source::Demo(index) => files::load(&demo::image_files(index)?, verbose),
    }
}
