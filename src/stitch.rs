use anyhow::Result;
use opencv::core::{Mat, Vector};
use opencv::prelude::*;
use opencv::stitching::{Stitcher, Stitcher_Mode, Stitcher_Status};

use crate::report;

/// Outcome of a composition attempt. Produced once per run.
pub enum PanoramaResult {
    /// The composed panorama.
    Composed(Mat),
    /// The engine gave up, with a human-readable reason.
    Failed(&'static str),
}

/// Compose the input sequence into a panorama with a single stitcher
/// call. No retry: a failure status is final. The caller must only
/// invoke this with at least two images.
pub fn compose(images: Vec<Mat>, verbose: bool) -> Result<PanoramaResult> {
    report::progress("Creating panorama...");
    if verbose {
        println!("Stitching {} images", images.len());
    }

    let sequence: Vector<Mat> = Vector::from_iter(images);

    let mut stitcher = Stitcher::create(Stitcher_Mode::PANORAMA)?;
    let mut panorama = Mat::default();
    let status = stitcher.stitch(&sequence, &mut panorama)?;

    Ok(match status {
        Stitcher_Status::OK => PanoramaResult::Composed(panorama),
        Stitcher_Status::ERR_NEED_MORE_IMGS => {
            PanoramaResult::Failed("the images do not overlap enough")
        }
        Stitcher_Status::ERR_HOMOGRAPHY_EST_FAIL => {
            PanoramaResult::Failed("no valid alignment could be estimated")
        }
        Stitcher_Status::ERR_CAMERA_PARAMS_ADJUST_FAIL => {
            PanoramaResult::Failed("camera parameter adjustment failed")
        }
    })
}
