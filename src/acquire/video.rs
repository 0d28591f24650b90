use anyhow::{Context, Result, bail};
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};
use std::path::Path;

/// Frame-count stride between two sampled frames, derived from the
/// sampling frequency. Construction validates the frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleStride(usize);

impl SampleStride {
    /// Derive the stride as `floor(total_frames * frequency)`.
    /// The frequency must lie in the open interval (0, 1) and the
    /// resulting stride must be at least one frame; a zero stride
    /// would degenerate into reading every frame of the clip.
    pub fn new(total_frames: usize, frequency: f64) -> Result<Self> {
        if !(frequency > 0.0 && frequency < 1.0) {
            bail!("Sampling frequency must be between 0 and 1 exclusive, got {frequency}");
        }

        let stride = (total_frames as f64 * frequency) as usize;
        if stride == 0 {
            bail!("Sampling frequency {frequency} is too low for a {total_frames}-frame video");
        }

        Ok(Self(stride))
    }

    /// Number of frames skipped between two samples.
    pub fn frames(self) -> usize {
        self.0
    }

    /// Frame positions the sampler will visit, in read order.
    pub fn positions(self, total_frames: usize) -> impl Iterator<Item = usize> {
        (0..total_frames).step_by(self.0)
    }
}

/// Sample frames from a video file at the given frequency: read the
/// frame at the current position, seek forward by the stride, repeat.
/// A failed or empty read ends the walk without error.
pub fn sample(path: &Path, frequency: f64, verbose: bool) -> Result<Vec<Mat>> {
    let path_str = path.to_str().context("video path is not valid UTF-8")?;

    let mut feed = VideoCapture::from_file(path_str, videoio::CAP_ANY)
        .with_context(|| format!("failed to open video {}", path.display()))?;
    if !feed.is_opened()? {
        bail!("Could not open video {}", path.display());
    }

    let result = sample_feed(&mut feed, frequency, verbose);
    feed.release()?;
    result
}

fn sample_feed(feed: &mut VideoCapture, frequency: f64, verbose: bool) -> Result<Vec<Mat>> {
    let total_frames = feed.get(videoio::CAP_PROP_FRAME_COUNT)? as usize;
    let stride = SampleStride::new(total_frames, frequency)?;

    if verbose {
        println!("Sampling every {} of {} frames", stride.frames(), total_frames);
    }

    let mut images = Vec::new();
    let mut position = feed.get(videoio::CAP_PROP_POS_FRAMES)? as usize;

    loop {
        let mut frame = Mat::default();
        if !feed.read(&mut frame)? || frame.empty() {
            break;
        }

        images.push(frame);
        feed.set(
            videoio::CAP_PROP_POS_FRAMES,
            (position + stride.frames()) as f64,
        )?;
        position = feed.get(videoio::CAP_PROP_POS_FRAMES)? as usize;
    }

    Ok(images)
}
