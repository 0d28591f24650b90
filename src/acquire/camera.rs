use anyhow::{Result, bail};
use opencv::core::{Mat, Point, Scalar};
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};
use opencv::{highgui, imgproc};

use crate::report;

const KEY_RETURN: i32 = 13;
const KEY_ESCAPE: i32 = 27;

const WINDOW: &str = "Camera feed";
const INSTRUCTIONS: &str = "Press RETURN to capture frame or ESC to exit";

/// What a polled key press means to the capture loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Keep the current frame.
    Accept,
    /// Stop capturing.
    Finish,
}

/// Map a raw key code to a capture command. Unknown keys (and the -1
/// poll timeout) are ignored.
pub fn key_command(code: i32) -> Option<KeyCommand> {
    match code {
        KEY_RETURN => Some(KeyCommand::Accept),
        KEY_ESCAPE => Some(KeyCommand::Finish),
        _ => None,
    }
}

/// A source of preview frames with cooperative key polling.
/// The capture loop is generic over this so the accept/finish state
/// machine can be driven by a scripted feed in tests.
pub trait PreviewFeed {
    type Frame;

    /// Next frame, or None when the feed is exhausted.
    fn next_frame(&mut self) -> Result<Option<Self::Frame>>;

    /// Present the frame to the user. Must not modify `frame`.
    fn show(&mut self, frame: &Self::Frame) -> Result<()>;

    /// Poll for a pending key press without blocking for long.
    fn poll_key(&mut self) -> Result<Option<KeyCommand>>;
}

/// Run the interactive capture loop: show each frame, keep the ones
/// the user accepts, stop on finish or when the feed runs out.
/// Accepted frames are only ever appended.
pub fn run_loop<F: PreviewFeed>(feed: &mut F) -> Result<Vec<F::Frame>> {
    let mut accepted = Vec::new();

    loop {
        let Some(frame) = feed.next_frame()? else {
            break;
        };

        feed.show(&frame)?;

        match feed.poll_key()? {
            Some(KeyCommand::Accept) => {
                report::status("Adding frame...");
                accepted.push(frame);
            }
            Some(KeyCommand::Finish) => {
                report::finished("Finished taking images...");
                break;
            }
            None => {}
        }
    }

    Ok(accepted)
}

/// Preview feed backed by the default camera.
pub struct CameraFeed {
    feed: VideoCapture,
}

impl CameraFeed {
    pub fn open() -> Result<Self> {
        let feed = VideoCapture::new(0, videoio::CAP_ANY)?;
        if !feed.is_opened()? {
            bail!("Could not open camera");
        }
        Ok(Self { feed })
    }

    fn close(&mut self) -> Result<()> {
        self.feed.release()?;
        highgui::destroy_all_windows()?;
        Ok(())
    }
}

impl PreviewFeed for CameraFeed {
    type Frame = Mat;

    fn next_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.feed.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    fn show(&mut self, frame: &Mat) -> Result<()> {
        // Overlay the instructions on a display copy only; the frame
        // that may be accepted stays clean.
        let mut display = frame.try_clone()?;
        let origin = Point::new(20, display.rows() - 30);

        // Outline pass then fill pass, for legibility on any scene.
        draw_instructions(&mut display, origin, Scalar::new(0.0, 0.0, 0.0, 0.0), 3)?;
        draw_instructions(&mut display, origin, Scalar::new(255.0, 255.0, 255.0, 0.0), 1)?;

        highgui::imshow(WINDOW, &display)?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<KeyCommand>> {
        Ok(key_command(highgui::wait_key(1)?))
    }
}

fn draw_instructions(image: &mut Mat, origin: Point, color: Scalar, thickness: i32) -> Result<()> {
    imgproc::put_text(
        image,
        INSTRUCTIONS,
        origin,
        imgproc::FONT_HERSHEY_COMPLEX_SMALL,
        1.0,
        color,
        thickness,
        imgproc::LINE_8,
        false,
    )?;
    Ok(())
}

/// Interactive camera capture: the user accepts frames one at a time.
/// The camera handle and preview window are torn down on every exit
/// path, including errors inside the loop.
pub fn capture(verbose: bool) -> Result<Vec<Mat>> {
    if verbose {
        println!("Opening camera...");
    }

    let mut feed = CameraFeed::open()?;
    let result = run_loop(&mut feed);
    feed.close()?;
    result
}
