use anyhow::{Context, Result, bail};
use opencv::core::{Mat, Vector};
use opencv::highgui;
use opencv::imgcodecs;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::Path;

use crate::report;
use crate::stitch::PanoramaResult;

const WINDOW: &str = "Panorama";

/// Show the outcome of the run. A composed panorama gets the preview
/// window and the save flow; a failure is raised for the caller to
/// report, with nothing displayed and nothing saved.
pub fn present(result: PanoramaResult) -> Result<()> {
    match result {
        PanoramaResult::Composed(panorama) => show(&panorama),
        PanoramaResult::Failed(reason) => bail!("Panorama could not be created: {reason}"),
    }
}

fn show(panorama: &Mat) -> Result<()> {
    report::notification("Panorama successfully created!");

    highgui::imshow(WINDOW, panorama)?;
    // Blocks until any key is pressed in the preview window
    highgui::wait_key(0)?;

    prompt_save(panorama)?;
    highgui::destroy_all_windows()?;
    Ok(())
}

/// Offer to persist the panorama. Declining, or cancelling the
/// destination dialog, means "do not save" without further output.
fn prompt_save(panorama: &Mat) -> Result<()> {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Save image?")
        .set_description("Would you like to save the panorama image?")
        .set_buttons(MessageButtons::YesNo)
        .show();

    if !matches!(answer, MessageDialogResult::Yes) {
        return Ok(());
    }

    let Some(destination) = FileDialog::new()
        .set_title("Choose save location")
        .set_directory(".")
        .save_file()
    else {
        return Ok(());
    };

    save(panorama, &destination)
}

fn save(panorama: &Mat, destination: &Path) -> Result<()> {
    let path_str = destination
        .to_str()
        .context("save path is not valid UTF-8")?;

    if !imgcodecs::imwrite(path_str, panorama, &Vector::<i32>::new())? {
        bail!("Could not write panorama to {}", destination.display());
    }

    report::notification(&format!("Panorama saved at: {}", destination.display()));
    Ok(())
}
