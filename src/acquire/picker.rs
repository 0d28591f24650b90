use anyhow::Result;
use opencv::core::Mat;
use rfd::FileDialog;

use super::files;

/// Ask the user to select the input images with the native file
/// dialog. A cancelled dialog yields an empty sequence, which the
/// caller reports as insufficient input.
pub fn pick_and_load(verbose: bool) -> Result<Vec<Mat>> {
    let picked = FileDialog::new()
        .set_title("Select images to create panorama of")
        .set_directory(".")
        .pick_files()
        .unwrap_or_default();

    files::load(&picked, verbose)
}
