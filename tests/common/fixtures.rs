use image::{ImageBuffer, Rgb};
use tempfile::NamedTempFile;

/// Creates a 64x64 single-color PNG and returns the temp file.
/// The file is cleaned up when dropped.
pub fn solid_png(rgb: [u8; 3]) -> NamedTempFile {
    let img = ImageBuffer::from_fn(64, 64, |_, _| Rgb(rgb));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a .png file whose contents are not a valid image.
pub fn corrupt_png() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(file.path(), b"definitely not a png").expect("Failed to write temp file");
    file
}
