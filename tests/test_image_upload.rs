//! Tests for loading image files into the input sequence.
//!
//! Tests cover:
//! - Decodable files loading in source order
//! - Undecodable and missing files being skipped, order preserved
//! - The minimum-sequence gate checked before stitching

mod common;

use common::*;
use opencv::core::{Mat, Vec3b};
use opencv::prelude::*;
use panostitch::acquire::{self, files};
use std::path::PathBuf;

/// The blue-green-red value of the top-left pixel (imread decodes to BGR).
fn corner_bgr(image: &Mat) -> [u8; 3] {
    let px: &Vec3b = image.at_2d::<Vec3b>(0, 0).unwrap();
    [px[0], px[1], px[2]]
}

#[test]
fn files_load_in_source_order() -> anyhow::Result<()> {
    let red = solid_png([255, 0, 0]);
    let green = solid_png([0, 255, 0]);
    let blue = solid_png([0, 0, 255]);

    let paths = vec![
        red.path().to_path_buf(),
        green.path().to_path_buf(),
        blue.path().to_path_buf(),
    ];
    let images = files::load(&paths, false)?;

    assert_eq!(images.len(), 3);
    assert_eq!(corner_bgr(&images[0]), [0, 0, 255]);
    assert_eq!(corner_bgr(&images[1]), [0, 255, 0]);
    assert_eq!(corner_bgr(&images[2]), [255, 0, 0]);

    Ok(())
}

#[test]
fn undecodable_file_is_skipped_with_order_preserved() -> anyhow::Result<()> {
    let red = solid_png([255, 0, 0]);
    let broken = corrupt_png();
    let blue = solid_png([0, 0, 255]);

    let paths = vec![
        red.path().to_path_buf(),
        broken.path().to_path_buf(),
        blue.path().to_path_buf(),
    ];
    let images = files::load(&paths, false)?;

    assert_eq!(images.len(), 2);
    assert_eq!(corner_bgr(&images[0]), [0, 0, 255]);
    assert_eq!(corner_bgr(&images[1]), [255, 0, 0]);

    Ok(())
}

#[test]
fn missing_file_is_skipped() -> anyhow::Result<()> {
    let red = solid_png([255, 0, 0]);

    let paths = vec![
        red.path().to_path_buf(),
        PathBuf::from("/no/such/image.png"),
    ];
    let images = files::load(&paths, false)?;

    assert_eq!(images.len(), 1);

    Ok(())
}

#[test]
fn one_image_is_not_enough_to_stitch() {
    assert!(!acquire::enough(&[]));
    assert!(!acquire::enough(&[Mat::default()]));
    assert!(acquire::enough(&[Mat::default(), Mat::default()]));
}
