//! Tests for the bundled demo dataset file lists.
//!
//! Tests cover:
//! - Zero-padded filename generation for the carmel set
//! - Frame counts for all eleven sets
//! - Rejection of out-of-range indices

use panostitch::acquire::demo::{DEMOS, image_files};

#[test]
fn carmel_set_generates_zero_padded_paths() {
    let files = image_files(0).unwrap();

    assert_eq!(files.len(), 18);
    assert_eq!(files[0].to_str().unwrap(), "./demos/carmel/carmel-00.png");
    assert_eq!(files[9].to_str().unwrap(), "./demos/carmel/carmel-09.png");
    assert_eq!(files[10].to_str().unwrap(), "./demos/carmel/carmel-10.png");
    assert_eq!(files[17].to_str().unwrap(), "./demos/carmel/carmel-17.png");
}

#[test]
fn every_set_generates_its_frame_count() {
    for (index, (name, frames)) in DEMOS.iter().enumerate() {
        let files = image_files(index).unwrap();

        assert_eq!(files.len(), *frames, "demo set {name}");

        let last = files.last().unwrap();
        let expected_tail = format!("{name}-{:02}.png", frames - 1);
        assert!(
            last.to_str().unwrap().ends_with(&expected_tail),
            "demo set {name} last file should end with {expected_tail}"
        );
    }
}

#[test]
fn out_of_range_index_is_rejected() {
    assert!(image_files(11).is_err());
    assert!(image_files(usize::MAX).is_err());
}
