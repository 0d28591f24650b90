use anyhow::{Result, bail};
use std::path::PathBuf;

/// Bundled demo image sets: directory name and frame count.
pub const DEMOS: [(&str, usize); 11] = [
    ("carmel", 18),
    ("diamondhead", 23),
    ("example", 2),
    ("fishbowl", 13),
    ("goldengate", 6),
    ("halfdome", 14),
    ("hotel", 8),
    ("office", 4),
    ("rio", 56),
    ("shanghai", 30),
    ("yard", 9),
];

/// Build the file list for a demo set: `./demos/<name>/<name>-NN.png`
/// with the frame index zero-padded to two digits.
pub fn image_files(index: usize) -> Result<Vec<PathBuf>> {
    let Some((name, frames)) = DEMOS.get(index) else {
        bail!("No demo set {index}, valid indices are 0..={}", DEMOS.len() - 1);
    };

    Ok((0..*frames)
        .map(|i| PathBuf::from(format!("./demos/{name}/{name}-{i:02}.png")))
        .collect())
}
