pub mod acquire;
pub mod present;
pub mod report;
pub mod stitch;

pub use acquire::{MIN_IMAGES, Source};
pub use stitch::PanoramaResult;
