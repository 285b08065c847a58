#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod fill;
pub mod grid;
pub mod image;

// Stage modules – public for tools and tests that inspect intermediate state.
pub mod diversity;
pub mod stability;
pub mod tree;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + region handles.
pub use crate::detector::{detect, MserDetector, MserParams, SelectedRegion};
pub use crate::error::MserError;

// Input adapters.
pub use crate::grid::{Connectivity, Grid, GridTag, Intensity, Polarity};

// Membership reconstruction.
pub use crate::fill::{fill, fill_all, fill_from_seed, membership_counts};

// Diagnostics returned by the detector.
pub use crate::diagnostics::{MserReport, PipelineTrace};

pub use crate::tree::{ErNode, ErTree, NodeId};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use mser_detector::prelude::*;
///
/// # fn main() -> Result<(), MserError> {
/// let (w, h) = (64usize, 48usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let grid = Grid::from_image(&img, Connectivity::eight())?;
/// let report = MserDetector::new(MserParams::default()).detect_with_diagnostics(&grid)?;
/// println!("regions={} {}", report.regions.len(), report.trace.summary());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{
        fill, Connectivity, Grid, MserDetector, MserError, MserParams, Polarity, SelectedRegion,
    };
}
