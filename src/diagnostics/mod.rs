//! Diagnostics data model returned by the detector and written by the demos.
//!
//! `MserReport` bundles the selected regions with a `PipelineTrace` that
//! records the input, the parameters in effect, per-stage counts and timings.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{InputDescriptor, MserReport, PipelineTrace};
pub use stages::{DiversityStage, ScoringStage, TreeStage};
pub use timing::{StageTiming, TimingBreakdown};
