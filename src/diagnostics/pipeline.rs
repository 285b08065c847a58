use crate::detector::{MserParams, SelectedRegion};
use crate::diagnostics::{DiversityStage, ScoringStage, TimingBreakdown, TreeStage};
use crate::grid::Polarity;
use serde::{Deserialize, Serialize};

/// Result produced by [`MserDetector::detect_with_diagnostics`](crate::MserDetector).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MserReport {
    pub regions: Vec<SelectedRegion>,
    pub trace: PipelineTrace,
}

/// End-to-end trace of one detector run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub params: MserParams,
    pub timings: TimingBreakdown,
    pub tree: TreeStage,
    pub scoring: ScoringStage,
    pub diversity: DiversityStage,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub shape: Vec<usize>,
    pub elements: usize,
    pub neighbors: usize,
    pub polarity: Polarity,
}

impl PipelineTrace {
    /// One-line summary for logs and demo output.
    pub fn summary(&self) -> String {
        format!(
            "shape={:?} polarity={} nodes={} minima={} candidates={} kept={} total_ms={:.3}",
            self.input.shape,
            self.input.polarity.label(),
            self.tree.nodes,
            self.scoring.local_minima,
            self.scoring.candidates,
            self.diversity.kept,
            self.timings.total_ms
        )
    }
}
