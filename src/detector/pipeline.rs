//! Detector pipeline running MSER detection end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use mser_detector::{fill, Connectivity, Grid, MserDetector, MserParams};
//!
//! # fn example(pixels: &[u8], w: usize, h: usize) -> Result<(), mser_detector::MserError> {
//! let grid = Grid::new(pixels, [w, h], Connectivity::eight())?;
//! let detector = MserDetector::new(MserParams::default());
//! for region in detector.detect(&grid)? {
//!     let members = fill(&grid, &region)?;
//!     println!("level={} size={}", region.level, members.len());
//! }
//! # Ok(())
//! # }
//! ```
use super::params::MserParams;
use super::region::SelectedRegion;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    DiversityStage, InputDescriptor, MserReport, PipelineTrace, ScoringStage, TimingBreakdown,
    TreeStage,
};
use crate::diversity::suppress;
use crate::error::MserError;
use crate::grid::{Grid, Intensity, Polarity};
use crate::stability::{score_tree, select_candidates};
use crate::tree::ErTree;
use log::{debug, warn};
use std::time::Instant;

/// MSER detector: tree build, stability scoring, diversity filtering.
#[derive(Clone, Debug, Default)]
pub struct MserDetector {
    params: MserParams,
}

impl MserDetector {
    pub fn new(params: MserParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MserParams {
        &self.params
    }

    /// Detect regions, most stable first.
    pub fn detect<T: Intensity, const D: usize>(
        &self,
        grid: &Grid<'_, T, D>,
    ) -> Result<Vec<SelectedRegion>, MserError> {
        Ok(self.detect_with_diagnostics(grid)?.regions)
    }

    /// Detect regions of both polarities; bright-on-dark regions come first.
    pub fn detect_both<T: Intensity, const D: usize>(
        &self,
        grid: &Grid<'_, T, D>,
    ) -> Result<Vec<SelectedRegion>, MserError> {
        let mut regions = Vec::new();
        for polarity in [Polarity::BrightOnDark, Polarity::DarkOnBright] {
            let detector = MserDetector::new(self.params.with_polarity(polarity));
            regions.extend(detector.detect(grid)?);
        }
        Ok(regions)
    }

    /// Build only the extremal region forest under the configured polarity.
    pub fn build_tree<T: Intensity, const D: usize>(
        &self,
        grid: &Grid<'_, T, D>,
    ) -> Result<ErTree, MserError> {
        self.params.validate()?;
        Ok(ErTree::build(grid, self.params.polarity))
    }

    /// Detect regions and return a report with per-stage counts and timings.
    pub fn detect_with_diagnostics<T: Intensity, const D: usize>(
        &self,
        grid: &Grid<'_, T, D>,
    ) -> Result<MserReport, MserError> {
        self.params.validate()?;
        let params = self.params;
        debug!(
            "MserDetector::detect start shape={:?} elements={} neighbors={} polarity={} delta={}",
            grid.shape(),
            grid.len(),
            grid.connectivity().len(),
            params.polarity.label(),
            params.delta
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let tree = timings.measure("tree", || ErTree::build(grid, params.polarity));
        let scores = timings.measure("scoring", || score_tree(&tree, params.delta));

        let filter = params.candidate_filter(grid.len());
        if filter.min_size > filter.max_size {
            warn!(
                "MserDetector::detect empty size window min={} max={}",
                filter.min_size, filter.max_size
            );
        }
        let selection = timings.measure("candidates", || {
            select_candidates(&tree, &scores, &filter)
        });
        let kept = timings.measure("diversity", || {
            suppress(&tree, selection.candidates.clone(), params.min_diversity)
        });

        let regions: Vec<SelectedRegion> = kept
            .iter()
            .map(|c| SelectedRegion::from_candidate(grid, &tree, c))
            .collect();
        timings.total_ms = elapsed_ms(total_start);

        let trace = PipelineTrace {
            input: InputDescriptor {
                shape: grid.shape().to_vec(),
                elements: grid.len(),
                neighbors: grid.connectivity().len(),
                polarity: params.polarity,
            },
            params,
            tree: TreeStage::from_tree(&tree),
            scoring: ScoringStage::from_selection(
                &selection,
                params.delta,
                filter.min_size,
                filter.max_size,
            ),
            diversity: DiversityStage {
                min_diversity: params.min_diversity,
                input: selection.candidates.len(),
                kept: regions.len(),
                suppressed: selection.candidates.len() - regions.len(),
            },
            timings,
        };
        debug!("MserDetector::detect done {}", trace.summary());
        Ok(MserReport { regions, trace })
    }
}

/// Run a detector with `params` on `grid`.
pub fn detect<T: Intensity, const D: usize>(
    grid: &Grid<'_, T, D>,
    params: MserParams,
) -> Result<Vec<SelectedRegion>, MserError> {
    MserDetector::new(params).detect(grid)
}
