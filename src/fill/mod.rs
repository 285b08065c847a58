//! On-demand reconstruction of region membership.
//!
//! Regions are returned as handles (seed element + level); the element set is
//! rebuilt here by flooding from the seed through every neighbor whose level
//! does not exceed the region level. Nothing is cached between calls.
//!
//! The flood is breadth-first (FIFO queue) over the grid's connectivity in
//! its fixed order, so the output order is deterministic: the seed first,
//! then elements by increasing graph distance.

use crate::detector::SelectedRegion;
use crate::error::MserError;
use crate::grid::{Grid, Intensity, Polarity};
use std::collections::VecDeque;

/// Flood the component of `{level <= level}` containing `seed`.
///
/// Returns an empty set when the seed itself is above `level`.
pub fn fill_from_seed<T: Intensity, const D: usize>(
    grid: &Grid<'_, T, D>,
    seed: usize,
    level: u32,
    polarity: Polarity,
) -> Result<Vec<usize>, MserError> {
    if !grid.contains(seed) {
        return Err(MserError::OutOfBounds {
            index: seed,
            len: grid.len(),
        });
    }
    if grid.level(seed, polarity) > level {
        return Ok(Vec::new());
    }

    let mut visited = VisitedSet::new(grid.len());
    let mut queue = VecDeque::new();
    let mut members = Vec::new();
    visited.insert(seed);
    queue.push_back(seed);
    while let Some(index) = queue.pop_front() {
        members.push(index);
        for n in grid.neighbors_of(index) {
            if grid.level(n, polarity) <= level && visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    Ok(members)
}

/// Membership of a detected region.
pub fn fill<T: Intensity, const D: usize>(
    grid: &Grid<'_, T, D>,
    region: &SelectedRegion,
) -> Result<Vec<usize>, MserError> {
    check_handle(grid, region)?;
    let members = fill_from_seed(grid, region.representative, region.level, region.polarity)?;
    if members.len() != region.size {
        return Err(MserError::handle(format!(
            "region of {} elements filled to {}; grid contents changed",
            region.size,
            members.len()
        )));
    }
    Ok(members)
}

/// Membership of several regions; runs in parallel with the `parallel` feature.
pub fn fill_all<T: Intensity, const D: usize>(
    grid: &Grid<'_, T, D>,
    regions: &[SelectedRegion],
) -> Result<Vec<Vec<usize>>, MserError> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        regions.par_iter().map(|r| fill(grid, r)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        regions.iter().map(|r| fill(grid, r)).collect()
    }
}

/// Per-element count of how many regions cover it.
pub fn membership_counts<T: Intensity, const D: usize>(
    grid: &Grid<'_, T, D>,
    regions: &[SelectedRegion],
) -> Result<Vec<u32>, MserError> {
    let mut counts = vec![0u32; grid.len()];
    for members in fill_all(grid, regions)? {
        for index in members {
            counts[index] += 1;
        }
    }
    Ok(counts)
}

fn check_handle<T: Intensity, const D: usize>(
    grid: &Grid<'_, T, D>,
    region: &SelectedRegion,
) -> Result<(), MserError> {
    if region.tag() != grid.tag() {
        return Err(MserError::handle("region was detected on a different grid"));
    }
    if !grid.contains(region.representative) {
        return Err(MserError::handle(format!(
            "representative {} outside grid of {} elements",
            region.representative,
            grid.len()
        )));
    }
    let seed_level = grid.level(region.representative, region.polarity);
    if seed_level != region.level {
        return Err(MserError::handle(format!(
            "representative level {seed_level} does not match region level {}",
            region.level
        )));
    }
    Ok(())
}

/// Bitmap over grid elements.
struct VisitedSet {
    words: Vec<u64>,
}

impl VisitedSet {
    fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
        }
    }

    /// Marks `index`; returns false if it was already marked.
    #[inline]
    fn insert(&mut self, index: usize) -> bool {
        let word = &mut self.words[index / 64];
        let bit = 1u64 << (index % 64);
        let fresh = *word & bit == 0;
        *word |= bit;
        fresh
    }
}

#[cfg(test)]
mod tests;
