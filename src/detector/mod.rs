//! MSER detector facade.
//!
//! Overview
//! - Validates [`MserParams`] before touching the grid.
//! - Builds the extremal region forest for the configured polarity
//!   ([`crate::tree`]).
//! - Scores every node over a `±delta` level window and keeps strict local
//!   minima within the size window ([`crate::stability`]).
//! - Suppresses nested near-duplicates ([`crate::diversity`]).
//! - Returns [`SelectedRegion`] handles; membership is rebuilt on demand by
//!   [`crate::fill`].
//!
//! Modules
//! - [`params`] – configuration and validation.
//! - `pipeline` – the [`MserDetector`] implementation.
//! - `region` – the region handle type.

pub mod params;
mod pipeline;
mod region;

pub use params::MserParams;
pub use pipeline::{detect, MserDetector};
pub use region::SelectedRegion;
