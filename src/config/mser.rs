use crate::grid::Connectivity;
use crate::MserParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Neighborhood used for 2D images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanarConnectivity {
    Four,
    #[default]
    Eight,
}

impl PlanarConnectivity {
    pub fn build(self) -> Connectivity<2> {
        match self {
            PlanarConnectivity::Four => Connectivity::four(),
            PlanarConnectivity::Eight => Connectivity::eight(),
        }
    }
}

/// Which polarities the demo scans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarityMode {
    /// Only `params.polarity`.
    #[default]
    Configured,
    Both,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MserOutputConfig {
    pub report_json: Option<PathBuf>,
    /// Gray PNG where each pixel counts the regions covering it.
    pub coverage_image: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MserDemoConfig {
    pub input: PathBuf,
    /// Use the photometric negative of the input.
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub connectivity: PlanarConnectivity,
    #[serde(default)]
    pub polarities: PolarityMode,
    #[serde(default)]
    pub params: MserParams,
    #[serde(default)]
    pub output: MserOutputConfig,
}

pub fn load_config(path: &Path) -> Result<MserDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
