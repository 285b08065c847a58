use crate::grid::Connectivity;
use crate::MserParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Neighborhood used for 3D volumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeConnectivity {
    #[default]
    Six,
    Eighteen,
    TwentySix,
}

impl VolumeConnectivity {
    pub fn build(self) -> Connectivity<3> {
        match self {
            VolumeConnectivity::Six => Connectivity::six(),
            VolumeConnectivity::Eighteen => Connectivity::eighteen(),
            VolumeConnectivity::TwentySix => Connectivity::twenty_six(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VolumeOutputConfig {
    pub report_json: Option<PathBuf>,
    /// Raw 8-bit volume of per-voxel region counts, same shape as the input.
    pub coverage_raw: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VolumeDemoConfig {
    /// Headerless 8-bit volume, axis 0 fastest. Absent: a synthetic volume.
    pub input: Option<PathBuf>,
    /// Extents `[w, h, d]`.
    pub shape: [usize; 3],
    #[serde(default)]
    pub connectivity: VolumeConnectivity,
    #[serde(default = "volume_params")]
    pub params: MserParams,
    #[serde(default)]
    pub output: VolumeOutputConfig,
}

/// Defaults tuned for smooth volumes.
pub fn volume_params() -> MserParams {
    MserParams {
        delta: 5,
        min_diversity: 0.4,
        max_variation: Some(0.6),
        ..MserParams::default()
    }
}

pub fn load_config(path: &Path) -> Result<VolumeDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
