//! Error type shared by the grid adapter, the detector and region fill.

/// Reasons why detection or region reconstruction may fail.
///
/// Finding zero regions is not an error; it is reported as an empty result.
#[derive(Clone, Debug, PartialEq)]
pub enum MserError {
    /// Detector parameters or a connectivity descriptor are out of range.
    InvalidConfiguration { reason: String },
    /// The grid has no elements.
    EmptyGrid,
    /// A connectivity offset does not have the grid's dimensionality.
    DimensionMismatch { expected: usize, found: usize },
    /// The backing buffer length does not match the product of the shape.
    ShapeMismatch { expected: usize, found: usize },
    /// Linear index or coordinate outside the grid.
    OutOfBounds { index: usize, len: usize },
    /// A region handle does not belong to the grid it is used with.
    InvalidHandle { reason: String },
}

impl MserError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        MserError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn handle(reason: impl Into<String>) -> Self {
        MserError::InvalidHandle {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for MserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MserError::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            MserError::EmptyGrid => write!(f, "grid has no elements"),
            MserError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch (grid is {expected}-D, descriptor is {found}-D)"
            ),
            MserError::ShapeMismatch { expected, found } => write!(
                f,
                "buffer holds {found} elements but the shape needs {expected}"
            ),
            MserError::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds (len {len})")
            }
            MserError::InvalidHandle { reason } => write!(f, "invalid region handle: {reason}"),
        }
    }
}

impl std::error::Error for MserError {}
