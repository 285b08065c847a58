//! JSON configuration files for the demo binaries.
//!
//! Each demo reads one file through its module's `load_config`; detector
//! parameters are embedded as an [`MserParams`](crate::MserParams) object and
//! fall back to defaults field by field.

pub mod mser;
pub mod volume;
