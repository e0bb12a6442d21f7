//! Segment-level options read by the initializers and the planet updater.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::Planet;
use crate::error::FramesError;

/// Planet-relative coordinates (deg).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude (deg)
    pub latitude: f64,
    /// Longitude (deg)
    pub longitude: f64,
}

/// Options for one flight segment.
///
/// Every option is used only when the segment is not chained from a previous
/// one; chained segments take these values from the prior segment's final node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Mission start time (s)
    #[serde(default)]
    pub start_time: Option<f64>,

    /// Starting location on the planet
    #[serde(default)]
    pub location: Option<Coordinates>,

    /// Planet the segment flies over
    #[serde(default)]
    pub planet: Planet,
}

impl SegmentConfig {
    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, FramesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FramesError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| FramesError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
