//! Physical constants and planet parameters for frame calculations.
//!
//! Angles are carried in radians everywhere except the planet-relative
//! latitude/longitude series, which are stored in degrees.

use std::collections::HashMap;
use std::f64::consts;

use serde::{Deserialize, Serialize};

use crate::geometry::RotationAxis;

/// Radians → degrees.
pub const RAD_TO_DEG: f64 = 180.0 / consts::PI;

/// Axis order used to build every direction-cosine matrix: yaw, pitch, roll.
pub const ROTATION_SEQUENCE: [RotationAxis; 3] = [RotationAxis::Z, RotationAxis::Y, RotationAxis::X];

/// Planet features needed by the planet-position updater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Display name
    #[serde(default = "default_planet_name")]
    pub name: String,

    /// Mean radius (m)
    /// Earth: 6 371 000 m
    pub mean_radius: f64,
}

fn default_planet_name() -> String {
    "Earth".to_string()
}

impl Planet {
    /// Earth with its mean radius.
    pub fn earth() -> Self {
        Self {
            name: "Earth".to_string(),
            mean_radius: 6_371_000.0,
        }
    }

    /// Mars with its mean radius.
    pub fn mars() -> Self {
        Self {
            name: "Mars".to_string(),
            mean_radius: 3_389_500.0,
        }
    }

    /// Create a custom planet.
    pub fn custom(name: impl Into<String>, mean_radius: f64) -> Self {
        Self {
            name: name.into(),
            mean_radius,
        }
    }

    /// Get a summary of the planet as a hash map for reporting.
    pub fn summary(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("planet".to_string(), self.name.clone());
        map.insert("mean radius (m)".to_string(), format!("{:.1}", self.mean_radius));
        map
    }
}

impl Default for Planet {
    fn default() -> Self {
        Self::earth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rad_to_deg() {
        assert_relative_eq!(consts::FRAC_PI_2 * RAD_TO_DEG, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_planet_presets() {
        assert_eq!(Planet::default(), Planet::earth());
        assert!(Planet::mars().mean_radius < Planet::earth().mean_radius);

        let summary = Planet::earth().summary();
        assert_eq!(summary["planet"], "Earth");
        assert_eq!(summary["mean radius (m)"], "6371000.0");
    }
}
