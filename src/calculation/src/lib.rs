//! Reference-frame kinematics for fixed-wing trajectory segments.
//!
//! This library turns the integrated state of a flight segment, sampled at
//! discrete time nodes, into consistent frame quantities for an outer
//! trajectory solver:
//! - Direction-cosine matrices between inertial, body and wind frames
//! - Angle of attack and sideslip from inertial velocity
//! - Total inertial force from lift, drag, thrust and weight
//! - Horizontal position and acceleration via integration/differentiation operators
//! - Latitude/longitude ground track over a non-rotating planet
//! - Continuity of position, time and location across chained segments
//!
//! # Usage
//!
//! Allocate a [`Conditions`] record, wrap it in a [`State`] with the segment's
//! [`Numerics`] operators, then call [`segment::initialize`] once,
//! [`segment::iterate`] on every solver pass and [`segment::finalize`] once
//! after convergence. Stages write into the existing
//! buffers and never validate their inputs: non-finite values from
//! singular geometry are passed through for the solver to reject.

#![warn(missing_docs)]
#![allow(clippy::needless_range_loop)]

pub mod conditions;
pub mod config;
pub mod constants;
pub mod error;
pub mod forces;
pub mod geometry;
pub mod initialize;
pub mod kinematics;
pub mod numerics;
pub mod orientation;
pub mod planet;
pub mod segment;

// Re-export key types and functions for easy use
pub use conditions::{Conditions, State};
pub use config::{Coordinates, SegmentConfig};
pub use constants::Planet;
pub use error::FramesError;
pub use forces::update_forces;
pub use initialize::{initialize_inertial_position, initialize_planet_position, initialize_time};
pub use kinematics::{integrate_inertial_horizontal_position, update_acceleration};
pub use numerics::Numerics;
pub use orientation::update_orientations;
pub use planet::update_planet_position;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
