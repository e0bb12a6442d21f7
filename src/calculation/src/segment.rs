//! Stage ordering for one segment.
//!
//! The outer solver calls [`initialize`] once when a segment starts,
//! [`iterate`] on every solver iteration after it has filled velocity,
//! attitude, freestream and the per-frame force vectors, and [`finalize`]
//! once after the solver has converged.

use tracing::instrument;

use crate::conditions::State;
use crate::config::SegmentConfig;
use crate::forces::update_forces;
use crate::initialize::{initialize_inertial_position, initialize_planet_position, initialize_time};
use crate::kinematics::{integrate_inertial_horizontal_position, update_acceleration};
use crate::orientation::update_orientations;
use crate::planet::update_planet_position;

/// Segment-start continuity: position, time, then planet location.
#[instrument(level = "debug", skip_all, fields(chained = state.initials.is_some()))]
pub fn initialize(segment: &SegmentConfig, state: &mut State) {
    initialize_inertial_position(state);
    initialize_time(segment, state);
    initialize_planet_position(segment, state);
}

/// Per-iteration frame kinematics.
///
/// Orientation first (forces need its transforms), then forces, then the
/// integrated and differentiated series. Every output is rebuilt from the
/// inputs, so repeated calls give the same result.
#[instrument(level = "debug", skip_all, fields(nodes = state.conditions.node_count()))]
pub fn iterate(state: &mut State) {
    update_orientations(&mut state.conditions);
    update_forces(&mut state.conditions);
    integrate_inertial_horizontal_position(state);
    update_acceleration(state);
}

/// Post-convergence ground track.
///
/// Latitude and longitude accumulate onto the values set by [`initialize`],
/// so this runs exactly once per segment.
#[instrument(level = "debug", skip_all, fields(nodes = state.conditions.node_count()))]
pub fn finalize(segment: &SegmentConfig, state: &mut State) {
    update_planet_position(segment, state);
}
