//! Segment-start continuity: position, time and planet location.
//!
//! These run once when a segment starts. When the state carries `initials`
//! (the final conditions of the previous segment) the current series are
//! offset so their first node lines up with the prior segment's last node.

use tracing::{debug, trace};

use crate::conditions::State;
use crate::config::{Coordinates, SegmentConfig};

/// Shift the whole position series so node 0 sits at the prior segment's
/// final position. No-op without initials.
pub fn initialize_inertial_position(state: &mut State) {
    let Some(prior) = &state.initials else {
        return;
    };

    let r_prior = &prior.frames.inertial.position_vector;
    let r_current = &mut state.conditions.frames.inertial.position_vector;

    let offset = &r_prior.row(r_prior.nrows() - 1) - &r_current.row(0);
    trace!(?offset, "position offset from previous segment");
    *r_current += &offset;
}

/// Shift the time series onto the prior segment's clock and carry the
/// mission start time.
///
/// The start time comes from the prior segment when chained, otherwise from
/// `segment.start_time`; with neither it is left untouched.
pub fn initialize_time(segment: &SegmentConfig, state: &mut State) {
    let planet = &mut state.conditions.frames.planet;

    match &state.initials {
        Some(prior) => {
            let t_prior = &prior.frames.inertial.time;
            let t_current = &mut state.conditions.frames.inertial.time;

            let offset = t_prior[t_prior.len() - 1] - t_current[0];
            trace!(offset, "time offset from previous segment");
            *t_current += offset;

            planet.start_time = prior.frames.planet.start_time;
        }
        None => {
            if let Some(start_time) = segment.start_time {
                planet.start_time = Some(start_time);
            }
        }
    }
}

/// Seed latitude/longitude with the segment's starting location.
///
/// Chained segments start where the prior one ended; otherwise the configured
/// location is used, falling back to (0, 0). Always writes.
pub fn initialize_planet_position(segment: &SegmentConfig, state: &mut State) {
    let start = match &state.initials {
        Some(prior) => {
            let planet = &prior.frames.planet;
            Coordinates {
                latitude: planet.latitude[planet.latitude.len() - 1],
                longitude: planet.longitude[planet.longitude.len() - 1],
            }
        }
        None => segment.location.unwrap_or_default(),
    };

    debug!(
        latitude = start.latitude,
        longitude = start.longitude,
        "initial planet position"
    );

    let planet = &mut state.conditions.frames.planet;
    planet.latitude.fill(start.latitude);
    planet.longitude.fill(start.longitude);
}
