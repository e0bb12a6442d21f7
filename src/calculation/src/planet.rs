//! Latitude/longitude over the planet surface.
//!
//! Valid for short segments only: the planet does not rotate under the
//! vehicle and the ground track is integrated from local rates.
//!
//! # Numerical limits
//!
//! The longitude rate divides by the cosine of the integrated latitude term,
//! so near ±90° it blows up to ±∞ or NaN. This is not guarded.

use ndarray::Array1;
use tracing::debug;

use crate::conditions::State;
use crate::config::SegmentConfig;
use crate::constants::RAD_TO_DEG;

/// Integrate latitude and longitude rates and add them onto the existing
/// latitude/longitude series.
///
/// Flight-path angle is `pitch - angle_of_attack`, so this must run after
/// [`update_orientations`](crate::orientation::update_orientations).
pub fn update_planet_position(segment: &SegmentConfig, state: &mut State) {
    let integrate = &state.numerics.integrate;
    let conditions = &mut state.conditions;

    let v = &conditions.freestream.velocity;
    let altitude = &conditions.freestream.altitude;
    let theta = conditions.frames.body.inertial_rotations.column(1);
    let psi = conditions.frames.body.inertial_rotations.column(2);
    let alpha = &conditions.aerodynamics.angle_of_attack;
    let re = segment.planet.mean_radius;

    let n = v.len();
    let mut lat_rate = Array1::zeros(n);
    let mut ground_rate = Array1::zeros(n);
    for k in 0..n {
        let gamma = theta[k] - alpha[k];
        let r = altitude[k] + re;
        let v_over_r = v[k] / r;
        lat_rate[k] = v_over_r * gamma.cos() * psi[k].cos();
        ground_rate[k] = v_over_r * gamma.cos() * psi[k].sin();
    }

    let lat = integrate.dot(&lat_rate) * RAD_TO_DEG;
    let lon_rate = ground_rate / lat.mapv(f64::cos);
    let lon = integrate.dot(&lon_rate) * RAD_TO_DEG;

    let planet = &mut conditions.frames.planet;
    planet.latitude += &lat;
    planet.longitude += &lon;

    debug!(
        nodes = n,
        latitude = ?planet.latitude.last(),
        longitude = ?planet.longitude.last(),
        "updated planet position"
    );
}
