//! Body and wind frame orientation from inertial velocity.
//!
//! The vehicle carries three frames: inertial, body and wind. Body attitude is
//! given as (roll, pitch, yaw); the wind frame is recovered from the direction
//! of the velocity vector seen in body axes.
//!
//! # Domain
//!
//! Angle of attack is `atan(Vz / Vx)` on body-axis velocity, not `atan2`, so it
//! is only meaningful for forward flight (`Vx > 0`). Reverse flight folds back
//! into (-π/2, π/2) and `Vx = 0` produces ±π/2 or NaN. These values are passed
//! on unchanged.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::conditions::Conditions;
use crate::constants::ROTATION_SEQUENCE;
use crate::geometry::{angles_to_dcms, orientation_apply, orientation_product, orientation_transpose};

/// Update aerodynamic angles and the body/wind → inertial transforms.
///
/// Reads `frames.inertial.velocity_vector` and `frames.body.inertial_rotations`.
/// Writes `aerodynamics.{angle_of_attack, side_slip_angle, roll_angle}`,
/// `frames.body.transform_to_inertial`, `frames.wind.body_rotations` and
/// `frames.wind.transform_to_inertial`.
pub fn update_orientations(conditions: &mut Conditions) {
    let v_inertial = &conditions.frames.inertial.velocity_vector;
    let body_rotations = &conditions.frames.body.inertial_rotations;
    let n = v_inertial.nrows();

    // body frame
    let t_inertial2body = angles_to_dcms(body_rotations.view(), ROTATION_SEQUENCE);
    let t_body2inertial = orientation_transpose(t_inertial2body.view());
    let v_body = orientation_apply(t_inertial2body.view(), v_inertial.view());

    // velocity projected into the body x-z plane
    let mut alpha = Array1::zeros(n);
    let mut beta = Array1::zeros(n);
    for (k, v) in v_body.outer_iter().enumerate() {
        let (vx, vy, vz) = (v[0], v[1], v[2]);
        let v_stability = (vx * vx + vz * vz).sqrt();
        alpha[k] = (vz / vx).atan();
        beta[k] = (vy / v_stability).atan();
    }
    let roll = body_rotations.column(0).to_owned();

    // wind frame, rotated (0, alpha, beta) from body
    let mut wind_body_rotations = Array2::zeros((n, 3));
    wind_body_rotations.column_mut(1).assign(&alpha);
    wind_body_rotations.column_mut(2).assign(&beta);

    let t_wind2body = angles_to_dcms(wind_body_rotations.view(), ROTATION_SEQUENCE);
    let t_wind2inertial = orientation_product(t_wind2body.view(), t_body2inertial.view());

    let aero = &mut conditions.aerodynamics;
    aero.angle_of_attack.assign(&alpha);
    aero.side_slip_angle.assign(&beta);
    aero.roll_angle.assign(&roll);

    let frames = &mut conditions.frames;
    frames.body.transform_to_inertial.assign(&t_body2inertial);
    frames.wind.body_rotations.assign(&wind_body_rotations);
    frames.wind.transform_to_inertial.assign(&t_wind2inertial);

    debug!(nodes = n, "updated orientations");
}
