//! Summation of lift, drag, thrust and weight in the inertial frame.

use tracing::debug;

use crate::conditions::Conditions;
use crate::geometry::orientation_apply;

/// Rotate lift and drag (wind frame) and thrust (body frame) into the
/// inertial frame and add gravity.
///
/// Requires the transforms written by
/// [`update_orientations`](crate::orientation::update_orientations). Writes
/// only `frames.inertial.total_force_vector`.
pub fn update_forces(conditions: &mut Conditions) {
    let frames = &conditions.frames;
    let t_body2inertial = frames.body.transform_to_inertial.view();
    let t_wind2inertial = frames.wind.transform_to_inertial.view();

    let lift = orientation_apply(t_wind2inertial, frames.wind.lift_force_vector.view());
    let drag = orientation_apply(t_wind2inertial, frames.wind.drag_force_vector.view());
    let thrust = orientation_apply(t_body2inertial, frames.body.thrust_force_vector.view());
    let weight = &frames.inertial.gravity_force_vector;

    let total = lift + drag + thrust + weight;

    conditions.frames.inertial.total_force_vector.assign(&total);
    debug!(nodes = total.nrows(), "updated total force");
}
