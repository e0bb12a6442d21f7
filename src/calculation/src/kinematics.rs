//! Position and acceleration from the velocity series.
//!
//! Both are single matrix products against the segment's operators; their
//! accuracy is whatever the supplied operators give. Flat planet, planar
//! horizontal motion.

use ndarray::s;
use tracing::debug;

use crate::conditions::State;

/// Integrate horizontal velocity into horizontal position.
///
/// `x[:, 0..2] = I · v[:, 0..2] + x[0, 0..2]`. The vertical column is left to
/// whatever maintains altitude.
pub fn integrate_inertial_horizontal_position(state: &mut State) {
    let integrate = &state.numerics.integrate;
    let inertial = &mut state.conditions.frames.inertial;

    let x0 = inertial.position_vector.slice(s![0, 0..2]).to_owned();
    let vx = inertial.velocity_vector.slice(s![.., 0..2]);

    let x = integrate.dot(&vx) + &x0;

    inertial.position_vector.slice_mut(s![.., 0..2]).assign(&x);
    debug!(nodes = x.nrows(), "integrated horizontal position");
}

/// Differentiate the full velocity series into acceleration: `a = D · v`.
pub fn update_acceleration(state: &mut State) {
    let differentiate = &state.numerics.differentiate;
    let inertial = &mut state.conditions.frames.inertial;

    let acc = differentiate.dot(&inertial.velocity_vector);

    inertial.acceleration_vector.assign(&acc);
    debug!(nodes = acc.nrows(), "updated acceleration");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::Conditions;
    use crate::numerics::Numerics;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1, Array2};

    fn state_on(time: Array1<f64>) -> State {
        let n = time.len();
        let numerics = Numerics::trapezoidal(time.view());
        let mut conditions = Conditions::new(n);
        conditions.frames.inertial.time = time;
        State::new(conditions, numerics, None).unwrap()
    }

    #[test]
    fn test_constant_velocity_position() {
        let time = array![0.0, 0.4, 1.0, 2.2, 3.0];
        let mut state = state_on(time.clone());
        let inertial = &mut state.conditions.frames.inertial;
        inertial.velocity_vector = Array2::from_shape_fn((5, 3), |(_, j)| [30.0, -4.0, 2.0][j]);
        inertial.position_vector.row_mut(0).assign(&array![100.0, 50.0, -1000.0]);
        inertial.position_vector.column_mut(2).fill(-1000.0);

        integrate_inertial_horizontal_position(&mut state);

        let r = &state.conditions.frames.inertial.position_vector;
        for i in 0..5 {
            assert_relative_eq!(r[[i, 0]], 100.0 + 30.0 * time[i], epsilon = 1e-10);
            assert_relative_eq!(r[[i, 1]], 50.0 - 4.0 * time[i], epsilon = 1e-10);
            assert_eq!(r[[i, 2]], -1000.0);
        }
    }

    #[test]
    fn test_linear_velocity_acceleration() {
        let time = array![0.0, 0.5, 1.5, 3.0];
        let mut state = state_on(time.clone());
        state.conditions.frames.inertial.velocity_vector =
            Array2::from_shape_fn((4, 3), |(i, j)| match j {
                0 => 2.0 * time[i],
                1 => -time[i],
                _ => 0.5 * time[i] + 1.0,
            });

        update_acceleration(&mut state);

        let a = &state.conditions.frames.inertial.acceleration_vector;
        for i in 0..4 {
            assert_relative_eq!(a[[i, 0]], 2.0, epsilon = 1e-12);
            assert_relative_eq!(a[[i, 1]], -1.0, epsilon = 1e-12);
            assert_relative_eq!(a[[i, 2]], 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_position_buffer_identity() {
        let mut state = state_on(array![0.0, 1.0]);
        let ptr = state.conditions.frames.inertial.position_vector.as_ptr();
        integrate_inertial_horizontal_position(&mut state);
        update_acceleration(&mut state);
        assert_eq!(state.conditions.frames.inertial.position_vector.as_ptr(), ptr);
    }
}
