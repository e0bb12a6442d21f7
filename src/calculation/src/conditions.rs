//! Per-segment conditions record and solver state.
//!
//! The record is allocated once per segment with [`Conditions::new`] and then
//! filled in place by the stages. Fields are never rebound; every stage
//! writes through `assign`, `fill` or compound assignment so the buffers keep
//! their identity for the whole segment.

use ndarray::{Array1, Array2, Array3, Axis};

use crate::error::FramesError;
use crate::numerics::Numerics;

/// Inertial-frame series.
#[derive(Debug, Clone, PartialEq)]
pub struct Inertial {
    /// Position (m), N×3
    pub position_vector: Array2<f64>,
    /// Velocity (m/s), N×3
    pub velocity_vector: Array2<f64>,
    /// Acceleration (m/s²), N×3
    pub acceleration_vector: Array2<f64>,
    /// Gravity force (N), N×3
    pub gravity_force_vector: Array2<f64>,
    /// Sum of all forces (N), N×3
    pub total_force_vector: Array2<f64>,
    /// Time (s), N
    pub time: Array1<f64>,
}

/// Body-frame series.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Roll, pitch, yaw relative to inertial (rad), N×3
    pub inertial_rotations: Array2<f64>,
    /// Thrust force (N), N×3
    pub thrust_force_vector: Array2<f64>,
    /// Body → inertial DCM, N×3×3
    pub transform_to_inertial: Array3<f64>,
}

/// Wind-frame series.
#[derive(Debug, Clone, PartialEq)]
pub struct Wind {
    /// (0, alpha, beta) relative to body (rad), N×3
    pub body_rotations: Array2<f64>,
    /// Lift force (N), N×3
    pub lift_force_vector: Array2<f64>,
    /// Drag force (N), N×3
    pub drag_force_vector: Array2<f64>,
    /// Wind → inertial DCM, N×3×3
    pub transform_to_inertial: Array3<f64>,
}

/// Planet-relative location.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetLocation {
    /// Mission start time (s), carried across chained segments
    pub start_time: Option<f64>,
    /// Latitude (deg), N
    pub latitude: Array1<f64>,
    /// Longitude (deg), N
    pub longitude: Array1<f64>,
}

/// All reference frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Frames {
    /// Inertial frame
    pub inertial: Inertial,
    /// Body frame
    pub body: Body,
    /// Wind frame
    pub wind: Wind,
    /// Planet-relative location
    pub planet: PlanetLocation,
}

/// Aerodynamic angles (rad), N each.
#[derive(Debug, Clone, PartialEq)]
pub struct Aerodynamics {
    /// Angle of attack
    pub angle_of_attack: Array1<f64>,
    /// Sideslip angle
    pub side_slip_angle: Array1<f64>,
    /// Roll angle, copied from the body rotations
    pub roll_angle: Array1<f64>,
}

/// Freestream scalars, N each.
#[derive(Debug, Clone, PartialEq)]
pub struct Freestream {
    /// True airspeed (m/s)
    pub velocity: Array1<f64>,
    /// Altitude (m)
    pub altitude: Array1<f64>,
}

/// Conditions record for one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    /// Frame series
    pub frames: Frames,
    /// Aerodynamic angles
    pub aerodynamics: Aerodynamics,
    /// Freestream scalars
    pub freestream: Freestream,
}

fn identity_tensor(n: usize) -> Array3<f64> {
    let mut t = Array3::zeros((n, 3, 3));
    for mut m in t.outer_iter_mut() {
        m.diag_mut().fill(1.0);
    }
    t
}

impl Conditions {
    /// Allocate a zeroed record for `n` nodes. Transforms start as identity.
    pub fn new(n: usize) -> Self {
        let vectors = || Array2::zeros((n, 3));
        let scalars = || Array1::zeros(n);

        Self {
            frames: Frames {
                inertial: Inertial {
                    position_vector: vectors(),
                    velocity_vector: vectors(),
                    acceleration_vector: vectors(),
                    gravity_force_vector: vectors(),
                    total_force_vector: vectors(),
                    time: scalars(),
                },
                body: Body {
                    inertial_rotations: vectors(),
                    thrust_force_vector: vectors(),
                    transform_to_inertial: identity_tensor(n),
                },
                wind: Wind {
                    body_rotations: vectors(),
                    lift_force_vector: vectors(),
                    drag_force_vector: vectors(),
                    transform_to_inertial: identity_tensor(n),
                },
                planet: PlanetLocation {
                    start_time: None,
                    latitude: scalars(),
                    longitude: scalars(),
                },
            },
            aerodynamics: Aerodynamics {
                angle_of_attack: scalars(),
                side_slip_angle: scalars(),
                roll_angle: scalars(),
            },
            freestream: Freestream {
                velocity: scalars(),
                altitude: scalars(),
            },
        }
    }

    /// Number of time nodes, taken from the time series.
    pub fn node_count(&self) -> usize {
        self.frames.inertial.time.len()
    }

    /// Check that every series carries `self.node_count()` nodes.
    pub fn check_node_counts(&self) -> Result<(), FramesError> {
        let expected = self.node_count();
        if expected == 0 {
            return Err(FramesError::Empty);
        }

        let inertial = &self.frames.inertial;
        let body = &self.frames.body;
        let wind = &self.frames.wind;
        let planet = &self.frames.planet;
        let counts = [
            ("frames.inertial.position_vector", inertial.position_vector.nrows()),
            ("frames.inertial.velocity_vector", inertial.velocity_vector.nrows()),
            ("frames.inertial.acceleration_vector", inertial.acceleration_vector.nrows()),
            ("frames.inertial.gravity_force_vector", inertial.gravity_force_vector.nrows()),
            ("frames.inertial.total_force_vector", inertial.total_force_vector.nrows()),
            ("frames.body.inertial_rotations", body.inertial_rotations.nrows()),
            ("frames.body.thrust_force_vector", body.thrust_force_vector.nrows()),
            ("frames.body.transform_to_inertial", body.transform_to_inertial.len_of(Axis(0))),
            ("frames.wind.body_rotations", wind.body_rotations.nrows()),
            ("frames.wind.lift_force_vector", wind.lift_force_vector.nrows()),
            ("frames.wind.drag_force_vector", wind.drag_force_vector.nrows()),
            ("frames.wind.transform_to_inertial", wind.transform_to_inertial.len_of(Axis(0))),
            ("frames.planet.latitude", planet.latitude.len()),
            ("frames.planet.longitude", planet.longitude.len()),
            ("aerodynamics.angle_of_attack", self.aerodynamics.angle_of_attack.len()),
            ("aerodynamics.side_slip_angle", self.aerodynamics.side_slip_angle.len()),
            ("aerodynamics.roll_angle", self.aerodynamics.roll_angle.len()),
            ("freestream.velocity", self.freestream.velocity.len()),
            ("freestream.altitude", self.freestream.altitude.len()),
        ];

        match counts.iter().find(|(_, found)| *found != expected) {
            Some(&(field, found)) => Err(FramesError::NodeCount {
                field,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }
}

/// Everything a stage can read or write during one solver iteration.
#[derive(Debug, Clone)]
pub struct State {
    /// Conditions of the current segment.
    pub conditions: Conditions,
    /// Integration/differentiation operators for the segment's nodes.
    pub numerics: Numerics,
    /// Final conditions of the preceding segment, if chained.
    pub initials: Option<Conditions>,
}

impl State {
    /// Bundle conditions, operators and optional initials after checking
    /// that their node counts agree.
    ///
    /// The initials may have a different node count from the current segment;
    /// only their own internal consistency is checked.
    pub fn new(
        conditions: Conditions,
        numerics: Numerics,
        initials: Option<Conditions>,
    ) -> Result<Self, FramesError> {
        conditions.check_node_counts()?;
        numerics.check_shape(conditions.node_count())?;
        if let Some(prior) = &initials {
            prior.check_node_counts()?;
        }

        Ok(Self {
            conditions,
            numerics,
            initials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_new_allocates_consistent_record() {
        let c = Conditions::new(5);
        assert_eq!(c.node_count(), 5);
        assert!(c.check_node_counts().is_ok());
        assert_eq!(c.frames.body.transform_to_inertial.dim(), (5, 3, 3));
        assert_eq!(c.frames.wind.transform_to_inertial[[4, 2, 2]], 1.0);
        assert_eq!(c.frames.wind.transform_to_inertial[[4, 0, 2]], 0.0);
        assert_eq!(c.frames.planet.start_time, None);
    }

    #[test]
    fn test_node_count_mismatch_reported() {
        let mut c = Conditions::new(4);
        c.frames.wind.lift_force_vector = Array2::zeros((3, 3));
        match c.check_node_counts() {
            Err(FramesError::NodeCount {
                field,
                expected,
                found,
            }) => {
                assert_eq!(field, "frames.wind.lift_force_vector");
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_record_rejected() {
        assert!(matches!(
            Conditions::new(0).check_node_counts(),
            Err(FramesError::Empty)
        ));
    }

    #[test]
    fn test_state_rejects_wrong_operator() {
        let conditions = Conditions::new(3);
        let numerics = Numerics::new(Array2::zeros((3, 3)), Array2::zeros((2, 2)));
        assert!(matches!(
            State::new(conditions, numerics, None),
            Err(FramesError::OperatorShape {
                name: "differentiate",
                ..
            })
        ));
    }

    #[test]
    fn test_state_accepts_initials_of_other_length() {
        let conditions = Conditions::new(3);
        let numerics = Numerics::new(Array2::zeros((3, 3)), Array2::zeros((3, 3)));
        let state = State::new(conditions, numerics, Some(Conditions::new(7))).unwrap();
        assert_eq!(state.initials.map(|c| c.node_count()), Some(7));
    }
}
