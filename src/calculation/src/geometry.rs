//! Direction-cosine matrix operations batched over time nodes.
//!
//! Every tensor here is node-major: an `N×3` series holds one vector per row
//! and an `N×3×3` tensor holds one matrix per node. All products are applied
//! node by node; nothing mixes data across nodes.

use ndarray::{Array2, Array3, ArrayView1, ArrayView2, ArrayView3, Axis};

/// Single 3×3 direction-cosine matrix, row major.
pub type Dcm = [[f64; 3]; 3];

/// Identity matrix.
pub const IDENTITY: Dcm = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Body axis a single rotation turns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    /// Roll axis
    X,
    /// Pitch axis
    Y,
    /// Yaw axis
    Z,
}

impl RotationAxis {
    /// Column of the angle triple holding this axis' rotation.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            RotationAxis::X => 0,
            RotationAxis::Y => 1,
            RotationAxis::Z => 2,
        }
    }
}

/// Passive rotation about a single body axis.
#[inline(always)]
pub fn axis_dcm(axis: RotationAxis, angle: f64) -> Dcm {
    let (s, c) = angle.sin_cos();
    match axis {
        RotationAxis::X => [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]],
        RotationAxis::Y => [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]],
        RotationAxis::Z => [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]],
    }
}

/// Matrix product a·b.
#[inline(always)]
pub fn mat_mul(a: &Dcm, b: &Dcm) -> Dcm {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

/// Matrix-vector product m·v.
#[inline(always)]
pub fn mat_vec(m: &Dcm, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Transpose (the inverse of an orthonormal matrix).
#[inline(always)]
pub fn transpose(m: &Dcm) -> Dcm {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Build a DCM from three rotation angles indexed by axis.
///
/// `angles[k]` is the rotation about the axis with [`RotationAxis::index`]
/// `k`. The matrix is composed so the first axis in `sequence` is applied
/// first to a vector, which for the (Z, Y, X) sequence gives the usual yaw-pitch-roll inertial→body matrix
/// `Rx(roll)·Ry(pitch)·Rz(yaw)`.
pub fn angles_to_dcm(angles: &[f64; 3], sequence: [RotationAxis; 3]) -> Dcm {
    sequence
        .iter()
        .rev()
        .fold(IDENTITY, |acc, &axis| mat_mul(&acc, &axis_dcm(axis, angles[axis.index()])))
}

/// Read one node's matrix out of an `N×3×3` tensor.
#[inline]
pub fn dcm_at(tensor: &ArrayView3<f64>, node: usize) -> Dcm {
    let mut m = [[0.0; 3]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value = tensor[[node, i, j]];
        }
    }
    m
}

#[inline]
fn vec3(row: ArrayView1<f64>) -> [f64; 3] {
    [row[0], row[1], row[2]]
}

fn dcm_tensor(dcms: impl ExactSizeIterator<Item = Dcm>) -> Array3<f64> {
    let mut out = Array3::zeros((dcms.len(), 3, 3));
    for (mut slot, m) in out.outer_iter_mut().zip(dcms) {
        for i in 0..3 {
            for j in 0..3 {
                slot[[i, j]] = m[i][j];
            }
        }
    }
    out
}

/// Build one DCM per row of an `N×3` rotation series.
pub fn angles_to_dcms(rotations: ArrayView2<f64>, sequence: [RotationAxis; 3]) -> Array3<f64> {
    dcm_tensor(
        rotations
            .outer_iter()
            .map(|row| angles_to_dcm(&vec3(row), sequence)),
    )
}

/// Transpose every node's matrix.
pub fn orientation_transpose(tensor: ArrayView3<f64>) -> Array3<f64> {
    let n = tensor.len_of(Axis(0));
    dcm_tensor((0..n).map(|k| transpose(&dcm_at(&tensor, k))))
}

/// Per-node matrix product `a[k]·b[k]`.
pub fn orientation_product(a: ArrayView3<f64>, b: ArrayView3<f64>) -> Array3<f64> {
    let n = a.len_of(Axis(0));
    dcm_tensor((0..n).map(|k| mat_mul(&dcm_at(&a, k), &dcm_at(&b, k))))
}

/// Per-node matrix-vector product `t[k]·v[k]`, returning an `N×3` series.
pub fn orientation_apply(tensor: ArrayView3<f64>, vectors: ArrayView2<f64>) -> Array2<f64> {
    let mut out = Array2::zeros(vectors.raw_dim());
    for (k, (mut slot, v)) in out.outer_iter_mut().zip(vectors.outer_iter()).enumerate() {
        let r = mat_vec(&dcm_at(&tensor, k), &vec3(v));
        slot[0] = r[0];
        slot[1] = r[1];
        slot[2] = r[2];
    }
    out
}
