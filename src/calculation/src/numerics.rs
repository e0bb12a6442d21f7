//! Integration and differentiation operators over a segment's time nodes.
//!
//! Production operators come from the outer solver (pseudospectral matrices).
//! [`Numerics::trapezoidal`] builds a low-order pair on arbitrary nodes that is
//! exact for constant integrands and linear derivatives, which is what the
//! tests, benches and the demo binary need.

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::FramesError;

/// Pair of N×N operators. Read-only to the stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Numerics {
    /// Cumulative integral from the first node: `(I·f)[i] ≈ ∫_{t0}^{ti} f dt`
    pub integrate: Array2<f64>,
    /// Derivative at each node: `(D·f)[i] ≈ f'(ti)`
    pub differentiate: Array2<f64>,
}

impl Numerics {
    /// Wrap externally built operators.
    pub fn new(integrate: Array2<f64>, differentiate: Array2<f64>) -> Self {
        Self {
            integrate,
            differentiate,
        }
    }

    /// Trapezoid integration and three-point finite differences on `time`.
    ///
    /// Nodes may be non-uniform but must be distinct.
    pub fn trapezoidal(time: ArrayView1<f64>) -> Self {
        let n = time.len();

        let mut integrate = Array2::zeros((n, n));
        for i in 1..n {
            let half_dt = 0.5 * (time[i] - time[i - 1]);
            for j in 0..i {
                integrate[[i, j]] = integrate[[i - 1, j]];
            }
            integrate[[i, i - 1]] += half_dt;
            integrate[[i, i]] += half_dt;
        }

        let mut differentiate = Array2::zeros((n, n));
        if n >= 2 {
            let h_first = time[1] - time[0];
            differentiate[[0, 0]] = -1.0 / h_first;
            differentiate[[0, 1]] = 1.0 / h_first;

            let h_last = time[n - 1] - time[n - 2];
            differentiate[[n - 1, n - 2]] = -1.0 / h_last;
            differentiate[[n - 1, n - 1]] = 1.0 / h_last;
        }
        for i in 1..n.saturating_sub(1) {
            let h1 = time[i] - time[i - 1];
            let h2 = time[i + 1] - time[i];
            differentiate[[i, i - 1]] = -h2 / (h1 * (h1 + h2));
            differentiate[[i, i]] = (h2 - h1) / (h1 * h2);
            differentiate[[i, i + 1]] = h1 / (h2 * (h1 + h2));
        }

        Self {
            integrate,
            differentiate,
        }
    }

    /// [`Numerics::trapezoidal`] on `n` nodes spaced `dt` apart from zero.
    pub fn uniform(n: usize, dt: f64) -> Self {
        let time = Array1::from_iter((0..n).map(|i| i as f64 * dt));
        Self::trapezoidal(time.view())
    }

    /// Check both operators are `nodes`×`nodes`.
    pub fn check_shape(&self, nodes: usize) -> Result<(), FramesError> {
        for (name, op) in [
            ("integrate", &self.integrate),
            ("differentiate", &self.differentiate),
        ] {
            let (rows, cols) = op.dim();
            if rows != nodes || cols != nodes {
                return Err(FramesError::OperatorShape {
                    name,
                    rows,
                    cols,
                    nodes,
                });
            }
        }
        Ok(())
    }
}
