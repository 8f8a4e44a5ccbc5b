use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::error::{InterpolationError, Result};
use crate::interpolation::XY;
use crate::linalg::lu_solve;

//=====================================================================
// Linear system for the coefficients of a natural cubic spline.
//
// For n samples there are n - 1 segments, each with unknowns
// (a_i, b_i, c_i, d_i) stored in slots [4i, 4i + 3], so the system has
// dimension N = 4(n - 1). With h_i = x_{i+1} - x_i the rows are:
//
//    4i      a_i                                   = y_i
//    4i + 1  a_i + b_i h + c_i h^2 + d_i h^3       = y_{i+1}
//    4i + 2  b_i + 2c_i h + 3d_i h^2 - b_{i+1}     = 0     (i < n - 2)
//    4i + 3  2c_i + 6d_i h - 2c_{i+1}              = 0     (i < n - 2)
//    N - 2   c_0                                   = 0
//    N - 1   2c_{n-2} + 6d_{n-2} h_{n-2}           = 0
//
// The last segment has no right neighbour, so its two continuity rows
// are the ones taken by the natural boundary conditions.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSystem {
    pub matrix: DMatrix<f64>,
    pub rhs: DVector<f64>,
}

impl SplineSystem {
    pub fn build(points: &[XY]) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(InterpolationError::InvalidInput { required: 3, got: n });
        }

        let dim = 4 * (n - 1);
        let mut a = DMatrix::zeros(dim, dim);
        let mut b = DVector::zeros(dim);

        for (i, pair) in points.windows(2).enumerate() {
            let (left, right) = (pair[0], pair[1]);
            let h = right.x - left.x;
            if h <= 0.0 {
                return Err(InterpolationError::DegenerateSample { index: i + 1, x: right.x });
            }
            let row = 4 * i;

            // Value at the left endpoint
            a[(row, row)] = 1.0;
            b[row] = left.y;

            // Value at the right endpoint
            a[(row + 1, row)] = 1.0;
            a[(row + 1, row + 1)] = h;
            a[(row + 1, row + 2)] = h.powi(2);
            a[(row + 1, row + 3)] = h.powi(3);
            b[row + 1] = right.y;

            // Last segment: its remaining rows hold the boundary conditions
            if i == n - 2 {
                continue;
            }

            // First derivative continuity at the right endpoint
            a[(row + 2, row + 1)] = 1.0;
            a[(row + 2, row + 2)] = 2.0 * h;
            a[(row + 2, row + 3)] = 3.0 * h.powi(2);
            a[(row + 2, row + 5)] = -1.0;

            // Second derivative continuity at the right endpoint
            a[(row + 3, row + 2)] = 2.0;
            a[(row + 3, row + 3)] = 6.0 * h;
            a[(row + 3, row + 6)] = -2.0;
        }

        // Second derivative vanishes at both ends
        let h_last = points[n - 1].x - points[n - 2].x;
        a[(dim - 2, 2)] = 1.0;
        a[(dim - 1, dim - 2)] = 2.0;
        a[(dim - 1, dim - 1)] = 6.0 * h_last;

        debug!("Assembled {}x{} spline system for {} samples ({} non-zero entries)", dim, dim, n, a.iter().filter(|v| **v != 0.0).count());
        Ok(Self { matrix: a, rhs: b })
    }

    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    // Solve the system, consuming it. The result is the flat coefficient
    // vector, four entries per segment.
    pub fn solve(self) -> Result<DVector<f64>> {
        lu_solve(self.matrix, &self.rhs)
    }
}
