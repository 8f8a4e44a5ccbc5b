mod error;
mod interpolation;
mod linalg;
mod sampling;

pub mod io;
pub mod runner;

pub use error::{InterpolationError, Result};
pub use interpolation::{
    CubicSpline, InterpolationMethod, LagrangeInterpolator, LagrangeWindow, Samples, SegmentCoefficients,
    SplineSystem, XY, lagrange_sum,
};
pub use linalg::lu_solve;
pub use sampling::{RangeEnd, StepSampler, cubic_spline, lagrange};
