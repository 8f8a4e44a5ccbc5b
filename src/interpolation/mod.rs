mod lagrange;
mod method;
mod spline;
mod xy;

pub use lagrange::{LagrangeInterpolator, LagrangeWindow, lagrange_sum};
pub use method::InterpolationMethod;
pub use spline::{CubicSpline, SegmentCoefficients, SplineSystem};
pub use xy::{Samples, XY};
