mod cubic;
mod system;

pub use cubic::{CubicSpline, SegmentCoefficients};
pub use system::SplineSystem;
