use thiserror::Error;

//=====================================================================
// Errors raised by the interpolation core. Every variant is reported
// at the boundary of the operation that detected it, nothing is
// recovered silently.
//=====================================================================
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("Invalid input: at least {required} samples are required, got {got}")]
    InvalidInput { required: usize, got: usize },

    #[error("Invalid step: {0} (the step must be a positive, finite number)")]
    InvalidStep(f64),

    #[error("Degenerate sample at index {index}: x = {x} is repeated")]
    DegenerateSample { index: usize, x: f64 },

    #[error("Samples are not ordered: x at index {index} is smaller than its predecessor")]
    UnorderedSamples { index: usize },

    #[error("Sample at index {index} has a non-finite coordinate")]
    NonFiniteSample { index: usize },

    #[error("Spline system is singular (no usable pivot in column {column})")]
    SingularSystem { column: usize },
}

pub type Result<T> = std::result::Result<T, InterpolationError>;
