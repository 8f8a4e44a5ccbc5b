use std::ops::Deref;

use crate::error::{InterpolationError, Result};

//=====================================================================
// X/Y pair, used both for input samples and for interpolated output.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for XY {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

//=====================================================================
// Validated sample sequence. Once constructed, the x values are
// finite and strictly increasing, and the data can no longer be
// modified (only shared access through Deref is provided).
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Samples(Vec<XY>);

impl Deref for Samples {
    type Target = [XY];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Samples {
    pub fn new(data: Vec<XY>) -> Result<Self> {
        // Every coordinate must be usable in arithmetic
        if let Some(index) = data.iter().position(|xy| !xy.x.is_finite() || !xy.y.is_finite()) {
            return Err(InterpolationError::NonFiniteSample { index });
        }

        // x values must be strictly increasing, repeated values are reported
        // separately since they make the divided differences blow up
        for (index, pair) in data.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            if next.x == prev.x {
                return Err(InterpolationError::DegenerateSample { index: index + 1, x: next.x });
            }
            if next.x < prev.x {
                return Err(InterpolationError::UnorderedSamples { index: index + 1 });
            }
        }

        Ok(Self(data))
    }

    pub fn from_x_and_y(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        // Ensure that the x and y vectors are of the same length
        if x.len() != y.len() {
            return Err(InterpolationError::InvalidInput { required: x.len(), got: y.len() });
        }

        // Zip the x and y vectors together into a vector of XY structs
        let data = x.into_iter().zip(y).map(|(x, y)| XY::new(x, y)).collect();
        Self::new(data)
    }

    // Fail with InvalidInput when fewer than `required` samples are present
    pub fn require(&self, required: usize) -> Result<()> {
        if self.0.len() < required {
            return Err(InterpolationError::InvalidInput { required, got: self.0.len() });
        }
        Ok(())
    }

    pub fn first_x(&self) -> Option<f64> {
        self.0.first().map(|xy| xy.x)
    }

    pub fn last_x(&self) -> Option<f64> {
        self.0.last().map(|xy| xy.x)
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|xy| xy.x)
    }
}

impl TryFrom<Vec<(f64, f64)>> for Samples {
    type Error = InterpolationError;

    fn try_from(pairs: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(pairs.into_iter().map(XY::from).collect())
    }
}
