use log::debug;

use crate::error::{InterpolationError, Result};
use crate::interpolation::{CubicSpline, LagrangeInterpolator, LagrangeWindow, Samples, XY};

//=====================================================================
// Whether the end of a sampled range is itself sampled.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    Exclusive,
    Inclusive,
}

//=====================================================================
// Fixed-step query points x = start + k * step, k = 0, 1, 2, ...
// The sequence is lazy and ends at the first point beyond `end`.
// Not Clone: once consumed, the sequence is gone.
//=====================================================================
#[derive(Debug)]
pub struct StepSampler {
    start: f64,
    step: f64,
    end: f64,
    range_end: RangeEnd,
    index: u64,
    finished: bool,
}

impl StepSampler {
    pub fn new(start: f64, end: f64, step: f64, range_end: RangeEnd) -> Result<Self> {
        check_step(step)?;
        Ok(Self { start, step, end, range_end, index: 0, finished: false })
    }
}

impl Iterator for StepSampler {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.finished {
            return None;
        }
        // Computed from the index, never accumulated
        let x = self.start + self.index as f64 * self.step;
        let in_range = match self.range_end {
            RangeEnd::Exclusive => x < self.end,
            RangeEnd::Inclusive => x <= self.end,
        };
        if !in_range {
            self.finished = true;
            return None;
        }
        self.index += 1;
        Some(x)
    }
}

fn check_step(step: f64) -> Result<()> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(InterpolationError::InvalidStep(step));
    }
    Ok(())
}

// First and last x of the samples, requiring at least `required` samples
fn sample_range(samples: &Samples, required: usize) -> Result<(f64, f64)> {
    samples.require(required)?;
    match (samples.first_x(), samples.last_x()) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(InterpolationError::InvalidInput { required, got: samples.len() }),
    }
}

//=====================================================================
// Lagrange interpolation sampled over [x_first, x_last) with the given
// step. `interval` selects the window: 0 (or None) for the global
// polynomial, k > 0 for a local window of half-width k.
//=====================================================================
pub fn lagrange(samples: &Samples, step: f64, interval: impl Into<LagrangeWindow>) -> Result<impl Iterator<Item = XY> + '_> {
    check_step(step)?;
    let interpolator = LagrangeInterpolator::new(samples, interval.into())?;
    let (first, last) = sample_range(samples, 2)?;
    debug!("Lagrange interpolation ({:?}) over [{}, {}) with step {}", interpolator.window(), first, last, step);

    let sampler = StepSampler::new(first, last, step, RangeEnd::Exclusive)?;
    Ok(sampler.map(move |x| interpolator.evaluate_xy(x)))
}

//=====================================================================
// Natural cubic spline sampled over [x_first, x_last] with the given
// step. The spline is built and solved before the first point is
// produced.
//=====================================================================
pub fn cubic_spline(samples: &Samples, step: f64) -> Result<impl Iterator<Item = XY>> {
    check_step(step)?;
    let (first, last) = sample_range(samples, 3)?;
    let spline = CubicSpline::new(samples)?;
    debug!("Cubic spline interpolation over [{}, {}] with step {}", first, last, step);

    let sampler = StepSampler::new(first, last, step, RangeEnd::Inclusive)?;
    Ok(sampler.map(move |x| XY::new(x, spline.evaluate(x))))
}
