use crate::error::{InterpolationError, Result};
use crate::interpolation::{Samples, XY};

//=====================================================================
// Which samples take part in a Lagrange evaluation.
//   - Global: every sample, i.e. the single polynomial of degree n-1.
//   - Local(k): the 2k samples with indices [p - k, p + k), where p is
//     the query position. Queries whose position falls outside
//     [k, n - k) have no complete window and evaluate to zero.
//
// The query position is the query coordinate itself, truncated to an
// integer. For samples placed at x = 0, 1, 2, ... this is exactly the
// index of the sample to the left of the query.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LagrangeWindow {
    #[default]
    Global,
    Local(usize),
}

impl From<usize> for LagrangeWindow {
    fn from(interval: usize) -> Self {
        match interval {
            0 => LagrangeWindow::Global,
            k => LagrangeWindow::Local(k),
        }
    }
}

impl From<Option<usize>> for LagrangeWindow {
    fn from(interval: Option<usize>) -> Self {
        interval.map(LagrangeWindow::from).unwrap_or_default()
    }
}

//=====================================================================
// Lagrange interpolant over a borrowed, validated sample sequence.
//=====================================================================
#[derive(Debug, Clone, Copy)]
pub struct LagrangeInterpolator<'a> {
    samples: &'a [XY],
    window: LagrangeWindow,
}

impl<'a> LagrangeInterpolator<'a> {
    pub fn new(samples: &'a Samples, window: LagrangeWindow) -> Result<Self> {
        samples.require(2)?;
        Ok(Self { samples, window })
    }

    pub fn window(&self) -> LagrangeWindow {
        self.window
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self.window {
            LagrangeWindow::Global => weighted_sum(x, self.samples),
            LagrangeWindow::Local(k) => {
                let n = self.samples.len();
                // No complete window around this position (NaN included)
                if !(x >= k as f64 && x < n.saturating_sub(k) as f64) {
                    return 0.0;
                }
                let position = x.floor() as usize;
                weighted_sum(x, &self.samples[position - k..position + k])
            }
        }
    }

    pub fn evaluate_xy(&self, x: f64) -> XY {
        XY::new(x, self.evaluate(x))
    }
}

// Lagrange value over an arbitrary, unvalidated slice of samples. Every
// pair of x values is checked before anything is computed.
pub fn lagrange_sum(x: f64, window: &[XY]) -> Result<f64> {
    for (i, xi) in window.iter().enumerate() {
        if let Some(j) = window[i + 1..].iter().position(|xj| xj.x == xi.x) {
            return Err(InterpolationError::DegenerateSample { index: i + 1 + j, x: xi.x });
        }
    }
    Ok(weighted_sum(x, window))
}

// Sum of y_i * prod_{j != i} (x - x_j) / (x_i - x_j). The x values of the
// window must be distinct.
fn weighted_sum(x: f64, window: &[XY]) -> f64 {
    let mut sum = 0.0;
    for (i, xi) in window.iter().enumerate() {
        let mut product = xi.y;
        for (j, xj) in window.iter().enumerate() {
            if j == i {
                continue;
            }
            product *= (x - xj.x) / (xi.x - xj.x);
        }
        sum += product;
    }
    sum
}
