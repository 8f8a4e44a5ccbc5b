use log::debug;

use crate::error::Result;
use crate::interpolation::Samples;
use crate::interpolation::spline::SplineSystem;

//=====================================================================
// Coefficients of one spline segment, relative to its left knot x0:
//     f(x) = a + b(x - x0) + c(x - x0)^2 + d(x - x0)^3
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl SegmentCoefficients {
    // Horner form of the cubic, t = x - x0
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    #[inline]
    pub fn derivative(&self, t: f64) -> f64 {
        self.b + t * (2.0 * self.c + t * 3.0 * self.d)
    }

    #[inline]
    pub fn second_derivative(&self, t: f64) -> f64 {
        2.0 * self.c + 6.0 * self.d * t
    }
}

//=====================================================================
// Natural cubic spline through a validated sample sequence.
// Knots and coefficients are fixed once the spline is built.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    segments: Vec<SegmentCoefficients>,
}

impl CubicSpline {
    pub fn new(samples: &Samples) -> Result<Self> {
        samples.require(3)?;

        // Assemble and solve the coefficient system
        let system = SplineSystem::build(samples)?;
        let coefficients = system.solve()?;

        // Slots [4i, 4i + 3] belong to segment i
        let segments: Vec<SegmentCoefficients> = coefficients
            .as_slice()
            .chunks_exact(4)
            .map(|chunk| SegmentCoefficients { a: chunk[0], b: chunk[1], c: chunk[2], d: chunk[3] })
            .collect();
        debug!("Built cubic spline with {} segments", segments.len());

        Ok(Self { knots: samples.xs().collect(), segments })
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn segments(&self) -> &[SegmentCoefficients] {
        &self.segments
    }

    // Index i of the segment with x_i <= x < x_{i+1}. Queries left of the
    // first knot use the first segment, queries at or right of the last knot
    // use the last segment.
    pub fn segment_index(&self, x: f64) -> usize {
        let last = self.segments.len() - 1;
        self.knots.partition_point(|&knot| knot <= x).saturating_sub(1).min(last)
    }

    // Segment coefficients and the offset of x from the segment's left knot
    fn locate(&self, x: f64) -> (&SegmentCoefficients, f64) {
        let index = self.segment_index(x);
        (&self.segments[index], x - self.knots[index])
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let (segment, t) = self.locate(x);
        segment.value(t)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let (segment, t) = self.locate(x);
        segment.derivative(t)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let (segment, t) = self.locate(x);
        segment.second_derivative(t)
    }
}
