use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use strum::IntoEnumIterator;

use crate::interpolation::{InterpolationMethod, LagrangeWindow, XY};
use crate::{cubic_spline, io, lagrange};

//=====================================================================
// Settings for one run over an input file.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub step: f64,
    pub interval: usize,
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn new<P: Into<PathBuf>>(input: P, step: f64) -> Self {
        Self { input: input.into(), step, interval: 0, output_dir: None }
    }

    pub fn with_interval(mut self, interval: usize) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }
}

// What a run produced for a single method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodOutput {
    pub method: InterpolationMethod,
    pub path: PathBuf,
    pub points: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub samples: usize,
    pub outputs: Vec<MethodOutput>,
}

//=====================================================================
// Load the samples, then interpolate and write every method in turn.
// Every method is set up (inputs checked, spline solved) before the
// first output file is created, so a failure leaves no output behind.
//=====================================================================
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let samples = io::load_samples(&config.input)?;
    info!("Loaded {} samples from {}", samples.len(), config.input.display());

    let mut pending = Vec::new();
    for method in InterpolationMethod::iter() {
        let path = method.output_path(&config.input, config.output_dir.as_deref())?;
        info!("Running {} interpolation with step {}", method, config.step);

        let points: Box<dyn Iterator<Item = XY> + '_> = match method {
            InterpolationMethod::Lagrange => {
                let window = LagrangeWindow::from(config.interval);
                Box::new(
                    lagrange(&samples, config.step, window)
                        .with_context(|| format!("{} interpolation failed", method))?,
                )
            }
            InterpolationMethod::CubicSpline => Box::new(
                cubic_spline(&samples, config.step).with_context(|| format!("{} interpolation failed", method))?,
            ),
        };
        pending.push((method, path, points));
    }

    let mut outputs = Vec::new();
    for (method, path, points) in pending {
        let points = io::write_points(&path, points)?;
        info!("Wrote {} points to {}", points, path.display());
        outputs.push(MethodOutput { method, path, points });
    }

    Ok(RunSummary { samples: samples.len(), outputs })
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;

    use approx::assert_abs_diff_eq;

    use crate::error::InterpolationError;

    fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn read_points(path: &Path) -> Vec<(f64, f64)> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| {
                let (x, y) = line.split_once(',').unwrap();
                (x.parse().unwrap(), y.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_run_writes_both_methods() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "points.csv", "0,0\n1,1\n2,0\n3,1\n");

        let summary = run(&RunConfig::new(&input, 0.5)).unwrap();
        assert_eq!(summary.samples, 4);
        assert_eq!(summary.outputs.len(), 2);

        let lagrange_out = &summary.outputs[0];
        assert_eq!(lagrange_out.method, InterpolationMethod::Lagrange);
        assert_eq!(lagrange_out.path, dir.path().join("lagrange_points.csv"));
        assert_eq!(lagrange_out.points, 6);

        let spline_out = &summary.outputs[1];
        assert_eq!(spline_out.method, InterpolationMethod::CubicSpline);
        assert_eq!(spline_out.path, dir.path().join("cubic_spline_points.csv"));
        assert_eq!(spline_out.points, 7);

        let spline_points = read_points(&spline_out.path);
        assert_eq!(spline_points.len(), 7);
        // Every other point sits on a knot
        for (point, expected) in spline_points.iter().step_by(2).zip([0.0, 1.0, 0.0, 1.0]) {
            assert_abs_diff_eq!(point.1, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_run_with_output_dir_and_interval() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let input = write_input(&input_dir, "line.txt", "0 1\n1 3\n2 5\n3 7\n4 9\n5 11\n");

        let config = RunConfig::new(&input, 1.0).with_interval(2).with_output_dir(output_dir.path());
        let summary = run(&config).unwrap();
        assert_eq!(summary.outputs[0].path, output_dir.path().join("lagrange_line.txt"));

        let lagrange_points = read_points(&summary.outputs[0].path);
        let ys: Vec<f64> = lagrange_points.iter().map(|p| p.1).collect();
        assert_eq!(ys.len(), 5);
        assert_eq!(ys[0], 0.0);
        assert_abs_diff_eq!(ys[2], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_run_rejects_invalid_step() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "points.csv", "0,0\n1,1\n2,0\n");

        let err = run(&RunConfig::new(&input, 0.0)).unwrap_err();
        let cause = err.downcast_ref::<InterpolationError>().unwrap();
        assert_eq!(*cause, InterpolationError::InvalidStep(0.0));
    }

    #[test]
    fn test_run_rejects_too_few_spline_samples() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "two.csv", "0,0\n1,1\n");

        let err = run(&RunConfig::new(&input, 0.5)).unwrap_err();
        let cause = err.downcast_ref::<InterpolationError>().unwrap();
        assert_eq!(*cause, InterpolationError::InvalidInput { required: 3, got: 2 });
        // Lagrange alone would have worked, but nothing is written
        assert!(!dir.path().join("lagrange_two.csv").exists());
        assert!(!dir.path().join("cubic_spline_two.csv").exists());
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&RunConfig::new(dir.path().join("missing.csv"), 1.0));
        assert!(result.is_err());
    }
}
