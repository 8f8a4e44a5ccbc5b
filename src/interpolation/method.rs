use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use strum_macros::{Display, EnumIter};

//=====================================================================
// The interpolation methods a run produces output for. The Display
// form doubles as the prefix of the output file name.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum InterpolationMethod {
    Lagrange,
    CubicSpline,
}

impl InterpolationMethod {
    // Minimum number of samples the method can work with
    pub fn min_samples(&self) -> usize {
        match self {
            InterpolationMethod::Lagrange => 2,
            InterpolationMethod::CubicSpline => 3,
        }
    }

    // Output files are named `<method>_<input file name>` and placed next to
    // the input file unless an output directory is given.
    pub fn output_path<P: AsRef<Path>>(&self, input: P, output_dir: Option<&Path>) -> Result<PathBuf> {
        let input = input.as_ref();
        let file_name = input
            .file_name()
            .ok_or_else(|| anyhow!("Input path {} has no file name", input.display()))?;
        let output_name = format!("{}_{}", self, file_name.to_string_lossy());

        let directory = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        Ok(directory.join(output_name))
    }
}
