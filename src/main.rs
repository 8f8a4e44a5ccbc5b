use std::path::PathBuf;

use clap::Parser;

use interp_rs::runner::{self, RunConfig};

//=====================================================================
// Command line front end. Reads `x,y` samples from INPUT and writes
// `lagrange_<INPUT>` and `cubic_spline_<INPUT>` next to it (or into
// --output-dir).
//=====================================================================
#[derive(Parser, Debug)]
#[command(name = "interp")]
#[command(about = "Lagrange and natural cubic spline interpolation of sampled data")]
#[command(version)]
struct Cli {
    /// File with one `x,y` sample per line, x strictly increasing.
    input: PathBuf,

    /// Distance between consecutive interpolated points.
    #[arg(allow_negative_numbers = true)]
    step: f64,

    /// Half-width of the local Lagrange window in samples (0 = global polynomial).
    #[arg(default_value_t = 0)]
    interval: usize,

    /// Directory for the output files (defaults to the input file's directory).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let config = RunConfig::new(cli.input, cli.step).with_interval(cli.interval);
        match cli.output_dir {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = RunConfig::from(Cli::parse());

    let summary = runner::run(&config)?;
    for output in &summary.outputs {
        println!("{}: {} points -> {}", output.method, output.points, output.path.display());
    }
    Ok(())
}
