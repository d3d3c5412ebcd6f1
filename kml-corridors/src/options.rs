use clap::Parser;
use std::path::PathBuf;

/// Add safety corridors and distance markers to a flight-track KML.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Input KML path.
    #[arg(short, long, default_value = "inputs/input.kml")]
    pub input: PathBuf,

    /// Output KML path.
    #[arg(short, long, default_value = "outputs/corridors.kml")]
    pub output: PathBuf,

    /// Corridor distance in meters.
    #[arg(short, long, default_value_t = 300.0)]
    pub distance: f64,

    /// Also write the run report as JSON.
    #[arg(long)]
    pub report: Option<PathBuf>,
}
