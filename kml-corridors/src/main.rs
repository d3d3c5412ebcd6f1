mod document;
mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use corridor::Params;
use document::FlightDocument;
use log::info;
use options::Cli;

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    env_logger::init();

    let mut doc = FlightDocument::load(&cli.input)?;
    let segments = doc.line_segments();
    let points = doc.reference_points();
    info!(
        "{}: {} line segments, {} named points",
        cli.input.display(),
        segments.len(),
        points.len()
    );

    let params = Params {
        corridor_distance_m: cli.distance,
    };
    let run = corridor::run(segments, &points, &params);

    doc.append_overlays(&run, cli.distance);
    doc.save(&cli.output)?;
    info!(
        "{}: {} corridor lines, {} distance markers",
        cli.output.display(),
        if run.corridor.is_some() { 2 } else { 0 },
        run.markers.len()
    );

    if let Some(report_path) = &cli.report {
        std::fs::write(report_path, serde_json::to_string_pretty(&run.report)?)?;
        info!("{}: run report written", report_path.display());
    }

    Ok(())
}
