use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use pnglife::config::SimulationConfig;
use pnglife::driver;
use pnglife::frames::PngFileSource;
use pnglife::frames::PngFrameWriter;

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries the frame counter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = SimulationConfig::default();
    if let Some(input) = std::env::args().nth(1) {
        config = config.with_input(input);
    }

    let mut source = PngFileSource::new(config.input.clone());
    let mut sink = PngFrameWriter::new(config.output_dir.clone(), config.prefix.clone());

    match driver::run(&config, &mut source, &mut sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");

            ExitCode::FAILURE
        }
    }
}
