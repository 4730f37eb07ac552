use std::io;
use std::io::Write;

use anyhow::Context;
use tracing::info;

use crate::config::SimulationConfig;
use crate::frames::FrameSink;
use crate::frames::GridSource;
use crate::step;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub frames: usize,
    pub width: usize,
    pub height: usize,

    /// Alive cells in the generation after the last frame
    pub final_population: usize,
}

/// Load the initial generation from `source`, then write `config.iterations` frames to `sink`,
/// stepping once after each. Progress goes to stdout, one frame index per line.
pub fn run<S, K>(config: &SimulationConfig, source: &mut S, sink: &mut K) -> anyhow::Result<Summary>
where
    S: GridSource,
    K: FrameSink,
{
    run_with_progress(config, source, sink, io::stdout().lock())
}

/// Like [`run`], printing progress to `progress` instead.
pub fn run_with_progress<S, K, P>(
    config: &SimulationConfig,
    source: &mut S,
    sink: &mut K,
    mut progress: P,
) -> anyhow::Result<Summary>
where
    S: GridSource,
    K: FrameSink,
    P: Write,
{
    config.validate()?;

    let mut grid = source.load().context("Failed to load initial grid")?;

    info!(
        width = grid.width(),
        height = grid.height(),
        population = grid.population(),
        iterations = config.iterations,
        "starting simulation"
    );

    for s in 0..config.iterations {
        writeln!(progress, "{s}").context("Failed to report progress")?;

        sink.emit(s, &grid)
            .with_context(|| format!("Failed to emit frame {s}"))?;

        grid = step::step(&grid);
    }

    progress.flush().context("Failed to report progress")?;

    let summary = Summary {
        frames: config.iterations,
        width: grid.width(),
        height: grid.height(),
        final_population: grid.population(),
    };

    info!(frames = summary.frames, population = summary.final_population, "simulation done");

    Ok(summary)
}
