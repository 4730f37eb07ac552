use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use crate::codec;
use crate::grid::Grid;

/// Somewhere the initial generation comes from.
pub trait GridSource {
    fn load(&mut self) -> anyhow::Result<Grid>;
}

/// Somewhere generations go once computed. `index` is the generation number, starting at `0`.
pub trait FrameSink {
    fn emit(&mut self, index: usize, grid: &Grid) -> anyhow::Result<()>;
}

/// Reads the initial generation from a PNG file.
pub struct PngFileSource {
    path: PathBuf,
}

impl PngFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GridSource for PngFileSource {
    fn load(&mut self) -> anyhow::Result<Grid> {
        let path = self.path.display();

        let file = File::open(&self.path).with_context(|| format!("Failed to open {path}"))?;
        let grid = codec::decode_png(BufReader::new(file))
            .with_context(|| format!("Failed to read {path}"))?;

        debug!(%path, width = grid.width(), height = grid.height(), "loaded grid");

        Ok(grid)
    }
}

/// Writes each generation as `{dir}/{prefix}{index:03}.png`.
pub struct PngFrameWriter {
    dir: PathBuf,
    prefix: String,
}

impl PngFrameWriter {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}{index:03}.png", self.prefix))
    }
}

impl FrameSink for PngFrameWriter {
    fn emit(&mut self, index: usize, grid: &Grid) -> anyhow::Result<()> {
        let path = self.frame_path(index);

        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        codec::encode_png(grid, &mut out)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        out.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;

        debug!(path = %path.display(), population = grid.population(), "wrote frame");

        Ok(())
    }
}
