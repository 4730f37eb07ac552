use std::path::PathBuf;

use thiserror::Error;

/// Number of generations written when nothing else is asked for
pub const DEFAULT_ITERATIONS: usize = 100;

pub const DEFAULT_INPUT: &str = "gamein.png";
pub const DEFAULT_PREFIX: &str = "gameout_";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Output file prefix cannot be empty")]
    EmptyPrefix,
}

/// Everything a simulation run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// PNG holding the initial generation
    pub input: PathBuf,

    /// Directory frames are written to
    pub output_dir: PathBuf,

    /// Frames are named `{prefix}{index:03}.png`
    pub prefix: String,

    /// Number of frames written. Frame `0` is the initial generation.
    pub iterations: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl SimulationConfig {
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::ConfigError;
    use super::SimulationConfig;

    #[test]
    fn defaults() {
        let config = SimulationConfig::default();

        assert_eq!(config.input, Path::new("gamein.png"));
        assert_eq!(config.output_dir, Path::new("."));
        assert_eq!(config.prefix, "gameout_");
        assert_eq!(config.iterations, 100);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder() {
        let config = SimulationConfig::default()
            .with_input("seed.png")
            .with_output_dir("frames")
            .with_prefix("gen_")
            .with_iterations(3);

        assert_eq!(config.input, Path::new("seed.png"));
        assert_eq!(config.output_dir, Path::new("frames"));
        assert_eq!(config.prefix, "gen_");
        assert_eq!(config.iterations, 3);
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let config = SimulationConfig::default().with_prefix("");

        assert_eq!(config.validate(), Err(ConfigError::EmptyPrefix));
    }
}
