//! Configuration of [`DoorCorridorEnv`](super::DoorCorridorEnv).
use anyhow::Result;
use corridor_core::error::EnvError;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`DoorCorridorEnv`](super::DoorCorridorEnv).
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct DoorCorridorConfig {
    /// Number of cells between the side walls, start and goal included.
    pub corridor_length: usize,

    /// Side length of the agent's view, odd and at least 3.
    pub agent_view_size: usize,

    /// Episodes are truncated after this many steps.
    pub max_steps: usize,
}

impl Default for DoorCorridorConfig {
    fn default() -> Self {
        Self {
            corridor_length: 5,
            agent_view_size: 3,
            max_steps: 270,
        }
    }
}

impl DoorCorridorConfig {
    /// Sets the corridor length.
    pub fn corridor_length(mut self, v: usize) -> Self {
        self.corridor_length = v;
        self
    }

    /// Sets the side length of the agent's view.
    pub fn agent_view_size(mut self, v: usize) -> Self {
        self.agent_view_size = v;
        self
    }

    /// Sets the number of steps after which an episode is truncated.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Width of the grid, the corridor plus the side walls.
    pub fn grid_width(&self) -> usize {
        self.corridor_length + 2
    }

    /// Height of the grid.
    pub fn grid_height(&self) -> usize {
        3
    }

    /// Start cell `(x, y)` of the agent.
    pub fn start_pos(&self) -> (usize, usize) {
        (1, 1)
    }

    /// Goal cell `(x, y)`.
    pub fn goal_pos(&self) -> (usize, usize) {
        (self.grid_width() - 2, 1)
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// [`EnvError::ConfigurationError`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.corridor_length < 1 {
            return Err(EnvError::ConfigurationError(
                "Corridor length must be at least 1".to_string(),
            ));
        }
        if self.agent_view_size < 3 || self.agent_view_size % 2 == 0 {
            return Err(EnvError::ConfigurationError(format!(
                "Agent view size must be odd and at least 3, but get {}",
                self.agent_view_size
            )));
        }
        if self.max_steps == 0 {
            return Err(EnvError::ConfigurationError(
                "Max steps must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Constructs [`DoorCorridorConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`DoorCorridorConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
