//! Configuration of [`SpecialStateCorridorEnv`](super::SpecialStateCorridorEnv).
use crate::CorridorGeometry;
use anyhow::Result;
use corridor_core::error::EnvError;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`SpecialStateCorridorEnv`](super::SpecialStateCorridorEnv).
///
/// The default is the small corridor: 4 cells, start at 0, goal at 3 and one
/// special state at 1. Without an explicit goal the goal is the last cell,
/// whatever the length.
///
/// ```
/// use corridor_grid_env::{CorridorGeometry, SpecialStateCorridorConfig};
///
/// let config = SpecialStateCorridorConfig::default()
///     .corridor_length(6)
///     .start_state(Some(4))
///     .goal_state(1)
///     .special_states(vec![2, 4])
///     .geometry(CorridorGeometry::Circular);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct SpecialStateCorridorConfig {
    /// Number of cells, at least 2.
    pub corridor_length: usize,

    /// Start cell. `None` draws a uniformly random cell at every reset.
    pub start_state: Option<usize>,

    /// Goal cell. `None` is the last cell, see
    /// [`SpecialStateCorridorConfig::goal`].
    pub goal_state: Option<usize>,

    /// Cells where left and right are swapped.
    pub special_states: Vec<usize>,

    /// Episodes are truncated after this many steps.
    pub truncate_tolerance: usize,

    /// Linear or circular corridor.
    pub geometry: CorridorGeometry,
}

impl Default for SpecialStateCorridorConfig {
    fn default() -> Self {
        Self {
            corridor_length: 4,
            start_state: Some(0),
            goal_state: None,
            special_states: vec![1],
            truncate_tolerance: 50,
            geometry: CorridorGeometry::Linear,
        }
    }
}

impl SpecialStateCorridorConfig {
    /// The small linear corridor, same as [`Default::default`].
    pub fn small() -> Self {
        Self::default()
    }

    /// The small corridor bent into a ring.
    pub fn circular() -> Self {
        Self::default().geometry(CorridorGeometry::Circular)
    }

    /// Sets the number of cells.
    pub fn corridor_length(mut self, v: usize) -> Self {
        self.corridor_length = v;
        self
    }

    /// Sets the start cell, `None` for a random start.
    pub fn start_state(mut self, v: Option<usize>) -> Self {
        self.start_state = v;
        self
    }

    /// Sets the goal cell.
    pub fn goal_state(mut self, v: usize) -> Self {
        self.goal_state = Some(v);
        self
    }

    /// Sets the special states.
    pub fn special_states(mut self, v: Vec<usize>) -> Self {
        self.special_states = v;
        self
    }

    /// Sets the number of steps after which an episode is truncated.
    pub fn truncate_tolerance(mut self, v: usize) -> Self {
        self.truncate_tolerance = v;
        self
    }

    /// Sets the geometry.
    pub fn geometry(mut self, v: CorridorGeometry) -> Self {
        self.geometry = v;
        self
    }

    /// The goal cell, the last cell of the corridor unless set.
    pub fn goal(&self) -> usize {
        self.goal_state
            .unwrap_or_else(|| self.corridor_length.saturating_sub(1))
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// [`EnvError::ConfigurationError`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), EnvError> {
        let err = |msg: String| Err(EnvError::ConfigurationError(msg));
        let length = self.corridor_length;

        if length < 2 {
            return err("Corridor length must be at least 2 (a start and a goal)".into());
        }
        if let Some(start) = self.start_state {
            if start >= length {
                return err(format!(
                    "Start state must be within the corridor, but get {}",
                    start
                ));
            }
        }
        let goal = self.goal();
        if goal >= length {
            return err(format!(
                "Goal state must be within the corridor, but get {}",
                goal
            ));
        }
        if self.start_state == Some(goal) {
            return err("Goal state must be different from start state".into());
        }
        if let Some(s) = self.special_states.iter().find(|&&s| s >= length) {
            return err(format!(
                "Special state must be within the corridor, but get {}",
                s
            ));
        }
        if self.truncate_tolerance == 0 {
            return err("Truncate tolerance must be positive".into());
        }

        Ok(())
    }

    /// Constructs [`SpecialStateCorridorConfig`] from YAML file.
    ///
    /// Missing fields take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`SpecialStateCorridorConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
