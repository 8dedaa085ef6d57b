//! Special-state corridor environment.
use super::{CorridorAct, CorridorObs, SpecialStateCorridorConfig};
use anyhow::Result;
use corridor_core::{
    record::{Record, RecordValue},
    Env, Info, Step,
};
use log::{debug, trace};
use std::convert::TryFrom;

/// Reward given at every step, including the one reaching the goal.
const REWARD_PER_STEP: f32 = -1.0;

/// Information returned by [`SpecialStateCorridorEnv::reset`](Env::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorridorResetInfo {
    /// Start position of the new episode.
    pub agent_location: usize,

    /// Goal position.
    pub goal: usize,

    /// Distance from the start to the goal.
    pub distance_to_goal: usize,
}

impl Info for CorridorResetInfo {}

/// Information in the [`Step`] of [`SpecialStateCorridorEnv`].
///
/// Holds everything needed to replay the transition.
#[derive(Debug, Clone, PartialEq)]
pub struct CorridorStepInfo {
    /// The action that was applied.
    pub action: CorridorAct,

    /// The observation after the action.
    pub observation: CorridorObs,

    /// Reward of the step.
    pub reward: f32,

    /// `true` if the agent is at the goal.
    pub terminated: bool,

    /// `true` if the step budget is used up.
    pub truncated: bool,

    /// Distance from the new position to the goal.
    pub distance_to_goal: usize,
}

impl Info for CorridorStepInfo {}

/// A one dimensional corridor with special states.
///
/// In a special state the actions are swapped: `Left` moves the agent to the
/// right and vice versa. Whether the corridor has walls at its ends or is a
/// ring is decided by [`CorridorGeometry`](crate::CorridorGeometry).
///
/// The environment is usable right after [`Env::build`], which starts the
/// first episode.
pub struct SpecialStateCorridorEnv {
    config: SpecialStateCorridorConfig,

    // Source of random start positions, seeded in `build`.
    rng: fastrand::Rng,

    // Start position of the current episode, for rendering.
    curr_start_state: usize,

    agent_location: usize,

    step_counter: usize,
}

impl SpecialStateCorridorEnv {
    /// The configuration the environment was built with.
    pub fn config(&self) -> &SpecialStateCorridorConfig {
        &self.config
    }

    /// Current position of the agent.
    pub fn agent_location(&self) -> usize {
        self.agent_location
    }

    /// Start position of the current episode.
    pub fn episode_start_state(&self) -> usize {
        self.curr_start_state
    }

    /// Number of steps taken in the current episode.
    pub fn step_count(&self) -> usize {
        self.step_counter
    }

    /// Distance from the agent to the goal under the configured geometry.
    pub fn distance_to_goal(&self) -> usize {
        self.config.geometry.distance(
            self.agent_location,
            self.config.goal(),
            self.config.corridor_length,
        )
    }

    /// Current observation.
    pub fn observation(&self) -> CorridorObs {
        CorridorObs::encode(
            self.config.geometry,
            self.agent_location,
            self.config.corridor_length,
        )
    }

    /// Steps with an action given as a one-letter token, `"L"` or `"R"`.
    ///
    /// An unknown token fails with
    /// [`EnvError::InvalidAction`](corridor_core::error::EnvError::InvalidAction)
    /// and leaves the environment untouched.
    pub fn step_token(&mut self, token: &str) -> Result<(Step<Self>, Record)> {
        let act: CorridorAct = token.parse()?;
        Ok(self.step(&act))
    }

    /// Steps with an action given by its index, `0` (left) or `1` (right).
    pub fn step_index(&mut self, ix: i64) -> Result<(Step<Self>, Record)> {
        let act = CorridorAct::try_from(ix)?;
        Ok(self.step(&act))
    }

    /// Renders the corridor as text.
    ///
    /// One character per cell, joined by `|` and wrapped in brackets. The
    /// agent is `*`, the start of the episode `S`, the goal `G` and a special
    /// state `^`, in increasing order of priority up to the agent.
    ///
    /// ```
    /// use corridor_core::Env as _;
    /// use corridor_grid_env::{SpecialStateCorridorConfig, SpecialStateCorridorEnv};
    ///
    /// let config = SpecialStateCorridorConfig::default()
    ///     .corridor_length(6)
    ///     .start_state(Some(4))
    ///     .goal_state(1)
    ///     .special_states(vec![2, 4]);
    /// let env = SpecialStateCorridorEnv::build(&config, 0).unwrap();
    /// assert_eq!(env.render(), "[ |G|^| |*| ]");
    /// ```
    pub fn render(&self) -> String {
        let mut cells = vec![' '; self.config.corridor_length];
        cells[self.curr_start_state] = 'S';
        cells[self.config.goal()] = 'G';
        for &s in self.config.special_states.iter() {
            cells[s] = '^';
        }
        cells[self.agent_location] = '*';

        let cells = cells.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        format!("[{}]", cells.join("|"))
    }

    fn draw_start_state(&mut self, seed: Option<u64>) -> usize {
        match (self.config.start_state, seed) {
            (Some(start), _) => start,
            (None, Some(seed)) => fastrand::Rng::with_seed(seed).usize(..self.config.corridor_length),
            (None, None) => self.rng.usize(..self.config.corridor_length),
        }
    }

    fn movement(&self, act: &CorridorAct) -> i64 {
        let delta = act.nominal_delta();
        if self.config.special_states.contains(&self.agent_location) {
            -delta
        } else {
            delta
        }
    }

    fn reset_info(&self) -> CorridorResetInfo {
        CorridorResetInfo {
            agent_location: self.agent_location,
            goal: self.config.goal(),
            distance_to_goal: self.distance_to_goal(),
        }
    }
}

impl Env for SpecialStateCorridorEnv {
    type Config = SpecialStateCorridorConfig;
    type Obs = CorridorObs;
    type Act = CorridorAct;
    type Info = CorridorStepInfo;
    type ResetInfo = CorridorResetInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        config.validate()?;
        debug!("Build special-state corridor with {:?}, seed = {}", config, seed);

        let mut env = Self {
            config: config.clone(),
            rng: fastrand::Rng::with_seed(seed as u64),
            curr_start_state: 0,
            agent_location: 0,
            step_counter: 0,
        };
        env.reset(None)?;
        Ok(env)
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(Self::Obs, Self::ResetInfo)> {
        self.agent_location = self.draw_start_state(seed);
        self.curr_start_state = self.agent_location;
        self.step_counter = 0;
        debug!(
            "Reset special-state corridor, start = {}, goal = {}",
            self.agent_location, self.config.goal()
        );

        Ok((self.observation(), self.reset_info()))
    }

    fn step(&mut self, act: &Self::Act) -> (Step<Self>, Record) {
        let delta = self.movement(act);
        self.agent_location =
            self.config
                .geometry
                .move_by(self.agent_location, delta, self.config.corridor_length);

        let terminated = self.agent_location == self.config.goal();
        self.step_counter += 1;
        let truncated = self.step_counter >= self.config.truncate_tolerance;
        let reward = REWARD_PER_STEP;

        let obs = self.observation();
        let distance_to_goal = self.distance_to_goal();
        trace!(
            "act = {}, agent_location = {}, terminated = {}, truncated = {}",
            act,
            self.agent_location,
            terminated,
            truncated
        );

        let mut record = Record::empty();
        record.insert("agent_location", RecordValue::Scalar(self.agent_location as f32));
        record.insert("distance_to_goal", RecordValue::Scalar(distance_to_goal as f32));
        record.insert("wall_status", obs.wall_status_record());
        record.insert("action", RecordValue::String(act.as_token().to_string()));

        let info = CorridorStepInfo {
            action: *act,
            observation: obs,
            reward,
            terminated,
            truncated,
            distance_to_goal,
        };
        let step = Step::new(obs, *act, reward, terminated, truncated, info);

        (step, record)
    }
}
