//! Door corridor environment.
use super::{
    AgentDirection, Cell, DoorCorridorAct, DoorCorridorConfig, DoorCorridorObs, Grid, ObjectKind,
    View,
};
use anyhow::Result;
use corridor_core::{
    record::{Record, RecordValue},
    Env, Info, Step,
};
use log::{debug, trace};
use std::convert::TryFrom;

const REWARD_PER_STEP: f32 = -1.0;

/// Information in the [`Step`] of [`DoorCorridorEnv`].
#[derive(Debug, Clone, PartialEq)]
pub struct DoorCorridorStepInfo {
    /// The action that was applied.
    pub action: DoorCorridorAct,

    /// Facing of the agent after the action.
    pub direction: AgentDirection,

    /// The observation after the action.
    pub observation: DoorCorridorObs,

    /// Reward of the step.
    pub reward: f32,

    /// `true` if the agent is on the goal.
    pub terminated: bool,

    /// `true` if the step budget is used up.
    pub truncated: bool,
}

impl Info for DoorCorridorStepInfo {}

/// A corridor of closed doors between the start and the goal.
///
/// The agent starts in the left end of the corridor facing up and has to
/// turn right, open each door and walk through it. There is no randomness,
/// the seed given to [`Env::build`] is ignored.
pub struct DoorCorridorEnv {
    config: DoorCorridorConfig,

    grid: Grid,

    agent_pos: (usize, usize),

    agent_dir: AgentDirection,

    // What the agent marker hides, put back when the agent leaves the cell.
    under_agent: Cell,

    step_count: usize,
}

impl DoorCorridorEnv {
    /// The configuration the environment was built with.
    pub fn config(&self) -> &DoorCorridorConfig {
        &self.config
    }

    /// The grid, agent marker included.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Position `(x, y)` of the agent.
    pub fn agent_pos(&self) -> (usize, usize) {
        self.agent_pos
    }

    /// Facing of the agent.
    pub fn agent_dir(&self) -> AgentDirection {
        self.agent_dir
    }

    /// Number of steps taken in the current episode.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Current observation.
    pub fn observation(&self) -> DoorCorridorObs {
        DoorCorridorObs {
            image: View::extract(
                &self.grid,
                self.agent_pos,
                self.agent_dir,
                self.config.agent_view_size,
            ),
            direction: self.agent_dir,
        }
    }

    /// Steps with an action given by its index in `0..4`.
    ///
    /// An unknown index fails with
    /// [`EnvError::InvalidAction`](corridor_core::error::EnvError::InvalidAction)
    /// and leaves the environment untouched.
    pub fn step_index(&mut self, ix: i64) -> Result<(Step<Self>, Record)> {
        let act = DoorCorridorAct::try_from(ix)?;
        Ok(self.step(&act))
    }

    /// Renders the whole grid as text, one row per line.
    ///
    /// `#` wall, `D` closed door, `/` open door, `G` goal, and the agent as an
    /// arrow pointing to its facing.
    ///
    /// ```
    /// use corridor_core::Env as _;
    /// use corridor_grid_env::{DoorCorridorConfig, DoorCorridorEnv};
    ///
    /// let env = DoorCorridorEnv::build(&DoorCorridorConfig::default(), 0).unwrap();
    /// assert_eq!(env.render(), "#######\n#^DDDG#\n#######");
    /// ```
    pub fn render(&self) -> String {
        self.grid
            .rows()
            .enumerate()
            .map(|(y, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        if (x, y) == self.agent_pos {
                            self.agent_dir.symbol()
                        } else {
                            cell.symbol()
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders what the agent sees, see [`View::render`].
    pub fn render_view(&self) -> String {
        self.observation().image.render()
    }

    // Fresh grid with the agent on the start cell, and what the agent hides.
    fn gen_grid(config: &DoorCorridorConfig) -> (Grid, Cell) {
        let start = config.start_pos();
        let mut grid = Grid::door_corridor(
            config.grid_width(),
            config.grid_height(),
            start,
            config.goal_pos(),
        );
        let under_agent = grid
            .get(start.0 as i64, start.1 as i64)
            .unwrap_or(Cell::open(ObjectKind::Empty));
        grid.set(start.0, start.1, Cell::open(ObjectKind::Agent));
        (grid, under_agent)
    }

    fn in_front_of_agent(&self) -> (i64, i64) {
        let (dx, dy) = self.agent_dir.forward();
        (self.agent_pos.0 as i64 + dx, self.agent_pos.1 as i64 + dy)
    }

    fn move_forward(&mut self) {
        let (x, y) = self.in_front_of_agent();
        let target = match self.grid.get(x, y) {
            Some(cell) if cell.is_passable() => cell,
            _ => return,
        };

        let (x_old, y_old) = self.agent_pos;
        self.grid.set(x_old, y_old, self.under_agent);
        self.under_agent = target;
        let (x, y) = (x as usize, y as usize);
        self.grid.set(x, y, Cell::open(ObjectKind::Agent));
        self.agent_pos = (x, y);
    }

    fn toggle(&mut self) {
        let (x, y) = self.in_front_of_agent();
        if let Some(cell) = self.grid.get(x, y) {
            if cell.object == ObjectKind::Door {
                let toggled = Cell {
                    state: cell.state.toggle(),
                    ..cell
                };
                self.grid.set(x as usize, y as usize, toggled);
            }
        }
    }
}

impl Env for DoorCorridorEnv {
    type Config = DoorCorridorConfig;
    type Obs = DoorCorridorObs;
    type Act = DoorCorridorAct;
    type Info = DoorCorridorStepInfo;
    type ResetInfo = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        config.validate()?;
        debug!("Build door corridor with {:?}", config);

        let (grid, under_agent) = Self::gen_grid(config);
        Ok(Self {
            config: config.clone(),
            grid,
            agent_pos: config.start_pos(),
            agent_dir: AgentDirection::Up,
            under_agent,
            step_count: 0,
        })
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<(Self::Obs, Self::ResetInfo)> {
        let (grid, under_agent) = Self::gen_grid(&self.config);
        self.grid = grid;
        self.under_agent = under_agent;
        self.agent_pos = self.config.start_pos();
        self.agent_dir = AgentDirection::Up;
        self.step_count = 0;
        debug!("Reset door corridor");
        Ok((self.observation(), ()))
    }

    fn step(&mut self, act: &Self::Act) -> (Step<Self>, Record) {
        self.step_count += 1;

        match act {
            DoorCorridorAct::TurnLeft => self.agent_dir = self.agent_dir.turn_left(),
            DoorCorridorAct::TurnRight => self.agent_dir = self.agent_dir.turn_right(),
            DoorCorridorAct::MoveForward => self.move_forward(),
            DoorCorridorAct::Toggle => self.toggle(),
        }

        let obs = self.observation();
        let terminated = self.agent_pos == self.config.goal_pos();
        let truncated = self.step_count >= self.config.max_steps;
        let reward = REWARD_PER_STEP;
        trace!(
            "act = {}, agent_pos = {:?}, agent_dir = {:?}, terminated = {}, truncated = {}",
            act,
            self.agent_pos,
            self.agent_dir,
            terminated,
            truncated
        );

        let size = obs.image.size();
        let mut record = Record::empty();
        record.insert("agent_x", RecordValue::Scalar(self.agent_pos.0 as f32));
        record.insert("agent_y", RecordValue::Scalar(self.agent_pos.1 as f32));
        record.insert("direction", RecordValue::Scalar(self.agent_dir.index() as f32));
        record.insert("action", RecordValue::String(act.name().to_string()));
        record.insert(
            "view",
            RecordValue::Array2(
                obs.image.object_codes().into_iter().map(|c| c as f32).collect(),
                [size, size],
            ),
        );
        record.insert(
            "view_state",
            RecordValue::Array2(
                obs.image.state_codes().into_iter().map(|c| c as f32).collect(),
                [size, size],
            ),
        );

        let info = DoorCorridorStepInfo {
            action: *act,
            direction: self.agent_dir,
            observation: obs.clone(),
            reward,
            terminated,
            truncated,
        };
        let step = Step::new(obs, *act, reward, terminated, truncated, info);

        (step, record)
    }
}
