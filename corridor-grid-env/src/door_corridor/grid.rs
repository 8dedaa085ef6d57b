//! Cells and the grid of [`DoorCorridorEnv`](super::DoorCorridorEnv).
use serde::{Deserialize, Serialize};

/// Kind of object in a cell.
///
/// The discriminants are the codes used in observations and records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Outside of the grid or hidden behind a closed door.
    Unseen = 0,
    /// Floor.
    Empty = 1,
    /// Wall.
    Wall = 2,
    /// Door, open or closed.
    Door = 3,
    /// The agent.
    Agent = 4,
    /// The goal.
    Goal = 5,
}

impl ObjectKind {
    /// Numeric code of the object.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// State of a door. Cells other than doors are [`DoorState::Open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorState {
    /// Open.
    Open = 0,
    /// Closed.
    Closed = 1,
}

impl DoorState {
    /// The other state.
    pub fn toggle(&self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Numeric code of the state.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Content of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// What is in the cell.
    pub object: ObjectKind,
    /// Door state, meaningful for [`ObjectKind::Door`] only.
    pub state: DoorState,
}

impl Cell {
    /// A cell the agent cannot see.
    pub const UNSEEN: Cell = Cell::open(ObjectKind::Unseen);

    /// A closed door.
    pub const CLOSED_DOOR: Cell = Cell {
        object: ObjectKind::Door,
        state: DoorState::Closed,
    };

    /// A cell holding `object` in the open state.
    pub const fn open(object: ObjectKind) -> Self {
        Self {
            object,
            state: DoorState::Open,
        }
    }

    /// `true` if the agent can step into the cell.
    pub fn is_passable(&self) -> bool {
        self.state == DoorState::Open && self.object != ObjectKind::Wall
    }

    /// Single character used by the text renderers.
    pub(super) fn symbol(&self) -> char {
        match (self.object, self.state) {
            (ObjectKind::Unseen, _) => '?',
            (ObjectKind::Empty, _) => ' ',
            (ObjectKind::Wall, _) => '#',
            (ObjectKind::Door, DoorState::Closed) => 'D',
            (ObjectKind::Door, DoorState::Open) => '/',
            (ObjectKind::Agent, _) => 'A',
            (ObjectKind::Goal, _) => 'G',
        }
    }
}

/// Facing of the agent. The order is clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentDirection {
    /// Towards increasing `x`, index `0`.
    Right = 0,
    /// Towards increasing `y`, index `1`.
    Down = 1,
    /// Towards decreasing `x`, index `2`.
    Left = 2,
    /// Towards decreasing `y`, index `3`.
    Up = 3,
}

impl AgentDirection {
    /// All directions, ordered by index.
    pub const ALL: [AgentDirection; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Index of the direction in the 4-cycle.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Direction after a quarter turn anti-clockwise.
    pub fn turn_left(&self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Direction after a quarter turn clockwise.
    pub fn turn_right(&self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// `(dx, dy)` of one step forward.
    pub fn forward(&self) -> (i64, i64) {
        match self {
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
        }
    }

    /// Arrow drawn for the agent by the text renderers.
    pub(super) fn symbol(&self) -> char {
        match self {
            Self::Right => '>',
            Self::Down => 'v',
            Self::Left => '<',
            Self::Up => '^',
        }
    }
}

/// A rectangular grid of cells, indexed by `(x, y)` with `y` growing downwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid filled with `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// The door corridor layout.
    ///
    /// Walls on the border, a closed door in every cell of row 1 between
    /// `start` and `goal`, the goal at `goal`. The agent is not placed.
    pub fn door_corridor(width: usize, height: usize, start: (usize, usize), goal: (usize, usize)) -> Self {
        let mut grid = Self::filled(width, height, Cell::open(ObjectKind::Empty));

        for x in 0..width {
            grid.set(x, 0, Cell::open(ObjectKind::Wall));
            grid.set(x, height - 1, Cell::open(ObjectKind::Wall));
        }
        for y in 0..height {
            grid.set(0, y, Cell::open(ObjectKind::Wall));
            grid.set(width - 1, y, Cell::open(ObjectKind::Wall));
        }
        for x in (start.0 + 1)..goal.0 {
            grid.set(x, start.1, Cell::CLOSED_DOOR);
        }
        grid.set(goal.0, goal.1, Cell::open(ObjectKind::Goal));

        grid
    }

    /// Width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if `(x, y)` is inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        0 <= x && x < self.width as i64 && 0 <= y && y < self.height as i64
    }

    /// The cell at `(x, y)`, `None` outside of the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        if self.contains(x, y) {
            Some(self.cells[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Overwrites the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is outside of the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(x < self.width && y < self.height, "({}, {}) is outside of the grid", x, y);
        self.cells[y * self.width + x] = cell;
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_cycle() {
        use AgentDirection::*;
        assert_eq!(Up.turn_right(), Right);
        assert_eq!(Right.turn_right(), Down);
        assert_eq!(Up.turn_left(), Left);
        assert_eq!(Right.turn_left(), Up);
        for d in AgentDirection::ALL {
            assert_eq!(d.turn_left().turn_right(), d);
            assert_eq!(d.turn_right().turn_right().turn_right().turn_right(), d);
        }
    }

    #[test]
    fn test_door_toggle() {
        assert_eq!(DoorState::Open.toggle(), DoorState::Closed);
        assert_eq!(DoorState::Closed.toggle().toggle(), DoorState::Closed);
    }

    #[test]
    fn test_passable_cells() {
        assert!(Cell::open(ObjectKind::Empty).is_passable());
        assert!(Cell::open(ObjectKind::Goal).is_passable());
        assert!(Cell::open(ObjectKind::Door).is_passable());
        assert!(!Cell::CLOSED_DOOR.is_passable());
        assert!(!Cell::open(ObjectKind::Wall).is_passable());
    }

    #[test]
    fn test_door_corridor_layout() {
        let grid = Grid::door_corridor(7, 3, (1, 1), (5, 1));
        let wall = Cell::open(ObjectKind::Wall);

        for x in 0..7 {
            assert_eq!(grid.get(x, 0), Some(wall));
            assert_eq!(grid.get(x, 2), Some(wall));
        }
        assert_eq!(grid.get(0, 1), Some(wall));
        assert_eq!(grid.get(6, 1), Some(wall));
        assert_eq!(grid.get(1, 1), Some(Cell::open(ObjectKind::Empty)));
        for x in 2..5 {
            assert_eq!(grid.get(x, 1), Some(Cell::CLOSED_DOOR));
        }
        assert_eq!(grid.get(5, 1), Some(Cell::open(ObjectKind::Goal)));
        assert_eq!(grid.get(-1, 1), None);
        assert_eq!(grid.get(7, 1), None);
    }
}
