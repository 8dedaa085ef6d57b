//! Egocentric field of view.
use super::{AgentDirection, Cell, Grid};

/// A square window of cells in the agent's own frame.
///
/// Row `0` is the far edge, the agent sits at the bottom-centre cell
/// `(size / 2, size - 1)` and always looks up, whatever its facing in the
/// grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    size: usize,
    cells: Vec<Cell>,
}

impl View {
    /// Extracts the view of an agent at `pos` facing `dir`.
    ///
    /// Cells outside of the grid are [`Cell::UNSEEN`], and so is everything
    /// behind a closed door straight ahead of the agent.
    pub fn extract(grid: &Grid, pos: (usize, usize), dir: AgentDirection, size: usize) -> Self {
        let (top_x, top_y) = Self::origin(pos, dir, size);
        let mut cells = Vec::with_capacity(size * size);
        for j in 0..size as i64 {
            for i in 0..size as i64 {
                cells.push(grid.get(top_x + i, top_y + j).unwrap_or(Cell::UNSEEN));
            }
        }

        let mut view = Self { size, cells };
        for _ in 0..(dir.index() + 1) % 4 {
            view = view.rotate_left();
        }
        view.occlude();
        view
    }

    /// Top-left corner of the window in grid coordinates.
    fn origin(pos: (usize, usize), dir: AgentDirection, size: usize) -> (i64, i64) {
        let (x, y) = (pos.0 as i64, pos.1 as i64);
        let size = size as i64;
        let half = size / 2;
        match dir {
            AgentDirection::Right => (x, y - half),
            AgentDirection::Down => (x - half, y),
            AgentDirection::Left => (x - size + 1, y - half),
            AgentDirection::Up => (x - half, y - size + 1),
        }
    }

    /// Quarter turn anti-clockwise.
    fn rotate_left(&self) -> Self {
        let n = self.size;
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(self.get(n - 1 - row, col));
            }
        }
        Self { size: n, cells }
    }

    // A closed door in the centre column hides every row beyond it.
    fn occlude(&mut self) {
        let centre = self.size / 2;
        for row in (1..self.size - 1).rev() {
            if self.get(centre, row) == Cell::CLOSED_DOOR {
                for cell in self.cells[..row * self.size].iter_mut() {
                    *cell = Cell::UNSEEN;
                }
                break;
            }
        }
    }

    /// Side length of the window.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at column `col` and row `row`.
    ///
    /// # Panics
    ///
    /// If `col` or `row` is not smaller than [`View::size`].
    pub fn get(&self, col: usize, row: usize) -> Cell {
        assert!(col < self.size && row < self.size);
        self.cells[row * self.size + col]
    }

    /// Iterates over the rows, far edge first.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.size)
    }

    /// Object codes in row-major order.
    pub fn object_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.object.code()).collect()
    }

    /// Door state codes in row-major order.
    pub fn state_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.state.code()).collect()
    }

    /// Renders the view as text, one row per line.
    ///
    /// The agent's cell is drawn as `^` since the agent always faces up in its
    /// own frame, `?` marks unseen cells.
    pub fn render(&self) -> String {
        let agent = (self.size / 2, self.size - 1);
        self.rows()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        if (col, row) == agent {
                            AgentDirection::Up.symbol()
                        } else {
                            cell.symbol()
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::door_corridor::ObjectKind::*;

    const U: Cell = Cell::UNSEEN;
    const W: Cell = Cell::open(Wall);
    const A: Cell = Cell::open(Agent);
    const D: Cell = Cell::CLOSED_DOOR;

    fn initial_grid() -> Grid {
        let mut grid = Grid::door_corridor(7, 3, (1, 1), (5, 1));
        grid.set(1, 1, A);
        grid
    }

    fn rows(view: &View) -> Vec<Vec<Cell>> {
        view.rows().map(|r| r.to_vec()).collect()
    }

    // Every cell in the rows above `row` is unseen.
    fn all_unseen_beyond(view: &View, row: usize) -> bool {
        view.rows().take(row).flatten().all(|&c| c == U)
    }

    #[test]
    fn test_view_facing_up() {
        let view = View::extract(&initial_grid(), (1, 1), AgentDirection::Up, 3);
        assert_eq!(rows(&view), vec![vec![U, U, U], vec![W, W, W], vec![W, A, D]]);
    }

    #[test]
    fn test_view_facing_right() {
        let view = View::extract(&initial_grid(), (1, 1), AgentDirection::Right, 3);
        assert_eq!(rows(&view), vec![vec![U, U, U], vec![W, D, W], vec![W, A, W]]);
    }

    #[test]
    fn test_view_facing_down() {
        let view = View::extract(&initial_grid(), (1, 1), AgentDirection::Down, 3);
        assert_eq!(rows(&view), vec![vec![U, U, U], vec![W, W, W], vec![D, A, W]]);
    }

    #[test]
    fn test_view_facing_left() {
        let view = View::extract(&initial_grid(), (1, 1), AgentDirection::Left, 3);
        assert_eq!(rows(&view), vec![vec![U, U, U], vec![W, W, W], vec![W, A, W]]);
    }

    #[test]
    fn test_facings_are_quarter_turns_of_each_other() {
        // An open 5x5 room with distinct objects around the centre.
        let mut grid = Grid::filled(5, 5, Cell::open(Empty));
        grid.set(2, 2, A);
        grid.set(3, 2, Cell::open(Goal)); // right of the agent
        grid.set(2, 3, W); // below
        grid.set(1, 2, Cell::open(Door)); // left
        grid.set(2, 1, Cell::open(Unseen)); // above

        let views = AgentDirection::ALL
            .iter()
            .map(|&d| View::extract(&grid, (2, 2), d, 3))
            .collect::<Vec<_>>();

        // Whatever the facing, the cell ahead is at the top of the centre column.
        assert_eq!(views[AgentDirection::Right.index()].get(1, 1), Cell::open(Goal));
        assert_eq!(views[AgentDirection::Down.index()].get(1, 1), W);
        assert_eq!(views[AgentDirection::Left.index()].get(1, 1), Cell::open(Door));
        assert_eq!(views[AgentDirection::Up.index()].get(1, 1), Cell::open(Unseen));

        // Facing up the goal is at the right end of the agent's row; facing
        // right it is straight ahead.
        assert_eq!(View::origin((2, 2), AgentDirection::Right, 3), (2, 1));
        assert_eq!(views[AgentDirection::Up.index()].get(2, 2), Cell::open(Goal));
        assert_eq!(views[AgentDirection::Down.index()].get(0, 2), Cell::open(Goal));
        for d in AgentDirection::ALL {
            assert_eq!(views[d.index()].get(1, 2), A);
        }
    }

    #[test]
    fn test_closed_door_hides_rows_beyond_it() {
        let mut grid = Grid::filled(3, 5, Cell::open(Goal));
        grid.set(1, 4, A);
        grid.set(1, 2, D);
        let view = View::extract(&grid, (1, 4), AgentDirection::Up, 5);

        // Rows above the door are hidden even where the grid goes on.
        assert_eq!(view.get(2, 3), Cell::open(Goal));
        assert_eq!(view.get(2, 4), A);
        assert_eq!(view.get(2, 2), D);
        assert!(all_unseen_beyond(&view, 2));
    }

    #[test]
    fn test_nearest_closed_door_wins() {
        let mut grid = Grid::filled(1, 5, Cell::open(Empty));
        grid.set(0, 4, A);
        grid.set(0, 3, D);
        grid.set(0, 1, D);
        let view = View::extract(&grid, (0, 4), AgentDirection::Up, 5);
        assert_eq!(view.get(2, 3), D);
        assert!(all_unseen_beyond(&view, 3));
    }

    #[test]
    fn test_open_door_does_not_occlude() {
        let mut grid = Grid::filled(1, 5, Cell::open(Goal));
        grid.set(0, 4, A);
        grid.set(0, 3, Cell::open(Door));
        let view = View::extract(&grid, (0, 4), AgentDirection::Up, 5);
        assert_eq!(view.get(2, 1), Cell::open(Goal));
        assert_eq!(view.get(2, 0), Cell::open(Goal));
    }

    #[test]
    fn test_render_view() {
        let view = View::extract(&initial_grid(), (1, 1), AgentDirection::Right, 3);
        assert_eq!(view.render(), "???\n#D#\n#^#");
    }
}
