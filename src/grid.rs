use crate::coord::Coord;
use crate::solver::GridSolver;
use core::fmt;
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::ops::Index;
use thiserror::Error;

/// Cell symbol that blocks movement.
pub const WALL: u8 = b'#';

/// Decides whether a position may be entered. Must be total: positions outside
/// whatever space the oracle describes are simply not walkable.
pub trait Walkable {
    fn is_walkable(&self, pos: Coord) -> bool;
}

impl<F> Walkable for F
where
    F: Fn(Coord) -> bool,
{
    fn is_walkable(&self, pos: Coord) -> bool {
        self(pos)
    }
}

/// Errors raised while constructing a [Grid].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Rectangular store of cell symbols, addressed by (x = column, y = row). A cell is walkable
/// unless it holds [WALL]. Connected components over cardinal moves are kept in a [UnionFind];
/// [Grid::find_path] consults them to reject goals on another component without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<u8>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Creates a `width` by `height` grid with every cell set to `fill`.
    pub fn new(width: i32, height: i32, fill: u8) -> Result<Grid> {
        Grid::check_dimensions(width, height)?;
        let n = width as usize * height as usize;
        Ok(Grid::from_cells(width, height, vec![fill; n]))
    }

    /// Builds a grid from text rows, where byte `x` of row `y` is the cell at (x, y).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let (width, height) = (expected as i32, rows.len() as i32);
        Grid::check_dimensions(width, height)?;
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let bytes = line.as_ref().as_bytes();
            if bytes.len() != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found: bytes.len(),
                });
            }
            cells.extend_from_slice(bytes);
        }
        Ok(Grid::from_cells(width, height, cells))
    }

    fn check_dimensions(width: i32, height: i32) -> Result<()> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    fn from_cells(width: i32, height: i32, cells: Vec<u8>) -> Grid {
        let mut grid = Grid {
            width,
            height,
            components: UnionFind::new(cells.len()),
            cells,
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn get_ix(&self, pos: Coord) -> usize {
        debug_assert!(self.in_bounds(pos));
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// The symbol at `pos`, or [None] outside the grid.
    pub fn get(&self, pos: Coord) -> Option<u8> {
        self.in_bounds(pos).then(|| self.cells[self.get_ix(pos)])
    }

    /// Overwrites the symbol at `pos`. Joins newly connected components and flags the components
    /// as dirty if they are (potentially) broken apart into multiple.
    ///
    /// # Panics
    /// If `pos` lies outside the grid.
    pub fn set(&mut self, pos: Coord, symbol: u8) {
        assert!(self.in_bounds(pos), "{pos:?} is outside the grid");
        let ix = self.get_ix(pos);
        let was_walkable = self.cells[ix] != WALL;
        self.cells[ix] = symbol;
        if symbol == WALL {
            if was_walkable {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbours(pos) {
                if self.is_walkable(n) {
                    let n_ix = self.get_ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    pub fn is_walkable(&self, pos: Coord) -> bool {
        self.get(pos).is_some_and(|c| c != WALL)
    }

    /// The in-bounds cardinal neighbours of `pos`. Walkability is not checked.
    pub fn neighbours(&self, pos: Coord) -> SmallVec<[Coord; 4]> {
        let mut neighbours = pos.neumann_neighborhood();
        neighbours.retain(|p| self.in_bounds(*p));
        neighbours
    }

    /// Retrieves the component id a walkable position belongs to.
    pub fn get_component(&self, pos: Coord) -> Option<usize> {
        self.is_walkable(pos).then(|| self.components.find(self.get_ix(pos)))
    }

    /// Checks if start and goal are walkable and on the same component.
    pub fn reachable(&self, start: Coord, goal: Coord) -> bool {
        if self.components_dirty {
            warn!("Reachability queried on dirty components, call update() first");
        }
        if self.is_walkable(start) && self.is_walkable(goal) {
            self.components.equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            false
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: Coord, goal: Coord) -> bool {
        !self.reachable(start, goal)
    }

    /// Computes a path from `start` to `goal` with `solver`, both included. While the components
    /// are up to date, endpoints on different components give an empty path without running the
    /// search. Dirty components are not trusted and the search runs as usual.
    pub fn find_path<S>(&self, solver: &S, start: Coord, goal: Coord) -> Vec<Coord>
    where
        S: GridSolver + ?Sized,
    {
        if !self.components_dirty && self.unreachable(start, goal) {
            debug!("{:?} cannot be reached from {:?}", goal, start);
            return Vec::new();
        }
        solver.get_path_single_goal(self, start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable neighbours to the same
    /// components. Only the right and lower neighbours are visited, which covers every edge once.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Coord::new(x, y);
                if !self.is_walkable(p) {
                    continue;
                }
                let parent_ix = self.get_ix(p);
                for n in [Coord::new(x + 1, y), Coord::new(x, y + 1)] {
                    if self.is_walkable(n) {
                        let ix = self.get_ix(n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl Walkable for Grid {
    fn is_walkable(&self, pos: Coord) -> bool {
        Grid::is_walkable(self, pos)
    }
}

impl Index<Coord> for Grid {
    type Output = u8;

    /// # Panics
    /// If `pos` lies outside the grid.
    fn index(&self, pos: Coord) -> &u8 {
        assert!(self.in_bounds(pos), "{pos:?} is outside the grid");
        &self.cells[self.get_ix(pos)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
