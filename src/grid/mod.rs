//! Rectangular 4-connected grid with obstacles.

use crate::errors::GridError;
use crate::geometry::GridPos;
use crate::graph::Graph;

use std::fmt;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use log::debug;


/// Moves in neighbor enumeration order
const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BORDER: &str = " * ";
const BLOCKED: &str = " * ";
const OPEN: &str = "   ";


/// Grid of `width` x `height` cells where x ranges over the width and y over
/// the height. Moving to an adjacent cell costs 1 and the heuristic is the
/// Manhattan distance to the end, which never overestimates.
#[derive(Clone, Debug)]
pub struct GridGraph {
    width: usize,
    height: usize,
    obstacles: FxHashSet<GridPos>,
    start: GridPos,
    end: GridPos,
}

impl GridGraph {

    /// Empty grid from the top left corner to the bottom right one
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            obstacles: FxHashSet::default(),
            start: GridPos::new(0, 0),
            end: GridPos::new(width as i64 - 1, height as i64 - 1),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Block every given cell
    pub fn set_obstacles<I>(&mut self, obstacles: I)
    where
        I: IntoIterator<Item = GridPos>,
    {
        self.obstacles.extend(obstacles);
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &GridPos> {
        self.obstacles.iter()
    }

    pub fn is_obstacle(&self, position: &GridPos) -> bool {
        self.obstacles.contains(position)
    }

    /// Both axes are half open: 0 <= x < width, 0 <= y < height
    pub fn in_bounds(&self, position: &GridPos) -> bool {
        (0..self.width as i64).contains(&position.x) && (0..self.height as i64).contains(&position.y)
    }

    /// Inside the grid and not blocked
    pub fn is_passable(&self, position: &GridPos) -> bool {
        self.in_bounds(position) && !self.is_obstacle(position)
    }

    /// Block `floor(width * height * proportion)` uniformly sampled cells.
    /// Samples may repeat, so fewer distinct cells can end up blocked.
    /// The start and end cells are left open.
    pub fn rand_obstacles<R: Rng + ?Sized>(&mut self, proportion: f64, rng: &mut R) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&proportion) {
            return Err(GridError::InvalidObstacleProportion(proportion));
        }
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let samples = ((self.width * self.height) as f64 * proportion) as usize;
        for _ in 0..samples {
            let cell = GridPos::new(
                rng.random_range(0..self.width as i64),
                rng.random_range(0..self.height as i64),
            );
            if cell != self.start && cell != self.end {
                self.obstacles.insert(cell);
            }
        }

        debug!("grid: {} of {} cells blocked", self.obstacles.len(), self.width * self.height);
        Ok(())
    }

    /// Render the grid with every path cell replaced by its index along the path
    pub fn render_path(&self, path: &[GridPos]) -> String {
        let steps: FxHashMap<GridPos, usize> = path.iter()
            .enumerate()
            .map(|(i, p)| (*p, i))
            .collect();

        self.render(|cell| steps.get(cell).map(|i| format!("{:3}", i % 1000)))
    }

    /// One text row per x, one column per y, framed by a border
    fn render<F>(&self, mark: F) -> String
    where
        F: Fn(&GridPos) -> Option<String>,
    {
        let border = BORDER.repeat(self.height + 2);
        let mut out = String::with_capacity((self.width + 2) * (border.len() + 1));

        out.push_str(&border);
        out.push('\n');
        for x in 0..self.width as i64 {
            out.push_str(BORDER);
            for y in 0..self.height as i64 {
                let cell = GridPos::new(x, y);
                match mark(&cell) {
                    Some(label) => out.push_str(&label),
                    None if self.is_obstacle(&cell) => out.push_str(BLOCKED),
                    None => out.push_str(OPEN),
                }
            }
            out.push_str(BORDER);
            out.push('\n');
        }
        out.push_str(&border);
        out.push('\n');
        out
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_| None))
    }
}

impl Graph for GridGraph {
    type Position = GridPos;
    type Cost = i64;

    fn start(&self) -> GridPos {
        self.start
    }

    fn set_start(&mut self, position: GridPos) {
        self.start = position;
    }

    fn end(&self) -> GridPos {
        self.end
    }

    fn set_end(&mut self, position: GridPos) {
        self.end = position;
    }

    fn is_end(&self, position: &GridPos) -> bool {
        *position == self.end
    }

    fn neighbors(&self, position: &GridPos) -> impl IntoIterator<Item = GridPos> {
        let position = *position;
        DIRECTIONS.into_iter()
            .map(move |(dx, dy)| position.offset(dx, dy))
            .filter(|cell| self.is_passable(cell))
    }

    fn cost(&self, from: &GridPos, to: &GridPos) -> i64 {
        from.manhattan(to)
    }

    fn heuristic(&self, position: &GridPos) -> i64 {
        position.manhattan(&self.end)
    }
}
