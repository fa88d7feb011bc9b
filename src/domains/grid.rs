use crate::search::{Node, Problem};
use std::collections::HashSet;
use std::fmt::{self, Display};

pub type Point = (i32, i32);

/// The eight compass directions: the four straight ones, then the diagonals.
pub const DIRECTIONS: [Point; 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

fn straight_line_distance(a: &Point, b: &Point) -> f64 {
    f64::from(a.0 - b.0).hypot(f64::from(a.1 - b.1))
}

/// Find a path on an unbounded grid, moving one cell in any of the eight
/// directions at a time and avoiding obstacle cells. An action is the cell
/// moved to; moves cost their length, so diagonals cost `sqrt(2)`.
#[derive(Debug, Clone)]
pub struct GridProblem {
    initial: Point,
    goal: Point,
    obstacles: HashSet<Point>,
}

impl GridProblem {
    pub fn new(initial: Point, goal: Point, obstacles: impl IntoIterator<Item = Point>) -> Self {
        Self {
            initial,
            goal,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Grid of `width` by `height` cells, walled in so that no search can
    /// leave it.
    pub fn bordered(
        width: i32,
        height: i32,
        initial: Point,
        goal: Point,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Self {
        let mut problem = Self::new(initial, goal, obstacles);
        for x in -1..=width {
            problem.obstacles.insert((x, -1));
            problem.obstacles.insert((x, height));
        }
        for y in 0..height {
            problem.obstacles.insert((-1, y));
            problem.obstacles.insert((width, y));
        }
        problem
    }

    pub fn is_obstacle(&self, point: &Point) -> bool {
        self.obstacles.contains(point)
    }
}

impl Problem for GridProblem {
    type State = Point;
    type Action = Point;

    fn initial(&self) -> &Point {
        &self.initial
    }

    fn goal(&self) -> Option<&Point> {
        Some(&self.goal)
    }

    fn actions(&self, state: &Point) -> Vec<Point> {
        DIRECTIONS
            .iter()
            .map(|(dx, dy)| (state.0 + dx, state.1 + dy))
            .filter(|point| !self.is_obstacle(point))
            .collect()
    }

    fn result(&self, _state: &Point, action: &Point) -> Point {
        *action
    }

    fn action_cost(&self, state: &Point, _action: &Point, next_state: &Point) -> f64 {
        straight_line_distance(state, next_state)
    }

    fn h(&self, node: &Node<Point, Point>) -> f64 {
        straight_line_distance(node.state(), &self.goal)
    }

    fn action_to(&self, state: &Point, target: &Point) -> Option<Point> {
        let step = (target.0 - state.0, target.1 - state.1);
        (DIRECTIONS.contains(&step) && !self.is_obstacle(target)).then_some(*target)
    }

    fn inverse(&self) -> Option<Self> {
        Some(Self {
            initial: self.goal,
            goal: self.initial,
            obstacles: self.obstacles.clone(),
        })
    }
}

impl Display for GridProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridProblem({:?}, {:?})", self.initial, self.goal)
    }
}
