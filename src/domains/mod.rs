//! Concrete problems to run the search engines on.

mod eight_puzzle;
mod grid;
mod pancake;
mod pour;
mod route;
mod vacuum;

pub use eight_puzzle::{Board, EightPuzzle, EightPuzzleHeuristic, SOLVED_BOARD};
pub use grid::{GridProblem, Point, DIRECTIONS};
pub use pancake::{PancakeProblem, Stack};
pub use pour::{GreenPourProblem, Jugs, PourAction, PourProblem};
pub use route::{location, Location, RouteMap, RouteProblem};
pub use vacuum::{ErraticVacuum, VacuumAction};

use crate::search::{Report, SearchConfig, SearchEngineName, SearchError};

/// Run `engine` on a fixed mix of problems from every domain. Problems
/// without an inverse are left out for bidirectional engines, and the
/// depth-first engines only get the routes, the other state spaces are too
/// deep for them. The jugs are also left out for the best-first tree search:
/// their zero cost pours loop through more states than its cycle check sees.
pub fn standard_report(
    engine: SearchEngineName,
    config: &SearchConfig,
) -> Result<Report, SearchError> {
    let mut report = Report::new(engine);
    let jugs_fit = !engine.is_bidirectional()
        && !engine.is_depth_first()
        && engine != SearchEngineName::AstarTree;
    if jugs_fit {
        let jugs: [(&[u32], &[u32], u32); 3] = [
            (&[1, 1, 1], &[2, 16, 32], 13),
            (&[0, 0, 0], &[8, 11, 31], 21),
            (&[0, 0], &[7, 9], 8),
        ];
        for (initial, sizes, goal) in jugs {
            report.run(PourProblem::new(initial, sizes, goal)?, config)?;
            report.run(GreenPourProblem::new(initial, sizes, goal)?, config)?;
        }
    }
    for (initial, goal) in [("A", "A"), ("A", "B"), ("N", "L"), ("E", "T"), ("O", "M")] {
        report.run(RouteProblem::romania(initial, goal)?, config)?;
    }
    if !engine.is_depth_first() {
        report.run(EightPuzzle::new([1, 4, 2, 0, 7, 5, 3, 6, 8])?, config)?;
        report.run(PancakeProblem::new(&[2, 1, 4, 6, 3, 5]), config)?;
    }
    Ok(report)
}
