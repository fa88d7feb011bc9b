mod and_or;
mod best_first;
mod bfs;
mod bidirectional;
mod depth_limited;

pub use and_or::{and_or_search, Plan};
pub use best_first::{
    astar_search, astar_search_with, astar_tree_search, best_first_search,
    best_first_search_with_reached, best_first_tree_search, best_first_tree_search_with_lookback,
    breadth_first_bfs, depth_first_bfs, greedy_bfs, greedy_bfs_with, uniform_cost_search,
    weighted_astar_search, SearchOutcome, DEFAULT_HEURISTIC_WEIGHT,
};
pub use bfs::breadth_first_search;
pub use bidirectional::{
    bidirectional_astar_search, bidirectional_best_first_search,
    bidirectional_uniform_cost_search, frontiers_exceed_solution, join_nodes, Direction,
};
pub use depth_limited::{
    depth_first_recursive_search, depth_limited_search, depth_limited_search_with_lookback,
    iterative_deepening_search, iterative_deepening_search_with_lookback, DEFAULT_DEPTH_LIMIT,
    WHOLE_PATH,
};

use crate::search::{Problem, SearchConfig, SearchError, SearchResult};
use strum_macros::{Display, EnumIter};

/// Every deterministic search algorithm, selectable by name.
#[derive(clap::ValueEnum, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchEngineName {
    #[strum(serialize = "breadth_first_search")]
    BreadthFirst,
    BreadthFirstBfs,
    DepthFirstBfs,
    #[strum(serialize = "uniform_cost_search")]
    UniformCost,
    #[strum(serialize = "astar_search")]
    Astar,
    #[strum(serialize = "astar_tree_search")]
    AstarTree,
    #[strum(serialize = "weighted_astar_search")]
    WeightedAstar,
    #[strum(serialize = "greedy_bfs")]
    Greedy,
    #[strum(serialize = "depth_limited_search")]
    DepthLimited,
    #[strum(serialize = "iterative_deepening_search")]
    IterativeDeepening,
    #[strum(serialize = "depth_first_recursive_search")]
    DepthFirstRecursive,
    #[strum(serialize = "bidirectional_uniform_cost_search")]
    BidirectionalUniformCost,
    #[strum(serialize = "bidirectional_astar_search")]
    BidirectionalAstar,
}

impl SearchEngineName {
    pub fn is_bidirectional(&self) -> bool {
        matches!(
            self,
            SearchEngineName::BidirectionalUniformCost | SearchEngineName::BidirectionalAstar
        )
    }

    /// Whether the engine dives without a reached table or a growing bound,
    /// which only suits shallow or small state spaces.
    pub fn is_depth_first(&self) -> bool {
        matches!(
            self,
            SearchEngineName::DepthLimited | SearchEngineName::DepthFirstRecursive
        )
    }

    /// Run the named algorithm on `problem`. Fails only if a bidirectional
    /// algorithm is asked to search a problem that has no inverse.
    pub fn search<P: Problem>(
        &self,
        problem: &P,
        config: &SearchConfig,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        let result = match self {
            SearchEngineName::BreadthFirst => breadth_first_search(problem),
            SearchEngineName::BreadthFirstBfs => breadth_first_bfs(problem),
            SearchEngineName::DepthFirstBfs => depth_first_bfs(problem),
            SearchEngineName::UniformCost => uniform_cost_search(problem),
            SearchEngineName::Astar => astar_search(problem),
            SearchEngineName::AstarTree => best_first_tree_search_with_lookback(
                problem,
                |node| node.path_cost() + problem.h(node),
                config.cycle_lookback,
            ),
            SearchEngineName::WeightedAstar => weighted_astar_search(problem, config.weight),
            SearchEngineName::Greedy => greedy_bfs(problem),
            SearchEngineName::DepthLimited => depth_limited_search(problem, config.depth_limit),
            SearchEngineName::IterativeDeepening => iterative_deepening_search(problem),
            SearchEngineName::DepthFirstRecursive => depth_first_recursive_search(problem),
            SearchEngineName::BidirectionalUniformCost => {
                bidirectional_uniform_cost_search(problem, &inverse_of(problem, self)?)
            }
            SearchEngineName::BidirectionalAstar => {
                bidirectional_astar_search(problem, &inverse_of(problem, self)?)
            }
        };
        Ok(result)
    }
}

fn inverse_of<P: Problem>(problem: &P, engine: &SearchEngineName) -> Result<P, SearchError> {
    problem
        .inverse()
        .ok_or_else(|| SearchError::NotInvertible(engine.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::{EightPuzzle, PourProblem};
    use crate::test_utils::*;
    use clap::ValueEnum;
    use strum::IntoEnumIterator;

    #[test]
    fn every_engine_solves_a_route() {
        let problem = romania_problem("A", "B");
        let config = SearchConfig::default();
        for engine in SearchEngineName::iter() {
            let result = engine.search(&problem, &config).unwrap();
            assert!(result.is_found(), "{engine}");
            assert_valid_solution(&problem, &result);
        }
    }

    #[test]
    fn optimal_engines_agree_on_cost() {
        let problem = EightPuzzle::new([1, 4, 2, 0, 7, 5, 3, 6, 8]).unwrap();
        let config = SearchConfig::default();
        for engine in [
            SearchEngineName::BreadthFirst,
            SearchEngineName::UniformCost,
            SearchEngineName::Astar,
            SearchEngineName::AstarTree,
            SearchEngineName::IterativeDeepening,
            SearchEngineName::BidirectionalUniformCost,
            SearchEngineName::BidirectionalAstar,
        ] {
            assert_eq!(
                engine.search(&problem, &config).unwrap().path_cost(),
                5.,
                "{engine}"
            );
        }
    }

    #[test]
    fn bidirectional_needs_an_inverse() {
        let problem = PourProblem::new(&[1, 1, 1], &[2, 4, 9], 7).unwrap();
        let config = SearchConfig::default();
        let error = SearchEngineName::BidirectionalAstar
            .search(&problem, &config)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "bidirectional_astar_search needs a problem with an inverse"
        );
        assert!(SearchEngineName::Astar.search(&problem, &config).is_ok());
    }

    #[test]
    fn config_reaches_the_engines() {
        let problem = romania_problem("A", "B");
        let config = SearchConfig {
            depth_limit: 2,
            ..SearchConfig::default()
        };
        let result = SearchEngineName::DepthLimited.search(&problem, &config).unwrap();
        assert!(result.is_cutoff());

        // the lookback only narrows the tree search, deepening still ends
        let config = SearchConfig {
            cycle_lookback: 2,
            ..SearchConfig::default()
        };
        let ring = ring_problem(40);
        for engine in [
            SearchEngineName::IterativeDeepening,
            SearchEngineName::DepthFirstRecursive,
        ] {
            assert!(engine.search(&ring, &config).unwrap().is_failure(), "{engine}");
        }
    }

    #[test]
    fn names() {
        assert_eq!(SearchEngineName::Astar.to_string(), "astar_search");
        assert_eq!(SearchEngineName::BreadthFirstBfs.to_string(), "breadth_first_bfs");
        assert_eq!(
            SearchEngineName::from_str("bidirectional-astar", true),
            Ok(SearchEngineName::BidirectionalAstar)
        );
    }
}
