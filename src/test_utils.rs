use crate::domains::{Location, RouteMap, RouteProblem};
use crate::search::{Node, Problem, SearchResult};
use std::sync::Arc;

pub use crate::domains::location;

pub fn romania_problem(initial: &str, goal: &str) -> RouteProblem {
    RouteProblem::romania(initial, goal).unwrap()
}

/// Romania with every road counting as a single step.
#[derive(Debug, Clone)]
pub struct UnitCostRouteProblem(RouteProblem);

impl Problem for UnitCostRouteProblem {
    type State = Location;
    type Action = Location;

    fn initial(&self) -> &Location {
        self.0.initial()
    }

    fn goal(&self) -> Option<&Location> {
        self.0.goal()
    }

    fn actions(&self, state: &Location) -> Vec<Location> {
        self.0.actions(state)
    }

    fn result(&self, state: &Location, action: &Location) -> Location {
        self.0.result(state, action)
    }

    fn h(&self, _node: &Node<Location, Location>) -> f64 {
        0.
    }
}

pub fn unit_cost_romania_problem(initial: &str, goal: &str) -> UnitCostRouteProblem {
    UnitCostRouteProblem(romania_problem(initial, goal))
}

/// Two separate roads, X-Y and Z-W, searched from X to Z.
pub fn disconnected_problem() -> RouteProblem {
    let map = RouteMap::new([("X", "Y", 1.), ("Z", "W", 1.)]);
    RouteProblem::new(Arc::new(map), "X", "Z").unwrap()
}

/// Starts on D, a place without any roads.
pub fn dead_end_problem() -> RouteProblem {
    let map = RouteMap::new([("X", "Y", 1.)]).with_coordinates([("D", (0., 0.))]);
    RouteProblem::new(Arc::new(map), "D", "X").unwrap()
}

/// A ring of `size` places R0, R1, ... searched from R0 to G, which only
/// connects to H, off the ring.
pub fn ring_problem(size: usize) -> RouteProblem {
    let names: Vec<String> = (0..size).map(|i| format!("R{i}")).collect();
    let ring = (0..size).map(|i| (names[i].as_str(), names[(i + 1) % size].as_str(), 1.));
    let map = RouteMap::new(ring.chain([("G", "H", 1.)]));
    RouteProblem::new(Arc::new(map), "R0", "G").unwrap()
}

/// S-A, S-B, A-G and B-G, all of length one. With `reversed` the roads are
/// added B first, so B comes before A among the neighbours of S.
pub fn diamond_problem(reversed: bool) -> RouteProblem {
    let mut links = vec![("S", "A", 1.), ("S", "B", 1.), ("A", "G", 1.), ("B", "G", 1.)];
    if reversed {
        links.swap(0, 1);
        links.swap(2, 3);
    }
    RouteProblem::new(Arc::new(RouteMap::new(links)), "S", "G").unwrap()
}

/// Names of the locations along a found route.
pub fn route_names(result: &SearchResult<Location, Location>) -> Vec<String> {
    result
        .path_states()
        .iter()
        .map(|place| place.to_string())
        .collect()
}

/// Check that `result` is a solution of `problem`: replaying its actions from
/// the initial state goes through its states, adds up to its cost and ends in
/// a goal.
pub fn assert_valid_solution<P: Problem>(problem: &P, result: &SearchResult<P::State, P::Action>) {
    let node = result.node().expect("a solution was found");
    let states = node.path_states();
    let actions = node.path_actions();
    assert_eq!(states.len(), actions.len() + 1);
    assert_eq!(&states[0], problem.initial());

    let mut state = problem.initial().clone();
    let mut cost = 0.;
    for (action, expected) in actions.iter().zip(&states[1..]) {
        let next = problem.result(&state, action);
        assert_eq!(&next, expected, "{action:?} from {state:?}");
        cost += problem.action_cost(&state, action, &next);
        state = next;
    }
    assert!(problem.is_goal(&state), "{state:?} is not a goal");
    assert!(
        (cost - node.path_cost()).abs() < 1e-6,
        "replayed cost {cost} differs from {}",
        node.path_cost()
    );
}
