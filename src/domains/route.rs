use crate::search::{Node, Problem, SearchError};
use internment::Intern;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Name of a place on a [`RouteMap`]. Interned, so copying and comparing is
/// as cheap as for an integer.
pub type Location = Intern<String>;

pub fn location(name: &str) -> Location {
    Intern::new(name.to_owned())
}

/// Undirected graph of locations with road lengths, optionally with planar
/// coordinates for a straight-line heuristic.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    /// Neighbours of each location, in the order the roads were added
    neighbours: HashMap<Location, Vec<Location>>,
    distances: HashMap<(Location, Location), f64>,
    coordinates: HashMap<Location, (f64, f64)>,
}

impl RouteMap {
    pub fn new<'a>(links: impl IntoIterator<Item = (&'a str, &'a str, f64)>) -> Self {
        let mut map = Self::default();
        for (a, b, distance) in links {
            map.add_link(location(a), location(b), distance);
        }
        map
    }

    /// Give locations coordinates. A location may be given coordinates
    /// without having any roads, it is then a dead end.
    pub fn with_coordinates<'a>(
        mut self,
        coordinates: impl IntoIterator<Item = (&'a str, (f64, f64))>,
    ) -> Self {
        self.coordinates.extend(
            coordinates
                .into_iter()
                .map(|(name, point)| (location(name), point)),
        );
        self
    }

    pub fn add_link(&mut self, a: Location, b: Location, distance: f64) {
        self.neighbours.entry(a).or_default().push(b);
        self.neighbours.entry(b).or_default().push(a);
        self.distances.insert((a, b), distance);
        self.distances.insert((b, a), distance);
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.neighbours.contains_key(location) || self.coordinates.contains_key(location)
    }

    pub fn neighbours(&self, location: &Location) -> &[Location] {
        self.neighbours
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Length of the road between `a` and `b`, if there is one.
    pub fn distance(&self, a: &Location, b: &Location) -> Option<f64> {
        self.distances.get(&(*a, *b)).copied()
    }

    pub fn coordinates(&self, location: &Location) -> Option<(f64, f64)> {
        self.coordinates.get(location).copied()
    }

    /// Euclidean distance between the coordinates of `a` and `b`, if both
    /// have any.
    pub fn straight_line_distance(&self, a: &Location, b: &Location) -> Option<f64> {
        let (x1, y1) = self.coordinates(a)?;
        let (x2, y2) = self.coordinates(b)?;
        Some((x1 - x2).hypot(y1 - y2))
    }

    /// The classic map of Romania, shared.
    pub fn romania() -> Arc<RouteMap> {
        Arc::clone(&ROMANIA)
    }
}

static ROMANIA: Lazy<Arc<RouteMap>> = Lazy::new(|| {
    let map = RouteMap::new([
        ("O", "Z", 71.),
        ("O", "S", 151.),
        ("A", "Z", 75.),
        ("A", "S", 140.),
        ("A", "T", 118.),
        ("L", "T", 111.),
        ("L", "M", 70.),
        ("D", "M", 75.),
        ("C", "D", 120.),
        ("C", "R", 146.),
        ("C", "P", 138.),
        ("R", "S", 80.),
        ("F", "S", 99.),
        ("B", "F", 211.),
        ("B", "P", 101.),
        ("B", "G", 90.),
        ("B", "U", 85.),
        ("H", "U", 98.),
        ("E", "H", 86.),
        ("I", "N", 87.),
        ("I", "V", 92.),
        ("U", "V", 142.),
        ("P", "R", 97.),
    ])
    .with_coordinates([
        ("A", (76., 497.)),
        ("B", (400., 327.)),
        ("C", (246., 285.)),
        ("D", (160., 296.)),
        ("E", (558., 294.)),
        ("F", (285., 460.)),
        ("G", (368., 257.)),
        ("H", (548., 355.)),
        ("I", (488., 535.)),
        ("L", (162., 379.)),
        ("M", (160., 343.)),
        ("N", (407., 561.)),
        ("O", (117., 580.)),
        ("P", (311., 372.)),
        ("R", (227., 412.)),
        ("S", (187., 463.)),
        ("T", (83., 414.)),
        ("U", (471., 363.)),
        ("V", (535., 473.)),
        ("Z", (92., 539.)),
    ]);
    Arc::new(map)
});

/// Find a route between two locations of a map. The actions of a location
/// are its neighbours, in the order their roads were added.
#[derive(Debug, Clone)]
pub struct RouteProblem {
    initial: Location,
    goal: Location,
    map: Arc<RouteMap>,
}

impl RouteProblem {
    pub fn new(map: Arc<RouteMap>, initial: &str, goal: &str) -> Result<Self, SearchError> {
        let [initial, goal] = [initial, goal].map(location);
        for place in [initial, goal] {
            if !map.contains(&place) {
                return Err(SearchError::UnknownLocation(place.to_string()));
            }
        }
        Ok(Self { initial, goal, map })
    }

    pub fn romania(initial: &str, goal: &str) -> Result<Self, SearchError> {
        Self::new(RouteMap::romania(), initial, goal)
    }

    pub fn map(&self) -> &RouteMap {
        &self.map
    }
}

impl Problem for RouteProblem {
    type State = Location;
    type Action = Location;

    fn initial(&self) -> &Location {
        &self.initial
    }

    fn goal(&self) -> Option<&Location> {
        Some(&self.goal)
    }

    fn actions(&self, state: &Location) -> Vec<Location> {
        self.map.neighbours(state).to_vec()
    }

    fn result(&self, _state: &Location, action: &Location) -> Location {
        *action
    }

    fn action_cost(&self, state: &Location, _action: &Location, next_state: &Location) -> f64 {
        self.map.distance(state, next_state).unwrap_or(f64::INFINITY)
    }

    /// Straight-line distance to the goal, zero on maps without coordinates.
    fn h(&self, node: &Node<Location, Location>) -> f64 {
        self.map
            .straight_line_distance(node.state(), &self.goal)
            .unwrap_or(0.)
    }

    fn action_to(&self, state: &Location, target: &Location) -> Option<Location> {
        self.map.distance(state, target).map(|_| *target)
    }

    fn inverse(&self) -> Option<Self> {
        Some(Self {
            initial: self.goal,
            goal: self.initial,
            map: Arc::clone(&self.map),
        })
    }
}

impl Display for RouteProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteProblem({}, {})", self.initial, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn romania_roads_go_both_ways() {
        let map = RouteMap::romania();
        let names: Vec<&str> = map
            .neighbours(&location("A"))
            .iter()
            .map(|place| place.as_str())
            .collect();
        assert_eq!(names, vec!["Z", "S", "T"]);
        assert_eq!(map.distance(&location("P"), &location("R")), Some(97.));
        assert_eq!(map.distance(&location("R"), &location("P")), Some(97.));
        assert_eq!(map.distance(&location("A"), &location("B")), None);
        assert!(map.neighbours(&location("nowhere")).is_empty());
    }

    #[test]
    fn straight_line_heuristic_never_overestimates() {
        let map = RouteMap::romania();
        // Arad to Bucharest
        assert_approx_eq!(
            map.straight_line_distance(&location("A"), &location("B")).unwrap(),
            366.,
            1.
        );
        for (a, b) in [("A", "S"), ("S", "R"), ("R", "P"), ("P", "B"), ("B", "U")] {
            let (a, b) = (location(a), location(b));
            assert!(map.straight_line_distance(&a, &b).unwrap() <= map.distance(&a, &b).unwrap());
        }
    }

    #[test]
    fn unknown_locations_are_rejected() {
        assert!(matches!(
            RouteProblem::romania("A", "Q"),
            Err(SearchError::UnknownLocation(name)) if name == "Q"
        ));
    }

    #[test]
    fn inverse_swaps_the_ends() {
        let problem = RouteProblem::romania("A", "B").unwrap();
        let inverse = problem.inverse().unwrap();
        assert_eq!(inverse.initial().as_str(), "B");
        assert_eq!(inverse.goal().unwrap().as_str(), "A");
        assert_eq!(inverse.to_string(), "RouteProblem(B, A)");
        assert_eq!(
            problem.action_to(&location("S"), &location("R")),
            Some(location("R"))
        );
        assert_eq!(problem.action_to(&location("S"), &location("B")), None);
    }

    #[test]
    fn map_without_coordinates_has_zero_heuristic() {
        let map = Arc::new(RouteMap::new([("X", "Y", 3.)]));
        let problem = RouteProblem::new(map, "X", "Y").unwrap();
        let root = Node::root(location("X"));
        assert_eq!(problem.h(&root), 0.);
    }
}
