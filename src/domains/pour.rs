use crate::search::{Node, Problem, SearchError};
use smallvec::SmallVec;
use std::fmt::{self, Display};

/// Litres of water in each jug.
pub type Jugs = SmallVec<[u32; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PourAction {
    /// Fill a jug to the brim from the tap
    Fill(usize),
    /// Empty a jug onto the ground
    Dump(usize),
    /// Pour from the first jug into the second until the first is empty or
    /// the second is full
    Pour(usize, usize),
}

impl Display for PourAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PourAction::Fill(i) => write!(f, "Fill({i})"),
            PourAction::Dump(i) => write!(f, "Dump({i})"),
            PourAction::Pour(i, j) => write!(f, "Pour({i}, {j})"),
        }
    }
}

/// The water jug puzzle: measure out `goal` litres in any one of the jugs.
/// Every action costs one.
#[derive(Debug, Clone)]
pub struct PourProblem {
    initial: Jugs,
    sizes: Jugs,
    goal: u32,
}

impl PourProblem {
    /// Fails unless there is one size per jug and every jug holds no more
    /// than it can.
    pub fn new(initial: &[u32], sizes: &[u32], goal: u32) -> Result<Self, SearchError> {
        let fits = initial.len() == sizes.len()
            && initial.iter().zip(sizes).all(|(level, size)| level <= size);
        if !fits {
            return Err(SearchError::InvalidJugs {
                initial: initial.to_vec(),
                sizes: sizes.to_vec(),
            });
        }
        Ok(Self {
            initial: SmallVec::from_slice(initial),
            sizes: SmallVec::from_slice(sizes),
            goal,
        })
    }

    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }
}

impl Problem for PourProblem {
    type State = Jugs;
    type Action = PourAction;

    fn initial(&self) -> &Jugs {
        &self.initial
    }

    fn is_goal(&self, state: &Jugs) -> bool {
        state.contains(&self.goal)
    }

    /// Fills first, then dumps, then pours, each in jug order.
    fn actions(&self, state: &Jugs) -> Vec<PourAction> {
        let jugs = 0..state.len();
        let fills = jugs
            .clone()
            .filter(|&i| state[i] < self.sizes[i])
            .map(PourAction::Fill);
        let dumps = jugs
            .clone()
            .filter(|&i| state[i] > 0)
            .map(PourAction::Dump);
        let pours = jugs
            .filter(|&i| state[i] > 0)
            .flat_map(|i| {
                (0..state.len())
                    .filter(move |&j| j != i)
                    .map(move |j| PourAction::Pour(i, j))
            });
        fills.chain(dumps).chain(pours).collect()
    }

    fn result(&self, state: &Jugs, action: &PourAction) -> Jugs {
        let mut jugs = state.clone();
        match *action {
            PourAction::Fill(i) => jugs[i] = self.sizes[i],
            PourAction::Dump(i) => jugs[i] = 0,
            PourAction::Pour(i, j) => {
                let amount = state[i].min(self.sizes[j] - state[j]);
                jugs[i] -= amount;
                jugs[j] += amount;
            }
        }
        jugs
    }
}

impl Display for PourProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PourProblem({:?}, {})", self.initial.as_slice(), self.goal)
    }
}

/// Like [`PourProblem`], but an action costs the litres of water it draws
/// from the tap, so only filling costs anything.
#[derive(Debug, Clone)]
pub struct GreenPourProblem(PourProblem);

impl GreenPourProblem {
    pub fn new(initial: &[u32], sizes: &[u32], goal: u32) -> Result<Self, SearchError> {
        PourProblem::new(initial, sizes, goal).map(Self)
    }
}

impl Problem for GreenPourProblem {
    type State = Jugs;
    type Action = PourAction;

    fn initial(&self) -> &Jugs {
        self.0.initial()
    }

    fn is_goal(&self, state: &Jugs) -> bool {
        self.0.is_goal(state)
    }

    fn actions(&self, state: &Jugs) -> Vec<PourAction> {
        self.0.actions(state)
    }

    fn result(&self, state: &Jugs, action: &PourAction) -> Jugs {
        self.0.result(state, action)
    }

    fn action_cost(&self, state: &Jugs, action: &PourAction, _next_state: &Jugs) -> f64 {
        match *action {
            PourAction::Fill(i) => f64::from(self.0.sizes[i] - state[i]),
            PourAction::Dump(_) | PourAction::Pour(..) => 0.,
        }
    }

    fn h(&self, node: &Node<Jugs, PourAction>) -> f64 {
        self.0.h(node)
    }
}

impl Display for GreenPourProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GreenPourProblem({:?}, {})",
            self.0.initial.as_slice(),
            self.0.goal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::uniform_cost_search;

    #[test]
    fn actions_in_fill_dump_pour_order() {
        let problem = PourProblem::new(&[1, 1, 1], &[2, 4, 9], 7).unwrap();
        let state = Jugs::from_slice(&[2, 0, 1]);
        assert_eq!(
            problem.actions(&state),
            vec![
                PourAction::Fill(1),
                PourAction::Fill(2),
                PourAction::Dump(0),
                PourAction::Dump(2),
                PourAction::Pour(0, 1),
                PourAction::Pour(0, 2),
                PourAction::Pour(2, 0),
                PourAction::Pour(2, 1),
            ]
        );
        assert_eq!(PourAction::Pour(2, 1).to_string(), "Pour(2, 1)");
    }

    #[test]
    fn pouring_stops_when_full_or_empty() {
        let problem = PourProblem::new(&[0, 0], &[5, 3], 4).unwrap();
        let state = Jugs::from_slice(&[5, 1]);
        assert_eq!(problem.result(&state, &PourAction::Pour(0, 1)).as_slice(), &[3, 3]);
        assert_eq!(problem.result(&state, &PourAction::Pour(1, 0)).as_slice(), &[5, 1]);
        assert_eq!(problem.result(&state, &PourAction::Dump(0)).as_slice(), &[0, 1]);
        assert!(problem.is_goal(&Jugs::from_slice(&[4, 0])));
        assert!(!problem.is_goal(&state));
        assert_eq!(problem.to_string(), "PourProblem([0, 0], 4)");
    }

    #[test]
    fn green_variant_pays_for_water() {
        let problem = GreenPourProblem::new(&[0, 0], &[5, 3], 4).unwrap();
        let state = Jugs::from_slice(&[2, 0]);
        let filled = problem.result(&state, &PourAction::Fill(0));
        assert_eq!(problem.action_cost(&state, &PourAction::Fill(0), &filled), 3.);
        assert_eq!(problem.action_cost(&state, &PourAction::Pour(0, 1), &filled), 0.);

        let plain_result = uniform_cost_search(&PourProblem::new(&[0, 0], &[5, 3], 4).unwrap());
        let green_result = uniform_cost_search(&problem);
        assert_eq!(plain_result.path_cost(), 6.);
        // the fewest steps draw 10 litres, pouring back and forth saves one
        assert_eq!(green_result.path_cost(), 9.);
        assert_eq!(green_result.depth(), Some(8));
    }

    #[test]
    fn jugs_are_validated() {
        assert!(matches!(
            PourProblem::new(&[0, 5], &[3, 3], 7),
            Err(SearchError::InvalidJugs { .. })
        ));
        assert!(matches!(
            GreenPourProblem::new(&[0, 0, 0], &[3, 3], 7),
            Err(SearchError::InvalidJugs { .. })
        ));
        assert_eq!(
            PourProblem::new(&[0], &[3, 3], 7).unwrap_err().to_string(),
            "jugs [0] do not fit sizes [3, 3]"
        );
        // full jugs are fine
        assert!(PourProblem::new(&[3, 0], &[3, 3], 7).is_ok());
    }
}
