use crate::search::NondeterministicProblem;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum VacuumAction {
    Suck,
    Forward,
    Backward,
}

/// The erratic vacuum world: two squares, each clean or dirty, and a vacuum
/// cleaner whose suck action sometimes also cleans the other square and
/// sometimes dirties a clean one.
///
/// States are numbered 1 to 8. Odd states have the vacuum on the left square,
/// even ones on the right. 1 and 2 have both squares dirty, 3 and 4 only the
/// left one, 5 and 6 only the right one, and 7 and 8 are clean.
#[derive(Debug, Clone)]
pub struct ErraticVacuum {
    initial: u8,
}

impl ErraticVacuum {
    /// # Panics
    ///
    /// Panics if `initial` is not a state between 1 and 8.
    pub fn new(initial: u8) -> Self {
        assert!((1..=8).contains(&initial), "no vacuum world state {initial}");
        Self { initial }
    }
}

impl NondeterministicProblem for ErraticVacuum {
    type State = u8;
    type Action = VacuumAction;

    fn initial(&self) -> &u8 {
        &self.initial
    }

    fn is_goal(&self, state: &u8) -> bool {
        matches!(state, 7 | 8)
    }

    fn actions(&self, _state: &u8) -> Vec<VacuumAction> {
        VacuumAction::iter().collect()
    }

    /// Possible outcomes in ascending order.
    fn results(&self, state: &u8, action: &VacuumAction) -> Vec<u8> {
        let outcomes: &[u8] = match (action, state) {
            (VacuumAction::Suck, 1) => &[5, 7],
            (VacuumAction::Suck, 2) => &[4, 8],
            (VacuumAction::Suck, 3) => &[7],
            (VacuumAction::Suck, 4) => &[2, 4],
            (VacuumAction::Suck, 5) => &[1, 5],
            (VacuumAction::Suck, 6) => &[8],
            (VacuumAction::Suck, 7) => &[3, 7],
            (VacuumAction::Suck, _) => &[4, 6],
            // moving right keeps the dirt and puts the vacuum on the even
            // state, moving left on the odd one
            (VacuumAction::Forward, state) => return vec![state + state % 2],
            (VacuumAction::Backward, state) => return vec![state - (1 - state % 2)],
        };
        outcomes.to_vec()
    }
}
