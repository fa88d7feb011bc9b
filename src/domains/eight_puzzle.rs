use crate::search::{Node, Problem, SearchError};
use std::fmt::{self, Display};

/// Tiles of the 3x3 board in row-major order, `0` is the blank.
pub type Board = [u8; 9];

/// Board with the blank in the top left corner and the tiles in order.
pub const SOLVED_BOARD: Board = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Squares the blank can move to from each square.
const MOVES: [&[usize]; 9] = [
    &[1, 3],
    &[0, 2, 4],
    &[1, 5],
    &[0, 4, 6],
    &[1, 3, 5, 7],
    &[2, 4, 8],
    &[3, 7],
    &[4, 6, 8],
    &[7, 5],
];

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum EightPuzzleHeuristic {
    /// Sum of the distances of the tiles from their goal squares
    #[default]
    Manhattan,
    /// Number of tiles not on their goal square
    MisplacedTiles,
}

/// The sliding tile puzzle on a 3x3 board. An action is the square the blank
/// moves to, by swapping with the tile there.
#[derive(Debug, Clone)]
pub struct EightPuzzle {
    initial: Board,
    goal: Board,
    heuristic: EightPuzzleHeuristic,
}

impl EightPuzzle {
    /// Puzzle from `initial` to [`SOLVED_BOARD`].
    pub fn new(initial: Board) -> Result<Self, SearchError> {
        Self::with_goal(initial, SOLVED_BOARD)
    }

    /// Fails if either board is not a permutation of `0..9`, or if `goal`
    /// cannot be reached from `initial`.
    pub fn with_goal(initial: Board, goal: Board) -> Result<Self, SearchError> {
        for board in [initial, goal] {
            let mut sorted = board;
            sorted.sort_unstable();
            if sorted != SOLVED_BOARD {
                return Err(SearchError::InvalidBoard(board.to_vec()));
            }
        }
        if inversions(&initial) % 2 != inversions(&goal) % 2 {
            return Err(SearchError::UnsolvablePuzzle { initial, goal });
        }
        Ok(Self::new_unchecked(initial, goal))
    }

    /// No validation at all. A search on an unsolvable puzzle explores all
    /// 181,440 states reachable from `initial` before it fails.
    pub fn new_unchecked(initial: Board, goal: Board) -> Self {
        Self {
            initial,
            goal,
            heuristic: EightPuzzleHeuristic::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: EightPuzzleHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    fn manhattan(&self, board: &Board) -> usize {
        let mut goal_square = [0; 9];
        for (square, &tile) in self.goal.iter().enumerate() {
            goal_square[tile as usize] = square;
        }
        board
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(square, &tile)| {
                let target = goal_square[tile as usize];
                (square % 3).abs_diff(target % 3) + (square / 3).abs_diff(target / 3)
            })
            .sum()
    }

    fn misplaced_tiles(&self, board: &Board) -> usize {
        board
            .iter()
            .zip(self.goal.iter())
            .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
            .count()
    }
}

/// Number of pairs of tiles in the wrong order, ignoring the blank. Moves
/// never change its parity.
fn inversions(board: &Board) -> usize {
    let tiles: Vec<u8> = board.iter().copied().filter(|&tile| tile != 0).collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| a > b).count())
        .sum()
}

fn blank(board: &Board) -> usize {
    board.iter().position(|&tile| tile == 0).unwrap_or(0)
}

impl Problem for EightPuzzle {
    type State = Board;
    type Action = usize;

    fn initial(&self) -> &Board {
        &self.initial
    }

    fn goal(&self) -> Option<&Board> {
        Some(&self.goal)
    }

    fn actions(&self, state: &Board) -> Vec<usize> {
        MOVES[blank(state)].to_vec()
    }

    fn result(&self, state: &Board, action: &usize) -> Board {
        let mut board = *state;
        board.swap(blank(state), *action);
        board
    }

    fn h(&self, node: &Node<Board, usize>) -> f64 {
        let estimate = match self.heuristic {
            EightPuzzleHeuristic::Manhattan => self.manhattan(node.state()),
            EightPuzzleHeuristic::MisplacedTiles => self.misplaced_tiles(node.state()),
        };
        estimate as f64
    }

    fn inverse(&self) -> Option<Self> {
        Some(Self {
            initial: self.goal,
            goal: self.initial,
            heuristic: self.heuristic,
        })
    }
}

impl Display for EightPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EightPuzzle({:?}, {:?})", self.initial, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boards_are_validated() {
        assert!(matches!(
            EightPuzzle::new([1, 1, 2, 0, 7, 5, 3, 6, 8]),
            Err(SearchError::InvalidBoard(_))
        ));
        // two tiles swapped, the other half of the state space
        assert!(matches!(
            EightPuzzle::new([0, 2, 1, 3, 4, 5, 6, 7, 8]),
            Err(SearchError::UnsolvablePuzzle { .. })
        ));
        assert!(EightPuzzle::new([1, 4, 2, 0, 7, 5, 3, 6, 8]).is_ok());
        let goal = [2, 0, 1, 3, 4, 5, 6, 7, 8];
        assert!(EightPuzzle::with_goal([0, 2, 1, 3, 4, 5, 6, 7, 8], goal).is_ok());
    }

    #[test]
    fn blank_swaps_with_a_neighbour() {
        let problem = EightPuzzle::new([1, 4, 2, 0, 7, 5, 3, 6, 8]).unwrap();
        let board = *problem.initial();
        assert_eq!(problem.actions(&board), vec![0, 4, 6]);
        assert_eq!(problem.result(&board, &0), [0, 4, 2, 1, 7, 5, 3, 6, 8]);
        assert_eq!(problem.result(&board, &4), [1, 4, 2, 7, 0, 5, 3, 6, 8]);
    }

    #[test]
    fn heuristics() {
        let board = [1, 4, 2, 0, 7, 5, 3, 6, 8];
        let manhattan = EightPuzzle::new(board).unwrap();
        let misplaced = manhattan
            .clone()
            .with_heuristic(EightPuzzleHeuristic::MisplacedTiles);
        let node = Node::root(board);
        assert_eq!(manhattan.h(&node), 5.);
        assert_eq!(misplaced.h(&node), 5.);

        let solved = Node::root(SOLVED_BOARD);
        assert_eq!(manhattan.h(&solved), 0.);
        assert_eq!(misplaced.h(&solved), 0.);

        let node = Node::root([8, 1, 2, 3, 4, 5, 6, 7, 0]);
        assert_eq!(manhattan.h(&node), 4.);
        assert_eq!(misplaced.h(&node), 1.);
    }

    #[test]
    fn inverse_keeps_the_heuristic() {
        let problem = EightPuzzle::new([1, 4, 2, 0, 7, 5, 3, 6, 8])
            .unwrap()
            .with_heuristic(EightPuzzleHeuristic::MisplacedTiles);
        let inverse = problem.inverse().unwrap();
        assert_eq!(inverse.initial(), &SOLVED_BOARD);
        assert_eq!(inverse.goal(), Some(&[1, 4, 2, 0, 7, 5, 3, 6, 8]));
        assert_eq!(inverse.heuristic, EightPuzzleHeuristic::MisplacedTiles);
    }
}
