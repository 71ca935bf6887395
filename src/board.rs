//! The board module contains the game state proper: the three towers, the move counter and every
//! operation that reads or mutates them.
//!
//! Nothing in this module touches the terminal. The interactive layer in game.rs drives these
//! operations and turns their errors into styled messages, which keeps the rules themselves easy
//! to exercise from tests.

use console::style;

/// The inclusive upper bound on the number of rings a game may be set up with.
pub(crate) const MAX_RINGS: u8 = 10;
/// The inclusive lower bound on the number of rings a game may be set up with.
pub(crate) const MIN_RINGS: u8 = 1;

/// This enum holds every rule violation the game can reject. All of its variants are recoverable;
/// they are shown to the player as a styled message and the loop simply asks for the next input.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub(crate) enum GameError {
    /// This variant is used when a move names an origin tower that currently holds no rings, so
    /// there is nothing to move.
    #[error("{} {} {}", style("tower").red(), .0.label(), style("is empty; there is no ring to move").red())]
    EmptyTower(Tower),
    /// This variant is used when a move would rest a ring on top of a strictly smaller one, which
    /// the rules forbid. It carries the offending ring and the ring it would have landed on.
    #[error("{} {ring} {} {onto}", style("cannot place ring").red(), style("on smaller ring").red())]
    IllegalMove {
        /// The size of the ring the player tried to move.
        ring: u8,
        /// The size of the smaller ring already resting on top of the destination tower.
        onto: u8,
    },
    /// This variant is used when a line of input matches none of the recognized command shapes.
    #[error("{}", style("invalid command; type two of A/S/D to move, Q to quit, R to restart").red())]
    InvalidCommand,
    /// This variant is used when the requested ring count falls outside the supported range of
    /// one to ten.
    #[error("{} {MIN_RINGS} {} {MAX_RINGS}", style("ring count must be between").red(), style("and").red())]
    InvalidRingCount,
}

/// This enum identifies the three towers of the puzzle by role. The letters the player types map
/// onto these roles: A for the source, S for the auxiliary and D for the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tower {
    /// This variant is the tower labelled A, where every ring starts.
    Source,
    /// This variant is the tower labelled S, the spare peg used to shuffle rings around.
    Auxiliary,
    /// This variant is the tower labelled D, where every ring must end up for the game to be won.
    Destination,
}

impl Tower {
    /// This function returns the three towers in the order they are drawn and labelled on screen.
    pub(crate) const fn all() -> [Self; 3] {
        [Self::Source, Self::Auxiliary, Self::Destination]
    }

    /// This function maps a single letter to a tower. It accepts either case and returns `None`
    /// for anything that isn't one of A, S or D.
    pub(crate) const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' | 'a' => Some(Self::Source),
            'S' | 's' => Some(Self::Auxiliary),
            'D' | 'd' => Some(Self::Destination),
            _ => None,
        }
    }

    /// This function returns the position of the implicit tower within the board's backing array.
    const fn index(self) -> usize {
        match self {
            Self::Source => 0,
            Self::Auxiliary => 1,
            Self::Destination => 2,
        }
    }

    /// This function returns the single-letter label the tower is rendered and addressed by.
    pub(crate) const fn label(&self) -> char {
        match *self {
            Self::Source => 'A',
            Self::Auxiliary => 'S',
            Self::Destination => 'D',
        }
    }
}

/// This struct is the whole game state: one stack of ring sizes per tower plus the move counter.
///
/// Each stack is ordered bottom to top, so the last element is the ring currently on top. Two
/// invariants hold after every operation: the three stacks together contain exactly the rings
/// `1..=rings`, and within any stack sizes strictly decrease from bottom to top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Board {
    /// The number of moves successfully applied since the board was created.
    moves: u32,
    /// The number of rings this game was set up with.
    rings: u8,
    /// The three ring stacks, indexed through [`Tower::index`].
    towers: [Vec<u8>; 3],
}

impl Board {
    /// This function creates a fresh board with every ring stacked on the source tower, largest
    /// at the bottom and ring 1 on top, and the move counter at zero.
    pub(crate) fn new(rings: u8) -> Result<Self, GameError> {
        if !(MIN_RINGS..=MAX_RINGS).contains(&rings) {
            return Err(GameError::InvalidRingCount);
        }

        let source: Vec<u8> = (1..=rings).rev().collect();

        Ok(Self {
            moves: 0,
            rings,
            towers: [source, Vec::new(), Vec::new()],
        })
    }

    /// This function validates and applies a single move, returning the size of the ring that was
    /// moved. A move fails if the origin tower is empty or if its top ring is larger than the ring
    /// currently on top of the destination tower; failures leave the board untouched.
    pub(crate) fn apply_move(&mut self, origin: Tower, destination: Tower) -> Result<u8, GameError> {
        let ring = self.top(origin).ok_or(GameError::EmptyTower(origin))?;

        if let Some(onto) = self.top(destination) {
            if onto < ring {
                return Err(GameError::IllegalMove { ring, onto });
            }
        }

        // the pop cannot miss; top() just proved the origin stack is non-empty
        let Some(ring) = self.stack_mut(origin).pop() else {
            return Err(GameError::EmptyTower(origin));
        };
        self.stack_mut(destination).push(ring);
        self.moves += 1;

        Ok(ring)
    }

    /// This function reports whether the puzzle is solved, which is the case exactly when the
    /// destination tower holds every ring.
    pub(crate) fn is_complete(&self) -> bool {
        self.stack(Tower::Destination).len() == usize::from(self.rings)
    }

    /// This function returns the minimum number of moves in which the current ring count can be
    /// solved, the classical `2^n - 1`.
    pub(crate) const fn min_moves(&self) -> u32 {
        (1_u32 << self.rings) - 1
    }

    /// This function returns the number of moves applied so far.
    pub(crate) const fn moves(&self) -> u32 {
        self.moves
    }

    /// This function returns the number of rings the board was set up with.
    pub(crate) const fn rings(&self) -> u8 {
        self.rings
    }

    /// This function returns the ring stack of the given tower, ordered bottom to top.
    pub(crate) fn stack(&self, tower: Tower) -> &[u8] {
        self.towers[tower.index()].as_slice()
    }

    /// This function returns a mutable handle on the given tower's stack.
    fn stack_mut(&mut self, tower: Tower) -> &mut Vec<u8> {
        &mut self.towers[tower.index()]
    }

    /// This function returns the size of the ring currently on top of the given tower, if any.
    pub(crate) fn top(&self, tower: Tower) -> Option<u8> {
        self.stack(tower).last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, GameError, Tower, MAX_RINGS, MIN_RINGS};

    /// Moves `count` rings from `origin` to `destination` with the textbook recursion, so the
    /// move counter afterwards can be checked against the known optimum.
    fn solve(board: &mut Board, count: u8, origin: Tower, via: Tower, destination: Tower) {
        if count == 0 {
            return;
        }
        solve(board, count - 1, origin, destination, via);
        assert!(
            board.apply_move(origin, destination).is_ok(),
            "recursive solution only ever produces legal moves"
        );
        solve(board, count - 1, via, origin, destination);
    }

    /// Asserts the two board invariants: ring conservation and strict ordering within each stack.
    fn assert_invariants(board: &Board) {
        let mut seen: Vec<u8> = Tower::all()
            .iter()
            .flat_map(|&tower| board.stack(tower).iter().copied())
            .collect();
        seen.sort_unstable();
        let expected: Vec<u8> = (1..=board.rings()).collect();
        assert_eq!(seen, expected, "every ring exists exactly once");

        for tower in Tower::all() {
            let stack = board.stack(tower);
            assert!(
                stack.windows(2).all(|pair| pair[0] > pair[1]),
                "stacks must strictly decrease bottom to top"
            );
        }
    }

    #[test]
    fn new_board_stacks_everything_on_the_source() {
        for rings in MIN_RINGS..=MAX_RINGS {
            let board = Board::new(rings).expect("ring count is in range");
            let expected: Vec<u8> = (1..=rings).rev().collect();

            assert_eq!(board.stack(Tower::Source), expected.as_slice());
            assert!(board.stack(Tower::Auxiliary).is_empty());
            assert!(board.stack(Tower::Destination).is_empty());
            assert_eq!(board.moves(), 0);
            assert_eq!(board.top(Tower::Source), Some(1));
            assert_invariants(&board);
        }
    }

    #[test]
    fn out_of_range_ring_counts_are_rejected() {
        assert_eq!(Board::new(0), Err(GameError::InvalidRingCount));
        assert_eq!(Board::new(11), Err(GameError::InvalidRingCount));
        assert_eq!(Board::new(255), Err(GameError::InvalidRingCount));
    }

    #[test]
    fn single_ring_game_is_won_in_one_move() {
        let mut board = Board::new(1).expect("ring count is in range");

        assert!(!board.is_complete());
        assert_eq!(board.apply_move(Tower::Source, Tower::Destination), Ok(1));
        assert_eq!(board.moves(), 1);
        assert!(board.is_complete());
        assert_invariants(&board);
    }

    #[test]
    fn two_ring_game_follows_the_optimal_script() {
        let mut board = Board::new(2).expect("ring count is in range");

        assert_eq!(board.apply_move(Tower::Source, Tower::Auxiliary), Ok(1));
        assert_eq!(board.stack(Tower::Source), [2]);
        assert_eq!(board.stack(Tower::Auxiliary), [1]);
        assert!(!board.is_complete());

        assert_eq!(board.apply_move(Tower::Source, Tower::Destination), Ok(2));
        assert!(board.stack(Tower::Source).is_empty());
        assert_eq!(board.stack(Tower::Destination), [2]);
        assert!(!board.is_complete());

        assert_eq!(board.apply_move(Tower::Auxiliary, Tower::Destination), Ok(1));
        assert!(board.stack(Tower::Auxiliary).is_empty());
        assert_eq!(board.stack(Tower::Destination), [2, 1]);
        assert_eq!(board.moves(), 3);
        assert_eq!(board.moves(), board.min_moves());
        assert!(board.is_complete());
        assert_invariants(&board);
    }

    #[test]
    fn moving_from_an_empty_tower_fails_and_changes_nothing() {
        let mut board = Board::new(2).expect("ring count is in range");
        let before = board.clone();

        assert_eq!(
            board.apply_move(Tower::Auxiliary, Tower::Destination),
            Err(GameError::EmptyTower(Tower::Auxiliary))
        );
        assert_eq!(board, before);

        // the failure is idempotent; repeating it still changes nothing
        assert_eq!(
            board.apply_move(Tower::Auxiliary, Tower::Destination),
            Err(GameError::EmptyTower(Tower::Auxiliary))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn resting_a_larger_ring_on_a_smaller_one_fails_and_changes_nothing() {
        let mut board = Board::new(2).expect("ring count is in range");
        assert_eq!(board.apply_move(Tower::Source, Tower::Destination), Ok(1));
        let before = board.clone();

        assert_eq!(
            board.apply_move(Tower::Source, Tower::Destination),
            Err(GameError::IllegalMove { ring: 2, onto: 1 })
        );
        assert_eq!(board, before);
        assert_eq!(board.moves(), 1);
        assert_invariants(&board);
    }

    #[test]
    fn a_successful_move_shifts_exactly_one_ring() {
        let mut board = Board::new(4).expect("ring count is in range");

        assert_eq!(board.apply_move(Tower::Source, Tower::Auxiliary), Ok(1));
        assert_eq!(board.stack(Tower::Source).len(), 3);
        assert_eq!(board.stack(Tower::Auxiliary).len(), 1);
        assert_eq!(board.stack(Tower::Destination).len(), 0);
        assert_eq!(board.moves(), 1);
        assert_invariants(&board);
    }

    #[test]
    fn the_recursive_solution_wins_in_the_minimum_number_of_moves() {
        for rings in MIN_RINGS..=MAX_RINGS {
            let mut board = Board::new(rings).expect("ring count is in range");

            solve(
                &mut board,
                rings,
                Tower::Source,
                Tower::Auxiliary,
                Tower::Destination,
            );

            assert!(board.is_complete());
            assert_eq!(board.moves(), (1_u32 << rings) - 1);
            assert_eq!(board.moves(), board.min_moves());
            assert_invariants(&board);
        }
    }

    #[test]
    fn completion_tracks_the_destination_tower_only() {
        let mut board = Board::new(3).expect("ring count is in range");

        assert!(!board.is_complete());
        assert_eq!(board.apply_move(Tower::Source, Tower::Destination), Ok(1));
        assert!(!board.is_complete());
        assert_eq!(board.stack(Tower::Destination).len(), 1);
    }

    #[test]
    fn letters_map_to_towers_in_either_case() {
        assert_eq!(Tower::from_letter('A'), Some(Tower::Source));
        assert_eq!(Tower::from_letter('a'), Some(Tower::Source));
        assert_eq!(Tower::from_letter('S'), Some(Tower::Auxiliary));
        assert_eq!(Tower::from_letter('d'), Some(Tower::Destination));
        assert_eq!(Tower::from_letter('x'), None);
        assert_eq!(Tower::from_letter('1'), None);
    }
}
