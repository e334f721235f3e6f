//! Kalah move resolution.
//!
//! Sows the stones of one pit around the board, credits the mover's store
//! on the way past, and applies the capture and bonus-turn rules to the
//! final stone.

use serde::Serialize;
use tracing::{debug, trace};

use crate::board::layout::{complement, in_range, is_store, owner_of, Player, PITS_PER_SIDE};
use crate::board::{Board, Step};

/// A move the resolver refused to apply. The board is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("position {0} is not on the board")]
    OutOfRange(usize),

    #[error("position {0} is a store, not a pit")]
    Store(usize),

    #[error("pit {pit} does not belong to player {}", .player.number())]
    NotOwned { pit: usize, player: Player },

    #[error("pit {0} is empty")]
    EmptyPit(usize),
}

/// Where the final stone of a move came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Landing {
    /// The mover's own store.
    OwnStore,
    /// An ordinary pit, on either side.
    Pit(usize),
}

/// Which branch a resolved move took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeKind {
    Bonus,
    NormalWithCapture,
    NormalNoCapture,
}

/// Result of resolving a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// Net stones added to the mover's store, sowing and capture combined.
    pub stones_gained: u32,
    /// Stones lifted from the starting pit.
    pub sown: u32,
    /// Stones moved to a store by capture (0 if none).
    pub captured: u32,
    /// The last stone landed in the mover's own store.
    pub bonus_turn: bool,
    /// Where the final stone came to rest.
    pub landing: Landing,
}

impl MoveOutcome {
    /// Stones that left the starting pit plus stones captured.
    pub fn distributed(&self) -> u32 {
        self.sown + self.captured
    }

    /// Classifies the move as bonus, capture, or plain sowing.
    pub fn kind(&self) -> OutcomeKind {
        if self.bonus_turn {
            OutcomeKind::Bonus
        } else if self.captured > 0 {
            OutcomeKind::NormalWithCapture
        } else {
            OutcomeKind::NormalNoCapture
        }
    }
}

/// Reusable move resolver.
///
/// Holds no board; every call borrows the board it acts on. The last
/// outcome is kept so a game loop can ask about the bonus turn right after
/// the move, but each outcome also carries that flag directly.
#[derive(Debug, Clone, Default)]
pub struct MoveResolver {
    last: Option<MoveOutcome>,
}

impl MoveResolver {
    /// Creates a resolver with no move history.
    pub fn new() -> Self {
        MoveResolver { last: None }
    }

    /// Plays `start` for `player`.
    ///
    /// Returns the outcome of the move, whose `stones_gained` is the
    /// difference in the mover's store count across the move. Fails without
    /// touching the board if the pit is off the board, a store, owned by the
    /// other player, or empty.
    pub fn apply_move(
        &mut self,
        board: &mut Board,
        start: usize,
        player: Player,
    ) -> Result<MoveOutcome, InvalidMove> {
        validate(board, start, player)?;

        let before = board.store_count(player);
        let (sown, landing, captured) = distribute_stones(board, start, player);
        let after = board.store_count(player);

        let outcome = MoveOutcome {
            stones_gained: after - before,
            sown,
            captured,
            bonus_turn: landing == Landing::OwnStore,
            landing,
        };
        debug!(
            player = player.number(),
            start,
            gained = outcome.stones_gained,
            captured,
            bonus = outcome.bonus_turn,
            "move resolved"
        );
        self.last = Some(outcome);
        Ok(outcome)
    }

    /// True if the most recent successful move ended in the mover's store.
    ///
    /// Overwritten on every successful `apply_move`; read it immediately.
    pub fn is_bonus_turn_pending(&self) -> bool {
        self.last.is_some_and(|o| o.bonus_turn)
    }

    /// Outcome of the most recent successful move, if any.
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last
    }
}

/// One-shot convenience wrapper around [`MoveResolver::apply_move`].
pub fn apply_move(
    board: &mut Board,
    start: usize,
    player: Player,
) -> Result<MoveOutcome, InvalidMove> {
    MoveResolver::new().apply_move(board, start, player)
}

fn validate(board: &Board, start: usize, player: Player) -> Result<(), InvalidMove> {
    if !in_range(start) {
        return Err(InvalidMove::OutOfRange(start));
    }
    if is_store(start) {
        return Err(InvalidMove::Store(start));
    }
    if owner_of(start) != Some(player) {
        return Err(InvalidMove::NotOwned { pit: start, player });
    }
    if board.num_stones(start) == 0 {
        return Err(InvalidMove::EmptyPit(start));
    }
    Ok(())
}

/// Sows the stones of `start` and applies the end-of-move rules.
///
/// Returns the stones lifted, where the last one landed, and the stones
/// captured. `start` must already be validated for `mover`; an empty
/// `start` sows nothing and reports landing where it began.
pub fn distribute_stones(board: &mut Board, start: usize, mover: Player) -> (u32, Landing, u32) {
    let initial = board.remove_stones(start);
    if initial == 0 {
        return (0, Landing::Pit(start), 0);
    }
    let mut cursor = board.cursor(start, mover);
    let mut last = Step::OwnStore;
    let mut landed_in_empty = false;

    for _ in 0..initial {
        last = cursor.step();
        landed_in_empty = board.add_stone(last.position(mover)) == 1;
    }

    match last {
        Step::OwnStore => (initial, Landing::OwnStore, 0),
        Step::Pit(stop) => {
            let captured = if landed_in_empty && owner_of(stop) == Some(mover) {
                capture_stones(board, stop)
            } else {
                0
            };
            (initial, Landing::Pit(stop), captured)
        }
    }
}

/// Captures the stones in `stopping_point` and the pit across from it.
///
/// Nothing happens if the opposite pit is empty. Otherwise both pits are
/// emptied and their sum goes to the store on `stopping_point`'s side.
/// Returns the number of stones captured.
pub fn capture_stones(board: &mut Board, stopping_point: usize) -> u32 {
    let Some(other) = complement(stopping_point) else {
        return 0;
    };
    if board.num_stones(other) == 0 {
        return 0;
    }

    let captured = board.remove_stones(stopping_point) + board.remove_stones(other);
    let side = if stopping_point <= PITS_PER_SIDE {
        Player::One
    } else {
        Player::Two
    };
    debug_assert_eq!(owner_of(stopping_point), Some(side));
    board.add_to_store(side, captured);
    trace!(stopping_point, other, captured, "capture");
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::{STORE_ONE, STORE_TWO};

    fn board_with(pairs: &[(usize, u32)]) -> Board {
        let mut counts = [0; 14];
        for &(pos, n) in pairs {
            counts[pos - 1] = n;
        }
        Board::from_counts(counts)
    }

    #[test]
    fn three_stones_from_pit_one() {
        let mut board = Board::new();
        board.remove_stones(1);
        for _ in 0..3 {
            board.add_stone(1);
        }
        let outcome = apply_move(&mut board, 1, Player::One).unwrap();
        assert_eq!(outcome.stones_gained, 0);
        assert_eq!(outcome.landing, Landing::Pit(4));
        assert!(!outcome.bonus_turn);
        assert_eq!(board.num_stones(1), 0);
        assert_eq!(board.num_stones(2), 7);
        assert_eq!(board.num_stones(3), 7);
        assert_eq!(board.num_stones(4), 7);
        assert_eq!(board.num_stones(5), 6);
    }

    #[test]
    fn single_stone_from_pit_six_is_bonus() {
        let mut board = board_with(&[(6, 1), (8, 4)]);
        let mut resolver = MoveResolver::new();
        let outcome = resolver.apply_move(&mut board, 6, Player::One).unwrap();
        assert!(outcome.bonus_turn);
        assert!(resolver.is_bonus_turn_pending());
        assert_eq!(outcome.stones_gained, 1);
        assert_eq!(outcome.captured, 0);
        assert_eq!(outcome.kind(), OutcomeKind::Bonus);
        assert_eq!(board.store_count(Player::One), 1);
    }

    #[test]
    fn player_two_bonus_lands_in_store_fourteen() {
        let mut board = board_with(&[(11, 3)]);
        let outcome = apply_move(&mut board, 11, Player::Two).unwrap();
        assert!(outcome.bonus_turn);
        assert_eq!(board.num_stones(STORE_TWO), 1);
        assert_eq!(board.num_stones(12), 1);
        assert_eq!(board.num_stones(13), 1);
    }

    #[test]
    fn capture_into_empty_own_pit() {
        let mut board = board_with(&[(2, 2), (4, 0), (10, 5)]);
        let outcome = apply_move(&mut board, 2, Player::One).unwrap();
        assert_eq!(outcome.landing, Landing::Pit(4));
        assert_eq!(outcome.captured, 6);
        assert_eq!(outcome.stones_gained, 6);
        assert_eq!(outcome.distributed(), 8);
        assert_eq!(outcome.kind(), OutcomeKind::NormalWithCapture);
        assert_eq!(board.num_stones(4), 0);
        assert_eq!(board.num_stones(10), 0);
        assert_eq!(board.num_stones(3), 1);
        assert_eq!(board.store_count(Player::One), 6);
    }

    #[test]
    fn player_two_capture_credits_store_two() {
        let mut board = board_with(&[(9, 1), (4, 3)]);
        let outcome = apply_move(&mut board, 9, Player::Two).unwrap();
        assert_eq!(outcome.landing, Landing::Pit(10));
        assert_eq!(outcome.captured, 4);
        assert_eq!(board.store_count(Player::Two), 4);
        assert_eq!(board.store_count(Player::One), 0);
    }

    #[test]
    fn empty_complement_means_no_capture() {
        let mut board = board_with(&[(2, 2), (12, 1)]);
        let outcome = apply_move(&mut board, 2, Player::One).unwrap();
        assert_eq!(outcome.captured, 0);
        assert_eq!(outcome.kind(), OutcomeKind::NormalNoCapture);
        assert_eq!(board.num_stones(3), 1);
        assert_eq!(board.num_stones(4), 1);
        assert_eq!(board.store_count(Player::One), 0);
    }

    #[test]
    fn landing_on_occupied_pit_does_not_capture() {
        let mut board = board_with(&[(2, 2), (4, 3), (10, 5)]);
        let outcome = apply_move(&mut board, 2, Player::One).unwrap();
        assert_eq!(outcome.captured, 0);
        assert_eq!(board.num_stones(4), 4);
        assert_eq!(board.num_stones(10), 5);
    }

    #[test]
    fn landing_on_empty_opponent_pit_does_not_capture() {
        let mut board = board_with(&[(5, 4), (4, 2)]);
        let outcome = apply_move(&mut board, 5, Player::One).unwrap();
        assert_eq!(outcome.landing, Landing::Pit(9));
        assert_eq!(outcome.captured, 0);
        assert_eq!(board.num_stones(9), 1);
        assert_eq!(board.num_stones(5), 0);
    }

    #[test]
    fn sowing_skips_opponent_store() {
        let mut board = board_with(&[(13, 3)]);
        apply_move(&mut board, 13, Player::Two).unwrap();
        assert_eq!(board.num_stones(STORE_TWO), 1);
        assert_eq!(board.num_stones(1), 1);
        assert_eq!(board.num_stones(2), 1);

        let mut board = board_with(&[(6, 9)]);
        let outcome = apply_move(&mut board, 6, Player::One).unwrap();
        assert_eq!(board.num_stones(STORE_TWO), 0);
        assert_eq!(outcome.landing, Landing::Pit(2));
        assert_eq!(board.num_stones(1), 1);
    }

    #[test]
    fn full_lap_returns_to_emptied_start_and_captures() {
        // 13 stones from pit 3 visit every slot except store 14 once,
        // the last landing back in the now-empty pit 3.
        let mut board = board_with(&[(3, 13)]);
        let outcome = apply_move(&mut board, 3, Player::One).unwrap();
        assert_eq!(outcome.landing, Landing::Pit(3));
        // pit 3 (1) + pit 11 (1) captured.
        assert_eq!(outcome.captured, 2);
        assert_eq!(outcome.stones_gained, 3);
        assert_eq!(board.num_stones(STORE_TWO), 0);
        assert_eq!(board.total_stones(), 13);
    }

    #[test]
    fn rejects_opponent_pit_without_mutation() {
        let mut board = Board::new();
        let before = board.clone();
        let err = apply_move(&mut board, 9, Player::One).unwrap_err();
        assert_eq!(err, InvalidMove::NotOwned { pit: 9, player: Player::One });
        assert_eq!(board, before);
    }

    #[test]
    fn rejects_stores_and_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            apply_move(&mut board, STORE_ONE, Player::One),
            Err(InvalidMove::Store(STORE_ONE))
        );
        assert_eq!(
            apply_move(&mut board, 0, Player::One),
            Err(InvalidMove::OutOfRange(0))
        );
        assert_eq!(
            apply_move(&mut board, 15, Player::Two),
            Err(InvalidMove::OutOfRange(15))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn rejects_empty_pit() {
        let mut board = board_with(&[(8, 3)]);
        assert_eq!(
            apply_move(&mut board, 1, Player::One),
            Err(InvalidMove::EmptyPit(1))
        );
    }

    #[test]
    fn bonus_flag_is_overwritten_by_next_move() {
        let mut board = board_with(&[(6, 1), (1, 1)]);
        let mut resolver = MoveResolver::new();
        assert!(!resolver.is_bonus_turn_pending());
        resolver.apply_move(&mut board, 6, Player::One).unwrap();
        assert!(resolver.is_bonus_turn_pending());
        resolver.apply_move(&mut board, 1, Player::One).unwrap();
        assert!(!resolver.is_bonus_turn_pending());
        assert_eq!(resolver.last_outcome().unwrap().landing, Landing::Pit(2));
    }

    #[test]
    fn rejected_move_keeps_previous_outcome() {
        let mut board = board_with(&[(6, 1)]);
        let mut resolver = MoveResolver::new();
        resolver.apply_move(&mut board, 6, Player::One).unwrap();
        assert!(resolver.apply_move(&mut board, 6, Player::One).is_err());
        assert!(resolver.is_bonus_turn_pending());
    }

    #[test]
    fn capture_stones_ignores_empty_complement() {
        let mut board = board_with(&[(4, 1)]);
        assert_eq!(capture_stones(&mut board, 4), 0);
        assert_eq!(board.num_stones(4), 1);
    }

    #[test]
    fn capture_stones_on_store_is_noop() {
        let mut board = board_with(&[(STORE_ONE, 5), (6, 2)]);
        assert_eq!(capture_stones(&mut board, STORE_ONE), 0);
        assert_eq!(board.num_stones(STORE_ONE), 5);
    }

    #[test]
    fn invalid_move_messages() {
        let err = InvalidMove::NotOwned { pit: 3, player: Player::Two };
        assert_eq!(err.to_string(), "pit 3 does not belong to player 2");
        assert_eq!(InvalidMove::EmptyPit(5).to_string(), "pit 5 is empty");
    }
}
