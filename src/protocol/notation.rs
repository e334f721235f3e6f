//! Kalah position notation.
//!
//! A compact single-token string for a full board, in the spirit of chess
//! FEN. Four sections separated by `/`:
//!
//! `<pits 1-6>/<store 7>/<pits 8-13>/<store 14>`
//!
//! Pit sections are six comma-separated counts. The standard opening is
//! `6,6,6,6,6,6/0/6,6,6,6,6,6/0`.

use crate::board::{Board, Player, MAX_TOTAL_STONES, PITS_PER_SIDE, SLOT_COUNT};

/// The standard opening position.
pub const START_POSITION: &str = "6,6,6,6,6,6/0/6,6,6,6,6,6/0";

/// Errors that can occur while parsing position notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 4 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("expected {} pit counts for player {player}, got {got}", PITS_PER_SIDE)]
    WrongPitCount { player: u8, got: usize },

    #[error("invalid stone count: '{0}'")]
    InvalidCount(String),

    #[error("board holds more than {} stones", MAX_TOTAL_STONES)]
    TooManyStones,
}

fn parse_count(s: &str) -> Result<u32, NotationError> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| NotationError::InvalidCount(s.to_string()))
}

/// Parses one side's six pit counts.
fn parse_side(s: &str, player: Player) -> Result<[u32; PITS_PER_SIDE], NotationError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != PITS_PER_SIDE {
        return Err(NotationError::WrongPitCount {
            player: player.number(),
            got: parts.len(),
        });
    }
    let mut counts = [0; PITS_PER_SIDE];
    for (slot, part) in counts.iter_mut().zip(parts) {
        *slot = parse_count(part)?;
    }
    Ok(counts)
}

/// Parses position notation into a board.
pub fn parse_position(s: &str) -> Result<Board, NotationError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != 4 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let side_one = parse_side(sections[0], Player::One)?;
    let store_one = parse_count(sections[1])?;
    let side_two = parse_side(sections[2], Player::Two)?;
    let store_two = parse_count(sections[3])?;

    let mut counts = [0; SLOT_COUNT];
    for (i, pit) in Player::One.pits().enumerate() {
        counts[pit - 1] = side_one[i];
    }
    counts[Player::One.store() - 1] = store_one;
    for (i, pit) in Player::Two.pits().enumerate() {
        counts[pit - 1] = side_two[i];
    }
    counts[Player::Two.store() - 1] = store_two;

    // Every slot stays within the board total, so bounding it here keeps
    // all later sowing and capture arithmetic in range.
    let total = counts
        .iter()
        .try_fold(0u32, |acc, &c| acc.checked_add(c))
        .filter(|&t| t <= MAX_TOTAL_STONES);
    if total.is_none() {
        return Err(NotationError::TooManyStones);
    }

    Ok(Board::from_counts(counts))
}

fn encode_side(board: &Board, player: Player) -> String {
    player
        .pits()
        .map(|p| board.num_stones(p).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Encodes a board into canonical position notation.
pub fn encode_position(board: &Board) -> String {
    format!(
        "{}/{}/{}/{}",
        encode_side(board, Player::One),
        board.store_count(Player::One),
        encode_side(board, Player::Two),
        board.store_count(Player::Two)
    )
}
