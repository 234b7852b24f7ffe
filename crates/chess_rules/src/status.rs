use crate::{board::Board, legality, types::*};

/// Game state for the side about to move, re-evaluated after every applied
/// move. Zero legal moves is a normal outcome, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Legal moves exist but the king is attacked (UI highlight state).
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Pure check query, independent of full legality.
pub fn is_in_check(board: &Board, side: Color) -> Result<bool, RulesError> {
    legality::in_check(board, side)
}

pub fn classify(
    board: &Board,
    side: Color,
    last_move: Option<&Move>,
) -> Result<GameStatus, RulesError> {
    let moves = legality::legal_moves(board, side, last_move)?;
    let checked = legality::in_check(board, side)?;
    Ok(match (moves.is_empty(), checked) {
        (false, false) => GameStatus::Ongoing,
        (false, true) => GameStatus::Check,
        (true, true) => GameStatus::Checkmate,
        (true, false) => GameStatus::Stalemate,
    })
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
