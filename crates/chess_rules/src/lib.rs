pub mod board;
pub mod legality;
pub mod movegen;
pub mod notation;
pub mod status;
pub mod types;

// Re-export the engine surface consumed by orchestrators (UI, future search)
pub use board::{Board, BoardSnapshot, SquareView};
pub use legality::{legal_moves, legal_moves_for};
pub use movegen::{piece_moves, side_moves, PROMOTION_CHOICES};
pub use notation::move_notation;
pub use status::{classify, is_in_check, GameStatus};
pub use types::*;
