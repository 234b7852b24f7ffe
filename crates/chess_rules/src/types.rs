use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Letter used in move notation (`P` is never printed for pawns).
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Board coordinate. Rank 0 is White's back rank, file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    pub fn new(rank: u8, file: u8) -> Square {
        debug_assert!(rank < 8 && file < 8);
        Square { rank, file }
    }

    /// Builds a square from signed coordinates, `None` when off the board.
    pub fn at(rank: i8, file: i8) -> Option<Square> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    pub fn offset(self, dr: i8, df: i8) -> Option<Square> {
        Square::at(self.rank as i8 + dr, self.file as i8 + df)
    }

    /// File+rank form, e.g. `e4`.
    pub fn coord(self) -> String {
        let f = (b'a' + self.file) as char;
        let r = (b'1' + self.rank) as char;
        format!("{f}{r}")
    }

    pub fn parse(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        Some(Square {
            rank: b[1] - b'1',
            file: b[0] - b'a',
        })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coord())
    }
}

/// Index into the board's piece arena. Ids stay stable across clones and
/// captures; captured pieces keep their slot but leave the square map and
/// color lists.
pub type PieceId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

/// A fully specified move. Pure value: nothing changes until `Board::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub mover: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub captured: Option<PieceId>,
    /// Pseudo-legal pawn moves onto the far rank carry `Some(Queen)` as a
    /// placeholder; the legality filter expands it into the four choices.
    pub promotion: Option<PieceKind>,
    /// Rook relocation carried by a castling move.
    pub rook_move: Option<(Square, Square)>,
    pub en_passant: bool,
}

impl Move {
    pub fn new(from: Square, to: Square, mover: PieceId, kind: PieceKind, color: Color) -> Move {
        Move {
            from,
            to,
            mover,
            kind,
            color,
            captured: None,
            promotion: None,
            rook_move: None,
            en_passant: false,
        }
    }

    pub fn is_castle(&self) -> bool {
        self.rook_move.is_some()
    }
}

/// Invariant violations surfaced to the orchestrator instead of panicking.
/// All of these mean the board data is corrupt or the move was not produced
/// by the legality filter; none are recoverable mid-game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("captured piece on {0} is missing from both piece lists")]
    PieceListDesync(Square),
    #[error("no {0:?} king on the board")]
    MissingKing(Color),
    #[error("move references {0} but the moving piece is not there")]
    EmptyOrigin(Square),
}
