use serde::{Deserialize, Serialize};

use crate::types::*;

/// The authoritative position. Owns every piece exactly once, in a flat
/// arena; the square map and the per-color lists store arena indices. The
/// king entry per color is refreshed on every mutation so it never dangles.
///
/// `apply` performs no legality checking at all; the legality filter runs
/// candidate moves on clones and only hands validated moves back here.
#[derive(Clone, Debug)]
pub struct Board {
    arena: Vec<Piece>,
    squares: [[Option<PieceId>; 8]; 8],
    lists: [Vec<PieceId>; 2],
    kings: [Option<PieceId>; 2],
}

/// Render-facing view of one occupied square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareView {
    pub kind: PieceKind,
    pub color: Color,
}

/// Position snapshot for rendering or external persistence.
/// `squares[rank][file]`, rank 0 = White's back rank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub squares: [[Option<SquareView>; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            arena: Vec::with_capacity(32),
            squares: [[None; 8]; 8],
            lists: [Vec::with_capacity(16), Vec::with_capacity(16)],
            kings: [None, None],
        }
    }

    pub fn startpos() -> Board {
        let mut bd = Board::empty();

        for file in 0..8 {
            bd.add_piece(PieceKind::Pawn, Color::White, Square::new(1, file));
            bd.add_piece(PieceKind::Pawn, Color::Black, Square::new(6, file));
        }

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            bd.add_piece(kind, Color::White, Square::new(0, file as u8));
            bd.add_piece(kind, Color::Black, Square::new(7, file as u8));
        }
        bd
    }

    /// Test and setup tooling: builds a position from the piece-placement
    /// and castling fields of a FEN string. Side to move, en-passant square
    /// and the clocks are ignored; the caller tracks the turn and the last
    /// move itself. Panics on malformed input.
    pub fn from_fen(fen: &str) -> Board {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(!parts.is_empty(), "Invalid FEN: empty string");
        let board_part = parts[0];
        let castle_part = parts.get(2).copied().unwrap_or("-");

        let mut bd = Board::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        assert!(ranks.len() == 8, "Invalid FEN board section");

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8; // FEN lists rank 8 .. 1
            let mut file: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as u8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    assert!(file < 8, "Too many files in FEN rank");
                    bd.add_piece(kind, color, Square::new(rank, file));
                    file += 1;
                }
            }
            assert!(file == 8, "Not enough files in FEN rank");
        }

        bd.apply_fen_flags(castle_part);
        bd
    }

    /// Maps the FEN castling field onto has-moved flags: pawns off their
    /// start rank count as moved, kings and rooks count as moved unless a
    /// matching castling right says otherwise.
    fn apply_fen_flags(&mut self, castle_part: &str) {
        for piece in &mut self.arena {
            let start_rank = match piece.color {
                Color::White => 1,
                Color::Black => 6,
            };
            match piece.kind {
                PieceKind::Pawn => piece.has_moved = piece.square.rank != start_rank,
                PieceKind::King | PieceKind::Rook => piece.has_moved = true,
                _ => {}
            }
        }
        if castle_part == "-" {
            return;
        }
        for c in castle_part.chars() {
            let (color, rook_file) = match c {
                'K' => (Color::White, 7),
                'Q' => (Color::White, 0),
                'k' => (Color::Black, 7),
                'q' => (Color::Black, 0),
                _ => panic!("Invalid castling char in FEN: {}", c),
            };
            let rank = match color {
                Color::White => 0,
                Color::Black => 7,
            };
            self.clear_moved_flag(Square::new(rank, 4), PieceKind::King, color);
            self.clear_moved_flag(Square::new(rank, rook_file), PieceKind::Rook, color);
        }
    }

    fn clear_moved_flag(&mut self, sq: Square, kind: PieceKind, color: Color) {
        if let Some(id) = self.piece_at(sq) {
            let piece = &mut self.arena[id];
            if piece.kind == kind && piece.color == color {
                piece.has_moved = false;
            }
        }
    }

    fn add_piece(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        let id = self.arena.len();
        self.arena.push(Piece {
            kind,
            color,
            square,
            has_moved: false,
        });
        self.squares[square.rank as usize][square.file as usize] = Some(id);
        self.lists[color.idx()].push(id);
        if kind == PieceKind::King {
            self.kings[color.idx()] = Some(id);
        }
        id
    }

    pub fn piece_at(&self, sq: Square) -> Option<PieceId> {
        self.squares[sq.rank as usize][sq.file as usize]
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id]
    }

    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.kings[color.idx()]
    }

    /// Piece ids of one color in stable insertion order. Iteration order is
    /// what makes move enumeration deterministic.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.lists[color.idx()].iter().copied()
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.lists[color.idx()].len()
    }

    /// Executes a fully specified move. Handles capture removal (including
    /// the en-passant victim, which does not sit on the destination square),
    /// promotion replacement and the rook leg of a castling move.
    pub fn apply(&mut self, mv: &Move) -> Result<(), RulesError> {
        if self.piece_at(mv.from) != Some(mv.mover) {
            return Err(RulesError::EmptyOrigin(mv.from));
        }

        if let Some(cap) = mv.captured {
            // an id outside the arena is the same corruption as a piece
            // missing from the lists: report it, don't index
            let cap_sq = self
                .arena
                .get(cap)
                .map(|piece| piece.square)
                .ok_or(RulesError::PieceListDesync(mv.to))?;
            self.squares[cap_sq.rank as usize][cap_sq.file as usize] = None;
            self.remove_from_list(cap)?;
        }

        self.squares[mv.from.rank as usize][mv.from.file as usize] = None;
        self.squares[mv.to.rank as usize][mv.to.file as usize] = Some(mv.mover);
        let piece = &mut self.arena[mv.mover];
        piece.square = mv.to;
        piece.has_moved = true;

        if let Some(choice) = mv.promotion {
            // The pawn is destroyed and a new piece is created on its square.
            self.remove_from_list(mv.mover)?;
            self.squares[mv.to.rank as usize][mv.to.file as usize] = None;
            let id = self.add_piece(choice, mv.color, mv.to);
            self.arena[id].has_moved = true;
        }

        if let Some((rook_from, rook_to)) = mv.rook_move {
            let rook = self
                .piece_at(rook_from)
                .ok_or(RulesError::EmptyOrigin(rook_from))?;
            self.squares[rook_from.rank as usize][rook_from.file as usize] = None;
            self.squares[rook_to.rank as usize][rook_to.file as usize] = Some(rook);
            let piece = &mut self.arena[rook];
            piece.square = rook_to;
            piece.has_moved = true;
        }

        Ok(())
    }

    fn remove_from_list(&mut self, id: PieceId) -> Result<(), RulesError> {
        for list in self.lists.iter_mut() {
            if let Some(pos) = list.iter().position(|&p| p == id) {
                list.remove(pos);
                return Ok(());
            }
        }
        Err(RulesError::PieceListDesync(self.arena[id].square))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut squares = [[None; 8]; 8];
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(id) = self.squares[rank][file] {
                    let piece = &self.arena[id];
                    squares[rank][file] = Some(SquareView {
                        kind: piece.kind,
                        color: piece.color,
                    });
                }
            }
        }
        BoardSnapshot { squares }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let cell = match self.piece_at(Square::new(rank, file)) {
                    Some(id) => glyph(self.piece(id)),
                    None => '.',
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

fn glyph(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
