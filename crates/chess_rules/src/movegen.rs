use crate::{board::Board, types::*};

/// Expansion order for a surviving promotion move.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Pseudo-legal moves for every piece of one color, in stable piece-list
/// order. Obeys geometry and blocking only; king safety, en-passant history
/// and castling are the legality filter's business.
pub fn side_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for id in board.pieces(color) {
        piece_moves_into(board, id, &mut out);
    }
    out
}

/// Pseudo-legal moves for a single piece.
pub fn piece_moves(board: &Board, id: PieceId) -> Vec<Move> {
    let mut out = Vec::new();
    piece_moves_into(board, id, &mut out);
    out
}

pub fn piece_moves_into(board: &Board, id: PieceId, out: &mut Vec<Move>) {
    let piece = *board.piece(id);
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, id, &piece, out),
        PieceKind::Knight => gen_steps(board, id, &piece, &KNIGHT_STEPS, out),
        PieceKind::Bishop => gen_slider(board, id, &piece, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(board, id, &piece, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(board, id, &piece, &ORTHOGONALS, out);
            gen_slider(board, id, &piece, &DIAGONALS, out);
        }
        PieceKind::King => gen_steps(board, id, &piece, &KING_STEPS, out),
    }
}

fn basic(piece: &Piece, id: PieceId, to: Square) -> Move {
    Move::new(piece.square, to, id, piece.kind, piece.color)
}

fn gen_slider(board: &Board, id: PieceId, piece: &Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, df) in dirs {
        let mut next = piece.square.offset(dr, df);
        while let Some(to) = next {
            match board.piece_at(to) {
                None => out.push(basic(piece, id, to)),
                Some(target) if board.piece(target).color != piece.color => {
                    let mut mv = basic(piece, id, to);
                    mv.captured = Some(target);
                    out.push(mv);
                    break;
                }
                _ => break,
            }
            next = to.offset(dr, df);
        }
    }
}

fn gen_steps(board: &Board, id: PieceId, piece: &Piece, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, df) in steps {
        if let Some(to) = piece.square.offset(dr, df) {
            match board.piece_at(to) {
                None => out.push(basic(piece, id, to)),
                Some(target) if board.piece(target).color != piece.color => {
                    let mut mv = basic(piece, id, to);
                    mv.captured = Some(target);
                    out.push(mv);
                }
                _ => {}
            }
        }
    }
}

fn gen_pawn(board: &Board, id: PieceId, piece: &Piece, out: &mut Vec<Move>) {
    let dir: i8 = match piece.color {
        Color::White => 1,
        Color::Black => -1,
    };
    let promo_rank: u8 = match piece.color {
        Color::White => 7,
        Color::Black => 0,
    };

    let push_promo = |mut mv: Move, out: &mut Vec<Move>| {
        if mv.to.rank == promo_rank {
            mv.promotion = Some(PieceKind::Queen); // placeholder, expanded later
        }
        out.push(mv);
    };

    // single push, then double push for a pawn that has never moved
    if let Some(ahead) = piece.square.offset(dir, 0) {
        if board.piece_at(ahead).is_none() {
            push_promo(basic(piece, id, ahead), out);

            if !piece.has_moved {
                if let Some(two_ahead) = ahead.offset(dir, 0) {
                    if board.piece_at(two_ahead).is_none() {
                        out.push(basic(piece, id, two_ahead));
                    }
                }
            }
        }
    }

    // diagonal captures
    for df in [-1, 1] {
        if let Some(to) = piece.square.offset(dir, df) {
            if let Some(target) = board.piece_at(to) {
                if board.piece(target).color != piece.color {
                    let mut mv = basic(piece, id, to);
                    mv.captured = Some(target);
                    push_promo(mv, out);
                }
            }
        }
    }

    // en-passant candidate: enemy pawn alongside, landing square empty.
    // Only a suggestion; whether that pawn really just double-pushed is
    // checked against the last move by the legality filter.
    for df in [-1, 1] {
        let beside = match piece.square.offset(0, df) {
            Some(sq) => sq,
            None => continue,
        };
        let landing = match piece.square.offset(dir, df) {
            Some(sq) => sq,
            None => continue,
        };
        if board.piece_at(landing).is_some() {
            continue;
        }
        if let Some(target) = board.piece_at(beside) {
            let victim = board.piece(target);
            if victim.color != piece.color && victim.kind == PieceKind::Pawn {
                let mut mv = basic(piece, id, landing);
                mv.captured = Some(target);
                mv.en_passant = true;
                out.push(mv);
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
