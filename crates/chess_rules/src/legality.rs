use crate::{board::Board, movegen, types::*};

/// Fully legal moves for one side. `last_move` is the previously applied
/// move, needed for the en-passant history rule; pass `None` on the first
/// ply (en-passant candidates are then simply unavailable, not an error).
///
/// The live board is never mutated; every what-if runs on a clone.
pub fn legal_moves(
    board: &Board,
    side: Color,
    last_move: Option<&Move>,
) -> Result<Vec<Move>, RulesError> {
    let mut out = Vec::new();
    collect_legal(board, side, last_move, movegen::side_moves(board, side), &mut out)?;
    synthesize_castling(board, side, &mut out)?;
    Ok(out)
}

/// Legal moves of a single piece, for UI move highlighting.
pub fn legal_moves_for(
    board: &Board,
    id: PieceId,
    last_move: Option<&Move>,
) -> Result<Vec<Move>, RulesError> {
    let piece = *board.piece(id);
    let mut out = Vec::new();
    collect_legal(
        board,
        piece.color,
        last_move,
        movegen::piece_moves(board, id),
        &mut out,
    )?;
    if piece.kind == PieceKind::King {
        synthesize_castling(board, piece.color, &mut out)?;
    }
    Ok(out)
}

/// True iff any opposing pseudo-legal move lands on `side`'s king square.
pub fn in_check(board: &Board, side: Color) -> Result<bool, RulesError> {
    let king = board.king(side).ok_or(RulesError::MissingKing(side))?;
    let king_sq = board.piece(king).square;
    let attacked = movegen::side_moves(board, side.other())
        .iter()
        .any(|mv| mv.to == king_sq);
    Ok(attacked)
}

fn collect_legal(
    board: &Board,
    side: Color,
    last_move: Option<&Move>,
    pseudo: Vec<Move>,
    out: &mut Vec<Move>,
) -> Result<(), RulesError> {
    for mv in pseudo {
        if mv.en_passant && !en_passant_allowed(&mv, last_move) {
            continue;
        }
        if leaves_king_exposed(board, &mv, side)? {
            continue;
        }
        if mv.promotion.is_some() {
            for kind in movegen::PROMOTION_CHOICES {
                let mut choice = mv;
                choice.promotion = Some(kind);
                out.push(choice);
            }
        } else {
            out.push(mv);
        }
    }
    Ok(())
}

/// Strict en-passant rule: the captured pawn must be the piece that moved
/// last, and that move must have been a two-rank advance. Anything older is
/// gone for good.
fn en_passant_allowed(mv: &Move, last_move: Option<&Move>) -> bool {
    let last = match last_move {
        Some(last) => last,
        None => return false,
    };
    let victim = match mv.captured {
        Some(victim) => victim,
        None => return false,
    };
    last.mover == victim
        && last.kind == PieceKind::Pawn
        && (last.from.rank as i8 - last.to.rank as i8).abs() == 2
}

fn leaves_king_exposed(board: &Board, mv: &Move, side: Color) -> Result<bool, RulesError> {
    let mut probe = board.clone();
    probe.apply(mv)?;
    in_check(&probe, side)
}

struct CastleLane {
    rook_file: u8,
    /// Files between king and rook that must be empty.
    between: &'static [u8],
    /// Files the king occupies on the way, destination included; none may
    /// be attacked.
    path: [u8; 2],
    king_to: u8,
    rook_to: u8,
}

const KINGSIDE: CastleLane = CastleLane {
    rook_file: 7,
    between: &[5, 6],
    path: [5, 6],
    king_to: 6,
    rook_to: 5,
};
const QUEENSIDE: CastleLane = CastleLane {
    rook_file: 0,
    between: &[1, 2, 3],
    path: [3, 2],
    king_to: 2,
    rook_to: 3,
};

/// Appends 0-2 castling moves. Requires an unmoved king and rook, an empty
/// lane between them, and a king start square and path free of attacks.
fn synthesize_castling(board: &Board, side: Color, out: &mut Vec<Move>) -> Result<(), RulesError> {
    let king_id = board.king(side).ok_or(RulesError::MissingKing(side))?;
    let king = *board.piece(king_id);
    let rank = match side {
        Color::White => 0,
        Color::Black => 7,
    };
    if king.has_moved || king.square != Square::new(rank, 4) {
        return Ok(());
    }
    if in_check(board, side)? {
        return Ok(());
    }

    'lanes: for lane in [KINGSIDE, QUEENSIDE] {
        let rook_id = match board.piece_at(Square::new(rank, lane.rook_file)) {
            Some(id) => id,
            None => continue,
        };
        let rook = board.piece(rook_id);
        if rook.kind != PieceKind::Rook || rook.color != side || rook.has_moved {
            continue;
        }
        for &file in lane.between {
            if board.piece_at(Square::new(rank, file)).is_some() {
                continue 'lanes;
            }
        }
        for &file in &lane.path {
            if attacked_with_king_on(board, side, king_id, Square::new(rank, file))? {
                continue 'lanes;
            }
        }

        let mut mv = Move::new(
            king.square,
            Square::new(rank, lane.king_to),
            king_id,
            PieceKind::King,
            side,
        );
        mv.rook_move = Some((rook.square, Square::new(rank, lane.rook_to)));
        if !leaves_king_exposed(board, &mv, side)? {
            out.push(mv);
        }
    }
    Ok(())
}

/// Attack test for an empty square the king would cross: park the king
/// there on a clone and ask `in_check`. Placing the king first means pawn
/// control of the empty square is visible as a capture candidate.
fn attacked_with_king_on(
    board: &Board,
    side: Color,
    king_id: PieceId,
    to: Square,
) -> Result<bool, RulesError> {
    let mut probe = board.clone();
    let from = probe.piece(king_id).square;
    let step = Move::new(from, to, king_id, PieceKind::King, side);
    probe.apply(&step)?;
    in_check(&probe, side)
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
