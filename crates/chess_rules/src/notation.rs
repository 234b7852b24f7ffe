use crate::types::*;

/// Notation string for a completed move: `O-O`/`O-O-O` for castling,
/// otherwise piece letter (omitted for pawns), `x` when capturing else `-`,
/// destination in file+rank form, and an `=<LETTER>` promotion suffix.
/// Pure function of the move, carries no engine state.
pub fn move_notation(mv: &Move) -> String {
    if mv.is_castle() {
        return if mv.to.file == 6 {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let mut out = String::new();
    if mv.kind != PieceKind::Pawn {
        out.push(mv.kind.letter());
    }
    out.push(if mv.captured.is_some() { 'x' } else { '-' });
    out.push_str(&mv.to.coord());
    if let Some(choice) = mv.promotion {
        out.push('=');
        out.push(choice.letter());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(from: &str, to: &str, kind: PieceKind) -> Move {
        Move::new(
            Square::parse(from).unwrap(),
            Square::parse(to).unwrap(),
            0,
            kind,
            Color::White,
        )
    }

    #[test]
    fn pawn_push_and_capture() {
        let push = base("e2", "e4", PieceKind::Pawn);
        assert_eq!(move_notation(&push), "-e4");

        let mut take = base("e4", "d5", PieceKind::Pawn);
        take.captured = Some(9);
        assert_eq!(move_notation(&take), "xd5");
    }

    #[test]
    fn piece_letter_and_promotion() {
        let mut knight = base("g1", "f3", PieceKind::Knight);
        assert_eq!(move_notation(&knight), "N-f3");
        knight.captured = Some(3);
        assert_eq!(move_notation(&knight), "Nxf3");

        let mut promo = base("e7", "e8", PieceKind::Pawn);
        promo.promotion = Some(PieceKind::Queen);
        assert_eq!(move_notation(&promo), "-e8=Q");
    }

    #[test]
    fn castling_strings() {
        let mut short = base("e1", "g1", PieceKind::King);
        short.rook_move = Some((Square::parse("h1").unwrap(), Square::parse("f1").unwrap()));
        assert_eq!(move_notation(&short), "O-O");

        let mut long = base("e1", "c1", PieceKind::King);
        long.rook_move = Some((Square::parse("a1").unwrap(), Square::parse("d1").unwrap()));
        assert_eq!(move_notation(&long), "O-O-O");
    }
}
