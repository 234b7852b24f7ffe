//! Full-game scenarios driven through the public interface, one applied
//! move at a time, the way an orchestrator would.

use chess_rules::{
    classify, is_in_check, legal_moves, move_notation, Board, Color, GameStatus, Move, PieceKind,
    Square,
};

struct Game {
    board: Board,
    turn: Color,
    last_move: Option<Move>,
}

impl Game {
    fn new() -> Game {
        Game {
            board: Board::startpos(),
            turn: Color::White,
            last_move: None,
        }
    }

    fn legal(&self) -> Vec<Move> {
        legal_moves(&self.board, self.turn, self.last_move.as_ref()).unwrap()
    }

    /// Plays a move given in coordinate form, panicking if it is not legal.
    fn play(&mut self, from: &str, to: &str) -> Move {
        let from = Square::parse(from).unwrap();
        let to = Square::parse(to).unwrap();
        let mv = *self
            .legal()
            .iter()
            .find(|m| m.from == from && m.to == to)
            .unwrap_or_else(|| panic!("no legal move {}{}", from, to));
        self.board.apply(&mv).unwrap();
        self.last_move = Some(mv);
        self.turn = self.turn.other();
        mv
    }

    fn status(&self) -> GameStatus {
        classify(&self.board, self.turn, self.last_move.as_ref()).unwrap()
    }
}

#[test]
fn scholars_mate_ends_in_checkmate() {
    let mut game = Game::new();
    game.play("e2", "e4");
    game.play("e7", "e5");
    game.play("f1", "c4");
    game.play("b8", "c6");
    game.play("d1", "h5");
    game.play("g8", "f6");
    let mate = game.play("h5", "f7");

    assert_eq!(move_notation(&mate), "Qxf7");
    assert!(is_in_check(&game.board, Color::Black).unwrap());
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn en_passant_window_opens_and_closes() {
    let mut game = Game::new();
    game.play("e2", "e4");
    game.play("a7", "a6");
    game.play("e4", "e5");
    game.play("d7", "d5");

    // the double push just happened: exd6 is on the table
    let ep = *game
        .legal()
        .iter()
        .find(|m| m.en_passant)
        .expect("en passant available right after the double push");
    assert_eq!(ep.from, Square::parse("e5").unwrap());
    assert_eq!(ep.to, Square::parse("d6").unwrap());

    // decline it; one ply later the window is gone
    game.play("h2", "h3");
    game.play("a6", "a5");
    assert!(!game.legal().iter().any(|m| m.en_passant));
}

#[test]
fn en_passant_capture_removes_the_pushed_pawn() {
    let mut game = Game::new();
    game.play("e2", "e4");
    game.play("a7", "a6");
    game.play("e4", "e5");
    game.play("d7", "d5");
    let mv = game.play("e5", "d6");

    assert!(mv.en_passant);
    assert_eq!(move_notation(&mv), "xd6");
    assert_eq!(game.board.piece_at(Square::parse("d5").unwrap()), None);
    assert_eq!(game.board.piece_count(Color::Black), 15);
    let landed = game.board.piece_at(Square::parse("d6").unwrap()).unwrap();
    assert_eq!(game.board.piece(landed).kind, PieceKind::Pawn);
    assert_eq!(game.board.piece(landed).color, Color::White);
}

#[test]
fn both_sides_castle_kingside() {
    let mut game = Game::new();
    game.play("g1", "f3");
    game.play("g8", "f6");
    game.play("e2", "e3");
    game.play("e7", "e6");
    game.play("f1", "e2");
    game.play("f8", "e7");

    let castle = game.play("e1", "g1");
    assert_eq!(move_notation(&castle), "O-O");
    let rook = game.board.piece_at(Square::parse("f1").unwrap()).unwrap();
    assert_eq!(game.board.piece(rook).kind, PieceKind::Rook);

    let castle = game.play("e8", "g8");
    assert_eq!(move_notation(&castle), "O-O");
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn castling_is_gone_after_the_king_returns_home() {
    let mut game = Game::new();
    game.play("e2", "e4");
    game.play("e7", "e5");
    game.play("e1", "e2");
    game.play("a7", "a6");
    game.play("e2", "e1");
    game.play("a6", "a5");

    // king is back on e1 but the has-moved flag is permanent
    assert!(!game.legal().iter().any(|m| m.is_castle()));
}

#[test]
fn promotion_choice_is_honored_in_play() {
    let mut game = Game::new();
    game.board = Board::from_fen("k7/6P1/8/8/8/8/8/7K w - - 0 1");

    let moves = game.legal();
    let under = moves
        .iter()
        .find(|m| m.promotion == Some(PieceKind::Knight))
        .expect("knight promotion offered");
    game.board.apply(under).unwrap();

    let promoted = game.board.piece_at(Square::parse("g8").unwrap()).unwrap();
    assert_eq!(game.board.piece(promoted).kind, PieceKind::Knight);
    assert_eq!(move_notation(under), "-g8=N");
}
