use super::*;

#[test]
fn startpos_is_ongoing() {
    let bd = Board::startpos();
    assert_eq!(classify(&bd, Color::White, None).unwrap(), GameStatus::Ongoing);
    assert!(!is_in_check(&bd, Color::White).unwrap());
}

#[test]
fn check_with_escapes_is_not_terminal() {
    let bd = Board::from_fen("4k3/4r3/8/8/8/8/8/4K3 w - - 0 1");
    let status = classify(&bd, Color::White, None).unwrap();
    assert_eq!(status, GameStatus::Check);
    assert!(!status.is_terminal());
    assert!(is_in_check(&bd, Color::White).unwrap());
}

#[test]
fn fools_mate_is_checkmate() {
    // after 1.f3 e5 2.g4 Qh4#
    let bd = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3");
    assert!(is_in_check(&bd, Color::White).unwrap());
    assert_eq!(
        classify(&bd, Color::White, None).unwrap(),
        GameStatus::Checkmate
    );
}

#[test]
fn cornered_king_without_check_is_stalemate() {
    // black king a8, white king c7, white queen b6: no move, no check
    let bd = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(!is_in_check(&bd, Color::Black).unwrap());
    assert_eq!(
        classify(&bd, Color::Black, None).unwrap(),
        GameStatus::Stalemate
    );
}

#[test]
fn missing_king_is_an_invariant_violation() {
    let bd = Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(
        classify(&bd, Color::Black, None),
        Err(RulesError::MissingKing(Color::Black))
    );
}
