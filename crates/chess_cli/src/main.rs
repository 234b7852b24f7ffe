//! Text-mode orchestrator for the chess_rules engine: prints the board,
//! reads coordinate moves, applies them one at a time and announces
//! terminal states. The engine itself never sees a turn counter or a
//! timer; both live here.

use std::io::{self, BufRead, Write};
use std::process::exit;

use log::{debug, error, info};
use rand::seq::SliceRandom;

use chess_rules::{
    classify, legal_moves, move_notation, Board, Color, GameStatus, Move, PieceKind, Square,
};

struct Options {
    fen: Option<String>,
    random: Option<Color>,
}

fn parse_args() -> Options {
    let mut opts = Options {
        fen: None,
        random: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fen" => opts.fen = args.next(),
            "--random" => {
                opts.random = match args.next().as_deref() {
                    Some("white") => Some(Color::White),
                    Some("black") => Some(Color::Black),
                    other => {
                        eprintln!("--random expects 'white' or 'black', got {:?}", other);
                        exit(2);
                    }
                }
            }
            "--help" | "-h" => {
                println!("usage: chess_cli [--fen <FEN>] [--random white|black]");
                println!("moves are entered in coordinate form, e.g. e2e4 or e7e8q");
                println!("commands: moves, history, dump, quit");
                exit(0);
            }
            other => {
                eprintln!("unknown argument: {}", other);
                exit(2);
            }
        }
    }
    opts
}

/// Side-to-move field of a FEN string; the board itself ignores it.
fn fen_turn(fen: &str) -> Color {
    match fen.split_whitespace().nth(1) {
        Some("b") => Color::Black,
        _ => Color::White,
    }
}

fn main() {
    env_logger::init();
    let opts = parse_args();

    let (board, turn) = match &opts.fen {
        Some(fen) => (Board::from_fen(fen), fen_turn(fen)),
        None => (Board::startpos(), Color::White),
    };
    if let Err(err) = run(board, turn, &opts) {
        error!("game aborted: {}", err);
        exit(1);
    }
}

fn run(mut board: Board, mut turn: Color, opts: &Options) -> Result<(), chess_rules::RulesError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_move: Option<Move> = None;
    let mut history: Vec<String> = Vec::new();
    let mut rng = rand::thread_rng();

    loop {
        let status = classify(&board, turn, last_move.as_ref())?;
        match status {
            GameStatus::Checkmate => {
                println!("{}", board);
                println!("Checkmate. {:?} wins.", turn.other());
                info!("game over: checkmate, winner {:?}", turn.other());
                return Ok(());
            }
            GameStatus::Stalemate => {
                println!("{}", board);
                println!("Stalemate. Draw.");
                info!("game over: stalemate");
                return Ok(());
            }
            GameStatus::Check => println!("{:?} is in check.", turn),
            GameStatus::Ongoing => {}
        }

        let moves = legal_moves(&board, turn, last_move.as_ref())?;

        let chosen = if opts.random == Some(turn) {
            let mv = *moves.choose(&mut rng).expect("non-terminal state has moves");
            println!("{:?} plays {}", turn, move_notation(&mv));
            mv
        } else {
            println!("{}", board);
            match prompt(&mut lines, &board, turn, &moves, &history) {
                Some(mv) => mv,
                None => return Ok(()), // quit or EOF
            }
        };

        debug!("{:?} applies {:?}", turn, chosen);
        board.apply(&chosen)?;
        history.push(move_notation(&chosen));
        last_move = Some(chosen);
        turn = turn.other();
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    board: &Board,
    turn: Color,
    moves: &[Move],
    history: &[String],
) -> Option<Move> {
    loop {
        print!("{:?}> ", turn);
        io::stdout().flush().ok();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return None,
        };
        match line.trim() {
            "" => continue,
            "quit" => return None,
            "moves" => {
                let listed: Vec<String> = moves.iter().map(move_notation).collect();
                println!("{}", listed.join(" "));
            }
            "history" => println!("{}", history.join(" ")),
            "dump" => match serde_json::to_string_pretty(&board.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(err) => error!("snapshot serialization failed: {}", err),
            },
            text => match find_move(moves, text) {
                Some(mv) => return Some(mv),
                None => println!("not a legal move: {}", text),
            },
        }
    }
}

/// Resolves coordinate input (`e2e4`, `e7e8q`) against the legal-move list,
/// so castling and en-passant flags come out right. A promotion without a
/// letter defaults to the queen.
fn find_move(moves: &[Move], text: &str) -> Option<Move> {
    if text.len() < 4 {
        return None;
    }
    // get() instead of slicing: input is user-typed and may be multibyte
    let from = Square::parse(text.get(0..2)?)?;
    let to = Square::parse(text.get(2..4)?)?;
    let promo = match text.as_bytes().get(4).map(|b| b.to_ascii_lowercase()) {
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return None,
        None => None,
    };

    moves
        .iter()
        .filter(|m| m.from == from && m.to == to)
        .find(|m| match (m.promotion, promo) {
            (Some(kind), Some(wanted)) => kind == wanted,
            (Some(kind), None) => kind == PieceKind::Queen,
            (None, Some(_)) => false,
            (None, None) => true,
        })
        .copied()
}
