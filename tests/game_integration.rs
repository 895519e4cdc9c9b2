use spoken_chess::board::{Board, Color, Piece, PieceKind};
use spoken_chess::feedback::{FeedbackSource, SquareFeedback, compute_feedback};
use spoken_chess::game::{Game, MoveRecord, Phase};
use spoken_chess::mock::ScriptedInput;
use spoken_chess::notation::Square;

fn sq(name: &str) -> Square {
    name.parse().expect("test square name should be valid")
}

/// Helper: a started game on the canonical initial position.
fn setup() -> Game {
    let mut game = Game::new();
    game.start();
    game
}

/// Helper: run a script against a game, collecting accepted moves.
fn execute_script(game: &mut Game, script: &str) -> Vec<MoveRecord> {
    let mut input = ScriptedInput::new();
    input.push_script(script).expect("test script should be valid");

    let mut accepted = Vec::new();
    input.drain(|event| {
        if let Some(record) = game.handle(event) {
            accepted.push(record);
        }
    });
    accepted
}

fn assert_piece(game: &Game, square: &str, color: Color, kind: PieceKind) {
    let expected = Piece::new(color, kind);
    assert_eq!(
        game.piece_at(sq(square)),
        Some(expected),
        "Expected {:?} at {}, found {:?}",
        expected,
        square,
        game.piece_at(sq(square))
    );
}

fn assert_empty(game: &Game, square: &str) {
    assert_eq!(
        game.piece_at(sq(square)),
        None,
        "Expected empty at {}, found {:?}",
        square,
        game.piece_at(sq(square))
    );
}

// ---------------------------------------------------------------
// Click flow: select → highlights shown → move → cleared
// ---------------------------------------------------------------

#[test]
fn click_pawn_shows_destinations() {
    let mut game = setup();

    execute_script(&mut game, "e2");
    let fb = compute_feedback(&game);

    assert_eq!(
        fb.get(sq("e2")),
        Some(SquareFeedback::Origin),
        "selected square should be Origin"
    );
    assert_eq!(fb.get(sq("e3")), Some(SquareFeedback::Destination));
    assert_eq!(fb.get(sq("e4")), Some(SquareFeedback::Destination));
    // Unrelated square has no feedback
    assert_eq!(fb.get(sq("a1")), None);
}

#[test]
fn completed_move_clears_feedback() {
    let mut game = setup();

    let accepted = execute_script(&mut game, "e2\ne4");

    assert_eq!(accepted.len(), 1);
    assert!(
        compute_feedback(&game).is_empty(),
        "feedback should be empty after completing a move"
    );
    assert_empty(&game, "e2");
    assert_piece(&game, "e4", Color::White, PieceKind::Pawn);
}

#[test]
fn capture_targets_highlighted_distinctly() {
    // White pawn on e4, black pawn on d5, white to move.
    let mut board = Board::empty();
    board.place(sq("e4"), Piece::new(Color::White, PieceKind::Pawn));
    board.place(sq("d5"), Piece::new(Color::Black, PieceKind::Pawn));
    let mut game = Game::from_board(board, Color::White);

    game.click(sq("e4"));
    let fb = compute_feedback(&game);

    assert_eq!(fb.get(sq("e4")), Some(SquareFeedback::Origin));
    assert_eq!(fb.get(sq("e5")), Some(SquareFeedback::Destination));
    assert_eq!(
        fb.get(sq("d5")),
        Some(SquareFeedback::Capture),
        "occupied target should show as a capture"
    );
}

#[test]
fn illegal_click_reselects_own_piece() {
    let mut game = setup();

    // d1 is not a legal target for the e2 pawn, but it holds white's queen,
    // so the click re-selects rather than clearing.
    execute_script(&mut game, "e2\nd1");

    assert_eq!(game.selected_origin(), Some(sq("d1")));
    assert!(game.history().is_empty());
}

#[test]
fn illegal_click_on_foreign_square_clears_selection() {
    let mut game = setup();

    execute_script(&mut game, "e2\ne7");

    assert_eq!(game.selected_origin(), None);
    assert!(game.history().is_empty());
}

// ---------------------------------------------------------------
// Voice flow
// ---------------------------------------------------------------

#[test]
fn voice_bare_destination_resolves_unique_pawn() {
    let mut game = setup();

    let accepted = execute_script(&mut game, "say e4");

    assert_eq!(accepted.len(), 1, "exactly one move record");
    let record = &accepted[0];
    assert_eq!((record.from, record.to), (sq("e2"), sq("e4")));
    assert!(
        record.notation.contains("e2") && record.notation.contains("e4"),
        "notation should name both squares: {}",
        record.notation
    );
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn voice_noise_is_dropped_silently() {
    let mut game = setup();
    let board_before = game.board().clone();

    let accepted = execute_script(&mut game, "say hello there");

    assert!(accepted.is_empty(), "no move record for noise");
    assert_eq!(game.board(), &board_before, "board unchanged");
    assert_eq!(game.turn(), Color::White, "turn unchanged");
}

#[test]
fn voice_from_to_with_filler_words() {
    let mut game = setup();

    let accepted = execute_script(&mut game, "say pawn from e2 to e4 please");

    assert_eq!(accepted.len(), 1);
    assert_piece(&game, "e4", Color::White, PieceKind::Pawn);
}

#[test]
fn voice_piece_name_disambiguates() {
    let mut game = setup();

    let accepted = execute_script(&mut game, "say knight to f3");

    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].piece, PieceKind::Knight);
    assert_piece(&game, "f3", Color::White, PieceKind::Knight);
    assert_empty(&game, "g1");
}

#[test]
fn voice_and_click_interleave() {
    let mut game = setup();

    let accepted = execute_script(
        &mut game,
        "say e4\n\
         e7\n\
         e5\n\
         say knight f3\n\
         b8\n\
         c6",
    );

    assert_eq!(accepted.len(), 4);
    let notations: Vec<&str> = accepted.iter().map(|r| r.notation.as_str()).collect();
    assert_eq!(notations, ["e2-e4", "e7-e5", "Ng1-f3", "Nb8-c6"]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.turn(), Color::White);
}

// ---------------------------------------------------------------
// Turn and history bookkeeping
// ---------------------------------------------------------------

#[test]
fn each_accepted_move_flips_turn_and_appends_once() {
    let mut game = setup();

    for (i, script) in ["say e4", "say e5", "say d4", "say d5"].iter().enumerate() {
        let turn_before = game.turn();
        let history_before = game.history().len();

        let accepted = execute_script(&mut game, script);

        assert_eq!(accepted.len(), 1, "move {i} should be accepted");
        assert_eq!(game.turn(), !turn_before, "turn flips exactly once");
        assert_eq!(game.history().len(), history_before + 1);
    }
}

#[test]
fn executor_postconditions_hold() {
    let mut game = setup();

    let accepted = execute_script(&mut game, "g1\nf3");

    let record = &accepted[0];
    assert_empty(&game, "g1");
    assert_piece(&game, "f3", Color::White, PieceKind::Knight);
    assert_eq!(record.piece, PieceKind::Knight);
    assert_eq!(record.notation, "Ng1-f3");
}

#[test]
fn capture_removes_opponent_piece() {
    let mut board = Board::empty();
    board.place(sq("e4"), Piece::new(Color::White, PieceKind::Pawn));
    board.place(sq("d5"), Piece::new(Color::Black, PieceKind::Pawn));
    let mut game = Game::from_board(board, Color::White);

    let accepted = execute_script(&mut game, "say e4 takes d5");

    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].notation, "e4xd5");
    assert_piece(&game, "d5", Color::White, PieceKind::Pawn);
    assert_empty(&game, "e4");
    assert_eq!(game.board().occupied().count(), 1, "captured pawn is gone");
}

// ---------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------

#[test]
fn reset_then_start_yields_canonical_board() {
    let mut game = setup();
    execute_script(&mut game, "say e4\nsay e5\nsay knight f3");

    let accepted = execute_script(&mut game, "reset\nstart");

    assert!(accepted.is_empty());
    assert_eq!(game.board(), &Board::initial());
    assert_eq!(game.turn(), Color::White);
    assert!(game.history().is_empty());
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn input_before_start_is_ignored() {
    let mut game = Game::new();

    let accepted = execute_script(&mut game, "e2\ne4\nsay e4");

    assert!(accepted.is_empty());
    assert_eq!(game.board(), &Board::initial());
    assert_eq!(game.phase(), Phase::NotStarted);
}

#[test]
fn reset_mid_selection_drops_it() {
    let mut game = setup();

    execute_script(&mut game, "e2\nreset\nstart");

    assert_eq!(game.selected_origin(), None);
    let fb = compute_feedback(&game);
    assert!(fb.is_empty());
}
