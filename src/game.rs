use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{Board, Color, Piece, PieceKind};
use crate::feedback::{FeedbackSource, MoveTarget};
use crate::notation::Square;
use crate::rules;
use crate::voice;

/// A recorded move in the game history.
///
/// Created once per accepted move, never edited. The history list grows
/// append-only; there is no undo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    /// Display text for the history list, e.g. "e2-e4" or "Ng1xf3". Always
    /// contains both square names.
    pub notation: String,
    pub timestamp: DateTime<Utc>,
}

/// A single input into the board, from any source: a pointer layer, a
/// speech recognizer delivering transcripts, or a test script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The player clicked or tapped a square.
    Click(Square),
    /// A transcribed utterance arrived from the speech layer.
    Voice(String),
    /// Begin a fresh game.
    Start,
    /// Park the board until the next start.
    Reset,
}

/// Whether a game is currently being played.
///
/// There is no terminal state: the engine does not detect checkmate, so an
/// in-progress game only ends when the next start or reset arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
}

/// Transient selection: an origin square plus its precomputed legal
/// targets. Cleared on deselection, on an unrelated click, and on every
/// accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    origin: Square,
    targets: Vec<MoveTarget>,
}

/// Game controller: owns the board, the turn, the transient selection and
/// the move history, and is the single writer for all of them.
///
/// Every operation is a synchronous, atomic state transition; callers with
/// multiple input sources (pointer, speech) are responsible for serializing
/// their calls.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    phase: Phase,
    selection: Option<Selection>,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh controller on the canonical initial board, parked until
    /// [`start`](Self::start).
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::White,
            phase: Phase::NotStarted,
            selection: None,
            history: Vec::new(),
        }
    }

    /// A controller mid-game on an arbitrary position (tests, setups).
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            phase: Phase::InProgress,
            selection: None,
            history: Vec::new(),
        }
    }

    /// The current board position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// The side currently permitted to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All accepted moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Dispatch one input event; returns the move record when the event
    /// produced a move.
    pub fn handle(&mut self, event: InputEvent) -> Option<MoveRecord> {
        match event {
            InputEvent::Click(square) => self.click(square),
            InputEvent::Voice(text) => self.voice(&text),
            InputEvent::Start => {
                self.start();
                None
            }
            InputEvent::Reset => {
                self.reset();
                None
            }
        }
    }

    /// Begin a fresh game: canonical initial board, white to move, empty
    /// history.
    pub fn start(&mut self) {
        *self = Self {
            phase: Phase::InProgress,
            ..Self::new()
        };
        log::info!("new game started");
    }

    /// Return to the canonical initial board and park until the next start.
    pub fn reset(&mut self) {
        *self = Self::new();
        log::info!("game reset");
    }

    /// Process a click on `square`.
    ///
    /// With a selection active, a click on one of its legal targets plays
    /// the move. Any other click on a square holding the mover's own piece
    /// (re)selects it; anything else clears the selection.
    pub fn click(&mut self, square: Square) -> Option<MoveRecord> {
        if self.phase != Phase::InProgress {
            log::debug!("click on {square} ignored: no game in progress");
            return None;
        }

        if let Some(selection) = &self.selection
            && selection.targets.iter().any(|t| t.square == square)
        {
            let from = selection.origin;
            return Some(self.execute(from, square));
        }

        if self
            .board
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.turn)
        {
            self.select(square);
        } else {
            self.selection = None;
        }
        None
    }

    /// Process a transcribed utterance.
    ///
    /// Unparseable and illegal commands are dropped silently: transcription
    /// is noisy, and the recovery is simply the player repeating themselves.
    pub fn voice(&mut self, text: &str) -> Option<MoveRecord> {
        if self.phase != Phase::InProgress {
            log::debug!("transcript ignored: no game in progress");
            return None;
        }

        let Some(command) = voice::parse(text) else {
            log::debug!("no command recognized in transcript: {text:?}");
            return None;
        };
        let Some((from, to)) = voice::resolve(&self.board, self.turn, command) else {
            log::debug!("no legal move for command {command:?}");
            return None;
        };
        Some(self.execute(from, to))
    }

    /// Select `origin` and compute its legal targets for highlighting.
    fn select(&mut self, origin: Square) {
        let targets = rules::legal_destinations(&self.board, self.turn, origin)
            .into_iter()
            .map(|square| MoveTarget {
                // A legal destination never holds the mover's own piece, so
                // occupied means capture.
                capture: self.board.piece_at(square).is_some(),
                square,
            })
            .collect();
        self.selection = Some(Selection { origin, targets });
    }

    /// Apply a validated move: relocate the piece, record it, flip the
    /// turn, clear the selection.
    ///
    /// Legality is the caller's precondition — both entry points run every
    /// candidate through the legality engine first — so the executor
    /// relocates unconditionally and never partially applies.
    fn execute(&mut self, from: Square, to: Square) -> MoveRecord {
        let piece = self
            .board
            .piece_at(from)
            .expect("validated move must start on a piece");
        let capture = self.board.piece_at(to).is_some();

        self.board = self.board.apply(from, to);
        self.turn = !self.turn;
        self.selection = None;

        let record = MoveRecord {
            from,
            to,
            piece: piece.kind,
            notation: notation_for(piece.kind, from, to, capture),
            timestamp: Utc::now(),
        };
        log::info!("{} played {}", piece.color, record.notation);
        self.history.push(record.clone());
        record
    }
}

impl FeedbackSource for Game {
    fn selected_origin(&self) -> Option<Square> {
        self.selection.as_ref().map(|selection| selection.origin)
    }

    fn targets(&self) -> &[MoveTarget] {
        match &self.selection {
            Some(selection) => &selection.targets,
            None => &[],
        }
    }
}

/// History display text: optional piece letter, origin, "-" or "x" for
/// captures, destination.
fn notation_for(kind: PieceKind, from: Square, to: Square, capture: bool) -> String {
    let join = if capture { 'x' } else { '-' };
    match kind.letter() {
        Some(letter) => format!("{letter}{from}{join}{to}"),
        None => format!("{from}{join}{to}"),
    }
}
