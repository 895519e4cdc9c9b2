use crate::notation::Square;

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// The currently selected piece (origin of a pending move)
    Origin,
    /// A legal quiet destination for the selected piece
    Destination,
    /// A legal destination that captures an opponent piece
    Capture,
}

/// A legal destination for the selected piece, tagged with whether placing
/// there captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTarget {
    pub square: Square,
    pub capture: bool,
}

/// Contains the set of squares and their associated feedback types for the
/// current selection.
///
/// `BoardFeedback` is computed by `compute_feedback()` and consumed by
/// [`BoardDisplay`](crate::BoardDisplay) implementations to drive highlight
/// rendering. It is the primary interface between the game controller and
/// whatever draws the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Square, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Square, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any previous entry for it.
    pub fn set(&mut self, square: Square, feedback: SquareFeedback) {
        self.squares.retain(|(sq, _)| *sq != square);
        self.squares.push((square, feedback));
    }

    /// Returns true if there are no feedback squares to display.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Square, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Square, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Selection state information needed to compute feedback
///
/// This trait defines what the feedback system needs from the game
/// controller.
pub trait FeedbackSource {
    /// Origin square of the current selection, if any
    fn selected_origin(&self) -> Option<Square>;

    /// Legal targets of the current selection
    fn targets(&self) -> &[MoveTarget];
}

/// Compute visual feedback for the current selection.
///
/// The selected square shows as the origin; every legal target shows as a
/// destination, with captures marked distinctly.
pub fn compute_feedback(source: &impl FeedbackSource) -> BoardFeedback {
    let Some(origin) = source.selected_origin() else {
        return BoardFeedback::default();
    };

    std::iter::once((origin, SquareFeedback::Origin))
        .chain(source.targets().iter().map(classify_target))
        .collect::<Vec<_>>()
        .into()
}

/// Classify a target as either a capture or regular destination
fn classify_target(target: &MoveTarget) -> (Square, SquareFeedback) {
    if target.capture {
        (target.square, SquareFeedback::Capture)
    } else {
        (target.square, SquareFeedback::Destination)
    }
}
