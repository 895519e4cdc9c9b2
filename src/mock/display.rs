use std::io::{self, Write};

use crate::BoardDisplay;
use crate::feedback::{BoardFeedback, SquareFeedback};
use crate::notation::Square;

/// Terminal-based feedback display for development and testing.
///
/// Renders [`BoardFeedback`] as an 8×8 grid with ANSI color-coded squares
/// matching the feedback type (origin, destinations, captures).
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_feedback(&mut io::stdout(), feedback)
    }
}

/// Render feedback to any writer. Extracted for testability.
fn render_feedback(w: &mut impl Write, feedback: &BoardFeedback) -> Result<(), DisplayError> {
    for square in Square::all() {
        if square.col() == 0 {
            write!(w, " {} ", square.rank_char())?;
        }
        write!(w, "{}", format_square(feedback.get(square)))?;
        if square.col() == 7 {
            writeln!(w)?;
        }
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// Map a feedback variant to an ANSI-colored cell string.
fn format_square(feedback: Option<SquareFeedback>) -> &'static str {
    match feedback {
        Some(SquareFeedback::Destination) => "\x1b[44m · \x1b[0m",
        Some(SquareFeedback::Capture) => "\x1b[41m · \x1b[0m",
        Some(SquareFeedback::Origin) => "\x1b[42m · \x1b[0m",
        None => " · ",
    }
}
