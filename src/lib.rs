//! Interactive chess board core.
//!
//! Moves enter as square clicks or free-form spoken commands, pass through
//! a self-contained legality engine (piece-movement geometry and path
//! occupancy — deliberately not full chess), and come out as an append-only
//! narrated move history. The surrounding product talks to this core
//! through plain data values: input events in, move records and square
//! feedback out.

pub mod board;
pub mod feedback;
pub mod game;
pub mod mock;
pub mod notation;
pub mod rules;
pub mod voice;

use crate::feedback::BoardFeedback;
use crate::game::InputEvent;

/// Trait for producing player input events.
///
/// Abstracts over pointer layers, speech recognizers delivering transcribed
/// utterances, and scripted inputs, providing a uniform interface for
/// driving a [`Game`](crate::game::Game).
pub trait InputSource {
    /// Error type for input read failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Next pending input event, or None when the source has nothing.
    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

/// Trait for displaying board feedback to the player.
///
/// Abstracts over highlight layers and terminal rendering, providing a
/// uniform interface for the output side of the game loop. Mirrors
/// [`InputSource`] on the input side.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the given feedback state on the display.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants to their
    /// output medium (highlight colors, terminal cells, etc.).
    fn show(&mut self, feedback: &BoardFeedback) -> Result<(), Self::Error>;
}
