use std::collections::VecDeque;

use thiserror::Error;

use crate::InputSource;
use crate::game::InputEvent;
use crate::notation::Square;

/// Error when parsing an input script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized script line: '{0}'")]
pub struct ParseError(String);

/// A scriptable input source that feeds a fixed sequence of events into a
/// game, standing in for the pointer and speech layers in tests.
///
/// Events are queued and handed out on demand; new script can be appended
/// at any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<InputEvent>,
}

impl ScriptedInput {
    /// Create with an empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional script for execution.
    ///
    /// One event per line:
    /// - a bare square name clicks it (`e2`)
    /// - `say <text>` delivers a voice transcript
    /// - `start` / `reset` drive the game lifecycle
    ///
    /// Blank lines and `#` comments are skipped. Nothing is queued when any
    /// line fails to parse.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let events = parse_script(script)?;
        self.pending.extend(events);
        Ok(())
    }

    /// Next queued event. Returns None when the queue is drained.
    pub fn tick(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    /// Feed every queued event to the provided callback.
    pub fn drain<F>(&mut self, mut on_event: F)
    where
        F: FnMut(InputEvent),
    {
        while let Some(event) = self.tick() {
            on_event(event);
        }
    }
}

impl InputSource for ScriptedInput {
    type Error = std::convert::Infallible;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.tick())
    }
}

/// Parse a script string into a sequence of input events.
fn parse_script(script: &str) -> Result<Vec<InputEvent>, ParseError> {
    let mut events = Vec::new();
    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event = if line == "start" {
            InputEvent::Start
        } else if line == "reset" {
            InputEvent::Reset
        } else if let Some(text) = line.strip_prefix("say ") {
            InputEvent::Voice(text.trim().to_string())
        } else if let Ok(square) = line.parse::<Square>() {
            InputEvent::Click(square)
        } else {
            return Err(ParseError(line.to_string()));
        };
        events.push(event);
    }
    Ok(events)
}
