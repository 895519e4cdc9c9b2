mod display;
mod script;
mod terminal;

pub use display::TerminalDisplay;
pub use script::ScriptedInput;
pub use terminal::run_interactive_terminal;
