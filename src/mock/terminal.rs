use std::io::{self, Write};

use crate::feedback::{SquareFeedback, compute_feedback};
use crate::game::{Game, Phase};
use crate::notation::Square;

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs the interactive terminal chess board.
///
/// Clicks are square names and everything after `say` goes through the
/// voice resolver, exactly as the embedding UI would deliver them.
pub fn run_interactive_terminal() {
    let mut game = Game::new();
    game.start();

    clear_screen();
    draw_interface(&game);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        if let Err(e) = io::stdin().read_line(&mut input) {
            eprintln!("Failed to read input: {}", e);
            break;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "c" => {
                if parts.len() < 2 {
                    println!("Usage: c <square>");
                } else {
                    match parts[1].parse::<Square>() {
                        Ok(square) => {
                            let accepted = game.click(square);
                            clear_screen();
                            draw_interface(&game);
                            if let Some(record) = accepted {
                                println!("\n✅ {}", record.notation);
                            }
                        }
                        Err(e) => println!("Invalid square: {}", e),
                    }
                }
            }
            "say" => {
                let text = input.trim().strip_prefix("say").unwrap_or("").trim();
                if text.is_empty() {
                    println!("Usage: say <command>");
                } else {
                    let accepted = game.voice(text);
                    clear_screen();
                    draw_interface(&game);
                    match accepted {
                        Some(record) => println!("\n✅ {}", record.notation),
                        None => println!("\n🔇 Did not catch a move in \"{text}\""),
                    }
                }
            }
            "n" => {
                game.start();
                clear_screen();
                draw_interface(&game);
                println!("\n♟️  New game — white to move");
            }
            "r" => {
                game.reset();
                clear_screen();
                draw_interface(&game);
                println!("\n🔄 Board reset — n to start a new game");
            }
            "p" => {
                clear_screen();
                draw_interface(&game);
            }
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Draws the complete interface: help text, board, status and history.
fn draw_interface(game: &Game) {
    println!("♟️  Spoken Chess Board");
    println!();
    println!("Commands: c <square> | say <text> | n (new game) | r (reset) | p (refresh) | q (quit)");
    println!();

    draw_board(game);
    draw_status(game);
}

/// Draws the board with pieces and selection highlights.
fn draw_board(game: &Game) {
    let feedback = compute_feedback(game);

    println!("╔═══╦═════════════════════════╗");
    for square in Square::all() {
        if square.col() == 0 {
            print!("║ {} ║", square.rank_char());
        }

        let cell = match game.piece_at(square) {
            Some(piece) => format!(" {} ", piece.to_char()),
            None => " · ".to_string(),
        };
        match feedback.get(square) {
            Some(SquareFeedback::Origin) => print!("\x1b[42m{cell}\x1b[0m"),
            Some(SquareFeedback::Destination) => print!("\x1b[44m{cell}\x1b[0m"),
            Some(SquareFeedback::Capture) => print!("\x1b[41m{cell}\x1b[0m"),
            None => print!("{cell}"),
        }

        if square.col() == 7 {
            println!(" ║");
        }
    }
    println!("╠═══╬═════════════════════════╣");
    println!("║   ║ a  b  c  d  e  f  g  h  ║");
    println!("╚═══╩═════════════════════════╝");
}

/// Draws whose turn it is and the tail of the move history.
fn draw_status(game: &Game) {
    match game.phase() {
        Phase::NotStarted => println!("No game in progress"),
        Phase::InProgress => println!("{} to move", game.turn()),
    }

    let history = game.history();
    if !history.is_empty() {
        println!();
        println!("Moves:");
        let start = history.len().saturating_sub(8);
        for (i, record) in history.iter().enumerate().skip(start) {
            println!("  {:>3}. {}", i + 1, record.notation);
        }
    }
}
