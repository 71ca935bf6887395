//! The game module contains the core parts of the game, except for input handling and board
//! drawing.
//!
//! It contains the `init()` function to initialize and start the game loop, as well as the game
//! initialization message, some terminal configuration and the play loop that drives one game
//! from setup to quit, restart or victory.

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use regex::Regex;

use crate::board::{Board, GameError};
use crate::input::{play_again, take_command, take_ring_count, Command};
use crate::render::{draw_board, draw_victory};

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. It uses the derive attribute, as that was found to be the
/// simplest way of accomplishing what was set out to do.
#[derive(Parser)]
#[command(name = "hanoi", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The number of rings to set the first game up with, skipping the setup prompt.
    ///
    /// This option only seeds the first game of the session. Restarting with R goes back through
    /// the regular setup prompt, where any count between 1 and 10 can be picked again.
    #[arg(short, long, value_name = "COUNT")]
    #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
    rings: Option<u8>,
}

/// This enum holds the ways a single game can end, to better transfer the result of the play loop
/// back to the session loop that decides what happens next.
enum Outcome {
    /// This variant is used when the player asked to leave the session altogether.
    Quit,
    /// This variant is used when the player asked for a fresh board, which sends the session back
    /// to the setup prompt.
    Restart,
    /// This variant is used when the last move put every ring on the destination tower.
    Won,
}

/// Initializes the game state and handles literally everything. This is a `main()` function of
/// sorts though it is still called from main.rs.
///
/// This function specifically creates a new interface to the standard output and compiles the
/// command expression once, so the play loop doesn't rebuild it on every prompt.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
pub fn init() -> Result<()> {
    let term = Term::stdout();
    let cli = Cli::parse();
    // unwrap is safe; the expression is a literal and it's been proven to be syntactically
    // correct
    let command_re = Regex::new(r"(?i)\A\s*(?:[asd]{2}|[qr])\s*\z").unwrap();
    let mut preset = cli.rings;

    // show the init message
    init_message(&term)?;

    // session loop; each iteration is one full game from setup onwards
    loop {
        let rings = match preset.take() {
            Some(rings) => rings,
            None => take_ring_count(&term)?,
        };
        let mut board = Board::new(rings)?;

        match play(&term, &mut board, &command_re)? {
            Outcome::Quit => {
                term.write_line("")?;
                term.write_line("Thanks for playing! Goodbye!")?;
                break;
            }
            Outcome::Restart => {
                term.clear_screen()?;
            }
            Outcome::Won => {
                draw_victory(&term, &board)?;

                if play_again(&term)? {
                    term.clear_screen()?;
                } else {
                    break;
                }
            }
        }
    }

    term.show_cursor()?;
    Ok(())
}

/// This function initializes the message to be used at the start of the program, as well as a few
/// other fallible operations. Among these, the screen is cleared and the cursor is hidden. The
/// title of the console window is also set to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "TOWER OF HANOI";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("hanoi");
    term.hide_cursor()?;

    term.write_line(&format!("{msg}"))?;
    term.write_line("")?;
    term.write_line("A classic puzzle: move every ring from tower A to tower D.")?;
    term.write_line("")?;
    term.write_line("Rules:")?;
    term.write_line("  • Only one ring can be moved at a time")?;
    term.write_line("  • A ring can only be placed on top of a larger ring")?;
    term.write_line("  • Tower S is yours to use as a spare")?;
    term.write_line("")?;

    Ok(())
}

/// This function runs one game on the given board until the player quits, restarts or wins. Each
/// turn redraws the board, shows whatever rejection the previous turn produced and takes the next
/// command; rejected moves never change the board, so the loop simply carries the error into the
/// next frame.
fn play(term: &Term, board: &mut Board, re: &Regex) -> Result<Outcome> {
    let mut error: Option<GameError> = None;

    loop {
        term.clear_screen()?;
        draw_board(term, board, error.take())?;

        match take_command(term, re)? {
            Command::Quit => break Ok(Outcome::Quit),
            Command::Restart => break Ok(Outcome::Restart),
            Command::Move(origin, destination) => {
                match board.apply_move(origin, destination) {
                    Ok(_) if board.is_complete() => {
                        term.clear_screen()?;
                        draw_board(term, board, None)?;
                        break Ok(Outcome::Won);
                    }
                    Ok(_) => {}
                    Err(err) => error = Some(err),
                }
            }
        }
    }
}
