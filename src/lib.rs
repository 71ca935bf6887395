//! The library components of the game. They allow initializing the game, taking and parsing
//! input, applying moves to the board and drawing the towers on the terminal.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop.

mod board;
mod game;
mod input;
mod render;

pub use game::init;
