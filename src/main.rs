//! # hanoi
//!
//! This crate is the classic Tower of Hanoi puzzle played on the terminal. You pick a number of
//! rings, all of which start stacked on tower A, and shuffle them over to tower D one move at a
//! time with two-letter commands, never resting a ring on a smaller one.
//!
//! The board is redrawn after every move together with a running move counter and the best
//! achievable count for the chosen size, so you always know how far off the optimum you are.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use hanoi_cli::init;

fn main() -> Result<()> {
    init()
}
