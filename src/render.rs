//! This module draws the board on the terminal. The towers are rendered as columns of block
//! characters, widest ring at the bottom, with a pole where a level is empty, a base line and the
//! tower labels underneath.
//!
//! The destination column is drawn in green so the goal is always visible at a glance. Drawing is
//! a pure read of the board; the small cell helpers are plain string builders so the geometry can
//! be checked in tests without a terminal.

use std::fmt::Write as _;

use anyhow::Result;
use console::{style, Term};

use crate::board::{Board, GameError, Tower};

/// This function returns the column width every cell of a board with the given ring count is
/// padded to. The widest ring spans `2n - 1` characters, plus one spare column on each side.
fn cell_width(rings: u8) -> usize {
    usize::from(rings) * 2 + 1
}

/// This function renders the whole board: the header with the move counters, one row per level
/// from the top down, the base, the labels and finally the pending error message, if any.
pub(crate) fn draw_board(term: &Term, board: &Board, error: Option<GameError>) -> Result<()> {
    let width = cell_width(board.rings());

    term.write_line("")?;
    term.write_line(&header(board))?;
    term.write_line("")?;

    for level in (0..usize::from(board.rings())).rev() {
        let mut line = String::from("  ");

        for tower in Tower::all() {
            let cell = match board.stack(tower).get(level) {
                Some(&ring) => ring_cell(ring, width),
                None => pole_cell(width),
            };

            if tower == Tower::Destination {
                write!(line, "{}  ", style(cell).green())?;
            } else {
                write!(line, "{cell}  ")?;
            }
        }

        term.write_line(&line)?;
    }

    let mut base = String::from("  ");
    let mut labels = String::from("  ");

    for tower in Tower::all() {
        let bar = "═".repeat(width);
        let label = label_cell(tower.label(), width);

        if tower == Tower::Destination {
            write!(base, "{}  ", style(bar).green())?;
            write!(labels, "{}  ", style(label).green())?;
        } else {
            write!(base, "{bar}  ")?;
            write!(labels, "{label}  ")?;
        }
    }

    term.write_line(&base)?;
    term.write_line(&labels)?;
    term.write_line("")?;

    // the error slot is always one line tall so the board never jumps around
    match error {
        Some(err) => term.write_line(&format!("  {} {err}", style("⚠").red()))?,
        None => term.write_line("")?,
    }

    Ok(())
}

/// This function announces the win under the final board, calling out a perfect game when the
/// move counter landed exactly on the optimum.
pub(crate) fn draw_victory(term: &Term, board: &Board) -> Result<()> {
    let banner = format!("CONGRATULATIONS! You won in {} moves!", board.moves());
    term.write_line(&format!("{}", style(banner).bold().green()))?;

    if board.moves() == board.min_moves() {
        term.write_line(&format!(
            "{}",
            style("PERFECT! You solved it in the minimum number of moves!").bold()
        ))?;
    } else {
        term.write_line(&format!(
            "The minimum possible was {} moves.",
            board.min_moves()
        ))?;
    }

    Ok(())
}

/// This function builds the header line with the running move count next to the best achievable
/// count for the current ring count.
fn header(board: &Board) -> String {
    format!(
        "Moves: {} | Minimum possible: {}",
        board.moves(),
        board.min_moves()
    )
}

/// This function builds the cell for a tower label, the single letter centered in the column.
fn label_cell(label: char, width: usize) -> String {
    let pad = " ".repeat(width / 2);
    format!("{pad}{label}{pad}")
}

/// This function builds the cell for an empty level, the bare pole centered in the column.
fn pole_cell(width: usize) -> String {
    let pad = " ".repeat(width / 2);
    format!("{pad}│{pad}")
}

/// This function builds the cell for a ring of the given size. A ring spans `2s - 1` block
/// characters so that ring sizes stay visually distinct and ring 1 is a single block over the
/// pole.
fn ring_cell(ring: u8, width: usize) -> String {
    let blocks = usize::from(ring) * 2 - 1;
    let pad = " ".repeat((width - blocks) / 2);
    format!("{pad}{}{pad}", "█".repeat(blocks))
}
