//! This module contains all functions related to taking input from the user. They all use the
//! `dialoguer` crate to process the input, and they all check for input validation so the player
//! is re-prompted with a hint instead of the game giving up on a typo.
//!
//! The pure command parser also lives here; the interactive prompts are thin wrappers that feed
//! lines into it.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use regex::Regex;

use crate::board::{GameError, Tower, MAX_RINGS, MIN_RINGS};

/// This enum holds the recognized outcomes of a line of player input during a game. Moves carry
/// the two towers they name; the remaining variants are the single-letter session commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// This variant is used when the player names two distinct towers, asking for the top ring of
    /// the first to be moved onto the second.
    Move(Tower, Tower),
    /// This variant is used when the player types Q to leave the game immediately.
    Quit,
    /// This variant is used when the player types R to throw the current board away and set up a
    /// fresh game.
    Restart,
}

/// This function turns one raw line of input into a [`Command`]. Input is trimmed and matched
/// case-insensitively; anything that is not two distinct tower letters, Q or R comes back as
/// [`GameError::InvalidCommand`].
pub(crate) fn parse_command(raw: &str) -> Result<Command, GameError> {
    let mut letters = raw.trim().chars();

    match (letters.next(), letters.next(), letters.next()) {
        (Some(letter), None, None) if letter.eq_ignore_ascii_case(&'q') => Ok(Command::Quit),
        (Some(letter), None, None) if letter.eq_ignore_ascii_case(&'r') => Ok(Command::Restart),
        (Some(first), Some(second), None) => {
            match (Tower::from_letter(first), Tower::from_letter(second)) {
                (Some(origin), Some(destination)) if origin != destination => {
                    Ok(Command::Move(origin, destination))
                }
                _ => Err(GameError::InvalidCommand),
            }
        }
        _ => Err(GameError::InvalidCommand),
    }
}

/// This function asks whether the player wants another round once a game has been won. It is the
/// only prompt with a yes/no shape, so it uses dialoguer's confirmation widget instead of free
/// text.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    let input = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Play another round?").bold()))
        .default(false)
        .interact_on(term)?;

    Ok(input)
}

/// This function is in charge of taking the player's next command during a game. The regular
/// expression performs the first syntactic pass over the shape of the line; the parser then
/// rejects the one shape the expression cannot, a move whose two letters name the same tower.
pub(crate) fn take_command(term: &Term, re: &Regex) -> Result<Command> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Your move").bold()))
        .validate_with(|line: &String| -> Result<(), String> {
            if re.is_match(line) {
                return parse_command(line).map(|_| ()).map_err(|err| err.to_string());
            }
            Err(GameError::InvalidCommand.to_string())
        })
        .interact_text_on(term)?;

    Ok(parse_command(&input)?)
}

/// This function is in charge of taking the number of rings to set the game up with. It loops
/// until it is handed an integer between one and ten, re-prompting on anything else.
pub(crate) fn take_ring_count(term: &Term) -> Result<u8> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!("Select number of rings ({MIN_RINGS}-{MAX_RINGS})")).bold()
        ))
        .validate_with(|line: &String| -> Result<(), String> {
            match line.trim().parse::<u8>() {
                Ok(count) if (MIN_RINGS..=MAX_RINGS).contains(&count) => Ok(()),
                _ => Err(GameError::InvalidRingCount.to_string()),
            }
        })
        .interact_text_on(term)?;

    // the parse cannot miss; the validator above only lets integers in range through
    Ok(input.trim().parse()?)
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use crate::board::{GameError, Tower};

    #[test]
    fn all_six_ordered_tower_pairs_parse_as_moves() {
        let pairs = [
            ("AS", Tower::Source, Tower::Auxiliary),
            ("AD", Tower::Source, Tower::Destination),
            ("SA", Tower::Auxiliary, Tower::Source),
            ("SD", Tower::Auxiliary, Tower::Destination),
            ("DA", Tower::Destination, Tower::Source),
            ("DS", Tower::Destination, Tower::Auxiliary),
        ];

        for (line, origin, destination) in pairs {
            assert_eq!(parse_command(line), Ok(Command::Move(origin, destination)));
        }
    }

    #[test]
    fn commands_are_case_insensitive_and_trimmed() {
        assert_eq!(
            parse_command("  ad \n"),
            Ok(Command::Move(Tower::Source, Tower::Destination))
        );
        assert_eq!(
            parse_command("sA"),
            Ok(Command::Move(Tower::Auxiliary, Tower::Source))
        );
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command(" Q "), Ok(Command::Quit));
        assert_eq!(parse_command("r"), Ok(Command::Restart));
        assert_eq!(parse_command("R"), Ok(Command::Restart));
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let lines = ["", "   ", "A", "ASD", "AA", "ss", "AX", "XD", "12", "quit", "rs q"];

        for line in lines {
            assert_eq!(
                parse_command(line),
                Err(GameError::InvalidCommand),
                "line: {line:?}"
            );
        }
    }
}
