//! Player commands typed at the prompt.

use thiserror::Error;

use crate::board::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open(Pos),
    Flag(Pos),
    NewGame,
    ShowWins,
    /// Close whichever dialog is on top.
    Close,
    Redraw,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' needs a column and a row, e.g. '{0} 3 5'")]
    MissingCoordinates(&'static str),
    #[error("'{0}' is not a valid coordinate")]
    BadCoordinate(String),
}

pub const HELP: &str = "\
commands:
  open <x> <y>   reveal a cell        (o)
  flag <x> <y>   toggle a flag        (f)
  new            start a new game     (n)
  wins           show top scores      (w)
  close          close the dialog     (c)
  show           redraw the board     (s)
  quit           leave                (q)";

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "open" | "o" => Command::Open(coordinates("open", words)?),
        "flag" | "f" => Command::Flag(coordinates("flag", words)?),
        "new" | "n" | "restart" => Command::NewGame,
        "wins" | "w" | "scores" => Command::ShowWins,
        "close" | "c" => Command::Close,
        "show" | "s" => Command::Redraw,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(InputError::Unknown(head.to_string())),
    };
    Ok(Some(command))
}

fn coordinates<'a>(
    command: &'static str,
    mut words: impl Iterator<Item = &'a str>,
) -> Result<Pos, InputError> {
    let (Some(x), Some(y)) = (words.next(), words.next()) else {
        return Err(InputError::MissingCoordinates(command));
    };
    Ok(Pos::new(coordinate(x)?, coordinate(y)?))
}

fn coordinate(word: &str) -> Result<u8, InputError> {
    match word.parse::<u8>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(InputError::BadCoordinate(word.to_string())),
    }
}
