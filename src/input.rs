use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::BufRead;

use crate::cells::GridDirection;
use crate::errors::*;

/// A normalized input token for the maze game loop.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Command {
    Move(GridDirection),
    Quit,
    /// Unrecognized input; the game loop re-prompts with no side effects.
    Noop,
}

/// Input collaborator contract. The game loop depends only on this trait, never on
/// platform detection. Implementations block until input is available.
pub trait InputProvider {
    fn next_command(&mut self) -> Result<Command>;
}

/// Immediate single-keypress input using the terminal's raw mode.
///
/// Raw mode is enabled on activation and restored on drop. Arrow keys and WASD move,
/// 'q' (or Ctrl-C, which raw mode swallows) quits.
pub struct RawTerminalInput {
    _private: (),
}

impl RawTerminalInput {
    pub fn activate() -> Result<RawTerminalInput> {
        terminal::enable_raw_mode()?;
        Ok(RawTerminalInput { _private: () })
    }
}

impl Drop for RawTerminalInput {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl InputProvider for RawTerminalInput {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return Ok(Command::Quit);
                }
                let command = match key.code {
                    KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                        Command::Move(GridDirection::North)
                    }
                    KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                        Command::Move(GridDirection::South)
                    }
                    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                        Command::Move(GridDirection::West)
                    }
                    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                        Command::Move(GridDirection::East)
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
                    _ => Command::Noop,
                };
                return Ok(command);
            }
        }
    }
}

/// Line buffered fallback requiring Enter after each command, for terminals where
/// raw mode cannot be enabled.
pub struct LineBufferedInput<R: BufRead> {
    source: R,
}

impl<R: BufRead> LineBufferedInput<R> {
    pub fn new(source: R) -> LineBufferedInput<R> {
        LineBufferedInput { source }
    }
}

impl<R: BufRead> InputProvider for LineBufferedInput<R> {
    fn next_command(&mut self) -> Result<Command> {
        let mut line = String::new();
        let bytes_read = self.source.read_line(&mut line)?;
        if bytes_read == 0 {
            // End of input behaves like quitting.
            return Ok(Command::Quit);
        }
        Ok(normalize_token(&line))
    }
}

/// Map a free-text token onto a command. Tolerates unrecognized input by signalling
/// a no-op rather than an error.
pub fn normalize_token(token: &str) -> Command {
    match token.trim().to_lowercase().as_str() {
        "w" | "up" => Command::Move(GridDirection::North),
        "s" | "down" => Command::Move(GridDirection::South),
        "a" | "left" => Command::Move(GridDirection::West),
        "d" | "right" => Command::Move(GridDirection::East),
        "q" => Command::Quit,
        _ => Command::Noop,
    }
}
