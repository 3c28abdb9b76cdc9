use std::io::{stdout, Write};

use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};

use crate::error::Result;

/// Keys the menu and confirmation prompts care about. Everything else
/// collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit1,
    Digit2,
    Yes,
    No,
    Escape,
    Other,
}

/// Console I/O seam so the menu loop and actions can be driven by a
/// scripted fake in tests instead of a real terminal.
pub trait Console {
    /// Blocks until a single keypress (not line-buffered).
    fn read_key(&self) -> Result<Key>;
    fn line(&self, message: &str);
    fn header(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    fn clear(&self);
}

pub struct TerminalConsole;

impl TerminalConsole {
    fn wait_for_press() -> std::io::Result<KeyCode> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key.code);
                }
            }
        }
    }

    fn next_key_code() -> std::io::Result<KeyCode> {
        terminal::enable_raw_mode()?;
        let code = Self::wait_for_press();
        terminal::disable_raw_mode()?;
        code
    }
}

impl Console for TerminalConsole {
    fn read_key(&self) -> Result<Key> {
        let code = Self::next_key_code()?;
        Ok(match code {
            KeyCode::Char('1') => Key::Digit1,
            KeyCode::Char('2') => Key::Digit2,
            KeyCode::Char('y') | KeyCode::Char('Y') => Key::Yes,
            KeyCode::Char('n') | KeyCode::Char('N') => Key::No,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        })
    }

    fn line(&self, message: &str) {
        println!("{message}");
    }

    fn header(&self, message: &str) {
        println!("{}", message.green());
    }

    fn warning(&self, message: &str) {
        println!("{}", message.yellow());
    }

    fn error(&self, message: &str) {
        println!("{}", message.bright_red());
    }

    fn clear(&self) {
        let mut out = stdout();
        let _ = execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = out.flush();
    }
}
