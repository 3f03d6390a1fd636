//! Raw terminal keystrokes.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rpn_core::KeySource;
use rpn_core::decode::{BACKSPACE, DELETE, ESCAPE};

/// Reads keystrokes from the terminal. Expects raw mode to be enabled.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match translate(key) {
                Keystroke::Key(c) => return Ok(Some(c)),
                Keystroke::End => {
                    log::info!("end of input from {:?}", key.code);
                    return Ok(None);
                }
                Keystroke::Skip => {}
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Keystroke {
    Key(char),
    /// Ctrl-C or Ctrl-D.
    End,
    Skip,
}

/// Map a crossterm key event onto the characters the decoder understands.
fn translate(key: KeyEvent) -> Keystroke {
    // Only handle key press events (not release on Windows)
    if key.kind != KeyEventKind::Press {
        return Keystroke::Skip;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'd') if ctrl => Keystroke::End,
        KeyCode::Char('h') if ctrl => Keystroke::Key(BACKSPACE),
        KeyCode::Char(_) if ctrl => Keystroke::Skip,
        KeyCode::Char(c) => Keystroke::Key(c),
        KeyCode::Enter => Keystroke::Key('\n'),
        KeyCode::Tab => Keystroke::Key(' '),
        KeyCode::Backspace => Keystroke::Key(DELETE),
        KeyCode::Esc => Keystroke::Key(ESCAPE),
        _ => Keystroke::Skip,
    }
}
