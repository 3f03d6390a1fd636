//! Raw terminal mode.

use std::io;

use crossterm::terminal;

/// Keeps the terminal in raw mode while alive.
///
/// Raw mode delivers keystrokes unbuffered and unechoed. The previous mode
/// is restored when the guard is dropped, including during a panic unwind.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        log::info!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match terminal::disable_raw_mode() {
            Ok(()) => log::info!("raw mode disabled"),
            Err(e) => log::error!("failed to restore terminal mode: {}", e),
        }
    }
}
