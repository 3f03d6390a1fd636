//! Line-buffered keystrokes.
//!
//! Used when stdin is not a terminal, or when raw mode is unwanted. The
//! decoder sees the same characters, one at a time, but only after the whole
//! line has been entered.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use rpn_core::KeySource;

/// Reads keystrokes a line at a time from a buffered reader.
#[derive(Debug)]
pub struct LineKeys<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> LineKeys<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> KeySource for LineKeys<R> {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        if self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.chars());
        }
        Ok(self.pending.pop_front())
    }
}
