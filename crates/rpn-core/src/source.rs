//! Keystroke sources.

use std::io;

/// A blocking supplier of raw keystrokes.
///
/// Control keys arrive as their ASCII codes (escape is `0x1B`, delete is
/// `0x7F`, enter is `'\n'`). `Ok(None)` means the input has ended.
pub trait KeySource {
    fn read_key(&mut self) -> io::Result<Option<char>>;
}

impl<S: KeySource + ?Sized> KeySource for &mut S {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        (**self).read_key()
    }
}

impl<S: KeySource + ?Sized> KeySource for Box<S> {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        (**self).read_key()
    }
}

/// Keystrokes taken from an in-memory sequence of characters.
#[derive(Clone, Debug)]
pub struct Scripted<I> {
    keys: I,
}

impl<I: Iterator<Item = char>> Scripted<I> {
    pub fn new(keys: I) -> Self {
        Self { keys }
    }
}

impl<'a> Scripted<std::str::Chars<'a>> {
    /// Replay the characters of `text` in order.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.chars())
    }
}

impl<I: Iterator<Item = char>> KeySource for Scripted<I> {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        Ok(self.keys.next())
    }
}
