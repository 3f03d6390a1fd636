//! Keystroke decoder.
//!
//! Turns a live stream of keystrokes into one [`InputEvent`] per logical
//! line. A line ends on space or enter, on an arithmetic operator, on `;`
//! (clear all) or on escape (quit). Accepted characters are echoed as they
//! arrive so the user sees the literal being built; backspace erases the
//! last echoed character and drops the last digit.

use std::io::{self, Write};

use crate::fixed::{Fixed, Scale};
use crate::source::KeySource;

/// ASCII escape: quit.
pub const ESCAPE: char = '\x1b';
/// ASCII delete, sent by most terminals for the backspace key.
pub const DELETE: char = '\x7f';
/// ASCII backspace (Ctrl-H).
pub const BACKSPACE: char = '\x08';

/// Written to erase one echoed character.
const ERASE: &[u8] = b"\x08 \x08";

/// What an input event asks the evaluator to do after any push.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Operator {
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Leave the calculator.
    Quit,
    /// Discard the stack and any partial input.
    Clear,
}

impl Operator {
    /// The arithmetic operator bound to `c`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// True for the four operators that consume stack operands.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide
        )
    }
}

/// One decoded line of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputEvent {
    /// Literal at full precision. Zero when nothing was typed.
    pub literal: Fixed,
    /// The literal must be pushed before `op` runs.
    pub push: bool,
    pub op: Operator,
}

impl InputEvent {
    /// An empty line: nothing to push, nothing to run.
    pub const NONE: InputEvent = InputEvent {
        literal: 0,
        push: false,
        op: Operator::None,
    };

    /// True when applying the event would change nothing.
    pub fn is_noop(&self) -> bool {
        !self.push && self.op == Operator::None
    }
}

/// Reads keystrokes and assembles input events.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    scale: Scale,
}

impl Decoder {
    pub fn new(scale: Scale) -> Self {
        Self { scale }
    }

    /// Decode the next event, echoing accepted characters to `echo`.
    ///
    /// Blocks on `source` until the line is terminated. End of input is
    /// decoded as [`Operator::Quit`].
    pub fn decode_next<S, W>(&self, source: &mut S, echo: &mut W) -> io::Result<InputEvent>
    where
        S: KeySource + ?Sized,
        W: Write + ?Sized,
    {
        let mut literal = Literal::default();

        let (op, terminator) = loop {
            let Some(c) = source.read_key()? else {
                break (Operator::Quit, None);
            };
            match c {
                '0'..='9' => {
                    let digit = i64::from(c as u8 - b'0');
                    if literal.push_digit(digit, self.scale) {
                        echo_char(echo, c)?;
                    }
                }
                '.' => {
                    if literal.enter_fraction() {
                        echo_char(echo, c)?;
                    }
                }
                '_' => {
                    literal.negate();
                    echo_char(echo, c)?;
                }
                ' ' | '\n' => break (Operator::None, Some(c)),
                ';' => break (Operator::Clear, Some(c)),
                ESCAPE => break (Operator::Quit, None),
                DELETE | BACKSPACE => {
                    if literal.undo() {
                        echo.write_all(ERASE)?;
                    }
                }
                _ => {
                    if let Some(op) = Operator::from_char(c) {
                        break (op, Some(c));
                    }
                }
            }
            echo.flush()?;
        };

        let push = match op {
            Operator::Clear => false,
            Operator::None => true,
            _ => literal.push,
        };

        if literal.is_blank() && op == Operator::None {
            log::debug!("empty line");
            return Ok(InputEvent::NONE);
        }
        if let Some(c) = terminator
            && c != '\n'
        {
            echo_char(echo, c)?;
        }
        echo.flush()?;

        let event = InputEvent {
            literal: literal.finish(self.scale),
            push,
            op,
        };
        log::debug!("decoded {event:?}");
        Ok(event)
    }
}

fn echo_char<W: Write + ?Sized>(echo: &mut W, c: char) -> io::Result<()> {
    let mut buf = [0; 4];
    echo.write_all(c.encode_utf8(&mut buf).as_bytes())
}

/// A literal under construction.
#[derive(Debug, Default)]
struct Literal {
    /// Signed digits typed so far, before padding to full precision.
    value: i64,
    fractional: bool,
    frac_digits: u32,
    /// Set by every accepted digit; backspace leaves it alone.
    push: bool,
    /// Characters echoed so far, for backspace.
    echoed: Vec<char>,
}

impl Literal {
    /// Append a digit. Returns false when the digit is discarded.
    fn push_digit(&mut self, digit: i64, scale: Scale) -> bool {
        if self.fractional && self.frac_digits >= scale.precision() {
            return false;
        }
        let frac_digits = self.frac_digits + u32::from(self.fractional);
        let pad = 10i64.pow(scale.precision() - frac_digits);
        let fits = self
            .value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .filter(|v| v.checked_mul(pad).is_some());
        let Some(value) = fits else {
            return false;
        };
        self.value = value;
        self.frac_digits = frac_digits;
        self.push = true;
        self.echoed.push(char::from(b'0' + digit as u8));
        true
    }

    /// Switch to fractional digits. Returns false if already there.
    fn enter_fraction(&mut self) -> bool {
        if self.fractional {
            return false;
        }
        self.fractional = true;
        self.echoed.push('.');
        true
    }

    /// Negate the digits typed so far. Later digits extend the negated value.
    fn negate(&mut self) {
        self.value = -self.value;
        self.echoed.push('_');
    }

    /// Erase the last echoed character. Returns false if nothing was echoed.
    ///
    /// The value loses its last digit unless the erased character was the
    /// decimal point. In fractional mode the digit counter steps back, and
    /// leaves fractional mode once it is already zero.
    fn undo(&mut self) -> bool {
        let Some(c) = self.echoed.pop() else {
            return false;
        };
        if c != '.' {
            self.value /= 10;
        }
        if self.fractional {
            if self.frac_digits > 0 {
                self.frac_digits -= 1;
            } else {
                self.fractional = false;
            }
        }
        true
    }

    fn is_blank(&self) -> bool {
        self.echoed.is_empty()
    }

    /// Pad to full precision.
    fn finish(&self, scale: Scale) -> Fixed {
        self.value * 10i64.pow(scale.precision() - self.frac_digits)
    }
}
