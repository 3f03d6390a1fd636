//! Fixed-point decimal arithmetic.
//!
//! Every value the calculator handles is a plain `i64` holding the decimal
//! quantity multiplied by `10^precision`. [`Scale`] carries the precision and
//! implements the four operators so that results stay at full precision.

use std::fmt;

use crate::config::MAX_PRECISION;
use crate::error::Fault;

/// A decimal value scaled by `10^precision`.
pub type Fixed = i64;

/// The scale factor separating a [`Fixed`] from the value it represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    precision: u32,
    factor: i64,
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PRECISION)
    }
}

impl Scale {
    /// Create a scale with the given number of fractional digits.
    ///
    /// Precision is clamped to [`MAX_PRECISION`].
    pub fn new(precision: u32) -> Self {
        let precision = precision.min(MAX_PRECISION);
        Self {
            precision,
            factor: 10i64.pow(precision),
        }
    }

    /// Number of fractional digits.
    pub fn precision(self) -> u32 {
        self.precision
    }

    /// `10^precision`.
    pub fn factor(self) -> i64 {
        self.factor
    }

    pub fn add(self, a: Fixed, b: Fixed) -> Result<Fixed, Fault> {
        a.checked_add(b).ok_or(Fault::ArithmeticOverflow)
    }

    pub fn sub(self, a: Fixed, b: Fixed) -> Result<Fixed, Fault> {
        a.checked_sub(b).ok_or(Fault::ArithmeticOverflow)
    }

    /// Multiply two scaled values, dividing out one factor of the scale.
    pub fn mul(self, a: Fixed, b: Fixed) -> Result<Fixed, Fault> {
        let wide = i128::from(a) * i128::from(b) / i128::from(self.factor);
        Fixed::try_from(wide).map_err(|_| Fault::ArithmeticOverflow)
    }

    /// Divide two scaled values, rescaling the dividend first.
    pub fn div(self, a: Fixed, b: Fixed) -> Result<Fixed, Fault> {
        if b == 0 {
            return Err(Fault::DivisionByZero);
        }
        let wide = i128::from(a) * i128::from(self.factor) / i128::from(b);
        Fixed::try_from(wide).map_err(|_| Fault::ArithmeticOverflow)
    }

    /// Render `value` with exactly `precision` fractional digits.
    pub fn display(self, value: Fixed) -> FixedDisplay {
        FixedDisplay { value, scale: self }
    }
}

/// Formatter returned by [`Scale::display`].
#[derive(Clone, Copy, Debug)]
pub struct FixedDisplay {
    value: Fixed,
    scale: Scale,
}

impl fmt::Display for FixedDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value < 0 { "-" } else { "" };
        let magnitude = self.value.unsigned_abs();
        let factor = self.scale.factor.unsigned_abs();
        let whole = magnitude / factor;
        if self.scale.precision == 0 {
            return write!(f, "{sign}{whole}");
        }
        let frac = magnitude % factor;
        let width = self.scale.precision as usize;
        write!(f, "{sign}{whole}.{frac:0width$}")
    }
}
