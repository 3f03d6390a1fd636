//! Calculator configuration.

use thiserror::Error;

/// Default number of fractional digits.
pub const DEFAULT_PRECISION: u32 = 3;

/// Default operand stack capacity.
pub const DEFAULT_CAPACITY: usize = 256;

/// Largest precision whose scale factor leaves room for an integer part in `i64`.
pub const MAX_PRECISION: u32 = 9;

/// Errors from validating a [`Config`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("precision {0} is out of range (maximum is {MAX_PRECISION})")]
    Precision(u32),

    #[error("stack capacity must be at least 1")]
    ZeroCapacity,
}

/// Tunables shared by the decoder and the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Fractional digits carried by every fixed-point value.
    pub precision: u32,
    /// Maximum operand stack depth.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Check that the values are usable.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Precision(self.precision));
        }
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(self)
    }
}
