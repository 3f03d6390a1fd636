//! Command-line arguments.

use clap::Parser;
use rpn_core::config::{DEFAULT_CAPACITY, DEFAULT_PRECISION};
use rpn_core::{Config, ConfigError};

#[derive(Clone, Debug, Parser)]
#[command(name = "rpn", version, about = "Fixed-point RPN calculator")]
pub struct Cli {
    /// Fractional digits carried by every value (0-9).
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    pub precision: u32,

    /// Maximum number of values on the stack.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Read line-buffered input instead of raw keystrokes.
    #[arg(long)]
    pub line_mode: bool,

    /// Log filter for stderr output, e.g. `debug` or `rpn_core=trace`.
    #[arg(long, value_name = "FILTER", default_value = "off")]
    pub log_level: String,
}

impl Cli {
    /// The validated calculator configuration.
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config {
            precision: self.precision,
            capacity: self.capacity,
        }
        .validate()
    }
}
