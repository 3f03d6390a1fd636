use std::io;

use rpn_core::ConfigError;
use thiserror::Error;

/// Errors that stop the calculator.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to set up logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
