//! Diagnostic logging.
//!
//! The calculator owns stdout, so log records go to stderr. Library code logs
//! through the `log` facade; the subscriber installed here picks those records
//! up through its `log` bridge.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::Error;

/// Install the stderr subscriber with the given filter directives.
pub fn init(filter: &str) -> Result<(), Error> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_filter() {
        let err = init("rpn_core=notalevel").unwrap_err();
        assert!(matches!(err, Error::LogFilter(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
