//! Terminal front end for the fixed-point RPN calculator.
//!
//! Puts the terminal into raw mode, feeds keystrokes to the
//! [`rpn_core::Decoder`] and prints what the [`rpn_core::Evaluator`] leaves
//! on top of the stack. When stdin is not a terminal the same loop runs over
//! line-buffered input.

mod cli;
mod error;
pub mod input;
mod logging;
pub mod output;
mod repl;
pub mod terminal;

pub use cli::Cli;
pub use error::Error;
pub use repl::Repl;

use std::io::{self, IsTerminal};

use input::{LineKeys, TerminalKeys};
use output::CrlfWriter;
use terminal::RawModeGuard;

/// Run the calculator with the given arguments.
pub fn run(cli: &Cli) -> Result<(), Error> {
    logging::init(&cli.log_level)?;
    let config = cli.config()?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    if cli.line_mode || !stdin.is_terminal() {
        log::info!("using line-buffered input");
        Repl::new(config, LineKeys::new(stdin.lock()), stdout.lock()).run()?;
    } else {
        let _raw = RawModeGuard::enter()?;
        Repl::new(config, TerminalKeys, CrlfWriter::new(stdout.lock())).run()?;
    }
    Ok(())
}
