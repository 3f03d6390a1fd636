//! The read-eval-print loop.

use std::io::{self, Write};

use rpn_core::{Config, Decoder, Evaluator, KeySource, Outcome, Scale};

/// Drives a decoder and an evaluator from a key source to an output stream.
pub struct Repl<S, W> {
    decoder: Decoder,
    evaluator: Evaluator,
    source: S,
    out: W,
}

impl<S: KeySource, W: Write> Repl<S, W> {
    pub fn new(config: Config, source: S, out: W) -> Self {
        Self {
            decoder: Decoder::new(Scale::new(config.precision)),
            evaluator: Evaluator::new(config),
            source,
            out,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Run until the quit command or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        log::info!(
            "calculator started (precision {}, capacity {})",
            self.evaluator.scale().precision(),
            self.evaluator.stack().capacity()
        );
        while self.step()? {}
        writeln!(self.out)?;
        self.out.flush()?;
        log::info!("calculator stopped");
        Ok(())
    }

    /// Prompt, decode and apply one event. Returns false after quit.
    pub fn step(&mut self) -> io::Result<bool> {
        write!(self.out, "[{}] > ", self.evaluator.depth())?;
        self.out.flush()?;

        let event = self.decoder.decode_next(&mut self.source, &mut self.out)?;
        match self.evaluator.apply(event) {
            Outcome::Quit => return Ok(false),
            Outcome::Cleared => writeln!(self.out)?,
            Outcome::Display { value, faults } => {
                for fault in faults {
                    write!(self.out, "\n{}\n", fault.banner())?;
                }
                writeln!(self.out, " >>> {}", self.evaluator.display(value))?;
            }
        }
        self.out.flush()?;
        Ok(true)
    }
}
