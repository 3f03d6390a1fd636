//! Fixed-point RPN calculator core.
//!
//! This crate holds everything that does not touch the terminal:
//!
//! - [`Decoder`] turns raw keystrokes into [`InputEvent`]s, echoing as it goes
//! - [`Evaluator`] applies events to a bounded operand [`Stack`]
//! - [`Scale`] implements fixed-point arithmetic and formatting
//!
//! # Example
//!
//! ```
//! use rpn_core::{Config, Decoder, Evaluator, Outcome, Scripted};
//!
//! let config = Config::default();
//! let decoder = Decoder::new(rpn_core::Scale::new(config.precision));
//! let mut eval = Evaluator::new(config);
//! let mut keys = Scripted::from_text("2 3*");
//! let mut echo = Vec::new();
//!
//! eval.apply(decoder.decode_next(&mut keys, &mut echo).unwrap());
//! let outcome = eval.apply(decoder.decode_next(&mut keys, &mut echo).unwrap());
//! let Outcome::Display { value, .. } = outcome else { panic!() };
//! assert_eq!(eval.display(value).to_string(), "6.000");
//! ```

pub mod config;
pub mod decode;
mod error;
pub mod eval;
mod fixed;
mod source;
mod stack;

pub use config::{Config, ConfigError};
pub use decode::{Decoder, InputEvent, Operator};
pub use error::Fault;
pub use eval::{Evaluator, Faults, Outcome};
pub use fixed::{Fixed, FixedDisplay, Scale};
pub use source::{KeySource, Scripted};
pub use stack::Stack;
