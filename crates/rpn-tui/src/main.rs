//! rpn - fixed-point RPN calculator.
//!
//! Type numbers and finish them with space or enter, or follow a number
//! directly with `+ - * /`. `_` negates, `;` clears the stack, escape quits.

use clap::Parser;

fn main() {
    let cli = rpn_tui::Cli::parse();
    if let Err(e) = rpn_tui::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
