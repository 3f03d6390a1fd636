use thiserror::Error;

/// Recoverable faults raised while applying an input event.
///
/// None of these stop the calculator: the evaluator substitutes a safe value,
/// finishes the cycle, and collapses the stack to the answer register.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
pub enum Fault {
    /// Pop from an empty stack.
    #[error("stack underflow")]
    StackUnderflow,
    /// Push onto a full stack.
    #[error("stack overflow")]
    StackOverflow,
    /// Divisor popped from the stack was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Result does not fit the fixed-point range.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}

impl Fault {
    /// The line shown to the user when the fault occurs.
    pub fn banner(self) -> &'static str {
        match self {
            Fault::StackUnderflow => "ERROR: STACK UNDERFLOW!",
            Fault::StackOverflow => "ERROR: STACK OVERFLOW!",
            Fault::DivisionByZero => "ERROR: DIVISION BY ZERO!",
            Fault::ArithmeticOverflow => "ERROR: ARITHMETIC OVERFLOW!",
        }
    }
}
