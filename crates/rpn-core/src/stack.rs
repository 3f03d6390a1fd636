//! Operand stack.
//!
//! A bounded stack of fixed-point values. Pushing past capacity and popping
//! an empty stack both fail without touching the contents.

use crate::error::Fault;
use crate::fixed::Fixed;

/// The calculator operand stack.
#[derive(Clone, Debug)]
pub struct Stack {
    items: Vec<Fixed>,
    capacity: usize,
}

impl Stack {
    /// Create an empty stack holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of values.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push a value onto the stack.
    pub fn push(&mut self, value: Fixed) -> Result<(), Fault> {
        if self.items.len() >= self.capacity {
            return Err(Fault::StackOverflow);
        }
        self.items.push(value);
        Ok(())
    }

    /// Pop a value from the stack.
    pub fn pop(&mut self) -> Result<Fixed, Fault> {
        self.items.pop().ok_or(Fault::StackUnderflow)
    }

    /// Top of stack, if any.
    pub fn top(&self) -> Option<Fixed> {
        self.items.last().copied()
    }

    /// Clear the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the contents with `value` alone, or nothing when it is zero.
    pub fn reset_to(&mut self, value: Fixed) {
        self.items.clear();
        if value != 0 {
            self.items.push(value);
        }
    }

    /// All values, bottom to top.
    pub fn as_slice(&self) -> &[Fixed] {
        &self.items
    }
}
