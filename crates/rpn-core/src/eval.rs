//! RPN evaluator.
//!
//! Applies decoded input events to the operand stack. Each event is handled
//! as one cycle:
//!
//! 1. An arithmetic operator pops the top of stack into the answer register.
//! 2. A pending literal is pushed.
//! 3. The operator pops its second operand and pushes `ans ∘ operand`.
//! 4. If anything faulted, the stack collapses to the answer register.
//!
//! Faults never escape a cycle: an underflowed pop yields 1, a failed push is
//! dropped, and the collapse in step 4 leaves a known state for the next
//! event.

use smallvec::SmallVec;

use crate::config::Config;
use crate::decode::{InputEvent, Operator};
use crate::error::Fault;
use crate::fixed::{Fixed, FixedDisplay, Scale};
use crate::stack::Stack;

/// Faults raised during a single cycle, in the order they occurred.
pub type Faults = SmallVec<[Fault; 4]>;

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The user asked to leave.
    Quit,
    /// The stack was emptied; nothing to display.
    Cleared,
    /// The cycle completed; `value` is the new top of stack (0 when empty).
    Display { value: Fixed, faults: Faults },
}

/// Owns the operand stack and the answer register.
#[derive(Clone, Debug)]
pub struct Evaluator {
    stack: Stack,
    /// The last operand popped by an operator.
    ans: Fixed,
    scale: Scale,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Evaluator {
    pub fn new(config: Config) -> Self {
        Self {
            stack: Stack::with_capacity(config.capacity),
            ans: 0,
            scale: Scale::new(config.precision),
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Current stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The answer register.
    pub fn ans(&self) -> Fixed {
        self.ans
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Top of stack, or 0 when empty.
    pub fn top(&self) -> Fixed {
        self.stack.top().unwrap_or(0)
    }

    /// Render a value at this evaluator's precision.
    pub fn display(&self, value: Fixed) -> FixedDisplay {
        self.scale.display(value)
    }

    /// Apply one event.
    pub fn apply(&mut self, event: InputEvent) -> Outcome {
        match event.op {
            Operator::Quit => return Outcome::Quit,
            Operator::Clear => {
                log::debug!("clearing {} values", self.stack.len());
                self.stack.clear();
                return Outcome::Cleared;
            }
            _ if event.is_noop() => {
                return Outcome::Display {
                    value: self.top(),
                    faults: Faults::new(),
                };
            }
            _ => {}
        }

        let mut faults = Faults::new();
        let arithmetic = event.op.is_arithmetic();

        if arithmetic {
            self.ans = self.pop_or_one(&mut faults);
        }
        if event.push {
            self.push(event.literal, &mut faults);
        }
        if arithmetic {
            let operand = self.pop_or_one(&mut faults);
            match self.combine(event.op, operand) {
                Ok(result) => self.push(result, &mut faults),
                Err(fault) => record(&mut faults, fault),
            }
        }

        if !faults.is_empty() {
            log::debug!("resetting stack to ans = {}", self.ans);
            self.stack.reset_to(self.ans);
        }

        Outcome::Display {
            value: self.top(),
            faults,
        }
    }

    fn combine(&self, op: Operator, operand: Fixed) -> Result<Fixed, Fault> {
        let ans = self.ans;
        match op {
            Operator::Add => self.scale.add(ans, operand),
            Operator::Subtract => self.scale.sub(ans, operand),
            Operator::Multiply => self.scale.mul(ans, operand),
            Operator::Divide => self.scale.div(ans, operand),
            Operator::None | Operator::Quit | Operator::Clear => Ok(operand),
        }
    }

    fn pop_or_one(&mut self, faults: &mut Faults) -> Fixed {
        self.stack.pop().unwrap_or_else(|fault| {
            record(faults, fault);
            1
        })
    }

    fn push(&mut self, value: Fixed, faults: &mut Faults) {
        if let Err(fault) = self.stack.push(value) {
            record(faults, fault);
        }
    }
}

fn record(faults: &mut Faults, fault: Fault) {
    log::warn!("{fault}");
    faults.push(fault);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(value: Fixed) -> InputEvent {
        InputEvent {
            literal: value,
            push: true,
            op: Operator::None,
        }
    }

    fn with_literal(value: Fixed, op: Operator) -> InputEvent {
        InputEvent {
            literal: value,
            push: true,
            op,
        }
    }

    fn bare(op: Operator) -> InputEvent {
        InputEvent {
            literal: 0,
            push: false,
            op,
        }
    }

    fn shown(value: Fixed) -> Outcome {
        Outcome::Display {
            value,
            faults: Faults::new(),
        }
    }

    fn faulted(value: Fixed, faults: &[Fault]) -> Outcome {
        Outcome::Display {
            value,
            faults: faults.iter().copied().collect(),
        }
    }

    #[test]
    fn push_literal() {
        let mut eval = Evaluator::default();
        assert_eq!(eval.apply(literal(5000)), shown(5000));
        assert_eq!(eval.depth(), 1);
    }

    #[test]
    fn empty_line_shows_top() {
        let mut eval = Evaluator::default();
        assert_eq!(eval.apply(InputEvent::NONE), shown(0));
        eval.apply(literal(2500));
        assert_eq!(eval.apply(InputEvent::NONE), shown(2500));
        assert_eq!(eval.depth(), 1);
    }

    #[test]
    fn add_with_trailing_operator() {
        let mut eval = Evaluator::default();
        eval.apply(literal(5000));
        assert_eq!(eval.apply(with_literal(3000, Operator::Add)), shown(8000));
        assert_eq!(eval.stack().as_slice(), &[8000]);
    }

    #[test]
    fn add_with_bare_operator() {
        let mut eval = Evaluator::default();
        eval.apply(literal(1500));
        eval.apply(literal(2250));
        assert_eq!(eval.apply(bare(Operator::Add)), shown(3750));
        assert_eq!(eval.depth(), 1);
    }

    #[test]
    fn subtract_is_ans_minus_operand() {
        let mut eval = Evaluator::default();
        eval.apply(literal(10000));
        assert_eq!(eval.apply(with_literal(3000, Operator::Subtract)), shown(7000));

        // With both values already stacked, ans is the top.
        let mut eval = Evaluator::default();
        eval.apply(literal(10000));
        eval.apply(literal(3000));
        assert_eq!(eval.apply(bare(Operator::Subtract)), shown(-7000));
    }

    #[test]
    fn multiply_rescales() {
        let mut eval = Evaluator::default();
        eval.apply(literal(2000));
        assert_eq!(eval.apply(with_literal(3000, Operator::Multiply)), shown(6000));
        assert_eq!(eval.display(eval.top()).to_string(), "6.000");
    }

    #[test]
    fn divide_rescales() {
        let mut eval = Evaluator::default();
        eval.apply(literal(6000));
        assert_eq!(eval.apply(with_literal(2000, Operator::Divide)), shown(3000));
        assert_eq!(eval.display(eval.top()).to_string(), "3.000");
    }

    #[test]
    fn underflow_collapses_to_ans() {
        let mut eval = Evaluator::default();
        eval.apply(literal(4000));
        let outcome = eval.apply(bare(Operator::Subtract));
        assert_eq!(outcome, faulted(4000, &[Fault::StackUnderflow]));
        assert_eq!(eval.ans(), 4000);
        assert_eq!(eval.stack().as_slice(), &[4000]);
    }

    #[test]
    fn underflow_on_empty_stack() {
        let mut eval = Evaluator::default();
        let outcome = eval.apply(bare(Operator::Multiply));
        assert_eq!(
            outcome,
            faulted(1, &[Fault::StackUnderflow, Fault::StackUnderflow])
        );
        // ans took the substituted 1.
        assert_eq!(eval.stack().as_slice(), &[1]);
    }

    #[test]
    fn operator_after_literal_on_empty_stack() {
        let mut eval = Evaluator::default();
        // "7+" with nothing stacked: the first pop underflows, ans = 1.
        let outcome = eval.apply(with_literal(7000, Operator::Add));
        assert_eq!(outcome, faulted(1, &[Fault::StackUnderflow]));
        assert_eq!(eval.stack().as_slice(), &[1]);
    }

    #[test]
    fn overflow_caps_then_collapses() {
        let mut eval = Evaluator::new(Config {
            capacity: 3,
            ..Config::default()
        });
        eval.apply(literal(9000));
        eval.apply(with_literal(1000, Operator::Add));
        assert_eq!(eval.ans(), 9000);
        for value in [2000, 3000] {
            assert_eq!(eval.apply(literal(value)), shown(value));
        }
        assert_eq!(eval.depth(), 3);

        let outcome = eval.apply(literal(4000));
        assert_eq!(outcome, faulted(9000, &[Fault::StackOverflow]));
        assert_eq!(eval.stack().as_slice(), &[9000]);
    }

    #[test]
    fn overflow_with_zero_ans_empties() {
        let capacity = crate::config::DEFAULT_CAPACITY;
        let mut eval = Evaluator::default();
        for i in 0..capacity {
            eval.apply(literal(i as Fixed));
        }
        assert_eq!(eval.depth(), capacity);
        let outcome = eval.apply(literal(1000));
        assert_eq!(outcome, faulted(0, &[Fault::StackOverflow]));
        assert!(eval.stack().is_empty());
    }

    #[test]
    fn division_by_zero_collapses() {
        let mut eval = Evaluator::default();
        eval.apply(literal(5000));
        let outcome = eval.apply(with_literal(0, Operator::Divide));
        assert_eq!(outcome, faulted(5000, &[Fault::DivisionByZero]));
        assert_eq!(eval.stack().as_slice(), &[5000]);
    }

    #[test]
    fn arithmetic_overflow_collapses() {
        let mut eval = Evaluator::default();
        eval.apply(literal(i64::MAX));
        let outcome = eval.apply(with_literal(1000, Operator::Add));
        assert_eq!(outcome, faulted(i64::MAX, &[Fault::ArithmeticOverflow]));
        assert_eq!(eval.stack().as_slice(), &[i64::MAX]);
    }

    #[test]
    fn clear_empties_stack() {
        let mut eval = Evaluator::default();
        eval.apply(literal(1000));
        eval.apply(literal(2000));
        let clear = InputEvent {
            literal: 12500,
            push: false,
            op: Operator::Clear,
        };
        assert_eq!(eval.apply(clear), Outcome::Cleared);
        assert!(eval.stack().is_empty());
        assert_eq!(eval.apply(InputEvent::NONE), shown(0));
    }

    #[test]
    fn quit_leaves_stack_alone() {
        let mut eval = Evaluator::default();
        eval.apply(literal(1000));
        assert_eq!(eval.apply(with_literal(2000, Operator::Quit)), Outcome::Quit);
        assert_eq!(eval.stack().as_slice(), &[1000]);
    }

    #[test]
    fn pushed_zero_is_kept() {
        let mut eval = Evaluator::default();
        eval.apply(literal(0));
        assert_eq!(eval.depth(), 1);
        eval.apply(with_literal(0, Operator::Add));
        assert_eq!(eval.stack().as_slice(), &[0]);
    }

    #[test]
    fn precision_one() {
        let mut eval = Evaluator::new(Config {
            precision: 1,
            ..Config::default()
        });
        eval.apply(literal(25));
        assert_eq!(eval.apply(with_literal(25, Operator::Multiply)), shown(62));
        assert_eq!(eval.display(eval.top()).to_string(), "6.2");
    }
}
