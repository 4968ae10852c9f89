//! Toy arithmetic service demonstrating dependency substitution.
//!
//! # Responsibility
//! - Show the constructor-injection seam used across this crate on the
//!   smallest possible collaborator.
//!
//! The wrapper adds no behavior of its own; tests substitute `Arithmetic`
//! the same way they substitute `ProductRepository` for the controller.

/// Two-argument integer arithmetic capability.
pub trait Arithmetic {
    fn add(&self, a: i32, b: i32) -> i32;
    fn multiply(&self, a: i32, b: i32) -> i32;
}

/// Default arithmetic implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicArithmetic;

impl Arithmetic for BasicArithmetic {
    /// Adds two integers, short-circuiting to 0 when either operand is 0.
    fn add(&self, a: i32, b: i32) -> i32 {
        if a == 0 || b == 0 {
            return 0;
        }
        a + b
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        a * b
    }
}

/// Delegating calculator over an injected arithmetic implementation.
pub struct Calculator<A: Arithmetic> {
    arithmetic: A,
}

impl<A: Arithmetic> Calculator<A> {
    /// Creates a calculator using the provided arithmetic implementation.
    pub fn new(arithmetic: A) -> Self {
        Self { arithmetic }
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        self.arithmetic.add(a, b)
    }

    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        self.arithmetic.multiply(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{Arithmetic, BasicArithmetic, Calculator};
    use std::cell::Cell;

    #[test]
    fn add_sums_nonzero_operands() {
        let calculator = Calculator::new(BasicArithmetic);
        assert_eq!(calculator.add(2, 5), 7);
    }

    #[test]
    fn add_short_circuits_on_zero_operand() {
        let calculator = Calculator::new(BasicArithmetic);
        assert_eq!(calculator.add(0, 5), 0);
        assert_eq!(calculator.add(3, 0), 0);
    }

    #[test]
    fn multiply_delegates_to_implementation() {
        let calculator = Calculator::new(BasicArithmetic);
        assert_eq!(calculator.multiply(4, 5), 20);
    }

    /// Scripted substitute proving the calculator only delegates.
    struct ScriptedArithmetic {
        result: i32,
        calls: Cell<u32>,
    }

    impl Arithmetic for ScriptedArithmetic {
        fn add(&self, _a: i32, _b: i32) -> i32 {
            self.calls.set(self.calls.get() + 1);
            self.result
        }

        fn multiply(&self, _a: i32, _b: i32) -> i32 {
            self.calls.set(self.calls.get() + 1);
            self.result
        }
    }

    #[test]
    fn substituted_arithmetic_drives_calculator_results() {
        let calculator = Calculator::new(ScriptedArithmetic {
            result: 42,
            calls: Cell::new(0),
        });
        assert_eq!(calculator.add(1, 1), 42);
        assert_eq!(calculator.multiply(9, 9), 42);
        assert_eq!(calculator.arithmetic.calls.get(), 2);
    }
}
