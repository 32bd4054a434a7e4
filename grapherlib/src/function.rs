//! Function variants that tables are sampled from.
//!
//! A [`Function`] is a closed set of variants behind a single evaluation
//! capability: constant, linear, or an arbitrary closure. Evaluation is
//! total for finite inputs and has no side effects, so a function value
//! can be sampled any number of times.

use std::fmt;

/// A real-valued function of one real variable.
pub enum Function {
    /// Always returns the same value, regardless of input.
    Constant(f64),
    /// `slope * x + intercept`.
    Linear { slope: f64, intercept: f64 },
    /// Any `f64 -> f64` closure (e.g. trigonometric functions).
    Arbitrary(Box<dyn Fn(f64) -> f64>),
}

impl Function {
    /// Create a constant function.
    pub fn constant(y: f64) -> Self {
        Function::Constant(y)
    }

    /// Create a linear function `slope * x + intercept`.
    pub fn linear(slope: f64, intercept: f64) -> Self {
        Function::Linear { slope, intercept }
    }

    /// Wrap an arbitrary closure.
    pub fn arbitrary(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Function::Arbitrary(Box::new(f))
    }

    /// The sine function, input in radians.
    pub fn sine() -> Self {
        Function::arbitrary(f64::sin)
    }

    /// Evaluate the function at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Function::Constant(y) => *y,
            Function::Linear { slope, intercept } => slope * x + intercept,
            Function::Arbitrary(f) => f(x),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Constant(y) => f.debug_tuple("Constant").field(y).finish(),
            Function::Linear { slope, intercept } => f
                .debug_struct("Linear")
                .field("slope", slope)
                .field("intercept", intercept)
                .finish(),
            Function::Arbitrary(_) => f.write_str("Arbitrary(..)"),
        }
    }
}
