//! Helper functions shared by the filter implementations.

use std::error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum MathError {
    DivideByZero,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = match *self {
            MathError::DivideByZero => "Attempted to divide by zero",
        };
        write!(f, "Math error: {}", desc)
    }
}

impl error::Error for MathError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

/// Allocation free vector primitives used by the filter engine
pub mod math;
