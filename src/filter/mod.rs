//! Statically allocated digital filters.
//!
//! There are two primary categories of digital filters in signal processing:
//!
//! * Finite Impulse Response (FIR) Filters
//! * Infinite Impulse Response (IIR) Filters
//!
//! FIR filters are feedforward based systems, meaning they can't become
//! unstable regardless of the input data.  Their output only depends on the
//! input history, so every feedback coefficient is zero.
//!
//! IIR filters are feedback based systems, and have all the caveats associated
//! with any feedback system.  If poorly designed they can be unstable and
//! unpredictable.  A well designed IIR filter is however extremely efficient:
//! many times a design that requires an 81 tap FIR filter could only require
//! 9 taps from a well designed IIR filter alternative.
//!
//! Both categories are served by the same [`Filter`](lti::Filter), which
//! evaluates the difference equation
//!
//! ```text
//! y[n] = sum_{k=0}^{N-1} a[k] * x[n-k] + sum_{k=1}^{N-1} b[k] * y[n-k]
//! ```
//!
//! with `N` fixed at compile time and all storage held inline.

use crate::util::MathError;
use std::error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    /// The leading denominator coefficient of a z-transform is zero.
    DegenerateDenominator,
    LengthMismatch { expected: usize, found: usize },
    Codec(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FilterError::DegenerateDenominator => write!(
                f,
                "Filter error: z-transform denominator[0] must not be zero"
            ),
            FilterError::LengthMismatch { expected, found } => write!(
                f,
                "Filter error: expected {} state values, found {}",
                expected, found
            ),
            FilterError::Codec(msg) => {
                write!(f, "Filter error: snapshot encoding failed: {}", msg)
            }
        }
    }
}

impl error::Error for FilterError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

impl From<MathError> for FilterError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivideByZero => FilterError::DegenerateDenominator,
        }
    }
}

pub mod lti;
#[cfg(feature = "snapshot")]
pub mod snapshot;
