//! This module provides an easy single import for those using this crate.

pub use crate::filter::lti::Filter;
#[cfg(feature = "snapshot")]
pub use crate::filter::snapshot::FilterSnapshot;
pub use crate::filter::FilterError;
pub use crate::util::MathError;
