//! Statically allocated FIR and IIR filters.
//!
//! Filters are evaluated sample by sample from the coefficients of their
//! difference equation, either supplied directly or derived from a
//! z-transform.  Filter length and sample type are compile time parameters,
//! no memory is allocated while filtering and every update does `O(N)` work.
//!
//! ```
//! use filter_rs::prelude::*;
//!
//! let mut filter: Filter<f64, 2> = Filter::from_z_transform(
//!     &[0.5, 0.0],
//!     &[1.0, -0.5],
//! ).unwrap();
//! assert_eq!(filter.update(2.0), 1.0);
//! assert_eq!(filter.update(2.0), 1.5);
//! ```

pub mod filter;
pub mod prelude;
pub mod util;
