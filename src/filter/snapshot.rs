//! Saving and restoring the history of a running filter.
//!
//! A `FilterSnapshot` holds the input and output history of a `Filter`,
//! newest sample first, and can be serialized with any serde format.  CBOR
//! helpers are provided for storing a snapshot as bytes.

use crate::filter::lti::Filter;
use crate::filter::FilterError;
use crate::util::math::copy_array;
use log::{debug, warn};
use num_traits::Num;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// History of a filter at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterSnapshot<T> {
    pub input: Vec<T>,
    pub output: Vec<T>,
}

impl<T> FilterSnapshot<T>
where
    T: Serialize,
{
    /// Encodes the snapshot as CBOR.
    pub fn to_cbor(&self) -> Result<Vec<u8>, FilterError> {
        serde_cbor::to_vec(self).map_err(|e| FilterError::Codec(e.to_string()))
    }
}

impl<T> FilterSnapshot<T>
where
    T: DeserializeOwned,
{
    /// Decodes a snapshot previously encoded with `to_cbor`.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, FilterError> {
        serde_cbor::from_slice(bytes)
            .map_err(|e| FilterError::Codec(e.to_string()))
    }
}

impl<T, const N: usize> Filter<T, N>
where
    T: Num + Copy,
{
    /// Captures the current input and output history.
    ///
    /// # Examples
    ///
    /// ```
    /// use filter_rs::filter::lti::Filter;
    ///
    /// let mut filter = Filter::exponential_moving_average(0.5_f64);
    /// filter.update(1.0);
    ///
    /// let snapshot = filter.snapshot();
    /// let mut resumed = Filter::exponential_moving_average(0.5_f64);
    /// resumed.restore(&snapshot).unwrap();
    /// assert_eq!(resumed.update(1.0), filter.update(1.0));
    /// ```
    pub fn snapshot(&self) -> FilterSnapshot<T> {
        FilterSnapshot {
            input: self.input_state().to_vec(),
            output: self.output_state().to_vec(),
        }
    }

    /// Loads the history held by `snapshot`, leaving coefficients as they are.
    ///
    /// Both sequences must hold exactly `N` samples, otherwise
    /// `FilterError::LengthMismatch` is returned and the filter is left
    /// untouched.
    pub fn restore(
        &mut self,
        snapshot: &FilterSnapshot<T>,
    ) -> Result<(), FilterError> {
        for found in &[snapshot.input.len(), snapshot.output.len()] {
            if *found != N {
                warn!(
                    "rejected snapshot of length {} for a filter of length {}",
                    found, N
                );
                return Err(FilterError::LengthMismatch {
                    expected: N,
                    found: *found,
                });
            }
        }

        let mut input = [T::zero(); N];
        let mut output = [T::zero(); N];
        copy_array(&mut input, &snapshot.input);
        copy_array(&mut output, &snapshot.output);
        self.set_state(&input, &output);
        debug!("restored filter history of length {}", N);
        Ok(())
    }
}
