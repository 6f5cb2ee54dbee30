//! Implementation of a linear time-invariant filter evaluated directly from
//! its difference equation.
//!
//! The same structure serves moving averages, exponential smoothers and
//! higher order IIR filters.  The filter length `N` and the sample type `T`
//! are compile time parameters, so coefficients and history live inline and
//! `update` never allocates.
//!
//! Assume initial state of 0's. Coefficients default to 0's as well, so an
//! unconfigured filter outputs zeros.

use crate::filter::FilterError;
use crate::util::math::{
    advance_array, copy_array, divide_array_elements, dot_product,
};
use log::{debug, warn};
use num_traits::Num;
use std::ops::Neg;

/// A fixed length FIR/IIR filter.
///
/// Index 0 of every history buffer holds the newest value, index `N - 1` the
/// oldest one.  Each call to `update` evaluates
///
/// ```text
/// y[n] = sum_{k=0}^{N-1} a[k] * x[n-k] + sum_{k=1}^{N-1} b[k] * y[n-k]
/// ```
///
/// where `a` is the numerator and `b` the denominator.  `b[0]` never takes
/// part in the sum: the output history is shifted, and its newest slot
/// zeroed, before the feedback dot product is taken.
///
/// # Examples
///
/// ```
/// use filter_rs::filter::lti::Filter;
///
/// let mut moving_average: Filter<f32, 5> = Filter::new();
/// moving_average.set_coefficients(
///     &[0.2, 0.2, 0.2, 0.2, 0.2],
///     &[1.0, 0.0, 0.0, 0.0, 0.0],
/// );
///
/// let output: Vec<f32> = [1.0, 2.0, 3.0]
///     .iter()
///     .map(|&x| moving_average.update(x))
///     .collect();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Filter<T, const N: usize> {
    numerator: [T; N],
    denominator: [T; N],
    input: [T; N],
    output: [T; N],
}

impl<T, const N: usize> Default for Filter<T, N>
where
    T: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Filter<T, N>
where
    T: Num + Copy,
{
    /// Creates a new `Filter` with zeroed coefficients and history.
    pub fn new() -> Self {
        Filter {
            numerator: [T::zero(); N],
            denominator: [T::zero(); N],
            input: [T::zero(); N],
            output: [T::zero(); N],
        }
    }

    /// Creates a new `Filter` with difference equation coefficients already
    /// loaded.  See `set_coefficients`.
    pub fn with_coefficients(
        numerator: &[T; N],
        denominator: &[T; N],
    ) -> Self {
        let mut filter = Self::new();
        filter.set_coefficients(numerator, denominator);
        filter
    }

    /// Creates an `N` tap moving average, every input weighted by `1 / N`.
    ///
    /// Intended for fractional sample types, integer types truncate the
    /// weights to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use filter_rs::filter::lti::Filter;
    ///
    /// let mut filter: Filter<f64, 4> = Filter::moving_average();
    /// for _ in 0..4 {
    ///     filter.update(2.0);
    /// }
    /// assert!((filter.update(2.0) - 2.0).abs() < 1e-12);
    /// ```
    pub fn moving_average() -> Self {
        if N == 0 {
            return Self::new();
        }
        let len = (0..N).fold(T::zero(), |acc, _| acc + T::one());
        let mut denominator = [T::zero(); N];
        denominator[0] = T::one();
        Self::with_coefficients(&[T::one() / len; N], &denominator)
    }

    /// Copies the provided coefficients of the difference equation.
    ///
    /// No normalization is done: the coefficients must already be in the
    /// time domain form where feedback terms are added.  History is kept,
    /// new coefficients take effect on the next `update`.
    ///
    /// # Arguments
    ///
    /// * `numerator` - Input weights `a[k]`, index 0 weights the newest input.
    /// * `denominator` - Output weights `b[k]`.  `b[0]` is ignored.
    pub fn set_coefficients(
        &mut self,
        numerator: &[T; N],
        denominator: &[T; N],
    ) {
        copy_array(&mut self.numerator, numerator);
        copy_array(&mut self.denominator, denominator);
        debug!("loaded {} difference equation coefficient pairs", N);
    }

    /// Evaluates the difference equation for a new input sample.
    ///
    /// # Arguments
    ///
    /// * `new_sample` - Newest filter input.
    ///
    /// Returns the newest filter output, which is also stored as the newest
    /// entry of the output history.
    pub fn update(&mut self, new_sample: T) -> T {
        // Next time instant
        advance_array(&mut self.input);
        advance_array(&mut self.output);

        if N == 0 {
            return T::zero();
        }
        self.input[0] = new_sample;

        let response = dot_product(&self.numerator, &self.input)
            + dot_product(&self.denominator, &self.output);
        self.output[0] = response;
        response
    }

    /// Runs a batch of samples through the filter, returning one output per
    /// input.
    pub fn batch_update(&mut self, input: &[T]) -> Vec<T> {
        input.iter().map(|&x| self.update(x)).collect()
    }

    /// Filters `samples` in place.
    pub fn process_block(&mut self, samples: &mut [T]) {
        for sample in samples.iter_mut() {
            *sample = self.update(*sample);
        }
    }

    /// Overwrites the input and output history, leaving coefficients as
    /// they are.  Used to resume a filter that was running elsewhere.
    ///
    /// # Arguments
    ///
    /// * `input_state` - Input history `x[n] ... x[n-N+1]`, newest first.
    /// * `output_state` - Output history `y[n] ... y[n-N+1]`, newest first.
    pub fn set_state(&mut self, input_state: &[T; N], output_state: &[T; N]) {
        copy_array(&mut self.input, input_state);
        copy_array(&mut self.output, output_state);
    }

    /// Zeroes the input and output history.
    pub fn clear_state(&mut self) {
        self.input = [T::zero(); N];
        self.output = [T::zero(); N];
    }

    pub fn numerator(&self) -> &[T; N] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[T; N] {
        &self.denominator
    }

    pub fn input_state(&self) -> &[T; N] {
        &self.input
    }

    pub fn output_state(&self) -> &[T; N] {
        &self.output
    }

    /// Filter length `N`.
    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T, const N: usize> Filter<T, N>
where
    T: Num + Copy + Neg<Output = T>,
{
    /// Creates a new `Filter` from a z-transform.  See
    /// `set_coefficients_from_z_transform`.
    pub fn from_z_transform(
        numerator: &[T; N],
        denominator: &[T; N],
    ) -> Result<Self, FilterError> {
        let mut filter = Self::new();
        filter.set_coefficients_from_z_transform(numerator, denominator)?;
        Ok(filter)
    }

    /// Computes the difference equation coefficients of the transfer
    /// function `sum(a[k] * z^k) / sum(b[k] * z^k)`.
    ///
    /// Both polynomials are divided by `b[0]` and `b[1..]` is negated so the
    /// feedback terms can be added by `update`.  After loading, `b[0]` is 1.
    ///
    /// # Arguments
    ///
    /// * `numerator` - Z-transform numerator `a[k]`.
    /// * `denominator` - Z-transform denominator `b[k]`, `b[0]` must not be 0.
    ///
    /// On error the filter is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use filter_rs::filter::lti::Filter;
    /// use filter_rs::filter::FilterError;
    ///
    /// let mut filter: Filter<f64, 2> = Filter::new();
    /// filter
    ///     .set_coefficients_from_z_transform(&[1.0, 0.0], &[2.0, -1.0])
    ///     .unwrap();
    /// assert_eq!(filter.numerator(), &[0.5, 0.0]);
    /// assert_eq!(filter.denominator(), &[1.0, 0.5]);
    ///
    /// let err = filter
    ///     .set_coefficients_from_z_transform(&[1.0, 0.0], &[0.0, 1.0]);
    /// assert_eq!(err, Err(FilterError::DegenerateDenominator));
    /// ```
    pub fn set_coefficients_from_z_transform(
        &mut self,
        numerator: &[T; N],
        denominator: &[T; N],
    ) -> Result<(), FilterError> {
        let b0 = match denominator.first() {
            Some(b0) if !b0.is_zero() => *b0,
            _ => {
                warn!("rejected z-transform with a zero leading denominator");
                return Err(FilterError::DegenerateDenominator);
            }
        };

        let mut numerator = *numerator;
        let mut denominator = *denominator;
        divide_array_elements(&mut numerator, b0)?;
        divide_array_elements(&mut denominator, b0)?;

        // Feedback moves to the right hand side of the difference equation
        for b in denominator.iter_mut().skip(1) {
            *b = -*b;
        }

        self.set_coefficients(&numerator, &denominator);
        Ok(())
    }
}

impl<T> Filter<T, 2>
where
    T: Num + Copy,
{
    /// Creates an exponentially weighted moving average,
    /// `y[n] = lambda * x[n] + (1 - lambda) * y[n-1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filter_rs::filter::lti::Filter;
    ///
    /// let mut ewma = Filter::exponential_moving_average(0.5_f32);
    /// assert_eq!(ewma.update(4.0), 2.0);
    /// assert_eq!(ewma.update(4.0), 3.0);
    /// ```
    pub fn exponential_moving_average(lambda: T) -> Self {
        Self::with_coefficients(
            &[lambda, T::zero()],
            &[T::one(), T::one() - lambda],
        )
    }
}
