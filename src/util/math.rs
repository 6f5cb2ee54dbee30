use crate::util::MathError;
use num_traits::{Num, Zero};

/// Computes the dot product of two sequences.
///
/// Only the overlapping prefix is used, so callers are expected to pass
/// sequences of equal length.
///
/// # Examples
///
/// ```
/// use filter_rs::util::math::dot_product;
///
/// let result = dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
/// assert_eq!(result, 32.0);
/// ```
pub fn dot_product<T>(vec1: &[T], vec2: &[T]) -> T
where
    T: Num + Copy,
{
    vec1.iter()
        .zip(vec2.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Moves every element one index up and zeroes index 0.
///
/// The last element is dropped. An empty slice is left as is.
///
/// # Examples
///
/// ```
/// use filter_rs::util::math::advance_array;
///
/// let mut history = [3, 2, 1];
/// advance_array(&mut history);
/// assert_eq!(history, [0, 3, 2]);
/// ```
pub fn advance_array<T>(array: &mut [T])
where
    T: Zero + Copy,
{
    if array.is_empty() {
        return;
    }
    for i in (1..array.len()).rev() {
        array[i] = array[i - 1];
    }
    array[0] = T::zero();
}

/// Copies the leading elements of `source` into `destination`.
///
/// Copies `min(destination.len(), source.len())` elements, anything past
/// that in `destination` is untouched.
pub fn copy_array<T>(destination: &mut [T], source: &[T])
where
    T: Copy,
{
    for (dst, src) in destination.iter_mut().zip(source.iter()) {
        *dst = *src;
    }
}

/// Divides every element of `array` in place by `divisor`.
///
/// # Arguments
///
/// * `array` - Values to divide.
/// * `divisor` - Must not be zero, in which case `array` is left as is and
///   `MathError::DivideByZero` is returned.
///
/// # Examples
///
/// ```
/// use filter_rs::util::math::divide_array_elements;
///
/// let mut coeffs = [2.0, 4.0, 8.0];
/// divide_array_elements(&mut coeffs, 2.0).unwrap();
/// assert_eq!(coeffs, [1.0, 2.0, 4.0]);
/// assert!(divide_array_elements(&mut coeffs, 0.0).is_err());
/// ```
pub fn divide_array_elements<T>(
    array: &mut [T],
    divisor: T,
) -> Result<(), MathError>
where
    T: Num + Copy,
{
    if divisor.is_zero() {
        return Err(MathError::DivideByZero);
    }
    for x in array.iter_mut() {
        *x = *x / divisor;
    }
    Ok(())
}
