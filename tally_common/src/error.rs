//! Error types for summation.
//!
//! [`NegativeValueError`] is the single failure of the plain summation
//! entry points. [`SumError`] extends it with integer overflow for
//! [`checked_sum_positive`](crate::sum::checked_sum_positive).

use thiserror::Error;

/// A strictly negative value was found in the input.
///
/// Carries the first offending value in iteration order. The displayed
/// message always contains the value and the word "negative".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Found a negative number: {value}")]
pub struct NegativeValueError<T> {
    /// The offending value, exactly as it appeared in the input.
    pub value: T,
}

impl<T> NegativeValueError<T> {
    /// Wrap the offending value.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Consume the error and return the offending value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Errors from checked summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SumError<T> {
    /// A strictly negative value was found.
    #[error("{0}")]
    Negative(NegativeValueError<T>),

    /// Adding the element at `index` overflowed the numeric type.
    #[error("Sum overflowed when adding element at index {index}")]
    Overflow {
        /// Zero-based position of the element whose addition overflowed.
        index: usize,
    },
}

impl<T> From<NegativeValueError<T>> for SumError<T> {
    fn from(err: NegativeValueError<T>) -> Self {
        SumError::Negative(err)
    }
}
