//! # Non-negative Summation
//!
//! Sums a sequence of numbers, failing on the first strictly negative
//! element. Results are all-or-nothing: either the full sum or an error
//! naming the offending value, never a partial total.
//!
//! # Usage
//!
//! ```rust
//! use tally_common::sum::sum_positive;
//!
//! assert_eq!(sum_positive(&[10, 5, 20]), Ok(35));
//!
//! let err = sum_positive(&[1, -1, 5]).unwrap_err();
//! assert_eq!(err.value, -1);
//! assert_eq!(err.to_string(), "Found a negative number: -1");
//! ```

use std::fmt;
use std::ops::Add;

use tracing::trace;

use crate::error::{NegativeValueError, SumError};

/// A numeric type that can be summed.
///
/// Implemented for every primitive integer and float. Zero and negative
/// zero are not negative; `NaN` is not negative either and propagates
/// through the sum under native float addition.
pub trait Summand: Copy + PartialOrd + Add<Output = Self> + fmt::Display + fmt::Debug {
    /// Additive identity.
    const ZERO: Self;

    /// `true` if the value is strictly less than zero.
    fn below_zero(self) -> bool {
        self < Self::ZERO
    }

    /// Addition that reports overflow as `None`.
    fn try_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_summand_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summand for $t {
                const ZERO: Self = 0;

                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_summand_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summand for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_summand_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_summand_float!(f32, f64);

/// Sum a slice of non-negative numbers.
///
/// Returns `0` for an empty slice. Fails with the first strictly negative
/// element in slice order. Uses native addition, so integer overflow
/// behaves like `+` on `T`; see [`checked_sum_positive`] to detect it.
pub fn sum_positive<T: Summand>(numbers: &[T]) -> Result<T, NegativeValueError<T>> {
    sum_positive_iter(numbers.iter().copied())
}

/// Sum any sequence of non-negative numbers.
///
/// Elements after the first negative one are never pulled from the
/// iterator.
pub fn sum_positive_iter<T, I>(numbers: I) -> Result<T, NegativeValueError<T>>
where
    T: Summand,
    I: IntoIterator<Item = T>,
{
    let mut total = T::ZERO;
    for number in numbers {
        if number.below_zero() {
            trace!(value = %number, "negative value aborts summation");
            return Err(NegativeValueError::new(number));
        }
        total = total + number;
    }
    Ok(total)
}

/// Sum a slice of non-negative numbers, reporting overflow.
///
/// Each element is checked for sign before it is added, so a negative
/// value is reported even if the running total would also overflow at
/// that position.
///
/// # Errors
///
/// - [`SumError::Negative`] for the first strictly negative element
/// - [`SumError::Overflow`] when an addition overflows `T`
pub fn checked_sum_positive<T: Summand>(numbers: &[T]) -> Result<T, SumError<T>> {
    let mut total = T::ZERO;
    for (index, &number) in numbers.iter().enumerate() {
        if number.below_zero() {
            trace!(value = %number, index, "negative value aborts checked summation");
            return Err(NegativeValueError::new(number).into());
        }
        total = match total.try_add(number) {
            Some(next) => next,
            None => {
                trace!(index, "overflow aborts checked summation");
                return Err(SumError::Overflow { index });
            }
        };
    }
    Ok(total)
}
