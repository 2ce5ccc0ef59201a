//! Ordering predicates with tolerance
//!
//! The tolerance always works in the caller's favour: it widens the
//! inclusive comparisons and narrows the strict ones.
//!
//! | Predicate | Holds when |
//! |---|---|
//! | [`greater_than_with_error`] | `actual - epsilon > bound` |
//! | [`greater_than_or_equal_with_error`] | `actual + epsilon >= bound` |
//! | [`less_than_with_error`] | `actual + epsilon < bound` |
//! | [`less_than_or_equal_with_error`] | `actual - epsilon <= bound` |
//!
//! The comparisons are evaluated on the gap between the two operands, never
//! on `actual ± epsilon`, so integer operands at the ends of their range
//! cannot overflow.

use std::cmp::Ordering;

/// A number the tolerance checks can compare.
///
/// Implemented for every primitive integer and float type.
pub trait Magnitude: Copy + PartialOrd {
    /// Compares `self - lower` with `epsilon`, where `self >= lower`.
    ///
    /// A gap too wide for `Self` compares as greater. `None` when either
    /// side is NaN.
    fn compare_gap(self, lower: Self, epsilon: Self) -> Option<Ordering>;
}

macro_rules! impl_magnitude_int {
    ($($t:ty),*) => {
        $(
            impl Magnitude for $t {
                #[inline]
                fn compare_gap(self, lower: Self, epsilon: Self) -> Option<Ordering> {
                    match self.checked_sub(lower) {
                        Some(gap) => gap.partial_cmp(&epsilon),
                        None => Some(Ordering::Greater),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_magnitude_float {
    ($($t:ty),*) => {
        $(
            impl Magnitude for $t {
                #[inline]
                fn compare_gap(self, lower: Self, epsilon: Self) -> Option<Ordering> {
                    (self - lower).partial_cmp(&epsilon)
                }
            }
        )*
    };
}

impl_magnitude_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_magnitude_float!(f32, f64);

/// True iff `upper - lower <= epsilon`, for `upper >= lower`.
#[inline]
pub(crate) fn gap_within<T: Magnitude>(upper: T, lower: T, epsilon: T) -> bool {
    matches!(
        upper.compare_gap(lower, epsilon),
        Some(Ordering::Less | Ordering::Equal)
    )
}

/// True iff `upper - lower > epsilon`, for `upper >= lower`.
#[inline]
fn gap_exceeds<T: Magnitude>(upper: T, lower: T, epsilon: T) -> bool {
    matches!(upper.compare_gap(lower, epsilon), Some(Ordering::Greater))
}

/// True iff `actual - epsilon > bound`.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::ordering::greater_than_with_error;
///
/// assert!(greater_than_with_error(2.0, 1.0, 0.5));
/// assert!(!greater_than_with_error(1.25, 1.0, 0.5));
/// assert!(!greater_than_with_error(0u32, 0u32, 1u32));
/// ```
#[inline]
pub fn greater_than_with_error<T: Magnitude>(actual: T, bound: T, epsilon: T) -> bool {
    actual > bound && gap_exceeds(actual, bound, epsilon)
}

/// True iff `actual + epsilon >= bound`.
#[inline]
pub fn greater_than_or_equal_with_error<T: Magnitude>(actual: T, bound: T, epsilon: T) -> bool {
    if actual >= bound {
        true
    } else {
        bound > actual && gap_within(bound, actual, epsilon)
    }
}

/// True iff `actual + epsilon < bound`.
#[inline]
pub fn less_than_with_error<T: Magnitude>(actual: T, bound: T, epsilon: T) -> bool {
    bound > actual && gap_exceeds(bound, actual, epsilon)
}

/// True iff `actual - epsilon <= bound`.
#[inline]
pub fn less_than_or_equal_with_error<T: Magnitude>(actual: T, bound: T, epsilon: T) -> bool {
    if actual <= bound {
        true
    } else {
        actual > bound && gap_within(actual, bound, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_than_with_error() {
        assert!(greater_than_with_error(2.0, 1.0, 0.5));
        assert!(!greater_than_with_error(1.5, 1.0, 0.5));
        assert!(greater_than_with_error(2.0, 1.0, 0.0));
        assert!(!greater_than_with_error(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_greater_than_or_equal_with_error() {
        assert!(greater_than_or_equal_with_error(0.5, 1.0, 0.5));
        assert!(!greater_than_or_equal_with_error(0.25, 1.0, 0.5));
        assert!(greater_than_or_equal_with_error(1, 1, 0));
    }

    #[test]
    fn test_less_than_with_error() {
        assert!(less_than_with_error(0.25, 1.0, 0.5));
        assert!(!less_than_with_error(0.5, 1.0, 0.5));
        assert!(less_than_with_error(1.0f32, 2.0f32, 0.0f32));
    }

    #[test]
    fn test_less_than_or_equal_with_error() {
        assert!(less_than_or_equal_with_error(1.5, 1.0, 0.5));
        assert!(!less_than_or_equal_with_error(1.75, 1.0, 0.5));
        assert!(less_than_or_equal_with_error(3i64, 3i64, 0i64));
    }

    #[test]
    fn test_nan_never_holds() {
        assert!(!greater_than_with_error(f64::NAN, 0.0, 0.0));
        assert!(!greater_than_or_equal_with_error(f64::NAN, 0.0, 0.0));
        assert!(!less_than_with_error(f64::NAN, 0.0, 0.0));
        assert!(!less_than_or_equal_with_error(f64::NAN, 0.0, 0.0));
    }

    #[test]
    fn test_unsigned_near_zero() {
        assert!(!greater_than_with_error(0u32, 0u32, 1u32));
        assert!(greater_than_with_error(5u32, 0u32, 1u32));
        assert!(less_than_or_equal_with_error(0u8, 0u8, 1u8));
        assert!(!less_than_or_equal_with_error(3u8, 0u8, 2u8));
        assert!(greater_than_or_equal_with_error(0u64, 1u64, 1u64));
        assert!(!less_than_with_error(0u64, 1u64, 1u64));
    }

    #[test]
    fn test_extreme_operands() {
        assert!(!less_than_with_error(u32::MAX, u32::MAX, u32::MAX));
        assert!(greater_than_or_equal_with_error(u32::MAX, u32::MAX, u32::MAX));
        assert!(greater_than_with_error(i64::MAX, i64::MIN, i64::MAX));
        assert!(!greater_than_or_equal_with_error(i64::MIN, i64::MAX, i64::MAX));
        assert!(less_than_with_error(i8::MIN, i8::MAX, 100));
        assert!(!less_than_or_equal_with_error(i8::MAX, i8::MIN, 127));
        assert!(less_than_or_equal_with_error(i8::MIN, i8::MAX, i8::MAX));
    }

    #[test]
    fn test_gap_wider_than_type_compares_greater() {
        assert_eq!(i8::MAX.compare_gap(i8::MIN, i8::MAX), Some(Ordering::Greater));
        assert_eq!(10u16.compare_gap(4, 6), Some(Ordering::Equal));
        assert_eq!(f64::NAN.compare_gap(0.0, 1.0), None);
    }
}
