use num_traits::{CheckedAdd, CheckedNeg, CheckedSub, One};

/// Returns `x + y`
/// # Panics
/// - if the result overflows `T`
pub fn add_exact<T: CheckedAdd>(x: T, y: T) -> T {
    x.checked_add(&y).unwrap_or_else(|| panic!("integer overflow"))
}

/// Returns `x - y`
/// # Panics
/// - if the result overflows `T`
pub fn sub_exact<T: CheckedSub>(x: T, y: T) -> T {
    x.checked_sub(&y).unwrap_or_else(|| panic!("integer overflow"))
}

/// Returns `x + 1`
/// # Panics
/// - if `x` is the maximum value of `T`
/// # Example
/// ```
/// use isomorphic::prelude::*;
///
/// assert_eq!(increment_exact(7_i64), 8);
/// assert!(std::panic::catch_unwind(|| increment_exact(i32::MAX)).is_err());
/// ```
pub fn increment_exact<T: CheckedAdd + One>(x: T) -> T {
    add_exact(x, T::one())
}

/// Returns `x - 1`
/// # Panics
/// - if `x` is the minimum value of `T`
pub fn decrement_exact<T: CheckedSub + One>(x: T) -> T {
    sub_exact(x, T::one())
}

/// Returns `-x`
/// # Panics
/// - if `-x` is not representable by `T`, e.g. `i32::MIN`
pub fn negate_exact<T: CheckedNeg>(x: T) -> T {
    x.checked_neg().unwrap_or_else(|| panic!("integer overflow"))
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use super::*;

    #[test]
    fn test_exact_arithmetic() {
        assert_eq!(add_exact(3, 4), 7);
        assert_eq!(sub_exact(3_i64, 4), -1);
        assert_eq!(increment_exact(-1), 0);
        assert_eq!(decrement_exact(1_u8), 0);
        assert_eq!(negate_exact(7), -7);
        assert_eq!(negate_exact(i64::MAX), -i64::MAX);
    }

    #[test]
    fn test_exact_arithmetic_overflow() {
        assert!(catch_unwind(|| increment_exact(i32::MAX)).is_err());
        assert!(catch_unwind(|| decrement_exact(i64::MIN)).is_err());
        assert!(catch_unwind(|| negate_exact(i32::MIN)).is_err());
        assert!(catch_unwind(|| add_exact(i64::MAX, 1)).is_err());
        assert!(catch_unwind(|| sub_exact(0_u32, 1)).is_err());
    }

    #[test]
    #[should_panic(expected = "integer overflow")]
    fn test_increment_exact_panics_with_message() {
        increment_exact(u16::MAX);
    }
}
