use num_traits::{CheckedAdd, CheckedNeg, CheckedSub};

use crate::misc::{add_exact, negate_exact, sub_exact};

use super::{I32Isomorphism, I64Isomorphism, Isomorphism};

impl<T: CheckedNeg + 'static> Isomorphism<T, T> {
    /// Exact negation, its own inverse
    /// Applying it to a value without a representable negation (e.g. `i32::MIN`) panics
    pub fn negation() -> Self {
        Self::of(negate_exact::<T>, negate_exact::<T>)
    }
}

impl<T> Isomorphism<T, T>
where
    T: CheckedAdd + CheckedSub + Copy + Send + Sync + 'static,
{
    /// Exact addition of `delta`, inverted by exact subtraction
    /// # Example
    /// ```
    /// use isomorphic::prelude::*;
    ///
    /// let offset = Isomorphism::offset(10_u8);
    /// assert_eq!(offset.apply(5), 15);
    /// assert_eq!(offset.inverse().apply(15), 5);
    /// ```
    pub fn offset(delta: T) -> Self {
        Self::of(
            move |x| add_exact(x, delta),
            move |x| sub_exact(x, delta),
        )
    }
}

impl I32Isomorphism {
    /// Exact negation on `i32`
    pub fn negation() -> Self {
        Self::of(negate_exact, negate_exact)
    }

    /// Exact addition of `delta` on `i32`
    pub fn offset(delta: i32) -> Self {
        Self::of(
            move |x| add_exact(x, delta),
            move |x| sub_exact(x, delta),
        )
    }
}

impl I64Isomorphism {
    /// Exact negation on `i64`
    pub fn negation() -> Self {
        Self::of(negate_exact, negate_exact)
    }

    /// Exact addition of `delta` on `i64`
    pub fn offset(delta: i64) -> Self {
        Self::of(
            move |x| add_exact(x, delta),
            move |x| sub_exact(x, delta),
        )
    }
}
