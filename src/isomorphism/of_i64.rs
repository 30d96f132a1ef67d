use std::{fmt, sync::Arc};

use crate::bijective::Bijective;

use super::Isomorphism;

type LongMapping = Arc<dyn Fn(i64) -> i64 + Send + Sync>;

/// An isomorphism specialised for `i64` values
/// Sibling of [`crate::prelude::I32Isomorphism`]; the two only meet through the generic form
#[derive(Clone)]
pub struct I64Isomorphism {
    forward: LongMapping,
    backward: LongMapping,
}

impl I64Isomorphism {
    /// Create an isomorphism from a pair of `i64` functions
    /// # Example
    /// ```
    /// use isomorphic::prelude::*;
    ///
    /// let negate = I64Isomorphism::of(negate_exact, negate_exact);
    /// let increment = I64Isomorphism::of(increment_exact, decrement_exact);
    /// assert_eq!(negate.compose(&increment).apply_as_i64(7), -8);
    /// assert_eq!(negate.and_then(&increment).apply_as_i64(7), -6);
    /// ```
    pub fn of<F, G>(forward: F, inverse: G) -> Self
    where
        F: Fn(i64) -> i64 + Send + Sync + 'static,
        G: Fn(i64) -> i64 + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            backward: Arc::new(inverse),
        }
    }

    /// Create an isomorphism from a pair of optional `i64` functions
    /// # Failures
    /// - if either function is absent
    pub fn try_of<F, G>(forward: Option<F>, inverse: Option<G>) -> anyhow::Result<Self>
    where
        F: Fn(i64) -> i64 + Send + Sync + 'static,
        G: Fn(i64) -> i64 + Send + Sync + 'static,
    {
        let forward = forward.ok_or_else(|| anyhow::anyhow!("Forward function is absent"))?;
        let inverse = inverse.ok_or_else(|| anyhow::anyhow!("Inverse function is absent"))?;
        Ok(Self::of(forward, inverse))
    }

    pub fn identity() -> Self {
        Self::of(|x| x, |x| x)
    }

    #[inline]
    pub fn apply_as_i64(&self, value: i64) -> i64 {
        (self.forward)(value)
    }

    /// Returns a composed function that first applies `before` to its input,
    /// and then applies this function to the result
    pub fn compose(&self, before: &Self) -> Self {
        let (f, f_inverse) = (Arc::clone(&self.forward), Arc::clone(&self.backward));
        let (g, g_inverse) = (Arc::clone(&before.forward), Arc::clone(&before.backward));
        Self::of(move |x| f(g(x)), move |y| g_inverse(f_inverse(y)))
    }

    /// Returns a composed function that first applies this function to its input,
    /// and then applies `after` to the result
    pub fn and_then(&self, after: &Self) -> Self {
        after.compose(self)
    }

    /// # Failures
    /// - if `before` is absent
    pub fn try_compose(&self, before: Option<&Self>) -> anyhow::Result<Self> {
        let before = before.ok_or_else(|| anyhow::anyhow!("Function to compose before is absent"))?;
        Ok(self.compose(before))
    }

    /// # Failures
    /// - if `after` is absent
    pub fn try_and_then(&self, after: Option<&Self>) -> anyhow::Result<Self> {
        let after = after.ok_or_else(|| anyhow::anyhow!("Function to apply after is absent"))?;
        Ok(self.and_then(after))
    }
}

impl Bijective<i64, i64> for I64Isomorphism {
    type Inverse = I64Isomorphism;

    fn apply(&self, a: i64) -> i64 {
        self.apply_as_i64(a)
    }

    fn inverse(&self) -> Self {
        Self {
            forward: Arc::clone(&self.backward),
            backward: Arc::clone(&self.forward),
        }
    }
}

impl fmt::Debug for I64Isomorphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I64Isomorphism").finish_non_exhaustive()
    }
}

impl From<I64Isomorphism> for Isomorphism<i64, i64> {
    fn from(value: I64Isomorphism) -> Self {
        let I64Isomorphism { forward, backward } = value;
        Isomorphism::of(move |x| forward(x), move |y| backward(y))
    }
}

impl From<Isomorphism<i64, i64>> for I64Isomorphism {
    fn from(value: Isomorphism<i64, i64>) -> Self {
        let inverse = value.inverse();
        Self::of(move |x| value.apply(x), move |y| inverse.apply(y))
    }
}
