use std::{fmt, sync::Arc};

use crate::bijective::Bijective;

use super::Isomorphism;

type IntMapping = Arc<dyn Fn(i32) -> i32 + Send + Sync>;

/// An isomorphism specialised for `i32` values
///
/// Composing two `I32Isomorphism`s calls the stored `i32` functions directly
/// instead of going through [`Isomorphism<i32, i32>`].
/// It still implements [`Bijective`], so it composes with any generic isomorphism as well,
/// e.g. `Bijective::compose(&specialised, &generic)`.
#[derive(Clone)]
pub struct I32Isomorphism {
    forward: IntMapping,
    backward: IntMapping,
}

impl I32Isomorphism {
    /// Create an isomorphism from a pair of `i32` functions,
    /// where `forward` is the [`I32Isomorphism::apply_as_i32`] function
    /// and `inverse` is the inverse function
    /// # Example
    /// ```
    /// use isomorphic::prelude::*;
    ///
    /// let increment = I32Isomorphism::of(increment_exact, decrement_exact);
    /// assert_eq!(increment.apply_as_i32(7), 8);
    /// assert_eq!(increment.inverse().apply_as_i32(8), 7);
    /// ```
    pub fn of<F, G>(forward: F, inverse: G) -> Self
    where
        F: Fn(i32) -> i32 + Send + Sync + 'static,
        G: Fn(i32) -> i32 + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            backward: Arc::new(inverse),
        }
    }

    /// Create an isomorphism from a pair of optional `i32` functions
    /// # Failures
    /// - if `forward` is absent
    /// - if `inverse` is absent
    pub fn try_of<F, G>(forward: Option<F>, inverse: Option<G>) -> anyhow::Result<Self>
    where
        F: Fn(i32) -> i32 + Send + Sync + 'static,
        G: Fn(i32) -> i32 + Send + Sync + 'static,
    {
        let forward = forward.ok_or_else(|| anyhow::anyhow!("Forward function is absent"))?;
        let inverse = inverse.ok_or_else(|| anyhow::anyhow!("Inverse function is absent"))?;
        Ok(Self::of(forward, inverse))
    }

    /// Returns an isomorphism that always returns its input argument
    pub fn identity() -> Self {
        Self::of(|x| x, |x| x)
    }

    /// Apply the function to an `i32` argument
    #[inline]
    pub fn apply_as_i32(&self, value: i32) -> i32 {
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

    /// Same as [`I32Isomorphism::compose`] with an optional argument
    /// # Failures
    /// - if `before` is absent
    pub fn try_compose(&self, before: Option<&Self>) -> anyhow::Result<Self> {
        let before = before.ok_or_else(|| anyhow::anyhow!("Function to compose before is absent"))?;
        Ok(self.compose(before))
    }

    /// Same as [`I32Isomorphism::and_then`] with an optional argument
    /// # Failures
    /// - if `after` is absent
    pub fn try_and_then(&self, after: Option<&Self>) -> anyhow::Result<Self> {
        let after = after.ok_or_else(|| anyhow::anyhow!("Function to apply after is absent"))?;
        Ok(self.and_then(after))
    }
}

impl Bijective<i32, i32> for I32Isomorphism {
    type Inverse = I32Isomorphism;

    fn apply(&self, a: i32) -> i32 {
        self.apply_as_i32(a)
    }

    fn inverse(&self) -> Self {
        Self {
            forward: Arc::clone(&self.backward),
            backward: Arc::clone(&self.forward),
        }
    }
}

impl fmt::Debug for I32Isomorphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I32Isomorphism").finish_non_exhaustive()
    }
}

impl From<I32Isomorphism> for Isomorphism<i32, i32> {
    fn from(value: I32Isomorphism) -> Self {
        let I32Isomorphism { forward, backward } = value;
        Isomorphism::of(move |x| forward(x), move |y| backward(y))
    }
}

impl From<Isomorphism<i32, i32>> for I32Isomorphism {
    fn from(value: Isomorphism<i32, i32>) -> Self {
        let inverse = value.inverse();
        Self::of(move |x| value.apply(x), move |y| inverse.apply(y))
    }
}
