use std::{any::type_name, fmt, sync::Arc};

use crate::bijective::Bijective;

/// Shared, immutable handle to one direction of an isomorphism
type Mapping<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// A function paired with its inverse
/// Cloning, inverting and composing never call the underlying functions
///
/// # Example
/// ```
/// use isomorphic::prelude::*;
///
/// let celsius_to_fahrenheit = Isomorphism::of(
///     |c: f64| c * 9. / 5. + 32.,
///     |f: f64| (f - 32.) * 5. / 9.,
/// );
/// assert_eq!(celsius_to_fahrenheit.apply(100.), 212.);
/// assert_eq!(celsius_to_fahrenheit.inverse().apply(212.), 100.);
/// ```
pub struct Isomorphism<A, B> {
    forward: Mapping<A, B>,
    backward: Mapping<B, A>,
}

impl<A: 'static, B: 'static> Isomorphism<A, B> {
    /// Create an isomorphism from a pair of functions,
    /// where `forward` is the `apply` function and `inverse` is the inverse function
    /// Neither function is called here, and nothing checks that they are inverse to each other
    /// # Example
    /// ```
    /// use isomorphic::prelude::*;
    ///
    /// let serialize = Isomorphism::of(
    ///     |x: i32| x.to_string(),
    ///     |s: String| s.parse::<i32>().unwrap(),
    /// );
    /// assert_eq!(serialize.apply(-8), "-8");
    /// assert_eq!(serialize.inverse().apply("-8".to_string()), -8);
    /// ```
    pub fn of<F, G>(forward: F, inverse: G) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        G: Fn(B) -> A + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            backward: Arc::new(inverse),
        }
    }

    /// Create an isomorphism from a pair of optional functions
    /// # Failures
    /// - if `forward` is absent
    /// - if `inverse` is absent
    pub fn try_of<F, G>(forward: Option<F>, inverse: Option<G>) -> anyhow::Result<Self>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        G: Fn(B) -> A + Send + Sync + 'static,
    {
        let forward = forward.ok_or_else(|| anyhow::anyhow!("Forward function is absent"))?;
        let inverse = inverse.ok_or_else(|| anyhow::anyhow!("Inverse function is absent"))?;
        Ok(Self::of(forward, inverse))
    }
}

impl<A: 'static> Isomorphism<A, A> {
    /// Returns an isomorphism that always returns its input argument
    pub fn identity() -> Self {
        Self::of(|a| a, |a| a)
    }

    /// Chain isomorphisms in iteration order, so the first one is applied first
    /// An empty sequence yields the identity
    /// # Example
    /// ```
    /// use isomorphic::prelude::*;
    ///
    /// let chained = Isomorphism::chain([
    ///     Isomorphism::offset(1_i32),
    ///     Isomorphism::negation(),
    ///     Isomorphism::offset(10),
    /// ]);
    /// assert_eq!(chained.apply(7), 2);
    /// assert_eq!(chained.inverse().apply(2), 7);
    /// ```
    pub fn chain<I>(isomorphisms: I) -> Self
    where
        I: IntoIterator<Item = Isomorphism<A, A>>,
    {
        isomorphisms
            .into_iter()
            .reduce(|acc, next| acc.and_then(&next))
            .unwrap_or_else(Self::identity)
    }
}

impl<A, B> Clone for Isomorphism<A, B> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            backward: Arc::clone(&self.backward),
        }
    }
}

impl<A, B> fmt::Debug for Isomorphism<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Isomorphism")
            .field("from", &type_name::<A>())
            .field("to", &type_name::<B>())
            .finish()
    }
}

impl<A: 'static, B: 'static> Bijective<A, B> for Isomorphism<A, B> {
    type Inverse = Isomorphism<B, A>;

    fn apply(&self, a: A) -> B {
        (self.forward)(a)
    }

    fn inverse(&self) -> Isomorphism<B, A> {
        Isomorphism {
            forward: Arc::clone(&self.backward),
            backward: Arc::clone(&self.forward),
        }
    }

    fn to_isomorphism(&self) -> Isomorphism<A, B> {
        self.clone()
    }
}
