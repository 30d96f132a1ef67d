use crate::isomorphism::Isomorphism;

/// A function paired with its inverse.
///
/// Implementors promise that `f.inverse().apply(f.apply(a)) == a` and
/// `f.apply(f.inverse().apply(b)) == b` for every value of the domain.
/// The promise is never checked.
///
/// Composition is provided in terms of `apply` and `inverse` only,
/// so any two implementors compose into an [`Isomorphism`].
pub trait Bijective<A, B>: Clone + Send + Sync + 'static {
    /// Type of the inverse function
    type Inverse: Bijective<B, A>;

    /// Apply the function to the argument
    fn apply(&self, a: A) -> B;

    /// Returns the inverse function
    fn inverse(&self) -> Self::Inverse;

    /// Convert into the generic representation
    fn to_isomorphism(&self) -> Isomorphism<A, B>
    where
        A: 'static,
        B: 'static,
    {
        let forward = self.clone();
        let inverse = self.inverse();
        Isomorphism::of(move |a: A| forward.apply(a), move |b: B| inverse.apply(b))
    }

    /// Borrow the function as a plain closure
    /// # Example
    /// ```
    /// use isomorphic::prelude::*;
    ///
    /// let double = Isomorphism::of(|x: i64| x * 2, |x: i64| x / 2);
    /// let doubled: Vec<_> = vec![1, 2, 3].into_iter().map(double.as_fn()).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn as_fn(&self) -> impl Fn(A) -> B + '_ {
        move |a| self.apply(a)
    }

    /// Returns a composed function that first applies `before` to its input,
    /// and then applies this function to the result.
    /// The inverse applies this inverse first, then the inverse of `before`.
    /// # Example
    /// ```
    /// use isomorphic::prelude::*;
    ///
    /// let serialize = Isomorphism::of(|x: i32| x.to_string(), |s: String| s.parse::<i32>().unwrap());
    /// let negate = Isomorphism::<i32, i32>::negation();
    /// let parse_negated = negate.compose(&serialize.inverse());
    /// assert_eq!(parse_negated.apply("7".to_string()), -7);
    /// assert_eq!(parse_negated.inverse().apply(-7), "7");
    /// ```
    fn compose<A0, F>(&self, before: &F) -> Isomorphism<A0, B>
    where
        F: Bijective<A0, A>,
        A0: 'static,
        A: 'static,
        B: 'static,
    {
        #[cfg(feature = "log")]
        log::trace!(
            "compose isomorphism {} -> {} -> {}",
            std::any::type_name::<A0>(),
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        );

        let (this, this_inverse) = (self.clone(), self.inverse());
        let (before, before_inverse) = (before.clone(), before.inverse());
        Isomorphism::of(
            move |a0: A0| this.apply(before.apply(a0)),
            move |b: B| before_inverse.apply(this_inverse.apply(b)),
        )
    }

    /// Returns a composed function that first applies this function to its input,
    /// and then applies `after` to the result.
    /// `f.and_then(&g)` is equivalent to `g.compose(&f)`.
    fn and_then<C, G>(&self, after: &G) -> Isomorphism<A, C>
    where
        G: Bijective<B, C>,
        A: 'static,
        B: 'static,
        C: 'static,
    {
        <G as Bijective<B, C>>::compose(after, self)
    }

    /// Same as [`Bijective::compose`] with an optional argument
    /// # Failures
    /// - if `before` is absent
    fn try_compose<A0, F>(&self, before: Option<&F>) -> anyhow::Result<Isomorphism<A0, B>>
    where
        F: Bijective<A0, A>,
        A0: 'static,
        A: 'static,
        B: 'static,
    {
        let before = before.ok_or_else(|| anyhow::anyhow!("Function to compose before is absent"))?;
        Ok(self.compose(before))
    }

    /// Same as [`Bijective::and_then`] with an optional argument
    /// # Failures
    /// - if `after` is absent
    fn try_and_then<C, G>(&self, after: Option<&G>) -> anyhow::Result<Isomorphism<A, C>>
    where
        G: Bijective<B, C>,
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let after = after.ok_or_else(|| anyhow::anyhow!("Function to apply after is absent"))?;
        Ok(self.and_then(after))
    }
}
