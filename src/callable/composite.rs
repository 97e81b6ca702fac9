//! The [`Composite`] type: composition as a value.

use super::Callable;

/// Two functions composed right to left.
///
/// `Composite::new(outer, inner)` applies `inner` to the original arguments
/// and then `outer` to the result. `inner` may take any number of arguments:
/// the composite implements [`Callable`] for exactly the argument tuples
/// `inner` accepts, as long as `outer` accepts `inner`'s output.
///
/// Longer chains nest: `compose(f, g).compose(h)` is `f ∘ g ∘ h`.
///
/// A `Composite` is immutable. Extending it with [`Composite::compose`]
/// consumes it and builds a new value; copies taken beforehand (it is
/// `Copy` whenever both parts are) keep their original behavior.
///
/// # Examples
///
/// ```
/// use composer::callable::{Callable, compose};
///
/// let add = |x: i32, y: i32| x + y;
/// let double = |x: i32| x * 2;
/// let describe = |x: i32| format!("result: {x}");
///
/// let composite = compose(describe, double).compose(add);
/// assert_eq!(composite.apply((2, 3)), "result: 10");
/// ```
///
/// The output of the inner function has to be what the outer one accepts:
///
/// ```compile_fail
/// use composer::callable::{Callable, compose};
///
/// let length = |text: String| text.len();
/// let double = |x: i32| x * 2;
///
/// compose(length, double).apply((1,));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Composite<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> Composite<Outer, Inner> {
    /// Creates the composition `outer ∘ inner`.
    #[inline]
    #[must_use]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }

    /// Appends `next` as the new rightmost function.
    ///
    /// `compose(f, g).compose(h)` behaves as `f(g(h(...)))`, and the
    /// result takes whatever arguments `h` takes.
    ///
    /// # Examples
    ///
    /// ```
    /// use composer::callable::{Callable, compose};
    ///
    /// let add_one = |x: i32| x + 1;
    /// let double = |x: i32| x * 2;
    /// let subtract_three = |x: i32| x - 3;
    ///
    /// let composite = compose(add_one, double).compose(subtract_three);
    /// assert_eq!(composite.apply((10,)), 15);
    /// ```
    #[inline]
    #[must_use]
    pub const fn compose<Next>(self, next: Next) -> Composite<Self, Next> {
        Composite::new(self, next)
    }

    /// Returns the function applied last.
    #[inline]
    pub const fn outer(&self) -> &Outer {
        &self.outer
    }

    /// Returns the function applied first.
    #[inline]
    pub const fn inner(&self) -> &Inner {
        &self.inner
    }

    /// Splits the composite back into `(outer, inner)`.
    #[inline]
    pub fn into_parts(self) -> (Outer, Inner) {
        (self.outer, self.inner)
    }

    /// Turns a composite with a unary rightmost function into a plain closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use composer::callable::compose;
    ///
    /// let add_one = |x: i32| x + 1;
    /// let double = |x: i32| x * 2;
    ///
    /// let values: Vec<i32> = vec![1, 2, 3]
    ///     .into_iter()
    ///     .map(compose(add_one, double).into_fn::<i32>())
    ///     .collect();
    /// assert_eq!(values, vec![3, 5, 7]);
    /// ```
    pub fn into_fn<Argument>(
        self,
    ) -> impl Fn(Argument) -> <Self as Callable<(Argument,)>>::Output
    where
        Self: Callable<(Argument,)>,
    {
        move |argument| self.apply((argument,))
    }
}

impl<Outer, Inner, Arguments> Callable<Arguments> for Composite<Outer, Inner>
where
    Inner: Callable<Arguments>,
    Outer: Callable<(Inner::Output,)>,
{
    type Output = Outer::Output;

    #[inline]
    fn apply(&self, arguments: Arguments) -> Self::Output {
        let intermediate = self.inner.apply(arguments);
        self.outer.apply((intermediate,))
    }
}

/// Composes two functions: `compose(outer, inner)` is `outer ∘ inner`.
///
/// This is the function form of `compose!`. The result is a [`Composite`]
/// value, called through [`Callable::apply`], which keeps
/// the argument list of `inner` in its type.
///
/// # Examples
///
/// ```
/// use composer::callable::{Callable, compose};
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composite = compose(get_length, to_string);
/// assert_eq!(composite.apply((12345,)), 5);
/// ```
#[inline]
#[must_use]
pub const fn compose<Outer, Inner>(outer: Outer, inner: Inner) -> Composite<Outer, Inner> {
    Composite::new(outer, inner)
}

static_assertions::assert_impl_all!(
    Composite<fn(i32) -> i32, fn(i32) -> i32>: Send, Sync, Copy, Callable<(i32,)>
);
static_assertions::assert_impl_all!(
    Composite<fn(u8) -> u16, fn(u8, u8) -> u8>: Callable<(u8, u8)>
);
static_assertions::assert_not_impl_any!(
    Composite<std::rc::Rc<fn(i32) -> i32>, fn(i32) -> i32>: Send, Sync
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_composite_applies_inner_first() {
        let calls = RefCell::new(Vec::new());
        let outer = |x: i32| {
            calls.borrow_mut().push("outer");
            x + 1
        };
        let inner = |x: i32| {
            calls.borrow_mut().push("inner");
            x * 2
        };

        assert_eq!(compose(outer, inner).apply((5,)), 11);
        assert_eq!(*calls.borrow(), vec!["inner", "outer"]);
    }

    #[test]
    fn test_composite_into_parts() {
        let outer: fn(i32) -> i32 = |x| x + 1;
        let inner: fn(i32) -> i32 = |x| x * 2;
        let (returned_outer, returned_inner) = compose(outer, inner).into_parts();
        assert!(std::ptr::fn_addr_eq(returned_outer, outer));
        assert!(std::ptr::fn_addr_eq(returned_inner, inner));
    }

    #[test]
    fn test_copied_composite_is_unaffected_by_extension() {
        let add_one: fn(i32) -> i32 = |x| x + 1;
        let double: fn(i32) -> i32 = |x| x * 2;
        let original = compose(add_one, double);
        let extended = original.compose(add_one);

        assert_eq!(original.apply((3,)), 7);
        assert_eq!(extended.apply((3,)), 9);
    }
}
