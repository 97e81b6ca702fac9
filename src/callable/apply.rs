//! The [`Callable`] trait: calling a function with a tuple of arguments.

/// A function that can be called with its arguments packed in a tuple.
///
/// `Callable<(A, B)>` abstracts over "something that takes an `A` and a `B`".
/// That makes the arity of a function a type parameter, which
/// [`Composite`](super::Composite) uses to forward whatever arguments its
/// rightmost function takes.
///
/// Every `Fn` taking up to eight arguments implements this trait. A unary
/// function is called with a one-element tuple `(x,)`.
///
/// # Examples
///
/// ```
/// use composer::callable::Callable;
///
/// let add = |x: i32, y: i32| x + y;
/// assert_eq!(add.apply((2, 3)), 5);
///
/// let negate = |x: i32| -x;
/// assert_eq!(negate.apply((4,)), -4);
///
/// let answer = || 42;
/// assert_eq!(answer.apply(()), 42);
/// ```
pub trait Callable<Arguments> {
    /// The type returned by the call.
    type Output;

    /// Calls the function with the given arguments.
    fn apply(&self, arguments: Arguments) -> Self::Output;
}

macro_rules! impl_callable {
    ($($index:literal)*) => {
        paste::paste! {
            impl<Function, Return, $([<Argument $index>]),*> Callable<($([<Argument $index>],)*)>
                for Function
            where
                Function: Fn($([<Argument $index>]),*) -> Return,
            {
                type Output = Return;

                #[inline]
                #[allow(clippy::unused_unit)]
                fn apply(
                    &self,
                    ($([<argument_ $index>],)*): ($([<Argument $index>],)*),
                ) -> Return {
                    self($([<argument_ $index>]),*)
                }
            }
        }
    };
}

impl_callable!();
impl_callable!(1);
impl_callable!(1 2);
impl_callable!(1 2 3);
impl_callable!(1 2 3 4);
impl_callable!(1 2 3 4 5);
impl_callable!(1 2 3 4 5 6);
impl_callable!(1 2 3 4 5 6 7);
impl_callable!(1 2 3 4 5 6 7 8);
