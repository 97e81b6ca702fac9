//! Typed composition over functions of any arity.
//!
//! `compose!` produces closures, so the composite's parameter list has to
//! be spelled out when the rightmost function takes more than one argument. This module keeps the arity in the type system
//! instead:
//!
//! - [`Callable`]: a function called with a tuple of arguments, implemented
//!   for every `Fn` of up to eight parameters
//! - [`Composite`]: `outer ∘ inner` as a value, callable with whatever
//!   arguments `inner` accepts
//! - [`compose`]: builds a [`Composite`]
//!
//! # Examples
//!
//! ```
//! use composer::callable::{Callable, compose};
//!
//! let subtract = |x: i32, y: i32| x - y;
//! let double = |x: i32| x * 2;
//! let add_one = |x: i32| x + 1;
//!
//! // add_one(double(subtract(10, 3))) = add_one(14) = 15
//! let composite = compose(add_one, double).compose(subtract);
//! assert_eq!(composite.apply((10, 3)), 15);
//! ```
//!
//! # Laws
//!
//! - **Definition**: `compose(f, g).apply(args) == f(g(args...))`
//! - **Associativity**: `compose(f, compose(g, h))` and `compose(compose(f, g), h)`
//!   agree on every input

mod apply;
mod composite;

pub use apply::Callable;
pub use composite::{Composite, compose};
