//! Function composition macros.
//!
//! This module provides the macro form of the composer: the composite is
//! an ordinary closure, so it is called with normal call syntax and can be
//! passed anywhere an `Fn` is expected.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`try_compose!`]: Compose `Result`/`Option` returning functions, stopping at the first failure
//! - [`identity`]: The identity function, which `compose!()` expands to
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use composer::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11); // add_one(double(5)) = add_one(10) = 11
//! ```
//!
//! ## Rightmost function with several arguments
//!
//! ```
//! use composer::compose;
//!
//! let area = |width: u32, height: u32| width * height;
//! let describe = |area: u32| format!("{area} m2");
//!
//! let describe_area = compose!(describe, area; width, height);
//! assert_eq!(describe_area(3, 4), "12 m2");
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is defined as:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! # Evaluation and failure
//!
//! Functions run strictly right to left, each exactly once per call. A
//! panic in any of them unwinds straight through the composite, so the
//! functions to its left never run. [`try_compose!`] gives the same
//! short-circuit for `Err` and `None` without converting the error.

mod compose_macro;
mod try_compose_macro;
mod utils;

pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::try_compose;
