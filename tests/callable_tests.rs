//! Unit tests for the Callable trait and Composite.

#![cfg(feature = "callable")]

use composer::callable::{Callable, Composite, compose};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::panic::{AssertUnwindSafe, catch_unwind};

// =============================================================================
// Callable
// =============================================================================

#[rstest]
fn callable_nullary_function() {
    let answer = || 42;
    assert_eq!(answer.apply(()), 42);
}

#[rstest]
fn callable_unary_function() {
    fn square(x: i32) -> i32 {
        x * x
    }
    assert_eq!(square.apply((7,)), 49);
}

#[rstest]
#[case(1, 2, 3)]
#[case(0, 0, 0)]
#[case(-1, 1, 0)]
fn callable_binary_function(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    let add = |x: i32, y: i32| x + y;
    assert_eq!(add.apply((a, b)), expected);
}

#[rstest]
fn callable_accepts_owned_arguments() {
    let join = |left: String, right: String| left + &right;
    assert_eq!(join.apply(("foo".to_string(), "bar".to_string())), "foobar");
}

// =============================================================================
// Composite construction
// =============================================================================

#[rstest]
fn composite_new_matches_compose() {
    let add_one = |x: i32| x + 1;
    let double = |x: i32| x * 2;

    let by_new = Composite::new(add_one, double);
    let by_function = compose(add_one, double);

    assert_eq!(by_new.apply((5,)), by_function.apply((5,)));
    assert_eq!(by_new.apply((5,)), 11);
}

#[rstest]
fn composite_exposes_its_parts() {
    let composite = compose(|x: i32| x + 1, |x: i32| x * 2);

    assert_eq!((composite.outer())(1), 2);
    assert_eq!((composite.inner())(1), 2);
    assert_eq!((composite.outer())(10), 11);
    assert_eq!((composite.inner())(10), 20);
}

#[rstest]
fn composite_concrete_example() {
    let composite = compose(|x: i32| x + 1, |x: i32| x * 2).compose(|x: i32| x - 3);
    assert_eq!(composite.apply((10,)), 15);
}

// =============================================================================
// Rightmost arity
// =============================================================================

#[rstest]
fn composite_keeps_inner_arity() {
    let subtract = |x: i32, y: i32| x - y;
    let negate = |x: i32| -x;

    let composite = compose(negate, subtract);

    assert_eq!(composite.apply((10, 4)), -6);
}

#[rstest]
fn composite_with_nullary_inner() {
    let counter = Cell::new(0);
    let next = || {
        counter.set(counter.get() + 1);
        counter.get()
    };
    let describe = |value: i32| format!("#{value}");

    let composite = compose(describe, next);

    assert_eq!(composite.apply(()), "#1");
    assert_eq!(composite.apply(()), "#2");
}

#[rstest]
fn composite_extension_keeps_new_rightmost_arity() {
    let sum = |x: i32, y: i32, z: i32| x + y + z;
    let double = |x: i32| x * 2;
    let describe = |x: i32| x.to_string();

    let composite = compose(describe, double).compose(sum);

    assert_eq!(composite.apply((1, 2, 3)), "12");
}

// =============================================================================
// Evaluation order and failure
// =============================================================================

#[rstest]
fn composite_evaluates_right_to_left() {
    let calls = RefCell::new(Vec::new());
    let outer = |x: i32| {
        calls.borrow_mut().push(format!("outer({x})"));
        x
    };
    let middle = |x: i32| {
        calls.borrow_mut().push(format!("middle({x})"));
        x + 1
    };
    let inner = |x: i32| {
        calls.borrow_mut().push(format!("inner({x})"));
        x + 1
    };

    let result = compose(outer, middle).compose(inner).apply((0,));

    assert_eq!(result, 2);
    assert_eq!(
        *calls.borrow(),
        vec!["inner(0)".to_string(), "middle(1)".to_string(), "outer(2)".to_string()]
    );
}

#[rstest]
fn composite_panic_propagates() {
    let outer_called = Cell::new(false);
    let outer = |x: i32| {
        outer_called.set(true);
        x
    };
    let failing = |x: i32| -> i32 { panic!("failed on {x}") };

    let composite = compose(outer, failing);
    let result = catch_unwind(AssertUnwindSafe(|| composite.apply((3,))));

    assert!(result.is_err());
    assert!(!outer_called.get());
}

// =============================================================================
// Value semantics
// =============================================================================

#[rstest]
fn composite_copy_is_independent() {
    let add_one: fn(i32) -> i32 = |x| x + 1;
    let double: fn(i32) -> i32 = |x| x * 2;

    let original = compose(add_one, double);
    let copy = original;
    let extended = copy.compose(double);

    assert_eq!(original.apply((1,)), 3);
    assert_eq!(extended.apply((1,)), 5);
}

#[rstest]
fn composite_into_fn_in_iterator() {
    let values: Vec<String> = vec![1, 2, 3]
        .into_iter()
        .map(compose(|x: i32| x.to_string(), |x: i32| x * 10).into_fn::<i32>())
        .collect();

    assert_eq!(values, vec!["10", "20", "30"]);
}
