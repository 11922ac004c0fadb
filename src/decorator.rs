//! Writing decorators as plain functions.
//!
//! A decorator usually needs two nested closures: one taking the function to
//! wrap and one taking the call's arguments. [`decorator`] builds both from a
//! single handler that receives the wrapped function as its first argument.
//!
//! ```rust
//! use decor::prelude::*;
//! use std::cell::RefCell;
//!
//! let log = RefCell::new(Vec::new());
//! let traced = decorator(|f: &Func<fn(u32) -> u32>, x: u32| {
//!     log.borrow_mut().push(format!("called with {x}"));
//!     f.call(x)
//! });
//!
//! let square = traced.apply(func((|x: u32| x * x) as fn(u32) -> u32));
//! assert_eq!(square.call(5), 25);
//! assert_eq!(log.borrow().as_slice(), ["called with 5"]);
//! ```

use std::sync::Arc;

use crate::{Callable, Signature, Signed, signature::open_signature};

/// A decorator built from a handler; see [`decorator`].
#[derive(Debug)]
pub struct Decorator<H> {
    handler: Arc<H>,
}

impl<H> Clone for Decorator<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

/// Turn `handler(target, args)` into a decorator.
///
/// The decorator can be applied to any number of targets; they all share the
/// same handler.
pub fn decorator<H>(handler: H) -> Decorator<H> {
    Decorator {
        handler: Arc::new(handler),
    }
}

impl<H> Decorator<H> {
    /// Wrap `target`: calling the result with `args` calls `handler(&target, args)`.
    pub fn apply<T>(&self, target: T) -> Decorated<H, T> {
        Decorated {
            handler: Arc::clone(&self.handler),
            target,
        }
    }
}

/// A target wrapped by a [`Decorator`].
#[derive(Debug)]
pub struct Decorated<H, T> {
    handler: Arc<H>,
    target: T,
}

impl<H, T: Clone> Clone for Decorated<H, T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            target: self.target.clone(),
        }
    }
}

impl<H, T> Decorated<H, T> {
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}

impl<A, R, H, T> Callable<A> for Decorated<H, T>
where
    H: Fn(&T, A) -> R,
{
    type Output = R;

    fn call(&self, args: A) -> R {
        (self.handler)(&self.target, args)
    }
}

/// A decorated callable forwards whatever it is given, so it accepts any
/// named argument regardless of what the target declares.
impl<H, T> Signed for Decorated<H, T> {
    fn signature(&self) -> &Signature {
        open_signature()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Args, Func, declare, func, sanitize};
    use std::cell::Cell;

    type Pair = fn((i32, i32)) -> i32;

    fn forward<C: Callable<Args<i32>>>(f: &C, args: Args<i32>) -> C::Output {
        f.call(args)
    }

    fn add_hundred<C>(_f: &C, x: u8) -> u8 {
        x.wrapping_add(100)
    }

    fn cull<C: Callable<Args<i32>> + Signed>(f: &C, args: Args<i32>) -> C::Output {
        sanitize(f).call(args)
    }

    #[test]
    fn test_handler_sees_target_and_args() {
        let calls = Cell::new(0);
        let add = func((|(a, b): (i32, i32)| a + b) as Pair);
        let wrap = decorator(|f: &Func<Pair>, (a, b): (i32, i32)| {
            calls.set(calls.get() + 1);
            f.call((a, b)) * 10
        });

        let wrapped = wrap.apply(add);
        assert_eq!(wrapped.call((1, 2)), 30);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_target_not_called_unless_handler_calls_it() {
        let target_calls = Cell::new(0);
        let target = func(|x: u8| {
            target_calls.set(target_calls.get() + 1);
            x
        });
        let skip = decorator(add_hundred);

        let wrapped = skip.apply(target);
        assert_eq!(wrapped.call(1), 101);
        assert_eq!(target_calls.get(), 0);

        assert_eq!(wrapped.target().call(7), 7);
        assert_eq!(target_calls.get(), 1);
    }

    #[test]
    fn test_handler_errors_reach_caller_unchanged() {
        let checked = decorator(|f: &Func<fn(i64) -> i64>, x: i64| -> Result<i64, String> {
            if x < 0 {
                return Err(format!("negative input {x}"));
            }
            Ok(f.call(x))
        });
        let halve = checked.apply(func((|x: i64| x / 2) as fn(i64) -> i64));

        assert_eq!(halve.call(8), Ok(4));
        assert_eq!(halve.call(-1), Err("negative input -1".to_string()));
    }

    #[test]
    fn test_one_decorator_many_targets() {
        let negate = decorator(|f: &Func<fn(i32) -> i32>, x: i32| -f.call(x));
        let inc = negate.apply(func((|x: i32| x + 1) as fn(i32) -> i32));
        let dbl = negate.clone().apply(func((|x: i32| x * 2) as fn(i32) -> i32));
        assert_eq!(inc.call(1), -2);
        assert_eq!(dbl.call(3), -6);
    }

    #[test]
    fn test_sanitizing_a_decorated_callable_is_a_no_op() {
        let inner = declare(Signature::new(["x"]), |args: Args<i32>| args.len());
        let wrapped = sanitize(decorator(forward).apply(inner));
        assert!(wrapped.is_left());

        // the wrapper forwards everything, so the target sees `y` too
        assert_eq!(wrapped.call(Args::new().kwarg("x", 1).kwarg("y", 2)), 2);
    }

    #[test]
    fn test_sanitize_inside_a_handler() {
        let inner = declare(Signature::new(["x"]), |args: Args<i32>| args.len());
        let wrapped = decorator(cull).apply(inner);
        assert_eq!(wrapped.call(Args::new().arg(0).kwarg("x", 1).kwarg("y", 2)), 2);
    }
}
