//! Invocable values.
//!
//! [`Callable`] is the common shape of everything this crate wraps: plain
//! functions ([`Func`]), functions with a declared signature
//! ([`Declared`](crate::Declared)), and the wrappers built around them.

use std::{rc::Rc, sync::Arc};

/// A value that can be called with arguments of type `A`.
pub trait Callable<A> {
    type Output;

    fn call(&self, args: A) -> Self::Output;
}

/// A plain function or closure used as a [`Callable`].
#[derive(Debug, Clone, Copy)]
pub struct Func<F>(F);

/// Wrap a closure so it can be passed where a [`Callable`] is expected.
///
/// ```rust
/// use decor::{Callable, func};
///
/// let add = func(|(a, b): (i32, i32)| a + b);
/// assert_eq!(add.call((2, 3)), 5);
/// ```
pub fn func<F>(f: F) -> Func<F> {
    Func(f)
}

impl<F> Func<F> {
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<A, R, F> Callable<A> for Func<F>
where
    F: Fn(A) -> R,
{
    type Output = R;

    fn call(&self, args: A) -> R {
        (self.0)(args)
    }
}

impl<A, L, R> Callable<A> for either::Either<L, R>
where
    L: Callable<A>,
    R: Callable<A, Output = L::Output>,
{
    type Output = L::Output;

    fn call(&self, args: A) -> Self::Output {
        match self {
            either::Either::Left(l) => l.call(args),
            either::Either::Right(r) => r.call(args),
        }
    }
}

impl<A, C> Callable<A> for &C
where
    C: Callable<A> + ?Sized,
{
    type Output = C::Output;

    fn call(&self, args: A) -> C::Output {
        (**self).call(args)
    }
}

impl<A, C> Callable<A> for Box<C>
where
    C: Callable<A> + ?Sized,
{
    type Output = C::Output;

    fn call(&self, args: A) -> C::Output {
        (**self).call(args)
    }
}

impl<A, C> Callable<A> for Rc<C>
where
    C: Callable<A> + ?Sized,
{
    type Output = C::Output;

    fn call(&self, args: A) -> C::Output {
        (**self).call(args)
    }
}

impl<A, C> Callable<A> for Arc<C>
where
    C: Callable<A> + ?Sized,
{
    type Output = C::Output;

    fn call(&self, args: A) -> C::Output {
        (**self).call(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_objects_are_callable() {
        let callables: Vec<Box<dyn Callable<u32, Output = u32>>> =
            vec![Box::new(func(|x: u32| x + 1)), Box::new(func(|x: u32| x * 3))];
        let results: Vec<u32> = callables.iter().map(|c| c.call(4)).collect();
        assert_eq!(results, vec![5, 12]);
    }

    #[test]
    fn test_shared_pointers_forward() {
        let shared = Arc::new(func(|s: &str| s.len()));
        let local = Rc::new(func(|s: &str| s.to_uppercase()));
        assert_eq!(shared.call("abc"), 3);
        assert_eq!((&*local).call("abc"), "ABC");
    }

    #[test]
    fn test_either_calls_active_side() {
        let double = func(|x: i32| x * 2);
        let negate = func(|x: i32| -x);
        let chosen: either::Either<_, Func<fn(i32) -> i32>> = either::Either::Left(double);
        assert_eq!(chosen.call(4), 8);

        let other: either::Either<Func<fn(i32) -> i32>, _> = either::Either::Right(negate);
        assert_eq!(other.call(4), -4);
    }
}
