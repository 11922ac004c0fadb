//! Computations that have not been started yet.
//!
//! A generator function, when called, hands back a computation that has not run
//! any of its body. [`Start::start`] performs that first advance: it runs the
//! body up to its first suspension point and returns the value produced there
//! together with the suspended [`Coroutine`].

use crate::{Coroutine, Step};

/// Return type of the coroutine a [`Start`] value suspends into.
pub type StartReturn<S, I, O> = <<S as Start<I, O>>::Next as Coroutine<I, O>>::Return;

/// A computation that runs to its first suspension point before taking input.
///
/// ```rust
/// use decor::prelude::*;
///
/// let body = init(10, from_fn(|x: i32| Step::<i32, ()>::Yielded(x + 1)));
/// let (first, mut rest) = body.start().unwrap_yielded();
/// assert_eq!(first, 10);
/// assert_eq!(rest.resume(1).unwrap_yielded(), 2);
/// ```
pub trait Start<I, O> {
    type Next: Coroutine<I, O>;

    /// Run to the first suspension point.
    ///
    /// Returns `Yielded((value, continuation))` if the body suspended, or
    /// `Complete(return)` if it finished without ever suspending.
    #[allow(clippy::type_complexity)]
    fn start(self) -> Step<(O, Self::Next), StartReturn<Self, I, O>>
    where
        Self: Sized;
}

impl<I, O, S> Start<I, O> for (O, S)
where
    S: Coroutine<I, O>,
{
    type Next = S;

    fn start(self) -> Step<(O, S), S::Return> {
        Step::Yielded(self)
    }
}

impl<I, O, S> Start<I, O> for Step<(O, S), S::Return>
where
    S: Coroutine<I, O>,
{
    type Next = S;

    fn start(self) -> Step<(O, S), S::Return> {
        self
    }
}

impl<I, O, L, R> Start<I, O> for either::Either<L, R>
where
    L: Start<I, O>,
    R: Start<I, O>,
    R::Next: Coroutine<I, O, Return = StartReturn<L, I, O>>,
{
    type Next = either::Either<L::Next, R::Next>;

    fn start(self) -> Step<(O, Self::Next), StartReturn<Self, I, O>> {
        match self {
            either::Either::Left(l) => l
                .start()
                .map_yielded(|(o, next)| (o, either::Either::Left(next))),
            either::Either::Right(r) => r
                .start()
                .map_yielded(|(o, next)| (o, either::Either::Right(next))),
        }
    }
}
