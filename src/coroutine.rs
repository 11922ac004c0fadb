//! Resumable computations.
//!
//! A [`Coroutine`] is the body of a generator: each call to
//! [`resume`](Coroutine::resume) feeds it the value injected at its current
//! suspension point and runs it until it suspends again or finishes.
//!
//! ```rust
//! use decor::prelude::*;
//!
//! let mut countdown = from_fn(|n: u32| if n == 0 { Step::Complete("done") } else { Step::Yielded(n - 1) });
//! assert_eq!(countdown.resume(3).unwrap_yielded(), 2);
//! assert_eq!(countdown.resume(0).unwrap_complete(), "done");
//! ```

use crate::step::Step;

/// A computation that takes input of type `I` at each suspension point and
/// yields values of type `O` until it completes with [`Return`](Coroutine::Return).
pub trait Coroutine<I, O> {
    /// Value the computation finishes with.
    type Return;

    /// Resume with `input`, running to the next suspension point or to completion.
    fn resume(&mut self, input: I) -> Step<O, Self::Return>;

    fn boxed<'a>(self) -> Box<dyn Coroutine<I, O, Return = Self::Return> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<I, O, L, R> Coroutine<I, O> for either::Either<L, R>
where
    L: Coroutine<I, O>,
    R: Coroutine<I, O, Return = L::Return>,
{
    type Return = L::Return;

    fn resume(&mut self, input: I) -> Step<O, Self::Return> {
        match self {
            either::Either::Left(l) => l.resume(input),
            either::Either::Right(r) => r.resume(input),
        }
    }
}

impl<I, O, D> Coroutine<I, O> for Box<dyn Coroutine<I, O, Return = D> + '_> {
    type Return = D;

    fn resume(&mut self, input: I) -> Step<O, D> {
        (**self).resume(input)
    }
}

impl<I, O, D> Coroutine<I, O> for &'_ mut dyn Coroutine<I, O, Return = D> {
    type Return = D;

    fn resume(&mut self, input: I) -> Step<O, D> {
        (**self).resume(input)
    }
}
