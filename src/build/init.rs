//! Builders for computations that have not been started yet.

use super::func::{FromFn, from_fn};
use crate::{Coroutine, Start, Step, start::StartReturn};

/// Pair the value produced at the first suspension point with the coroutine
/// that continues from there.
pub fn init<I, O, S>(output: O, continuation: S) -> (O, S)
where
    S: Coroutine<I, O>,
{
    (output, continuation)
}

/// Yield `initial` first, then hand every input to `f`.
///
/// ```rust
/// use decor::prelude::*;
///
/// let mut seen = Vec::new();
/// let (first, mut rest) = init_from_fn("ready", move |word: &'static str| {
///     seen.push(word);
///     if seen.len() < 2 { Step::Yielded(word) } else { Step::Complete(seen.clone()) }
/// })
/// .start()
/// .unwrap_yielded();
///
/// assert_eq!(first, "ready");
/// assert_eq!(rest.resume("a").unwrap_yielded(), "a");
/// assert_eq!(rest.resume("b").unwrap_complete(), vec!["a", "b"]);
/// ```
pub fn init_from_fn<I, O, D, F>(initial: O, f: F) -> (O, FromFn<F>)
where
    F: FnMut(I) -> Step<O, D>,
{
    (initial, from_fn(f))
}

/// A computation whose body only runs once it is started.
pub struct Deferred<F>(F);

/// Postpone building a computation until its first advance.
///
/// The closure plays the part of the code a generator runs before its first
/// suspension point: nothing in it executes until [`Start::start`] is called.
///
/// ```rust
/// use decor::prelude::*;
/// use std::cell::Cell;
///
/// let ran = Cell::new(false);
/// let pending = deferred(|| {
///     ran.set(true);
///     init(0, from_fn(|x: i32| Step::<i32, ()>::Yielded(x)))
/// });
/// assert!(!ran.get());
///
/// let (first, _rest) = pending.start().unwrap_yielded();
/// assert!(ran.get());
/// assert_eq!(first, 0);
/// ```
pub fn deferred<F>(f: F) -> Deferred<F> {
    Deferred(f)
}

impl<I, O, T, F> Start<I, O> for Deferred<F>
where
    F: FnOnce() -> T,
    T: Start<I, O>,
{
    type Next = T::Next;

    fn start(self) -> Step<(O, T::Next), StartReturn<Self, I, O>> {
        (self.0)().start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_from_seed() {
        let mut prev = 1_u128;
        let fib = init(1_u128, from_fn(move |n: u128| {
            let next = prev + n;
            prev = n;
            Step::<u128, ()>::Yielded(next)
        }));

        let (mut cur, mut next) = fib.start().unwrap_yielded();
        let mut seen = vec![cur];
        for _ in 0..8 {
            cur = next.resume(cur).unwrap_yielded();
            seen.push(cur);
        }
        assert_eq!(seen, vec![1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn test_deferred_may_complete_without_suspending() {
        let pending = deferred(|| {
            let start: Step<(u8, FromFn<fn(u8) -> Step<u8, u8>>), u8> = Step::Complete(4);
            start
        });
        assert_eq!(pending.start().unwrap_complete(), 4);
    }
}
