//! Generator functions as plain callables.
//!
//! [`callable_generator`] wraps a function that builds a computation. Calling
//! the wrapper with [`Args`] runs that function with the named arguments it
//! declares, advances the computation to its first suspension point, and hands
//! back a [`Driver`] that moves it forward one step per call.
//!
//! ```rust
//! use decor::prelude::*;
//!
//! // counts up from `start`, adding whatever is sent in
//! let counter = declare(Signature::new(["start"]), |args: Args<i64>| {
//!     let mut total = args.get("start").copied().unwrap_or(0);
//!     init(total, from_fn(move |sent: Sent<i64>| {
//!         total += sent.values().iter().sum::<i64>();
//!         if total > 100 { Step::Complete(()) } else { Step::Yielded(total) }
//!     }))
//! });
//!
//! let counter = callable_generator(counter);
//! let mut driver = counter.call(Args::new().kwarg("start", 10).kwarg("verbose", 1)).unwrap();
//! assert_eq!(driver.send(5), Ok(Resumed::Produced(15)));
//! assert_eq!(driver.resume([20, 30]), Ok(Resumed::Produced(65)));
//! assert_eq!(driver.send(50), Ok(Resumed::Finished));
//! ```

use crate::{
    Args, Callable, Decorated, Signed, Start, decorator,
    driver::{Completion, Driver, Exhaustion, PrimeError, Sent},
    sanitize,
    start::StartReturn,
};

/// What a wrapped generator function returns when called: a primed driver, or
/// the reason its computation never reached a first suspension point.
pub type Primed<G, V, O> = Result<
    Driver<<G as Start<Sent<V>, O>>::Next, V, O>,
    PrimeError<<StartReturn<G, Sent<V>, O> as Completion>::Error>,
>;

/// Wrap a generator function so that calling it yields a primed [`Driver`]
/// whose exhaustion policy is [`Exhaustion::Sentinel`].
pub fn callable_generator<T, V, G, O>(
    target: T,
) -> Decorated<impl Fn(&T, Args<V>) -> Primed<G, V, O>, T>
where
    T: Callable<Args<V>, Output = G> + Signed,
    G: Start<Sent<V>, O>,
    StartReturn<G, Sent<V>, O>: Completion,
{
    callable_generator_with::<T, V, G, O>(target, Exhaustion::default())
}

/// [`callable_generator`] with an explicit exhaustion policy for the drivers it builds.
pub fn callable_generator_with<T, V, G, O>(
    target: T,
    exhaustion: Exhaustion,
) -> Decorated<impl Fn(&T, Args<V>) -> Primed<G, V, O>, T>
where
    T: Callable<Args<V>, Output = G> + Signed,
    G: Start<Sent<V>, O>,
    StartReturn<G, Sent<V>, O>: Completion,
{
    decorator(move |target: &T, args: Args<V>| {
        let computation = sanitize(target).call(args);
        Driver::prime(computation, exhaustion)
    })
    .apply(target)
}
