//! Stepping a suspended computation one call at a time.
//!
//! A [`Driver`] owns a coroutine that has already been advanced to its first
//! suspension point. Every call to [`Driver::resume`] injects zero, one or many
//! values at the current suspension point and returns what the computation
//! produces at the next one, or [`Resumed::Finished`] once it has run to the end.

use std::{convert::Infallible, marker::PhantomData};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coroutine, Start, Step};

/// Values injected at a suspension point.
///
/// Built from the argument list of a driver call: no arguments become
/// `Nothing`, a single argument is passed as-is, and two or more travel
/// together as one composite value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sent<V> {
    Nothing,
    One(V),
    Many(Vec<V>),
}

impl<V> Sent<V> {
    /// All injected values, in call order.
    pub fn values(&self) -> &[V] {
        match self {
            Sent::Nothing => &[],
            Sent::One(v) => std::slice::from_ref(v),
            Sent::Many(vs) => vs,
        }
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Sent::Nothing)
    }

    /// The injected value when exactly one was sent.
    pub fn into_one(self) -> Option<V> {
        match self {
            Sent::One(v) => Some(v),
            _ => None,
        }
    }

    /// Unpack exactly two injected values.
    ///
    /// ```rust
    /// use decor::Sent;
    ///
    /// let sent: Sent<&str> = vec!["a", "b"].into();
    /// assert_eq!(sent.into_pair(), Some(("a", "b")));
    /// ```
    pub fn into_pair(self) -> Option<(V, V)> {
        match self {
            Sent::Many(vs) if vs.len() == 2 => {
                let mut vs = vs.into_iter();
                Some((vs.next()?, vs.next()?))
            }
            _ => None,
        }
    }

    pub fn into_vec(self) -> Vec<V> {
        match self {
            Sent::Nothing => Vec::new(),
            Sent::One(v) => vec![v],
            Sent::Many(vs) => vs,
        }
    }
}

impl<V> From<Vec<V>> for Sent<V> {
    fn from(mut values: Vec<V>) -> Self {
        match values.len() {
            0 => Sent::Nothing,
            1 => values.pop().map_or(Sent::Nothing, Sent::One),
            _ => Sent::Many(values),
        }
    }
}

impl<V> FromIterator<V> for Sent<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// How a computation's completion value maps onto success or failure.
///
/// A computation that can fail completes with `Result<T, E>`; one that cannot
/// completes with `()`.
pub trait Completion {
    type Value;
    type Error;

    fn into_result(self) -> Result<Self::Value, Self::Error>;
}

impl Completion for () {
    type Value = ();
    type Error = Infallible;

    fn into_result(self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<T, E> Completion for Result<T, E> {
    type Value = T;
    type Error = E;

    fn into_result(self) -> Result<T, E> {
        self
    }
}

/// What a driver does when called again after its computation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exhaustion {
    /// Keep answering [`Resumed::Finished`].
    #[default]
    Sentinel,
    /// Answer [`Resumed::Finished`] once, then [`DriverError::Exhausted`].
    Fail,
}

/// Answer to one driver call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resumed<O> {
    /// The computation suspended again, producing this value.
    Produced(O),
    /// The computation has run to completion.
    Finished,
}

impl<O> Resumed<O> {
    pub fn is_finished(&self) -> bool {
        matches!(self, Resumed::Finished)
    }

    /// The produced value, or `None` for the finished sentinel.
    pub fn produced(self) -> Option<O> {
        match self {
            Resumed::Produced(o) => Some(o),
            Resumed::Finished => None,
        }
    }

    /// # Panics
    ///
    /// Panics on [`Resumed::Finished`].
    #[track_caller]
    pub fn unwrap_produced(self) -> O {
        match self {
            Resumed::Produced(o) => o,
            Resumed::Finished => panic!("called `Resumed::unwrap_produced()` on `Finished`"),
        }
    }
}

/// Why a computation could not be primed into a [`Driver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimeError<E> {
    #[error("computation finished before its first suspension point")]
    Exhausted,
    #[error("computation failed before its first suspension point: {0}")]
    Failed(E),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError<E> {
    #[error("driver called again after its computation finished")]
    Exhausted,
    #[error("computation failed: {0}")]
    Failed(E),
}

/// Error type of the computation driven by `S`.
pub type FailureOf<S, V, O> = <<S as Coroutine<Sent<V>, O>>::Return as Completion>::Error;

/// Completion value of the computation driven by `S`.
pub type ValueOf<S, V, O> = <<S as Coroutine<Sent<V>, O>>::Return as Completion>::Value;

/// Result of one driver call.
pub type DriveResult<S, V, O> = Result<Resumed<O>, DriverError<FailureOf<S, V, O>>>;

enum State<S, R> {
    Suspended(S),
    Finished { value: Option<R> },
}

/// A suspended computation that advances one step per call.
///
/// ```rust
/// use decor::prelude::*;
///
/// let echo = init(0, from_fn(|sent: Sent<i32>| match sent.values() {
///     [] => Step::Complete(()),
///     values => Step::Yielded(values.iter().sum::<i32>()),
/// }));
///
/// let mut driver = Driver::prime(echo, Exhaustion::Sentinel).unwrap();
/// assert_eq!(driver.send(4), Ok(Resumed::Produced(4)));
/// assert_eq!(driver.resume([1, 2, 3]), Ok(Resumed::Produced(6)));
/// assert_eq!(driver.advance(), Ok(Resumed::Finished));
/// assert_eq!(driver.advance(), Ok(Resumed::Finished));
/// ```
pub struct Driver<S, V, O>
where
    S: Coroutine<Sent<V>, O>,
    S::Return: Completion,
{
    state: State<S, ValueOf<S, V, O>>,
    exhaustion: Exhaustion,
    steps: usize,
    _marker: PhantomData<fn(Sent<V>) -> O>,
}

impl<S, V, O> Driver<S, V, O>
where
    S: Coroutine<Sent<V>, O>,
    S::Return: Completion,
{
    /// Advance `start` to its first suspension point and wrap the suspended
    /// computation.
    ///
    /// The value produced at that first suspension point is discarded. A
    /// computation that never suspends cannot be driven: completing right away
    /// is [`PrimeError::Exhausted`], failing right away is [`PrimeError::Failed`].
    pub fn prime<G>(start: G, exhaustion: Exhaustion) -> Result<Self, PrimeError<FailureOf<S, V, O>>>
    where
        G: Start<Sent<V>, O, Next = S>,
    {
        match start.start() {
            Step::Yielded((_, stage)) => Ok(Self {
                state: State::Suspended(stage),
                exhaustion,
                steps: 0,
                _marker: PhantomData,
            }),
            Step::Complete(ret) => {
                tracing::debug!("computation finished before its first suspension point");
                match ret.into_result() {
                    Ok(_) => Err(PrimeError::Exhausted),
                    Err(error) => Err(PrimeError::Failed(error)),
                }
            }
        }
    }

    /// Resume with the given values: none, one, or several sent as a composite.
    pub fn resume<I>(&mut self, values: I) -> DriveResult<S, V, O>
    where
        I: IntoIterator<Item = V>,
    {
        self.resume_with(values.into_iter().collect())
    }

    /// Resume without injecting a value.
    pub fn advance(&mut self) -> DriveResult<S, V, O> {
        self.resume_with(Sent::Nothing)
    }

    /// Resume, injecting a single value.
    pub fn send(&mut self, value: V) -> DriveResult<S, V, O> {
        self.resume_with(Sent::One(value))
    }

    /// Resume, injecting `values` as one composite value whatever their number.
    pub fn send_many(&mut self, values: Vec<V>) -> DriveResult<S, V, O> {
        self.resume_with(Sent::Many(values))
    }

    pub fn resume_with(&mut self, sent: Sent<V>) -> DriveResult<S, V, O> {
        match &mut self.state {
            State::Suspended(stage) => {
                tracing::trace!(step = self.steps, injected = sent.len(), "resuming computation");
                match stage.resume(sent) {
                    Step::Yielded(output) => {
                        self.steps += 1;
                        Ok(Resumed::Produced(output))
                    }
                    Step::Complete(ret) => match ret.into_result() {
                        Ok(value) => {
                            tracing::debug!(steps = self.steps, "computation finished");
                            self.state = State::Finished { value: Some(value) };
                            Ok(Resumed::Finished)
                        }
                        Err(error) => {
                            tracing::debug!(steps = self.steps, "computation failed");
                            self.state = State::Finished { value: None };
                            Err(DriverError::Failed(error))
                        }
                    },
                }
            }
            State::Finished { .. } => match self.exhaustion {
                Exhaustion::Sentinel => Ok(Resumed::Finished),
                Exhaustion::Fail => Err(DriverError::Exhausted),
            },
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished { .. })
    }

    /// Number of calls that produced a value.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn exhaustion(&self) -> Exhaustion {
        self.exhaustion
    }

    /// The computation's completion value, once it finished successfully.
    pub fn return_value(&self) -> Option<&ValueOf<S, V, O>> {
        match &self.state {
            State::Finished { value, .. } => value.as_ref(),
            State::Suspended(_) => None,
        }
    }

    pub fn into_return(self) -> Option<ValueOf<S, V, O>> {
        match self.state {
            State::Finished { value, .. } => value,
            State::Suspended(_) => None,
        }
    }
}
