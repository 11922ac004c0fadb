/// Outcome of resuming a coroutine once: it either suspended on a value or ran to completion.
///
/// # Examples
///
/// ```rust
/// use decor::Step;
///
/// let suspended: Step<i32, &str> = Step::Yielded(42);
/// assert_eq!(suspended.map_yielded(|x| x * 2), Step::Yielded(84));
///
/// let done: Step<i32, &str> = Step::Complete("done");
/// assert!(done.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// The computation suspended, handing out a value.
    Yielded(Y),
    /// The computation finished with its completion value.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into the yielded value, discarding a completion value.
    ///
    /// ```rust
    /// use decor::Step;
    ///
    /// assert_eq!(Step::<i32, ()>::Yielded(1).yielded_value(), Some(1));
    /// assert_eq!(Step::<i32, ()>::Complete(()).yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts into the completion value, discarding a yielded value.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Returns the yielded value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    #[inline]
    #[track_caller]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the completion value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    #[track_caller]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_yielded_leaves_complete_alone() {
        let step: Step<u8, &str> = Step::Complete("end");
        assert_eq!(step.map_yielded(|v| v + 1), Step::Complete("end"));
    }

    #[test]
    fn test_map_complete_leaves_yielded_alone() {
        let step: Step<u8, u8> = Step::Yielded(3);
        assert_eq!(step.map_complete(|v| v + 1), Step::Yielded(3));
    }

    #[test]
    #[should_panic(expected = "on a `Complete` value")]
    fn test_unwrap_yielded_panics_on_complete() {
        Step::<u8, ()>::Complete(()).unwrap_yielded();
    }

    #[test]
    #[should_panic(expected = "on a `Yielded` value")]
    fn test_unwrap_complete_panics_on_yielded() {
        Step::<u8, ()>::Yielded(1).unwrap_complete();
    }
}
