use crate::{Coroutine, step::Step};

/// Coroutine driven by a closure that decides, per input, whether to yield or complete.
pub struct FromFn<F>(F);

/// Create a coroutine from a closure returning a [`Step`].
///
/// This is the general way to write a generator body: keep the body's state in
/// the closure's captures and return `Step::Yielded` at each suspension point.
///
/// ```rust
/// use decor::prelude::*;
///
/// let mut total = 0;
/// let mut sum = from_fn(move |sent: Sent<i32>| match sent {
///     Sent::Nothing => Step::Complete(total),
///     sent => {
///         total += sent.values().iter().sum::<i32>();
///         Step::Yielded(total)
///     }
/// });
/// assert_eq!(sum.resume(Sent::One(2)).unwrap_yielded(), 2);
/// assert_eq!(sum.resume(Sent::Many(vec![2, 3])).unwrap_yielded(), 7);
/// assert_eq!(sum.resume(Sent::Nothing).unwrap_complete(), 7);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<I, O, D, F> Coroutine<I, O> for FromFn<F>
where
    F: FnMut(I) -> Step<O, D>,
{
    type Return = D;

    fn resume(&mut self, input: I) -> Step<O, D> {
        (self.0)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sent;

    #[test]
    fn test_state_lives_in_the_closure() {
        let mut lines = Vec::new();
        let mut collect = from_fn(move |sent: Sent<&'static str>| match sent.into_one() {
            Some(line) => {
                lines.push(line);
                Step::Yielded(lines.len())
            }
            None => Step::Complete(lines.join("\n")),
        });

        assert_eq!(collect.resume(Sent::One("a")).unwrap_yielded(), 1);
        assert_eq!(collect.resume(Sent::One("b")).unwrap_yielded(), 2);
        assert_eq!(collect.resume(Sent::Nothing).unwrap_complete(), "a\nb");
    }
}
