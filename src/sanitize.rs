//! Dropping named arguments a callable does not declare.
//!
//! Callers such as request routers tend to pass every field they know about as
//! a named argument. A callable that declares only some of them would reject
//! the call; [`sanitize`] puts a wrapper in front of it that forwards the
//! declared names only.

use std::{collections::BTreeSet, sync::Arc};

use either::Either;

use crate::{Args, Callable, Signature, Signed};

/// Result of [`sanitize`]: the target itself when it accepts any named
/// argument, a [`Filtered`] wrapper otherwise.
pub type Sanitized<T> = Either<T, Filtered<T>>;

/// Wrapper that forwards positional arguments as-is and named arguments only
/// when the target declares them.
#[derive(Debug, Clone)]
pub struct Filtered<T> {
    accepts: Arc<BTreeSet<String>>,
    target: T,
}

/// Restrict the named arguments reaching `target` to the ones it declares.
///
/// A target with a keyword catch-all is returned unchanged as `Left(target)`,
/// since every name is acceptable to it.
///
/// ```rust
/// use decor::{Args, Callable, Signature, declare, sanitize};
///
/// let area = declare(Signature::new(["w", "h"]), |args: Args<u32>| {
///     assert!(args.get("unit").is_none());
///     args.get("w").unwrap() * args.get("h").unwrap()
/// });
///
/// let area = sanitize(area);
/// let args = Args::new().kwarg("w", 3).kwarg("h", 4).kwarg("unit", 0);
/// assert_eq!(area.call(args), 12);
/// ```
pub fn sanitize<T>(target: T) -> Sanitized<T>
where
    T: Signed,
{
    let signature = target.signature();
    if signature.has_catch_all() {
        tracing::debug!(%signature, "target takes arbitrary named arguments, leaving it unwrapped");
        return Either::Left(target);
    }

    let accepts = signature.params().iter().cloned().collect();
    Either::Right(Filtered {
        accepts: Arc::new(accepts),
        target,
    })
}

impl<T> Filtered<T> {
    /// Names that pass through to the target.
    pub fn accepted(&self) -> impl Iterator<Item = &str> {
        self.accepts.iter().map(String::as_str)
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}

impl<T: Signed> Signed for Filtered<T> {
    fn signature(&self) -> &Signature {
        self.target.signature()
    }
}

impl<V, T> Callable<Args<V>> for Filtered<T>
where
    T: Callable<Args<V>>,
{
    type Output = T::Output;

    fn call(&self, args: Args<V>) -> T::Output {
        let args = args.retain_named(|name| {
            let keep = self.accepts.contains(name);
            if !keep {
                tracing::trace!(name, "dropping undeclared named argument");
            }
            keep
        });
        self.target.call(args)
    }
}
