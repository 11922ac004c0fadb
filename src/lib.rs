//! # Decor: function decoration utilities
//!
//! Three independent tools for wrapping callables:
//!
//! - **[`decorator`]**: write a decorator as one handler taking the wrapped
//!   callable plus the call's arguments, instead of two nested closures.
//! - **[`sanitize`]**: put a wrapper in front of a callable that drops the
//!   named arguments its [`Signature`] does not declare.
//! - **[`callable_generator`]**: turn a function that builds a suspended
//!   computation into a callable handing back a [`Driver`], which advances the
//!   computation one step per call.
//!
//! ## Example
//!
//! ```
//! use decor::prelude::*;
//!
//! // A decorator that sanitizes whatever it wraps.
//! fn culled<C: Callable<Args<i32>> + Signed>(f: &C, args: Args<i32>) -> C::Output {
//!     sanitize(f).call(args)
//! }
//!
//! let foo = declare(Signature::parse("bar").unwrap(), |args: Args<i32>| args.len());
//! let foo = decorator(culled).apply(foo);
//!
//! assert_eq!(foo.call(Args::new().arg(5).kwarg("bar", 1).kwarg("baz", 2)), 2);
//! ```
//!
//! ## Building computations
//!
//! - [`from_fn(f)`](from_fn) - Resume by calling a closure returning a [`Step`]
//! - [`init(value, stage)`](init) - Yield `value` at the first suspension point
//! - [`deferred(f)`](deferred) - Run setup code only when the computation starts

pub mod build;
pub mod prelude;
pub mod start;

mod args;
mod callable;
mod coroutine;
mod decorator;
mod driver;
mod generator;
mod sanitize;
mod signature;
mod step;

pub use args::*;
pub use build::*;
pub use callable::*;
pub use coroutine::*;
pub use decorator::*;
pub use driver::*;
pub use generator::*;
pub use sanitize::*;
pub use signature::*;
pub use start::{Start, StartReturn};
pub use step::*;
