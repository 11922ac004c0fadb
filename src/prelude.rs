//! Commonly used imports
//!
//! Use `use decor::prelude::*;` for quick access to the most common types and functions.

// Call values
pub use crate::{Args, Callable, Func, func};

// Decorators
pub use crate::{Decorated, Decorator, decorator};

// Signatures and sanitizing
pub use crate::{Declared, Signature, Signed, declare, sanitize};

// Coroutines
pub use crate::{Coroutine, Start, Step};
pub use crate::build::{deferred, from_fn, init, init_from_fn};

// Generators as callables
pub use crate::{
    Driver, DriverError, Exhaustion, PrimeError, Resumed, Sent, callable_generator,
    callable_generator_with,
};
