//! Building coroutines from closures.

mod func;
mod init;

pub use func::{FromFn, from_fn};
pub use init::{Deferred, deferred, init, init_from_fn};
