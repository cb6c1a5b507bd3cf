//! Reentrant lock on top of the polling protocol.

mod in_memory;
mod raw;
#[allow(clippy::module_inception)]
mod reentrant;

pub use in_memory::FlagLock;
pub use raw::{FnRawLock, RawLock};
pub use reentrant::{make_rlock, ReentrantLock};
