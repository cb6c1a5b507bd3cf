//! Reentrant polling locks over any primitive exclusive lock.
//!
//! Give [`make_rlock`] a non-blocking "try acquire" and a "release" and get
//! back a [`ReentrantLock`] with immediate, blocking and timed acquisition,
//! scoped guards, and (with the `async` feature) the same operations for
//! tokio tasks.
//!
//! ```ignore
//! use easylock::{make_rlock, Lockable};
//! use std::time::Duration;
//!
//! let mut lock = make_rlock(|| try_flock(&file), || unlock(&file));
//! if lock.acquire(true, Some(Duration::from_secs(2)))? {
//!     // ...
//!     lock.release()?;
//! }
//! ```

mod lock;
mod reentrant;

#[cfg(feature = "async")]
pub use lock::{AsyncLockGuard, AsyncLockable};
pub use lock::{
    timeout_from_secs, AcquireStrategy, LockConfig, LockError, LockGuard, Lockable,
    DEFAULT_POLL_INTERVAL,
};
pub use reentrant::{make_rlock, FlagLock, FnRawLock, RawLock, ReentrantLock};
