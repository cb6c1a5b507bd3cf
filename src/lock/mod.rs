//! Polling lock protocol.
//!
//! [`Lockable`] turns any primitive exposing a non-blocking "try acquire"
//! and an unconditional "release" into a lock with immediate, blocking and
//! timed acquisition. [`AsyncLockable`] provides the same modes for tasks,
//! suspending on the tokio timer instead of sleeping the thread.

#[cfg(feature = "async")]
mod async_lock;
mod config;
mod error;
mod guard;
#[allow(clippy::module_inception)]
mod lock;
mod strategy;

#[cfg(feature = "async")]
pub use async_lock::AsyncLockable;
pub use config::LockConfig;
pub use error::LockError;
#[cfg(feature = "async")]
pub use guard::AsyncLockGuard;
pub use guard::LockGuard;
pub use lock::{Lockable, DEFAULT_POLL_INTERVAL};
pub use strategy::{timeout_from_secs, AcquireStrategy};
