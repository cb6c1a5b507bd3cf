use std::time::Duration;

use super::{FnRawLock, RawLock};
#[cfg(feature = "async")]
use crate::lock::AsyncLockable;
use crate::lock::{LockConfig, LockError, Lockable, DEFAULT_POLL_INTERVAL};

/// Reentrant lock over a primitive exclusive lock.
///
/// The primitive is claimed on the first acquisition and released on the
/// matching last release; nested acquisitions in between only move a
/// counter. All of [`Lockable`] (and [`AsyncLockable`] with the `async`
/// feature) is available on it.
///
/// Reentrancy is per instance: the instance is the owner. Two owners that
/// should exclude each other each get their own `ReentrantLock` over a shared
/// primitive.
///
/// ```ignore
/// let file_lock = Arc::new(FlagLock::new());
/// let mut lock = ReentrantLock::new(Arc::clone(&file_lock));
///
/// lock.with_lock(|lock| {
///     lock.with_lock(|_| { /* nested */ })
/// })??;
/// ```
#[derive(Debug)]
pub struct ReentrantLock<P> {
    count: usize,
    primitive: P,
    poll_interval: Duration,
}

impl<P: RawLock> ReentrantLock<P> {
    pub fn new(primitive: P) -> Self {
        ReentrantLock {
            count: 0,
            primitive,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Build a lock with the tunables in `config`. A config with a zero poll
    /// interval is rejected.
    pub fn with_config(primitive: P, config: &LockConfig) -> Result<Self, LockError> {
        config.validate()?;
        Ok(Self::new(primitive).with_poll_interval(config.poll_interval()))
    }

    /// Set the delay between failed acquisition attempts.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Take back the primitive. Returns `None` while the lock is held, since
    /// the primitive would still be claimed.
    pub fn into_inner(self) -> Option<P> {
        if self.count > 0 {
            return None;
        }
        Some(self.primitive)
    }
}

impl<P: RawLock> Lockable for ReentrantLock<P> {
    fn locked_count(&self) -> usize {
        self.count
    }

    fn try_acquire_once(&mut self) -> bool {
        if self.count > 0 {
            self.count += 1;
            return true;
        }
        if self.primitive.try_acquire() {
            tracing::debug!("claimed primitive lock");
            self.count = 1;
            return true;
        }
        false
    }

    fn try_release_once(&mut self) {
        self.count -= 1;
        if self.count == 0 {
            self.primitive.release();
            tracing::debug!("released primitive lock");
        }
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[cfg(feature = "async")]
impl<P: RawLock> AsyncLockable for ReentrantLock<P> {}

/// Build a reentrant lock from an injected acquire/release pair.
///
/// `acquire` must not block: it returns `true` when it claimed the
/// underlying lock and `false` when that lock is held elsewhere. `release`
/// is called once, when the outermost acquisition is released.
pub fn make_rlock<A, R>(acquire: A, release: R) -> ReentrantLock<FnRawLock<A, R>>
where
    A: Fn() -> bool,
    R: Fn(),
{
    ReentrantLock::new(FnRawLock::new(acquire, release))
}
