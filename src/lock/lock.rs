use std::thread;
use std::time::{Duration, Instant};

use super::{AcquireStrategy, LockError, LockGuard};

/// Delay between failed acquisition attempts unless a lock overrides it.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Polling acquire/release protocol over a primitive lock.
///
/// Implementations supply the three hooks; everything else (blocking modes,
/// timeouts, state checks, scoped acquisition) is provided. Acquisition is a
/// spin-poll: a failed attempt sleeps the calling thread for
/// [`poll_interval`](Lockable::poll_interval) and tries again. There is no
/// wait queue, so waiters are not served in any particular order.
///
/// Hooks take `&mut self`: one instance has one owner at a time. Owners that
/// need to contend share the underlying primitive, not the instance.
pub trait Lockable {
    /// Number of nested acquisitions currently held.
    fn locked_count(&self) -> usize;

    /// Make a single non-blocking acquisition attempt.
    ///
    /// Must be safe to call repeatedly and must leave external state
    /// untouched when it returns `false`.
    fn try_acquire_once(&mut self) -> bool;

    /// Release one level of acquisition. Only called while the lock is held.
    fn try_release_once(&mut self);

    fn poll_interval(&self) -> Duration {
        DEFAULT_POLL_INTERVAL
    }

    fn locked(&self) -> bool {
        self.locked_count() > 0
    }

    /// Acquire the lock.
    ///
    /// - `blocking = true, timeout = None`: poll until acquired, returns `Ok(true)`.
    /// - `blocking = true, timeout = Some(0)`: one attempt.
    /// - `blocking = true, timeout = Some(t)`: poll until acquired or `t` elapses;
    ///   running out of time returns `Ok(false)`.
    /// - `blocking = false, timeout = None`: one attempt.
    /// - `blocking = false, timeout = Some(_)`: `LockError::InvalidArgument`,
    ///   without touching the primitive.
    fn acquire(&mut self, blocking: bool, timeout: Option<Duration>) -> Result<bool, LockError> {
        Ok(match AcquireStrategy::plan(blocking, timeout)? {
            AcquireStrategy::Immediate => self.try_acquire_once(),
            AcquireStrategy::Indefinite => self.acquire_blocking(),
            AcquireStrategy::Within(timeout) => self.acquire_within(timeout),
        })
    }

    fn acquire_blocking(&mut self) -> bool {
        while !self.try_acquire_once() {
            let interval = self.poll_interval();
            tracing::trace!(?interval, "lock busy, polling");
            thread::sleep(interval);
        }
        true
    }

    /// Poll until acquired or `timeout` has passed. An attempt that lands
    /// exactly on the deadline still counts.
    fn acquire_within(&mut self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.acquire_blocking();
        };
        while Instant::now() <= deadline {
            if self.try_acquire_once() {
                return true;
            }
            let interval = self.poll_interval();
            tracing::trace!(?interval, "lock busy, polling");
            thread::sleep(interval);
        }
        tracing::debug!(?timeout, "timed out waiting for lock");
        false
    }

    /// Release one level of acquisition.
    fn release(&mut self) -> Result<(), LockError> {
        if !self.locked() {
            return Err(LockError::not_acquired());
        }
        self.try_release_once();
        Ok(())
    }

    /// Block until acquired and return a guard that releases on drop.
    fn scoped(&mut self) -> Result<LockGuard<'_, Self>, LockError> {
        self.acquire(true, None)?;
        Ok(LockGuard::new(self))
    }

    /// Run `f` while holding the lock. The lock is released when `f` returns
    /// or unwinds.
    fn with_lock<T, F>(&mut self, f: F) -> Result<T, LockError>
    where
        F: FnOnce(&mut Self) -> T,
    {
        let mut guard = self.scoped()?;
        Ok(f(&mut guard))
    }
}
