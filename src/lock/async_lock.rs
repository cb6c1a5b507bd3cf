use std::future::Future;
use std::time::Duration;

use super::{AcquireStrategy, AsyncLockGuard, LockError, Lockable};

/// Cooperative (task-suspending) form of the [`Lockable`] protocol.
///
/// The decision logic is the same as the blocking form; a failed attempt
/// yields the task for [`poll_interval`](Lockable::poll_interval) via the
/// tokio timer instead of sleeping the thread.
///
/// The per-attempt hooks default to the synchronous ones. A lock backed by
/// real asynchronous I/O overrides
/// [`try_acquire_once_async`](AsyncLockable::try_acquire_once_async) and
/// [`try_release_once_async`](AsyncLockable::try_release_once_async).
///
/// Argument and state faults are reported when `acquire_async` /
/// `release_async` are called, before there is anything to await:
///
/// ```ignore
/// if lock.acquire_async(true, Some(Duration::from_secs(1)))?.await {
///     // ...
///     lock.release_async()?.await;
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait AsyncLockable: Lockable {
    async fn try_acquire_once_async(&mut self) -> bool {
        self.try_acquire_once()
    }

    async fn try_release_once_async(&mut self) {
        self.try_release_once()
    }

    async fn acquire_blocking_async(&mut self) -> bool {
        while !self.try_acquire_once_async().await {
            let interval = self.poll_interval();
            tracing::trace!(?interval, "lock busy, yielding");
            tokio::time::sleep(interval).await;
        }
        true
    }

    /// Race the polling loop against a `timeout` timer. Losing the race is
    /// reported as `false`, the same as any other failed acquisition.
    async fn acquire_within_async(&mut self, timeout: Duration) -> bool {
        match tokio::time::timeout(timeout, self.acquire_blocking_async()).await {
            Ok(acquired) => acquired,
            Err(_) => {
                tracing::debug!(?timeout, "timed out waiting for lock");
                false
            }
        }
    }

    /// Validate the arguments and return the acquisition future.
    ///
    /// Same modes as [`Lockable::acquire`]. Dropping the returned future
    /// cancels the wait without acquiring.
    fn acquire_async(
        &mut self,
        blocking: bool,
        timeout: Option<Duration>,
    ) -> Result<impl Future<Output = bool> + '_, LockError> {
        let strategy = AcquireStrategy::plan(blocking, timeout)?;
        Ok(async move {
            match strategy {
                AcquireStrategy::Immediate => self.try_acquire_once_async().await,
                AcquireStrategy::Indefinite => self.acquire_blocking_async().await,
                AcquireStrategy::Within(timeout) => self.acquire_within_async(timeout).await,
            }
        })
    }

    /// Check the lock is held and return the release future.
    fn release_async(&mut self) -> Result<impl Future<Output = ()> + '_, LockError> {
        if !self.locked() {
            return Err(LockError::not_acquired());
        }
        Ok(self.try_release_once_async())
    }

    /// Wait until acquired and return a guard for the held level.
    async fn scoped_async(&mut self) -> Result<AsyncLockGuard<'_, Self>, LockError> {
        self.acquire_async(true, None)?.await;
        Ok(AsyncLockGuard::new(self))
    }
}
