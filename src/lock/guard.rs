use std::ops::{Deref, DerefMut};

use super::Lockable;

/// Holds one level of acquisition on a lock and releases it on drop.
///
/// Dereferences to the lock, so nested acquisitions of a reentrant lock can
/// be made through the guard. The guard owns the level it was created at:
/// drop releases only while the lock is still at least that deep, so a level
/// already released by hand is not released twice at the expense of an
/// enclosing scope.
#[must_use = "if unused the lock is released immediately"]
pub struct LockGuard<'a, L: Lockable + ?Sized> {
    lock: &'a mut L,
    depth: usize,
}

impl<'a, L: Lockable + ?Sized> LockGuard<'a, L> {
    pub(crate) fn new(lock: &'a mut L) -> Self {
        let depth = lock.locked_count();
        LockGuard { lock, depth }
    }
}

impl<L: Lockable + ?Sized> Deref for LockGuard<'_, L> {
    type Target = L;

    fn deref(&self) -> &L {
        self.lock
    }
}

impl<L: Lockable + ?Sized> DerefMut for LockGuard<'_, L> {
    fn deref_mut(&mut self) -> &mut L {
        self.lock
    }
}

impl<L: Lockable + ?Sized> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        if self.lock.locked_count() < self.depth {
            return;
        }
        if let Err(err) = self.lock.release() {
            tracing::warn!(%err, "scoped lock release failed");
        }
    }
}

#[cfg(feature = "async")]
pub use self::cooperative::AsyncLockGuard;

#[cfg(feature = "async")]
mod cooperative {
    use std::ops::{Deref, DerefMut};

    use super::super::{AsyncLockable, LockError, Lockable};

    /// Cooperative counterpart of [`LockGuard`](super::LockGuard).
    ///
    /// Call [`release`](AsyncLockGuard::release) to release through the
    /// cooperative hook. A guard dropped before that release completes (early
    /// return, panic, cancelled task, cancelled `release`) releases through
    /// the synchronous hook instead.
    #[must_use = "if unused the lock is released immediately"]
    pub struct AsyncLockGuard<'a, L: AsyncLockable + ?Sized> {
        lock: &'a mut L,
        depth: usize,
    }

    impl<'a, L: AsyncLockable + ?Sized> AsyncLockGuard<'a, L> {
        pub(crate) fn new(lock: &'a mut L) -> Self {
            let depth = lock.locked_count();
            AsyncLockGuard { lock, depth }
        }

        pub async fn release(mut self) -> Result<(), LockError> {
            if self.lock.locked_count() < self.depth {
                return Ok(());
            }
            // Drop checks the depth again, so a release cancelled before the
            // hook lowered it is finished synchronously.
            self.lock.release_async()?.await;
            Ok(())
        }
    }

    impl<L: AsyncLockable + ?Sized> Deref for AsyncLockGuard<'_, L> {
        type Target = L;

        fn deref(&self) -> &L {
            self.lock
        }
    }

    impl<L: AsyncLockable + ?Sized> DerefMut for AsyncLockGuard<'_, L> {
        fn deref_mut(&mut self) -> &mut L {
            self.lock
        }
    }

    impl<L: AsyncLockable + ?Sized> Drop for AsyncLockGuard<'_, L> {
        fn drop(&mut self) {
            if self.lock.locked_count() < self.depth {
                return;
            }
            if let Err(err) = self.lock.release() {
                tracing::warn!(%err, "scoped lock release failed");
            }
        }
    }
}
