use std::fmt;
use std::sync::Arc;

/// A primitive, non-reentrant exclusive lock.
///
/// This is the only thing a caller has to provide to get a full
/// [`ReentrantLock`](super::ReentrantLock). Implementations might wrap a file
/// lock, a semaphore, a database advisory lock, a lease in a distributed
/// store, etc.
pub trait RawLock {
    /// Try to claim the lock without blocking.
    /// Returns `true` if claimed, `false` if it is held elsewhere.
    fn try_acquire(&self) -> bool;

    /// Give the lock back.
    fn release(&self);
}

impl<T: RawLock + ?Sized> RawLock for &T {
    fn try_acquire(&self) -> bool {
        (**self).try_acquire()
    }

    fn release(&self) {
        (**self).release()
    }
}

impl<T: RawLock + ?Sized> RawLock for Arc<T> {
    fn try_acquire(&self) -> bool {
        (**self).try_acquire()
    }

    fn release(&self) {
        (**self).release()
    }
}

impl<T: RawLock + ?Sized> RawLock for Box<T> {
    fn try_acquire(&self) -> bool {
        (**self).try_acquire()
    }

    fn release(&self) {
        (**self).release()
    }
}

/// A [`RawLock`] made from an injected acquire/release pair.
pub struct FnRawLock<A, R> {
    acquire: A,
    release: R,
}

impl<A, R> FnRawLock<A, R>
where
    A: Fn() -> bool,
    R: Fn(),
{
    pub fn new(acquire: A, release: R) -> Self {
        FnRawLock { acquire, release }
    }
}

impl<A, R> RawLock for FnRawLock<A, R>
where
    A: Fn() -> bool,
    R: Fn(),
{
    fn try_acquire(&self) -> bool {
        (self.acquire)()
    }

    fn release(&self) {
        (self.release)()
    }
}

impl<A, R> fmt::Debug for FnRawLock<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRawLock").finish_non_exhaustive()
    }
}
