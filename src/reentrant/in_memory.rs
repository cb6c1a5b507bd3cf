use std::sync::{Mutex, MutexGuard, PoisonError};

use super::RawLock;

/// In-process exclusive lock backed by `Mutex<bool>`.
///
/// Non-reentrant and non-blocking: `try_acquire` claims the flag if it is
/// clear. Share it (e.g. through an `Arc`) between several
/// [`ReentrantLock`](super::ReentrantLock)s to have them contend.
#[derive(Debug, Default)]
pub struct FlagLock {
    state: Mutex<bool>,
}

impl FlagLock {
    pub fn new() -> Self {
        FlagLock {
            state: Mutex::new(false),
        }
    }

    pub fn is_held(&self) -> bool {
        *self.state()
    }

    // The flag is a plain bool, so a panic elsewhere can't leave it torn.
    fn state(&self) -> MutexGuard<'_, bool> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RawLock for FlagLock {
    fn try_acquire(&self) -> bool {
        let mut held = self.state();
        if *held {
            false
        } else {
            *held = true;
            true
        }
    }

    fn release(&self) {
        *self.state() = false;
    }
}
