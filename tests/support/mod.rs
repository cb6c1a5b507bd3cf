//! Shared primitives for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use easylock::RawLock;

/// Exclusive primitive that records how it is driven.
///
/// `refusing(n)` turns down the first `n` attempts regardless of state;
/// `usize::MAX` refuses forever.
#[derive(Debug, Default)]
pub struct CountingLock {
    held: AtomicBool,
    refuse: AtomicUsize,
    attempts: AtomicUsize,
    claims: AtomicUsize,
    releases: AtomicUsize,
}

impl CountingLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing(n: usize) -> Self {
        CountingLock {
            refuse: AtomicUsize::new(n),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn claims(&self) -> usize {
        self.claims.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }
}

impl RawLock for CountingLock {
    fn try_acquire(&self) -> bool {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let refuse = self.refuse.load(Ordering::SeqCst);
        if refuse == usize::MAX {
            return false;
        }
        if refuse > 0 {
            self.refuse.fetch_sub(1, Ordering::SeqCst);
            return false;
        }
        if self.held.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.claims.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
        self.held.store(false, Ordering::SeqCst);
    }
}
