use std::time::Duration;

use super::LockError;

/// How an acquire call waits for the lock.
///
/// Both the blocking-thread protocol ([`Lockable`](super::Lockable)) and the
/// cooperative one ([`AsyncLockable`](super::AsyncLockable)) dispatch on this;
/// only the way they suspend between attempts differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireStrategy {
    /// One attempt, no waiting.
    Immediate,
    /// Poll until an attempt succeeds.
    Indefinite,
    /// Poll until an attempt succeeds or the duration elapses.
    Within(Duration),
}

impl AcquireStrategy {
    /// Map `(blocking, timeout)` onto a strategy.
    ///
    /// | blocking | timeout      | strategy       |
    /// |----------|--------------|----------------|
    /// | true     | `None`       | `Indefinite`   |
    /// | true     | `Some(0)`    | `Immediate`    |
    /// | true     | `Some(t)`    | `Within(t)`    |
    /// | false    | `None`       | `Immediate`    |
    /// | false    | `Some(_)`    | error          |
    pub fn plan(blocking: bool, timeout: Option<Duration>) -> Result<Self, LockError> {
        match (blocking, timeout) {
            (true, None) => Ok(AcquireStrategy::Indefinite),
            (true, Some(t)) if t.is_zero() => Ok(AcquireStrategy::Immediate),
            (true, Some(t)) => Ok(AcquireStrategy::Within(t)),
            (false, None) => Ok(AcquireStrategy::Immediate),
            (false, Some(_)) => Err(LockError::timeout_without_blocking()),
        }
    }
}

/// Convert a signed timeout in seconds into the `Option<Duration>` the acquire
/// operations take.
///
/// Negative, NaN and infinite values mean "no timeout" and map to `None`.
pub fn timeout_from_secs(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs).ok()
}
