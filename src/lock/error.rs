use std::fmt;

/// Error type for lock operations.
///
/// A timed acquisition that runs out of time is not an error; it is reported
/// as `Ok(false)` by the acquire operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    /// The arguments of an acquire call contradict each other
    /// (e.g. a timeout was given in non-blocking mode).
    InvalidArgument(String),
    /// The lock is not in a state that permits the operation
    /// (e.g. releasing a lock that is not held).
    InvalidState(String),
    /// A lock configuration could not be parsed or is out of range.
    Config(String),
}

impl LockError {
    pub(crate) fn timeout_without_blocking() -> Self {
        LockError::InvalidArgument("timeout is not supported in non-blocking mode".into())
    }

    pub(crate) fn not_acquired() -> Self {
        LockError::InvalidState("cannot release un-acquired lock".into())
    }
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            LockError::InvalidState(msg) => write!(f, "invalid lock state: {}", msg),
            LockError::Config(msg) => write!(f, "invalid lock config: {}", msg),
        }
    }
}

impl std::error::Error for LockError {}

impl From<serde_json::Error> for LockError {
    fn from(err: serde_json::Error) -> Self {
        LockError::Config(err.to_string())
    }
}
