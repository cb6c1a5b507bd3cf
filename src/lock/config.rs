use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{LockError, DEFAULT_POLL_INTERVAL};

/// Tunables for a polling lock.
///
/// ```ignore
/// let config = LockConfig::from_json(r#"{ "poll_interval_ms": 25 }"#)?;
/// let lock = ReentrantLock::with_config(primitive, &config)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LockConfig {
    /// Delay between failed acquisition attempts, in milliseconds.
    pub poll_interval_ms: u64,
}

impl LockConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LockError> {
        let config: LockConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LockError> {
        if self.poll_interval_ms == 0 {
            return Err(LockError::Config("poll_interval_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        LockConfig {
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}
