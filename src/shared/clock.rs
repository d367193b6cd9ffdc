//! Time sources for stamping reports and updates.
//!
//! The registry treats time as an opaque monotonic counter read once per
//! operation. Production uses wall-clock seconds; tests pin the value.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Supplies the counter value recorded on reports and update records
pub trait TimeSource: Send + Sync {
    fn now(&self) -> u64;
}

/// Unix seconds, clamped so the value never goes backwards
#[derive(Debug, Default)]
pub struct UnixClock {
    last: AtomicU64,
}

impl UnixClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimeSource for UnixClock {
    fn now(&self) -> u64 {
        let wall = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
        let previous = self.last.fetch_max(wall, Ordering::SeqCst);
        previous.max(wall)
    }
}

/// Counter whose value is set explicitly
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    value: AtomicU64,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            value: AtomicU64::new(start),
        }
    }

    pub fn set(&self, value: u64) {
        self.value.store(value, Ordering::SeqCst);
    }

    pub fn advance(&self, by: u64) -> u64 {
        self.value.fetch_add(by, Ordering::SeqCst) + by
    }
}

#[cfg(test)]
impl TimeSource for ManualClock {
    fn now(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}
