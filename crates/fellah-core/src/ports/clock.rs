use chrono::{DateTime, Utc};

/// Wall clock, injectable so tests can pin timestamps.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
