//! Monotonic clock - non-decreasing timestamp source for activity writes

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;

/// Wall clock clamped to be non-decreasing across calls.
///
/// Activity timestamps are assigned once at write time and ordered strictly
/// descending on read. The system clock can step backwards (NTP adjustment),
/// which would make newly logged records display out of order; this clock
/// clamps each reading to the last one issued. Concurrent writers can tie on
/// timestamp, which is accepted - pagination breaks ties on record id.
#[derive(Debug)]
pub struct MonotonicClock {
    last_millis: Mutex<i64>,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_millis: Mutex::new(0),
        }
    }

    /// Current time, never earlier than any previously returned value
    pub fn now(&self) -> DateTime<Utc> {
        let wall = Utc::now().timestamp_millis();
        let mut last = self.last_millis.lock();
        let millis = wall.max(*last);
        *last = millis;
        // timestamp_millis round-trips for any in-range value
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
