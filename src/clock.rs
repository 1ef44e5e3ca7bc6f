use chrono::{DateTime, Utc};

use crate::models::EmailId;

/// Source of "now" and of fresh email ids.
///
/// Everything that creates records takes one of these so tests can pin
/// time and ids.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Mint an id for a record created now. Ids never repeat.
    fn next_id(&mut self) -> EmailId;
}

/// Wall-clock time; ids are epoch milliseconds at creation.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_id: i64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn next_id(&mut self) -> EmailId {
        let millis = Utc::now().timestamp_millis();
        // Two records in the same millisecond must still get distinct ids.
        self.last_id = millis.max(self.last_id + 1);
        self.last_id.to_string()
    }
}

/// Frozen time and sequential ids (`"1001"`, `"1002"`, ...).
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime<Utc>,
    next: u64,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now, next: 1001 }
    }

    pub fn advance(&mut self, by: chrono::Duration) {
        self.now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn next_id(&mut self) -> EmailId {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
