use std::sync::atomic::{
    AtomicI64,
    Ordering,
};

pub use chrono::{
    DateTime,
    Utc,
};

use crate::errors::*;

// Clocks are injected so that tests can provide consistent timestamp values instead of
// relying on whatever the current time actually is.
pub trait Clockable {
    fn now(&self) -> DateTime<Utc>;

    // None if the current time doesn't fit into an i64 worth of nanoseconds (after 2262)
    fn now_nanos(&self) -> Option<i64> {
        self.now().timestamp_nanos_opt()
    }
}

pub struct UtcClock;

impl UtcClock {
    pub fn new() -> Box<UtcClock> {
        Box::new(UtcClock)
    }
}

impl Clockable for UtcClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// Resource ids are wall-clock nanoseconds at the time of a create or update.  Two calls can land
// in the same nanosecond (or the clock can step backwards), so the generator never hands out an
// id that isn't strictly greater than the last one it issued.
pub struct IdGenerator {
    clock: Box<dyn Clockable + Send + Sync>,
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> IdGenerator {
        IdGenerator::with_clock(UtcClock::new())
    }

    pub fn with_clock(clock: Box<dyn Clockable + Send + Sync>) -> IdGenerator {
        IdGenerator { clock, last: AtomicI64::new(0) }
    }

    pub fn next_id(&self) -> anyhow::Result<i64> {
        let Some(now) = self.clock.now_nanos() else {
            bail!("current time is out of range for a nanosecond timestamp");
        };
        ensure!(now > 0, "clock returned a non-positive timestamp: {now}");

        let next = |last: i64| last.checked_add(1).map(|succ| now.max(succ));
        match self.last.fetch_update(Ordering::SeqCst, Ordering::SeqCst, next) {
            Ok(prev) => next(prev).ok_or(anyhow!("id space exhausted")),
            Err(_) => bail!("id space exhausted"),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new()
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use std::sync::Arc;

    use super::*;

    // Stores nanoseconds since the epoch; clones share the same underlying time so a test can
    // keep a handle while the code under test owns the boxed clock.
    #[derive(Clone)]
    pub struct MockUtcClock {
        now: Arc<AtomicI64>,
    }

    impl MockUtcClock {
        pub fn new(start_nanos: i64) -> Box<MockUtcClock> {
            Box::new(MockUtcClock { now: Arc::new(AtomicI64::new(start_nanos)) })
        }

        pub fn advance(&mut self, nanos: i64) -> i64 {
            let old = self.now.fetch_add(nanos, Ordering::Relaxed);
            old + nanos
        }

        pub fn set(&mut self, nanos: i64) -> i64 {
            self.now.store(nanos, Ordering::Relaxed);
            nanos
        }
    }

    impl Clockable for MockUtcClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp_nanos(self.now.load(Ordering::Relaxed))
        }

        fn now_nanos(&self) -> Option<i64> {
            Some(self.now.load(Ordering::Relaxed))
        }
    }
}
