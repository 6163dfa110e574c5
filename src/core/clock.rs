//! Zeitquelle für Scheduler und Timer (injizierbar für Tests).

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Liefert die aktuelle Zeit.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Systemuhr.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manuell gestellte Uhr. Klone teilen sich denselben Zeitpunkt.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Erstellt eine Uhr, die auf `start` steht.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    /// Stellt die Uhr auf einen festen Zeitpunkt.
    pub fn set(&self, at: DateTime<Utc>) {
        self.millis.store(at.timestamp_millis(), Ordering::SeqCst);
    }

    /// Stellt die Uhr um `delta` vor.
    pub fn advance(&self, delta: TimeDelta) {
        self.millis
            .fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.millis.load(Ordering::SeqCst))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(DateTime::<Utc>::UNIX_EPOCH);
        let shared = clock.clone();

        clock.advance(TimeDelta::seconds(90));

        assert_eq!(shared.now().timestamp(), 90);
    }
}
