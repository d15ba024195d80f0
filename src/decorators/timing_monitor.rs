//! `TimingMonitor<C>`: detects duration-budget overruns and missed periods.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::action::Action;
use crate::clock::Clock;
use crate::error::ExecutionError;

/// Wraps an action with a duration budget and an expected firing period.
///
/// On each `execute()`:
/// 1. If `now - last_execution_time > period`, fires `on_trigger_miss`. The
///    very first call compares against the time the monitor was constructed,
///    so a late first call can report a miss — this is intentional (tested
///    in `tests::first_call_can_report_trigger_miss`), not a bug to fix.
/// 2. Records `last_execution_time = now`.
/// 3. Runs the inner action, measuring elapsed wall time.
/// 4. If `elapsed > duration_limit`, fires `on_duration_exceeded`.
///
/// Both callbacks are infallible `Fn()` closures: they cannot throw across
/// the decorator boundary by construction. The inner action's failure still
/// propagates untouched.
pub struct TimingMonitor<C: Clock> {
    inner: Box<dyn Action>,
    clock: C,
    duration_limit: Duration,
    on_duration_exceeded: Box<dyn Fn() + Send + Sync>,
    period: Duration,
    on_trigger_miss: Box<dyn Fn() + Send + Sync>,
    last_execution_time: Mutex<Instant>,
}

impl<C: Clock> TimingMonitor<C> {
    pub fn new(
        inner: Box<dyn Action>,
        clock: C,
        duration_limit: Duration,
        on_duration_exceeded: impl Fn() + Send + Sync + 'static,
        period: Duration,
        on_trigger_miss: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let last_execution_time = Mutex::new(clock.now());
        Self {
            inner,
            clock,
            duration_limit,
            on_duration_exceeded: Box::new(on_duration_exceeded),
            period,
            on_trigger_miss: Box::new(on_trigger_miss),
            last_execution_time,
        }
    }
}

impl<C: Clock> Action for TimingMonitor<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn execute(&self) -> Result<(), ExecutionError> {
        let now = self.clock.now();
        {
            let mut last = self.last_execution_time.lock().unwrap();
            if now.saturating_duration_since(*last) > self.period {
                (self.on_trigger_miss)();
            }
            *last = now;
        }

        let start = self.clock.now();
        let result = self.inner.execute();
        let elapsed = self.clock.now().saturating_duration_since(start);
        if elapsed > self.duration_limit {
            (self.on_duration_exceeded)();
        }
        result
    }
}
