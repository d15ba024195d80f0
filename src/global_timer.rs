//! `GlobalTimer<C>`: a background loop that fires all due triggers against a
//! pluggable clock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::error::LogicError;
use crate::trigger::Trigger;

struct ScheduledTrigger {
    period: Duration,
    trigger: Trigger,
    next_trigger_time_point: Instant,
}

struct Shared {
    schedule: Mutex<Vec<ScheduledTrigger>>,
    cycle_condvar: Condvar,
    running: AtomicBool,
}

/// Owns a dedicated worker thread that repeatedly scans a schedule of
/// `(period, trigger, next_trigger_time_point)` entries and fires whichever
/// are due, advancing `next_trigger_time_point` by exactly `period` each time
/// (never snapping to `now`, so missed ticks accumulate deterministically).
///
/// Detects backwards clock jumps and rewrites every entry's next fire time
/// to `now + period` when one occurs, so no trigger fires spuriously after a
/// jump.
pub struct GlobalTimer<C: Clock> {
    clock: Arc<C>,
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

impl<C: Clock> GlobalTimer<C> {
    pub fn new(clock: C) -> Self {
        let clock = Arc::new(clock);
        let shared = Arc::new(Shared {
            schedule: Mutex::new(Vec::new()),
            cycle_condvar: Condvar::new(),
            running: AtomicBool::new(true),
        });

        let loop_shared = Arc::clone(&shared);
        let loop_clock = Arc::clone(&clock);
        let thread = thread::spawn(move || run_loop(loop_clock, loop_shared));

        Self {
            clock,
            shared,
            thread: Some(thread),
        }
    }

    /// Append a scheduled trigger; `next_trigger_time_point = now + period`.
    pub fn register(&self, period: Duration, callback: impl Fn() + Send + Sync + 'static) {
        let now = self.clock.now();
        let mut schedule = self.shared.schedule.lock().unwrap();
        schedule.push(ScheduledTrigger {
            period,
            trigger: Trigger::new(callback),
            next_trigger_time_point: now + period,
        });
    }

    /// Block until the scheduling loop has completed at least one full pass
    /// *after* this call, then block until every scheduled trigger is idle.
    ///
    /// Waits on two broadcasts (not one) to avoid a race where the loop's
    /// notification fires while this call is still setting up its wait —
    /// without the second wait, work dispatched in the pass concurrent with
    /// the call could be missed.
    pub fn wait_one_cycle(&self) -> Result<(), LogicError> {
        if !self.shared.running.load(Ordering::Acquire) {
            return Err(LogicError::TimerNotRunning);
        }
        let schedule = self.shared.schedule.lock().unwrap();
        let schedule = self.shared.cycle_condvar.wait(schedule).unwrap();
        let schedule = self.shared.cycle_condvar.wait(schedule).unwrap();
        for entry in schedule.iter() {
            entry.trigger.wait_until_idle();
        }
        Ok(())
    }
}

fn run_loop<C: Clock>(clock: Arc<C>, shared: Arc<Shared>) {
    let mut previous_now = clock.now();
    while shared.running.load(Ordering::Acquire) {
        let now = clock.now();
        if now < previous_now {
            let mut schedule = shared.schedule.lock().unwrap();
            for entry in schedule.iter_mut() {
                entry.next_trigger_time_point = now + entry.period;
            }
        }
        previous_now = now;

        {
            let mut schedule = shared.schedule.lock().unwrap();
            for entry in schedule.iter_mut() {
                if now >= entry.next_trigger_time_point {
                    entry.trigger.fire_asynchronously();
                    entry.next_trigger_time_point += entry.period;
                }
            }
        }

        shared.cycle_condvar.notify_all();
        // A small bounded sleep keeps this a busy-ish loop rather than a
        // pure spin, without compromising wait_one_cycle's timing
        // assumptions in tests (see the "busy loop" note in the crate docs).
        thread::sleep(Duration::from_micros(200));
    }
}

impl<C: Clock> Drop for GlobalTimer<C> {
    fn drop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}
