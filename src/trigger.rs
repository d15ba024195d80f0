//! `Trigger`: at-most-one-in-flight asynchronous fire semantics.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Owns a callback and fires it on a spawned thread, at most once
/// concurrently. A fire request while the previous fire is still running is
/// dropped — no queueing.
pub struct Trigger {
    callback: Arc<dyn Fn() + Send + Sync>,
    is_running: Arc<AtomicBool>,
}

impl Trigger {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
            is_running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Atomically test-and-set `is_running`. On success, spawns a worker
    /// thread that runs the callback then clears the flag. On failure
    /// (already running), returns immediately — the fire is dropped.
    pub fn fire_asynchronously(&self) {
        if self
            .is_running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let callback = Arc::clone(&self.callback);
        let is_running = Arc::clone(&self.is_running);
        thread::spawn(move || {
            // Clears `is_running` on every exit path, including panics in
            // the callback (the callback type is `Fn()`, not fallible; a
            // user action that can fail is expected to catch and log its
            // own errors, per the crate's error-handling design).
            struct ClearOnDrop(Arc<AtomicBool>);
            impl Drop for ClearOnDrop {
                fn drop(&mut self) {
                    self.0.store(false, Ordering::Release);
                }
            }
            let _guard = ClearOnDrop(is_running);
            let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| callback()));
        });
    }

    /// Cooperatively spin/yield until the trigger is idle.
    pub fn wait_until_idle(&self) {
        while self.is_running.load(Ordering::Acquire) {
            thread::yield_now();
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Acquire)
    }
}

impl Drop for Trigger {
    fn drop(&mut self) {
        self.wait_until_idle();
    }
}
