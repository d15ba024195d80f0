//! `Observed`: a decorator that calls lifecycle callbacks around the inner
//! action's execution.

use crate::action::Action;
use crate::error::ExecutionError;

/// Lifecycle callbacks fired around an observed action's `execute`.
pub trait ExecutionObserver: Send + Sync {
    fn on_started(&self);
    fn on_finished(&self);
    fn on_failed(&self, error: &ExecutionError);
}

/// An observer that does nothing; the default when observation isn't needed.
#[derive(Default)]
pub struct NoOpObserver;

impl ExecutionObserver for NoOpObserver {
    fn on_started(&self) {}
    fn on_finished(&self) {}
    fn on_failed(&self, _error: &ExecutionError) {}
}

/// Wraps an action with `on_started` / `on_finished` / `on_failed` callbacks.
///
/// `on_started` always precedes the inner `execute()`. On success
/// `on_finished` runs after. On failure, `on_failed(&error)` runs instead and
/// the error is re-propagated.
pub struct Observed {
    inner: Box<dyn Action>,
    observer: Box<dyn ExecutionObserver>,
}

impl Observed {
    pub fn new(inner: Box<dyn Action>, observer: Box<dyn ExecutionObserver>) -> Self {
        Self { inner, observer }
    }
}

impl Action for Observed {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn execute(&self) -> Result<(), ExecutionError> {
        self.observer.on_started();
        match self.inner.execute() {
            Ok(()) => {
                self.observer.on_finished();
                Ok(())
            }
            Err(err) => {
                self.observer.on_failed(&err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SingleAction;
    use std::sync::{Arc, Mutex};

    struct RecordingObserver {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl ExecutionObserver for RecordingObserver {
        fn on_started(&self) {
            self.events.lock().unwrap().push("started".into());
        }
        fn on_finished(&self) {
            self.events.lock().unwrap().push("finished".into());
        }
        fn on_failed(&self, error: &ExecutionError) {
            self.events
                .lock()
                .unwrap()
                .push(format!("failed:{}", error.message));
        }
    }

    #[test]
    fn observed_preserves_inner_name() {
        let inner: Box<dyn Action> = Box::new(SingleAction::new("inner", || Ok(())));
        let observed = Observed::new(inner, Box::new(NoOpObserver));
        assert_eq!(observed.name(), "inner");
    }

    #[test]
    fn observed_calls_started_then_finished_on_success() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let inner: Box<dyn Action> = Box::new(SingleAction::new("inner", || Ok(())));
        let observed = Observed::new(
            inner,
            Box::new(RecordingObserver {
                events: Arc::clone(&events),
            }),
        );
        observed.execute().unwrap();
        assert_eq!(*events.lock().unwrap(), vec!["started", "finished"]);
    }

    #[test]
    fn observed_calls_failed_instead_of_finished_on_failure() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let inner: Box<dyn Action> =
            Box::new(SingleAction::new("inner", || Err(ExecutionError::msg("boom"))));
        let observed = Observed::new(
            inner,
            Box::new(RecordingObserver {
                events: Arc::clone(&events),
            }),
        );
        let err = observed.execute().unwrap_err();
        assert_eq!(err.message, "boom");
        assert_eq!(*events.lock().unwrap(), vec!["started", "failed:boom"]);
    }
}
