//! `Sequence` and `Parallel`: the two composite [`Action`] kinds.
//!
//! Both own their children exclusively and dispatch in construction order;
//! neither reorders on execute. `Parallel` is coroutine-free: it spawns one
//! OS thread per child via [`std::thread::scope`] and barrier-joins, so
//! borrowed child actions need no `'static` bound or `Arc` wrapper.

use crate::action::Action;
use crate::error::ExecutionError;

/// Runs children in index order; the first failure aborts and propagates.
pub struct Sequence {
    name: String,
    children: Vec<Box<dyn Action>>,
}

impl Sequence {
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Action>>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

impl Action for Sequence {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) -> Result<(), ExecutionError> {
        for child in &self.children {
            child.execute()?;
        }
        Ok(())
    }
}

/// Starts every child concurrently, joins all, surfaces one failure if any
/// occurred. All started children are awaited regardless of earlier failures.
pub struct Parallel {
    name: String,
    children: Vec<Box<dyn Action>>,
}

impl Parallel {
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Action>>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

impl Action for Parallel {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) -> Result<(), ExecutionError> {
        if self.children.is_empty() {
            return Ok(());
        }
        std::thread::scope(|scope| {
            let handles: Vec<_> = self
                .children
                .iter()
                .map(|child| scope.spawn(move || child.execute()))
                .collect();

            let mut first_error = None;
            for handle in handles {
                match handle.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => {
                        if first_error.is_none() {
                            first_error = Some(err);
                        }
                    }
                    Err(panic) => {
                        if first_error.is_none() {
                            first_error = Some(ExecutionError::msg(format!(
                                "child action panicked: {}",
                                panic_message(&panic)
                            )));
                        }
                    }
                }
            }
            match first_error {
                Some(err) => Err(err),
                None => Ok(()),
            }
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
