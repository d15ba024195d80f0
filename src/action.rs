//! The [`Action`] trait: a named unit of work with one operation, `execute`.
//!
//! Composites ([`crate::composite::Sequence`], [`crate::composite::Parallel`])
//! and decorators ([`crate::decorators::Observed`],
//! [`crate::decorators::TimingMonitor`]) all implement `Action`, so a decorator
//! appears in the graph in exactly the position of the action it wraps.

use crate::error::ExecutionError;

/// A named unit of work.
///
/// `execute` takes no inputs and returns no value on success; failures are
/// reported through [`ExecutionError`]. Implementations must be safe to share
/// across threads, since [`crate::composite::Parallel`] runs children
/// concurrently and [`crate::trigger::Trigger`] runs a trigger's action on a
/// spawned thread.
pub trait Action: Send + Sync {
    /// The action's name, stable for its lifetime.
    fn name(&self) -> &str;

    /// Run the action once. May fail.
    fn execute(&self) -> Result<(), ExecutionError>;
}

/// A leaf action wrapping a user-supplied closure.
pub struct SingleAction {
    name: String,
    function: Box<dyn Fn() -> Result<(), ExecutionError> + Send + Sync>,
}

impl SingleAction {
    pub fn new(
        name: impl Into<String>,
        function: impl Fn() -> Result<(), ExecutionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            function: Box::new(function),
        }
    }
}

impl Action for SingleAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) -> Result<(), ExecutionError> {
        (self.function)()
    }
}
