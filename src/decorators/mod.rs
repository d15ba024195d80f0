//! Decorators: actions that wrap another action to add cross-cutting
//! behavior without changing its identity (`Decorator(a).name() == a.name()`).
//!
//! A decorator exclusively owns its wrapped action. Chains nest in
//! construction order: `Observed(TimingMonitor(inner))` executes as
//! `Observed -> TimingMonitor -> inner -> TimingMonitor -> Observed`.

mod observed;
mod timing_monitor;

pub use observed::{ExecutionObserver, NoOpObserver, Observed};
pub use timing_monitor::TimingMonitor;
