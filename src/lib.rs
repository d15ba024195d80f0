//! # action-graph: a cooperative, time-driven action scheduler
//!
//! A declarative configuration tree describes named, periodic *triggers*
//! and the *actions* they run. Actions compose into sequential and
//! parallel groups and may be wrapped by decorators that add cross-cutting
//! behavior — most importantly a timing monitor that flags overrun
//! durations and missed periods. A [`global_timer::GlobalTimer`] fires all
//! due triggers from a single background loop against a pluggable
//! [`clock::Clock`]; each trigger executes its action asynchronously with
//! at-most-one concurrent run per trigger.
//!
//! ## Core concepts
//!
//! - **Action**: a named unit of work with one fallible operation, `execute()`.
//! - **Composites**: [`composite::Sequence`] and [`composite::Parallel`].
//! - **Decorators**: [`decorators::Observed`] and [`decorators::TimingMonitor`],
//!   which wrap an action without changing its identity.
//! - **Trigger**: owns one callback, fires it on a worker thread at most
//!   once concurrently.
//! - **GlobalTimer**: the scheduling loop that dispatches triggers.
//! - **Builder**: turns a [`config::ConfigNode`] tree into an action graph.
//!
//! This crate is coroutine-free: all concurrency is plain OS threads
//! (`std::thread`), with no async runtime assumed or required.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use action_graph::action::SingleAction;
//! use action_graph::clock::SystemClock;
//! use action_graph::global_timer::GlobalTimer;
//! use action_graph::Action;
//!
//! let timer = GlobalTimer::new(SystemClock);
//! let count = Arc::new(AtomicUsize::new(0));
//! let count_clone = Arc::clone(&count);
//! let action = SingleAction::new("tick", move || {
//!     count_clone.fetch_add(1, Ordering::SeqCst);
//!     Ok(())
//! });
//! timer.register(Duration::from_millis(5), move || {
//!     let _ = action.execute();
//! });
//! ```

pub mod action;
pub mod builder;
pub mod clock;
pub mod composite;
pub mod config;
pub mod decorators;
pub mod duration_parser;
pub mod error;
pub mod global_timer;
pub mod log;
pub mod stats;
pub mod trigger;

pub use action::Action;
pub use error::ActionGraphError;
