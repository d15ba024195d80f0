//! Configuration-driven construction: turns a [`crate::config::ConfigNode`]
//! tree into a runnable action/trigger graph.

mod graph;
mod registry;
mod timing;

pub use graph::{build_action_graph, build_trigger, BuiltTrigger};
pub use registry::{ActionFactory, DecoratorFactory, GenericActionBuilder};
pub use timing::register_timing_monitor_decorator;
