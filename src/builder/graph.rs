//! `build_action_graph` / `build_trigger`: the trigger-list form of the
//! configuration schema, wired against a running [`GlobalTimer`].

use std::sync::Arc;

use super::registry::GenericActionBuilder;
use crate::action::Action;
use crate::clock::Clock;
use crate::config::ConfigNode;
use crate::duration_parser::parse_duration;
use crate::error::{ActionGraphError, ConfigurationError};
use crate::global_timer::GlobalTimer;

/// One built trigger: its action is kept alive alongside the timer for as
/// long as the returned handle lives, since the timer's callback only holds
/// a reference-counted pointer to it.
pub struct BuiltTrigger {
    pub name: String,
    pub action: Arc<dyn Action>,
}

/// Builds every top-level `- trigger: {...}` entry in `root`, registering
/// each with `timer` as `(period, move || { action.execute().ok(); })`, and
/// returns the built actions so callers can keep them alive.
///
/// A failing action is swallowed at the trigger-callback boundary per the
/// loop's failure semantics (callbacks are expected to catch their own
/// errors); nothing here aborts the timer loop.
pub fn build_action_graph<C: Clock>(
    root: &dyn ConfigNode,
    builder: &GenericActionBuilder,
    timer: &GlobalTimer<C>,
) -> Result<Vec<BuiltTrigger>, ActionGraphError> {
    let mut triggers = Vec::with_capacity(root.size());
    for i in 0..root.size() {
        let entry = root.get_index(i)?;
        triggers.push(build_trigger(entry, builder, timer)?);
    }
    Ok(triggers)
}

/// Builds a single `{trigger: {name, period, action}}` entry and registers
/// it with `timer`.
pub fn build_trigger<C: Clock>(
    entry: &dyn ConfigNode,
    builder: &GenericActionBuilder,
    timer: &GlobalTimer<C>,
) -> Result<BuiltTrigger, ActionGraphError> {
    let trigger_node = entry
        .get_key("trigger")
        .map_err(|_| ConfigurationError::new("missing required key 'trigger'", entry))?;

    let name = trigger_node
        .get_key("name")
        .map_err(|_| ConfigurationError::new("missing required key 'trigger.name'", trigger_node))?
        .as_string();

    let period_text = trigger_node
        .get_key("period")
        .map_err(|_| ConfigurationError::new("missing required key 'trigger.period'", trigger_node))?
        .as_string();
    let period = parse_duration(&period_text)?;

    let action: Arc<dyn Action> = Arc::from(builder.build(trigger_node)?);

    let callback_action = Arc::clone(&action);
    timer.register(period, move || {
        let _ = callback_action.execute();
    });

    Ok(BuiltTrigger { name, action })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SingleAction;
    use crate::clock::VirtualClock;
    use crate::config::MemoryConfigNode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc as StdArc;
    use std::time::Duration;

    #[test]
    fn builds_and_registers_a_single_trigger() {
        let mut builder = GenericActionBuilder::new();
        let count = StdArc::new(AtomicUsize::new(0));
        let count_clone = StdArc::clone(&count);
        builder.register_action(
            "counting_action",
            Arc::new(move |node: &dyn ConfigNode, _builder: &GenericActionBuilder| {
                let name = node.get_key("name").unwrap().as_string();
                let count = StdArc::clone(&count_clone);
                Ok(Box::new(SingleAction::new(name, move || {
                    count.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })) as Box<dyn Action>)
            }),
        );

        let clock = StdArc::new(VirtualClock::new());
        let timer = GlobalTimer::new(ArcClock(StdArc::clone(&clock)));

        let entry = MemoryConfigNode::map([(
            "trigger",
            MemoryConfigNode::map([
                ("name", MemoryConfigNode::scalar("heartbeat")),
                ("period", MemoryConfigNode::scalar("2 milliseconds")),
                (
                    "action",
                    MemoryConfigNode::map([
                        ("name", MemoryConfigNode::scalar("tick")),
                        ("type", MemoryConfigNode::scalar("counting_action")),
                    ]),
                ),
            ]),
        )]);

        let built = build_trigger(&entry, &builder, &timer).unwrap();
        assert_eq!(built.name, "heartbeat");

        clock.advance(Duration::from_millis(2));
        timer.wait_one_cycle().unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[derive(Clone)]
    struct ArcClock(StdArc<VirtualClock>);

    impl Clock for ArcClock {
        fn now(&self) -> std::time::Instant {
            self.0.now()
        }
    }
}
