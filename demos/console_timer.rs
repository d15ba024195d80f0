//! Parses a trigger list from YAML, wires it against a real `SystemClock`
//! and `GlobalTimer`, and lets it run for a few seconds while logging via
//! `tracing-subscriber`.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use action_graph::builder::{build_action_graph, register_timing_monitor_decorator, GenericActionBuilder};
use action_graph::clock::SystemClock;
use action_graph::config::{ConfigNode, YamlConfigNode};
use action_graph::error::ExecutionError;
use action_graph::global_timer::GlobalTimer;
use action_graph::log::{Log, TracingLog};
use action_graph::Action;

const CONFIG: &str = r#"
- trigger:
    name: heartbeat
    period: "500 milliseconds"
    action:
      name: heartbeat-action
      type: log_message
      message: "heartbeat"
      decorate:
        - type: timing_monitor
          duration_limit: "50 milliseconds"
          expected_period: "500 milliseconds"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let log: Arc<dyn Log> = Arc::new(TracingLog);
    let mut builder = GenericActionBuilder::new();
    register_log_message_action(&mut builder, Arc::clone(&log));
    register_timing_monitor_decorator(&mut builder, SystemClock, Arc::clone(&log));

    let config = YamlConfigNode::parse(CONFIG)?;
    let timer = GlobalTimer::new(SystemClock);
    let _triggers = build_action_graph(config.root(), &builder, &timer)?;

    thread::sleep(Duration::from_secs(3));
    Ok(())
}

fn register_log_message_action(builder: &mut GenericActionBuilder, log: Arc<dyn Log>) {
    builder.register_action(
        "log_message",
        Arc::new(move |node: &dyn ConfigNode, _builder: &GenericActionBuilder| {
            let name = node.get_key("name")?.as_string();
            let message = node.get_key("message")?.as_string();
            let log = Arc::clone(&log);
            Ok(Box::new(action_graph::action::SingleAction::new(name, move || {
                log.log_message(&message);
                Ok::<(), ExecutionError>(())
            })) as Box<dyn Action>)
        }),
    );
}
