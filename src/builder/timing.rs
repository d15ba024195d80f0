//! Registers the built-in `timing_monitor` decorator factory against a
//! concrete clock and log sink.

use std::sync::Arc;

use super::registry::GenericActionBuilder;
use crate::action::Action;
use crate::clock::Clock;
use crate::config::ConfigNode;
use crate::decorators::TimingMonitor;
use crate::duration_parser::parse_duration;
use crate::error::ConfigurationError;
use crate::log::Log;

/// Registers `"timing_monitor"` so decorator nodes of that type produce a
/// [`TimingMonitor`] reading `duration_limit` and `expected_period` as
/// duration strings, reporting overruns and missed periods to `log`.
pub fn register_timing_monitor_decorator<C>(
    builder: &mut GenericActionBuilder,
    clock: C,
    log: Arc<dyn Log>,
) where
    C: Clock + Clone,
{
    builder.register_decorator(
        "timing_monitor",
        Arc::new(move |node: &dyn ConfigNode, action: Box<dyn Action>| {
            let duration_limit = parse_duration(&duration_field(node, "duration_limit")?)?;
            let expected_period = parse_duration(&duration_field(node, "expected_period")?)?;

            let name = action.name().to_string();
            let log_for_duration = Arc::clone(&log);
            let duration_name = name.clone();
            let log_for_period = Arc::clone(&log);
            let period_name = name;

            let monitor = TimingMonitor::new(
                action,
                clock.clone(),
                duration_limit,
                move || {
                    log_for_duration
                        .log_error(&format!("Duration for action {duration_name} exceeded the limit."));
                },
                expected_period,
                move || {
                    log_for_period
                        .log_error(&format!("The period for action {period_name} exceeded the limit."));
                },
            );
            Ok(Box::new(monitor) as Box<dyn Action>)
        }),
    );
}

fn duration_field(node: &dyn ConfigNode, key: &str) -> Result<String, ConfigurationError> {
    Ok(node
        .get_key(key)
        .map_err(|_| ConfigurationError::new(format!("missing required key '{key}'"), node))?
        .as_string())
}
