//! `GenericActionBuilder`: turns configuration nodes into action object
//! graphs via a type-name → factory registry, plus a left-to-right decorator
//! pass per node.
//!
//! Grounded on the registry's `HashMap<Key, Vec<Handler>>` plus fluent
//! `register`/`with_x` builder shape used for reducer dispatch, generalized
//! here to action/decorator factories instead of channel reducers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::action::Action;
use crate::composite::{Parallel, Sequence};
use crate::config::ConfigNode;
use crate::error::{ActionGraphError, BuildError, ConfigurationError};

/// Builds an action from an action-node and the enclosing builder (so the
/// factory can recurse into nested action nodes, e.g. for composites).
pub type ActionFactory =
    Arc<dyn Fn(&dyn ConfigNode, &GenericActionBuilder) -> Result<Box<dyn Action>, ActionGraphError> + Send + Sync>;

/// Wraps an already-built action per a decorator node's fields.
pub type DecoratorFactory = Arc<
    dyn Fn(&dyn ConfigNode, Box<dyn Action>) -> Result<Box<dyn Action>, ActionGraphError>
        + Send
        + Sync,
>;

/// Holds `type-name → factory` maps for both actions and decorators, and
/// applies the build + decorate pass described in the configuration schema.
#[derive(Clone)]
pub struct GenericActionBuilder {
    action_factories: HashMap<String, ActionFactory>,
    decorator_factories: HashMap<String, DecoratorFactory>,
}

impl Default for GenericActionBuilder {
    fn default() -> Self {
        let mut builder = Self::new();
        builder.register_action("sequential_actions", Arc::new(build_sequential_actions));
        builder.register_action("parallel_actions", Arc::new(build_parallel_actions));
        builder
    }
}

impl GenericActionBuilder {
    pub fn new() -> Self {
        Self {
            action_factories: HashMap::new(),
            decorator_factories: HashMap::new(),
        }
    }

    pub fn register_action(&mut self, type_name: impl Into<String>, factory: ActionFactory) -> &mut Self {
        self.action_factories.insert(type_name.into(), factory);
        self
    }

    pub fn with_action(mut self, type_name: impl Into<String>, factory: ActionFactory) -> Self {
        self.register_action(type_name, factory);
        self
    }

    pub fn register_decorator(
        &mut self,
        type_name: impl Into<String>,
        factory: DecoratorFactory,
    ) -> &mut Self {
        self.decorator_factories.insert(type_name.into(), factory);
        self
    }

    pub fn with_decorator(mut self, type_name: impl Into<String>, factory: DecoratorFactory) -> Self {
        self.register_decorator(type_name, factory);
        self
    }

    /// Builds the action described by configuration node `node`.
    ///
    /// `node` must have an `action` key (step 1); that action node must have
    /// a non-empty `type` key (step 2) naming a registered factory (step 3).
    /// The factory builds the action (step 4), then an optional `decorate`
    /// sequence on the action node wraps it left-to-right, first entry
    /// innermost (step 5).
    pub fn build(&self, node: &dyn ConfigNode) -> Result<Box<dyn Action>, ActionGraphError> {
        let action_node = node
            .get_key("action")
            .map_err(|_| ConfigurationError::new("missing required key 'action'", node))?;

        let type_node = action_node
            .get_key("type")
            .map_err(|_| ConfigurationError::new("missing required key 'action.type'", action_node))?;
        let type_name = type_node.as_string();
        if type_name.is_empty() {
            return Err(
                ConfigurationError::new("'action.type' must not be empty", action_node).into(),
            );
        }

        let factory = self
            .action_factories
            .get(&type_name)
            .ok_or_else(|| BuildError::new(format!("no action factory registered for '{type_name}'")))?;

        let action = factory(action_node, self)?;
        self.apply_decorators(action_node, action)
    }

    fn apply_decorators(
        &self,
        action_node: &dyn ConfigNode,
        action: Box<dyn Action>,
    ) -> Result<Box<dyn Action>, ActionGraphError> {
        if !action_node.has_key("decorate") {
            return Ok(action);
        }
        let decorate_node = action_node.get_key("decorate").expect("checked by has_key");

        let mut accumulator = action;
        for i in 0..decorate_node.size() {
            let entry = decorate_node.get_index(i)?;
            let type_node = entry
                .get_key("type")
                .map_err(|_| ConfigurationError::new("missing required key 'decorate[].type'", entry))?;
            let type_name = type_node.as_string();
            let factory = self.decorator_factories.get(&type_name).ok_or_else(|| {
                BuildError::new(format!("no decorator factory registered for '{type_name}'"))
            })?;
            accumulator = factory(entry, accumulator)?;
        }
        Ok(accumulator)
    }
}

fn build_sequential_actions(
    node: &dyn ConfigNode,
    builder: &GenericActionBuilder,
) -> Result<Box<dyn Action>, ActionGraphError> {
    let name = node_name(node)?;
    let children = build_children(node, builder)?;
    Ok(Box::new(Sequence::new(name, children)))
}

fn build_parallel_actions(
    node: &dyn ConfigNode,
    builder: &GenericActionBuilder,
) -> Result<Box<dyn Action>, ActionGraphError> {
    let name = node_name(node)?;
    let children = build_children(node, builder)?;
    Ok(Box::new(Parallel::new(name, children)))
}

fn node_name(node: &dyn ConfigNode) -> Result<String, ActionGraphError> {
    Ok(node
        .get_key("name")
        .map_err(|_| ConfigurationError::new("missing required key 'action.name'", node))?
        .as_string())
}

fn build_children(
    node: &dyn ConfigNode,
    builder: &GenericActionBuilder,
) -> Result<Vec<Box<dyn Action>>, ActionGraphError> {
    let actions_node = node
        .get_key("actions")
        .map_err(|_| ConfigurationError::new("missing required key 'action.actions'", node))?;
    let mut children = Vec::with_capacity(actions_node.size());
    for i in 0..actions_node.size() {
        children.push(builder.build(actions_node.get_index(i)?)?);
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, SingleAction};
    use crate::config::MemoryConfigNode;
    use crate::error::ExecutionError;
    use std::sync::{Arc as StdArc, Mutex};

    fn log_action_node(name: &str, log: StdArc<Mutex<Vec<String>>>) -> (String, ActionFactory) {
        let name_owned = name.to_string();
        (
            "log_message".to_string(),
            Arc::new(move |node: &dyn ConfigNode, _builder: &GenericActionBuilder| {
                let action_name = node.get_key("name").unwrap().as_string();
                let message = node.get_key("message").unwrap().as_string();
                let log = StdArc::clone(&log);
                let _ = name_owned;
                Ok(Box::new(SingleAction::new(action_name, move || {
                    log.lock().unwrap().push(message.clone());
                    Ok(()) as Result<(), ExecutionError>
                })) as Box<dyn Action>)
            }),
        )
    }

    #[test]
    fn missing_action_key_is_configuration_error() {
        let builder = GenericActionBuilder::default();
        let node = MemoryConfigNode::map(std::iter::empty::<(&str, MemoryConfigNode)>());
        let err = builder.build(&node).unwrap_err();
        assert!(matches!(err, ActionGraphError::Configuration(_)));
    }

    #[test]
    fn unregistered_type_is_build_error() {
        let builder = GenericActionBuilder::default();
        let node = MemoryConfigNode::map([(
            "action",
            MemoryConfigNode::map([
                ("name", MemoryConfigNode::scalar("x")),
                ("type", MemoryConfigNode::scalar("nonexistent_type")),
            ]),
        )]);
        let err = builder.build(&node).unwrap_err();
        assert!(matches!(err, ActionGraphError::Build(_)));
    }

    #[test]
    fn builds_single_registered_action() {
        let log = StdArc::new(Mutex::new(Vec::new()));
        let (type_name, factory) = log_action_node("x", StdArc::clone(&log));
        let builder = GenericActionBuilder::default().with_action(type_name, factory);
        let node = MemoryConfigNode::map([(
            "action",
            MemoryConfigNode::map([
                ("name", MemoryConfigNode::scalar("x")),
                ("type", MemoryConfigNode::scalar("log_message")),
                ("message", MemoryConfigNode::scalar("hi")),
            ]),
        )]);
        let action = builder.build(&node).unwrap();
        action.execute().unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["hi".to_string()]);
    }

    #[test]
    fn builds_nested_sequential_actions() {
        let log = StdArc::new(Mutex::new(Vec::new()));
        let (type_name, factory) = log_action_node("x", StdArc::clone(&log));
        let builder = GenericActionBuilder::default().with_action(type_name, factory);

        let entry = |name: &str, message: &str| {
            MemoryConfigNode::map([(
                "action",
                MemoryConfigNode::map([
                    ("name", MemoryConfigNode::scalar(name)),
                    ("type", MemoryConfigNode::scalar("log_message")),
                    ("message", MemoryConfigNode::scalar(message)),
                ]),
            )])
        };
        let node = MemoryConfigNode::map([(
            "action",
            MemoryConfigNode::map([
                ("name", MemoryConfigNode::scalar("root")),
                ("type", MemoryConfigNode::scalar("sequential_actions")),
                (
                    "actions",
                    MemoryConfigNode::sequence([entry("a", "one"), entry("b", "two")]),
                ),
            ]),
        )]);

        let action = builder.build(&node).unwrap();
        action.execute().unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["one".to_string(), "two".to_string()]
        );
    }
}
