//! Unified error taxonomy for the crate.
//!
//! Build-time failures ([`ConfigurationError`], [`BuildError`],
//! [`ConfigurationNodeNotFound`], [`InvalidArgumentError`]) abort construction
//! before any action graph is handed back to the caller. Runtime failures
//! ([`ExecutionError`]) propagate through the composition chain. [`LogicError`]
//! marks caller misuse (`wait_one_cycle` on a stopped timer, statistics
//! queried with no samples).

use thiserror::Error;

/// A schema violation encountered while interpreting a configuration node.
#[derive(Debug, Error)]
#[error("error parsing configuration: {message}\nnode: {node_repr}")]
pub struct ConfigurationError {
    pub message: String,
    pub node_repr: String,
}

impl ConfigurationError {
    pub fn new(message: impl Into<String>, node: &dyn crate::config::ConfigNode) -> Self {
        Self {
            message: message.into(),
            node_repr: node.as_string(),
        }
    }
}

/// No factory was registered for a requested action or decorator type.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BuildError(pub String);

impl BuildError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A key or index was requested from a configuration node that does not have it.
#[derive(Debug, Error)]
#[error("configuration node not found: {0}")]
pub struct ConfigurationNodeNotFound(pub String);

/// A duration string did not match `"<integer> <unit>"`.
#[derive(Debug, Error)]
#[error("invalid argument: {0}")]
pub struct InvalidArgumentError(pub String);

/// A runtime failure raised from within a user-supplied action body.
#[derive(Debug, Error)]
#[error("execution error: {message}")]
pub struct ExecutionError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ExecutionError {
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn from_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Caller misuse: `wait_one_cycle` after shutdown, or statistics with no samples.
#[derive(Debug, Error)]
pub enum LogicError {
    #[error("GlobalTimer is not running")]
    TimerNotRunning,
    #[error("unable to retrieve distribution parameters without samples")]
    NoSamples,
}

/// The crate-wide error type. Every narrower error above converts into this
/// via `#[from]`, so callers can match broadly or drill into a specific kind.
#[derive(Debug, Error)]
pub enum ActionGraphError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    NodeNotFound(#[from] ConfigurationNodeNotFound),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Logic(#[from] LogicError),
}
