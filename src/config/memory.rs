//! An in-memory `ConfigNode` builder, used in tests and by callers who build
//! configuration programmatically instead of parsing text.

use super::ConfigNode;
use crate::error::ConfigurationNodeNotFound;

/// Owned configuration tree node, built up with the `scalar`/`map`/`sequence`
/// constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum MemoryConfigNode {
    Scalar(String),
    Map(Vec<(String, MemoryConfigNode)>),
    Sequence(Vec<MemoryConfigNode>),
}

impl MemoryConfigNode {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn map(entries: impl IntoIterator<Item = (impl Into<String>, MemoryConfigNode)>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn sequence(entries: impl IntoIterator<Item = MemoryConfigNode>) -> Self {
        Self::Sequence(entries.into_iter().collect())
    }
}

impl ConfigNode for MemoryConfigNode {
    fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    fn has_key(&self, key: &str) -> bool {
        match self {
            Self::Map(entries) => entries.iter().any(|(k, _)| k == key),
            _ => false,
        }
    }

    fn get_key(&self, key: &str) -> Result<&dyn ConfigNode, ConfigurationNodeNotFound> {
        match self {
            Self::Map(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v as &dyn ConfigNode)
                .ok_or_else(|| ConfigurationNodeNotFound(key.to_string())),
            _ => Err(ConfigurationNodeNotFound(key.to_string())),
        }
    }

    fn get_index(&self, index: usize) -> Result<&dyn ConfigNode, ConfigurationNodeNotFound> {
        match self {
            Self::Sequence(entries) => entries
                .get(index)
                .map(|v| v as &dyn ConfigNode)
                .ok_or_else(|| ConfigurationNodeNotFound(index.to_string())),
            _ => Err(ConfigurationNodeNotFound(index.to_string())),
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Sequence(entries) => entries.len(),
            _ => 0,
        }
    }

    fn as_string(&self) -> String {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::Map(entries) => format!(
                "{{{}}}",
                entries
                    .iter()
                    .map(|(k, v)| format!("{k}: {}", v.as_string()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Sequence(entries) => format!(
                "[{}]",
                entries
                    .iter()
                    .map(|v| v.as_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lookup_by_key() {
        let node = MemoryConfigNode::map([("name", MemoryConfigNode::scalar("x"))]);
        assert!(node.is_map());
        assert!(node.has_key("name"));
        assert_eq!(node.get_key("name").unwrap().as_string(), "x");
    }

    #[test]
    fn missing_key_fails() {
        let node = MemoryConfigNode::map([("name", MemoryConfigNode::scalar("x"))]);
        assert!(node.get_key("missing").is_err());
    }

    #[test]
    fn sequence_lookup_by_index() {
        let node = MemoryConfigNode::sequence([
            MemoryConfigNode::scalar("a"),
            MemoryConfigNode::scalar("b"),
        ]);
        assert_eq!(node.size(), 2);
        assert_eq!(node.get_index(1).unwrap().as_string(), "b");
        assert!(node.get_index(2).is_err());
    }

    #[test]
    fn scalar_has_no_children() {
        let node = MemoryConfigNode::scalar("42");
        assert!(node.is_scalar());
        assert_eq!(node.size(), 0);
        assert!(!node.has_key("anything"));
    }
}
