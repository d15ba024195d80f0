//! A `ConfigNode` adapter over `serde_yaml::Value`, the tree-text format.

use serde_yaml::Value;

use super::ConfigNode;
use crate::error::ConfigurationNodeNotFound;

impl ConfigNode for Value {
    fn is_scalar(&self) -> bool {
        matches!(self, Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_))
    }

    fn is_map(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    fn has_key(&self, key: &str) -> bool {
        match self {
            Value::Mapping(map) => map.contains_key(Value::String(key.to_string())),
            _ => false,
        }
    }

    fn get_key(&self, key: &str) -> Result<&dyn ConfigNode, ConfigurationNodeNotFound> {
        match self {
            Value::Mapping(map) => map
                .get(Value::String(key.to_string()))
                .map(|v| v as &dyn ConfigNode)
                .ok_or_else(|| ConfigurationNodeNotFound(key.to_string())),
            _ => Err(ConfigurationNodeNotFound(key.to_string())),
        }
    }

    fn get_index(&self, index: usize) -> Result<&dyn ConfigNode, ConfigurationNodeNotFound> {
        match self {
            Value::Sequence(entries) => entries
                .get(index)
                .map(|v| v as &dyn ConfigNode)
                .ok_or_else(|| ConfigurationNodeNotFound(index.to_string())),
            _ => Err(ConfigurationNodeNotFound(index.to_string())),
        }
    }

    fn size(&self) -> usize {
        match self {
            Value::Sequence(entries) => entries.len(),
            _ => 0,
        }
    }

    fn as_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
                serde_yaml::to_string(self).unwrap_or_default()
            }
        }
    }
}

/// Owns the root of a parsed YAML document; `Value` itself implements
/// `ConfigNode`, so this is mostly a parse-time entry point.
#[derive(Debug, Clone)]
pub struct YamlConfigNode(Value);

impl YamlConfigNode {
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        Ok(Self(serde_yaml::from_str(text)?))
    }

    pub fn root(&self) -> &dyn ConfigNode {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trigger_list_schema() {
        let doc = "
- trigger:
    name: heartbeat
    period: \"2 milliseconds\"
    action:
      name: x
      type: log_message
";
        let node = YamlConfigNode::parse(doc).unwrap();
        let root = node.root();
        assert!(root.is_sequence());
        let entry = root.get_index(0).unwrap();
        let trigger = entry.get_key("trigger").unwrap();
        assert_eq!(trigger.get_key("name").unwrap().as_string(), "heartbeat");
        assert_eq!(
            trigger.get_key("period").unwrap().as_string(),
            "2 milliseconds"
        );
    }

    #[test]
    fn missing_key_is_not_found() {
        let node = YamlConfigNode::parse("name: x").unwrap();
        assert!(node.root().get_key("missing").is_err());
    }

    #[test]
    fn scalar_as_string_renders_plain_text() {
        let node = YamlConfigNode::parse("42").unwrap();
        assert!(node.root().is_scalar());
        assert_eq!(node.root().as_string(), "42");
    }
}
