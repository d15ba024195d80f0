//! Read-only configuration tree: a sum of `{Scalar, Map, Sequence}` with
//! polymorphic accessors. This is a build-time collaborator, not part of the
//! executing action graph.

mod memory;
mod yaml;

pub use memory::MemoryConfigNode;
pub use yaml::YamlConfigNode;

use crate::error::ConfigurationNodeNotFound;

/// Read-only access to one node of a configuration tree.
///
/// Implementations are expected to be cheap to traverse (borrowed views, not
/// copies) since the builder walks the whole tree once per build.
pub trait ConfigNode {
    fn is_scalar(&self) -> bool;
    fn is_map(&self) -> bool;
    fn is_sequence(&self) -> bool;

    fn has_key(&self, key: &str) -> bool;

    /// Look up a child by key. Fails if this node is not a map, or the key
    /// is absent.
    fn get_key(&self, key: &str) -> Result<&dyn ConfigNode, ConfigurationNodeNotFound>;

    /// Look up a child by index. Fails if this node is not a sequence, or
    /// the index is out of bounds.
    fn get_index(&self, index: usize) -> Result<&dyn ConfigNode, ConfigurationNodeNotFound>;

    /// Sequence length; 0 for scalar/map nodes.
    fn size(&self) -> usize;

    /// Textual value for scalars; a diagnostic rendering for composites.
    fn as_string(&self) -> String;
}
