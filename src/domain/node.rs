//! Regional entrance nodes and the catalog they are picked from.

use serde::{Deserialize, Serialize};

use super::DashError;

// ============================================================================
// Regional Node
// ============================================================================

/// A regional entrance the subscription can be filtered by.
///
/// The `id` is the short region tag the backend understands in its
/// `filter` parameter; `name` is only used for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionalNode {
    /// Short region tag, e.g. `S1`.
    pub id: String,
    /// Human readable entrance name.
    pub name: String,
}

impl RegionalNode {
    /// Creates a new regional node.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ============================================================================
// Node Catalog
// ============================================================================

/// The fixed set of entrances offered to the user.
///
/// Loaded once from configuration at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCatalog {
    nodes: Vec<RegionalNode>,
}

impl Default for NodeCatalog {
    fn default() -> Self {
        Self::new(default_nodes())
    }
}

impl NodeCatalog {
    /// Creates a catalog from the given nodes, keeping their order.
    #[must_use]
    pub fn new(nodes: Vec<RegionalNode>) -> Self {
        Self { nodes }
    }

    /// All nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[RegionalNode] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by its region tag.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RegionalNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Resolves a list of region tags into nodes, keeping the given order.
    ///
    /// Repeated tags collapse onto their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `DashError::InvalidInput` naming the first unknown tag.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<RegionalNode>, DashError> {
        let mut nodes: Vec<RegionalNode> = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            let node = self.get(id).ok_or_else(|| self.unknown(id))?;
            if !nodes.iter().any(|n| n.id == node.id) {
                nodes.push(node.clone());
            }
        }
        Ok(nodes)
    }

    fn unknown(&self, id: &str) -> DashError {
        DashError::invalid_input(format!(
            "unknown node '{id}' (known: {})",
            self.nodes
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }
}

/// The entrances shipped with the dashboard.
#[must_use]
pub fn default_nodes() -> Vec<RegionalNode> {
    vec![
        RegionalNode::new("S1", "广港-广州入口"),
        RegionalNode::new("E1", "沪港-上海入口"),
        RegionalNode::new("E2", "沪日-上海入口"),
        RegionalNode::new("N1", "京港-北京入口"),
        RegionalNode::new("N2", "京德-北京入口"),
        RegionalNode::new("W1", "成港-成都入口"),
    ]
}

// ============================================================================
// Tests
// ============================================================================
