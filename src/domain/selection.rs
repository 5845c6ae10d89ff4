//! The user's current regional filter.

use super::RegionalNode;

/// Ordered set of nodes the user picked for this session.
///
/// An empty selection means "no filter". The collection is only ever
/// replaced as a whole, the way a multi-select control reports its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    nodes: Vec<RegionalNode>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole selection.
    pub fn replace(&mut self, nodes: Vec<RegionalNode>) {
        self.nodes = nodes;
    }

    /// Computes the selection that results from toggling `node`.
    ///
    /// A selected node is removed; an unselected one is appended at the end,
    /// so the result keeps the order in which nodes were picked.
    #[must_use]
    pub fn toggled(&self, node: &RegionalNode) -> Vec<RegionalNode> {
        if self.contains(&node.id) {
            self.nodes.iter().filter(|n| n.id != node.id).cloned().collect()
        } else {
            let mut next = self.nodes.clone();
            next.push(node.clone());
            next
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    #[must_use]
    pub fn nodes(&self) -> &[RegionalNode] {
        &self.nodes
    }

    /// Region tags in selection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Short label for the picker button.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "Select Regional Entrance".to_string()
        } else {
            format!("{} Regional Entrance Selected", self.len())
        }
    }
}

impl From<Vec<RegionalNode>> for SelectionSet {
    fn from(nodes: Vec<RegionalNode>) -> Self {
        Self { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> RegionalNode {
        RegionalNode::new(id, format!("{id} entrance"))
    }

    #[test]
    fn test_starts_empty() {
        let selection = SelectionSet::new();
        assert!(selection.is_empty());
        assert_eq!(selection.summary(), "Select Regional Entrance");
    }

    #[test]
    fn test_toggle_appends_in_pick_order() {
        let mut selection = SelectionSet::new();
        selection.replace(selection.toggled(&node("E1")));
        selection.replace(selection.toggled(&node("S1")));
        assert_eq!(selection.ids().collect::<Vec<_>>(), ["E1", "S1"]);
        assert_eq!(selection.summary(), "2 Regional Entrance Selected");
    }

    #[test]
    fn test_toggle_removes_selected_node() {
        let mut selection = SelectionSet::from(vec![node("S1"), node("E1"), node("N1")]);
        selection.replace(selection.toggled(&node("E1")));
        assert_eq!(selection.ids().collect::<Vec<_>>(), ["S1", "N1"]);
    }

    #[test]
    fn test_toggled_does_not_mutate() {
        let selection = SelectionSet::from(vec![node("S1")]);
        let next = selection.toggled(&node("W1"));
        assert_eq!(next.len(), 2);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_replace_accepts_any_subset() {
        let mut selection = SelectionSet::from(vec![node("S1")]);
        selection.replace(Vec::new());
        assert!(selection.is_empty());
    }
}
