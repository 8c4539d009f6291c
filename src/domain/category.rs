//! Hierarchical category index.
//!
//! Categories are `/`-delimited paths such as `Electronics/Phones`. Each path
//! segment becomes a node in a tree rooted at a sentinel `Root` node. Nodes
//! live in an arena and refer to their children by index.

use std::collections::BTreeSet;

use crate::domain::item::ItemId;

/// Separator between the segments of a category path.
pub const DELIMITER: char = '/';

/// Name of the sentinel root node.
pub const ROOT_NAME: &str = "Root";

/// Index of a node in a [`CategoryIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A single category segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    name: String,
    children: Vec<NodeId>,
    items: BTreeSet<ItemId>,
}

impl CategoryNode {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            items: BTreeSet::new(),
        }
    }

    /// The segment name of this node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child nodes, in creation order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Items filed directly at this node.
    #[must_use]
    pub const fn items(&self) -> &BTreeSet<ItemId> {
        &self.items
    }
}

/// Tree of category nodes.
///
/// Nodes are created on demand and never removed. Removing an item from the
/// warehouse leaves its node (and its identifier) in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    nodes: Vec<CategoryNode>,
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self {
            nodes: vec![CategoryNode::new(ROOT_NAME)],
        }
    }
}

impl CategoryIndex {
    /// The sentinel root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was produced by a different index.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &CategoryNode {
        &self.nodes[id.0]
    }

    /// Every node, root first, in creation order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &CategoryNode> {
        self.nodes.iter()
    }

    /// Walks `path` from the root, creating any missing segments, and returns
    /// the terminal node.
    ///
    /// The empty path resolves to the root. A trailing delimiter does not add
    /// an empty segment.
    pub fn find_or_create(&mut self, path: &str) -> NodeId {
        let mut current = self.root();
        for segment in path.split_terminator(DELIMITER) {
            current = self.child(current, segment).unwrap_or_else(|| {
                let created = NodeId(self.nodes.len());
                self.nodes.push(CategoryNode::new(segment));
                self.nodes[current.0].children.push(created);
                created
            });
        }
        current
    }

    /// Files `item` under the node for `path`, creating nodes as needed.
    pub fn file(&mut self, path: &str, item: ItemId) -> NodeId {
        let node = self.find_or_create(path);
        self.nodes[node.0].items.insert(item);
        node
    }

    /// Looks up the node for `path` without creating anything.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<NodeId> {
        path.split_terminator(DELIMITER)
            .try_fold(self.root(), |current, segment| self.child(current, segment))
    }

    fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].name == name)
    }

    /// Depth-first walk of the tree, yielding each node with its depth.
    ///
    /// The root is yielded at depth 0.
    pub fn walk(&self) -> impl Iterator<Item = (usize, &CategoryNode)> {
        let nodes = &self.nodes;
        let mut stack = vec![(0, self.root())];
        std::iter::from_fn(move || {
            let (depth, id) = stack.pop()?;
            let node = &nodes[id.0];
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, *child)));
            Some((depth, node))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(index: &CategoryIndex, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .map(|id| index.node(*id).name().to_string())
            .collect()
    }

    #[test]
    fn new_index_has_only_root() {
        let index = CategoryIndex::default();
        let names: Vec<_> = index.nodes().map(CategoryNode::name).collect();
        assert_eq!(names, vec![ROOT_NAME]);
        assert_eq!(index.node(index.root()).name(), ROOT_NAME);
        assert!(index.node(index.root()).items().is_empty());
    }

    #[test]
    fn sibling_paths_share_parent() {
        let mut index = CategoryIndex::default();
        let b = index.file("A/B", 1);
        let c = index.file("A/C", 2);

        let root = index.node(index.root());
        assert_eq!(names(&index, root.children()), vec!["A"]);

        let a = index.find("A").unwrap();
        assert_eq!(names(&index, index.node(a).children()), vec!["B", "C"]);
        assert_eq!(index.node(b).items().iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(index.node(c).items().iter().copied().collect::<Vec<_>>(), vec![2]);
        assert!(index.node(a).items().is_empty());
    }

    #[test]
    fn existing_path_is_not_duplicated() {
        let mut index = CategoryIndex::default();
        let first = index.file("A/B", 1);
        let nodes = index.nodes().len();
        let second = index.file("A/B", 3);

        assert_eq!(first, second);
        assert_eq!(index.nodes().len(), nodes);
        assert_eq!(index.node(first).items().len(), 2);
    }

    #[test]
    fn refiling_same_item_is_idempotent() {
        let mut index = CategoryIndex::default();
        let node = index.file("A", 1);
        index.file("A", 1);
        assert_eq!(index.node(node).items().len(), 1);
    }

    #[test]
    fn empty_path_resolves_to_root() {
        let mut index = CategoryIndex::default();
        assert_eq!(index.find_or_create(""), index.root());
        assert_eq!(index.nodes().len(), 1);
    }

    #[test]
    fn trailing_delimiter_adds_no_segment() {
        let mut index = CategoryIndex::default();
        let a = index.find_or_create("A/");
        assert_eq!(index.find("A"), Some(a));
        assert_eq!(index.nodes().len(), 2);
    }

    #[test]
    fn find_does_not_create() {
        let index = CategoryIndex::default();
        assert_eq!(index.find("Missing/Path"), None);
        assert_eq!(index.nodes().len(), 1);
    }

    #[test]
    fn segment_names_are_case_sensitive() {
        let mut index = CategoryIndex::default();
        index.find_or_create("Tools");
        index.find_or_create("tools");
        assert_eq!(index.node(index.root()).children().len(), 2);
    }

    #[test]
    fn walk_is_depth_first_in_creation_order() {
        let mut index = CategoryIndex::default();
        index.find_or_create("A/B");
        index.find_or_create("C");
        index.find_or_create("A/D");

        let walked: Vec<_> = index
            .walk()
            .map(|(depth, node)| (depth, node.name().to_string()))
            .collect();
        assert_eq!(
            walked,
            vec![
                (0, "Root".to_string()),
                (1, "A".to_string()),
                (2, "B".to_string()),
                (2, "D".to_string()),
                (1, "C".to_string()),
            ]
        );
    }
}
