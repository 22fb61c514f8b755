//! Node arena for program tree storage.

use crate::base::NodeIndex;
use crate::node::{IdentifierData, Node};
use serde::Serialize;

/// Arena-based storage for program nodes.
/// Nodes are stored contiguously and referenced by index.
///
/// Trees are built bottom-up: adding a node links each of its children back to
/// it, so parent links are always consistent with the child lists.
#[derive(Debug, Default, Serialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the arena and return its index.
    ///
    /// Every child of `node` gets `parent` set to the returned index.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        for child in node.children() {
            if let Some(child_node) = self.nodes.get_mut(child.0 as usize) {
                child_node.parent = index;
            }
        }
        self.nodes.push(node);
        index
    }

    /// Get a node by index
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Parent of a node, `NodeIndex::NONE` for roots and unknown indices.
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    pub fn identifier(&self, index: NodeIndex) -> Option<&IdentifierData> {
        self.get(index).and_then(Node::as_identifier)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
