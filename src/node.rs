use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The external identifier of a node. Ids are signed, may be sparse and may
/// come from any range; dense internal indexes are assigned on first mention.
pub type NodeId = i64;

/**
A node of the graph.

Nodes are created implicitly, either by adding an edge that mentions them or
by marking them as centroids; they live until the graph is dropped.
*/
#[derive(Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Centroid nodes may start or end a path but are never traversed through.
    pub centroid: bool,
    /// Optional auxiliary attributes; not interpreted by the engine.
    pub attributes: Option<HashMap<String, f64>>,
}

impl Node {
    pub fn from_id(id: NodeId) -> Node {
        Node {
            id,
            centroid: false,
            attributes: None,
        }
    }

    /**
    Creates a `Node` carrying auxiliary attributes.

    ```
    use pathrs::Node;
    let node = Node::from_id_and_attribute_tuples(7, vec![("x".to_string(), 3.5)]);
    ```
    */
    pub fn from_id_and_attribute_tuples(id: NodeId, attributes: Vec<(String, f64)>) -> Node {
        Node {
            id,
            centroid: false,
            attributes: Some(attributes.into_iter().collect::<HashMap<String, f64>>()),
        }
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("centroid", &self.centroid)
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
