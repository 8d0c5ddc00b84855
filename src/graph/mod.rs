use crate::{Edge, Node, NodeId};
use nohash::{IntMap, IntSet};
use std::collections::HashMap;

/**
The `Graph` struct stores a directed graph over integer node ids.

Nodes come into existence the first time an edge mentions them or when they
are marked as centroids, and live until the graph is dropped. At most one
edge exists per (`u`, `v`) pair; adding a duplicate replaces the attribute
map. Self-loops are accepted at insert time.

A graph is built incrementally and then treated as read-only while queries
run against it; the search and batch entry points only ever borrow `&Graph`.

# Example

```
use pathrs::{Edge, Graph};

let mut graph = Graph::new();
graph.add_edges(vec![
    Edge::with_attribute(1, 2, "time", 1.0),
    Edge::with_attribute(2, 3, "time", 2.0),
]);
graph.set_centroid(3);
assert_eq!(graph.number_of_nodes(), 3);
assert_eq!(graph.number_of_edges(), 2);
```
*/
pub struct Graph {
    /// External node ids mapped to dense internal indexes.
    nodes_map: HashMap<NodeId, usize>,
    /// The nodes themselves, positioned by internal index.
    nodes_vec: Vec<Node>,
    /// Out-adjacency: for every node index the outgoing edges, keyed by
    /// target index.
    successors: Vec<IntMap<usize, Edge>>,
    /// In-adjacency index, maintained for in-degree queries only.
    predecessors: Vec<IntSet<usize>>,
    num_edges: usize,
}

mod creation;
mod query;

pub use query::{GraphInfo, NodeInfo};
pub(crate) use query::node_not_found_error;

impl Graph {
    pub(crate) fn node_index(&self, id: NodeId) -> Option<usize> {
        self.nodes_map.get(&id).copied()
    }

    pub(crate) fn node_id(&self, index: usize) -> NodeId {
        self.nodes_vec[index].id
    }

    pub(crate) fn is_centroid_by_index(&self, index: usize) -> bool {
        self.nodes_vec[index].centroid
    }

    pub(crate) fn successors_by_index(&self, index: usize) -> &IntMap<usize, Edge> {
        &self.successors[index]
    }
}
