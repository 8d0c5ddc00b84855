use super::Graph;
use crate::{Edge, Error, ErrorKind, Node, NodeId};
use itertools::Itertools;
use nohash::{IntMap, IntSet};
use std::collections::HashMap;

impl Graph {
    /**
    Creates an empty `Graph`.

    ```
    use pathrs::Graph;
    let graph = Graph::new();
    assert_eq!(graph.number_of_nodes(), 0);
    ```
    */
    pub fn new() -> Graph {
        Graph {
            nodes_map: HashMap::new(),
            nodes_vec: vec![],
            successors: vec![],
            predecessors: vec![],
            num_edges: 0,
        }
    }

    /**
    Adds an `edge` to the `Graph`, creating its end nodes if they are absent.

    If the (`u`, `v`) pair already has an edge the new attribute map replaces
    the old one; the last writer wins.

    ```
    use pathrs::{Edge, Graph};

    let mut graph = Graph::new();
    graph.add_edge(Edge::with_attribute(1, 2, "time", 1.0));
    graph.add_edge(Edge::with_attribute(1, 2, "time", 7.0));
    assert_eq!(graph.number_of_edges(), 1);
    ```
    */
    pub fn add_edge(&mut self, edge: Edge) {
        let u_index = self.ensure_node(edge.u);
        let v_index = self.ensure_node(edge.v);
        if self.successors[u_index].insert(v_index, edge).is_none() {
            self.num_edges += 1;
        }
        self.predecessors[v_index].insert(u_index);
    }

    /**
    Adds a batch of `edges` to the `Graph`.

    ```
    use pathrs::{Edge, Graph};

    let mut graph = Graph::new();
    graph.add_edges(vec![
        Edge::new(1, 2),
        Edge::new(2, 3),
    ]);
    assert_eq!(graph.number_of_edges(), 2);
    ```
    */
    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /**
    Removes the (`u`, `v`) edge. The end nodes are not removed.

    Returns an `EdgeNotFound` error if the edge does not exist.
    */
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> Result<(), Error> {
        let (u_index, v_index) = match (self.node_index(u), self.node_index(v)) {
            (Some(ui), Some(vi)) => (ui, vi),
            _ => return Err(edge_not_found_error(u, v)),
        };
        if self.successors[u_index].remove(&v_index).is_none() {
            return Err(edge_not_found_error(u, v));
        }
        self.predecessors[v_index].remove(&u_index);
        self.num_edges -= 1;
        Ok(())
    }

    /**
    Removes a batch of edges, all-or-nothing.

    Every (`u`, `v`) pair is checked for existence before any edge is
    removed; if some are missing the graph is left untouched and the error
    names them.

    ```
    use pathrs::{Edge, Graph};

    let mut graph = Graph::new();
    graph.add_edges(vec![Edge::new(1, 2), Edge::new(2, 3)]);
    assert!(graph.remove_edges(vec![(1, 2), (2, 3)]).is_ok());
    assert_eq!(graph.number_of_edges(), 0);
    ```
    */
    pub fn remove_edges(&mut self, pairs: Vec<(NodeId, NodeId)>) -> Result<(), Error> {
        let missing = pairs
            .iter()
            .filter(|(u, v)| !self.has_edge(*u, *v))
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(Error {
                kind: ErrorKind::EdgeNotFound,
                message: format!(
                    "Cannot remove edges; {} do(es) not exist. No edges were removed.",
                    missing.iter().map(|(u, v)| format!("({}, {})", u, v)).join(", ")
                ),
            });
        }
        for (u, v) in pairs {
            self.remove_edge(u, v)?;
        }
        Ok(())
    }

    /**
    Marks a node as a centroid, creating it if it is absent.

    Centroid nodes may start or end a path but are never traversed through.

    ```
    use pathrs::Graph;
    let mut graph = Graph::new();
    graph.set_centroid(4);
    assert_eq!(graph.number_of_centroids(), 1);
    ```
    */
    pub fn set_centroid(&mut self, id: NodeId) {
        let index = self.ensure_node(id);
        self.nodes_vec[index].centroid = true;
    }

    /// Marks a batch of nodes as centroids, creating any that are absent.
    pub fn set_centroids(&mut self, ids: Vec<NodeId>) {
        for id in ids {
            self.set_centroid(id);
        }
    }

    /// Interns `id`, growing the adjacency rows for a new node.
    fn ensure_node(&mut self, id: NodeId) -> usize {
        match self.nodes_map.get(&id) {
            Some(&index) => index,
            None => {
                let index = self.nodes_vec.len();
                self.nodes_map.insert(id, index);
                self.nodes_vec.push(Node::from_id(id));
                self.successors.push(IntMap::default());
                self.predecessors.push(IntSet::default());
                index
            }
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

fn edge_not_found_error(u: NodeId, v: NodeId) -> Error {
    Error {
        kind: ErrorKind::EdgeNotFound,
        message: format!("The requested edge ({}, {}) does not exist.", u, v),
    }
}
