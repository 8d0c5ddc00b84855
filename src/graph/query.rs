use super::Graph;
use crate::{Edge, Error, ErrorKind, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counts of the graph's contents, as returned by
/// [get_graph_info](./struct.Graph.html#method.get_graph_info).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInfo {
    pub nodes: usize,
    pub edges: usize,
    pub centroids: usize,
}

/// A single node's descriptor, as returned by
/// [get_node_info](./struct.Graph.html#method.get_node_info).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub in_degree: usize,
    pub out_degree: usize,
    pub centroid: bool,
}

impl Graph {
    /**
    Returns the counts of nodes, edges and centroids in the graph.

    ```
    use pathrs::{Edge, Graph};

    let mut graph = Graph::new();
    graph.add_edges(vec![Edge::new(1, 2), Edge::new(2, 3)]);
    graph.set_centroid(1);
    let info = graph.get_graph_info();
    assert_eq!(info.nodes, 3);
    assert_eq!(info.edges, 2);
    assert_eq!(info.centroids, 1);
    ```
    */
    pub fn get_graph_info(&self) -> GraphInfo {
        GraphInfo {
            nodes: self.nodes_vec.len(),
            edges: self.num_edges,
            centroids: self.nodes_vec.iter().filter(|n| n.centroid).count(),
        }
    }

    /**
    Returns the descriptor of a single node: in-degree, out-degree and
    centroid flag.

    Returns a `NodeNotFound` error if the node is not in the graph.

    ```
    use pathrs::{Edge, Graph};

    let mut graph = Graph::new();
    graph.add_edges(vec![Edge::new(1, 2), Edge::new(3, 2)]);
    let info = graph.get_node_info(2).unwrap();
    assert_eq!(info.in_degree, 2);
    assert_eq!(info.out_degree, 0);
    ```
    */
    pub fn get_node_info(&self, id: NodeId) -> Result<NodeInfo, Error> {
        match self.node_index(id) {
            None => Err(node_not_found_error(id)),
            Some(index) => Ok(NodeInfo {
                in_degree: self.predecessors[index].len(),
                out_degree: self.successors[index].len(),
                centroid: self.nodes_vec[index].centroid,
            }),
        }
    }

    /**
    Returns a clone of the (`u`, `v`) edge's attribute map.

    Returns an `EdgeNotFound` error if the edge is not in the graph.
    */
    pub fn get_link_info(&self, u: NodeId, v: NodeId) -> Result<HashMap<String, f64>, Error> {
        self.get_edge(u, v).map(|edge| edge.attributes.clone())
    }

    /**
    Gets the `Edge` between the `u` and `v` nodes.

    ```
    use pathrs::{Edge, Graph};

    let mut graph = Graph::new();
    graph.add_edge(Edge::with_attribute(1, 2, "time", 1.5));
    assert!(graph.get_edge(1, 2).is_ok());
    assert!(graph.get_edge(2, 1).is_err());
    ```
    */
    pub fn get_edge(&self, u: NodeId, v: NodeId) -> Result<&Edge, Error> {
        self.node_index(u)
            .zip(self.node_index(v))
            .and_then(|(u_index, v_index)| self.successors[u_index].get(&v_index))
            .ok_or_else(|| Error {
                kind: ErrorKind::EdgeNotFound,
                message: format!("The requested edge ({}, {}) does not exist.", u, v),
            })
    }

    /// Returns `true` if the node is in the graph.
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes_map.contains_key(&id)
    }

    /// Returns `true` if the (`u`, `v`) edge is in the graph.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.get_edge(u, v).is_ok()
    }

    /// Gets a `Vec` of all the nodes in the graph.
    pub fn get_all_nodes(&self) -> Vec<&Node> {
        self.nodes_vec.iter().collect()
    }

    /// Gets a `Vec` of all the edges in the graph.
    pub fn get_all_edges(&self) -> Vec<&Edge> {
        self.successors.iter().flat_map(|row| row.values()).collect()
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes_vec.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.num_edges
    }

    pub fn number_of_centroids(&self) -> usize {
        self.nodes_vec.iter().filter(|n| n.centroid).count()
    }

    /**
    Computes the in-degree of a node: the number of edges that end at it.

    Returns a `NodeNotFound` error if the node is not in the graph.
    */
    pub fn get_node_in_degree(&self, id: NodeId) -> Result<usize, Error> {
        match self.node_index(id) {
            None => Err(node_not_found_error(id)),
            Some(index) => Ok(self.predecessors[index].len()),
        }
    }

    /**
    Computes the out-degree of a node: the number of edges that leave it.

    Returns a `NodeNotFound` error if the node is not in the graph.
    */
    pub fn get_node_out_degree(&self, id: NodeId) -> Result<usize, Error> {
        match self.node_index(id) {
            None => Err(node_not_found_error(id)),
            Some(index) => Ok(self.successors[index].len()),
        }
    }
}

pub(crate) fn node_not_found_error(id: NodeId) -> Error {
    Error {
        kind: ErrorKind::NodeNotFound,
        message: format!("The requested node {} is not in the graph.", id),
    }
}
