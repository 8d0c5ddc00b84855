use crate::algorithms::shortest_path::{dijkstra, yen, SearchOptions, SearchResult};
use crate::{batch, Edge, Error, ErrorKind, Graph, GraphInfo, NodeId, NodeInfo};
use ndarray::Array2;
use std::collections::HashMap;

const DIJKSTRA_METHOD: &str = "Dijkstra";

/**
The engine facade: owns a [Graph](./struct.Graph.html) and exposes every
mutation, introspection, query, batch and enumeration operation behind
boundary validation. Host-language bindings front this one object.

The graph may only be mutated between query batches; all query methods
borrow the engine immutably and may run concurrently.

# Example

```
use pathrs::{Edge, PathEngine};

let mut engine = PathEngine::new();
engine.add_edges(vec![
    Edge::with_attribute(1, 2, "w", 1.0),
    Edge::with_attribute(2, 3, "w", 1.0),
]);
let costs = engine
    .single_source_cost(1, "Dijkstra", None, f64::INFINITY, "w")
    .unwrap();
assert_eq!(costs.get(&3), Some(&2.0));
```
*/
pub struct PathEngine {
    graph: Graph,
}

impl PathEngine {
    pub fn new() -> PathEngine {
        PathEngine {
            graph: Graph::new(),
        }
    }

    /// A read-only view of the underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    // mutation

    /// Inserts or replaces the (`u`, `v`) edge with the given attribute map,
    /// creating missing nodes. The last writer wins.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, attributes: HashMap<String, f64>) {
        self.graph.add_edge(Edge::with_attributes(u, v, attributes));
    }

    /// Inserts or replaces a batch of edges.
    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        self.graph.add_edges(edges);
    }

    /// Removes the (`u`, `v`) edge, leaving its end nodes in place.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> Result<(), Error> {
        self.graph.remove_edge(u, v)
    }

    /// Removes a batch of edges, all-or-nothing: if any pair is absent no
    /// edge is removed.
    pub fn remove_edges(&mut self, pairs: Vec<(NodeId, NodeId)>) -> Result<(), Error> {
        self.graph.remove_edges(pairs)
    }

    /// Marks a node as a centroid, creating it if absent.
    pub fn set_centroid(&mut self, id: NodeId) {
        self.graph.set_centroid(id);
    }

    /// Marks a batch of nodes as centroids, creating any that are absent.
    pub fn set_centroids(&mut self, ids: Vec<NodeId>) {
        self.graph.set_centroids(ids);
    }

    // introspection

    pub fn get_graph_info(&self) -> GraphInfo {
        self.graph.get_graph_info()
    }

    pub fn get_node_info(&self, id: NodeId) -> Result<NodeInfo, Error> {
        self.graph.get_node_info(id)
    }

    pub fn get_link_info(&self, u: NodeId, v: NodeId) -> Result<HashMap<String, f64>, Error> {
        self.graph.get_link_info(u, v)
    }

    // single queries

    /// Multi-source search returning costs only.
    pub fn multi_source_cost(
        &self,
        sources: &[NodeId],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
    ) -> Result<HashMap<NodeId, f64>, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        Ok(dijkstra::multi_source(&self.graph, sources, &options)?.costs)
    }

    /// Multi-source search returning paths only.
    pub fn multi_source_path(
        &self,
        sources: &[NodeId],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
    ) -> Result<HashMap<NodeId, Vec<NodeId>>, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        Ok(dijkstra::multi_source(&self.graph, sources, &options)?.paths)
    }

    /// Multi-source search returning both costs and paths.
    pub fn multi_source_all(
        &self,
        sources: &[NodeId],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
    ) -> Result<SearchResult, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        dijkstra::multi_source(&self.graph, sources, &options)
    }

    /// Single-source search returning costs only.
    pub fn single_source_cost(
        &self,
        source: NodeId,
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
    ) -> Result<HashMap<NodeId, f64>, Error> {
        self.multi_source_cost(&[source], method, target, cutoff, weight_name)
    }

    /// Single-source search returning paths only.
    pub fn single_source_path(
        &self,
        source: NodeId,
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
    ) -> Result<HashMap<NodeId, Vec<NodeId>>, Error> {
        self.multi_source_path(&[source], method, target, cutoff, weight_name)
    }

    /// Single-source search returning both costs and paths.
    pub fn single_source_all(
        &self,
        source: NodeId,
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
    ) -> Result<SearchResult, Error> {
        self.multi_source_all(&[source], method, target, cutoff, weight_name)
    }

    // batched queries

    /// Batched single-source searches returning costs only, one map per
    /// source, in input order.
    pub fn multi_single_source_cost(
        &self,
        sources: &[NodeId],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
        num_thread: usize,
    ) -> Result<Vec<HashMap<NodeId, f64>>, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        let results = batch::multi_single_source(&self.graph, sources, &options, num_thread)?;
        Ok(results.into_iter().map(|r| r.costs).collect())
    }

    /// Batched single-source searches returning paths only.
    pub fn multi_single_source_path(
        &self,
        sources: &[NodeId],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
        num_thread: usize,
    ) -> Result<Vec<HashMap<NodeId, Vec<NodeId>>>, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        let results = batch::multi_single_source(&self.graph, sources, &options, num_thread)?;
        Ok(results.into_iter().map(|r| r.paths).collect())
    }

    /// Batched single-source searches returning both costs and paths.
    pub fn multi_single_source_all(
        &self,
        sources: &[NodeId],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
        num_thread: usize,
    ) -> Result<Vec<SearchResult>, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        batch::multi_single_source(&self.graph, sources, &options, num_thread)
    }

    /// Batched multi-source searches returning costs only, one map per
    /// source set, in input order.
    pub fn multi_multi_source_cost(
        &self,
        source_sets: &[Vec<NodeId>],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
        num_thread: usize,
    ) -> Result<Vec<HashMap<NodeId, f64>>, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        let results = batch::multi_multi_source(&self.graph, source_sets, &options, num_thread)?;
        Ok(results.into_iter().map(|r| r.costs).collect())
    }

    /// Batched multi-source searches returning paths only.
    pub fn multi_multi_source_path(
        &self,
        source_sets: &[Vec<NodeId>],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
        num_thread: usize,
    ) -> Result<Vec<HashMap<NodeId, Vec<NodeId>>>, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        let results = batch::multi_multi_source(&self.graph, source_sets, &options, num_thread)?;
        Ok(results.into_iter().map(|r| r.paths).collect())
    }

    /// Batched multi-source searches returning both costs and paths.
    pub fn multi_multi_source_all(
        &self,
        source_sets: &[Vec<NodeId>],
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
        num_thread: usize,
    ) -> Result<Vec<SearchResult>, Error> {
        let options = self.query_options(method, target, cutoff, weight_name)?;
        batch::multi_multi_source(&self.graph, source_sets, &options, num_thread)
    }

    /// The dense |sources| × |targets| cost matrix; `f64::INFINITY` marks
    /// unreachable pairs.
    pub fn cost_matrix(
        &self,
        sources: &[NodeId],
        targets: &[NodeId],
        method: &str,
        cutoff: f64,
        weight_name: &str,
        num_thread: usize,
    ) -> Result<Array2<f64>, Error> {
        validate_method(method)?;
        validate_cutoff(cutoff)?;
        batch::cost_matrix(&self.graph, sources, targets, cutoff, weight_name, num_thread)
    }

    /// Shortest paths for every (source, target) pair, keyed by the pair;
    /// unreachable pairs are omitted.
    pub fn path_dict(
        &self,
        sources: &[NodeId],
        targets: &[NodeId],
        method: &str,
        cutoff: f64,
        weight_name: &str,
        num_thread: usize,
    ) -> Result<HashMap<(NodeId, NodeId), Vec<NodeId>>, Error> {
        validate_method(method)?;
        validate_cutoff(cutoff)?;
        batch::path_dict(&self.graph, sources, targets, cutoff, weight_name, num_thread)
    }

    // enumeration and single pairs

    /// Up to `k` cheapest loopless paths from `source` to `target`,
    /// ascending by cost.
    pub fn k_shortest_paths(
        &self,
        source: NodeId,
        target: NodeId,
        k: usize,
        weight_name: &str,
    ) -> Result<Vec<Vec<NodeId>>, Error> {
        yen::k_shortest_paths(&self.graph, source, target, k, weight_name)
    }

    /// The cost of the cheapest route from `source` to `target`.
    pub fn shortest_path_cost(
        &self,
        source: NodeId,
        target: NodeId,
        weight_name: &str,
    ) -> Result<f64, Error> {
        self.shortest_path_all(source, target, weight_name)
            .map(|(cost, _)| cost)
    }

    /// The node sequence of the cheapest route from `source` to `target`.
    pub fn shortest_path_path(
        &self,
        source: NodeId,
        target: NodeId,
        weight_name: &str,
    ) -> Result<Vec<NodeId>, Error> {
        self.shortest_path_all(source, target, weight_name)
            .map(|(_, path)| path)
    }

    /// The cost and node sequence of the cheapest route from `source` to
    /// `target`; `NoPath` when the target is unreachable.
    pub fn shortest_path_all(
        &self,
        source: NodeId,
        target: NodeId,
        weight_name: &str,
    ) -> Result<(f64, Vec<NodeId>), Error> {
        let options = SearchOptions {
            target: Some(target),
            cutoff: f64::INFINITY,
            weight_name: weight_name.to_string(),
        };
        let result = dijkstra::single_source(&self.graph, source, &options)?;
        match (result.costs.get(&target), result.paths.get(&target)) {
            (Some(&cost), Some(path)) => Ok((cost, path.clone())),
            _ => Err(Error {
                kind: ErrorKind::NoPath,
                message: format!("There is no route from {} to {}.", source, target),
            }),
        }
    }

    /// Validates the boundary arguments shared by all query entry points
    /// and bundles them into `SearchOptions`.
    fn query_options(
        &self,
        method: &str,
        target: Option<NodeId>,
        cutoff: f64,
        weight_name: &str,
    ) -> Result<SearchOptions, Error> {
        validate_method(method)?;
        validate_cutoff(cutoff)?;
        Ok(SearchOptions {
            target,
            cutoff,
            weight_name: weight_name.to_string(),
        })
    }
}

impl Default for PathEngine {
    fn default() -> Self {
        PathEngine::new()
    }
}

fn validate_method(method: &str) -> Result<(), Error> {
    if method == DIJKSTRA_METHOD {
        return Ok(());
    }
    Err(Error {
        kind: ErrorKind::WrongMethod,
        message: format!(
            "Unknown search method '{}'; the only supported method is '{}'.",
            method, DIJKSTRA_METHOD
        ),
    })
}

fn validate_cutoff(cutoff: f64) -> Result<(), Error> {
    if cutoff.is_nan() || cutoff < 0.0 {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: format!("`cutoff` was {} but it must be a non-negative number.", cutoff),
        });
    }
    Ok(())
}
