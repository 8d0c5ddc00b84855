use crate::algorithms::shortest_path::{dijkstra, SearchOptions, SearchResult};
use crate::{Error, ErrorKind, Graph, NodeId};
use log::debug;
use ndarray::Array2;
use rayon::prelude::*;
use std::collections::HashMap;

/**
Runs `task` over every input on a pool of `num_thread` workers, collecting
the results in input order regardless of completion order.

`num_thread == 1` runs the batch sequentially on the caller's thread. The
first `Err` aborts the batch; a panicking worker propagates the panic to the
caller.
*/
pub(crate) fn run_batch<I, R, F>(inputs: Vec<I>, num_thread: usize, task: F) -> Result<Vec<R>, Error>
where
    I: Send,
    R: Send,
    F: Fn(I) -> Result<R, Error> + Send + Sync,
{
    if num_thread == 0 {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: "`num_thread` must be at least 1.".to_string(),
        });
    }
    debug!(
        "dispatching a batch of {} queries on {} thread(s)",
        inputs.len(),
        num_thread
    );
    if num_thread == 1 {
        return inputs.into_iter().map(task).collect();
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_thread)
        .build()
        .map_err(|e| Error {
            kind: ErrorKind::Internal,
            message: format!("Could not build a worker pool: {}", e),
        })?;
    pool.install(|| inputs.into_par_iter().map(task).collect())
}

/**
Runs one single-source search per entry of `sources`, in parallel on
`num_thread` workers. The i-th result always belongs to the i-th source.

```
use pathrs::{batch, Edge, Graph};
use pathrs::algorithms::shortest_path::SearchOptions;

let mut graph = Graph::new();
graph.add_edges(vec![
    Edge::with_attribute(1, 2, "w", 1.0),
    Edge::with_attribute(2, 3, "w", 1.0),
]);
let options = SearchOptions { weight_name: "w".to_string(), ..SearchOptions::default() };
let results = batch::multi_single_source(&graph, &[1, 2], &options, 2).unwrap();
assert_eq!(results[0].costs.get(&3), Some(&2.0));
assert_eq!(results[1].costs.get(&3), Some(&1.0));
```
*/
pub fn multi_single_source(
    graph: &Graph,
    sources: &[NodeId],
    options: &SearchOptions,
    num_thread: usize,
) -> Result<Vec<SearchResult>, Error> {
    run_batch(sources.to_vec(), num_thread, |source| {
        dijkstra::single_source(graph, source, options)
    })
}

/**
Runs one multi-source search per entry of `source_sets`, in parallel on
`num_thread` workers. The i-th result always belongs to the i-th set.
*/
pub fn multi_multi_source(
    graph: &Graph,
    source_sets: &[Vec<NodeId>],
    options: &SearchOptions,
    num_thread: usize,
) -> Result<Vec<SearchResult>, Error> {
    run_batch(source_sets.to_vec(), num_thread, |sources| {
        dijkstra::multi_source(graph, &sources, options)
    })
}

/**
Materializes the dense |sources| × |targets| cost matrix.

Entry (i, j) holds the cheapest cost from `sources[i]` to `targets[j]`, or
`f64::INFINITY` when the target is unreachable, beyond `cutoff`, or either
id is not in the graph. One Dijkstra runs per source row, never one per
(source, target) pair.

```
use pathrs::{batch, Edge, Graph};

let mut graph = Graph::new();
graph.add_edges(vec![
    Edge::with_attribute(1, 2, "w", 2.0),
    Edge::with_attribute(2, 5, "w", 2.0),
]);
let matrix = batch::cost_matrix(&graph, &[1], &[5, 9], f64::INFINITY, "w", 1).unwrap();
assert_eq!(matrix[[0, 0]], 4.0);
assert_eq!(matrix[[0, 1]], f64::INFINITY);
```
*/
pub fn cost_matrix(
    graph: &Graph,
    sources: &[NodeId],
    targets: &[NodeId],
    cutoff: f64,
    weight_name: &str,
    num_thread: usize,
) -> Result<Array2<f64>, Error> {
    let target_indexes = targets
        .iter()
        .map(|&t| graph.node_index(t))
        .collect::<Vec<Option<usize>>>();
    let rows = run_batch(sources.to_vec(), num_thread, |source| {
        let row = match graph.node_index(source) {
            None => vec![f64::INFINITY; targets.len()],
            Some(source_index) => {
                let (dist, _) =
                    dijkstra::search_by_index(graph, &[source_index], None, cutoff, weight_name, None)?;
                target_indexes
                    .iter()
                    .map(|t| t.and_then(|i| dist.get(&i).copied()).unwrap_or(f64::INFINITY))
                    .collect()
            }
        };
        Ok(row)
    })?;
    let flat = rows.into_iter().flatten().collect::<Vec<f64>>();
    Array2::from_shape_vec((sources.len(), targets.len()), flat).map_err(|e| Error {
        kind: ErrorKind::Internal,
        message: format!("Could not shape the cost matrix: {}", e),
    })
}

/**
Computes the shortest path for every (source, target) pair, keyed by the
pair; pairs with no path within `cutoff` are omitted. Decomposed the same
way as [cost_matrix](./fn.cost_matrix.html): one Dijkstra per source.
*/
pub fn path_dict(
    graph: &Graph,
    sources: &[NodeId],
    targets: &[NodeId],
    cutoff: f64,
    weight_name: &str,
    num_thread: usize,
) -> Result<HashMap<(NodeId, NodeId), Vec<NodeId>>, Error> {
    let rows = run_batch(sources.to_vec(), num_thread, |source| {
        let source_index = match graph.node_index(source) {
            None => return Ok(vec![]),
            Some(index) => index,
        };
        let (dist, parent) =
            dijkstra::search_by_index(graph, &[source_index], None, cutoff, weight_name, None)?;
        Ok(targets
            .iter()
            .filter_map(|&target| {
                let target_index = graph.node_index(target)?;
                if dist.contains_key(&target_index) {
                    Some((
                        (source, target),
                        dijkstra::build_path(graph, &parent, target_index),
                    ))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>())
    })?;
    Ok(rows.into_iter().flatten().collect())
}
