use crate::algorithms::shortest_path::{SearchOptions, SearchResult};
use crate::graph::node_not_found_error;
use crate::{Error, ErrorKind, Graph, NodeId};
use nohash::{IntMap, IntSet};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/**
As the graph is explored the nodes at the "fringe" of the explored part wait
in a priority queue. This struct holds one fringe entry.

`distance` and `count` are stored negated: `BinaryHeap` is a max-heap, so
negation makes it pop the smallest distance first and, on equal distances,
the earliest insertion (FIFO).
*/
struct FringeNode {
    node_index: usize,
    count: i64,
    distance: f64,
}

impl Ord for FringeNode {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.distance < other.distance {
            Ordering::Less
        } else if self.distance > other.distance {
            Ordering::Greater
        } else {
            let count_ordering = self.count.cmp(&other.count);
            match count_ordering {
                Ordering::Equal => self.node_index.cmp(&other.node_index),
                _ => count_ordering,
            }
        }
    }
}

impl PartialOrd for FringeNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FringeNode {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
            && self.count == other.count
            && self.node_index == other.node_index
    }
}

impl Eq for FringeNode {}

/// Restricts a search to a subgraph without touching the graph itself.
/// The k-shortest enumeration masks spur prefixes this way.
pub(crate) struct SearchMask {
    pub removed_nodes: IntSet<usize>,
    pub removed_edges: HashSet<(usize, usize)>,
}

static CONTRADICTORY_PATHS_ERROR_MESSAGE: &str =
    "Contradictory paths found; do some edges have negative weights?";

/**
Finds shortest weighted paths from a single source node.

Costs and paths are reported for every node reachable within
`options.cutoff`, measured by the edge attribute `options.weight_name`
(empty selects unit weights). When `options.target` is set the search stops
as soon as the target settles and the result holds the target alone.

Centroid nodes are never traversed through: edges out of a centroid are only
relaxed when the centroid is the source of the search.

# Examples

```
use pathrs::{Edge, Graph};
use pathrs::algorithms::shortest_path::{dijkstra, SearchOptions};

let mut graph = Graph::new();
graph.add_edges(vec![
    Edge::with_attribute(1, 2, "w", 1.0),
    Edge::with_attribute(2, 3, "w", 1.0),
    Edge::with_attribute(1, 3, "w", 3.0),
]);
let options = SearchOptions { weight_name: "w".to_string(), ..SearchOptions::default() };
let result = dijkstra::single_source(&graph, 1, &options).unwrap();
assert_eq!(result.costs.get(&3), Some(&2.0));
assert_eq!(result.paths.get(&3), Some(&vec![1, 2, 3]));
```

# References

1. E. W. Dijkstra. A note on two problems in connexion with graphs. Numer. Math., 1:269–271, 1959.
*/
pub fn single_source(
    graph: &Graph,
    source: NodeId,
    options: &SearchOptions,
) -> Result<SearchResult, Error> {
    multi_source(graph, &[source], options)
}

/**
Finds shortest weighted paths from multiple source nodes.

Every source is seeded at cost zero, so each reported cost is the distance
from the nearest source and each reported path starts at that source.
All sources may leave their node even if it is a centroid.

# Examples

```
use pathrs::{Edge, Graph};
use pathrs::algorithms::shortest_path::{dijkstra, SearchOptions};

let mut graph = Graph::new();
graph.add_edges(vec![
    Edge::with_attribute(1, 2, "w", 5.0),
    Edge::with_attribute(3, 2, "w", 1.0),
]);
let options = SearchOptions { weight_name: "w".to_string(), ..SearchOptions::default() };
let result = dijkstra::multi_source(&graph, &[1, 3], &options).unwrap();
assert_eq!(result.costs.get(&2), Some(&1.0));
assert_eq!(result.paths.get(&2), Some(&vec![3, 2]));
```
*/
pub fn multi_source(
    graph: &Graph,
    sources: &[NodeId],
    options: &SearchOptions,
) -> Result<SearchResult, Error> {
    let source_indexes = sources
        .iter()
        .map(|&s| graph.node_index(s).ok_or_else(|| node_not_found_error(s)))
        .collect::<Result<Vec<usize>, Error>>()?;
    let target_index = match options.target {
        None => None,
        Some(t) => Some(graph.node_index(t).ok_or_else(|| node_not_found_error(t))?),
    };
    let (dist, parent) = search_by_index(
        graph,
        &source_indexes,
        target_index,
        options.cutoff,
        &options.weight_name,
        None,
    )?;
    let mut costs = HashMap::new();
    let mut paths = HashMap::new();
    for (&index, &cost) in dist.iter() {
        if target_index.is_some() && target_index != Some(index) {
            continue;
        }
        costs.insert(graph.node_id(index), cost);
        paths.insert(graph.node_id(index), build_path(graph, &parent, index));
    }
    Ok(SearchResult { costs, paths })
}

/**
The search core all the public entry points call; index-based.

Returns the settled distances and the parent pointers
(`parent[source] == source`). Stale heap entries are discarded when popped;
relaxations beyond `cutoff` and into the `mask` are skipped; the loop exits
as soon as `target` settles.
*/
pub(crate) fn search_by_index(
    graph: &Graph,
    sources: &[usize],
    target: Option<usize>,
    cutoff: f64,
    weight_name: &str,
    mask: Option<&SearchMask>,
) -> Result<(IntMap<usize, f64>, IntMap<usize, usize>), Error> {
    let mut dist = IntMap::<usize, f64>::default();
    let mut seen = IntMap::<usize, f64>::default();
    let mut parent = IntMap::<usize, usize>::default();
    let mut fringe = BinaryHeap::new();
    let mut count: i64 = 0;

    let source_set = sources.iter().copied().collect::<IntSet<usize>>();

    for &source in sources {
        if mask.map_or(false, |m| m.removed_nodes.contains(&source)) {
            continue;
        }
        seen.insert(source, 0.0);
        parent.insert(source, source);
        fringe.push(FringeNode {
            node_index: source,
            count: 0,
            distance: -0.0,
        });
    }

    while let Some(fringe_item) = fringe.pop() {
        let d = -fringe_item.distance;
        let v = fringe_item.node_index;
        if dist.contains_key(&v) {
            continue;
        }
        dist.insert(v, d);
        if target == Some(v) {
            break;
        }
        // v == target has already left the loop, so only being a source
        // excuses a centroid from the no-transit rule here
        if graph.is_centroid_by_index(v) && !source_set.contains(&v) {
            continue;
        }
        for (&u, edge) in graph.successors_by_index(v) {
            if let Some(m) = mask {
                if m.removed_nodes.contains(&u) || m.removed_edges.contains(&(v, u)) {
                    continue;
                }
            }
            let vu_dist = d + edge.weight(weight_name);
            if vu_dist > cutoff {
                continue;
            }
            if let Some(&u_dist) = dist.get(&u) {
                if vu_dist < u_dist {
                    return Err(Error {
                        kind: ErrorKind::ContradictoryPaths,
                        message: CONTRADICTORY_PATHS_ERROR_MESSAGE.to_string(),
                    });
                }
            } else if !seen.contains_key(&u) || vu_dist < *seen.get(&u).unwrap() {
                seen.insert(u, vu_dist);
                parent.insert(u, v);
                push_fringe_node(&mut count, &mut fringe, u, vu_dist);
            }
        }
    }

    Ok((dist, parent))
}

/**
Finds the single cheapest path between a pair of node indexes, or `None`
when the target is unreachable. Used by the k-shortest enumeration, which
passes a mask to restrict spur searches.
*/
pub(crate) fn shortest_path_by_index(
    graph: &Graph,
    source: usize,
    target: usize,
    weight_name: &str,
    mask: Option<&SearchMask>,
) -> Result<Option<(f64, Vec<usize>)>, Error> {
    let (dist, parent) = search_by_index(
        graph,
        &[source],
        Some(target),
        f64::INFINITY,
        weight_name,
        mask,
    )?;
    match dist.get(&target) {
        None => Ok(None),
        Some(&cost) => Ok(Some((cost, build_path_by_index(&parent, target)))),
    }
}

/**
Pushes a `FringeNode` onto the `fringe` `BinaryHeap`, negating the insertion
counter so ties pop oldest-first.
*/
#[inline]
fn push_fringe_node(count: &mut i64, fringe: &mut BinaryHeap<FringeNode>, u: usize, vu_dist: f64) {
    *count += 1;
    fringe.push(FringeNode {
        node_index: u,
        count: -*count,
        distance: -vu_dist,
    });
}

/// Walks the parent pointers back from `index` to the seeding source and
/// reverses, yielding the path as external node ids.
pub(crate) fn build_path(
    graph: &Graph,
    parent: &IntMap<usize, usize>,
    index: usize,
) -> Vec<NodeId> {
    build_path_by_index(parent, index)
        .into_iter()
        .map(|i| graph.node_id(i))
        .collect()
}

fn build_path_by_index(parent: &IntMap<usize, usize>, index: usize) -> Vec<usize> {
    let mut path = vec![];
    let mut node = index;
    loop {
        path.push(node);
        let p = *parent.get(&node).unwrap();
        if p == node {
            break;
        }
        node = p;
    }
    path.reverse();
    path
}
