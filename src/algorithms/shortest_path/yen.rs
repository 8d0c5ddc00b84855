use crate::algorithms::shortest_path::dijkstra;
use crate::algorithms::shortest_path::dijkstra::SearchMask;
use crate::graph::node_not_found_error;
use crate::{Error, Graph, NodeId};
use log::debug;
use nohash::IntSet;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// A path produced or considered by the enumeration, ordered by total cost
/// and then by node sequence so equal-cost candidates pop lexicographically.
struct CandidatePath {
    cost: f64,
    nodes: Vec<usize>,
}

impl Ord for CandidatePath {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.cost < other.cost {
            Ordering::Less
        } else if self.cost > other.cost {
            Ordering::Greater
        } else {
            self.nodes.cmp(&other.nodes)
        }
    }
}

impl PartialOrd for CandidatePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CandidatePath {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.nodes == other.nodes
    }
}

impl Eq for CandidatePath {}

/**
Enumerates up to `k` cheapest loopless paths from `source` to `target`,
ascending by total cost, using Yen's algorithm on top of the Dijkstra core.

Spur searches run against a node/edge mask, never against a modified graph,
and the mask removes every already-visited prefix node, so each returned
path is loopless. Fewer than `k` paths are returned when the graph doesn't
hold that many.

# Examples

```
use pathrs::{Edge, Graph};
use pathrs::algorithms::shortest_path::yen;

let mut graph = Graph::new();
graph.add_edges(vec![
    Edge::with_attribute(1, 2, "w", 2.0),
    Edge::with_attribute(2, 5, "w", 2.0),
    Edge::with_attribute(1, 3, "w", 1.0),
    Edge::with_attribute(3, 4, "w", 1.0),
    Edge::with_attribute(4, 5, "w", 1.0),
]);
let paths = yen::k_shortest_paths(&graph, 1, 5, 2, "w").unwrap();
assert_eq!(paths, vec![vec![1, 3, 4, 5], vec![1, 2, 5]]);
```

# References

1. J. Y. Yen. Finding the k shortest loopless paths in a network. Management Science, 17(11):712–716, 1971.
*/
pub fn k_shortest_paths(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    k: usize,
    weight_name: &str,
) -> Result<Vec<Vec<NodeId>>, Error> {
    let source_index = graph
        .node_index(source)
        .ok_or_else(|| node_not_found_error(source))?;
    let target_index = graph
        .node_index(target)
        .ok_or_else(|| node_not_found_error(target))?;
    if k == 0 {
        return Ok(vec![]);
    }

    let first = dijkstra::shortest_path_by_index(graph, source_index, target_index, weight_name, None)?;
    let (cost, nodes) = match first {
        None => return Ok(vec![]),
        Some(found) => found,
    };

    let mut accepted = vec![CandidatePath { cost, nodes }];
    let mut candidates: BinaryHeap<Reverse<CandidatePath>> = BinaryHeap::new();
    let mut already_seen: HashSet<Vec<usize>> = HashSet::new();
    already_seen.insert(accepted[0].nodes.clone());

    while accepted.len() < k {
        let previous = accepted.last().unwrap().nodes.clone();
        for i in 0..previous.len() - 1 {
            let spur_node = previous[i];
            let root_path = &previous[..i + 1];

            // edges that would recreate an accepted path agreeing on this root
            let mut removed_edges = HashSet::new();
            for path in &accepted {
                if path.nodes.len() > i + 1 && path.nodes[..i + 1] == *root_path {
                    removed_edges.insert((path.nodes[i], path.nodes[i + 1]));
                }
            }
            // root nodes other than the spur node stay off-limits, which is
            // what keeps the concatenated path loopless
            let removed_nodes = root_path[..i].iter().copied().collect::<IntSet<usize>>();
            let mask = SearchMask {
                removed_nodes,
                removed_edges,
            };

            if let Some((_, spur_nodes)) = dijkstra::shortest_path_by_index(
                graph,
                spur_node,
                target_index,
                weight_name,
                Some(&mask),
            )? {
                let mut nodes = root_path[..i].to_vec();
                nodes.extend(spur_nodes);
                if already_seen.insert(nodes.clone()) {
                    let cost = path_cost_by_index(graph, &nodes, weight_name);
                    candidates.push(Reverse(CandidatePath { cost, nodes }));
                }
            }
        }

        match candidates.pop() {
            None => break,
            Some(Reverse(candidate)) => accepted.push(candidate),
        }
    }

    debug!(
        "k-shortest enumeration from {} to {} accepted {} of {} requested paths",
        source,
        target,
        accepted.len(),
        k
    );
    Ok(accepted
        .into_iter()
        .map(|path| path.nodes.iter().map(|&i| graph.node_id(i)).collect())
        .collect())
}

/// Sums the selected weight over the consecutive edges of `nodes`.
fn path_cost_by_index(graph: &Graph, nodes: &[usize], weight_name: &str) -> f64 {
    nodes
        .windows(2)
        .map(|pair| {
            graph
                .successors_by_index(pair[0])
                .get(&pair[1])
                .unwrap()
                .weight(weight_name)
        })
        .sum()
}
