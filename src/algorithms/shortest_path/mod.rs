use crate::NodeId;

mod search_result;
pub use search_result::SearchResult;

pub mod dijkstra;
pub mod yen;

/**
Per-query settings for a shortest-path search.

The defaults describe an unrestricted search: no target, no cutoff, unit
weights.

# Example: searching with a cutoff

```
use pathrs::algorithms::shortest_path::SearchOptions;
let options = SearchOptions {
    cutoff: 1.5,
    ..SearchOptions::default()
};
```
*/
#[derive(Clone, Debug)]
pub struct SearchOptions {
    /// Restrict the result to a single node and stop the search as soon as
    /// that node settles. `None` searches the whole reachable graph.
    pub target: Option<NodeId>,
    /// Upper bound on path cost; relaxations beyond it are pruned.
    /// `f64::INFINITY` disables the bound.
    pub cutoff: f64,
    /// Name of the edge attribute used as the weight. The empty string
    /// selects unit weights; edges lacking the named attribute weigh `1.0`.
    pub weight_name: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            target: None,
            cutoff: f64::INFINITY,
            weight_name: String::new(),
        }
    }
}
