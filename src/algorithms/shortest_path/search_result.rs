use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/**
The outcome of a shortest-path search.

`costs` maps every reached node to the cost of the cheapest route from the
nearest source; `paths` maps exactly the same key set to the node sequence
of that route, source and destination inclusive. A node appears in neither
map when it is unreachable, beyond the cutoff, or shadowed by the
single-target restriction; unreachable nodes are never reported as infinite.
*/
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub costs: HashMap<NodeId, f64>,
    pub paths: HashMap<NodeId, Vec<NodeId>>,
}
