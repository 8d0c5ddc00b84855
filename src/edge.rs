use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/**
A directed edge (`u`, `v`) carrying a map of named `f64` attributes.

A graph holds at most one edge per (`u`, `v`) pair; adding the same pair
again replaces the attribute map. Any attribute can be selected as the
weight when a query runs, see [weight](#method.weight).
**/
#[derive(Clone, Serialize, Deserialize)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub attributes: HashMap<String, f64>,
}

impl Edge {
    /**
    Creates a (`u`, `v`) `Edge` with no attributes.

    ```
    use pathrs::Edge;
    let edges = vec![Edge::new(1, 2), Edge::new(2, 1)];
    ```
    **/
    pub fn new(u: NodeId, v: NodeId) -> Edge {
        Edge {
            u,
            v,
            attributes: HashMap::new(),
        }
    }

    /**
    Creates a (`u`, `v`) `Edge` with a single {`name`: `value`} attribute.

    ```
    use pathrs::Edge;
    let edges = vec![
        Edge::with_attribute(1, 2, "time", 1.0),
        Edge::with_attribute(2, 1, "time", 2.0),
    ];
    ```
    **/
    pub fn with_attribute(u: NodeId, v: NodeId, name: &str, value: f64) -> Edge {
        let attributes = vec![(name.to_string(), value)]
            .into_iter()
            .collect::<HashMap<String, f64>>();
        Edge { u, v, attributes }
    }

    /// Creates a (`u`, `v`) `Edge` with the given attribute map.
    pub fn with_attributes(u: NodeId, v: NodeId, attributes: HashMap<String, f64>) -> Edge {
        Edge { u, v, attributes }
    }

    /**
    Resolves the weight of this edge for a query.

    An empty `weight_name` selects unit weights; a named attribute the edge
    doesn't carry also falls back to `1.0`.

    ```
    use pathrs::Edge;
    let edge = Edge::with_attribute(1, 2, "time", 2.5);
    assert_eq!(edge.weight("time"), 2.5);
    assert_eq!(edge.weight("distance"), 1.0);
    assert_eq!(edge.weight(""), 1.0);
    ```
    **/
    pub fn weight(&self, weight_name: &str) -> f64 {
        if weight_name.is_empty() {
            return 1.0;
        }
        *self.attributes.get(weight_name).unwrap_or(&1.0)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.u == other.u && self.v == other.v
    }
}

impl Eq for Edge {}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("u", &self.u)
            .field("v", &self.v)
            .finish()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.u.hash(state);
        self.v.hash(state);
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        let u_cmp = self.u.cmp(&other.u);
        match u_cmp {
            Ordering::Equal => self.v.cmp(&other.v),
            _ => u_cmp,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_weight_resolution() {
        let edge = Edge::with_attribute(1, 2, "time", 4.0);
        assert_eq!(edge.weight("time"), 4.0);
        assert_eq!(edge.weight("toll"), 1.0);
        assert_eq!(edge.weight(""), 1.0);
        let bare = Edge::new(1, 2);
        assert_eq!(bare.weight("time"), 1.0);
    }
}
