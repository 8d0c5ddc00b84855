use crate::{Edge, Error, ErrorKind, Graph};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/**
Returns an Erdos-Renyi (binomial) random directed graph whose edges carry a
uniformly random weight in `(0.0, 1.0)` under the `weight_name` attribute.

Nodes are created by the edges that mention them, so isolated candidates are
not present in the returned graph.

# Arguments

* `num_nodes`: The number of candidate nodes.
* `edge_probability`: The probability for edge creation.
* `weight_name`: The attribute name the random weights are stored under.
* `seed`: Seeds the random-number generator so runs are reproducible.

# Examples

```
use pathrs::generators;
let graph = generators::random::gnp_random_digraph(250, 0.25, "w", Some(1));
assert!(graph.is_ok());
```
*/
pub fn gnp_random_digraph(
    num_nodes: i64,
    edge_probability: f64,
    weight_name: &str,
    seed: Option<u64>,
) -> Result<Graph, Error> {
    if edge_probability <= 0.0 || edge_probability >= 1.0 {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: format!(
                "`edge_probability` was {} but it must be between 0.0 and 1.0, non-inclusive.",
                edge_probability
            ),
        });
    }
    let mut rng = get_random_number_generator(seed);
    let mut graph = Graph::new();
    let lp = (1.0 - edge_probability).ln();
    let mut v: i64 = 0;
    let mut w: i64 = -1;
    while v < num_nodes {
        let lr: f64 = (1.0_f64 - rng.gen::<f64>()).ln();
        w = w + 1 + ((lr / lp) as i64);
        if v == w {
            w += 1;
        }
        while v < num_nodes && num_nodes <= w {
            w -= num_nodes;
            v += 1;
            if v == w {
                w += 1;
            }
        }
        if v < num_nodes {
            graph.add_edge(Edge::with_attribute(v, w, weight_name, rng.gen::<f64>()));
        }
    }
    Ok(graph)
}

fn get_random_number_generator(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        None => Box::new(rand::thread_rng()),
        Some(s) => Box::new(ChaCha20Rng::seed_from_u64(s)),
    }
}
