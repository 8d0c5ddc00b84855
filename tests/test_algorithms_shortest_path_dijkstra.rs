mod utility;

#[cfg(test)]
mod tests {

    use super::utility::round;
    use assert_approx_eq::assert_approx_eq;
    use pathrs::algorithms::shortest_path::{dijkstra, SearchOptions};
    use pathrs::{generators, Edge, ErrorKind, Graph};

    fn triangle_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edges(vec![
            Edge::with_attribute(1, 2, "w", 1.0),
            Edge::with_attribute(2, 3, "w", 1.0),
            Edge::with_attribute(1, 3, "w", 3.0),
        ]);
        graph
    }

    fn weighted_options() -> SearchOptions {
        SearchOptions {
            weight_name: "w".to_string(),
            ..SearchOptions::default()
        }
    }

    #[test]
    fn test_single_source() {
        let graph = triangle_graph();
        let result = dijkstra::single_source(&graph, 1, &weighted_options()).unwrap();
        assert_eq!(result.costs.len(), 3);
        assert_eq!(result.costs.get(&1), Some(&0.0));
        assert_eq!(result.costs.get(&2), Some(&1.0));
        assert_eq!(result.costs.get(&3), Some(&2.0));
        assert_eq!(result.paths.get(&1), Some(&vec![1]));
        assert_eq!(result.paths.get(&2), Some(&vec![1, 2]));
        assert_eq!(result.paths.get(&3), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_single_source_cutoff() {
        let graph = triangle_graph();
        let options = SearchOptions {
            cutoff: 1.5,
            ..weighted_options()
        };
        let result = dijkstra::single_source(&graph, 1, &options).unwrap();
        assert_eq!(result.costs.len(), 2);
        assert_eq!(result.costs.get(&1), Some(&0.0));
        assert_eq!(result.costs.get(&2), Some(&1.0));
        assert!(result.costs.get(&3).is_none());
        assert_eq!(result.paths.len(), 2);
        assert_eq!(result.paths.get(&2), Some(&vec![1, 2]));
    }

    #[test]
    fn test_centroid_is_not_traversed() {
        let mut graph = triangle_graph();
        graph.set_centroid(2);
        let result = dijkstra::single_source(&graph, 1, &weighted_options()).unwrap();
        // node 2 can still be entered, but no longer shortcuts to node 3
        assert_eq!(result.costs.get(&2), Some(&1.0));
        assert_eq!(result.costs.get(&3), Some(&3.0));
        assert_eq!(result.paths.get(&3), Some(&vec![1, 3]));
    }

    #[test]
    fn test_centroid_source_may_leave() {
        let mut graph = triangle_graph();
        graph.set_centroid(2);
        let result = dijkstra::single_source(&graph, 2, &weighted_options()).unwrap();
        assert_eq!(result.costs.len(), 2);
        assert_eq!(result.costs.get(&2), Some(&0.0));
        assert_eq!(result.costs.get(&3), Some(&1.0));
    }

    #[test]
    fn test_centroid_target_is_reachable() {
        let mut graph = triangle_graph();
        graph.set_centroid(3);
        let options = SearchOptions {
            target: Some(3),
            ..weighted_options()
        };
        let result = dijkstra::single_source(&graph, 1, &options).unwrap();
        assert_eq!(result.costs.get(&3), Some(&2.0));
    }

    #[test]
    fn test_empty_weight_name_counts_hops() {
        let graph = triangle_graph();
        let result = dijkstra::single_source(&graph, 1, &SearchOptions::default()).unwrap();
        assert_eq!(result.costs.get(&2), Some(&1.0));
        // the direct edge is one hop, cheaper than two unit hops via node 2
        assert_eq!(result.costs.get(&3), Some(&1.0));
        assert_eq!(result.paths.get(&3), Some(&vec![1, 3]));
    }

    #[test]
    fn test_missing_weight_attribute_falls_back_to_one() {
        let graph = triangle_graph();
        let options = SearchOptions {
            weight_name: "toll".to_string(),
            ..SearchOptions::default()
        };
        let result = dijkstra::single_source(&graph, 1, &options).unwrap();
        assert_eq!(result.costs.get(&3), Some(&1.0));
    }

    #[test]
    fn test_target_restricts_result() {
        let graph = triangle_graph();
        let options = SearchOptions {
            target: Some(3),
            ..weighted_options()
        };
        let result = dijkstra::single_source(&graph, 1, &options).unwrap();
        assert_eq!(result.costs.len(), 1);
        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.costs.get(&3), Some(&2.0));
        assert_eq!(result.paths.get(&3), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_unreachable_target_yields_empty_result() {
        let graph = triangle_graph();
        let options = SearchOptions {
            target: Some(1),
            ..weighted_options()
        };
        // node 1 has no incoming edges
        let result = dijkstra::single_source(&graph, 3, &options).unwrap();
        assert!(result.costs.is_empty());
        assert!(result.paths.is_empty());
    }

    #[test]
    fn test_multi_source_reports_nearest_source() {
        let mut graph = Graph::new();
        graph.add_edges(vec![
            Edge::with_attribute(1, 2, "w", 5.0),
            Edge::with_attribute(3, 2, "w", 1.0),
            Edge::with_attribute(2, 4, "w", 1.0),
        ]);
        let result = dijkstra::multi_source(&graph, &[1, 3], &weighted_options()).unwrap();
        assert_eq!(result.costs.get(&1), Some(&0.0));
        assert_eq!(result.costs.get(&3), Some(&0.0));
        assert_eq!(result.costs.get(&2), Some(&1.0));
        assert_eq!(result.costs.get(&4), Some(&2.0));
        // paths start at whichever source is nearest
        assert_eq!(result.paths.get(&2), Some(&vec![3, 2]));
        assert_eq!(result.paths.get(&4), Some(&vec![3, 2, 4]));
    }

    #[test]
    fn test_unknown_source_fails() {
        let graph = triangle_graph();
        let result = dijkstra::single_source(&graph, 42, &weighted_options());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::NodeNotFound);
    }

    #[test]
    fn test_unknown_target_fails() {
        let graph = triangle_graph();
        let options = SearchOptions {
            target: Some(42),
            ..weighted_options()
        };
        let result = dijkstra::single_source(&graph, 1, &options);
        assert_eq!(result.unwrap_err().kind, ErrorKind::NodeNotFound);
    }

    #[test]
    fn test_negative_weight_is_contradictory() {
        let mut graph = Graph::new();
        graph.add_edges(vec![
            Edge::with_attribute(1, 2, "w", 1.0),
            Edge::with_attribute(1, 3, "w", 2.0),
            Edge::with_attribute(3, 2, "w", -1.5),
        ]);
        let result = dijkstra::single_source(&graph, 1, &weighted_options());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::ContradictoryPaths);
    }

    #[test]
    fn test_costs_and_paths_cover_the_same_nodes() {
        let graph = triangle_graph();
        let result = dijkstra::single_source(&graph, 1, &weighted_options()).unwrap();
        for node in result.costs.keys() {
            assert!(result.paths.contains_key(node));
        }
        for node in result.paths.keys() {
            assert!(result.costs.contains_key(node));
        }
    }

    #[test]
    fn test_random_graph_invariants() {
        let graph = generators::random::gnp_random_digraph(200, 0.05, "w", Some(7)).unwrap();
        let sources = graph
            .get_all_nodes()
            .iter()
            .take(3)
            .map(|n| n.id)
            .collect::<Vec<i64>>();
        for source in sources {
            let result = dijkstra::single_source(&graph, source, &weighted_options()).unwrap();
            // costs are non-negative and coherent with their paths
            for (node, cost) in &result.costs {
                assert!(*cost >= 0.0);
                let path = result.paths.get(node).unwrap();
                assert_eq!(path.first(), Some(&source));
                assert_eq!(path.last(), Some(node));
                let path_cost: f64 = path
                    .windows(2)
                    .map(|pair| graph.get_link_info(pair[0], pair[1]).unwrap()["w"])
                    .sum();
                assert_approx_eq!(path_cost, *cost, 1e-9);
            }
            // the triangle inequality holds over every settled edge
            for edge in graph.get_all_edges() {
                if let (Some(u_cost), Some(v_cost)) =
                    (result.costs.get(&edge.u), result.costs.get(&edge.v))
                {
                    assert!(round(&(v_cost - u_cost - edge.weight("w")), 9) <= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_random_graph_respects_cutoff() {
        let graph = generators::random::gnp_random_digraph(200, 0.05, "w", Some(11)).unwrap();
        let source = graph.get_all_nodes()[0].id;
        let options = SearchOptions {
            cutoff: 0.5,
            ..weighted_options()
        };
        let result = dijkstra::single_source(&graph, source, &options).unwrap();
        for cost in result.costs.values() {
            assert!(*cost <= 0.5);
        }
    }
}
