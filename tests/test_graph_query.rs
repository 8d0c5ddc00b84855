#[cfg(test)]
mod tests {

    use assert_unordered::assert_eq_unordered;
    use pathrs::{Edge, ErrorKind, Graph, GraphInfo, NodeInfo};

    fn fan_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edges(vec![
            Edge::with_attribute(1, 2, "w", 1.0),
            Edge::with_attribute(1, 3, "w", 2.0),
            Edge::with_attribute(3, 2, "w", 1.0),
            Edge::with_attribute(2, 4, "w", 4.0),
        ]);
        graph.set_centroid(4);
        graph
    }

    #[test]
    fn test_get_graph_info() {
        let graph = fan_graph();
        assert_eq!(
            graph.get_graph_info(),
            GraphInfo {
                nodes: 4,
                edges: 4,
                centroids: 1,
            }
        );
    }

    #[test]
    fn test_get_node_info() {
        let graph = fan_graph();
        assert_eq!(
            graph.get_node_info(2).unwrap(),
            NodeInfo {
                in_degree: 2,
                out_degree: 1,
                centroid: false,
            }
        );
        assert_eq!(
            graph.get_node_info(4).unwrap(),
            NodeInfo {
                in_degree: 1,
                out_degree: 0,
                centroid: true,
            }
        );
    }

    #[test]
    fn test_get_node_info_not_found() {
        let graph = fan_graph();
        let result = graph.get_node_info(42);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::NodeNotFound);
    }

    #[test]
    fn test_get_link_info() {
        let graph = fan_graph();
        let attributes = graph.get_link_info(1, 3).unwrap();
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get("w"), Some(&2.0));
    }

    #[test]
    fn test_get_link_info_not_found() {
        let graph = fan_graph();
        assert_eq!(
            graph.get_link_info(3, 1).unwrap_err().kind,
            ErrorKind::EdgeNotFound
        );
        assert_eq!(
            graph.get_link_info(1, 42).unwrap_err().kind,
            ErrorKind::EdgeNotFound
        );
    }

    #[test]
    fn test_degrees() {
        let graph = fan_graph();
        assert_eq!(graph.get_node_in_degree(2).unwrap(), 2);
        assert_eq!(graph.get_node_out_degree(1).unwrap(), 2);
        assert_eq!(graph.get_node_out_degree(4).unwrap(), 0);
        assert_eq!(
            graph.get_node_in_degree(42).unwrap_err().kind,
            ErrorKind::NodeNotFound
        );
    }

    #[test]
    fn test_degree_unchanged_by_edge_replacement() {
        let mut graph = fan_graph();
        graph.add_edge(Edge::with_attribute(1, 2, "w", 8.0));
        assert_eq!(graph.get_node_in_degree(2).unwrap(), 2);
        assert_eq!(graph.get_node_out_degree(1).unwrap(), 2);
    }

    #[test]
    fn test_get_all_nodes_and_edges() {
        let graph = fan_graph();
        let node_ids = graph
            .get_all_nodes()
            .iter()
            .map(|n| n.id)
            .collect::<Vec<i64>>();
        assert_eq_unordered!(node_ids, vec![1, 2, 3, 4]);
        let edge_pairs = graph
            .get_all_edges()
            .iter()
            .map(|e| (e.u, e.v))
            .collect::<Vec<(i64, i64)>>();
        assert_eq_unordered!(edge_pairs, vec![(1, 2), (1, 3), (3, 2), (2, 4)]);
    }
}
