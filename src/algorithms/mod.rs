/// Shortest-path searches: the Dijkstra core and the Yen k-shortest
/// enumeration built on top of it.
pub mod shortest_path;
