use std::fmt;

/// The error type returned by all fallible engine operations.
#[derive(Clone, Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operation referenced a node that is not in the graph.
    NodeNotFound,
    /// An operation referenced an edge that is not in the graph.
    EdgeNotFound,
    /// A query asked for a search method other than `"Dijkstra"`.
    WrongMethod,
    /// An argument was rejected at the boundary, before touching the graph.
    InvalidArgument,
    /// A single-pair query found no route to the target.
    NoPath,
    /// A settled node was relaxed to a smaller distance; some traversed
    /// edge must have a negative weight.
    ContradictoryPaths,
    /// A worker pool could not be constructed.
    Internal,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}
