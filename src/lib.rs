#[doc = include_str!("../README.md")]
#[macro_use]
extern crate doc_comment;
doc_comment!(include_str!("../README.md"));

mod edge;
pub use edge::Edge;

mod engine;
pub use engine::PathEngine;

mod error;
pub use error::{Error, ErrorKind};

mod graph;
pub use graph::{Graph, GraphInfo, NodeInfo};

mod node;
pub use node::{Node, NodeId};

pub mod algorithms;
pub mod batch;
pub mod generators;
