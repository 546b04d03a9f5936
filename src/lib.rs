//! An in-memory, directed, weighted multigraph over ordered node values.
//!
//! A [`Graph<N, E>`] holds unique nodes of type `N` and directed edges
//! between them, each either unweighted or carrying a weight of type `E`.
//! Nodes and edges are always kept sorted, so iteration, printing, and
//! queries return results in a deterministic order.
//!
//! ```
//! use ordgraph::Graph;
//!
//! let mut graph = Graph::from(["A", "B"]);
//! graph.insert_edge(&"A", &"B", Some(5)).unwrap();
//! graph.replace_node(&"A", "C").unwrap();
//! assert_eq!(graph.connections(&"C").unwrap(), vec!["B"]);
//! assert_eq!(graph.to_string(), "\nB (\n)\nC (\n  C -> B | W | 5\n)\n");
//! ```

pub mod cursor;
pub mod edge;
pub mod error;
pub mod graph;
pub mod tracing_support;

mod edge_store;
mod format;
mod graph_id;
mod id_vec;
mod node_store;

#[cfg(test)]
mod graph_test_support;

pub use cursor::{EdgeCursor, Iter};
pub use edge::{Edge, EdgeValue};
pub use error::{GraphError, Operation, Result};
pub use graph::Graph;
