use std::fmt::{self, Display};

/// The graph operations that require their endpoint nodes to exist.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    InsertEdge,
    ReplaceNode,
    MergeReplaceNode,
    EraseEdge,
    IsConnected,
    Edges,
    Connections,
}

impl Operation {
    /// Gets the name of the [`Graph`](crate::Graph) method this operation
    /// corresponds to.
    pub fn method_name(&self) -> &'static str {
        match self {
            Operation::InsertEdge => "insert_edge",
            Operation::ReplaceNode => "replace_node",
            Operation::MergeReplaceNode => "merge_replace_node",
            Operation::EraseEdge => "erase_edge",
            Operation::IsConnected => "is_connected",
            Operation::Edges => "edges",
            Operation::Connections => "connections",
        }
    }

    /// Gets the fixed message reported when this operation's precondition
    /// fails.
    pub fn message(&self) -> &'static str {
        match self {
            Operation::InsertEdge => {
                "Cannot call Graph::insert_edge when either src or dst node does not exist"
            }
            Operation::ReplaceNode => {
                "Cannot call Graph::replace_node on a node that doesn't exist"
            }
            Operation::MergeReplaceNode => {
                "Cannot call Graph::merge_replace_node on old or new data if they don't exist in the graph"
            }
            Operation::EraseEdge => {
                "Cannot call Graph::erase_edge on src or dst if they don't exist in the graph"
            }
            Operation::IsConnected => {
                "Cannot call Graph::is_connected if src or dst node don't exist in the graph"
            }
            Operation::Edges => {
                "Cannot call Graph::edges if src or dst node don't exist in the graph"
            }
            Operation::Connections => {
                "Cannot call Graph::connections if src doesn't exist in the graph"
            }
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph::{}", self.method_name())
    }
}

/// Errors raised when an operation's preconditions are violated.  Soft
/// failures, such as inserting a duplicate node, are reported through `bool`
/// return values instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// One or more nodes the operation requires are not in the graph.
    #[error("{}", .0.message())]
    NodeNotFound(Operation),
}

impl GraphError {
    /// Gets the operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            GraphError::NodeNotFound(operation) => *operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
