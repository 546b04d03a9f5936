//! Text renderings of a graph.
//!
//! `Display` writes the printed form: a leading newline, then one block per
//! node in ascending order listing its outgoing edges in storage order.
//!
//! ```text
//!
//! A (
//!   A -> B | W | 5
//! )
//! B (
//! )
//! ```
//!
//! `Debug` writes `Graph { nodes: [..], edges: {..} }`, with each edge shown
//! as `src -> dst` mapped to its weight.

use std::fmt::{self, Debug, Display, Formatter};

use crate::{Graph, edge::Edge, edge_store::EdgeKey};

impl<N, E> Display for Graph<N, E>
where
    N: Ord + Clone + Display,
    E: PartialOrd + Clone + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        // Both sequences are sorted by source, so one pass over each suffices.
        let mut edges = self.edges.iter().map(EdgeKey::edge).peekable();
        for node in self.nodes.iter() {
            writeln!(f, "{} (", node)?;
            while let Some(edge) = edges.next_if(|edge| edge.source() == node) {
                writeln!(f, "  {}", edge)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

struct EdgeTag<'a, N>(&'a N, &'a N);

impl<N: Debug> Debug for EdgeTag<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.0, self.1)
    }
}

struct NodeDebug<'a, N>(&'a [N]);

impl<N: Debug> Debug for NodeDebug<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0).finish()
    }
}

struct EdgeDebug<'a, N, E>(&'a [&'a Edge<N, E>]);

impl<N: Debug, E: Debug> Debug for EdgeDebug<'_, N, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .iter()
                    .map(|edge| (EdgeTag(edge.source(), edge.target()), edge.weight())),
            )
            .finish()
    }
}

impl<N, E> Debug for Graph<N, E>
where
    N: Ord + Clone + Debug,
    E: PartialOrd + Clone + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let nodes: Vec<&N> = self.nodes.iter().collect();
        let edges: Vec<&Edge<N, E>> = self.edges.iter().map(EdgeKey::edge).collect();
        f.debug_struct("Graph")
            .field("nodes", &NodeDebug(&nodes))
            .field("edges", &EdgeDebug(&edges))
            .finish()
    }
}
