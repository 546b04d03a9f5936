//! The edge model.  An [`Edge`] is a single directed connection between two
//! node values, optionally carrying a weight.
//!
//! Edges between the same pair of nodes are ordered so that the unweighted
//! edge (there is at most one) comes first, followed by the weighted edges in
//! ascending order of weight.  This ordering is only meaningful between edges
//! that share both endpoints; the graph uses it to order and deduplicate its
//! edge storage.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// A directed edge from `src` to `dst`, with or without a weight.
#[derive(Clone, Debug, Hash)]
pub enum Edge<N, E> {
    Weighted { src: N, dst: N, weight: E },
    Unweighted { src: N, dst: N },
}

impl<N, E> Edge<N, E> {
    /// Creates a weighted edge if `weight` is present and an unweighted edge
    /// otherwise.
    pub fn new(src: N, dst: N, weight: Option<E>) -> Self {
        match weight {
            Some(weight) => Edge::Weighted { src, dst, weight },
            None => Edge::Unweighted { src, dst },
        }
    }

    /// Returns true if the edge was constructed with a weight.
    pub fn is_weighted(&self) -> bool {
        matches!(self, Edge::Weighted { .. })
    }

    /// Gets the weight of the edge, or `None` for an unweighted edge.
    pub fn weight(&self) -> Option<&E> {
        match self {
            Edge::Weighted { weight, .. } => Some(weight),
            Edge::Unweighted { .. } => None,
        }
    }

    /// Gets the source node of the edge.
    pub fn source(&self) -> &N {
        match self {
            Edge::Weighted { src, .. } | Edge::Unweighted { src, .. } => src,
        }
    }

    /// Gets the destination node of the edge.
    pub fn target(&self) -> &N {
        match self {
            Edge::Weighted { dst, .. } | Edge::Unweighted { dst, .. } => dst,
        }
    }

    /// Gets copies of the source and destination nodes.
    pub fn nodes(&self) -> (N, N)
    where
        N: Clone,
    {
        (self.source().clone(), self.target().clone())
    }

    /// Gets the edge as the `(from, to, weight)` triple that cursors and
    /// iterators yield.
    pub fn to_value(&self) -> EdgeValue<N, E>
    where
        N: Clone,
        E: Clone,
    {
        EdgeValue {
            from: self.source().clone(),
            to: self.target().clone(),
            weight: self.weight().cloned(),
        }
    }

    /// Gets the printed form of the edge: `"src -> dst | W | weight"` or
    /// `"src -> dst | U"`.
    pub fn printable(&self) -> String
    where
        N: Display,
        E: Display,
    {
        self.to_string()
    }

    /// Rewrites the recorded endpoints.  Only used when a node the edge refers
    /// to is renamed or merged away.
    pub(crate) fn set_nodes(&mut self, new_src: N, new_dst: N) {
        match self {
            Edge::Weighted { src, dst, .. } | Edge::Unweighted { src, dst } => {
                *src = new_src;
                *dst = new_dst;
            }
        }
    }

    /// Orders two edges that share endpoints: unweighted before weighted,
    /// weighted by ascending weight.  Weights that do not compare (NaN) are
    /// treated as greater.
    pub(crate) fn cmp_weight(&self, other: &Self) -> Ordering
    where
        E: PartialOrd,
    {
        match (self.weight(), other.weight()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(rhs).unwrap_or(Ordering::Greater),
        }
    }
}

impl<N, E> PartialEq for Edge<N, E>
where
    N: PartialEq,
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
            && self.target() == other.target()
            && self.weight() == other.weight()
    }
}

impl<N, E> Display for Edge<N, E>
where
    N: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Weighted { src, dst, weight } => write!(f, "{} -> {} | W | {}", src, dst, weight),
            Edge::Unweighted { src, dst } => write!(f, "{} -> {} | U", src, dst),
        }
    }
}

/// An edge copied out of a graph as a plain triple.  Changing it never
/// affects the graph it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeValue<N, E> {
    pub from: N,
    pub to: N,
    pub weight: Option<E>,
}

impl<N, E> From<EdgeValue<N, E>> for Edge<N, E> {
    fn from(value: EdgeValue<N, E>) -> Self {
        Edge::new(value.from, value.to, value.weight)
    }
}
