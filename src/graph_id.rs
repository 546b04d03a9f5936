#[cfg(not(feature = "unchecked"))]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of graph identifiers.  Wrapping around after `usize::MAX` graphs
/// could let a cursor from one graph pass as belonging to another; the check
/// is a debugging aid, so that is tolerated.
#[cfg(not(feature = "unchecked"))]
static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// Identifies one graph instance, so that cursors can be checked against the
/// graph they are used with.  With the `unchecked` feature every graph shares
/// the same (zero-sized) identifier.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct GraphId(#[cfg(not(feature = "unchecked"))] usize);

impl GraphId {
    /// Creates an identifier no other live graph has.
    pub fn fresh() -> Self {
        #[cfg(feature = "unchecked")]
        {
            GraphId()
        }
        #[cfg(not(feature = "unchecked"))]
        {
            GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
        }
    }
}
