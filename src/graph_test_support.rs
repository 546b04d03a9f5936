use std::fmt::Debug;

use derivative::Derivative;
use quickcheck::{Arbitrary, Gen};

use crate::{Graph, tracing_support::init_tracing};

/// A randomly generated graph for property tests.  Generated graphs include
/// self-loops, parallel edges, and a mix of weighted and unweighted edges.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Ord + Clone, E: PartialOrd + Clone"),
    Debug(bound = "N: Ord + Clone + Debug, E: PartialOrd + Clone + Debug")
)]
pub struct ArbGraph<N, E> {
    pub graph: Graph<N, E>,
}

impl<N, E> Arbitrary for ArbGraph<N, E>
where
    N: Arbitrary + Ord + Clone + Debug,
    E: Arbitrary + PartialOrd + Clone + Debug,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 12; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 40;
        let num_extra_parallel_edges = usize::arbitrary(g) % 5;
        let num_extra_self_loops = usize::arbitrary(g) % 5;

        let mut graph = Graph::new();
        for _ in 0..num_nodes {
            graph.insert_node(N::arbitrary(g));
        }
        let nodes = graph.nodes();

        for i in 0..num_edges {
            if nodes.is_empty() {
                break;
            }
            let source = &nodes[usize::arbitrary(g) % nodes.len()];
            let target = &nodes[usize::arbitrary(g) % nodes.len()];
            graph
                .insert_edge(source, target, Option::<E>::arbitrary(g))
                .expect("generated nodes exist");
            if i < num_extra_parallel_edges {
                graph
                    .insert_edge(source, target, Option::<E>::arbitrary(g))
                    .expect("generated nodes exist");
            }
            if i < num_extra_self_loops {
                graph
                    .insert_edge(source, source, Option::<E>::arbitrary(g))
                    .expect("generated nodes exist");
            }
        }

        ArbGraph { graph }
    }
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<N, E>(graph: &Graph<N, E>)
where
    N: Ord + Clone + Debug,
    E: PartialOrd + Clone + Debug,
{
    init_tracing();

    // Nodes are unique, sorted, and each owns exactly one arena slot.
    let nodes = graph.nodes();
    assert!(nodes.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", nodes);
    assert_eq!(graph.nodes.slots_in_use(), graph.num_nodes());

    // Edge keys are strictly increasing.
    let keys: Vec<_> = graph.edges.iter().collect();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(keys.len(), graph.num_edges());
    assert_eq!(graph.iter().len(), graph.num_edges());

    // Every edge is linked to the live nodes it names.
    for (edge, links) in graph.edges.iter_links() {
        assert_eq!(graph.nodes.value(links.src), Some(edge.source()));
        assert_eq!(graph.nodes.value(links.dst), Some(edge.target()));
        assert_eq!(graph.nodes.find_identity(edge.source()), Some(links.src));
        assert_eq!(graph.nodes.find_identity(edge.target()), Some(links.dst));
    }
}
