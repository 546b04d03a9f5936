use ordgraph::{Edge, Graph};

fn build(edges: &[(i32, i32, Option<i32>)]) -> Graph<i32, i32> {
    let mut graph = Graph::new();
    for &(from, to, weight) in edges {
        graph.insert_node(from);
        graph.insert_node(to);
        graph.insert_edge(&from, &to, weight).unwrap();
    }
    graph
}

#[test]
fn empty_graph() {
    assert_eq!(Graph::<i32, i32>::new().to_string(), "\n");
}

#[test]
fn nodes_only() {
    let graph = Graph::<i32, i32>::from([20, 10]);
    assert_eq!(graph.to_string(), "\n10 (\n)\n20 (\n)\n");
}

#[test]
fn single_weighted_edge() {
    let mut graph = Graph::from(["A", "B"]);
    graph.insert_edge(&"A", &"B", Some(5)).unwrap();
    assert_eq!(graph.to_string(), "\nA (\n  A -> B | W | 5\n)\nB (\n)\n");
}

#[test]
fn self_loop_before_other_targets() {
    let graph = build(&[(1, 2, Some(3)), (1, 1, None)]);
    assert_eq!(
        graph.to_string(),
        "\n1 (\n  1 -> 1 | U\n  1 -> 2 | W | 3\n)\n2 (\n)\n"
    );
}

#[test]
fn full_listing() {
    let mut graph = build(&[
        (4, 1, Some(-4)),
        (3, 2, Some(2)),
        (2, 4, None),
        (2, 4, Some(2)),
        (2, 1, Some(1)),
        (4, 1, None),
        (6, 2, Some(5)),
        (6, 3, Some(10)),
        (1, 5, Some(-1)),
        (3, 6, Some(-8)),
        (4, 5, Some(3)),
        (5, 2, None),
    ]);
    graph.insert_node(64);

    let expected = "
1 (
  1 -> 5 | W | -1
)
2 (
  2 -> 1 | W | 1
  2 -> 4 | U
  2 -> 4 | W | 2
)
3 (
  3 -> 2 | W | 2
  3 -> 6 | W | -8
)
4 (
  4 -> 1 | U
  4 -> 1 | W | -4
  4 -> 5 | W | 3
)
5 (
  5 -> 2 | U
)
6 (
  6 -> 2 | W | 5
  6 -> 3 | W | 10
)
64 (
)
";
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn edges_between_print_in_order() {
    let graph = build(&[(1, 2, Some(5)), (1, 2, None), (1, 2, Some(3))]);
    let printed: Vec<_> = graph
        .edges(&1, &2)
        .unwrap()
        .iter()
        .map(Edge::printable)
        .collect();
    assert_eq!(printed, vec!["1 -> 2 | U", "1 -> 2 | W | 3", "1 -> 2 | W | 5"]);
}

#[test]
fn listing_follows_rename() {
    let mut graph = build(&[(1, 2, Some(7)), (2, 3, None)]);
    graph.replace_node(&2, 0).unwrap();
    assert_eq!(
        graph.to_string(),
        "\n0 (\n  0 -> 3 | U\n)\n1 (\n  1 -> 0 | W | 7\n)\n3 (\n)\n"
    );
}
