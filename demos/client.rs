//! Builds a small word graph, prints it and a copy of it, then walks its
//! edges.
//!
//! Usage:
//!   cargo run --example client
//!   cargo run --example client -- --reverse --no-copy

use clap::Parser;
use ordgraph::{EdgeValue, Graph, Result, tracing_support::init_tracing};

/// Print a sample graph and list its edges.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Walk the edges from last to first
    #[arg(long)]
    reverse: bool,

    /// Skip printing a copy of the graph
    #[arg(long)]
    no_copy: bool,
}

fn build() -> Result<Graph<String, i32>> {
    let mut graph: Graph<String, i32> = ["hello", "how", "are", "you?"]
        .map(String::from)
        .into();
    let edges = [
        ("hello", "how", 5),
        ("hello", "are", 8),
        ("hello", "are", 2),
        ("how", "you?", 1),
        ("how", "hello", 4),
        ("are", "you?", 3),
    ];
    for (from, to, weight) in edges {
        graph.insert_edge(&from.to_string(), &to.to_string(), Some(weight))?;
    }
    Ok(graph)
}

fn describe(edge: &EdgeValue<String, i32>) -> String {
    match edge.weight {
        Some(weight) => format!("{} -> {} (weight {})", edge.from, edge.to, weight),
        None => format!("{} -> {} (no weight)", edge.from, edge.to),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let graph = build()?;
    println!("{}", graph);

    if !args.no_copy {
        let copy = graph.clone();
        println!("{}", copy);
    }

    let edges: Vec<_> = if args.reverse {
        graph.iter().rev().collect()
    } else {
        graph.iter().collect()
    };
    for edge in &edges {
        println!("{}", describe(edge));
    }
    Ok(())
}
