//! Reading and writing graphs and hypergraphs.
//!
//! # DIMACS graph format
//!
//! ```text
//! c comment
//! p edge <nodes> <edges>   # undirected; "p arc" declares a directed graph
//! e <u> <v>                # edge between 1-indexed nodes ("a <u> <v>" for arcs)
//! ```
//!
//! Node `i` is named `v<i>`. All declared nodes exist, even without edges.
//!
//! # Hypergraph format
//!
//! ```text
//! # comment
//! nodes v1 v2 v3 v4        # node declarations, may be repeated
//! e1: v1 v2 v3             # hyperedge id, colon, members
//! e2: v3 v4
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::InvalidInput;
use crate::graph::Graph;
use crate::hypergraph::Hypergraph;

/// Error type for I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed content.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Well-formed content describing an invalid graph.
    #[error("Invalid input: {0}")]
    Input(#[from] InvalidInput),
}

fn parse_error(line_num: usize, message: impl AsRef<str>) -> IoError {
    IoError::Parse(format!("line {}: {}", line_num + 1, message.as_ref()))
}

/// Reads a DIMACS graph file.
pub fn read_dimacs<P: AsRef<Path>>(path: P) -> Result<Graph, IoError> {
    parse_dimacs(&fs::read_to_string(path)?)
}

/// Parses DIMACS graph content.
pub fn parse_dimacs(content: &str) -> Result<Graph, IoError> {
    let mut graph: Option<Graph> = None;
    let mut num_nodes = 0;

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "p" => {
                if graph.is_some() {
                    return Err(parse_error(line_num, "duplicate problem line"));
                }
                if parts.len() < 4 {
                    return Err(parse_error(line_num, format!("expected 'p edge N M', got '{}'", line)));
                }
                let mut g = match parts[1] {
                    "edge" | "col" => Graph::new(),
                    "arc" => Graph::new_directed(),
                    other => return Err(parse_error(line_num, format!("unsupported problem type '{}'", other))),
                };
                num_nodes = parts[2]
                    .parse::<usize>()
                    .map_err(|_| parse_error(line_num, format!("invalid node count '{}'", parts[2])))?;
                for i in 1..=num_nodes {
                    g.add_node(format!("v{}", i));
                }
                graph = Some(g);
            }
            "e" | "a" => {
                let g = graph
                    .as_mut()
                    .ok_or_else(|| parse_error(line_num, "edge before problem line"))?;
                if parts.len() < 3 {
                    return Err(parse_error(line_num, format!("expected '{} U V', got '{}'", parts[0], line)));
                }
                let endpoint = |s: &str| -> Result<usize, IoError> {
                    let i = s
                        .parse::<usize>()
                        .map_err(|_| parse_error(line_num, format!("invalid node '{}'", s)))?;
                    if i == 0 || i > num_nodes {
                        return Err(parse_error(line_num, format!("node {} out of range 1..={}", i, num_nodes)));
                    }
                    Ok(i)
                };
                let u = endpoint(parts[1])?;
                let v = endpoint(parts[2])?;
                g.add_edge_named(&format!("v{}", u), &format!("v{}", v))?;
            }
            other => return Err(parse_error(line_num, format!("unknown line type '{}'", other))),
        }
    }

    graph.ok_or_else(|| IoError::Parse("missing problem line".into()))
}

/// Renders a graph in DIMACS format, numbering present nodes in insertion order.
///
/// Node names are kept as `c <number> <name>` comment lines.
pub fn to_dimacs(graph: &Graph) -> String {
    let mut output = String::new();
    let mut number = vec![0usize; graph.capacity()];
    for (i, node) in graph.nodes().enumerate() {
        number[node.index()] = i + 1;
        output.push_str(&format!("c {} {}\n", i + 1, graph.name(node)));
    }

    let (problem, line) = if graph.is_directed() { ("arc", "a") } else { ("edge", "e") };
    output.push_str(&format!("p {} {} {}\n", problem, graph.node_count(), graph.edge_count()));
    for (u, v) in graph.edges() {
        output.push_str(&format!("{} {} {}\n", line, number[u.index()], number[v.index()]));
    }
    output
}

/// Writes a graph to a DIMACS file.
pub fn write_dimacs<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<(), IoError> {
    fs::write(path, to_dimacs(graph))?;
    Ok(())
}

/// Reads a hypergraph file.
pub fn read_hypergraph<P: AsRef<Path>>(path: P) -> Result<Hypergraph, IoError> {
    parse_hypergraph(&fs::read_to_string(path)?)
}

/// Parses hypergraph content.
pub fn parse_hypergraph(content: &str) -> Result<Hypergraph, IoError> {
    let mut hg = Hypergraph::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("nodes ") {
            hg.add_nodes(rest.split_whitespace());
        } else if let Some((id, members)) = line.split_once(':') {
            let id = id.trim();
            if id.is_empty() || id.contains(char::is_whitespace) {
                return Err(parse_error(line_num, format!("invalid hyperedge id '{}'", id)));
            }
            if hg.edge(id).is_some() {
                return Err(parse_error(line_num, format!("duplicate hyperedge '{}'", id)));
            }
            hg.add_edge(id, members.split_whitespace());
        } else {
            return Err(parse_error(line_num, format!("expected 'nodes ...' or 'ID: ...', got '{}'", line)));
        }
    }

    Ok(hg)
}

/// Renders a hypergraph in the format read by [`parse_hypergraph`].
pub fn to_hypergraph_string(hg: &Hypergraph) -> String {
    let mut output = format!("nodes {}\n", hg.nodes().join(" "));
    for (id, members) in hg.edges() {
        output.push_str(&format!("{}: {}\n", id, members.join(" ")));
    }
    output
}
