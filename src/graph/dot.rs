use super::CommitGraph;
use crate::error::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Quotes a DOT identifier or label. Only `"` and `\` are escaped.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Serializes the graph as a Graphviz digraph.
pub fn render_dot(graph: &CommitGraph) -> String {
    let mut out = String::new();
    out.push_str("digraph commits {\n");
    for node in graph.nodes() {
        let _ = writeln!(out, "{} [label={}];", quote(&node.id), quote(&node.label));
    }
    for edge in graph.edges() {
        let _ = writeln!(out, "{} -> {};", quote(&edge.from), quote(&edge.to));
    }
    out.push_str("}\n");
    out
}

pub fn write_dot(graph: &CommitGraph, path: &Path) -> Result<()> {
    std::fs::write(path, render_dot(graph))?;
    Ok(())
}
