use crate::model::Commit;
use crate::util::{first_line, short_sha};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub label: String,
}

/// Directed edge, parent to child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// Commits of one branch plus its merge commit.
///
/// Edges only ever join nodes already in the graph. Duplicate edges are kept.
#[derive(Debug, Clone, Default)]
pub struct CommitGraph {
    nodes: Vec<Node>,
    ids: HashSet<String>,
    edges: Vec<Edge>,
}

impl CommitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node unless one with the same id exists. Returns whether it was added.
    pub fn add_node(&mut self, id: &str, label: &str) -> bool {
        if !self.ids.insert(id.to_string()) {
            return false;
        }
        self.nodes.push(Node {
            id: id.to_string(),
            label: label.to_string(),
        });
        true
    }

    /// Adds `from -> to` when both ends are nodes. Returns whether it was added.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
        });
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

pub fn merge_label(sha: &str) -> String {
    format!("Merged Commit: {}", short_sha(sha))
}

/// Builds the graph for a branch.
///
/// `anchor` is the commit the branch started from, `commits` the branch commits
/// oldest first. Without an anchor the oldest branch commit takes its place
/// for the closing edge into the merge node.
pub fn build_graph(
    anchor: Option<&Commit>,
    commits: &[Commit],
    merge_sha: Option<&str>,
) -> CommitGraph {
    let sequence: Vec<&Commit> = anchor.into_iter().chain(commits.iter()).collect();
    let mut graph = CommitGraph::new();

    for commit in &sequence {
        graph.add_node(&commit.sha, first_line(commit.message()));
    }

    // A merge hash that is already a branch commit would only produce self loops.
    let merge_sha = merge_sha.filter(|sha| {
        let added = graph.add_node(sha, &merge_label(sha));
        if !added {
            tracing::warn!("Merge commit '{}' is already part of the branch", sha);
        }
        added
    });

    if let (Some(merge), Some(last)) = (merge_sha, sequence.last()) {
        if !graph.add_edge(&last.sha, merge) {
            tracing::warn!("Last commit SHA '{}' not found among nodes", last.sha);
        }
    }

    for commit in &sequence {
        for parent in commit.parent_shas() {
            if graph.contains(parent) {
                graph.add_edge(parent, &commit.sha);
            }
        }
    }

    if let (Some(merge), Some(first)) = (merge_sha, sequence.first()) {
        graph.add_edge(&first.sha, merge);
    }

    graph
}
