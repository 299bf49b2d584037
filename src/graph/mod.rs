pub mod build;
pub mod dot;
pub mod exec;

pub use build::{build_graph, CommitGraph, Edge, Node};
pub use dot::{render_dot, write_dot};
pub use exec::{create_commit_graph, exec, find_merged_pull, BranchCommits};
