use super::{build_graph, write_dot, CommitGraph};
use crate::error::{GhstatError, Result};
use crate::github::{RepoSource, CLOSED_PULLS_PAGE_SIZE};
use crate::model::{Commit, PullRequest};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A merged pull request and its commits, oldest first. `commits` is never empty.
#[derive(Debug, Clone)]
pub struct BranchCommits {
    pub pull: PullRequest,
    pub commits: Vec<Commit>,
}

/// Builds the commit graph for `branch` and writes it to `output`.
///
/// Every failure is logged here and ends the graph run only. Returns the
/// written path on success.
pub fn exec(source: &dyn RepoSource, branch: &str, base: &str, output: &Path) -> Option<PathBuf> {
    let graph = match create_commit_graph(source, branch, base) {
        Ok(graph) => graph,
        Err(e) if e.is_not_found() => {
            tracing::warn!("{}", e);
            return None;
        }
        Err(e) => {
            tracing::error!("{}", e);
            return None;
        }
    };

    if let Err(e) = write_dot(&graph, output) {
        tracing::error!("Failed to write commit graph to '{}': {}", output.display(), e);
        return None;
    }

    tracing::info!("Commit graph generated and saved as '{}'", output.display());
    Some(output.to_path_buf())
}

pub fn create_commit_graph(source: &dyn RepoSource, branch: &str, base: &str) -> Result<CommitGraph> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Fetching commits for '{branch}'..."));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = fetch_branch_commits(source, branch, base);
    let BranchCommits { pull, commits } = match result {
        Ok(found) => found,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Fetching branch point...");
    let anchor = match commits.first() {
        Some(oldest) => fetch_anchor(source, oldest),
        None => None,
    };
    pb.finish_and_clear();

    tracing::debug!(
        pull = pull.number,
        commits = commits.len(),
        anchored = anchor.is_some(),
        "building commit graph"
    );
    Ok(build_graph(
        anchor.as_ref(),
        &commits,
        pull.merge_commit_sha.as_deref(),
    ))
}

/// First pull request in API order whose head is `branch` and which was merged.
pub fn find_merged_pull<'a>(pulls: &'a [PullRequest], branch: &str) -> Option<&'a PullRequest> {
    pulls
        .iter()
        .find(|pr| pr.head.name == branch && pr.is_merged())
}

pub fn fetch_branch_commits(
    source: &dyn RepoSource,
    branch: &str,
    base: &str,
) -> Result<BranchCommits> {
    let pulls = source
        .closed_pull_requests(base)
        .map_err(|e| GhstatError::PullRequestList(Box::new(e)))?;

    let pull = find_merged_pull(&pulls, branch)
        .cloned()
        .ok_or_else(|| GhstatError::NoMergedPullRequest {
            branch: branch.to_string(),
            truncated: pulls.len() >= CLOSED_PULLS_PAGE_SIZE,
        })?;
    tracing::debug!("Branch '{}' was merged by pull request #{}", branch, pull.number);

    let commits = source
        .pull_request_commits(&pull)
        .map_err(|e| GhstatError::BranchCommits {
            branch: branch.to_string(),
            source: Box::new(e),
        })?;
    if commits.is_empty() {
        return Err(GhstatError::EmptyBranch(branch.to_string()));
    }

    Ok(BranchCommits { pull, commits })
}

/// Fetches the first parent of `oldest`, the commit the branch grew from.
/// Failures are logged and give `None`.
pub fn fetch_anchor(source: &dyn RepoSource, oldest: &Commit) -> Option<Commit> {
    let Some(parent) = oldest.parent_shas().next() else {
        tracing::warn!("Commit '{}' has no parent, graph has no branch point", oldest.sha);
        return None;
    };

    tracing::info!("Fetching commit information for commit '{}'", oldest.sha);
    match source.commit(parent) {
        Ok(commit) => {
            tracing::debug!("Parent commit hash for commit '{}' is: {}", oldest.sha, parent);
            Some(commit)
        }
        Err(e) => {
            tracing::error!(
                "Failed to fetch commit information for commit '{}': {}",
                oldest.sha,
                e
            );
            None
        }
    }
}
