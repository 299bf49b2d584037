#![allow(dead_code)]

use ghstat::error::{GhstatError, Result};
use ghstat::github::RepoSource;
use ghstat::model::{
    BranchRef, Commit, CommitDetail, Contributor, ParentRef, PullRequest, Release, RepoInfo, User,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory repository. `None` sections answer with a 404.
#[derive(Default)]
pub struct FakeSource {
    pub releases: Option<Vec<Release>>,
    pub repo: Option<RepoInfo>,
    pub contributors: Option<Vec<Contributor>>,
    pub pulls: Option<Vec<PullRequest>>,
    pub closed_pulls: Option<Vec<PullRequest>>,
    pub pull_commits: HashMap<u64, Vec<Commit>>,
    pub commits: HashMap<String, Commit>,
    pub closed_pulls_status: Option<u16>,
    pub requested_bases: RefCell<Vec<String>>,
    pub requested_commits: RefCell<Vec<String>>,
}

fn failed<T>(what: &str, status: u16) -> Result<T> {
    Err(GhstatError::Status {
        url: what.to_string(),
        status,
    })
}

impl RepoSource for FakeSource {
    fn releases(&self) -> Result<Vec<Release>> {
        self.releases.clone().map_or_else(|| failed("releases", 404), Ok)
    }

    fn repository(&self) -> Result<RepoInfo> {
        self.repo.clone().map_or_else(|| failed("repo", 404), Ok)
    }

    fn contributors(&self) -> Result<Vec<Contributor>> {
        self.contributors
            .clone()
            .map_or_else(|| failed("contributors", 404), Ok)
    }

    fn pull_requests(&self) -> Result<Vec<PullRequest>> {
        self.pulls.clone().map_or_else(|| failed("pulls", 404), Ok)
    }

    fn closed_pull_requests(&self, base: &str) -> Result<Vec<PullRequest>> {
        self.requested_bases.borrow_mut().push(base.to_string());
        if let Some(status) = self.closed_pulls_status {
            return failed("pulls?state=closed", status);
        }
        self.closed_pulls
            .clone()
            .map_or_else(|| failed("pulls?state=closed", 404), Ok)
    }

    fn pull_request_commits(&self, pull: &PullRequest) -> Result<Vec<Commit>> {
        self.pull_commits
            .get(&pull.number)
            .cloned()
            .map_or_else(|| failed(&pull.commits_url, 404), Ok)
    }

    fn commit(&self, sha: &str) -> Result<Commit> {
        self.requested_commits.borrow_mut().push(sha.to_string());
        self.commits
            .get(sha)
            .cloned()
            .map_or_else(|| failed(sha, 404), Ok)
    }
}

pub fn commit(sha: &str, message: &str, parents: &[&str]) -> Commit {
    Commit {
        sha: sha.to_string(),
        commit: CommitDetail {
            message: message.to_string(),
        },
        parents: parents
            .iter()
            .map(|p| ParentRef { sha: p.to_string() })
            .collect(),
    }
}

pub fn pull(number: u64, branch: &str, login: &str, merge_sha: Option<&str>) -> PullRequest {
    PullRequest {
        number,
        state: "closed".to_string(),
        head: BranchRef {
            name: branch.to_string(),
        },
        merged_at: merge_sha.map(|_| "2024-03-01T12:00:00Z".parse().unwrap()),
        merge_commit_sha: merge_sha.map(str::to_string),
        user: Some(User {
            login: login.to_string(),
        }),
        commits_url: format!("https://api.github.com/repos/octo/demo/pulls/{number}/commits{{/sha}}"),
    }
}

pub fn authored(login: &str) -> PullRequest {
    pull(0, "topic", login, None)
}

pub fn release(name: &str, tag: &str) -> Release {
    Release {
        name: Some(name.to_string()),
        tag_name: tag.to_string(),
    }
}
