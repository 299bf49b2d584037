pub mod client;

pub use client::GitHubClient;

use crate::error::Result;
use crate::model::{Commit, Contributor, PullRequest, Release, RepoInfo};

/// Page size of the closed pull request listing. Only one page is fetched.
pub const CLOSED_PULLS_PAGE_SIZE: usize = 100;

/// Read access to one repository on the hosting platform.
///
/// Every call is a single attempt; a failed call comes back as an error and the
/// caller picks its own fallback.
pub trait RepoSource {
    fn releases(&self) -> Result<Vec<Release>>;

    fn repository(&self) -> Result<RepoInfo>;

    fn contributors(&self) -> Result<Vec<Contributor>>;

    /// All pull requests, open and closed.
    fn pull_requests(&self) -> Result<Vec<PullRequest>>;

    /// Closed pull requests targeting `base`, capped at [`CLOSED_PULLS_PAGE_SIZE`].
    fn closed_pull_requests(&self, base: &str) -> Result<Vec<PullRequest>>;

    /// Commits of a pull request, oldest first.
    fn pull_request_commits(&self, pull: &PullRequest) -> Result<Vec<Commit>>;

    fn commit(&self, sha: &str) -> Result<Commit>;
}
