//! Blocking GitHub REST client.
//!
//! Uses `ureq` with HTTP status errors turned off, so that non-200 replies
//! come back as [`GhstatError::Status`] carrying the code.

use super::{RepoSource, CLOSED_PULLS_PAGE_SIZE};
use crate::error::{GhstatError, Result};
use crate::model::{Commit, Contributor, PullRequest, Release, RepoInfo};
use crate::util::strip_url_template;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

pub struct GitHubClient {
    agent: ureq::Agent,
    authorization: String,
    base_url: String,
}

impl GitHubClient {
    pub fn new(api_url: &str, token: &str, owner: &str, repo: &str) -> Self {
        let base_url = format!("{}/repos/{owner}/{repo}", api_url.trim_end_matches('/'));
        Self {
            agent: ureq::Agent::new_with_config(
                ureq::config::Config::builder()
                    .http_status_as_error(false)
                    .build(),
            ),
            authorization: format!("Bearer {token}"),
            base_url,
        }
    }

    /// Repository root, `<api>/repos/<owner>/<repo>`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// One GET against `url`. Anything but 200 is an error.
    pub fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        tracing::debug!("Fetching {} {:?}", url, query);

        let mut request = self
            .agent
            .get(url)
            .header("Authorization", &self.authorization)
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION);
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        let mut response = request.call()?;
        let status = response.status().as_u16();
        if status != 200 {
            return Err(GhstatError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .body_mut()
            .read_json::<T>()
            .map_err(|e| GhstatError::Decode(format!("{url}: {e}")))
    }
}

impl RepoSource for GitHubClient {
    fn releases(&self) -> Result<Vec<Release>> {
        self.get(&self.endpoint("releases"), &[])
    }

    fn repository(&self) -> Result<RepoInfo> {
        self.get(&self.endpoint(""), &[])
    }

    fn contributors(&self) -> Result<Vec<Contributor>> {
        self.get(&self.endpoint("contributors"), &[])
    }

    fn pull_requests(&self) -> Result<Vec<PullRequest>> {
        self.get(&self.endpoint("pulls"), &[("state", "all")])
    }

    fn closed_pull_requests(&self, base: &str) -> Result<Vec<PullRequest>> {
        let per_page = CLOSED_PULLS_PAGE_SIZE.to_string();
        self.get(
            &self.endpoint("pulls"),
            &[("state", "closed"), ("base", base), ("per_page", per_page.as_str())],
        )
    }

    fn pull_request_commits(&self, pull: &PullRequest) -> Result<Vec<Commit>> {
        self.get(strip_url_template(&pull.commits_url), &[])
    }

    fn commit(&self, sha: &str) -> Result<Commit> {
        self.get(&self.endpoint(&format!("commits/{sha}")), &[])
    }
}
