use thiserror::Error;

pub type Result<T> = std::result::Result<T, GhstatError>;

#[derive(Error, Debug)]
pub enum GhstatError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No merged pull request found for branch '{branch}'{}", truncation_note(.truncated))]
    NoMergedPullRequest { branch: String, truncated: bool },
    #[error("Failed to fetch pull requests: {0}")]
    PullRequestList(Box<GhstatError>),
    #[error("Failed to fetch commits for branch '{branch}': {source}")]
    BranchCommits {
        branch: String,
        source: Box<GhstatError>,
    },
    #[error("Branch '{0}' has no commits")]
    EmptyBranch(String),
}

fn truncation_note(truncated: &bool) -> &'static str {
    if *truncated {
        " (only the first page of closed pull requests was searched)"
    } else {
        ""
    }
}

impl GhstatError {
    /// `true` for conditions that mean "nothing to do" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GhstatError::NoMergedPullRequest { .. })
    }

    /// Status code of the failed request, when the failure was a non-200 reply.
    pub fn status(&self) -> Option<u16> {
        match self {
            GhstatError::Status { status, .. } => Some(*status),
            GhstatError::PullRequestList(inner) => inner.status(),
            GhstatError::BranchCommits { source, .. } => source.status(),
            _ => None,
        }
    }
}

impl From<ureq::Error> for GhstatError {
    fn from(err: ureq::Error) -> Self {
        GhstatError::Http(err.to_string())
    }
}
