use crate::github::client::{GitHubClient, DEFAULT_API_URL};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghstat")]
#[command(about = "Get GitHub repository information and create a commit graph")]
#[command(version)]
pub struct Cli {
    #[arg(help = "GitHub token")]
    pub token: String,

    #[arg(help = "GitHub user or organization owning the repository")]
    pub user: String,

    #[arg(help = "GitHub repository name")]
    pub repo: String,

    #[arg(long = "log_to_file", value_name = "LOG_FILE", help = "Log to a specified file instead of stdout")]
    pub log_to_file: Option<PathBuf>,

    #[arg(long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, help = "Branch to create commit graph for")]
    pub branch: Option<String>,

    #[arg(long = "graph_file", default_value = "commit_graph.dot", help = "Graph file to write")]
    pub graph_file: PathBuf,

    #[arg(long, default_value = "master", help = "Branch the pull requests were merged into")]
    pub base: String,

    #[arg(long = "api_url", env = "GHSTAT_API_URL", default_value = DEFAULT_API_URL, help = "GitHub API root")]
    pub api_url: String,

    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let dispatch = crate::logging::dispatch(self.log_to_file.as_deref(), self.debug)
            .context("Failed to set up logging")?;
        tracing::dispatcher::with_default(&dispatch, || self.run())
    }

    fn run(&self) -> Result<()> {
        let client = GitHubClient::new(&self.api_url, &self.token, &self.user, &self.repo);
        tracing::debug!("Using repository {}", client.base_url());

        crate::summary::exec(&client, &self.user, &self.repo, self.json)?;

        if let Some(branch) = &self.branch {
            crate::graph::exec(&client, branch, &self.base, &self.graph_file);
        }
        Ok(())
    }
}
