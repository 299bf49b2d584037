use crate::error::Result;
use crate::github::RepoSource;
use crate::model::{
    Contributor, ContributorPulls, PullRequest, Release, RepoInfo, RepoSummary, Section,
    SummaryOutput, SCHEMA_VERSION,
};
use chrono::Utc;
use console::style;
use std::collections::{BTreeSet, HashMap};

pub const LATEST_RELEASES: usize = 3;

pub fn exec(source: &dyn RepoSource, owner: &str, repo: &str, json: bool) -> anyhow::Result<()> {
    let summary = fetch_summary(source);
    if json {
        output_json(&summary, owner, repo)
    } else {
        output_text(&summary)
    }
}

/// Runs the four summary fetches in order and folds them into a [`RepoSummary`].
/// Failed fetches are logged and fall back to zero or empty.
pub fn fetch_summary(source: &dyn RepoSource) -> RepoSummary {
    let releases = logged(Section::Releases, source.releases());
    let repo = logged(Section::Repository, source.repository());
    let contributors = logged(Section::Contributors, source.contributors());
    let pulls = logged(Section::PullRequests, source.pull_requests());
    summarize(releases, repo, contributors, pulls)
}

fn logged<T>(section: Section, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        match e.status() {
            Some(status) => tracing::error!("Failed to fetch {}: {}", section.as_str(), status),
            None => tracing::error!("Failed to fetch {}: {}", section.as_str(), e),
        }
    }
    result
}

pub fn summarize(
    releases: Result<Vec<Release>>,
    repo: Result<RepoInfo>,
    contributors: Result<Vec<Contributor>>,
    pulls: Result<Vec<PullRequest>>,
) -> RepoSummary {
    let mut unavailable = BTreeSet::new();

    let releases = match releases {
        Ok(mut all) => {
            all.truncate(LATEST_RELEASES);
            all
        }
        Err(_) => {
            unavailable.insert(Section::Releases);
            Vec::new()
        }
    };

    let repo = repo.unwrap_or_else(|_| {
        unavailable.insert(Section::Repository);
        RepoInfo::default()
    });

    let contributors_count = match contributors {
        Ok(all) => all.len() as u64,
        Err(_) => {
            unavailable.insert(Section::Contributors);
            0
        }
    };

    let (pulls_count, contributors_pulls) = match pulls {
        Ok(all) => (all.len() as u64, rank_contributors(&all)),
        Err(_) => {
            unavailable.insert(Section::PullRequests);
            (0, Vec::new())
        }
    };

    RepoSummary {
        releases,
        forks_count: repo.forks_count,
        stargazers_count: repo.stargazers_count,
        contributors_count,
        pulls_count,
        contributors_pulls,
        unavailable,
    }
}

/// Pull requests per author, most first. Ties keep the order authors were first seen.
/// Pull requests without an author are left out of the ranking.
pub fn rank_contributors(pulls: &[PullRequest]) -> Vec<ContributorPulls> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<ContributorPulls> = Vec::new();

    for pr in pulls {
        let Some(login) = pr.author() else {
            continue;
        };
        match index.get(login) {
            Some(&i) => ranked[i].pull_requests += 1,
            None => {
                index.insert(login, ranked.len());
                ranked.push(ContributorPulls {
                    login: login.to_string(),
                    pull_requests: 1,
                });
            }
        }
    }

    // sort_by is stable
    ranked.sort_by(|a, b| b.pull_requests.cmp(&a.pull_requests));
    ranked
}

pub fn render_text(summary: &RepoSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", style("Latest 3 releases:").bold()));
    for release in &summary.releases {
        out.push_str(&format!(
            "- {} (tag: {})\n",
            release.display_name(),
            style(&release.tag_name).cyan()
        ));
    }

    out.push_str(&format!("\nNumber of forks: {}\n", style(summary.forks_count).cyan()));
    out.push_str(&format!("Number of stars: {}\n", style(summary.stargazers_count).cyan()));
    out.push_str(&format!(
        "Number of contributors: {}\n",
        style(summary.contributors_count).cyan()
    ));
    out.push_str(&format!(
        "Number of pull requests: {}\n",
        style(summary.pulls_count).cyan()
    ));

    if !summary.unavailable.is_empty() {
        let names: Vec<&str> = summary.unavailable.iter().map(|s| s.as_str()).collect();
        out.push_str(&format!(
            "{}\n",
            style(format!("(unavailable: {})", names.join(", "))).dim()
        ));
    }

    out.push_str(&format!(
        "\n{}\n",
        style("Contributors sorted by number of pull requests:").bold()
    ));
    for entry in &summary.contributors_pulls {
        out.push_str(&format!(
            "- {}: {} pull requests\n",
            entry.login,
            style(entry.pull_requests).yellow()
        ));
    }

    out
}

fn output_text(summary: &RepoSummary) -> anyhow::Result<()> {
    print!("{}", render_text(summary));
    Ok(())
}

fn output_json(summary: &RepoSummary, owner: &str, repo: &str) -> anyhow::Result<()> {
    let output = SummaryOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        owner: owner.to_string(),
        repository: repo.to_string(),
        summary: summary.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
