mod common;

use common::{authored, release, FakeSource};
use ghstat::error::GhstatError;
use ghstat::model::{Contributor, ContributorPulls, PullRequest, RepoInfo, Section};
use ghstat::summary::{fetch_summary, rank_contributors, render_text, summarize};
use pretty_assertions::assert_eq;

fn ranking(entries: &[(&str, u64)]) -> Vec<ContributorPulls> {
    entries
        .iter()
        .map(|(login, n)| ContributorPulls {
            login: login.to_string(),
            pull_requests: *n,
        })
        .collect()
}

fn full_source() -> FakeSource {
    FakeSource {
        releases: Some(vec![
            release("Four", "v4"),
            release("Three", "v3"),
            release("Two", "v2"),
            release("One", "v1"),
        ]),
        repo: Some(RepoInfo {
            forks_count: 5,
            stargazers_count: 42,
        }),
        contributors: Some(vec![
            Contributor { login: "alice".into() },
            Contributor { login: "bob".into() },
        ]),
        pulls: Some(vec![
            authored("alice"),
            authored("bob"),
            authored("alice"),
            authored("carol"),
            authored("bob"),
        ]),
        ..Default::default()
    }
}

#[test]
fn keeps_first_three_releases_in_api_order() {
    let summary = fetch_summary(&full_source());
    let tags: Vec<&str> = summary.releases.iter().map(|r| r.tag_name.as_str()).collect();
    assert_eq!(tags, vec!["v4", "v3", "v2"]);
}

#[test]
fn fewer_than_three_releases_are_kept_as_is() {
    let summary = summarize(
        Ok(vec![release("Only", "v1")]),
        Ok(RepoInfo::default()),
        Ok(Vec::new()),
        Ok(Vec::new()),
    );
    assert_eq!(summary.releases.len(), 1);
    assert!(summary.unavailable.is_empty());
}

#[test]
fn counts_come_from_each_section() {
    let summary = fetch_summary(&full_source());
    assert_eq!(summary.forks_count, 5);
    assert_eq!(summary.stargazers_count, 42);
    assert_eq!(summary.contributors_count, 2);
    assert_eq!(summary.pulls_count, 5);
}

#[test]
fn failed_repo_info_zeroes_forks_and_stars() {
    let source = FakeSource {
        repo: None,
        ..full_source()
    };
    let summary = fetch_summary(&source);
    assert_eq!(summary.forks_count, 0);
    assert_eq!(summary.stargazers_count, 0);
    assert!(summary.unavailable.contains(&Section::Repository));
    assert_eq!(summary.contributors_count, 2);
}

#[test]
fn zero_contributors_is_not_a_failure() {
    let summary = summarize(
        Ok(Vec::new()),
        Ok(RepoInfo::default()),
        Ok(Vec::new()),
        Ok(Vec::new()),
    );
    assert_eq!(summary.contributors_count, 0);
    assert!(!summary.unavailable.contains(&Section::Contributors));

    let failed = summarize(
        Ok(Vec::new()),
        Ok(RepoInfo::default()),
        Err(GhstatError::Status {
            url: "contributors".into(),
            status: 500,
        }),
        Ok(Vec::new()),
    );
    assert_eq!(failed.contributors_count, 0);
    assert!(failed.unavailable.contains(&Section::Contributors));
}

#[test]
fn failed_pull_requests_give_empty_ranking() {
    let source = FakeSource {
        pulls: None,
        ..full_source()
    };
    let summary = fetch_summary(&source);
    assert_eq!(summary.pulls_count, 0);
    assert!(summary.contributors_pulls.is_empty());
    assert!(summary.unavailable.contains(&Section::PullRequests));
}

#[test]
fn everything_failing_still_produces_a_summary() {
    let summary = fetch_summary(&FakeSource::default());
    assert!(summary.releases.is_empty());
    assert_eq!(summary.forks_count, 0);
    assert_eq!(summary.unavailable.len(), 4);
}

#[test]
fn ranking_is_descending_and_stable() {
    let pulls = vec![
        authored("A"),
        authored("B"),
        authored("C"),
        authored("A"),
        authored("B"),
    ];
    assert_eq!(
        rank_contributors(&pulls),
        ranking(&[("A", 2), ("B", 2), ("C", 1)])
    );
}

#[test]
fn ranking_ties_follow_first_seen_order() {
    let pulls = vec![
        authored("B"),
        authored("C"),
        authored("A"),
        authored("A"),
        authored("B"),
    ];
    assert_eq!(
        rank_contributors(&pulls),
        ranking(&[("B", 2), ("A", 2), ("C", 1)])
    );
}

#[test]
fn ranking_puts_busiest_author_first() {
    let pulls = vec![authored("x"), authored("y"), authored("y"), authored("y")];
    assert_eq!(rank_contributors(&pulls), ranking(&[("y", 3), ("x", 1)]));
}

#[test]
fn pulls_from_deleted_accounts_count_but_are_not_ranked() {
    let pulls: Vec<PullRequest> = serde_json::from_str(
        r#"[
            {"number": 1, "state": "open", "head": {"ref": "a"}, "user": {"login": "alice"},
             "commits_url": "https://api.github.com/repos/octo/demo/pulls/1/commits"},
            {"number": 2, "state": "open", "head": {"ref": "b"}, "user": null,
             "commits_url": "https://api.github.com/repos/octo/demo/pulls/2/commits"},
            {"number": 3, "state": "open", "head": {"ref": "c"}, "user": {"login": "alice"},
             "commits_url": "https://api.github.com/repos/octo/demo/pulls/3/commits"}
        ]"#,
    )
    .unwrap();
    assert_eq!(pulls[1].author(), None);

    let source = FakeSource {
        pulls: Some(pulls),
        ..full_source()
    };
    let summary = fetch_summary(&source);
    assert_eq!(summary.pulls_count, 3);
    assert_eq!(summary.contributors_pulls, ranking(&[("alice", 2)]));
    assert!(!summary.unavailable.contains(&Section::PullRequests));
}

#[test]
fn text_layout_lists_releases_counts_and_ranking() {
    console::set_colors_enabled(false);
    let text = render_text(&fetch_summary(&full_source()));

    let expected = "\
Latest 3 releases:
- Four (tag: v4)
- Three (tag: v3)
- Two (tag: v2)

Number of forks: 5
Number of stars: 42
Number of contributors: 2
Number of pull requests: 5

Contributors sorted by number of pull requests:
- alice: 2 pull requests
- bob: 2 pull requests
- carol: 1 pull requests
";
    assert_eq!(text, expected);
}

#[test]
fn text_marks_unavailable_sections() {
    console::set_colors_enabled(false);
    let source = FakeSource {
        repo: None,
        releases: None,
        ..full_source()
    };
    let text = render_text(&fetch_summary(&source));
    assert!(text.contains("Number of forks: 0"));
    assert!(text.contains("(unavailable: releases, repository)"));
}
