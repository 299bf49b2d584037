/// Length of an abbreviated commit hash.
pub const SHORT_SHA_LEN: usize = 7;

pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

/// Drops a trailing URI template such as `{/sha}` from an API link.
pub fn strip_url_template(url: &str) -> &str {
    match url.find('{') {
        Some(idx) => &url[..idx],
        None => url,
    }
}
