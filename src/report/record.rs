use serde::Serialize;

/// One authored issue or pull request, normalized from a search result.
///
/// Serialized field names double as the column ids of the raw listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    pub year: i32,
    pub title: String,
    #[serde(rename = "repo")]
    pub repository: String,
    #[serde(rename = "pr")]
    pub is_pull_request: bool,
    #[serde(rename = "closed")]
    pub is_closed: bool,
}

/// Turns `https://api.github.com/repos/<owner>/<repo>` into `<owner>/<repo>`.
pub fn repository_from_url(url: &str) -> Option<String> {
    let mut segments = url.rsplit('/').filter(|s| !s.is_empty());
    let repo = segments.next()?;
    let owner = segments.next()?;
    if owner.ends_with(':') {
        return None;
    }
    Some(format!("{owner}/{repo}"))
}

/// Organization substrings whose repositories are left out of every report.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    patterns: Vec<String>,
}

impl Exclusions {
    /// Builds the exclusion list from configured organizations plus the
    /// querying account, whose own repositories never count.
    pub fn new<I, S>(orgs: I, account: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<String> = Vec::new();
        let candidates = orgs
            .into_iter()
            .map(|o| o.as_ref().trim().to_lowercase())
            .chain(std::iter::once(account.trim().to_lowercase()));
        for pattern in candidates {
            if !pattern.is_empty() && !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
        Self { patterns }
    }

    /// Returns the first pattern contained in `repository`, if any.
    pub fn matching(&self, repository: &str) -> Option<&str> {
        let repository = repository.to_lowercase();
        self.patterns
            .iter()
            .find(|p| repository.contains(p.as_str()))
            .map(String::as_str)
    }
}
