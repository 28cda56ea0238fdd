/// Marker the API proxy writes in front of every outbound request it logs
const PROXY_MARKER: &str = "proxy <<";

/// Words at least one of which appears in every line an event pattern can match
const RELEVANT_KEYWORDS: [&str; 5] = ["delete", "start", "stop", "image", "create"];

/// Cheap pre-check that rejects lines no event pattern can match.
///
/// Passing the filter does not guarantee a match: `GET /images/json` is
/// relevant here but produces no event.
#[derive(Clone, Debug)]
pub struct RelevanceFilter {
    /// Lowercase marker that must be present
    marker: String,

    /// Lowercase keywords, any one of which must be present
    keywords: Vec<String>,
}

impl RelevanceFilter {
    /// Create the filter for Docker API proxy logs
    pub fn new() -> Self {
        Self {
            marker: PROXY_MARKER.to_string(),
            keywords: RELEVANT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Check whether a raw line may contain a lifecycle event
    pub fn is_relevant(&self, line: &str) -> bool {
        let lower = line.to_lowercase();

        if !lower.contains(&self.marker) {
            return false;
        }

        self.keywords.iter().any(|keyword| lower.contains(keyword))
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::new()
    }
}
