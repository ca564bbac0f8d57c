//! Text rendering of search results

use std::fmt::Write;

use crate::types::SearchResponse;

/// Output when the instance returned no results
pub const NO_RESULTS: &str = "No results found.";

const HEADER: &str = "🔍 **SearXNG Search Results:**";

/// Render the first `limit` results in upstream order.
///
/// Each result becomes a numbered block (1-based) with the title, URL and
/// snippet on their own lines, followed by a blank line.
pub fn format_results(response: &SearchResponse, limit: usize) -> String {
    if response.results.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut output = format!("{}\n\n", HEADER);
    for (i, result) in response.results.iter().take(limit).enumerate() {
        let _ = write!(
            output,
            "{}. **{}**\n   🔗 {}\n   📄 {}\n\n",
            i + 1,
            result.title,
            result.url,
            result.content
        );
    }

    output
}
