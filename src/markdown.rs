//! Markdown stripping — removes Slack-style bold markup from text runs.

use std::sync::LazyLock;

use regex::Regex;

/// Matches one `*bold*` span. `[^*]+` keeps the match non-greedy across
/// multiple spans and leaves unclosed asterisks alone.
static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("bold span regex is valid"));

/// Replace each `*bolded text*` span with its inner text.
///
/// No escaping support; a lone `*` without a closing partner passes through
/// unchanged.
pub fn strip_bold(text: &str) -> String {
    BOLD_SPAN.replace_all(text, "$1").into_owned()
}
