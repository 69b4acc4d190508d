//! Display name to kebab-case slug conversion.
//!
//! Used when a record has no email to derive a username from.

use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s.\-]").expect("Invalid regex pattern"));
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s._@]+").expect("Invalid regex pattern"));
static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("Invalid regex pattern"));

/// Normalize a free-text name into a lowercase, hyphen-separated slug.
///
/// Characters other than letters, digits, underscores, whitespace, hyphens
/// and periods are dropped (combining marks included, so decomposed accents
/// vanish); runs of whitespace, periods, underscores and `@` become a
/// single hyphen. The result never contains `--` and never starts or ends
/// with a hyphen. Empty or whitespace-only input yields an empty string.
///
/// ```
/// use jira_user_mapper::core::slug::normalize_name_to_slug;
///
/// assert_eq!(normalize_name_to_slug("Former User (Jira)"), "former-user-jira");
/// ```
pub fn normalize_name_to_slug(name: &str) -> String {
    if name.trim().is_empty() {
        return String::new();
    }

    let cleaned = DISALLOWED_CHARS.replace_all(name, "");
    let hyphenated = SEPARATOR_RUNS.replace_all(&cleaned, "-");
    let lowered = hyphenated.to_lowercase();
    let collapsed = HYPHEN_RUNS.replace_all(&lowered, "-");

    collapsed.trim_matches('-').to_string()
}
