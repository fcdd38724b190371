//! Comma-separated free-text lists (blacklists, MeSH ids).

/// Split on `,`, trim each token and drop empty ones.
pub fn parse_text_list(input: Option<&str>) -> Vec<String> {
    input
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Inverse of `parse_text_list` for redisplaying a list in a text field.
pub fn join_text_list(items: &[String]) -> String {
    items.join(", ")
}
