//! Mention-suggestion matching.
//!
//! Given the partial text after an `@` in the composer, return candidate
//! reviewer identities from the configured list. Matching is a
//! case-insensitive prefix match; an empty query returns everyone (the
//! composer shows the full list when the user has typed nothing yet).

/// Cap on the number of suggestions returned per query.
pub const MAX_SUGGESTIONS: usize = 10;

/// Filter `users` down to those matching the partial `query`.
pub fn suggest<'a>(users: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .map(String::as_str)
        .filter(|user| needle.is_empty() || user.to_lowercase().starts_with(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<String> {
        vec![
            "marc@example.com".into(),
            "marissa@example.com".into(),
            "theo@example.com".into(),
        ]
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let users = users();
        assert_eq!(
            suggest(&users, "Mar"),
            vec!["marc@example.com", "marissa@example.com"]
        );
    }

    #[test]
    fn empty_query_returns_everyone() {
        let users = users();
        assert_eq!(suggest(&users, "  ").len(), 3);
    }

    #[test]
    fn no_match_returns_empty() {
        let users = users();
        assert!(suggest(&users, "zeb").is_empty());
    }

    #[test]
    fn results_are_capped() {
        let many: Vec<String> = (0..30).map(|i| format!("user{i}@example.com")).collect();
        assert_eq!(suggest(&many, "user").len(), MAX_SUGGESTIONS);
    }
}
