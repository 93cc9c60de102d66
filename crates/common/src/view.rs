//! Capability-scoped views over the snippet collection.
//!
//! Pure filtering only; nothing here touches persisted state.

use std::collections::HashSet;

use crate::document::Snippet;

/// Derive the snippet subset visible for a request context.
///
/// In order:
/// 1. no share ids and not authenticated: nothing is visible (locked);
/// 2. share ids present: the collection filtered to those ids, in
///    collection order, whether or not the caller is authenticated;
/// 3. authenticated with no share ids: the full collection.
pub fn visible<'a>(
    collection: &'a [Snippet],
    requested_ids: Option<&HashSet<String>>,
    is_authenticated: bool,
) -> Vec<&'a Snippet> {
    match requested_ids {
        None if !is_authenticated => Vec::new(),
        Some(ids) => collection.iter().filter(|s| ids.contains(&s.id)).collect(),
        None => collection.iter().collect(),
    }
}

/// Narrow a visible set by a free-text query: case-insensitive substring
/// match over title, description, and each tag.
pub fn narrow<'a>(visible: Vec<&'a Snippet>, query: &str) -> Vec<&'a Snippet> {
    if query.is_empty() {
        return visible;
    }
    let needle = query.to_lowercase();
    visible
        .into_iter()
        .filter(|s| {
            s.title.to_lowercase().contains(&needle)
                || s.description
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
                || s.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Vec<Snippet> {
        ["a", "b", "c"]
            .iter()
            .map(|id| {
                let mut s = Snippet::new(format!("snippet {}", id), "true");
                s.id = id.to_string();
                s
            })
            .collect()
    }

    fn ids(set: &[&str]) -> HashSet<String> {
        set.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn locked_view_is_empty() {
        let all = collection();
        assert!(visible(&all, None, false).is_empty());
    }

    #[test]
    fn share_ids_filter_in_collection_order() {
        let all = collection();
        let requested = ids(&["c", "a"]);
        let seen: Vec<&str> = visible(&all, Some(&requested), false)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(seen, vec!["a", "c"]);
    }

    #[test]
    fn share_ids_apply_to_authenticated_callers_too() {
        let all = collection();
        let requested = ids(&["b"]);
        let seen: Vec<&str> = visible(&all, Some(&requested), true)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(seen, vec!["b"]);
    }

    #[test]
    fn admin_without_ids_sees_everything() {
        let all = collection();
        assert_eq!(visible(&all, None, true).len(), 3);
    }

    #[test]
    fn unknown_ids_yield_nothing() {
        let all = collection();
        let requested = ids(&["nope"]);
        assert!(visible(&all, Some(&requested), false).is_empty());
    }

    #[test]
    fn narrow_matches_title_description_and_tags() {
        let mut all = collection();
        all[0].description = Some("Rotates the frobnicator".to_string());
        all[1].tags = vec!["docker".to_string()];

        let everything = visible(&all, None, true);
        let by_desc = narrow(everything.clone(), "FROBNIC");
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc[0].id, "a");

        let by_tag = narrow(everything.clone(), "docker");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, "b");

        let by_title = narrow(everything.clone(), "snippet");
        assert_eq!(by_title.len(), 3);

        assert!(narrow(everything, "zzz").is_empty());
    }
}
