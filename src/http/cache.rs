//! Conditional-GET support: content-derived `ETag` values and
//! `If-None-Match` evaluation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute a quoted `ETag` from response content.
///
/// A fast non-cryptographic hash is enough here: the tag only has to
/// change when the file content changes.
pub fn etag_for(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Evaluate a client `If-None-Match` header against the current `ETag`.
///
/// Handles a single tag, a comma-separated list, and the `*` wildcard.
/// Returns true when the client copy is current and a 304 should be sent.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .any(|candidate| candidate.trim() == etag || candidate.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_shape() {
        let etag = etag_for(b"<html>OK</html>");
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_etag_tracks_content() {
        assert_eq!(etag_for(b"same"), etag_for(b"same"));
        assert_ne!(etag_for(b"one"), etag_for(b"two"));
    }

    #[test]
    fn test_if_none_match() {
        let etag = "\"deadbeef\"";
        assert!(etag_matches(Some("\"deadbeef\""), etag));
        assert!(etag_matches(Some("\"other\", \"deadbeef\""), etag));
        assert!(etag_matches(Some("*"), etag));
        assert!(!etag_matches(Some("\"stale\""), etag));
        assert!(!etag_matches(None, etag));
    }
}
