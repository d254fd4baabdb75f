//! The backend's uniform collection wrapper.

use serde::Deserialize;

/// A collection slice as returned by the paginated report endpoints.
///
/// `entries_limit` is `-1` when the backend imposes no limit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection<T> {
    /// The entries of this slice, in backend order.
    pub entries: Vec<T>,
    /// Total number of entries matching the query.
    pub entries_found: u64,
    /// Maximum number of entries the backend will return, or -1.
    pub entries_limit: i64,
}

impl<T> Collection<T> {
    /// Returns true if this slice carries no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_deserializes_unlimited_marker() {
        let parsed: Collection<u64> = serde_json::from_str(
            r#"{"entries": [1, 2, 3], "entries_found": 3, "entries_limit": -1}"#,
        )
        .unwrap();

        assert_eq!(parsed.entries, vec![1, 2, 3]);
        assert_eq!(parsed.entries_found, 3);
        assert_eq!(parsed.entries_limit, -1);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_collection_rejects_missing_fields() {
        let result: Result<Collection<u64>, _> = serde_json::from_str(r#"{"entries": []}"#);
        assert!(result.is_err());
    }
}
