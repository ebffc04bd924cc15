//! Generic pagination contract shared by all module query surfaces.
//!
//! Listings accept either a key cursor or a numeric offset; the cursor takes
//! precedence when both are set. Responses return the first unreturned store
//! key so a client can resume where the previous page stopped.

use serde::{Deserialize, Serialize};

/// Pagination parameters for a list query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Cursor: resume listing at this store key (relative to the listing
    /// prefix). Takes precedence over `offset`.
    pub key: Option<Vec<u8>>,
    /// Number of matching entries to skip when no cursor is set.
    pub offset: u64,
    /// Maximum number of entries to return; 0 selects the default limit.
    pub limit: u64,
    /// Whether to count all matching entries. Only honored for offset
    /// pagination.
    pub count_total: bool,
}

impl PageRequest {
    /// Offset-based page.
    pub fn by_offset(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            ..Default::default()
        }
    }

    /// Cursor-based page.
    pub fn by_key(key: Vec<u8>, limit: u64) -> Self {
        Self {
            key: Some(key),
            limit,
            ..Default::default()
        }
    }

    /// Request the total entry count alongside the page.
    pub fn with_total(mut self) -> Self {
        self.count_total = true;
        self
    }
}

/// Pagination metadata returned with a page of results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Key of the first entry not included in this page; `None` when the
    /// listing is exhausted.
    pub next_key: Option<Vec<u8>>,
    /// Total number of matching entries, when requested.
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_builders() {
        let by_offset = PageRequest::by_offset(4, 2);
        assert_eq!(by_offset.offset, 4);
        assert_eq!(by_offset.limit, 2);
        assert!(by_offset.key.is_none());
        assert!(!by_offset.count_total);

        let by_key = PageRequest::by_key(vec![0x01], 10).with_total();
        assert_eq!(by_key.key.as_deref(), Some(&[0x01][..]));
        assert!(by_key.count_total);
    }
}
