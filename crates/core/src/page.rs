//! Paged result envelope.

use serde::{Deserialize, Serialize};

/// One page of results plus paging metadata, as returned by every paged
/// remote operation. Member names follow the remote service's JSON casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PagedResult<T> {
    pub page_number: i32,
    pub entries_per_page: i32,
    pub total_entries: i32,
    pub total_pages: i32,
    pub data: Vec<T>,
}

impl<T> PagedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}
