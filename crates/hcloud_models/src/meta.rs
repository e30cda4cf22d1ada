//! Pagination metadata carried by list responses.

use serde::{Deserialize, Serialize};

/// Metadata block of a list response envelope.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Meta {
    pub pagination: Pagination,
}

/// Declared pagination state of a list endpoint.
///
/// The navigation fields are null on the wire when there is no such page,
/// e.g. `previous_page` on the first page.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
    pub last_page: Option<u32>,
    pub total_entries: Option<u64>,
}
