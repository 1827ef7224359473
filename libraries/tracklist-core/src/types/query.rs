//! List query, sorting and pagination types shared by client and server

use crate::types::{Track, TrackId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default page size of the list endpoint when the request omits `limit`
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Field the track list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Title,
    Artist,
    Album,
    #[default]
    CreatedAt,
}

impl SortField {
    /// All sort fields, in display order
    pub const ALL: [SortField; 4] = [
        SortField::CreatedAt,
        SortField::Title,
        SortField::Artist,
        SortField::Album,
    ];

    /// Token used by the REST API (`sort=` query parameter)
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Artist => "artist",
            SortField::Album => "album",
            SortField::CreatedAt => "createdAt",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// All sort orders, in display order
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    /// Token used by the REST API (`order=` query parameter)
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query of the "list tracks" endpoint
///
/// Serializes to the endpoint's query string; `None` fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackQuery {
    /// 1-based page index
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    /// Free-text search over title, artist and album
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Exact genre filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Artist filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

impl Default for TrackQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            sort: None,
            order: None,
            search: None,
            genre: None,
            artist: None,
        }
    }
}

impl TrackQuery {
    /// Page index clamped to at least 1
    pub fn page(&self) -> usize {
        self.page.max(1) as usize
    }

    /// Page size clamped to at least 1
    pub fn limit(&self) -> usize {
        self.limit.max(1) as usize
    }

    /// Number of records skipped before this page
    pub fn offset(&self) -> usize {
        (self.page() - 1) * self.limit()
    }
}

/// Pagination metadata returned alongside a page of tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl PaginationMeta {
    /// Build metadata for `total` matching records
    pub fn new(total: usize, page: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        }
    }
}

/// One page of the track list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPage {
    pub data: Vec<Track>,
    pub meta: PaginationMeta,
}

/// Bulk delete request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTracksRequest {
    pub ids: Vec<TrackId>,
}

/// Outcome of a bulk delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTracksResponse {
    /// Ids that were deleted
    pub success: Vec<TrackId>,
    /// Ids that could not be deleted (usually unknown ids)
    pub failed: Vec<TrackId>,
}
