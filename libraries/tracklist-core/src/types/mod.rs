mod ids;
mod query;
mod track;

pub use ids::TrackId;
pub use query::{
    DeleteTracksRequest, DeleteTracksResponse, PaginationMeta, SortField, SortOrder, TrackPage,
    TrackQuery, DEFAULT_LIST_LIMIT,
};
pub use track::{CreateTrack, Track, UpdateTrack};
