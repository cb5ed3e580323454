pub mod client;
pub mod details;
pub mod errors;
pub mod export;
pub mod membership;
pub mod models;
pub mod reconcile;
pub mod timestamp;

pub use client::{
    ClientOptions, YouTubeClient, DEFAULT_BASE_URL, DEFAULT_HEADERS, MAX_REQUEST_ITEMS,
};
pub use details::fetch_video_details;
pub use errors::{ExportError, PlaylistError};
pub use export::{
    export_playlist, export_playlist_blocking, write_records, ExportOptions, ExportResult,
    FIELDNAMES,
};
pub use membership::{
    fetch_remote_memberships, read_membership_file, resolve_playlist_id, PageFailurePolicy,
    PlaylistTarget,
};
pub use models::{DetailRecord, MembershipEntry};
pub use reconcile::reconcile;
pub use timestamp::{epoch_seconds, file_timestamp};
