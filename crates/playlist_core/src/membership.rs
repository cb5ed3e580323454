use std::path::{Path, PathBuf};

use tracing::{debug, error};
use url::Url;

use crate::client::YouTubeClient;
use crate::errors::PlaylistError;
use crate::models::MembershipEntry;

pub const MEMBERSHIP_FILE_SUFFIX: &str = ".csv";

/// Where a playlist's membership entries come from, decided by the shape of
/// the configured target: paths ending in `.csv` are read locally, anything
/// else is treated as a remote playlist reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistTarget {
    Remote(String),
    File(PathBuf),
}

impl PlaylistTarget {
    pub fn parse(raw: &str) -> Result<Self, PlaylistError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlaylistError::InvalidTarget(
                "empty playlist target".to_string(),
            ));
        }
        if trimmed.ends_with(MEMBERSHIP_FILE_SUFFIX) {
            return Ok(PlaylistTarget::File(PathBuf::from(trimmed)));
        }
        Ok(PlaylistTarget::Remote(resolve_playlist_id(trimmed)?))
    }
}

/// Accepts either a bare playlist id or a playlist page URL carrying a
/// `list` query parameter.
pub fn resolve_playlist_id(raw: &str) -> Result<String, PlaylistError> {
    let trimmed = raw.trim();
    if !trimmed.contains("://") {
        return Ok(trimmed.to_string());
    }
    let url = Url::parse(trimmed)
        .map_err(|err| PlaylistError::InvalidTarget(format!("URL parse failed: {err}")))?;
    for (key, value) in url.query_pairs() {
        if key == "list" {
            let cleaned = value.trim();
            if cleaned.is_empty() {
                break;
            }
            return Ok(cleaned.to_string());
        }
    }
    Err(PlaylistError::InvalidTarget(format!(
        "no list parameter in playlist URL: {trimmed}"
    )))
}

/// A failed page never advances its continuation token, so the traversal
/// gives up on the playlist once the same page has failed this many times
/// in a row.
#[derive(Debug, Clone, Copy)]
pub struct PageFailurePolicy {
    pub max_consecutive_failures: u32,
}

impl Default for PageFailurePolicy {
    fn default() -> Self {
        Self {
            max_consecutive_failures: 3,
        }
    }
}

impl PageFailurePolicy {
    /// A cap of 0 is treated as 1: every page gets at least one attempt.
    pub fn should_abort(&self, consecutive_failures: u32) -> bool {
        consecutive_failures >= self.max_consecutive_failures.max(1)
    }
}

/// Walk the remote playlist-items listing to exhaustion. A failing page
/// contributes nothing; the traversal continues until the failure policy
/// says to abort, returning whatever was collected so far.
pub async fn fetch_remote_memberships(
    client: &YouTubeClient,
    playlist_id: &str,
    page_size: u32,
    policy: PageFailurePolicy,
) -> Vec<MembershipEntry> {
    let mut entries = Vec::new();
    let mut page_token: Option<String> = None;
    let mut consecutive_failures = 0u32;
    loop {
        match client
            .list_playlist_items(playlist_id, page_size, page_token.as_deref())
            .await
        {
            Ok(page) => {
                consecutive_failures = 0;
                for item in page.items {
                    if let Some(entry) = item.membership_entry() {
                        entries.push(entry);
                    }
                }
                match page.next_page_token {
                    Some(token) => page_token = Some(token),
                    None => break,
                }
            }
            Err(err) => {
                consecutive_failures += 1;
                error!(playlist_id, error = %err, "playlist items request failed");
                if policy.should_abort(consecutive_failures) {
                    error!(
                        playlist_id,
                        consecutive_failures,
                        "giving up on playlist traversal after repeated page failures"
                    );
                    break;
                }
            }
        }
    }
    entries
}

/// Read membership entries from a local tabular file. The header row fixes
/// the expected column count; rows with a different count are skipped. A
/// missing file is logged and yields an empty sequence.
pub fn read_membership_file(path: &Path) -> Vec<MembershipEntry> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) => {
            error!(path = %path.display(), error = %err, "membership file not readable");
            return Vec::new();
        }
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut entries = Vec::new();
    let mut head_size: Option<usize> = None;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                error!(path = %path.display(), error = %err, "membership row unreadable");
                continue;
            }
        };
        let Some(expected) = head_size else {
            head_size = Some(record.len());
            continue;
        };
        if record.len() != expected {
            debug!(
                path = %path.display(),
                columns = record.len(),
                expected,
                "skipping malformed membership row"
            );
            continue;
        }
        match (record.get(0), record.get(1)) {
            (Some(video_id), Some(added_at)) => entries.push(MembershipEntry {
                video_id: video_id.trim().to_string(),
                added_at: added_at.trim().to_string(),
            }),
            _ => debug!(
                path = %path.display(),
                columns = record.len(),
                "skipping membership row without id and timestamp columns"
            ),
        }
    }
    entries
}
