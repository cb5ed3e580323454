use serde::{Deserialize, Serialize};

/// One "this video was added to this playlist at this time" fact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MembershipEntry {
    pub video_id: String,
    pub added_at: String,
}

/// Snapshot of one video at fetch time. Stub records carry only `id`,
/// `fetched_at` and `added_at`; all descriptive fields stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailRecord {
    pub id: String,
    pub title: Option<String>,
    pub uploaded_at: Option<String>,
    pub duration: Option<String>,
    pub view_count: Option<String>,
    pub channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub fetched_at: f64,
    pub added_at: Option<String>,
}

impl DetailRecord {
    pub fn stub(video_id: &str, fetched_at: f64, added_at: &str) -> Self {
        Self {
            id: video_id.to_string(),
            title: None,
            uploaded_at: None,
            duration: None,
            view_count: None,
            channel_id: None,
            channel_name: None,
            fetched_at,
            added_at: Some(added_at.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemsPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    #[serde(rename = "contentDetails", default)]
    pub content_details: Option<PlaylistItemContent>,
    #[serde(default)]
    pub snippet: Option<PlaylistItemSnippet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemContent {
    #[serde(rename = "videoId", default)]
    pub video_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemSnippet {
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
}

impl PlaylistItem {
    pub fn membership_entry(&self) -> Option<MembershipEntry> {
        let video_id = self
            .content_details
            .as_ref()
            .map(|content| content.video_id.trim())
            .filter(|id| !id.is_empty())?;
        let added_at = self
            .snippet
            .as_ref()
            .map(|snippet| snippet.published_at.trim().to_string())
            .unwrap_or_default();
        Some(MembershipEntry {
            video_id: video_id.to_string(),
            added_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListPage {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: Option<VideoSnippet>,
    #[serde(rename = "contentDetails", default)]
    pub content_details: Option<VideoContent>,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoContent {
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
}

impl VideoItem {
    pub fn into_detail_record(self, fetched_at: f64) -> Option<DetailRecord> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return None;
        }
        let snippet = self.snippet;
        // The platform omits viewCount for some videos; it reads as "0".
        let view_count = self
            .statistics
            .and_then(|stats| stats.view_count)
            .unwrap_or_else(|| "0".to_string());
        Some(DetailRecord {
            id,
            title: snippet.as_ref().map(|s| s.title.clone()),
            uploaded_at: snippet.as_ref().map(|s| s.published_at.clone()),
            duration: self.content_details.map(|content| content.duration),
            view_count: Some(view_count),
            channel_id: snippet.as_ref().map(|s| s.channel_id.clone()),
            channel_name: snippet.map(|s| s.channel_title),
            fetched_at,
            added_at: None,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
