use std::collections::HashMap;
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use serde::de::DeserializeOwned;

use crate::errors::PlaylistError;
use crate::models::{ApiErrorEnvelope, PlaylistItemsPage, VideoListPage};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
pub const PLAYLIST_ITEMS_ENDPOINT: &str = "/youtube/v3/playlistItems";
pub const VIDEOS_ENDPOINT: &str = "/youtube/v3/videos";

/// Page size cap for playlist listing and batch cap for detail requests.
pub const MAX_REQUEST_ITEMS: u32 = 50;

pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("accept", "application/json"),
    ("user-agent", "scrape-yt-playlists/0.1"),
];

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub api_key: String,
    pub base_url: Option<String>,
    pub extra_headers: HashMap<String, String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            api_key: String::new(),
            base_url: None,
            extra_headers: HashMap::new(),
        }
    }
}

/// Authorized handle to the platform API. Cheap to clone; every playlist
/// worker receives its own copy.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    options: ClientOptions,
}

impl YouTubeClient {
    pub fn new(options: ClientOptions) -> Result<Self, PlaylistError> {
        let mut headers = HeaderMap::new();
        for (name, value) in DEFAULT_HEADERS.iter() {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        for (key, value) in &options.extra_headers {
            let header_name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|err| PlaylistError::Other(format!("invalid header name: {err}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|err| PlaylistError::Other(format!("invalid header value: {err}")))?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .default_headers(headers)
            .build()
            .map_err(PlaylistError::Request)?;

        Ok(Self { client, options })
    }

    /// Fetch one page of playlist memberships. Pagination is driven by the
    /// caller via `page_token`.
    pub async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, PlaylistError> {
        let mut params = vec![
            ("part", "contentDetails,snippet".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", page_size.min(MAX_REQUEST_ITEMS).to_string()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }
        self.request(PLAYLIST_ITEMS_ENDPOINT, &params).await
    }

    /// Fetch details for one batch of video ids (the caller enforces the
    /// batch cap).
    pub async fn list_video_details(
        &self,
        video_ids: &[String],
    ) -> Result<VideoListPage, PlaylistError> {
        let params = vec![
            ("part", "snippet,contentDetails,statistics".to_string()),
            ("id", video_ids.join(",")),
        ];
        self.request(VIDEOS_ENDPOINT, &params).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlaylistError> {
        let base = self
            .options
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL);
        let mut req = self.client.get(format!("{base}{endpoint}"));
        for (k, v) in params {
            req = req.query(&[(k, v.as_str())]);
        }
        if !self.options.api_key.is_empty() {
            req = req.query(&[("key", self.options.api_key.as_str())]);
        }
        let response = req.send().await.map_err(PlaylistError::Request)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(PlaylistError::Request)?;
        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_slice::<ApiErrorEnvelope>(&bytes) {
                return Err(PlaylistError::Api {
                    code: envelope.error.code,
                    message: envelope.error.message,
                });
            }
            return Err(PlaylistError::Other(format!("HTTP request failed: {status}")));
        }
        serde_json::from_slice(&bytes)
            .map_err(|err| PlaylistError::InvalidJson(err.to_string()))
    }
}
