use tracing::error;

use crate::client::YouTubeClient;
use crate::models::DetailRecord;
use crate::timestamp::epoch_seconds;

/// Fetch detail records for the given video ids in batches of at most
/// `max_request_items`. A failed batch is logged and contributes no records;
/// prior and subsequent batches are unaffected.
pub async fn fetch_video_details(
    client: &YouTubeClient,
    video_ids: &[String],
    max_request_items: usize,
) -> Vec<DetailRecord> {
    let mut details = Vec::new();
    if video_ids.is_empty() {
        return details;
    }
    for batch in video_ids.chunks(max_request_items.max(1)) {
        match client.list_video_details(batch).await {
            Ok(page) => {
                for item in page.items {
                    if let Some(record) = item.into_detail_record(epoch_seconds()) {
                        details.push(record);
                    }
                }
            }
            Err(err) => {
                error!(batch_size = batch.len(), error = %err, "video details request failed");
            }
        }
    }
    details
}
