use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tokio::runtime::Builder;
use tracing::info;

use crate::client::YouTubeClient;
use crate::details::fetch_video_details;
use crate::errors::{ExportError, PlaylistError};
use crate::membership::{
    fetch_remote_memberships, read_membership_file, PageFailurePolicy, PlaylistTarget,
};
use crate::models::DetailRecord;
use crate::reconcile::reconcile;
use crate::timestamp::file_timestamp;

/// Fixed export schema. Stub records leave the descriptive cells empty;
/// detail records without a membership leave `added_at` empty.
pub const FIELDNAMES: [&str; 9] = [
    "id",
    "title",
    "uploaded_at",
    "duration",
    "view_count",
    "channel_id",
    "channel_name",
    "fetched_at",
    "added_at",
];

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub playlist_name: String,
    pub target: String,
    pub output_dir: PathBuf,
    pub page_size: u32,
    pub max_request_items: usize,
    pub page_failure_policy: PageFailurePolicy,
    pub timestamp: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            playlist_name: String::new(),
            target: String::new(),
            output_dir: PathBuf::from("."),
            page_size: 50,
            max_request_items: 50,
            page_failure_policy: PageFailurePolicy::default(),
            timestamp: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub csv_path: PathBuf,
    pub playlist_name: String,
    pub membership_count: usize,
    pub record_count: usize,
    pub elapsed: Duration,
}

/// Run the whole flow for one playlist: resolve the membership source,
/// fetch details, reconcile, and save a timestamped CSV.
pub async fn export_playlist(
    client: &YouTubeClient,
    mut options: ExportOptions,
) -> Result<ExportResult, ExportError> {
    let started = Instant::now();
    let target = PlaylistTarget::parse(&options.target).map_err(|err| {
        ExportError::from(err).context(format!("resolve target for {}", options.playlist_name))
    })?;

    let memberships = match &target {
        PlaylistTarget::File(path) => read_membership_file(path),
        PlaylistTarget::Remote(playlist_id) => {
            fetch_remote_memberships(
                client,
                playlist_id,
                options.page_size,
                options.page_failure_policy,
            )
            .await
        }
    };
    info!(
        playlist = %options.playlist_name,
        count = memberships.len(),
        "fetched playlist memberships"
    );

    let video_ids: Vec<String> = memberships
        .iter()
        .map(|entry| entry.video_id.clone())
        .collect();
    let details = fetch_video_details(client, &video_ids, options.max_request_items).await;
    let records = reconcile(&memberships, details);

    let timestamp = options.timestamp.take().unwrap_or_else(file_timestamp);
    let csv_path = options
        .output_dir
        .join(format!("{}_{}.csv", options.playlist_name, timestamp));
    write_records(&csv_path, &records).map_err(|err| {
        ExportError::from(err).context(format!("save export for {}", options.playlist_name))
    })?;

    let elapsed = started.elapsed();
    info!(
        playlist = %options.playlist_name,
        saved = records.len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "saved playlist export"
    );

    Ok(ExportResult {
        csv_path,
        playlist_name: options.playlist_name,
        membership_count: memberships.len(),
        record_count: records.len(),
        elapsed,
    })
}

pub fn export_playlist_blocking(
    client: &YouTubeClient,
    options: ExportOptions,
) -> Result<ExportResult, ExportError> {
    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| PlaylistError::Other(format!("tokio runtime init failed: {err}")))?;
    rt.block_on(export_playlist(client, options))
}

/// Serialize the reconciled set to a fresh UTF-8 CSV file under the fixed
/// schema, one row per record.
pub fn write_records(path: &Path, records: &[DetailRecord]) -> Result<(), PlaylistError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer.write_record(FIELDNAMES)?;
    for record in records {
        let fetched_at = record.fetched_at.to_string();
        writer.write_record([
            record.id.as_str(),
            record.title.as_deref().unwrap_or(""),
            record.uploaded_at.as_deref().unwrap_or(""),
            record.duration.as_deref().unwrap_or(""),
            record.view_count.as_deref().unwrap_or(""),
            record.channel_id.as_deref().unwrap_or(""),
            record.channel_name.as_deref().unwrap_or(""),
            fetched_at.as_str(),
            record.added_at.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush().map_err(PlaylistError::Io)?;
    Ok(())
}
