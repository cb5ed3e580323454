use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;

const FILE_TS_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp used in export file names, unique per second per playlist.
pub fn file_timestamp() -> String {
    Local::now().format(FILE_TS_FORMAT).to_string()
}

/// Seconds since the UNIX epoch, recorded on each detail/stub record at the
/// moment it is built.
pub fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}
