use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Target list: playlist name to either a remote playlist reference or a
/// local `.csv` membership file.
pub fn load_targets(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read target file: {}", path.display()))?;
    let targets: BTreeMap<String, String> =
        serde_json::from_str(&content).with_context(|| "failed to parse target file")?;
    Ok(targets)
}
