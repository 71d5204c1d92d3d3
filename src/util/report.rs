use crate::provider::StatsResult;
use serde_json::{json, Value};
use std::path::Path;

/// The four MRTG lines: block use %, inode use %, a `-` placeholder, host name.
pub fn mrtg(result: &StatsResult, hostname: &str) -> String {
    match result.stats() {
        Some(s) => format!("{}\n{}\n-\n{}\n", s.block_use_pct(), s.inode_use_pct(), hostname),
        None    => format!("UNKNOWN\nUNKNOWN\n-\n{}\n", hostname),
    }
}

/// One-shot JSON snapshot of the same data.
pub fn json(path: &Path, result: &StatsResult, hostname: &str) -> Value {
    let s = result.stats();
    json!({
        "path":             path.to_string_lossy(),
        "source":           result.source(),
        "blocks":           s.map(|s| s.blocks),
        "blocks_free":      s.map(|s| s.blocks_free),
        "blocks_available": s.map(|s| s.blocks_available),
        "files":            s.map(|s| s.files),
        "files_free":       s.map(|s| s.files_free),
        "block_use_pct":    s.map(|s| s.block_use_pct()),
        "inode_use_pct":    s.map(|s| s.inode_use_pct()),
        "hostname":         hostname,
        "timestamp":        chrono::Local::now().to_rfc3339(),
    })
}
