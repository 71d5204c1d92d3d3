use crate::error::{DfError, DfResult};
use crate::models::stats::FilesystemStats;
use std::path::Path;

/// Live capacity counters for the filesystem containing `path`.
pub fn read_stats(path: &Path) -> DfResult<FilesystemStats> {
    use nix::sys::statvfs::statvfs;
    let stat = statvfs(path).map_err(|source| DfError::Statfs { path: path.to_path_buf(), source })?;

    Ok(FilesystemStats {
        blocks:           stat.blocks() as u64,
        blocks_free:      stat.blocks_free() as u64,
        blocks_available: stat.blocks_available() as u64,
        files:            stat.files() as u64,
        files_free:       stat.files_free() as u64,
    })
}
