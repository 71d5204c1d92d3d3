use crate::error::{DfError, DfResult};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// True if `path` is the root of a mounted filesystem.
///
/// A mount point sits on a different device than its parent directory; the
/// filesystem root is its own parent and so shares the parent's inode.
/// Anything else is an ordinary directory, e.g. the empty stub left behind
/// when a removable or network volume is unmounted.
pub fn is_mount_point(path: &Path) -> DfResult<bool> {
    let parent = parent_dir(path);
    let (dev, ino) = dev_ino(path)?;
    let (pdev, pino) = dev_ino(&parent)?;
    debug!("{}: dev={} ino={}, parent {}: dev={} ino={}",
        path.display(), dev, ino, parent.display(), pdev, pino);

    if dev != pdev { return Ok(true); }
    Ok(ino == pino)
}

fn dev_ino(path: &Path) -> DfResult<(u64, u64)> {
    let md = std::fs::metadata(path).map_err(|e| DfError::stat(path, e))?;
    Ok((md.dev(), md.ino()))
}

/// Directory containing `path`, with POSIX `dirname` rules:
/// trailing slashes are ignored, the parent of `/` is `/`, and a bare
/// name (or an empty path) lives in `.`.
pub fn parent_dir(path: &Path) -> PathBuf {
    let bytes = path.as_os_str().as_bytes();
    let trimmed = trim_trailing_slashes(bytes);
    if trimmed.is_empty() {
        // all slashes, or empty
        return PathBuf::from(if bytes.is_empty() { "." } else { "/" });
    }
    match trimmed.iter().rposition(|&b| b == b'/') {
        None => PathBuf::from("."),
        Some(i) => {
            let dir = trim_trailing_slashes(&trimmed[..i]);
            if dir.is_empty() {
                PathBuf::from("/")
            } else {
                PathBuf::from(OsStr::from_bytes(dir))
            }
        }
    }
}

fn trim_trailing_slashes(mut b: &[u8]) -> &[u8] {
    while let [rest @ .., b'/'] = b {
        b = rest;
    }
    b
}
