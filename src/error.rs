//! Error types for mrtgdf
//!
//! Every fallible operation returns `DfResult<T>`; `main` prints the
//! message prefixed with `ERROR: ` and exits 1.

use std::path::PathBuf;
use thiserror::Error;

pub type DfResult<T> = Result<T, DfError>;

#[derive(Error, Debug)]
pub enum DfError {
    // Path metadata
    #[error("stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("statfs {}: {source}", .path.display())]
    Statfs {
        path: PathBuf,
        #[source]
        source: nix::Error,
    },

    // Cache
    #[error("open {}: No such file or directory", .path.display())]
    CacheMiss { path: PathBuf },

    #[error("reading {}: truncated ({len} bytes)", .path.display())]
    CacheCorrupt { path: PathBuf, len: usize },

    #[error("{op} {}: {source}", .path.display())]
    CacheIo {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("creating {}: {source}", .path.display())]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Environment
    #[error("cannot determine home directory (is HOME set?)")]
    NoHome,

    #[error("reading {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("gethostname: {0}")]
    Hostname(#[source] nix::Error),

    #[error("writing stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("encoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DfError {
    pub fn stat(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Stat { path: path.into(), source }
    }

    pub fn cache_io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheIo { op, path: path.into(), source }
    }
}
