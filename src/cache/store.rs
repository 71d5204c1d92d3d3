use crate::cache::key;
use crate::error::{DfError, DfResult};
use crate::models::stats::{FilesystemStats, RECORD_LEN};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Outcome of looking up a path's cached record.
#[derive(Debug)]
pub enum Lookup {
    Found(FilesystemStats),
    NotFound,
    /// The file exists but is not exactly one record long.
    Corrupt { len: usize },
    Unreadable(io::Error),
}

impl Lookup {
    /// `Found` as Ok; every miss as the error to report against `file`.
    pub fn into_result(self, file: &Path) -> DfResult<FilesystemStats> {
        match self {
            Lookup::Found(s)          => Ok(s),
            Lookup::NotFound          => Err(DfError::CacheMiss { path: file.to_path_buf() }),
            Lookup::Corrupt { len }   => Err(DfError::CacheCorrupt { path: file.to_path_buf(), len }),
            Lookup::Unreadable(e)     => Err(DfError::cache_io("reading", file, e)),
        }
    }
}

/// Last-known statistics, one fixed-size record per queried path.
/// Records are never expired; the directory is created on first write.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn record_path(&self, path: &Path) -> PathBuf {
        self.dir.join(key::encode(path))
    }

    pub fn retrieve(&self, path: &Path) -> Lookup {
        let file = self.record_path(path);
        let f = match File::open(&file) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no cache record {}", file.display());
                return Lookup::NotFound;
            }
            Err(e) => return Lookup::Unreadable(e),
        };
        // One byte past a record is enough to tell a long file from a good one.
        let mut buf = Vec::with_capacity(RECORD_LEN + 1);
        if let Err(e) = f.take(RECORD_LEN as u64 + 1).read_to_end(&mut buf) {
            return Lookup::Unreadable(e);
        }
        match FilesystemStats::from_record(&buf) {
            Some(s) => Lookup::Found(s),
            None    => {
                debug!("cache record {} has {} bytes, ignoring", file.display(), buf.len());
                Lookup::Corrupt { len: buf.len() }
            }
        }
    }

    /// Persist `stats` for `path` unless the stored record already matches.
    /// Returns whether a write happened.
    pub fn stash(&self, path: &Path, stats: &FilesystemStats) -> DfResult<bool> {
        let file = self.record_path(path);
        if let Lookup::Found(cached) = self.retrieve(path) {
            if cached == *stats {
                debug!("cache record {} unchanged", file.display());
                return Ok(false);
            }
        }

        fs::create_dir_all(&self.dir)
            .map_err(|source| DfError::CacheDirCreate { path: self.dir.clone(), source })?;

        // Write beside the record, then rename over it.
        let mut tmp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| DfError::cache_io("creating", &self.dir, e))?;
        tmp.write_all(&stats.to_record())
            .map_err(|e| DfError::cache_io("writing", &file, e))?;
        tmp.persist(&file)
            .map_err(|e| DfError::cache_io("renaming", &file, e.error))?;

        debug!("cache record {} written", file.display());
        Ok(true)
    }
}
