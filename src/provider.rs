//! Stat-or-fallback: live statistics for mounted paths, the last stashed
//! record for paths whose volume is currently absent.

use crate::cache::CacheStore;
use crate::collectors::{mount, statfs};
use crate::error::{DfError, DfResult};
use crate::models::stats::FilesystemStats;
use std::path::Path;
use tracing::{debug, info};

/// Host queries the provider depends on.
pub trait FilesystemProbe {
    fn is_mount_point(&self, path: &Path) -> DfResult<bool>;
    fn read_stats(&self, path: &Path) -> DfResult<FilesystemStats>;
}

/// The real system: stat(2) for mount detection, statvfs(3) for counters.
pub struct HostProbe;

impl FilesystemProbe for HostProbe {
    fn is_mount_point(&self, path: &Path) -> DfResult<bool> {
        mount::is_mount_point(path)
    }

    fn read_stats(&self, path: &Path) -> DfResult<FilesystemStats> {
        statfs::read_stats(path)
    }
}

#[derive(Debug)]
pub enum StatsResult {
    Live(FilesystemStats),
    Cached(FilesystemStats),
    /// Not mounted and nothing usable cached; carries the cache miss.
    Unknown(DfError),
}

impl StatsResult {
    pub fn stats(&self) -> Option<&FilesystemStats> {
        match self {
            StatsResult::Live(s) | StatsResult::Cached(s) => Some(s),
            StatsResult::Unknown(_)                       => None,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            StatsResult::Live(_)    => "live",
            StatsResult::Cached(_)  => "cached",
            StatsResult::Unknown(_) => "unknown",
        }
    }
}

pub struct StatsProvider<P = HostProbe> {
    probe: P,
    cache: CacheStore,
}

impl StatsProvider<HostProbe> {
    pub fn new(cache: CacheStore) -> Self {
        Self::with_probe(HostProbe, cache)
    }
}

impl<P: FilesystemProbe> StatsProvider<P> {
    pub fn with_probe(probe: P, cache: CacheStore) -> Self {
        Self { probe, cache }
    }

    pub fn get_stats(&self, path: &Path) -> DfResult<StatsResult> {
        if self.probe.is_mount_point(path)? {
            let stats = self.probe.read_stats(path)?;
            if self.cache.stash(path, &stats)? {
                info!("{}: cached statistics updated", path.display());
            }
            return Ok(StatsResult::Live(stats));
        }

        debug!("{}: not mounted, falling back to cache", path.display());
        let file = self.cache.record_path(path);
        Ok(match self.cache.retrieve(path).into_result(&file) {
            Ok(stats) => StatsResult::Cached(stats),
            Err(e)    => StatsResult::Unknown(e),
        })
    }
}
