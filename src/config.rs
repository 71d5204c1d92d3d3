use crate::error::{DfError, DfResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Optional settings from `~/.mrtgdf.toml`.
///
/// ```toml
/// [cache]
/// dir = "/var/cache/mrtgdf"   # default: ~/.mrtgdf
///
/// [output]
/// hostname = "fileserver"     # default: the machine's host name
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Directory holding one stats record per monitored path.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Name printed on the fourth line instead of the host name.
    #[serde(default)]
    pub hostname: Option<String>,
}

const CACHE_DIR_NAME: &str = ".mrtgdf";
const CONFIG_FILE_NAME: &str = ".mrtgdf.toml";

// ── Load ──────────────────────────────────────────────────────────────

impl Config {
    /// Load from the user's home directory. A missing file gives defaults.
    pub fn load() -> DfResult<(Self, PathBuf)> {
        let home = dirs::home_dir().ok_or(DfError::NoHome)?;
        let cfg = Self::load_from(&home.join(CONFIG_FILE_NAME))?;
        Ok((cfg, home))
    }

    pub fn load_from(path: &Path) -> DfResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(DfError::Config { path: path.to_path_buf(), reason: e.to_string() }),
        };
        toml::from_str(&text)
            .map_err(|e| DfError::Config { path: path.to_path_buf(), reason: e.message().to_string() })
    }

    /// Where cache records live: the configured directory, else `<home>/.mrtgdf`.
    pub fn cache_dir(&self, home: &Path) -> PathBuf {
        match &self.cache.dir {
            Some(d) => home.join(d),  // relative paths are taken from home
            None    => home.join(CACHE_DIR_NAME),
        }
    }
}
