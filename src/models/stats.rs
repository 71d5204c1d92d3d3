/// Capacity counters of one filesystem at one point in time, as reported by statvfs.
/// Blocks are in the filesystem's own block-size units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilesystemStats {
    pub blocks:           u64,
    pub blocks_free:      u64,
    pub blocks_available: u64,  // free blocks usable by unprivileged processes
    pub files:            u64,
    pub files_free:       u64,
}

/// Size of the on-disk cache record: five little-endian u64 counters.
pub const RECORD_LEN: usize = 5 * 8;

impl FilesystemStats {
    /// Block usage as seen by ordinary users: reserved blocks count as used.
    pub fn block_use_pct(&self) -> u32 {
        percent(self.blocks.saturating_sub(self.blocks_available), self.blocks)
    }

    pub fn inode_use_pct(&self) -> u32 {
        percent(self.files.saturating_sub(self.files_free), self.files)
    }

    pub fn to_record(&self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];
        let fields = [self.blocks, self.blocks_free, self.blocks_available, self.files, self.files_free];
        for (chunk, v) in out.chunks_exact_mut(8).zip(fields) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Decode a cache record. Returns None unless `bytes` is exactly one record long.
    pub fn from_record(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != RECORD_LEN { return None; }
        let mut f = bytes
            .chunks_exact(8)
            .map(|c| u64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]));
        Some(Self {
            blocks:           f.next()?,
            blocks_free:      f.next()?,
            blocks_available: f.next()?,
            files:            f.next()?,
            files_free:       f.next()?,
        })
    }
}

/// `count` as a rounded whole percentage of `max`; 0 when `max` is 0.
pub fn percent(count: u64, max: u64) -> u32 {
    if max == 0 { return 0; }
    (100.0 * count as f64 / max as f64).round() as u32
}
