//! Reap pass: delete archives past the retention threshold.

use std::fs;
use std::path::Path;
use std::time::{Instant, SystemTime};

use log::{debug, warn};

use crate::age::{age_in_days, is_expired};
use crate::config::RotateConfig;
use crate::scan::matched_paths;
use crate::stats::ReapStats;
use crate::{Error, Result};

/// Deletes `.gz` archives matching `directory/pattern.gz` that are older
/// than the configured retention threshold.
pub struct ArchiveReaper {
    config: RotateConfig,
}

impl ArchiveReaper {
    pub fn new(config: RotateConfig) -> Self {
        Self { config }
    }

    /// Run one reap pass, with the same per-file error isolation as the
    /// rotator.
    pub fn run_once(&self) -> Result<ReapStats> {
        let start = Instant::now();
        let mut stats = ReapStats::new();
        let now = SystemTime::now();

        for path in matched_paths(&self.config.archive_glob())? {
            stats.scanned_count += 1;
            match self.process_archive(&path, now) {
                Ok(deleted) => {
                    if deleted {
                        stats.deleted_count += 1;
                    }
                }
                Err(err) => {
                    warn!("reap failed for {}: {}", path.display(), err);
                    stats.record_error(format!("{}: {}", path.display(), err));
                }
            }
        }

        stats.duration = start.elapsed();
        Ok(stats)
    }

    fn process_archive(&self, path: &Path, now: SystemTime) -> Result<bool> {
        let meta = fs::metadata(path).map_err(|source| Error::io(path, source))?;
        if !meta.is_file() {
            return Ok(false);
        }

        let mtime = meta.modified().map_err(|source| Error::io(path, source))?;
        if !is_expired(age_in_days(mtime, now), self.config.threshold_days) {
            return Ok(false);
        }

        debug!("deleting: {}", path.display());
        fs::remove_file(path).map_err(|source| Error::io(path, source))?;
        Ok(true)
    }
}
