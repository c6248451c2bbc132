//! Rotation pass: gzip aged source files.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, warn};

use crate::age::{age_in_days, is_expired};
use crate::config::RotateConfig;
use crate::scan::matched_paths;
use crate::stats::RotateStats;
use crate::{Error, Result};

/// Compresses files matching `directory/pattern` that are older than the
/// configured interval, optionally deleting the originals.
pub struct Rotator {
    config: RotateConfig,
}

impl Rotator {
    pub fn new(config: RotateConfig) -> Self {
        Self { config }
    }

    /// Run one rotation pass.
    ///
    /// Per-file errors are logged, recorded in the returned stats, and do
    /// not abort the pass. Fails only on an invalid glob pattern.
    pub fn run_once(&self) -> Result<RotateStats> {
        let start = Instant::now();
        let mut stats = RotateStats::new();
        let now = SystemTime::now();

        for path in matched_paths(&self.config.source_glob())? {
            stats.scanned_count += 1;

            // Never re-gzip an existing archive; the reaper owns those.
            if path.extension().and_then(|ext| ext.to_str()) == Some("gz") {
                stats.skipped_count += 1;
                continue;
            }

            if let Err(err) = self.process_file(&path, now, &mut stats) {
                warn!("rotation failed for {}: {}", path.display(), err);
                stats.record_error(format!("{}: {}", path.display(), err));
            }
        }

        stats.duration = start.elapsed();
        Ok(stats)
    }

    fn process_file(&self, path: &Path, now: SystemTime, stats: &mut RotateStats) -> Result<()> {
        let meta = fs::metadata(path).map_err(|source| Error::io(path, source))?;
        if !meta.is_file() {
            stats.skipped_count += 1;
            return Ok(());
        }

        let mtime = meta.modified().map_err(|source| Error::io(path, source))?;
        if !is_expired(age_in_days(mtime, now), self.config.interval_days) {
            return Ok(());
        }

        debug!("archiving: {}", path.display());
        let compressed_size = compress_to_gz(path)?;
        stats.record_compression(meta.len(), compressed_size);

        // The source is only deleted after the archive is in place.
        if self.config.remove_source {
            debug!("deleting: {}", path.display());
            fs::remove_file(path).map_err(|source| Error::io(path, source))?;
            stats.removed_count += 1;
        }

        Ok(())
    }
}

/// Gzip `path` to `path.gz` at maximum compression, overwriting any
/// existing archive.
///
/// The stream is written to a `.tmp` sibling and renamed into place, so a
/// crashed run never leaves a truncated `.gz` behind. Returns the size of
/// the compressed file in bytes.
fn compress_to_gz(path: &Path) -> Result<u64> {
    let gz_path = gz_sibling(path);
    let tmp_path = tmp_path_for(&gz_path);

    // Clean up any leftover tmp file from an interrupted run.
    let _ = fs::remove_file(&tmp_path);

    let mut input = File::open(path).map_err(|source| Error::io(path, source))?;
    let output = File::create(&tmp_path).map_err(|source| Error::io(&tmp_path, source))?;

    let mut encoder = GzEncoder::new(output, Compression::best());
    io::copy(&mut input, &mut encoder).map_err(|source| Error::io(path, source))?;
    let output = encoder
        .finish()
        .map_err(|source| Error::io(&tmp_path, source))?;
    output
        .sync_all()
        .map_err(|source| Error::io(&tmp_path, source))?;

    let compressed_size = output
        .metadata()
        .map_err(|source| Error::io(&tmp_path, source))?
        .len();
    drop(output);

    fs::rename(&tmp_path, &gz_path).map_err(|source| Error::io(&gz_path, source))?;
    Ok(compressed_size)
}

fn gz_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".gz");
    PathBuf::from(name)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::tempdir;

    #[test]
    fn test_gz_sibling_keeps_full_name() {
        assert_eq!(
            gz_sibling(Path::new("/var/log/app.2026-08-01.log")),
            PathBuf::from("/var/log/app.2026-08-01.log.gz")
        );
    }

    #[test]
    fn test_compress_round_trips_bytes() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.log");
        let content = b"line one\nline two\n".repeat(200);
        fs::write(&path, &content).unwrap();

        let compressed_size = compress_to_gz(&path)?;
        assert!(compressed_size > 0);

        let gz_path = temp.path().join("a.log.gz");
        assert!(gz_path.exists());
        assert!(!temp.path().join("a.log.gz.tmp").exists());

        let mut decoded = Vec::new();
        GzDecoder::new(File::open(&gz_path).unwrap())
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, content);
        Ok(())
    }

    #[test]
    fn test_compress_overwrites_existing_archive() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.log");
        fs::write(&path, b"fresh content").unwrap();

        let gz_path = temp.path().join("a.log.gz");
        fs::write(&gz_path, b"stale archive").unwrap();

        compress_to_gz(&path)?;

        let mut decoded = Vec::new();
        GzDecoder::new(File::open(&gz_path).unwrap())
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, b"fresh content");
        Ok(())
    }

    #[test]
    fn test_compress_cleans_up_leftover_tmp() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.log");
        fs::write(&path, b"data").unwrap();
        fs::write(temp.path().join("a.log.gz.tmp"), b"leftover").unwrap();

        compress_to_gz(&path)?;

        assert!(!temp.path().join("a.log.gz.tmp").exists());
        assert!(temp.path().join("a.log.gz").exists());
        Ok(())
    }
}
