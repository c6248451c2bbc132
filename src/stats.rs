//! Per-pass run statistics.

use std::time::Duration;

/// Statistics from one rotation pass.
#[derive(Debug, Clone, Default)]
pub struct RotateStats {
    /// Number of glob matches examined.
    pub scanned_count: usize,
    /// Number of files compressed.
    pub compressed_count: usize,
    /// Number of source files removed after compression.
    pub removed_count: usize,
    /// Matches skipped (already `.gz`, not a regular file).
    pub skipped_count: usize,
    /// Total bytes saved by compression.
    pub bytes_saved: u64,
    /// Number of per-file errors.
    pub error_count: usize,
    /// Per-file error messages.
    pub errors: Vec<String>,
    /// Wall time for the pass.
    pub duration: Duration,
}

impl RotateStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_compression(&mut self, original_size: u64, compressed_size: u64) {
        self.compressed_count += 1;
        self.bytes_saved += original_size.saturating_sub(compressed_size);
    }

    pub fn record_error(&mut self, error: String) {
        self.error_count += 1;
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn summary(&self) -> String {
        format!(
            "scanned: {}, compressed: {}, removed: {}, skipped: {}, saved: {} bytes, errors: {}, duration: {:?}",
            self.scanned_count,
            self.compressed_count,
            self.removed_count,
            self.skipped_count,
            self.bytes_saved,
            self.error_count,
            self.duration
        )
    }
}

/// Statistics from one archive-reap pass.
#[derive(Debug, Clone, Default)]
pub struct ReapStats {
    /// Number of glob matches examined.
    pub scanned_count: usize,
    /// Number of archives deleted.
    pub deleted_count: usize,
    /// Number of per-file errors.
    pub error_count: usize,
    /// Per-file error messages.
    pub errors: Vec<String>,
    /// Wall time for the pass.
    pub duration: Duration,
}

impl ReapStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_error(&mut self, error: String) {
        self.error_count += 1;
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn summary(&self) -> String {
        format!(
            "scanned: {}, deleted: {}, errors: {}, duration: {:?}",
            self.scanned_count, self.deleted_count, self.error_count, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_stats_default() {
        let stats = RotateStats::default();
        assert_eq!(stats.scanned_count, 0);
        assert_eq!(stats.compressed_count, 0);
        assert_eq!(stats.bytes_saved, 0);
        assert!(!stats.has_errors());
    }

    #[test]
    fn test_record_compression() {
        let mut stats = RotateStats::new();

        stats.record_compression(1000, 400);
        assert_eq!(stats.compressed_count, 1);
        assert_eq!(stats.bytes_saved, 600);

        // Incompressible input never goes negative.
        stats.record_compression(100, 150);
        assert_eq!(stats.compressed_count, 2);
        assert_eq!(stats.bytes_saved, 600);
    }

    #[test]
    fn test_record_error() {
        let mut stats = ReapStats::new();

        stats.record_error("boom".to_string());
        assert_eq!(stats.error_count, 1);
        assert!(stats.has_errors());
        assert_eq!(stats.errors.len(), 1);
    }

    #[test]
    fn test_summary() {
        let mut stats = RotateStats::new();
        stats.scanned_count = 4;
        stats.compressed_count = 2;
        stats.bytes_saved = 512;

        let summary = stats.summary();
        assert!(summary.contains("scanned: 4"));
        assert!(summary.contains("compressed: 2"));
        assert!(summary.contains("saved: 512 bytes"));
    }
}
