use std::path::PathBuf;

/// Configuration shared by the rotation and reap passes.
///
/// Built once from the command line and passed by value to both components;
/// there is no global instance.
#[derive(Debug, Clone)]
pub struct RotateConfig {
    /// Directory where the log files are located.
    pub directory: PathBuf,
    /// Glob pattern (relative to `directory`) selecting files to rotate.
    pub pattern: String,
    /// Age in days past which a source file is archived.
    pub interval_days: f64,
    /// Age in days past which an archived file is deleted.
    pub threshold_days: f64,
    /// Delete the source file after a successful compression.
    pub remove_source: bool,
}

impl RotateConfig {
    pub fn new(directory: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            pattern: pattern.into(),
            interval_days: 1.0,
            threshold_days: 100.0,
            remove_source: false,
        }
    }

    /// Glob matching rotation candidates: `{directory}/{pattern}`.
    pub fn source_glob(&self) -> String {
        format!("{}/{}", self.directory.display(), self.pattern)
    }

    /// Glob matching existing archives: `{directory}/{pattern}.gz`.
    pub fn archive_glob(&self) -> String {
        format!("{}/{}.gz", self.directory.display(), self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RotateConfig::new("/var/log", "*.log");
        assert_eq!(config.interval_days, 1.0);
        assert_eq!(config.threshold_days, 100.0);
        assert!(!config.remove_source);
    }

    #[test]
    fn test_globs() {
        let config = RotateConfig::new("/var/log", "app.*.log");
        assert_eq!(config.source_glob(), "/var/log/app.*.log");
        assert_eq!(config.archive_glob(), "/var/log/app.*.log.gz");
    }
}
