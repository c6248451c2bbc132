//! Age-based log rotation.
//!
//! Two sequential passes over one directory: the [`Rotator`] gzips files
//! older than an interval (days) and optionally removes the originals, the
//! [`ArchiveReaper`] deletes `.gz` archives older than a retention
//! threshold. Both are driven by one [`RotateConfig`].

pub mod age;
pub mod config;
pub mod error;
pub mod reaper;
pub mod rotator;
pub mod scan;
pub mod stats;

pub use config::RotateConfig;
pub use error::{Error, Result};
pub use reaper::ArchiveReaper;
pub use rotator::Rotator;
pub use stats::{ReapStats, RotateStats};
