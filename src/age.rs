//! File-age arithmetic shared by the rotator and the reaper.

use std::path::Path;
use std::time::SystemTime;

use crate::{Error, Result};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Age of `mtime` relative to `now`, in fractional days.
///
/// An mtime in the future clamps to 0 rather than going negative.
pub fn age_in_days(mtime: SystemTime, now: SystemTime) -> f64 {
    match now.duration_since(mtime) {
        Ok(elapsed) => elapsed.as_secs_f64() / SECONDS_PER_DAY,
        Err(_) => 0.0,
    }
}

/// Age of the file at `path` in fractional days, from its mtime.
pub fn file_age_days(path: &Path, now: SystemTime) -> Result<f64> {
    let mtime = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| Error::io(path, source))?;
    Ok(age_in_days(mtime, now))
}

/// Eligibility predicate: strictly older than the limit.
///
/// A file exactly `limit_days` old is not yet eligible.
pub fn is_expired(age_days: f64, limit_days: f64) -> bool {
    age_days > limit_days
}
