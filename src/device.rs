use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::settings::Paths;

pub fn candidate(prefix: &str, index: u32, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{}{}", prefix, index, suffix))
}

/// First `prefix<N>suffix` that is a regular file, N counting up from 1.
///
/// Only metadata is looked at; no candidate is opened.
pub fn locate(prefix: &str, suffix: &str, limit: u32) -> Result<PathBuf> {
    for index in 1..=limit {
        let path = candidate(prefix, index, suffix);
        if path.is_file() {
            info!("Found device: {}", path.display());
            return Ok(path);
        }
    }
    Err(Error::DeviceNotFound {
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
        limit,
    })
}

/// The override is used as given, with the suffix appended; it must exist.
pub fn from_override(prefix: &str, suffix: &str) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{}{}", prefix, suffix));
    if !path.is_file() {
        return Err(Error::FileNotFound(path));
    }
    debug!("Using device override: {}", path.display());
    Ok(path)
}

pub fn resolve(device_prefix: Option<&str>, paths: &Paths, limit: u32) -> Result<PathBuf> {
    match device_prefix {
        Some(prefix) => from_override(prefix, &paths.led_suffix),
        None => locate(&paths.led_prefix, &paths.led_suffix, limit),
    }
}
