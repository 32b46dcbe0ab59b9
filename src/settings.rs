use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub led_prefix: String,
    pub led_suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Preferences {
    pub search_limit: u32,
    pub display_command: String,
    pub session_variable: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub paths: Paths,
    pub preferences: Preferences,
}

impl Settings {
    /// Defaults, overlaid with the INI file at `p` when it exists.
    pub fn new(p: &str) -> Result<Self, ConfigError> {
        let mut s = Config::builder()
            .set_default("paths.led_prefix", "/sys/class/leds/input")?
            .set_default("paths.led_suffix", "::scrolllock/brightness")?
            .set_default("preferences.search_limit", 1000_i64)?
            .set_default("preferences.display_command", "xset")?
            .set_default("preferences.session_variable", "XDG_SESSION_TYPE")?;

        if Path::new(p).is_file() {
            s = s.add_source(File::new(p, FileFormat::Ini));
        }

        s.build()?.try_deserialize()
    }
}
