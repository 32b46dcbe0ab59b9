//! Error types for scroll-led.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Every error ends the run with a message on stderr.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad flag value.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("unsupported session type `{0}`")]
    UnsupportedSession(String),

    #[error("root privileges are required to write the LED in a tty session")]
    PrivilegeRequired,

    #[error("no suitable device found ({prefix}<1..{limit}>{suffix})")]
    DeviceNotFound {
        prefix: String,
        suffix: String,
        limit: u32,
    },

    #[error("device file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unexpected brightness `{}` in {}", .content.trim(), .path.display())]
    MalformedBrightness { path: PathBuf, content: String },

    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run `{program}`: {source}")]
    DisplayCommand {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),

    /// Usage errors, help and version requests. Docopt knows how to print them.
    #[error(transparent)]
    Usage(#[from] docopt::Error),
}
