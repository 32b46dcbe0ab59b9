use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

fn io_error(p: &Path, source: io::Error) -> Error {
    if source.kind() == io::ErrorKind::NotFound {
        Error::FileNotFound(p.to_path_buf())
    } else {
        Error::Io {
            path: p.to_path_buf(),
            source,
        }
    }
}

pub fn read_file_to_string(p: &Path) -> Result<String> {
    debug!("Reading file: {}", p.display());
    let mut fd = File::open(p).map_err(|e| io_error(p, e))?;
    let mut s = String::new();
    fd.read_to_string(&mut s).map_err(|e| io_error(p, e))?;
    Ok(s)
}

pub fn parse_brightness(p: &Path, s: &str) -> Result<i64> {
    s.trim_end()
        .parse::<i64>()
        .map_err(|_| Error::MalformedBrightness {
            path: p.to_path_buf(),
            content: s.to_string(),
        })
}

pub fn read_brightness(p: &Path) -> Result<i64> {
    let s = read_file_to_string(p)?;
    parse_brightness(p, &s)
}

/// Replaces the file contents with `value` and a newline.
pub fn write_line_to_file(p: &Path, value: &str) -> Result<()> {
    debug!("Writing file: {}", p.display());
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(p)
        .and_then(|mut fs| fs.write_all(format!("{}\n", value).as_bytes()))
        .map_err(|e| io_error(p, e))
}

pub fn run_as_root() -> bool {
    let euid = unsafe { libc::geteuid() };
    euid == 0
}

pub fn version() -> String {
    let (maj, min, pat) = (
        option_env!("CARGO_PKG_VERSION_MAJOR"),
        option_env!("CARGO_PKG_VERSION_MINOR"),
        option_env!("CARGO_PKG_VERSION_PATCH"),
    );
    match (maj, min, pat) {
        (Some(maj), Some(min), Some(pat)) => format!("{}.{}.{}", maj, min, pat),
        _ => "".to_owned(),
    }
}
