use docopt::Docopt;
use serde::Deserialize;

use crate::error::Result;
use crate::helpers::version;
use crate::types::{SessionType, ToggleMode};

pub const USAGE: &str = "
Toggle the keyboard scroll-lock LED.

Usage:
  scroll-led [options]
  scroll-led (-h | --help)
  scroll-led --version

Options:
  -t <mode>     Toggle mode: enable, disable or auto [default: auto].
  -s <session>  Session type: x11 or tty. Detected when omitted.
  -d <prefix>   Device path prefix; the brightness suffix is appended.
  -c <file>     Settings file [default: /etc/scroll-led.conf].
  -i            Integrity check: decide everything, change nothing.
  -v            Verbose output.
  -h, --help    Show this help.
  --version     Show version.
";

#[derive(Debug, Deserialize)]
pub struct Args {
    pub flag_t: String,
    pub flag_s: Option<String>,
    pub flag_d: Option<String>,
    pub flag_c: String,
    pub flag_i: bool,
    pub flag_v: bool,
}

/// Validated command line, built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub toggle: ToggleMode,
    /// Session given with `-s`, if any.
    pub session: Option<SessionType>,
    pub device_prefix: Option<String>,
    pub settings_file: String,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Options {
    pub fn from_args(args: Args) -> Result<Self> {
        let toggle = args.flag_t.parse::<ToggleMode>()?;
        let session = match args.flag_s {
            Some(ref s) => Some(s.parse::<SessionType>()?),
            None => None,
        };

        Ok(Options {
            toggle,
            session,
            device_prefix: args.flag_d,
            settings_file: args.flag_c,
            dry_run: args.flag_i,
            verbose: args.flag_v || args.flag_i,
        })
    }
}

/// Parses `argv` (program name first). Help and version requests come back
/// as a non-fatal `Error::Usage`.
pub fn parse<I, S>(argv: I) -> Result<Options>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| {
            d.argv(argv)
                .help(true)
                .version(Some(version()))
                .deserialize()
        })?;
    Options::from_args(args)
}
