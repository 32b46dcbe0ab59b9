use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use crate::device;
use crate::error::{Error, Result};
use crate::helpers::{read_brightness, run_as_root, write_line_to_file};
use crate::options::Options;
use crate::session;
use crate::settings::Settings;
use crate::types::{LedState, SessionType, ToggleMode};

/// LED number passed to the display-settings utility.
pub const DISPLAY_LED_INDEX: &str = "3";

/// Everything the applier needs from the outside world.
pub trait Host {
    fn session_indicator(&self, var: &str) -> Option<String>;

    fn is_root(&self) -> bool;

    /// Runs `program` to completion. `None` when it was killed by a signal.
    fn run_command(&self, program: &str, args: &[&str]) -> std::io::Result<Option<i32>>;
}

pub struct SystemHost;

impl Host for SystemHost {
    fn session_indicator(&self, var: &str) -> Option<String> {
        env::var(var).ok()
    }

    fn is_root(&self) -> bool {
        run_as_root()
    }

    fn run_command(&self, program: &str, args: &[&str]) -> std::io::Result<Option<i32>> {
        Command::new(program).args(args).status().map(|s| s.code())
    }
}

/// Fully decided run. Nothing is touched until one of these exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub session: SessionType,
    pub device: PathBuf,
    pub state: LedState,
}

pub fn decide(toggle: ToggleMode, device: &Path) -> Result<LedState> {
    match toggle {
        ToggleMode::Enable => Ok(LedState::On),
        ToggleMode::Disable => Ok(LedState::Off),
        ToggleMode::Auto => {
            let current = read_brightness(device)?;
            debug!("Current brightness: {}", current);
            Ok(LedState::inverse_of(current))
        }
    }
}

pub fn plan<H: Host>(opts: &Options, s: &Settings, host: &H) -> Result<Plan> {
    let indicator = host.session_indicator(&s.preferences.session_variable);
    let session = session::resolve(opts.dry_run, opts.session, indicator.as_deref());
    info!("Session type: {}", session);

    let device = device::resolve(
        opts.device_prefix.as_deref(),
        &s.paths,
        s.preferences.search_limit,
    )?;
    let state = decide(opts.toggle, &device)?;
    info!("Turning LED {}", state);

    Ok(Plan {
        session,
        device,
        state,
    })
}

/// Performs the plan and returns the exit code.
pub fn apply<H: Host>(p: &Plan, s: &Settings, host: &H) -> Result<i32> {
    match p.session {
        SessionType::X11 => {
            let program = &s.preferences.display_command;
            let args = [p.state.display_token(), DISPLAY_LED_INDEX];
            debug!("Running: {} {}", program, args.join(" "));
            let code = host
                .run_command(program, &args)
                .map_err(|source| Error::DisplayCommand {
                    program: program.clone(),
                    source,
                })?;
            Ok(code.unwrap_or(1))
        }
        SessionType::Tty => {
            if !host.is_root() {
                return Err(Error::PrivilegeRequired);
            }
            write_line_to_file(&p.device, p.state.file_token())?;
            Ok(0)
        }
        SessionType::Integrity => {
            println!(
                "integrity check passed: would turn {} {}",
                p.state,
                p.device.display()
            );
            Ok(0)
        }
    }
}

pub fn run<H: Host>(opts: &Options, s: &Settings, host: &H) -> Result<i32> {
    let p = plan(opts, s, host)?;
    apply(&p, s, host)
}
