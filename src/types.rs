use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How the change reaches the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionType {
    /// Through the X display-settings utility.
    X11,
    /// Direct write to the sysfs brightness file.
    Tty,
    /// Dry run: decide everything, touch nothing.
    Integrity,
}

impl FromStr for SessionType {
    type Err = Error;

    // Only the sessions a user may pick with `-s`; integrity comes from `-i`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x11" => Ok(SessionType::X11),
            "tty" => Ok(SessionType::Tty),
            "integrity" => Err(Error::UnsupportedSession(s.to_string())),
            _ => Err(Error::InvalidArgument(format!(
                "invalid session type `{}` (expected x11 or tty)",
                s
            ))),
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            SessionType::X11 => "x11",
            SessionType::Tty => "tty",
            SessionType::Integrity => "integrity",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleMode {
    Enable,
    Disable,
    /// Read the current brightness and invert it.
    Auto,
}

impl FromStr for ToggleMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enable" => Ok(ToggleMode::Enable),
            "disable" => Ok(ToggleMode::Disable),
            "auto" => Ok(ToggleMode::Auto),
            _ => Err(Error::InvalidArgument(format!(
                "invalid toggle mode `{}` (expected enable, disable or auto)",
                s
            ))),
        }
    }
}

/// The state the LED is driven to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    /// Value written to the brightness file.
    pub fn file_token(self) -> &'static str {
        match self {
            LedState::On => "1",
            LedState::Off => "0",
        }
    }

    /// Argument handed to the display-settings utility.
    pub fn display_token(self) -> &'static str {
        match self {
            LedState::On => "led",
            LedState::Off => "-led",
        }
    }

    /// Anything below 1 counts as off, so the toggle turns it on.
    pub fn inverse_of(brightness: i64) -> LedState {
        if brightness < 1 {
            LedState::On
        } else {
            LedState::Off
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedState::On => f.write_str("on"),
            LedState::Off => f.write_str("off"),
        }
    }
}
