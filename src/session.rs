//! Session detection.
//!
//! The session flag wins when given. Without it the LED is driven through
//! X only when the session indicator says `x11`; anything else, including a
//! missing variable, falls back to a direct tty write.

use tracing::debug;

use crate::types::SessionType;

pub const GRAPHICAL_SESSION: &str = "x11";

pub fn detect(indicator: Option<&str>) -> SessionType {
    match indicator {
        Some(GRAPHICAL_SESSION) => SessionType::X11,
        other => {
            debug!("session indicator {:?} is not x11, using tty", other);
            SessionType::Tty
        }
    }
}

pub fn resolve(dry_run: bool, requested: Option<SessionType>, indicator: Option<&str>) -> SessionType {
    if dry_run {
        return SessionType::Integrity;
    }
    match requested {
        Some(session) => session,
        None => detect(indicator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphical_session_keeps_x11() {
        assert_eq!(detect(Some("x11")), SessionType::X11);
    }

    #[test]
    fn anything_else_is_tty() {
        assert_eq!(detect(None), SessionType::Tty);
        assert_eq!(detect(Some("wayland")), SessionType::Tty);
        assert_eq!(detect(Some("tty")), SessionType::Tty);
        assert_eq!(detect(Some("X11")), SessionType::Tty);
    }

    #[test]
    fn explicit_flag_beats_detection() {
        assert_eq!(resolve(false, Some(SessionType::X11), Some("tty")), SessionType::X11);
        assert_eq!(resolve(false, Some(SessionType::X11), None), SessionType::X11);
        assert_eq!(resolve(false, Some(SessionType::Tty), Some("x11")), SessionType::Tty);
    }

    #[test]
    fn dry_run_beats_everything() {
        assert_eq!(resolve(true, Some(SessionType::X11), Some("x11")), SessionType::Integrity);
        assert_eq!(resolve(true, None, None), SessionType::Integrity);
    }
}
