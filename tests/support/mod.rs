//! Fake sysfs trees and a recording host for tests.
#![allow(dead_code)]

use scroll_led::app::Host;
use scroll_led::settings::{Paths, Preferences, Settings};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SUFFIX: &str = "::scrolllock/brightness";

/// Host double: answers from fields, records every command it is asked to run.
pub struct RecordingHost {
    pub indicator: Option<String>,
    pub root: bool,
    pub exit_code: Option<i32>,
    pub commands: RefCell<Vec<Vec<String>>>,
    pub root_checks: Cell<usize>,
}

impl RecordingHost {
    pub fn new(indicator: Option<&str>, root: bool) -> Self {
        Self {
            indicator: indicator.map(str::to_string),
            root,
            exit_code: Some(0),
            commands: RefCell::new(Vec::new()),
            root_checks: Cell::new(0),
        }
    }

    pub fn x11() -> Self {
        Self::new(Some("x11"), false)
    }

    pub fn tty(root: bool) -> Self {
        Self::new(Some("tty"), root)
    }

    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.borrow().clone()
    }
}

impl Host for RecordingHost {
    fn session_indicator(&self, _var: &str) -> Option<String> {
        self.indicator.clone()
    }

    fn is_root(&self) -> bool {
        self.root_checks.set(self.root_checks.get() + 1);
        self.root
    }

    fn run_command(&self, program: &str, args: &[&str]) -> std::io::Result<Option<i32>> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.commands.borrow_mut().push(call);
        Ok(self.exit_code)
    }
}

/// A directory standing in for `/sys/class/leds`.
pub struct FakeLeds {
    pub dir: TempDir,
}

impl FakeLeds {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    /// Prefix the locator counts from, e.g. `<tmp>/input`.
    pub fn prefix(&self) -> String {
        format!("{}/input", self.dir.path().display())
    }

    /// Creates `input<index>::scrolllock/brightness` holding `content`.
    pub fn add(&self, index: u32, content: &str) -> PathBuf {
        let led_dir = self.dir.path().join(format!("input{}::scrolllock", index));
        std::fs::create_dir_all(&led_dir).expect("create led dir");
        let path = led_dir.join("brightness");
        std::fs::write(&path, content).expect("write brightness");
        path
    }

    pub fn settings(&self) -> Settings {
        Settings {
            paths: Paths {
                led_prefix: self.prefix(),
                led_suffix: SUFFIX.to_string(),
            },
            preferences: Preferences {
                search_limit: 1000,
                display_command: "xset".to_string(),
                session_variable: "XDG_SESSION_TYPE".to_string(),
            },
        }
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read brightness")
}
