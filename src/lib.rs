//! Toggle the keyboard scroll-lock LED, either through the X
//! display-settings utility or by writing its sysfs brightness file.

pub mod app;
pub mod device;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod options;
pub mod session;
pub mod settings;
pub mod types;

pub use error::{Error, Result};
