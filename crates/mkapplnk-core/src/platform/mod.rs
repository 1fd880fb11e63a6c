//! Platform shell backends.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module.
//!
//! # Supported Platforms
//!
//! - **Windows**: the shell `AppsFolder`, via COM
//! - **Other**: [`open_shell`] fails with [`ShortcutError::UnsupportedPlatform`]

#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use win32::{ComGuard, IdList, WindowsAppEntry, WindowsShell};

use crate::error::Result;
#[cfg(not(windows))]
use crate::error::ShortcutError;
#[cfg(not(windows))]
use crate::shell::{AppEntry, AppsNamespace, LinkWriter};
#[cfg(not(windows))]
use std::path::Path;

/// The shell backend for this platform.
#[cfg(windows)]
pub type PlatformShell = WindowsShell;

/// The shell backend for this platform.
#[cfg(not(windows))]
pub type PlatformShell = UnsupportedShell;

/// Open the shell backend for this platform.
///
/// On Windows this initializes COM for the calling thread; it stays
/// initialized until the returned backend is dropped.
pub fn open_shell() -> Result<PlatformShell> {
    #[cfg(windows)]
    {
        WindowsShell::open()
    }

    #[cfg(not(windows))]
    {
        Err(ShortcutError::UnsupportedPlatform(std::env::consts::OS))
    }
}

/// Read one key from an interactive console without waiting for Enter.
///
/// `Ok(None)` when stdin is not an interactive console or the platform has no
/// single-key reads; callers then read a whole line instead.
pub fn read_console_key() -> Result<Option<char>> {
    #[cfg(windows)]
    {
        win32::read_console_key()
    }

    #[cfg(not(windows))]
    {
        Ok(None)
    }
}

/// Backend for platforms without an apps folder. Cannot be constructed.
#[cfg(not(windows))]
#[derive(Debug)]
pub enum UnsupportedShell {}

#[cfg(not(windows))]
impl AppEntry for UnsupportedShell {
    fn display_name(&self) -> Result<String> {
        match *self {}
    }

    fn app_user_model_id(&self) -> Result<String> {
        match *self {}
    }
}

#[cfg(not(windows))]
impl AppsNamespace for UnsupportedShell {
    type Entry = UnsupportedShell;
    type Target = ();

    fn entries(&self) -> Result<Box<dyn Iterator<Item = Result<Self::Entry>> + '_>> {
        match *self {}
    }

    fn absolute_target(&self, _entry: &Self::Entry) -> Result<()> {
        match *self {}
    }
}

#[cfg(not(windows))]
impl LinkWriter<()> for UnsupportedShell {
    fn save_link(&self, _description: &str, _target: &(), _path: &Path) -> Result<()> {
        match *self {}
    }
}
