//! Windows shell backend.
//!
//! Walks the `AppsFolder` known folder through `IShellFolder`, reads entry
//! properties through `IPropertyStore` and saves links with `IShellLinkW`.
//! Also reads single keys from the console for confirmations.
//! Every handle is an owned value released in `Drop`.

#![allow(unsafe_code)]

mod apps_folder;
mod com;
mod console_key;
mod id_list;
mod link;

pub use apps_folder::{WindowsAppEntry, WindowsShell};
pub use com::ComGuard;
pub use console_key::read_console_key;
pub use id_list::IdList;

use crate::error::{Result, ShortcutError};
use tracing::debug;

/// Convert the outcome of a platform call into a [`ShortcutError::Platform`].
pub(crate) fn check<T>(call: &'static str, result: windows::core::Result<T>) -> Result<T> {
    result.map_err(|err| {
        let last_error = last_error();
        debug!("{} failed: {} (last error {})", call, err.message(), last_error);
        ShortcutError::platform(call, err.code().0, last_error)
    })
}

/// The calling thread's last-error code.
pub(crate) fn last_error() -> u32 {
    // SAFETY: GetLastError only reads thread-local state.
    unsafe { windows_sys::Win32::Foundation::GetLastError() }
}
